//! The ordered ring of boundary vertices.

use geo::{Line, Point};
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::dataset::MKAD_KM;
use crate::models::BoundaryVertex;

/// Minimum vertex count for a closed polygon.
pub const MIN_VERTICES: usize = 3;

/// Reasons a boundary dataset is refused at startup.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("boundary needs at least {} vertices, got {0}", MIN_VERTICES)]
    TooFewVertices(usize),
    #[error("vertex {index} has implausible coordinates ({lat}, {lon})")]
    VertexOutOfRange { index: u32, lat: f64, lon: f64 },
    #[error("vertex index {index} does not follow {previous}")]
    IndexOutOfOrder { previous: u32, index: u32 },
    #[error("failed to read boundary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse boundary file: {0}")]
    Csv(#[from] csv::Error),
}

/// Closed boundary curve: vertex `i` connects to `i + 1`, and the last vertex
/// connects back to the first.
///
/// The vertex order is the traversal order of the road and is never
/// re-sorted; the narrowing search in `ApproximateSearch` depends on it.
#[derive(Debug, Clone)]
pub struct BoundaryCurve {
    vertices: Vec<BoundaryVertex>,
    points: Vec<Point<f64>>,
}

impl BoundaryCurve {
    /// Validate and build a curve from vertices in traversal order.
    pub fn from_vertices(vertices: Vec<BoundaryVertex>) -> Result<Self, BoundaryError> {
        if vertices.len() < MIN_VERTICES {
            return Err(BoundaryError::TooFewVertices(vertices.len()));
        }

        let mut previous: Option<u32> = None;
        for v in &vertices {
            let plausible = v.lat.is_finite()
                && v.lon.is_finite()
                && (-90.0..=90.0).contains(&v.lat)
                && (-180.0..=180.0).contains(&v.lon);
            if !plausible {
                return Err(BoundaryError::VertexOutOfRange {
                    index: v.index,
                    lat: v.lat,
                    lon: v.lon,
                });
            }
            if let Some(prev) = previous {
                if v.index <= prev {
                    return Err(BoundaryError::IndexOutOfOrder {
                        previous: prev,
                        index: v.index,
                    });
                }
            }
            previous = Some(v.index);
        }

        let points = vertices.iter().map(|v| v.to_point()).collect();
        Ok(Self { vertices, points })
    }

    /// The built-in MKAD kilometer-marker ring.
    pub fn mkad() -> Result<Self, BoundaryError> {
        let vertices = MKAD_KM
            .iter()
            .map(|&(km, lat, lon)| BoundaryVertex::new(km, lat, lon))
            .collect();
        Self::from_vertices(vertices)
    }

    /// Load a ring from CSV with an `index,latitude,longitude` header.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, BoundaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut vertices = Vec::new();
        for record in csv_reader.deserialize() {
            let vertex: BoundaryVertex = record?;
            vertices.push(vertex);
        }

        Self::from_vertices(vertices)
    }

    /// Load a ring from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, BoundaryError> {
        let path = path.as_ref();
        info!("Loading boundary from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    /// Vertices in traversal order.
    pub fn vertices(&self) -> &[BoundaryVertex] {
        &self.vertices
    }

    /// Vertex positions as planar points (x = lon, y = lat), same order as `vertices`.
    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    /// Planar point of vertex `i`. Panics if `i` is out of range.
    pub fn point(&self, i: usize) -> Point<f64> {
        self.points[i]
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated curve.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every edge of the ring, including the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Line<f64>> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<BoundaryVertex> {
        vec![
            BoundaryVertex::new(1, 0.0, 0.0),
            BoundaryVertex::new(2, 0.0, 1.0),
            BoundaryVertex::new(3, 1.0, 1.0),
            BoundaryVertex::new(4, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_mkad_dataset_is_valid() {
        let curve = BoundaryCurve::mkad().unwrap();
        assert_eq!(curve.len(), 108);
        assert_eq!(curve.vertices()[0].index, 1);
        assert_eq!(curve.vertices()[107].index, 108);
        assert_eq!(curve.points().len(), curve.len());
    }

    #[test]
    fn test_too_few_vertices() {
        let err = BoundaryCurve::from_vertices(vec![]).unwrap_err();
        assert!(matches!(err, BoundaryError::TooFewVertices(0)));

        let err = BoundaryCurve::from_vertices(square()[..2].to_vec()).unwrap_err();
        assert!(matches!(err, BoundaryError::TooFewVertices(2)));
    }

    #[test]
    fn test_vertex_out_of_range() {
        let mut vertices = square();
        vertices[2].lat = 95.0;
        let err = BoundaryCurve::from_vertices(vertices).unwrap_err();
        assert!(matches!(err, BoundaryError::VertexOutOfRange { index: 3, .. }));

        let mut vertices = square();
        vertices[0].lon = f64::NAN;
        assert!(BoundaryCurve::from_vertices(vertices).is_err());
    }

    #[test]
    fn test_index_out_of_order() {
        let mut vertices = square();
        vertices.swap(1, 2);
        let err = BoundaryCurve::from_vertices(vertices).unwrap_err();
        assert!(matches!(
            err,
            BoundaryError::IndexOutOfOrder {
                previous: 3,
                index: 2
            }
        ));
    }

    #[test]
    fn test_edges_include_closing_edge() {
        let curve = BoundaryCurve::from_vertices(square()).unwrap();
        let edges: Vec<Line<f64>> = curve.edges().collect();
        assert_eq!(edges.len(), 4);

        let closing = edges[3];
        assert_eq!(closing.start, curve.point(3).0);
        assert_eq!(closing.end, curve.point(0).0);
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "index,latitude,longitude\n1, 55.0, 37.0\n2,55.0,38.0\n3,56.0,38.0\n";
        let curve = BoundaryCurve::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.vertices()[1], BoundaryVertex::new(2, 55.0, 38.0));
        // x is longitude
        assert_eq!(curve.point(0).x(), 37.0);
    }

    #[test]
    fn test_from_csv_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "index,latitude,longitude").unwrap();
        for (i, (lat, lon)) in [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)].iter().enumerate() {
            writeln!(file, "{},{},{}", i, lat, lon).unwrap();
        }
        file.flush().unwrap();

        let curve = BoundaryCurve::from_csv_path(file.path()).unwrap();
        assert_eq!(curve.len(), 3);
    }

    #[test]
    fn test_from_csv_malformed() {
        let data = "index,latitude,longitude\n1,abc,37.0\n";
        let err = BoundaryCurve::from_csv_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BoundaryError::Csv(_)));

        let err = BoundaryCurve::from_csv_path("/nonexistent/ring.csv").unwrap_err();
        assert!(matches!(err, BoundaryError::Io(_)));
    }
}
