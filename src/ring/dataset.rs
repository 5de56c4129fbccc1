//! MKAD kilometer markers as `(km, latitude, longitude)`, clockwise from the
//! eastern leg. Vertex order follows the road; the last marker connects back to the first.

pub(crate) const MKAD_KM: [(u32, f64, f64); 108] = [
    (1, 55.774558, 37.842762),
    (2, 55.76522, 37.842789),
    (3, 55.755723, 37.842627),
    (4, 55.747399, 37.841828),
    (5, 55.739103, 37.841217),
    (6, 55.730482, 37.840175),
    (7, 55.721939, 37.83916),
    (8, 55.712203, 37.837121),
    (9, 55.703048, 37.83262),
    (10, 55.694287, 37.829512),
    (11, 55.68529, 37.831353),
    (12, 55.675945, 37.834605),
    (13, 55.667752, 37.837597),
    (14, 55.658667, 37.839348),
    (15, 55.650053, 37.833842),
    (16, 55.643713, 37.824787),
    (17, 55.637347, 37.814564),
    (18, 55.62913, 37.802473),
    (19, 55.623758, 37.794235),
    (20, 55.617713, 37.781928),
    (21, 55.611755, 37.771139),
    (22, 55.604956, 37.758725),
    (23, 55.599677, 37.747945),
    (24, 55.594143, 37.734785),
    (25, 55.589234, 37.723062),
    (26, 55.583983, 37.709425),
    (27, 55.578834, 37.696256),
    (28, 55.574019, 37.683167),
    (29, 55.571999, 37.668911),
    (30, 55.573093, 37.647765),
    (31, 55.573928, 37.633419),
    (32, 55.574732, 37.616719),
    (33, 55.575816, 37.60107),
    (34, 55.5778, 37.586536),
    (35, 55.581271, 37.571938),
    (36, 55.585143, 37.555732),
    (37, 55.587509, 37.545132),
    (38, 55.5922, 37.526366),
    (39, 55.594728, 37.516108),
    (40, 55.60249, 37.502274),
    (41, 55.609685, 37.49391),
    (42, 55.617424, 37.484846),
    (43, 55.625801, 37.474668),
    (44, 55.630207, 37.469925),
    (45, 55.641041, 37.456864),
    (46, 55.648794, 37.448195),
    (47, 55.654675, 37.441125),
    (48, 55.660424, 37.434424),
    (49, 55.670701, 37.42598),
    (50, 55.67994, 37.418712),
    (51, 55.686873, 37.414868),
    (52, 55.695697, 37.407528),
    (53, 55.702805, 37.397952),
    (54, 55.709657, 37.388969),
    (55, 55.718273, 37.383283),
    (56, 55.728581, 37.378369),
    (57, 55.735201, 37.374991),
    (58, 55.744789, 37.370248),
    (59, 55.75435, 37.369188),
    (60, 55.762936, 37.369053),
    (61, 55.771444, 37.369619),
    (62, 55.779722, 37.369853),
    (63, 55.789542, 37.372943),
    (64, 55.79723, 37.379824),
    (65, 55.805796, 37.386876),
    (66, 55.814629, 37.390397),
    (67, 55.823606, 37.393236),
    (68, 55.83251, 37.395275),
    (69, 55.840376, 37.394709),
    (70, 55.850141, 37.393056),
    (71, 55.858801, 37.397314),
    (72, 55.867051, 37.405588),
    (73, 55.872703, 37.416601),
    (74, 55.877041, 37.429429),
    (75, 55.881091, 37.443596),
    (76, 55.882828, 37.459065),
    (77, 55.884625, 37.473096),
    (78, 55.888897, 37.48861),
    (79, 55.894232, 37.5016),
    (80, 55.899578, 37.513206),
    (81, 55.90526, 37.527597),
    (82, 55.907687, 37.543443),
    (83, 55.909388, 37.559577),
    (84, 55.910907, 37.575531),
    (85, 55.909257, 37.590344),
    (86, 55.905472, 37.604637),
    (87, 55.901637, 37.619603),
    (88, 55.898533, 37.635961),
    (89, 55.896973, 37.647648),
    (90, 55.895449, 37.667878),
    (91, 55.894868, 37.681721),
    (92, 55.893884, 37.698807),
    (93, 55.889094, 37.712363),
    (94, 55.883555, 37.723636),
    (95, 55.877501, 37.735791),
    (96, 55.874698, 37.741261),
    (97, 55.862464, 37.764519),
    (98, 55.861979, 37.765992),
    (99, 55.850257, 37.788216),
    (100, 55.850383, 37.788522),
    (101, 55.844167, 37.800586),
    (102, 55.832707, 37.822819),
    (103, 55.828789, 37.829754),
    (104, 55.821072, 37.837148),
    (105, 55.811599, 37.838926),
    (106, 55.802781, 37.840004),
    (107, 55.793991, 37.840965),
    (108, 55.785017, 37.841576),
];
