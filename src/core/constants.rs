//! Core constants for the reference grid.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Latitude of the fixed grid origin, in degrees.
pub const GRID_ORIGIN_LAT: f64 = 20.0;

/// Longitude of the fixed grid origin, in degrees.
pub const GRID_ORIGIN_LNG: f64 = 122.0;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_132.0;

/// Meters spanned by one degree of longitude at the equator.
/// Scaled by `cos(origin latitude)`, never the local latitude.
pub const METERS_PER_DEGREE_LNG_EQUATOR: f64 = 111_320.0;

/// No grid is drawn below this zoom level.
pub const GRID_MIN_ZOOM: f64 = 11.0;

/// Lower zoom bound of the 5 m tier.
pub const ZOOM_TIER_5M: f64 = 19.0;

/// Lower zoom bound of the 50 m tier.
pub const ZOOM_TIER_50M: f64 = 16.0;

/// Lower zoom bound of the 500 m tier. Anything below falls into 5 km.
pub const ZOOM_TIER_500M: f64 = 13.0;

/// Mean earth radius used for great-circle lengths (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Widest longitude span a viewport may cover, in degrees.
pub const MAX_LNG_SPAN: f64 = 360.0;

/// Stable style ids for the grid slot.
pub const GRID_SOURCE_ID: &str = "grid-source";
pub const GRID_LAYER_ID: &str = "grid-layer";

/// Stable style ids for the highlighted cell slot.
pub const HIGHLIGHT_SOURCE_ID: &str = "highlight-source";
pub const HIGHLIGHT_LAYER_ID: &str = "highlight-layer";

/// Stable style ids for the route slot.
pub const ROUTE_SOURCE_ID: &str = "route-source";
pub const ROUTE_LAYER_ID: &str = "route-layer";

/// Text hosts put in front of the size label by default.
pub const DEFAULT_LABEL_PREFIX: &str = "Grid: ";
