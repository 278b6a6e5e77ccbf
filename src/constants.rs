/// Edge length of the square node marker, in layout units
pub const MARKER_SIZE: f64 = 40.0;

/// Segments start at the marker centre rather than its top-left corner
pub const SEGMENT_ANCHOR_OFFSET: f64 = MARKER_SIZE / 2.0;

/// Thickness of a rendered route segment
pub const SEGMENT_THICKNESS: f64 = 2.0;

/// Path of the routing service endpoint, relative to the service origin
pub const ROUTE_ENDPOINT: &str = "/route";

/// Service origin used when the page origin cannot be determined
pub const DEFAULT_SERVICE_ORIGIN: &str = "http://127.0.0.1:8000";

/// Upper bound on a single routing request, in milliseconds
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Separator used when listing the stops of a route
pub const PATH_SEPARATOR: &str = " → ";
