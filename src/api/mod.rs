pub mod route;
pub mod status;

pub use route::{parse_budget, Preferences, RouteClient, RouteError, RouteOutcome, RouteRequest, RouteResponse};
pub use status::{RouteStatus, RouteSummary};
