use std::fmt;

use crate::constants::PATH_SEPARATOR;

/// Route details shown to the user after a successful request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub path: Vec<String>,
    pub weight: f64,
    pub applied_rules: Vec<String>,
}

impl RouteSummary {
    #[must_use]
    pub fn path_text(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }

    #[must_use]
    pub fn weight_text(&self) -> String {
        self.weight.to_string()
    }

    #[must_use]
    pub fn rules_text(&self) -> String {
        if self.applied_rules.is_empty() {
            "none".to_string()
        } else {
            self.applied_rules.join(", ")
        }
    }
}

/// Contents of the status area under the route form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteStatus {
    #[default]
    Idle,
    InProgress,
    NoRoute { detail: Option<String> },
    Summary(RouteSummary),
    Error(String),
}

impl RouteStatus {
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::InProgress => write!(f, "Calculating route..."),
            Self::NoRoute { detail: None } => write!(f, "No route found"),
            Self::NoRoute { detail: Some(detail) } => write!(f, "No route found: {detail}"),
            Self::Summary(summary) => write!(
                f,
                "Route: {} | Total weight: {} | Applied rules: {}",
                summary.path_text(),
                summary.weight_text(),
                summary.rules_text()
            ),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}
