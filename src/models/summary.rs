use serde::Serialize;

/// Total hours logged against one project. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project: String,
    pub total_hours: f64,
}
