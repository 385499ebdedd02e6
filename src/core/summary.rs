use crate::db::pool::DbPool;
use crate::db::queries::sum_duration_by_project;
use crate::errors::AppResult;
use crate::models::summary::ProjectSummary;

pub struct SummaryLogic;

impl SummaryLogic {
    /// Total hours per project. Projects without sessions are not listed.
    pub fn summarize(pool: &DbPool) -> AppResult<Vec<ProjectSummary>> {
        pool.with_conn(|conn| sum_duration_by_project(conn))
    }
}
