//! Activity log loading and ordering.

use std::cmp::Ordering;

use tracing::warn;

use crate::models::ActivityRecord;
use crate::service::AccountService;

pub const LOAD_FAILED: &str = "Unable to load activity log. Please try again later.";
pub const NO_ACTIVITY: &str = "No activities found.";

/// What the activity page shows once loading is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityView {
    /// Records, most recent first.
    Records(Vec<ActivityRecord>),
    Empty,
    Failed(String),
}

/// Sort records newest first.
///
/// Equal instants keep their original order. Records whose timestamp does not
/// parse go after every parseable one.
pub fn sort_by_recency(mut records: Vec<ActivityRecord>) -> Vec<ActivityRecord> {
    records.sort_by(|a, b| match (a.instant(), b.instant()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    records
}

pub async fn load<S: AccountService>(service: &S) -> ActivityView {
    match service.activity().await {
        Ok(records) if records.is_empty() => ActivityView::Empty,
        Ok(records) => ActivityView::Records(sort_by_recency(records)),
        Err(e) => {
            warn!("failed to fetch activity log: {e}");
            ActivityView::Failed(LOAD_FAILED.to_string())
        }
    }
}
