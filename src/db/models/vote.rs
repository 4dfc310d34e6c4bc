use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (place, time) selection by one user. A submission stores the full
/// cartesian product of the user's selected places and times; resubmitting
/// replaces all rows for the same (date, username, group).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteRecord {
    pub date: NaiveDate,
    pub username: String,
    pub group: String,
    pub place: String,
    pub time: String,
}
