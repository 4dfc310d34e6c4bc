use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One chat message. Append-only; never updated or deleted by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub username: String,
    pub group: String,
    pub text: String,
}
