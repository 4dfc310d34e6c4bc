use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted menu line. `category` is the place name (position 0 of the
/// normalized menu); `item` is one display-ready line under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuRecord {
    pub date: NaiveDate,
    pub category: String,
    pub item: String,
}
