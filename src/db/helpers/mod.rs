use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;

use crate::date::{DATE_FORMAT, TIME_FORMAT};
use crate::{Error, Result};

fn conversion_failure(field: &str, value: &str, err: impl std::fmt::Display) -> Error {
    Error::Storage(rusqlite::Error::FromSqlConversionFailure(
        0,
        Type::Text,
        format!("invalid {field} '{value}': {err}").into(),
    ))
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| conversion_failure(field, value, err))
}

pub fn parse_time(value: &str, field: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|err| conversion_failure(field, value, err))
}
