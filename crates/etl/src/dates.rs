use crate::ETLError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound};

/// Converts a caller supplied date into Unix seconds. Dates without an offset
/// are read as UTC, a bare date as its midnight.
pub fn parse_date(input: &str) -> Result<i64, ETLError> {
    let trimmed = input.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.timestamp());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
        .ok_or_else(|| ETLError::InvalidDate(input.to_string()))
}

/// Parses the `time` column of a transfer into a datetime with whole seconds.
/// The wall clock time of the string is kept; any offset is dropped.
pub fn parse_transfer_time(time: &str) -> Option<NaiveDateTime> {
    let trimmed = time.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Some(parsed.trunc_subsecs(0))
}
