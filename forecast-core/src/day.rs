use chrono::NaiveDate;

use crate::error::InvalidDate;

const ISO_DATE: &str = "%Y-%m-%d";

/// Long English weekday name ("Monday") for an ISO `YYYY-MM-DD` date.
///
/// The date is taken as a plain calendar date; no time zone is applied.
pub fn day_name(date: &str) -> Result<String, InvalidDate> {
    let parsed = NaiveDate::parse_from_str(date, ISO_DATE).map_err(|source| InvalidDate {
        input: date.to_owned(),
        source,
    })?;

    Ok(parsed.format("%A").to_string())
}
