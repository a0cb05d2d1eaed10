//! Weekly option expiry calendar.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Friday of the calendar week (Monday-start) containing `today`.
///
/// Today itself on a Friday; on Saturday and Sunday this is the Friday
/// already past, never the next one.
pub fn this_week_friday(today: NaiveDate) -> NaiveDate {
    let offset = 4 - i64::from(today.weekday().num_days_from_monday());
    today + Duration::days(offset)
}

/// [`this_week_friday`] for the local calendar date.
pub fn this_week_friday_local() -> NaiveDate {
    this_week_friday(Local::now().date_naive())
}
