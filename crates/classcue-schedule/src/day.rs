//! Calendar date to school-week day code.

use chrono::{Datelike, Duration, NaiveDate};

use classcue_models::DayCode;

/// Maps a date to its school-week day code.
///
/// Monday to Friday map to `M`, `T`, `W`, `Th`, `F`. Saturday and Sunday
/// fall back to `M`: the resolver never reports "no school". Callers that
/// need to know about weekends check [`is_school_weekday`].
pub fn resolve_day_code(date: impl Datelike) -> DayCode {
    let index = date.weekday().num_days_from_monday() as usize;
    DayCode::SCHOOL_WEEK
        .get(index)
        .copied()
        .unwrap_or(DayCode::Monday)
}

/// Whether the raw weekday of `date` is Monday to Friday.
pub fn is_school_weekday(date: impl Datelike) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
