//! Business calendar helpers
//!
//! Pure date arithmetic used by the rental rules. Nothing here reads the
//! system clock: callers pass the instants they care about. Day comparisons
//! are evaluated in the offset of the reference instant (the second argument),
//! which is the clock's business offset when called from the service.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Weekday};

/// Days a rental stays out before it is due
pub const RENTAL_PERIOD_DAYS: i64 = 1;

/// Check whether `date` falls on `weekday`
pub fn is_weekday(date: DateTime<FixedOffset>, weekday: Weekday) -> bool {
    date.weekday() == weekday
}

/// Shift `date` by `days` calendar days (negative goes back).
/// Returns `None` when the result leaves chrono's representable range.
pub fn add_days(date: DateTime<FixedOffset>, days: i64) -> Option<DateTime<FixedOffset>> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Due date for a rental taken at `rented_at`.
///
/// The store is closed on Sundays, so anything that would come back on a
/// Sunday (i.e. rented on a Saturday) is due the following Monday.
pub fn due_date_for(rented_at: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let due = add_days(rented_at, RENTAL_PERIOD_DAYS)?;
    if is_weekday(due, Weekday::Sun) {
        add_days(due, 1)
    } else {
        Some(due)
    }
}

/// Check whether `a` falls on the same calendar day as `reference`
pub fn is_same_day(a: DateTime<FixedOffset>, reference: DateTime<FixedOffset>) -> bool {
    local_date(a, reference.timezone()) == reference.date_naive()
}

/// Check whether `a` falls on a calendar day strictly before `reference`'s
pub fn is_before_day(a: DateTime<FixedOffset>, reference: DateTime<FixedOffset>) -> bool {
    local_date(a, reference.timezone()) < reference.date_naive()
}

fn local_date(date: DateTime<FixedOffset>, offset: FixedOffset) -> NaiveDate {
    date.with_timezone(&offset).date_naive()
}
