//! Wall-clock reads used while rendering.

use dioxus::logger::tracing::debug;
use time::{error::IndeterminateOffset, OffsetDateTime};

/// Calendar year in the host's local time zone.
///
/// Falls back to UTC when the local offset cannot be determined (e.g. a
/// multi-threaded process on some Unix targets).
pub fn current_year() -> i32 {
    year_or_utc(OffsetDateTime::now_local())
}

// Runs on every footer render, so the fallback is logged at debug level.
fn year_or_utc(local: Result<OffsetDateTime, IndeterminateOffset>) -> i32 {
    local
        .unwrap_or_else(|err| {
            debug!("local offset unavailable ({err}); using UTC");
            OffsetDateTime::now_utc()
        })
        .year()
}
