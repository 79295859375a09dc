use crate::domain::ports::Clock;
use chrono::{Locale, NaiveDateTime, TimeZone, Utc};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub date: String,
    pub time: String,
}

impl ClockReading {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            date: format_date(now),
            time: format_time(now),
        }
    }
}

/// Long German date, e.g. `Mittwoch, 12. Juni 2024`.
pub fn format_date(now: NaiveDateTime) -> String {
    // Wall-clock value; the zone only carries it into the localized formatter.
    Utc.from_utc_datetime(&now)
        .format_localized("%A, %-d. %B %Y", Locale::de_DE)
        .to_string()
}

/// 24-hour `HH:MM:SS`.
pub fn format_time(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Emits a reading every second until `ticks` readings were produced, or forever.
/// The first reading is emitted immediately.
pub async fn run_clock<C, F>(clock: &C, ticks: Option<u64>, mut sink: F)
where
    C: Clock + ?Sized,
    F: FnMut(ClockReading),
{
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut emitted = 0u64;
    while ticks.map_or(true, |limit| emitted < limit) {
        ticker.tick().await;
        let reading = ClockReading::at(clock.now());
        tracing::trace!("clock tick {} {}", reading.date, reading.time);
        sink(reading);
        emitted += 1;
    }
}
