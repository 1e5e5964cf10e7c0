//! Durations: elapsed time between two instants.
//!
//! Hour, day and week carry Dutch and German abbreviations, so `"3 u"` parses as three hours under an `nl` locale
//! and `"2 Tag"` as two days under `de`.

use crate::{Quantity, Unit};

/// An amount of elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "s",
    units = [SECOND, MILLISECOND, MICROSECOND, NANOSECOND, MINUTE, HOUR, DAY, WEEK]
)]
pub enum Duration {}

/// Second.
pub const SECOND: Unit<Duration> = Unit::new("s", "second", 1.0).aliases(&["sec"]);
/// Millisecond.
pub const MILLISECOND: Unit<Duration> = Unit::new("ms", "millisecond", 1e-3);
/// Microsecond.
pub const MICROSECOND: Unit<Duration> = Unit::new("µs", "microsecond", 1e-6).aliases(&["us"]);
/// Nanosecond.
pub const NANOSECOND: Unit<Duration> = Unit::new("ns", "nanosecond", 1e-9);
/// Minute.
pub const MINUTE: Unit<Duration> = Unit::new("min", "minute", 60.0);
/// Hour.
pub const HOUR: Unit<Duration> = Unit::new("h", "hour", 3600.0).localized(&[("nl", "u"), ("de", "Std")]);
/// Day of 86 400 seconds.
pub const DAY: Unit<Duration> = Unit::new("d", "day", 86_400.0).localized(&[("nl", "dag"), ("de", "Tag")]);
/// Week of seven days.
pub const WEEK: Unit<Duration> = Unit::new("wk", "week", 604_800.0).localized(&[("nl", "wk"), ("de", "Wo")]);
