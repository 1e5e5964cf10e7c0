//! Points in time, counted in seconds from an epoch chosen by the caller.

use super::duration::Duration;
use crate::{Quantity, Unit};

/// An instant; the span between two instants is a [`Duration`].
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "s",
    units = [SECOND, MILLISECOND, MINUTE, HOUR, DAY, WEEK],
    relative = Duration
)]
pub enum Time {}

/// Second.
pub const SECOND: Unit<Time> = Unit::new("s", "second", 1.0).aliases(&["sec"]);
/// Millisecond.
pub const MILLISECOND: Unit<Time> = Unit::new("ms", "millisecond", 1e-3);
/// Minute.
pub const MINUTE: Unit<Time> = Unit::new("min", "minute", 60.0);
/// Hour.
pub const HOUR: Unit<Time> = Unit::new("h", "hour", 3600.0).localized(&[("nl", "u"), ("de", "Std")]);
/// Day.
pub const DAY: Unit<Time> = Unit::new("d", "day", 86_400.0).localized(&[("nl", "dag"), ("de", "Tag")]);
/// Week.
pub const WEEK: Unit<Time> = Unit::new("wk", "week", 604_800.0).localized(&[("nl", "wk"), ("de", "Wo")]);
