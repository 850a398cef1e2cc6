use std::time::Duration;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Local wall clock with the UTC offset captured once at startup.
///
/// The offset has to be read while the process is still single-threaded,
/// so it is never queried again afterwards.
#[derive(Debug, Clone, Copy)]
pub struct LocalClock {
    offset: UtcOffset,
    fell_back_to_utc: bool,
}

impl LocalClock {
    pub fn detect() -> Self {
        match UtcOffset::current_local_offset() {
            Ok(offset) => Self {
                offset,
                fell_back_to_utc: false,
            },
            Err(_) => Self {
                offset: UtcOffset::UTC,
                fell_back_to_utc: true,
            },
        }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn fell_back_to_utc(&self) -> bool {
        self.fell_back_to_utc
    }

    pub fn now(&self) -> PrimitiveDateTime {
        let local = OffsetDateTime::now_utc().to_offset(self.offset);
        PrimitiveDateTime::new(local.date(), local.time())
    }
}

/// Delay from `now` until the wall clock next crosses a multiple of `period`
/// since midnight, so ticks land on whole seconds or minutes.
pub fn until_next_boundary(now: PrimitiveDateTime, period: Duration) -> Duration {
    let period_nanos = period.as_nanos();
    if period_nanos == 0 {
        return Duration::ZERO;
    }
    let (hour, minute, second, nano) = now.time().as_hms_nano();
    let since_midnight = (u128::from(hour) * 3600 + u128::from(minute) * 60 + u128::from(second))
        * 1_000_000_000
        + u128::from(nano);
    let into_period = since_midnight % period_nanos;
    Duration::from_nanos((period_nanos - into_period) as u64)
}
