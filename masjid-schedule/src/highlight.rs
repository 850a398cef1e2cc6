use time::PrimitiveDateTime;

use crate::PrayerDefinition;

/// Index of the last prayer whose Adhan today is at or before `now`.
///
/// Only Adhan times of the current day are considered; `None` before the
/// first Adhan.
pub fn active_index(definitions: &[PrayerDefinition], now: PrimitiveDateTime) -> Option<usize> {
    let today = now.date();
    definitions
        .iter()
        .enumerate()
        .filter(|(_, definition)| definition.adhan_on(today) <= now)
        .map(|(index, _)| index)
        .last()
}
