//! Display helpers for distances and durations.

/// `"500 m"` below one kilometer, otherwise kilometers with one decimal.
///
/// The unit is chosen after rounding to whole meters, so 999.6 m reads `"1.0 km"`.
pub fn format_distance(km: f64) -> String {
    let meters = (km * 1000.0).round() as i64;
    if meters < 1000 {
        format!("{} m", meters)
    } else {
        format!("{:.1} km", km)
    }
}

/// Whole minutes below an hour (`"8 phút"`), otherwise `"1h 15m"` / `"2h"`.
///
/// The branch follows the unrounded value: 59.6 reads `"60 phút"`, while
/// 119.8 rounds to 120 minutes and reads `"2h"`.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.round() as i64;
    if minutes < 60.0 {
        return format!("{} phút", total);
    }

    let hours = total / 60;
    let rest = total % 60;
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}
