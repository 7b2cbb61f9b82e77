//! Rounding and clamping used by every score in the game.

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. This differs from [`f64::round`], which rounds
/// halves away from zero; the scores were tuned against this behaviour.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Clamp `value` into `[min, max]`.
pub fn clamp_i64(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// `max(0, current + delta)` without overflowing.
pub fn floor_at_zero(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta).max(0)
}
