//! Time-to-progress math shared by the timer driven animations.

use std::time::Duration;

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`.
///
/// A zero duration is treated as already finished.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let duration = Duration::from_millis(2000);
        assert_eq!(progress(Duration::ZERO, duration), 0.0);
        assert_eq!(progress(Duration::from_millis(500), duration), 0.25);
        assert_eq!(progress(Duration::from_millis(2000), duration), 1.0);
        assert_eq!(progress(Duration::from_millis(9000), duration), 1.0);
    }

    #[test]
    fn test_zero_duration_is_finished() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
