use std::time::Duration;

/// Timer source for the motion components.
///
/// Dropping a handle cancels the timer. Replacing a stored handle therefore
/// stops the old timer before the new one can fire.
pub trait Clock {
    type Handle;

    /// Time since a fixed, implementation defined origin.
    fn now(&self) -> Duration;
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> Self::Handle;
}

/// Milliseconds as the `u32` the browser timer APIs take.
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(4000)), 4000);
        assert_eq!(millis(Duration::from_secs(u64::MAX / 2)), u32::MAX);
    }
}
