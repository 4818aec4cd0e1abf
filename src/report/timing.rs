use std::time::{Duration, Instant};

// Runs f and reports how long it took on the wall clock
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

// A computed integral together with the time it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationResult {
    pub value: f64,
    pub elapsed: Duration,
}

impl IntegrationResult {
    pub fn from_timed((value, elapsed): (f64, Duration)) -> Self {
        IntegrationResult { value, elapsed }
    }
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
    // Reference minus computed value
    pub fn deviation(&self, truth_value: f64) -> f64 {
        truth_value - self.value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_timed_passes_value_through() {
        let (value, elapsed) = timed(|| (1..=10).sum::<u32>());
        assert_eq!(value, 55);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_integration_result() {
        let dut = IntegrationResult::from_timed((1.0, Duration::from_millis(250)));
        assert_eq!(dut.elapsed_seconds(), 0.25);
        assert!((dut.deviation(1.25929) - 0.25929).abs() < 1E-12);
    }
}
