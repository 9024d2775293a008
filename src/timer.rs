// High-precision timing utilities for measurements

use std::time::{Duration, Instant};

pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn start() -> Self {
        Self::new()
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in fractional milliseconds, the engine's native unit.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Reset timer to current time (for multi-phase measurements)
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Time a single execution, in fractional milliseconds.
pub fn time_once<F>(f: F) -> f64
where
    F: FnOnce(),
{
    let timer = Timer::start();
    f();
    timer.elapsed_ms()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timer_elapsed() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed();
        assert!(elapsed >= Duration::from_millis(10));
        assert!(elapsed < Duration::from_millis(100));
    }

    #[test]
    fn test_elapsed_ms_is_fractional() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(5));
        let ms = timer.elapsed_ms();
        assert!(ms >= 5.0);
        assert!(ms < 100.0);
    }

    #[test]
    fn test_reset() {
        let mut timer = Timer::start();
        thread::sleep(Duration::from_millis(5));
        timer.reset();
        assert!(timer.elapsed_ms() < 5.0);
    }

    #[test]
    fn test_time_once() {
        let ms = time_once(|| {
            thread::sleep(Duration::from_millis(5));
        });
        assert!(ms >= 5.0);
    }
}
