//! Time management utilities

use std::time::{Duration, Instant};

/// Frame clock for the main loop
///
/// Measures the wall-clock delta between consecutive iteration starts in
/// milliseconds. The very first iteration reports zero.
pub struct FrameTimer {
    last_start: Option<Instant>,
    elapsed_ms: f64,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_start: None,
            elapsed_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Mark the start of an iteration and return its start instant
    ///
    /// Recomputes the elapsed time as the delta since the previous call.
    pub fn begin_frame(&mut self) -> Instant {
        let now = Instant::now();
        self.elapsed_ms = self
            .last_start
            .map_or(0.0, |last| duration_to_millis(now.duration_since(last)));
        self.last_start = Some(now);
        self.frame_count += 1;
        now
    }

    /// Elapsed milliseconds between the two most recent iteration starts
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Number of iterations started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Instantaneous frame rate derived from the last delta
    pub fn current_fps(&self) -> f64 {
        if self.elapsed_ms > 0.0 {
            1000.0 / self.elapsed_ms
        } else {
            0.0
        }
    }
}

/// Convert a duration to fractional milliseconds
pub fn duration_to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Pacing sleep length for one iteration
///
/// Returns `max(1 ms, period - cost)`.
pub fn pacing_sleep(period: Duration, cost: Duration) -> Duration {
    period
        .checked_sub(cost)
        .filter(|remaining| *remaining >= Duration::from_millis(1))
        .unwrap_or(Duration::from_millis(1))
}

/// Format a game time given in milliseconds as `HH:MM:SS.mmm`
pub fn format_game_time(time_ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = time_ms.max(0.0) as u64;
    let millis = total % 1000;
    let seconds = (total / 1000) % 60;
    let minutes = (total / 60_000) % 60;
    let hours = total / 3_600_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_zero_elapsed() {
        let mut timer = FrameTimer::new();
        timer.begin_frame();

        assert_eq!(timer.elapsed_ms(), 0.0);
        assert_eq!(timer.frame_count(), 1);
        assert_eq!(timer.current_fps(), 0.0);
    }

    #[test]
    fn test_elapsed_tracks_sleep() {
        let mut timer = FrameTimer::new();
        timer.begin_frame();
        std::thread::sleep(Duration::from_millis(5));
        timer.begin_frame();

        assert!(timer.elapsed_ms() >= 5.0);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_pacing_sleep_is_at_least_one_millisecond() {
        let period = Duration::from_micros(16_667);

        assert_eq!(pacing_sleep(period, Duration::from_millis(6)), Duration::from_micros(10_667));
        assert_eq!(pacing_sleep(period, Duration::from_millis(16)), Duration::from_millis(1));
        assert_eq!(pacing_sleep(period, Duration::from_millis(40)), Duration::from_millis(1));
    }

    #[test]
    fn test_format_game_time() {
        assert_eq!(format_game_time(0.0), "00:00:00.000");
        assert_eq!(format_game_time(61_234.0), "00:01:01.234");
        assert_eq!(format_game_time(3_723_004.0), "01:02:03.004");
    }
}
