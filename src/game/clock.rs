use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use chess::Color;

/// Remaining thinking time per side. Nothing here runs on its own, the caller
/// charges elapsed time with [`Clock::tick`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Clock {
    white: Duration,
    black: Duration,
}

impl Clock {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            white: time_limit,
            black: time_limit,
        }
    }

    pub fn from_minutes(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn tick(&mut self, color: Color, elapsed: Duration) {
        let remaining = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        *remaining = remaining.saturating_sub(elapsed);
    }

    /// The side whose time ran out, if any.
    pub fn flagged(&self) -> Option<Color> {
        if self.white.is_zero() {
            Some(Color::White)
        } else if self.black.is_zero() {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::from_minutes(10)
    }
}

/// Time between laps. Lets a turn be charged to a clock in pieces, whenever
/// the player does something, while the turn itself keeps running.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    last_lap: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self { last_lap: now }
    }

    /// Time since the previous lap, or the start.
    pub fn lap(&mut self) -> Duration {
        self.lap_at(Instant::now())
    }

    pub fn lap_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_lap);
        self.last_lap = now;
        elapsed
    }
}

fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

impl Display for Clock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "White {}  Black {}", format_duration(self.white), format_duration(self.black))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use chess::Color;
    use super::{Clock, Stopwatch};

    #[test]
    fn check_tick_and_flag() {
        let mut clock = Clock::from_minutes(1);

        clock.tick(Color::White, Duration::from_secs(45));
        assert_eq!(clock.remaining(Color::White), Duration::from_secs(15));
        assert_eq!(clock.remaining(Color::Black), Duration::from_secs(60));
        assert_eq!(clock.flagged(), None);

        clock.tick(Color::White, Duration::from_secs(30));
        assert_eq!(clock.remaining(Color::White), Duration::ZERO);
        assert_eq!(clock.flagged(), Some(Color::White));
    }

    #[test]
    fn check_huge_time_limit() {
        let clock = Clock::from_minutes(u64::MAX);

        assert_eq!(clock.remaining(Color::White), Duration::from_secs(u64::MAX));
        assert_eq!(clock.flagged(), None);
    }

    #[test]
    fn check_stopwatch_laps() {
        let start = Instant::now();
        let mut stopwatch = Stopwatch::start_at(start);

        assert_eq!(stopwatch.lap_at(start + Duration::from_secs(20)), Duration::from_secs(20));
        assert_eq!(stopwatch.lap_at(start + Duration::from_secs(50)), Duration::from_secs(30));
        // A lap that ends before the last one is empty
        assert_eq!(stopwatch.lap_at(start), Duration::ZERO);
    }

    #[test]
    fn check_display() {
        let mut clock = Clock::default();
        clock.tick(Color::Black, Duration::from_secs(75));

        assert_eq!(clock.to_string(), "White 10:00  Black 08:45");
    }
}
