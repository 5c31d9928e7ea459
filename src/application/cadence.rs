/// Cadence turns frame time into generation ticks.
/// The engine never schedules itself; a display loop feeds elapsed time here
/// and calls `Simulation::step` whenever a tick is due.
#[derive(Clone, Debug)]
pub struct Cadence {
    interval_secs: f32,
    timer: f32,
    paused: bool,
}

impl Cadence {
    pub fn from_millis(interval_ms: u64) -> Self {
        Self {
            interval_secs: interval_ms as f32 / 1000.0,
            timer: 0.0,
            paused: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        (self.interval_secs * 1000.0).round() as u64
    }

    /// Adjust the interval, clamped to 1ms..=2s
    pub fn adjust_interval_ms(&mut self, delta_ms: i64) {
        let next = (self.interval_ms() as i64 + delta_ms).clamp(1, 2000);
        self.interval_secs = next as f32 / 1000.0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance by one frame; returns true when a generation is due
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if self.paused {
            return false;
        }

        self.timer += delta_secs;
        if self.timer >= self.interval_secs {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let mut cadence = Cadence::from_millis(50);
        assert!(!cadence.tick(0.02));
        assert!(!cadence.tick(0.02));
        assert!(cadence.tick(0.02));
        assert!(!cadence.tick(0.01));
    }

    #[test]
    fn test_paused_never_fires() {
        let mut cadence = Cadence::from_millis(10);
        cadence.toggle_paused();
        assert!(!cadence.tick(1.0));
        cadence.toggle_paused();
        assert!(cadence.tick(1.0));
    }

    #[test]
    fn test_adjust_is_clamped() {
        let mut cadence = Cadence::from_millis(50);
        cadence.adjust_interval_ms(-100);
        assert_eq!(cadence.interval_ms(), 1);
        cadence.adjust_interval_ms(5000);
        assert_eq!(cadence.interval_ms(), 2000);
    }
}
