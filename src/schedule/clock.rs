/// Converts refresh timestamps (milliseconds) into the clock seconds fed to motion formulas.
///
/// The origin is captured from the first observed timestamp, so a session always starts at
/// `epoch_offset_secs`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    epoch_offset_secs: f64,
}

impl FrameClock {
    pub fn new(epoch_offset_secs: f64) -> Self {
        Self {
            origin_ms: None,
            epoch_offset_secs,
        }
    }

    pub fn elapsed_secs(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        (timestamp_ms - origin) / 1000.0 + self.epoch_offset_secs
    }

    pub fn origin_ms(&self) -> Option<f64> {
        self.origin_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
