use hifitime::Epoch;

use crate::constants::SCORE_RANGE;
use crate::skycast_errors::SkycastError;
use crate::viewing::{check, EventType};

/// Active window of a celestial event.
///
/// Invariant: `start_date ≤ peak_date ≤ end_date` and `peak_intensity ∈ [0, 10]`,
/// enforced by [`CelestialEventWindow::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialEventWindow {
    event_type: EventType,
    start_date: Epoch,
    peak_date: Epoch,
    end_date: Epoch,
    peak_intensity: f64,
}

impl CelestialEventWindow {
    pub fn new(
        event_type: EventType,
        start_date: Epoch,
        peak_date: Epoch,
        end_date: Epoch,
        peak_intensity: f64,
    ) -> Result<Self, SkycastError> {
        if start_date > peak_date || peak_date > end_date {
            return Err(SkycastError::InvalidEventWindow(format!(
                "expected start ≤ peak ≤ end, got {start_date} / {peak_date} / {end_date}"
            )));
        }
        check("peak_intensity", peak_intensity, SCORE_RANGE)?;

        Ok(CelestialEventWindow {
            event_type,
            start_date,
            peak_date,
            end_date,
            peak_intensity,
        })
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn start_date(&self) -> Epoch {
        self.start_date
    }

    pub fn peak_date(&self) -> Epoch {
        self.peak_date
    }

    pub fn end_date(&self) -> Epoch {
        self.end_date
    }

    pub fn peak_intensity(&self) -> f64 {
        self.peak_intensity
    }

    /// `true` when `date` lies inside `[start_date, end_date]`.
    pub fn contains(&self, date: Epoch) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
