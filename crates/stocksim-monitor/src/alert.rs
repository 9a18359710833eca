//! Price alert that fires when the live close crosses a target.

use stocksim_core::error::SimError;

/// One-shot price alert.
///
/// Fires when consecutive closes cross the target in either direction, then
/// stays latched until [`PriceAlert::dismiss`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceAlert {
    target: f64,
    triggered: bool,
}

impl PriceAlert {
    pub fn new(target: f64) -> Result<Self, SimError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(SimError::Validation(format!(
                "Alert price must be a positive number, got {target}"
            )));
        }
        Ok(Self {
            target,
            triggered: false,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Feed a price move; returns `true` only on the update that fires.
    pub fn observe(&mut self, previous_close: f64, new_close: f64) -> bool {
        if self.triggered {
            return false;
        }

        let crossed_up = previous_close < self.target && new_close >= self.target;
        let crossed_down = previous_close > self.target && new_close <= self.target;

        self.triggered = crossed_up || crossed_down;
        self.triggered
    }

    /// Re-arm the alert.
    pub fn dismiss(&mut self) {
        self.triggered = false;
    }
}
