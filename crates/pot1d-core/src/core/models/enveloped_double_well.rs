use super::envelope::EnvelopePotential;
use super::harmonic::HarmonicOscillator;
use crate::core::error::PotentialError;
use crate::core::traits::Potential;
use std::sync::Arc;

/// Two harmonic oscillators joined by an [`EnvelopePotential`] into a double-well-like surface.
#[derive(Debug, Clone)]
pub struct EnvelopedDoubleWell {
    envelope: EnvelopePotential,
}

impl EnvelopedDoubleWell {
    pub const DEFAULT_X_SHIFTS: [f64; 2] = [-1.0, 1.0];
    pub const DEFAULT_Y_SHIFTS: [f64; 2] = [0.0, 0.0];
    pub const DEFAULT_FORCE_CONSTANTS: [f64; 2] = [1.0, 1.0];
    pub const DEFAULT_SMOOTHING: f64 = 1.0;

    /// Builds oscillator `i` from `x_shifts[i]`, `y_shifts[i]` and `fcs[i]` and envelopes the
    /// pair with smoothing `s` and zero energy offsets.
    pub fn new(x_shifts: [f64; 2], y_shifts: [f64; 2], fcs: [f64; 2], smoothing: f64) -> Self {
        let oscillator = |i: usize| -> Arc<dyn Potential> {
            Arc::new(HarmonicOscillator::new(fcs[i], x_shifts[i], y_shifts[i]))
        };
        Self {
            envelope: EnvelopePotential::pair([oscillator(0), oscillator(1)], smoothing),
        }
    }

    pub fn envelope(&self) -> &EnvelopePotential {
        &self.envelope
    }
}

impl Default for EnvelopedDoubleWell {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_X_SHIFTS,
            Self::DEFAULT_Y_SHIFTS,
            Self::DEFAULT_FORCE_CONSTANTS,
            Self::DEFAULT_SMOOTHING,
        )
    }
}

impl Potential for EnvelopedDoubleWell {
    fn energy_at(&self, position: f64) -> f64 {
        self.envelope.energy_at(position)
    }

    fn force_term_at(&self, position: f64) -> Result<f64, PotentialError> {
        self.envelope.force_term_at(position)
    }
}
