use crate::core::error::PotentialError;
use crate::core::functions;
use crate::core::traits::Potential;

/// Unperturbed harmonic oscillator `V(x) = 0.5·fc·(x − x_shift)² − y_shift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    fc: f64,
    x_shift: f64,
    y_shift: f64,
}

impl HarmonicOscillator {
    pub fn new(fc: f64, x_shift: f64, y_shift: f64) -> Self {
        Self {
            fc,
            x_shift,
            y_shift,
        }
    }

    /// Oscillator centred at the origin with no energy shift.
    pub fn with_force_constant(fc: f64) -> Self {
        Self::new(fc, 0.0, 0.0)
    }

    pub fn fc(&self) -> f64 {
        self.fc
    }

    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    pub fn y_shift(&self) -> f64 {
        self.y_shift
    }
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Potential for HarmonicOscillator {
    #[inline]
    fn energy_at(&self, position: f64) -> f64 {
        functions::harmonic(position, self.fc, self.x_shift, self.y_shift)
    }

    #[inline]
    fn force_term_at(&self, position: f64) -> Result<f64, PotentialError> {
        Ok(functions::harmonic_dhdpos(position, self.fc, self.x_shift))
    }
}
