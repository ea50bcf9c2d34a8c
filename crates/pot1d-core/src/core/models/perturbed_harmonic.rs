use crate::core::error::PotentialError;
use crate::core::traits::PerturbedPotential;

/// λ used when a perturbed potential is evaluated without an explicit coupling value.
pub const DEFAULT_LAMBDA: f64 = 1.0;

/// Harmonic oscillator whose width and centre move with λ:
/// `V(x, λ) = 0.5·(1 + α·λ)·fc·(x − γ·λ)²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbedHarmonicOscillator {
    fc: f64,
    alpha: f64,
    gamma: f64,
}

impl PerturbedHarmonicOscillator {
    pub fn new(fc: f64, alpha: f64, gamma: f64) -> Self {
        Self { fc, alpha, gamma }
    }

    pub fn fc(&self) -> f64 {
        self.fc
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[inline]
    fn stiffness(&self, lambda: f64) -> f64 {
        (1.0 + self.alpha * lambda) * self.fc
    }

    #[inline]
    fn displacement(&self, position: f64, lambda: f64) -> f64 {
        position - self.gamma * lambda
    }
}

impl Default for PerturbedHarmonicOscillator {
    fn default() -> Self {
        Self::new(1.0, 10.0, 0.0)
    }
}

impl PerturbedPotential for PerturbedHarmonicOscillator {
    fn energy_at(&self, position: f64, lambda: f64) -> f64 {
        0.5 * self.stiffness(lambda) * self.displacement(position, lambda).powi(2)
    }

    fn force_term_at(&self, position: f64, lambda: f64) -> Result<f64, PotentialError> {
        Ok(self.stiffness(lambda) * self.displacement(position, lambda))
    }

    fn lambda_derivative_at(&self, position: f64, lambda: f64) -> f64 {
        let dx = self.displacement(position, lambda);
        0.5 * self.alpha * self.fc * dx.powi(2) - self.stiffness(lambda) * self.gamma * dx
    }
}
