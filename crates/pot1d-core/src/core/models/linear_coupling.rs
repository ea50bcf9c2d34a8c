use super::harmonic::HarmonicOscillator;
use crate::core::error::PotentialError;
use crate::core::traits::{PerturbedPotential, Potential};
use std::sync::Arc;
use tracing::debug;

/// Linear interpolation between two end states:
/// `V(x, λ) = (1 − λ)·V_A(x) + λ·V_B(x)`.
///
/// λ is a required argument of every operation; there is no default coupling value, unlike
/// [`PerturbedHarmonicOscillator`](super::PerturbedHarmonicOscillator). The end states themselves
/// are λ-independent.
///
/// An end state whose weight is exactly zero does not contribute to `force_term`, so its
/// derivative is never requested.
#[derive(Debug, Clone)]
pub struct LinearCoupling {
    ha: Arc<dyn Potential>,
    hb: Arc<dyn Potential>,
}

impl LinearCoupling {
    pub fn new(ha: Arc<dyn Potential>, hb: Arc<dyn Potential>) -> Self {
        debug!(state_a = ?ha, state_b = ?hb, "Constructed linear coupling.");
        Self { ha, hb }
    }

    pub fn state_a(&self) -> &Arc<dyn Potential> {
        &self.ha
    }

    pub fn state_b(&self) -> &Arc<dyn Potential> {
        &self.hb
    }
}

impl Default for LinearCoupling {
    /// Two fresh oscillators at the origin with force constants 1 and 11.
    fn default() -> Self {
        Self::new(
            Arc::new(HarmonicOscillator::with_force_constant(1.0)),
            Arc::new(HarmonicOscillator::with_force_constant(11.0)),
        )
    }
}

impl PerturbedPotential for LinearCoupling {
    fn energy_at(&self, position: f64, lambda: f64) -> f64 {
        (1.0 - lambda) * self.ha.energy_at(position) + lambda * self.hb.energy_at(position)
    }

    fn force_term_at(&self, position: f64, lambda: f64) -> Result<f64, PotentialError> {
        let weighted =
            |weight: f64, state: &Arc<dyn Potential>| -> Result<f64, PotentialError> {
                if weight == 0.0 {
                    Ok(0.0)
                } else {
                    Ok(weight * state.force_term_at(position)?)
                }
            };
        Ok(weighted(1.0 - lambda, &self.ha)? + weighted(lambda, &self.hb)?)
    }

    fn lambda_derivative_at(&self, position: f64, _lambda: f64) -> f64 {
        self.hb.energy_at(position) - self.ha.energy_at(position)
    }
}
