use super::perturbed_harmonic::DEFAULT_LAMBDA;
use crate::core::error::PotentialError;
use crate::core::traits::{PerturbedPotential, Potential};
use std::sync::Arc;

/// A perturbed potential frozen at one λ, usable wherever a [`Potential`] is expected
/// (for instance as an envelope state).
#[derive(Debug, Clone)]
pub struct FixedLambda {
    inner: Arc<dyn PerturbedPotential>,
    lambda: f64,
}

impl FixedLambda {
    pub fn new(inner: Arc<dyn PerturbedPotential>, lambda: f64) -> Self {
        Self { inner, lambda }
    }

    /// Freezes `inner` at [`DEFAULT_LAMBDA`].
    pub fn at_default_lambda(inner: Arc<dyn PerturbedPotential>) -> Self {
        Self::new(inner, DEFAULT_LAMBDA)
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn inner(&self) -> &Arc<dyn PerturbedPotential> {
        &self.inner
    }

    /// dH/dλ of the wrapped potential at the frozen λ.
    pub fn lambda_derivative_at(&self, position: f64) -> f64 {
        self.inner.lambda_derivative_at(position, self.lambda)
    }
}

impl Potential for FixedLambda {
    fn energy_at(&self, position: f64) -> f64 {
        self.inner.energy_at(position, self.lambda)
    }

    fn force_term_at(&self, position: f64) -> Result<f64, PotentialError> {
        self.inner.force_term_at(position, self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PerturbedHarmonicOscillator;
    use crate::core::models::test_utils::*;
    use crate::core::positions::Positions;

    #[test]
    fn evaluates_inner_potential_at_frozen_lambda() {
        let inner = Arc::new(PerturbedHarmonicOscillator::new(1.0, 1.0, 1.0));
        let fixed = FixedLambda::new(inner.clone(), 0.5);
        let positions = Positions::from([0.0, 2.0]);
        assert_eq!(fixed.energy(&positions), inner.energy(&positions, 0.5));
        assert_eq!(
            fixed.force_term(&positions).unwrap(),
            inner.force_term(&positions, 0.5).unwrap()
        );
        assert!(f64_approx_equal(
            fixed.lambda_derivative_at(2.0),
            inner.lambda_derivative_at(2.0, 0.5)
        ));
    }

    #[test]
    fn default_lambda_is_one() {
        let fixed =
            FixedLambda::at_default_lambda(Arc::new(PerturbedHarmonicOscillator::default()));
        assert_eq!(fixed.lambda(), 1.0);
        assert!(f64_approx_equal(fixed.energy_at(1.0), 5.5));
    }
}
