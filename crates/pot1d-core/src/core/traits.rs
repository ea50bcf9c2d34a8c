//! The two calling contracts shared by every potential.
//!
//! Implementors only provide the per-position closed forms (`*_at`). The sequence operations
//! are provided methods that map those over an already normalized [`Positions`] and keep the
//! input order.

use super::error::PotentialError;
use super::positions::Positions;
use std::fmt::Debug;

/// A potential energy surface that depends on the position only.
pub trait Potential: Debug + Send + Sync {
    /// Energy at a single position.
    fn energy_at(&self, position: f64) -> f64;

    /// dH/dpos at a single position. This is the derivative, not the negated force.
    ///
    /// Potentials without an analytic derivative return [`PotentialError::NotImplemented`].
    fn force_term_at(&self, position: f64) -> Result<f64, PotentialError>;

    fn energy(&self, positions: &Positions) -> Vec<f64> {
        positions.iter().map(|&pos| self.energy_at(pos)).collect()
    }

    fn force_term(&self, positions: &Positions) -> Result<Vec<f64>, PotentialError> {
        positions
            .iter()
            .map(|&pos| self.force_term_at(pos))
            .collect()
    }
}

/// A potential energy surface that also depends on the coupling parameter λ.
///
/// λ is passed through unmodified; no range is enforced.
pub trait PerturbedPotential: Debug + Send + Sync {
    fn energy_at(&self, position: f64, lambda: f64) -> f64;

    /// dH/dpos at a single position and λ.
    fn force_term_at(&self, position: f64, lambda: f64) -> Result<f64, PotentialError>;

    /// dH/dλ at a single position and λ.
    fn lambda_derivative_at(&self, position: f64, lambda: f64) -> f64;

    fn energy(&self, positions: &Positions, lambda: f64) -> Vec<f64> {
        positions
            .iter()
            .map(|&pos| self.energy_at(pos, lambda))
            .collect()
    }

    fn force_term(&self, positions: &Positions, lambda: f64) -> Result<Vec<f64>, PotentialError> {
        positions
            .iter()
            .map(|&pos| self.force_term_at(pos, lambda))
            .collect()
    }

    fn lambda_derivative(&self, positions: &Positions, lambda: f64) -> Vec<f64> {
        positions
            .iter()
            .map(|&pos| self.lambda_derivative_at(pos, lambda))
            .collect()
    }
}
