//! # Potentials
//!
//! Concrete potential types. Unperturbed surfaces implement [`Potential`](super::traits::Potential),
//! λ-dependent ones implement [`PerturbedPotential`](super::traits::PerturbedPotential).
//!
//! | Type | Contract | Sub-potentials |
//! |------|----------|----------------|
//! | [`HarmonicOscillator`] | `Potential` | none |
//! | [`DoubleWell`] | `Potential` | none |
//! | [`PerturbedHarmonicOscillator`] | `PerturbedPotential` | none |
//! | [`LinearCoupling`] | `PerturbedPotential` | two |
//! | [`ExponentialCoupling`] | `PerturbedPotential` | two |
//! | [`EnvelopePotential`] | `Potential` | N ≥ 2 |
//! | [`EnvelopedDoubleWell`] | `Potential` | two harmonic oscillators |
//! | [`FixedLambda`] | `Potential` | one perturbed |
//!
//! Composites share their sub-potentials through `Arc`; they never mutate them.

mod double_well;
mod envelope;
mod enveloped_double_well;
mod exponential_coupling;
mod fixed_lambda;
mod harmonic;
mod linear_coupling;
mod perturbed_harmonic;

pub use double_well::DoubleWell;
pub use envelope::{EnvelopeBuilder, EnvelopePotential};
pub use enveloped_double_well::EnvelopedDoubleWell;
pub use exponential_coupling::ExponentialCoupling;
pub use fixed_lambda::FixedLambda;
pub use harmonic::HarmonicOscillator;
pub use linear_coupling::LinearCoupling;
pub use perturbed_harmonic::{DEFAULT_LAMBDA, PerturbedHarmonicOscillator};

#[cfg(test)]
pub(crate) mod test_utils {
    pub const TOLERANCE: f64 = 1e-9;
    pub const FD_TOLERANCE: f64 = 1e-5;

    pub fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    /// Central finite difference of `f` at `x`.
    pub fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
        let h = 1e-6;
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    pub const SAMPLE_POSITIONS: [f64; 7] = [-2.0, -1.1, -0.3, 0.0, 0.4, 1.25, 2.5];
}
