use super::harmonic::HarmonicOscillator;
use crate::core::error::PotentialError;
use crate::core::functions::GAS_CONSTANT;
use crate::core::traits::{PerturbedPotential, Potential};
use std::sync::Arc;
use tracing::{debug, warn};

/// Soft-core style coupling that mixes two end states in Boltzmann-factor space:
///
/// `V(x, λ) = −1/(β·s) · ln( λ·exp(−β·s·V_B(x)) + (1 − λ)·exp(−β·s·V_A(x)) )`
///
/// with `β = R/1000 · T`. The exponentials are evaluated relative to the largest exponent that
/// carries a non-zero weight, so large `β·s·V` neither overflows nor underflows to `ln 0`.
///
/// λ is always required. An end state whose weighted Boltzmann factor is exactly zero does not
/// contribute to `force_term`, so its derivative is never requested.
#[derive(Debug, Clone)]
pub struct ExponentialCoupling {
    ha: Arc<dyn Potential>,
    hb: Arc<dyn Potential>,
    s: f64,
    beta: f64,
}

/// Weighted Boltzmann factors of both states at one position, scaled by `exp(-shift)`.
struct Mixture {
    shift: f64,
    factor_a: f64,
    factor_b: f64,
    sum: f64,
}

impl ExponentialCoupling {
    pub const DEFAULT_TEMPERATURE: f64 = 300.0;

    pub fn new(ha: Arc<dyn Potential>, hb: Arc<dyn Potential>, s: f64, temperature: f64) -> Self {
        let beta = GAS_CONSTANT / 1000.0 * temperature;
        debug!(s, temperature, beta, "Constructed exponential coupling.");
        Self { ha, hb, s, beta }
    }

    pub fn state_a(&self) -> &Arc<dyn Potential> {
        &self.ha
    }

    pub fn state_b(&self) -> &Arc<dyn Potential> {
        &self.hb
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    fn mixture(&self, energy_a: f64, energy_b: f64, lambda: f64) -> Mixture {
        let beta_s = self.beta * self.s;
        let exponent_a = -beta_s * energy_a;
        let exponent_b = -beta_s * energy_b;

        let shift = if lambda == 0.0 {
            exponent_a
        } else if lambda == 1.0 {
            exponent_b
        } else {
            exponent_a.max(exponent_b)
        };

        // A zero weight must not meet an overflowed exponential (0 · inf).
        let weighted = |weight: f64, exponent: f64| {
            if weight == 0.0 {
                0.0
            } else {
                weight * (exponent - shift).exp()
            }
        };
        let factor_a = weighted(1.0 - lambda, exponent_a);
        let factor_b = weighted(lambda, exponent_b);
        let sum = factor_a + factor_b;
        if !(sum > 0.0 && sum.is_finite()) {
            warn!(
                lambda,
                energy_a,
                energy_b,
                sum,
                "Exponential coupling mixture sum is not a positive finite number."
            );
        }

        Mixture {
            shift,
            factor_a,
            factor_b,
            sum,
        }
    }
}

impl Default for ExponentialCoupling {
    /// Two fresh oscillators at the origin with force constants 1 and 11, `s = 1`, `T = 300 K`.
    fn default() -> Self {
        Self::new(
            Arc::new(HarmonicOscillator::with_force_constant(1.0)),
            Arc::new(HarmonicOscillator::with_force_constant(11.0)),
            1.0,
            Self::DEFAULT_TEMPERATURE,
        )
    }
}

impl PerturbedPotential for ExponentialCoupling {
    fn energy_at(&self, position: f64, lambda: f64) -> f64 {
        let mix = self.mixture(
            self.ha.energy_at(position),
            self.hb.energy_at(position),
            lambda,
        );
        -1.0 / (self.beta * self.s) * (mix.shift + mix.sum.ln())
    }

    fn force_term_at(&self, position: f64, lambda: f64) -> Result<f64, PotentialError> {
        let mix = self.mixture(
            self.ha.energy_at(position),
            self.hb.energy_at(position),
            lambda,
        );
        let weighted =
            |factor: f64, state: &Arc<dyn Potential>| -> Result<f64, PotentialError> {
                if factor == 0.0 {
                    Ok(0.0)
                } else {
                    Ok(factor * state.force_term_at(position)?)
                }
            };
        Ok((weighted(mix.factor_b, &self.hb)? + weighted(mix.factor_a, &self.ha)?) / mix.sum)
    }

    fn lambda_derivative_at(&self, position: f64, lambda: f64) -> f64 {
        let energy_a = self.ha.energy_at(position);
        let energy_b = self.hb.energy_at(position);
        let mix = self.mixture(energy_a, energy_b, lambda);
        let beta_s = self.beta * self.s;
        let boltzmann_a = (-beta_s * energy_a - mix.shift).exp();
        let boltzmann_b = (-beta_s * energy_b - mix.shift).exp();
        -1.0 / beta_s * (boltzmann_b - boltzmann_a) / mix.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::test_utils::*;
    use crate::core::positions::Positions;

    fn stiff_coupling(s: f64) -> ExponentialCoupling {
        ExponentialCoupling::new(
            Arc::new(HarmonicOscillator::new(1.0, -1.0, 0.0)),
            Arc::new(HarmonicOscillator::new(1.0, 1.0, 0.0)),
            s,
            ExponentialCoupling::DEFAULT_TEMPERATURE,
        )
    }

    #[test]
    fn beta_is_gas_constant_in_kilojoules_times_temperature() {
        let coupling = ExponentialCoupling::default();
        assert!(f64_approx_equal(coupling.beta(), 8.314462618e-3 * 300.0));
    }

    #[test]
    fn end_states_reproduce_individual_energies() {
        let coupling = ExponentialCoupling::default();
        for &x in &SAMPLE_POSITIONS {
            let at_a = coupling.energy_at(x, 0.0);
            let at_b = coupling.energy_at(x, 1.0);
            assert!(f64_approx_equal(at_a, coupling.state_a().energy_at(x)));
            assert!(f64_approx_equal(at_b, coupling.state_b().energy_at(x)));
        }
    }

    #[test]
    fn end_states_reproduce_individual_force_terms() {
        let coupling = ExponentialCoupling::default();
        let positions = Positions::from(SAMPLE_POSITIONS);
        let at_a = coupling.force_term(&positions, 0.0).unwrap();
        let expected = coupling.state_a().force_term(&positions).unwrap();
        for (got, want) in at_a.iter().zip(expected) {
            assert!(f64_approx_equal(*got, want));
        }
    }

    #[test]
    fn large_beta_s_converges_to_minimum_of_states() {
        let coupling = stiff_coupling(100.0);
        for &x in &SAMPLE_POSITIONS {
            let lower = coupling
                .state_a()
                .energy_at(x)
                .min(coupling.state_b().energy_at(x));
            assert!((coupling.energy_at(x, 0.5) - lower).abs() < 1e-2, "x = {x}");
        }
    }

    #[test]
    fn huge_exponents_stay_finite() {
        let coupling = stiff_coupling(1e6);
        let energy = coupling.energy_at(2.5, 0.5);
        assert!(energy.is_finite());
        assert!((energy - 1.125).abs() < 1e-3);
        assert!(coupling.force_term_at(2.5, 0.5).unwrap().is_finite());
    }

    #[test]
    fn equal_states_give_single_state_energy_for_any_lambda() {
        let osc = Arc::new(HarmonicOscillator::new(2.0, 0.5, 0.0));
        let coupling = ExponentialCoupling::new(osc.clone(), osc.clone(), 1.0, 300.0);
        for &lambda in &[0.0, 0.25, 0.5, 1.0] {
            assert!(f64_approx_equal(coupling.energy_at(1.5, lambda), osc.energy_at(1.5)));
            assert!(f64_approx_equal(coupling.lambda_derivative_at(1.5, lambda), 0.0));
        }
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let coupling = stiff_coupling(0.5);
        for &lambda in &[0.2, 0.5, 0.8] {
            for &x in &SAMPLE_POSITIONS {
                let d_pos = central_difference(|p| coupling.energy_at(p, lambda), x);
                let d_lam = central_difference(|l| coupling.energy_at(x, l), lambda);
                let analytic_pos = coupling.force_term_at(x, lambda).unwrap();
                let analytic_lam = coupling.lambda_derivative_at(x, lambda);
                assert!((d_pos - analytic_pos).abs() < FD_TOLERANCE, "x = {x}");
                assert!((d_lam - analytic_lam).abs() < FD_TOLERANCE, "x = {x}");
            }
        }
    }

    #[test]
    fn default_instances_do_not_share_sub_potentials() {
        let first = ExponentialCoupling::default();
        let second = ExponentialCoupling::default();
        assert!(!Arc::ptr_eq(first.state_a(), second.state_a()));
    }

    /// Closed form without any shift, valid while the exponentials stay representable.
    fn unshifted(coupling: &ExponentialCoupling, x: f64, lambda: f64) -> (f64, f64) {
        let beta_s = coupling.beta() * coupling.s();
        let ea = coupling.state_a().energy_at(x);
        let eb = coupling.state_b().energy_at(x);
        let ba = (-beta_s * ea).exp();
        let bb = (-beta_s * eb).exp();
        let z = lambda * bb + (1.0 - lambda) * ba;
        let dhdpos = (lambda * coupling.state_b().force_term_at(x).unwrap() * bb
            + (1.0 - lambda) * coupling.state_a().force_term_at(x).unwrap() * ba)
            / z;
        let dhdlam = -1.0 / beta_s * (bb - ba) / z;
        (dhdpos, dhdlam)
    }

    fn relative_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
    }

    #[test]
    fn end_state_derivatives_match_unshifted_closed_form() {
        let coupling = ExponentialCoupling::default();
        for &lambda in &[0.0, 1.0] {
            for &x in &SAMPLE_POSITIONS {
                let (dhdpos, dhdlam) = unshifted(&coupling, x, lambda);
                let got_pos = coupling.force_term_at(x, lambda).unwrap();
                let got_lam = coupling.lambda_derivative_at(x, lambda);
                assert!(relative_approx_equal(got_pos, dhdpos), "x = {x}, λ = {lambda}");
                assert!(relative_approx_equal(got_lam, dhdlam), "x = {x}, λ = {lambda}");
            }
        }
    }

    #[test]
    fn end_state_force_terms_equal_surviving_state() {
        let coupling = stiff_coupling(2.0);
        let positions = Positions::from(SAMPLE_POSITIONS);
        let at_b = coupling.force_term(&positions, 1.0).unwrap();
        let expected = coupling.state_b().force_term(&positions).unwrap();
        for (got, want) in at_b.iter().zip(expected) {
            assert!(f64_approx_equal(*got, want));
        }
    }

    #[test]
    fn end_state_without_derivative_is_skipped_at_zero_weight() {
        let coupling = ExponentialCoupling::new(
            Arc::new(HarmonicOscillator::new(1.0, 0.5, 0.0)),
            Arc::new(crate::core::models::EnvelopedDoubleWell::default()),
            1.0,
            ExponentialCoupling::DEFAULT_TEMPERATURE,
        );
        assert!(f64_approx_equal(coupling.force_term_at(2.0, 0.0).unwrap(), 1.5));
        assert!(matches!(
            coupling.force_term_at(2.0, 0.5),
            Err(PotentialError::NotImplemented { .. })
        ));
    }
}
