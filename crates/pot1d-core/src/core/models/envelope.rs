use crate::core::error::PotentialError;
use crate::core::functions;
use crate::core::traits::Potential;
use std::sync::Arc;
use tracing::debug;

/// Envelope (soft-maximum) of N ≥ 2 potentials:
///
/// `V_R(x) = −1/s · ln Σ_i exp(−s·(V_i(x) − E_i))`
///
/// The sum is reduced with the two-term log-sum-exp, folding left to right in state order.
/// The fold order is fixed so that results are reproducible to the last bit.
#[derive(Debug, Clone)]
pub struct EnvelopePotential {
    states: Vec<Arc<dyn Potential>>,
    s: f64,
    energy_offsets: Vec<f64>,
}

impl EnvelopePotential {
    /// Creates an envelope over `states`. Offsets default to zero for every state.
    ///
    /// Fails with [`PotentialError::InvalidConfiguration`] for fewer than two states or when the
    /// offset count does not match the state count.
    pub fn new(
        states: Vec<Arc<dyn Potential>>,
        s: f64,
        energy_offsets: Option<Vec<f64>>,
    ) -> Result<Self, PotentialError> {
        let num_states = states.len();
        if num_states < 2 {
            return Err(PotentialError::InvalidConfiguration(format!(
                "An envelope needs at least two states, got {num_states}"
            )));
        }

        let energy_offsets = match energy_offsets {
            None => vec![0.0; num_states],
            Some(offsets) if offsets.len() != num_states => {
                return Err(PotentialError::InvalidConfiguration(format!(
                    "Energy offsets and states differ in length: {} offsets for {} states",
                    offsets.len(),
                    num_states
                )));
            }
            Some(offsets) => offsets,
        };

        debug!(num_states, s, ?energy_offsets, "Constructed envelope potential.");
        Ok(Self {
            states,
            s,
            energy_offsets,
        })
    }

    /// Envelope over exactly two states with zero offsets. Cannot fail.
    pub(super) fn pair(states: [Arc<dyn Potential>; 2], s: f64) -> Self {
        debug!(num_states = 2, s, "Constructed envelope potential.");
        Self {
            states: states.into(),
            s,
            energy_offsets: vec![0.0; 2],
        }
    }

    pub fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::new()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[Arc<dyn Potential>] {
        &self.states
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn energy_offsets(&self) -> &[f64] {
        &self.energy_offsets
    }
}

impl Potential for EnvelopePotential {
    fn energy_at(&self, position: f64) -> f64 {
        let exponents = self
            .states
            .iter()
            .zip(&self.energy_offsets)
            .map(|(state, offset)| -self.s * (state.energy_at(position) - offset));

        // At least two states are guaranteed by construction.
        let reduced = functions::log_sum_exp_fold(exponents).unwrap_or(f64::NEG_INFINITY);
        -1.0 / self.s * reduced
    }

    fn force_term_at(&self, _position: f64) -> Result<f64, PotentialError> {
        Err(PotentialError::NotImplemented {
            operation: "force_term",
            potential: "EnvelopePotential",
        })
    }
}

/// Step-by-step construction of an [`EnvelopePotential`].
#[derive(Debug, Default)]
pub struct EnvelopeBuilder {
    states: Vec<Arc<dyn Potential>>,
    offsets: Vec<Option<f64>>,
    s: Option<f64>,
}

impl EnvelopeBuilder {
    pub const DEFAULT_S: f64 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state with a zero energy offset.
    pub fn state(mut self, potential: Arc<dyn Potential>) -> Self {
        self.states.push(potential);
        self.offsets.push(None);
        self
    }

    pub fn state_with_offset(mut self, potential: Arc<dyn Potential>, offset: f64) -> Self {
        self.states.push(potential);
        self.offsets.push(Some(offset));
        self
    }

    pub fn smoothing(mut self, s: f64) -> Self {
        self.s = Some(s);
        self
    }

    pub fn build(self) -> Result<EnvelopePotential, PotentialError> {
        let offsets = if self.offsets.iter().all(Option::is_none) {
            None
        } else {
            Some(self.offsets.into_iter().map(|o| o.unwrap_or(0.0)).collect())
        };
        EnvelopePotential::new(self.states, self.s.unwrap_or(Self::DEFAULT_S), offsets)
    }
}
