use crate::core::error::PotentialError;
use crate::core::functions;
use crate::core::traits::Potential;

/// Symmetric quartic double well `V(x) = Vmax/b⁴ · ((x − a/2)² − b²)²`.
///
/// The minima sit at `a/2 ± b` and the barrier between them has height `Vmax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleWell {
    v_max: f64,
    a: f64,
    b: f64,
}

impl DoubleWell {
    pub fn new(v_max: f64, a: f64, b: f64) -> Result<Self, PotentialError> {
        if b == 0.0 {
            return Err(PotentialError::InvalidConfiguration(
                "Double well half-width `b` must be non-zero".to_string(),
            ));
        }
        Ok(Self { v_max, a, b })
    }

    pub fn v_max(&self) -> f64 {
        self.v_max
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for DoubleWell {
    fn default() -> Self {
        Self {
            v_max: 100.0,
            a: 0.0,
            b: 0.5,
        }
    }
}

impl Potential for DoubleWell {
    #[inline]
    fn energy_at(&self, position: f64) -> f64 {
        functions::double_well(position, self.v_max, self.a, self.b)
    }

    #[inline]
    fn force_term_at(&self, position: f64) -> Result<f64, PotentialError> {
        Ok(functions::double_well_dhdpos(
            position, self.v_max, self.a, self.b,
        ))
    }
}
