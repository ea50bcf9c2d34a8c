//! Deserializable parameter records for every potential kind.
//!
//! A parameter document is a TOML table `[potential]` whose `type` key selects the kind.
//! Composite kinds nest their sub-potentials as further tables:
//!
//! ```toml
//! [potential]
//! type = "envelope"
//! s = 0.5
//! energy_offsets = [0.0, 1.0]
//!
//! [[potential.states]]
//! type = "harmonic"
//! x_shift = -1.0
//!
//! [[potential.states]]
//! type = "double_well"
//! b = 0.8
//! ```
//!
//! Omitted fields take the documented defaults of each potential; unknown keys are rejected.

use super::error::PotentialError;
use super::models::{
    DEFAULT_LAMBDA, DoubleWell, EnvelopePotential, EnvelopedDoubleWell, ExponentialCoupling,
    FixedLambda, HarmonicOscillator, LinearCoupling, PerturbedHarmonicOscillator,
};
use super::traits::{PerturbedPotential, Potential};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Potential(#[from] PotentialError),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HarmonicParams {
    pub fc: f64,
    pub x_shift: f64,
    pub y_shift: f64,
}

impl Default for HarmonicParams {
    fn default() -> Self {
        Self {
            fc: 1.0,
            x_shift: 0.0,
            y_shift: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DoubleWellParams {
    #[serde(alias = "Vmax")]
    pub v_max: f64,
    pub a: f64,
    pub b: f64,
}

impl Default for DoubleWellParams {
    fn default() -> Self {
        Self {
            v_max: 100.0,
            a: 0.0,
            b: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerturbedHarmonicParams {
    pub fc: f64,
    pub alpha: f64,
    pub gamma: f64,
}

impl Default for PerturbedHarmonicParams {
    fn default() -> Self {
        Self {
            fc: 1.0,
            alpha: 10.0,
            gamma: 0.0,
        }
    }
}

/// End states of a two-state coupling. A missing state falls back to a harmonic oscillator at
/// the origin with force constant 1 (state A) or 11 (state B).
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LinearCouplingParams {
    #[serde(alias = "ha")]
    pub state_a: Option<Box<PotentialSpec>>,
    #[serde(alias = "hb")]
    pub state_b: Option<Box<PotentialSpec>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExponentialCouplingParams {
    #[serde(alias = "ha")]
    pub state_a: Option<Box<PotentialSpec>>,
    #[serde(alias = "hb")]
    pub state_b: Option<Box<PotentialSpec>>,
    pub s: f64,
    #[serde(alias = "temp")]
    pub temperature: f64,
}

impl Default for ExponentialCouplingParams {
    fn default() -> Self {
        Self {
            state_a: None,
            state_b: None,
            s: 1.0,
            temperature: ExponentialCoupling::DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeParams {
    #[serde(alias = "V_is")]
    pub states: Vec<PotentialSpec>,
    pub s: f64,
    #[serde(alias = "Eoff_i")]
    pub energy_offsets: Option<Vec<f64>>,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            s: 1.0,
            energy_offsets: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopedDoubleWellParams {
    pub x_shifts: [f64; 2],
    pub y_shifts: [f64; 2],
    pub fcs: [f64; 2],
    pub smoothing: f64,
}

impl Default for EnvelopedDoubleWellParams {
    fn default() -> Self {
        Self {
            x_shifts: EnvelopedDoubleWell::DEFAULT_X_SHIFTS,
            y_shifts: EnvelopedDoubleWell::DEFAULT_Y_SHIFTS,
            fcs: EnvelopedDoubleWell::DEFAULT_FORCE_CONSTANTS,
            smoothing: EnvelopedDoubleWell::DEFAULT_SMOOTHING,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FixedLambdaParams {
    pub potential: Box<PotentialSpec>,
    #[serde(default = "default_lambda")]
    pub lambda: f64,
}

fn default_lambda() -> f64 {
    DEFAULT_LAMBDA
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PotentialSpec {
    Harmonic(HarmonicParams),
    DoubleWell(DoubleWellParams),
    PerturbedHarmonic(PerturbedHarmonicParams),
    LinearCoupling(LinearCouplingParams),
    ExponentialCoupling(ExponentialCouplingParams),
    Envelope(EnvelopeParams),
    EnvelopedDoubleWell(EnvelopedDoubleWellParams),
    FixedLambda(FixedLambdaParams),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PotentialFile {
    potential: PotentialSpec,
}

/// A built potential of either family.
#[derive(Debug, Clone)]
pub enum Model {
    Unperturbed(Arc<dyn Potential>),
    Perturbed(Arc<dyn PerturbedPotential>),
}

impl Model {
    pub fn is_perturbed(&self) -> bool {
        matches!(self, Model::Perturbed(_))
    }

    pub fn into_unperturbed(self) -> Result<Arc<dyn Potential>, PotentialError> {
        match self {
            Model::Unperturbed(potential) => Ok(potential),
            Model::Perturbed(potential) => Err(PotentialError::InvalidConfiguration(format!(
                "Expected a λ-independent potential, got {potential:?}"
            ))),
        }
    }

    pub fn into_perturbed(self) -> Result<Arc<dyn PerturbedPotential>, PotentialError> {
        match self {
            Model::Perturbed(potential) => Ok(potential),
            Model::Unperturbed(potential) => Err(PotentialError::InvalidConfiguration(format!(
                "Expected a λ-dependent potential, got {potential:?}"
            ))),
        }
    }
}

impl PotentialSpec {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse_document(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ParamLoadError> {
        Self::parse_document(content, "<string>")
    }

    fn parse_document(content: &str, origin: &str) -> Result<Self, ParamLoadError> {
        let file: PotentialFile = toml::from_str(content).map_err(|e| ParamLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        Ok(file.potential)
    }

    /// Reads a parameter document and builds the potential it describes.
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load_model(path: &Path) -> Result<Model, ParamLoadError> {
        let spec = Self::load(path)?;
        Ok(spec.build()?)
    }

    pub fn build(&self) -> Result<Model, PotentialError> {
        let model = match self {
            PotentialSpec::Harmonic(p) => Model::Unperturbed(Arc::new(HarmonicOscillator::new(
                p.fc, p.x_shift, p.y_shift,
            ))),
            PotentialSpec::DoubleWell(p) => {
                Model::Unperturbed(Arc::new(DoubleWell::new(p.v_max, p.a, p.b)?))
            }
            PotentialSpec::PerturbedHarmonic(p) => Model::Perturbed(Arc::new(
                PerturbedHarmonicOscillator::new(p.fc, p.alpha, p.gamma),
            )),
            PotentialSpec::LinearCoupling(p) => {
                let (ha, hb) = build_end_states(&p.state_a, &p.state_b)?;
                Model::Perturbed(Arc::new(LinearCoupling::new(ha, hb)))
            }
            PotentialSpec::ExponentialCoupling(p) => {
                let (ha, hb) = build_end_states(&p.state_a, &p.state_b)?;
                Model::Perturbed(Arc::new(ExponentialCoupling::new(
                    ha,
                    hb,
                    p.s,
                    p.temperature,
                )))
            }
            PotentialSpec::Envelope(p) => {
                let states = p
                    .states
                    .iter()
                    .map(|state| state.build().and_then(Model::into_unperturbed))
                    .collect::<Result<Vec<_>, _>>()?;
                Model::Unperturbed(Arc::new(EnvelopePotential::new(
                    states,
                    p.s,
                    p.energy_offsets.clone(),
                )?))
            }
            PotentialSpec::EnvelopedDoubleWell(p) => Model::Unperturbed(Arc::new(
                EnvelopedDoubleWell::new(p.x_shifts, p.y_shifts, p.fcs, p.smoothing),
            )),
            PotentialSpec::FixedLambda(p) => {
                let inner = p.potential.build()?.into_perturbed()?;
                Model::Unperturbed(Arc::new(FixedLambda::new(inner, p.lambda)))
            }
        };
        debug!(?model, "Built potential from parameters.");
        Ok(model)
    }
}

fn build_end_states(
    state_a: &Option<Box<PotentialSpec>>,
    state_b: &Option<Box<PotentialSpec>>,
) -> Result<(Arc<dyn Potential>, Arc<dyn Potential>), PotentialError> {
    let build_or = |spec: &Option<Box<PotentialSpec>>, fc: f64| match spec {
        Some(spec) => spec.build().and_then(Model::into_unperturbed),
        None => Ok(Arc::new(HarmonicOscillator::with_force_constant(fc)) as Arc<dyn Potential>),
    };
    Ok((build_or(state_a, 1.0)?, build_or(state_b, 11.0)?))
}
