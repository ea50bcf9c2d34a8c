//! # pot1d Core Library
//!
//! One-dimensional model potentials for free-energy calculations: thermodynamic integration,
//! alchemical coupling of two end states, and enveloping of several states into a single
//! effective energy surface.
//!
//! ## Architectural Philosophy
//!
//! Every potential is an immutable parameter object. Positions are supplied per call and
//! normalized once at the boundary into [`Positions`].
//!
//! - **[`crate::core::traits`]: The Contracts.** [`Potential`] for position-only surfaces and
//!   [`PerturbedPotential`] for surfaces that also depend on the coupling parameter λ.
//!
//! - **[`crate::core::models`]: The Potentials.** Harmonic oscillator, double well, λ-scaled harmonic
//!   oscillator, linear and exponential coupling of two states, and the envelope potential that
//!   merges N states with a numerically stable log-sum-exp.
//!
//! - **[`crate::core::params`]: The Parameter Layer.** Serde records with the documented defaults that
//!   can be read from TOML and turned into ready-to-use potentials.

pub mod core;

pub use crate::core::error::PotentialError;
pub use crate::core::positions::Positions;
pub use crate::core::traits::{PerturbedPotential, Potential};
