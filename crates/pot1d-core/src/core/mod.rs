//! # Core Module
//!
//! The building blocks of the library: input normalization, the potential contracts, the
//! closed-form kernels and the concrete potential types.
//!
//! ## Overview
//!
//! - **Positions** ([`positions`]) - Normalization of scalar, string and sequence inputs
//! - **Contracts** ([`traits`]) - The [`traits::Potential`] and [`traits::PerturbedPotential`] traits
//! - **Kernels** (`functions`) - Inline closed-form energies, derivatives and the log-sum-exp step
//! - **Potentials** ([`models`]) - Concrete unperturbed, perturbed and composite potentials
//! - **Parameters** ([`params`]) - Deserializable parameter records and TOML loading
//!
//! All potentials are immutable after construction and hold no call-scoped state, so they are
//! `Send + Sync` and may be evaluated from several threads at once.

pub mod error;
pub(crate) mod functions;
pub mod models;
pub mod params;
pub mod positions;
pub mod traits;
