//! Intermediate representation for client generation.
//!
//! This module implements a three-phase architecture:
//! 1. Normalize: one contract operation -> classified parameters + return shape
//! 2. Synthesize: whole contract -> [`ClientIr`] (language-agnostic)
//! 3. Emit: [`ClientIr`] -> Rust source strings via the [`Emit`] trait
//!
//! The separation keeps all contract corner cases in normalization, makes
//! synthesis a testable descriptor-to-descriptor transformation, and leaves
//! emission as purely mechanical string building.
//!
//! ## Module structure
//!
//! - `client`: client IR (`ClientIr`, `MethodIr`, `ReturnShape`)
//! - `normalize`: parameter classification and return-shape normalization
//! - `codegen`: `ServiceContract` -> `ClientIr` synthesis
//! - `emit`: `ClientIr` -> source strings (via the `Emit` trait)
//! - `utils`: identifier and literal helpers shared by emission

mod client;
mod codegen;
mod emit;
mod normalize;
pub mod utils;

pub use client::{ClientIr, MethodIr, ReturnShape};
pub use codegen::synthesize_client;
pub use emit::Emit;
pub use normalize::{ParamBinding, classify_parameter, normalize_return, split_parameters};
