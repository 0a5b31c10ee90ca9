//! Typed remote-invocation client generation.
//!
//! wirestub turns a service contract (named operations annotated with
//! routing and serialization metadata) into a client type that translates
//! every call into a structured request and dispatches it through an
//! injected [`RequestProcessor`](wirestub_runtime::RequestProcessor).
//!
//! The pipeline is:
//! 1. Parse: contract document -> [`ServiceContract`]
//! 2. Synthesize: [`ServiceContract`] -> [`ir::ClientIr`] (language-agnostic)
//! 3. Emit: [`ir::ClientIr`] -> Rust source via the [`ir::Emit`] trait
//!
//! Generation is a pure, deterministic function of its input: one contract
//! in, one client descriptor (or one fatal error) out. Fatal errors abort
//! the whole contract and are surfaced as a single structured diagnostic;
//! partial output is never produced.

pub mod contract;
pub mod diagnostics;
pub mod error;
mod generator;
pub mod ir;

pub use crate::{
    contract::{DeclaredReturn, Operation, Parameter, ServiceContract, WireFormat},
    error::{GenerateError, Result},
    generator::{generate, generate_contract, synthesize_reporting},
};
