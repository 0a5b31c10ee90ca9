//! Top-level generation pipeline.
//!
//! Thin wrapper around the IR-based generation:
//! 1. Parse: contract document -> `ServiceContract`
//! 2. Synthesize: `ServiceContract` -> `ClientIr`
//! 3. Emit: `ClientIr` -> Rust source (via the `Emit` trait)

use tracing::debug;

use crate::contract::ServiceContract;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::ir::{ClientIr, Emit, synthesize_client};

/// Generate Rust client source from a JSON contract document.
pub fn generate(contract_json: &str) -> Result<String> {
    let contract = ServiceContract::from_json(contract_json)?;
    generate_contract(&contract)
}

/// Generate Rust client source from an already-parsed contract.
pub fn generate_contract(contract: &ServiceContract) -> Result<String> {
    let client = synthesize_client(contract)?;
    debug!(
        contract = %contract.name,
        client = %client.name,
        methods = client.methods.len(),
        "synthesized client descriptor"
    );
    Ok(client.emit())
}

/// Synthesize a client descriptor, reporting any fatal error to `sink` as a
/// single structured diagnostic before returning it.
pub fn synthesize_reporting(
    contract: &ServiceContract,
    sink: &mut dyn DiagnosticSink,
) -> Result<ClientIr> {
    match synthesize_client(contract) {
        Ok(client) => Ok(client),
        Err(err) => {
            sink.report(Diagnostic::from(&err));
            Err(err)
        }
    }
}
