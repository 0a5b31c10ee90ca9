//! Service contract documents.
//!
//! Minimal serde model for the contract format the generator consumes. The
//! model only enforces structural defaults; semantic validation (required
//! HTTP method, name uniqueness, shape compatibility) happens during
//! synthesis so that a missing optional field never fails a parse.

use serde::Deserialize;

pub use wirestub_runtime::WireFormat;

use crate::error::Result;

/// A named service contract: the unit of client generation.
///
/// Immutable once parsed; the generator never mutates a contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContract {
    /// Contract name; by convention carries a leading `I` marker (`IFoo`).
    pub name: String,
    /// Whether the generated client must also satisfy this contract's type.
    #[serde(default)]
    pub inherit_interface: bool,
    /// Whether to emit a companion interface mirroring the client's public
    /// methods, excluding disposal.
    #[serde(default)]
    pub client_interface: bool,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl ServiceContract {
    /// Parse a contract from a JSON document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Parse a contract from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(document)?)
    }
}

/// One remote-invocable operation of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, unique within its contract.
    pub name: String,
    /// HTTP-like method token. Required: its absence is a generation error,
    /// not a parse error.
    #[serde(default)]
    pub method: Option<String>,
    /// URI template with optional `{param}` placeholders. Defaults to empty.
    #[serde(default)]
    pub uri_template: String,
    #[serde(default)]
    pub request_format: WireFormat,
    #[serde(default)]
    pub response_format: WireFormat,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Declared return shape. Omitted means asynchronous with no value.
    #[serde(default)]
    pub returns: DeclaredReturn,
}

/// A single operation parameter.
///
/// The type is opaque to the generator and passed through verbatim to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Return shape as declared on the contract, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "type")]
pub enum DeclaredReturn {
    /// Synchronous, no value.
    Unit,
    /// Synchronous value of the named type.
    Value(String),
    /// Asynchronous, no value.
    #[default]
    Async,
    /// Asynchronous value of the named type.
    AsyncValue(String),
}
