//! Structured request values carried from a generated client to its processor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Serialization format attached to an operation's request or response side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// No format declared; the processor applies its own default.
    #[default]
    Unspecified,
    Json,
    Xml,
}

/// Routing metadata for one remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRouting {
    /// HTTP-like method token, e.g. `GET`.
    pub method: String,
    /// URI template, possibly containing `{param}` placeholders.
    pub uri_template: String,
    pub request_format: WireFormat,
    pub response_format: WireFormat,
}

impl OperationRouting {
    pub fn new(
        method: impl Into<String>,
        uri_template: impl Into<String>,
        request_format: WireFormat,
        response_format: WireFormat,
    ) -> Self {
        Self {
            method: method.into(),
            uri_template: uri_template.into(),
            request_format,
            response_format,
        }
    }
}

/// Parameter values keyed by contract parameter name.
pub type ParamMap = BTreeMap<String, serde_json::Value>;

/// One remote invocation: routing metadata plus the classified parameters.
///
/// `query` holds parameters whose name appears as a `{placeholder}` in the
/// URI template; everything else travels in `body`. Generated methods build
/// both maps once and never mutate the request afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub routing: OperationRouting,
    pub query: ParamMap,
    pub body: ParamMap,
}

impl RemoteRequest {
    pub fn new(routing: OperationRouting, query: ParamMap, body: ParamMap) -> Self {
        Self {
            routing,
            query,
            body,
        }
    }
}
