//! Normalization of contract operations.
//!
//! Two per-operation decisions are made here:
//! - which parameters are query-bound vs body-bound (exact `{name}` token
//!   containment in the URI template)
//! - the operation's effective return shape and thereby its dispatch kind

use std::collections::HashSet;

use crate::contract::{DeclaredReturn, Operation, Parameter};
use crate::error::GenerateError;

use super::client::ReturnShape;

/// Where a classified parameter travels in the remote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamBinding {
    /// Named by a `{placeholder}` in the URI template.
    Query,
    /// Everything else; carried in the request body.
    Body,
}

/// Classify one parameter against the operation's URI template.
///
/// The containment test is exact: the template must contain the bracketed
/// token `{name}`. A parameter named `id` is not matched by `{identity}`.
/// Parameters never interact; each is classified independently.
pub fn classify_parameter(uri_template: &str, name: &str) -> ParamBinding {
    let placeholder = format!("{{{name}}}");
    if uri_template.contains(&placeholder) {
        ParamBinding::Query
    } else {
        ParamBinding::Body
    }
}

/// Split an operation's parameters into `(query, body)` groups, preserving
/// declaration order within each group.
pub fn split_parameters<'a>(
    uri_template: &str,
    parameters: &'a [Parameter],
) -> (Vec<&'a Parameter>, Vec<&'a Parameter>) {
    let mut query = Vec::new();
    let mut body = Vec::new();
    for parameter in parameters {
        match classify_parameter(uri_template, &parameter.name) {
            ParamBinding::Query => query.push(parameter),
            ParamBinding::Body => body.push(parameter),
        }
    }
    (query, body)
}

/// Re-validate that parameter names are unique within one operation.
///
/// Parsed contracts cannot normally violate this, but hand-assembled
/// descriptors can, and a collision would silently merge map entries.
pub fn check_duplicate_parameters(
    contract_name: &str,
    op: &Operation,
) -> Result<(), GenerateError> {
    let mut seen = HashSet::new();
    for parameter in &op.parameters {
        if !seen.insert(parameter.name.as_str()) {
            return Err(GenerateError::DuplicateParameter {
                contract: contract_name.to_owned(),
                operation: op.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}

/// Fold the declared return into the closed [`ReturnShape`] tag.
///
/// Synchronous shapes are wrapped into their asynchronous counterparts.
/// That wrapping is only possible when the client is not required to satisfy
/// the original contract type; under inheritance a synchronous shape is a
/// fatal conflict.
pub fn normalize_return(
    contract_name: &str,
    op: &Operation,
    inherit_interface: bool,
) -> Result<ReturnShape, GenerateError> {
    match (&op.returns, inherit_interface) {
        (DeclaredReturn::Async, _) => Ok(ReturnShape::FireAndForget),
        (DeclaredReturn::AsyncValue(ty), _) => Ok(ReturnShape::ResultOf(ty.clone())),
        (DeclaredReturn::Unit, false) => Ok(ReturnShape::FireAndForget),
        (DeclaredReturn::Value(ty), false) => Ok(ReturnShape::ResultOf(ty.clone())),
        (DeclaredReturn::Unit | DeclaredReturn::Value(_), true) => {
            Err(GenerateError::ShapeConflict {
                contract: contract_name.to_owned(),
                operation: op.name.clone(),
            })
        }
    }
}
