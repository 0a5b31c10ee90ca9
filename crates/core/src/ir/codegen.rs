//! Client synthesis from a parsed service contract.
//!
//! `synthesize_client` walks the contract's operations in declaration order,
//! asks normalization for each operation's classification and shape, and
//! assembles the resulting [`ClientIr`]. The first fatal condition aborts
//! synthesis for the entire contract.

use std::collections::HashSet;

use wirestub_runtime::OperationRouting;

use crate::contract::{Operation, ServiceContract};
use crate::error::GenerateError;

use super::client::{ClientIr, MethodIr};
use super::normalize::{check_duplicate_parameters, normalize_return, split_parameters};

/// Derive the client type name: strip one leading `I` marker if present,
/// append `Client`. `IFoo` becomes `FooClient`; `Foo` becomes `FooClient`.
fn client_type_name(contract_name: &str) -> String {
    let base = contract_name.strip_prefix('I').unwrap_or(contract_name);
    format!("{base}Client")
}

/// Synthesize the client descriptor for a whole contract.
///
/// Pure, deterministic and idempotent: the same contract always yields a
/// structurally identical descriptor. Errors identify the offending
/// operation and abort the whole contract; no partial descriptor escapes.
pub fn synthesize_client(contract: &ServiceContract) -> Result<ClientIr, GenerateError> {
    let name = client_type_name(&contract.name);

    let mut seen = HashSet::new();
    let mut methods = Vec::with_capacity(contract.operations.len());
    for op in &contract.operations {
        if !seen.insert(op.name.as_str()) {
            return Err(GenerateError::DuplicateOperation {
                contract: contract.name.clone(),
                operation: op.name.clone(),
            });
        }
        methods.push(synthesize_method(contract, op)?);
    }

    Ok(ClientIr {
        companion_interface: contract.client_interface.then(|| format!("I{name}")),
        name,
        contract_name: contract.name.clone(),
        implements_contract: contract.inherit_interface,
        methods,
    })
}

fn synthesize_method(
    contract: &ServiceContract,
    op: &Operation,
) -> Result<MethodIr, GenerateError> {
    let method = match op.method.as_deref().map(str::trim) {
        Some(method) if !method.is_empty() => method,
        _ => {
            return Err(GenerateError::MissingMethod {
                contract: contract.name.clone(),
                operation: op.name.clone(),
            });
        }
    };

    check_duplicate_parameters(&contract.name, op)?;
    let shape = normalize_return(&contract.name, op, contract.inherit_interface)?;
    let (query, body) = split_parameters(&op.uri_template, &op.parameters);

    Ok(MethodIr {
        name: op.name.clone(),
        params: op.parameters.clone(),
        shape,
        routing: OperationRouting::new(
            method,
            op.uri_template.clone(),
            op.request_format,
            op.response_format,
        ),
        query_params: query.into_iter().map(|p| p.name.clone()).collect(),
        body_params: body.into_iter().map(|p| p.name.clone()).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use wirestub_runtime::WireFormat;

    use crate::contract::{DeclaredReturn, Parameter};
    use crate::ir::ReturnShape;

    use super::*;

    fn foo_contract() -> ServiceContract {
        ServiceContract {
            name: "IFoo".to_owned(),
            inherit_interface: true,
            client_interface: true,
            operations: vec![
                Operation {
                    name: "GetStringAsync".to_owned(),
                    method: Some("GET".to_owned()),
                    uri_template: "foo/{value}".to_owned(),
                    request_format: WireFormat::Json,
                    response_format: WireFormat::Xml,
                    parameters: vec![
                        Parameter {
                            name: "value".to_owned(),
                            ty: "String".to_owned(),
                        },
                        Parameter {
                            name: "bar".to_owned(),
                            ty: "String".to_owned(),
                        },
                    ],
                    returns: DeclaredReturn::AsyncValue("String".to_owned()),
                },
                Operation {
                    name: "ExecuteStringAsync".to_owned(),
                    method: Some("GET".to_owned()),
                    uri_template: "foo/{value}".to_owned(),
                    request_format: WireFormat::Json,
                    response_format: WireFormat::Xml,
                    parameters: vec![
                        Parameter {
                            name: "value".to_owned(),
                            ty: "String".to_owned(),
                        },
                        Parameter {
                            name: "bar".to_owned(),
                            ty: "String".to_owned(),
                        },
                    ],
                    returns: DeclaredReturn::Async,
                },
            ],
        }
    }

    #[test]
    fn test_client_name_strips_one_leading_marker() {
        assert_eq!(client_type_name("IFoo"), "FooClient");
        assert_eq!(client_type_name("Foo"), "FooClient");
        assert_eq!(client_type_name("IIterator"), "IteratorClient");
    }

    #[test]
    fn test_synthesize_full_contract() {
        let client = synthesize_client(&foo_contract()).unwrap();
        assert_eq!(client.name, "FooClient");
        assert_eq!(client.contract_name, "IFoo");
        assert!(client.implements_contract);
        assert_eq!(client.companion_interface.as_deref(), Some("IFooClient"));
        assert_eq!(client.methods.len(), 2);

        let get = &client.methods[0];
        assert_eq!(get.shape, ReturnShape::ResultOf("String".to_owned()));
        assert_eq!(get.query_params, ["value"]);
        assert_eq!(get.body_params, ["bar"]);
        assert_eq!(get.routing.method, "GET");
        assert_eq!(get.routing.uri_template, "foo/{value}");
        assert_eq!(get.routing.request_format, WireFormat::Json);
        assert_eq!(get.routing.response_format, WireFormat::Xml);
        // Parameter list is passed through unchanged.
        assert_eq!(get.params.len(), 2);
        assert_eq!(get.params[0].name, "value");

        let execute = &client.methods[1];
        assert_eq!(execute.shape, ReturnShape::FireAndForget);
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let contract = foo_contract();
        let first = synthesize_client(&contract).unwrap();
        let second = synthesize_client(&contract).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_method_aborts_generation() {
        let mut contract = foo_contract();
        contract.operations[1].method = None;
        let err = synthesize_client(&contract).unwrap_err();
        assert!(matches!(err, GenerateError::MissingMethod { .. }));
        assert!(err.to_string().contains("ExecuteStringAsync"));
    }

    #[test]
    fn test_blank_method_token_is_missing() {
        let mut contract = foo_contract();
        contract.operations[0].method = Some("  ".to_owned());
        let err = synthesize_client(&contract).unwrap_err();
        assert_eq!(err.code(), "WS0001");
    }

    #[test]
    fn test_duplicate_operation_names_abort() {
        let mut contract = foo_contract();
        contract.operations[1].name = "GetStringAsync".to_owned();
        let err = synthesize_client(&contract).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateOperation { .. }));
    }

    #[test]
    fn test_flags_default_to_plain_client() {
        let mut contract = foo_contract();
        contract.inherit_interface = false;
        contract.client_interface = false;
        let client = synthesize_client(&contract).unwrap();
        assert!(!client.implements_contract);
        assert_eq!(client.companion_interface, None);
    }

    #[test]
    fn test_sync_shape_conflict_names_operation() {
        let mut contract = foo_contract();
        contract.operations[0].returns = DeclaredReturn::Value("String".to_owned());
        let err = synthesize_client(&contract).unwrap_err();
        assert!(matches!(err, GenerateError::ShapeConflict { .. }));
        assert!(err.to_string().contains("GetStringAsync"));

        // Without inheritance the same contract generates, wrapping the
        // synchronous shape into its asynchronous counterpart.
        contract.inherit_interface = false;
        let client = synthesize_client(&contract).unwrap();
        assert_eq!(
            client.methods[0].shape,
            ReturnShape::ResultOf("String".to_owned())
        );
    }
}
