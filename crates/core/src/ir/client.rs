//! Client IR: the language-agnostic description of a synthesized client.
//!
//! Values here are plain data produced by `codegen` and consumed by a
//! renderer. Nothing in this module performs I/O or inspects contracts.

use wirestub_runtime::OperationRouting;

use crate::contract::Parameter;

/// Normalized asynchronous return shape of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// No result value; dispatched through the processor's no-result call.
    FireAndForget,
    /// Asynchronous result of the named type; dispatched through the
    /// processor's result-bearing call.
    ResultOf(String),
}

/// One synthesized client method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodIr {
    /// Operation name as declared on the contract.
    pub name: String,
    /// Parameter list, passed through unchanged.
    pub params: Vec<Parameter>,
    pub shape: ReturnShape,
    /// Routing value the method constructs before dispatching.
    pub routing: OperationRouting,
    /// Names of query-bound parameters, in declaration order.
    pub query_params: Vec<String>,
    /// Names of body-bound parameters, in declaration order.
    pub body_params: Vec<String>,
}

/// A synthesized client type.
///
/// Every client additionally carries one `processor` dependency field, a
/// guarded constructor failing on an absent processor, and a disposal method
/// that forwards to the processor exactly once; renderers materialize those
/// fixed members for their target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIr {
    /// Client type name, e.g. `FooClient`.
    pub name: String,
    /// Name of the source contract, e.g. `IFoo`.
    pub contract_name: String,
    /// Whether the client also satisfies the source contract type.
    pub implements_contract: bool,
    /// Companion interface name, when one was requested.
    pub companion_interface: Option<String>,
    /// Generated methods, in contract declaration order.
    pub methods: Vec<MethodIr>,
}
