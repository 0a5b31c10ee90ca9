//! Rust source emission via the `Emit` trait.
//!
//! Purely mechanical string building over the client IR. Each IR node
//! implements [`Emit`]; [`ClientIr::emit`] produces one self-contained
//! module per client. Renderers for other targets consume the IR directly
//! and ignore this module.

use wirestub_runtime::{OperationRouting, WireFormat};

use super::client::{ClientIr, MethodIr, ReturnShape};
use super::utils::{escape_str_literal, method_ident, param_ident};

/// Trait for emitting Rust source from IR nodes.
pub trait Emit {
    /// Convert the IR node to its Rust source representation.
    fn emit(&self) -> String;
}

impl Emit for WireFormat {
    fn emit(&self) -> String {
        match self {
            WireFormat::Unspecified => "WireFormat::Unspecified".to_owned(),
            WireFormat::Json => "WireFormat::Json".to_owned(),
            WireFormat::Xml => "WireFormat::Xml".to_owned(),
        }
    }
}

impl Emit for ReturnShape {
    fn emit(&self) -> String {
        match self {
            ReturnShape::FireAndForget => "Result<(), ClientError>".to_owned(),
            ReturnShape::ResultOf(ty) => format!("Result<{ty}, ClientError>"),
        }
    }
}

impl Emit for OperationRouting {
    fn emit(&self) -> String {
        format!(
            "OperationRouting::new(\"{}\", \"{}\", {}, {})",
            escape_str_literal(&self.method),
            escape_str_literal(&self.uri_template),
            self.request_format.emit(),
            self.response_format.emit(),
        )
    }
}

impl MethodIr {
    /// Signature shared by the inherent method and the trait mirrors:
    /// `name(&self, a: A, b: B)`, without the return type.
    fn signature(&self) -> String {
        let mut sig = format!("{}(&self", method_ident(&self.name));
        for param in &self.params {
            sig.push_str(&format!(", {}: {}", param_ident(&param.name), param.ty));
        }
        sig.push(')');
        sig
    }

    /// Argument list forwarding the parameters by name.
    fn forward_args(&self) -> String {
        self.params
            .iter()
            .map(|p| param_ident(&p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Processor call selected by the return shape. Exactly one of the two
    /// dispatch methods is ever used per operation.
    fn dispatch_call(&self) -> &'static str {
        match self.shape {
            ReturnShape::FireAndForget => "execute",
            ReturnShape::ResultOf(_) => "fetch_result",
        }
    }

    fn emit_map(&self, target: &str, names: &[String], out: &mut String) {
        if names.is_empty() {
            out.push_str(&format!("        let {target} = ParamMap::new();\n"));
            return;
        }
        out.push_str(&format!("        let mut {target} = ParamMap::new();\n"));
        for name in names {
            out.push_str(&format!(
                "        {target}.insert(\"{}\".to_owned(), serde_json::to_value(&{})?);\n",
                escape_str_literal(name),
                param_ident(name),
            ));
        }
    }
}

impl Emit for MethodIr {
    fn emit(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "    pub async fn {} -> {} {{\n",
            self.signature(),
            self.shape.emit()
        ));
        out.push_str("        self.disposed.ensure_live()?;\n");
        out.push_str(&format!("        let routing = {};\n", self.routing.emit()));
        self.emit_map("query", &self.query_params, &mut out);
        self.emit_map("body", &self.body_params, &mut out);
        out.push_str("        let request = RemoteRequest::new(routing, query, body);\n");
        out.push_str(&format!(
            "        self.processor.{}(request).await\n",
            self.dispatch_call()
        ));
        out.push_str("    }\n");
        out
    }
}

impl ClientIr {
    fn emit_imports(&self) -> String {
        let mut out = String::new();
        if self.companion_interface.is_some() {
            out.push_str("use std::future::Future;\n\n");
        }
        let mut items = vec!["ClientError", "DisposeFlag", "RequestProcessor"];
        if !self.methods.is_empty() {
            items.extend(["OperationRouting", "ParamMap", "RemoteRequest", "WireFormat"]);
        }
        items.sort_unstable();
        out.push_str(&format!("use wirestub_runtime::{{{}}};\n", items.join(", ")));
        if self.implements_contract {
            out.push_str(&format!("\nuse super::{};\n", self.contract_name));
        }
        out
    }

    fn emit_trait_decl(&self, trait_name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("pub trait {trait_name} {{\n"));
        for method in &self.methods {
            out.push_str(&format!(
                "    fn {} -> impl Future<Output = {}> + Send;\n",
                method.signature(),
                method.shape.emit()
            ));
        }
        out.push_str("}\n");
        out
    }

    /// Trait impl whose methods forward to the inherent ones.
    fn emit_forwarding_impl(&self, trait_name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "impl<P: RequestProcessor> {trait_name} for {}<P> {{\n",
            self.name
        ));
        for (index, method) in self.methods.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "    async fn {} -> {} {{\n",
                method.signature(),
                method.shape.emit()
            ));
            out.push_str(&format!(
                "        self.{}({}).await\n",
                method_ident(&method.name),
                method.forward_args()
            ));
            out.push_str("    }\n");
        }
        out.push_str("}\n");
        out
    }
}

impl Emit for ClientIr {
    fn emit(&self) -> String {
        let mut out = String::new();
        out.push_str("// @generated by wirestub. Do not edit.\n\n");
        out.push_str(&self.emit_imports());
        out.push('\n');
        out.push_str(&format!(
            "/// Generated remote client for the `{}` contract.\n",
            self.contract_name
        ));
        out.push_str("#[derive(Debug)]\n");
        out.push_str(&format!(
            "pub struct {}<P: RequestProcessor> {{\n",
            self.name
        ));
        out.push_str("    processor: P,\n");
        out.push_str("    disposed: DisposeFlag,\n");
        out.push_str("}\n\n");
        out.push_str(&format!("impl<P: RequestProcessor> {}<P> {{\n", self.name));
        out.push_str("    /// Build a client around `processor`.\n");
        out.push_str("    ///\n");
        out.push_str("    /// Fails with [`ClientError::MissingProcessor`] when the processor is\n");
        out.push_str("    /// absent.\n");
        out.push_str("    pub fn new(processor: impl Into<Option<P>>) -> Result<Self, ClientError> {\n");
        out.push_str("        let Some(processor) = processor.into() else {\n");
        out.push_str("            return Err(ClientError::MissingProcessor);\n");
        out.push_str("        };\n");
        out.push_str("        Ok(Self {\n");
        out.push_str("            processor,\n");
        out.push_str("            disposed: DisposeFlag::new(),\n");
        out.push_str("        })\n");
        out.push_str("    }\n\n");
        out.push_str("    /// Dispose the underlying processor. Later calls are no-ops.\n");
        out.push_str("    pub fn dispose(&self) {\n");
        out.push_str("        if self.disposed.dispose() {\n");
        out.push_str("            self.processor.dispose();\n");
        out.push_str("        }\n");
        out.push_str("    }\n");
        for method in &self.methods {
            out.push('\n');
            out.push_str(&method.emit());
        }
        out.push_str("}\n\n");
        out.push_str(&format!(
            "impl<P: RequestProcessor> Drop for {}<P> {{\n",
            self.name
        ));
        out.push_str("    fn drop(&mut self) {\n");
        out.push_str("        self.dispose();\n");
        out.push_str("    }\n");
        out.push_str("}\n");
        if let Some(trait_name) = &self.companion_interface {
            out.push('\n');
            out.push_str(&format!(
                "/// Mirror of the remote surface of [`{}`].\n",
                self.name
            ));
            out.push_str(&self.emit_trait_decl(trait_name));
            out.push('\n');
            out.push_str(&self.emit_forwarding_impl(trait_name));
        }
        if self.implements_contract {
            out.push('\n');
            out.push_str(&self.emit_forwarding_impl(&self.contract_name));
        }
        out
    }
}
