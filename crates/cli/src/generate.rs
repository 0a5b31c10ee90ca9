//! `wirestub generate`: render client sources from contract documents.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, error};
use wirestub_core::diagnostics::Diagnostic;
use wirestub_core::ir::Emit;
use wirestub_core::ir::utils::to_snake_case;
use wirestub_core::{ServiceContract, synthesize_reporting};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Contract documents (JSON or YAML)
    #[arg(required = true)]
    pub contracts: Vec<PathBuf>,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "generated")]
    pub out_dir: PathBuf,
}

/// Generate every contract independently; a failing contract does not stop
/// its siblings.
pub fn run(args: GenerateArgs) -> i32 {
    let mut failed = false;
    for path in &args.contracts {
        match generate_file(path, &args.out_dir) {
            Ok(out) => {
                println!(
                    "{} {}",
                    style("Generated").green().bold(),
                    out.display()
                );
            }
            Err(message) => {
                error!(contract = %path.display(), "{message}");
                eprintln!(
                    "{} {}: {message}",
                    style("Failed").red().bold(),
                    path.display()
                );
                failed = true;
            }
        }
    }
    if failed { 1 } else { 0 }
}

fn generate_file(path: &Path, out_dir: &Path) -> Result<PathBuf, String> {
    let document =
        fs::read_to_string(path).map_err(|err| format!("failed to read contract: {err}"))?;

    let contract = parse_contract(path, &document)?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let client = match synthesize_reporting(&contract, &mut diagnostics) {
        Ok(client) => client,
        Err(_) => return Err(render_diagnostics(&diagnostics)),
    };

    let file_name = format!("{}.rs", to_snake_case(&client.name));
    let out_path = out_dir.join(file_name);
    debug!(client = %client.name, out = %out_path.display(), "writing generated client");

    fs::create_dir_all(out_dir)
        .map_err(|err| format!("failed to create output directory: {err}"))?;
    fs::write(&out_path, client.emit())
        .map_err(|err| format!("failed to write generated source: {err}"))?;

    Ok(out_path)
}

fn parse_contract(path: &Path, document: &str) -> Result<ServiceContract, String> {
    let yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if yaml {
        ServiceContract::from_yaml(document)
    } else {
        ServiceContract::from_json(document)
    };
    parsed.map_err(|err| {
        let diagnostic = Diagnostic::from(&err);
        format!("[{}] {}", diagnostic.code, diagnostic.message)
    })
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("[{}] {}", d.code, d.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const FOO_CONTRACT: &str = r#"{
        "name": "IFoo",
        "operations": [
            {
                "name": "GetStringAsync",
                "method": "GET",
                "uriTemplate": "foo/{value}",
                "parameters": [
                    { "name": "value", "type": "String" },
                    { "name": "bar", "type": "String" }
                ],
                "returns": { "kind": "asyncValue", "type": "String" }
            }
        ]
    }"#;

    #[test]
    fn test_generate_file_writes_snake_cased_output() {
        let dir = tempfile::tempdir().unwrap();
        let contract_path = dir.path().join("ifoo.json");
        fs::write(&contract_path, FOO_CONTRACT).unwrap();

        let out_dir = dir.path().join("generated");
        let out_path = generate_file(&contract_path, &out_dir).unwrap();

        assert_eq!(out_path.file_name().and_then(|n| n.to_str()), Some("foo_client.rs"));
        let source = fs::read_to_string(&out_path).unwrap();
        assert!(source.contains("pub struct FooClient<P: RequestProcessor> {"));
    }

    #[test]
    fn test_generate_file_reports_stable_codes() {
        let dir = tempfile::tempdir().unwrap();
        let contract_path = dir.path().join("broken.json");
        fs::write(
            &contract_path,
            r#"{ "name": "IFoo", "operations": [{ "name": "PingAsync" }] }"#,
        )
        .unwrap();

        let message = generate_file(&contract_path, &dir.path().join("generated")).unwrap_err();
        assert!(message.contains("[WS0001]"));
        assert!(message.contains("PingAsync"));
    }

    #[test]
    fn test_yaml_contracts_parse_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let contract_path = dir.path().join("ifoo.yaml");
        fs::write(
            &contract_path,
            "name: IFoo\noperations:\n  - name: PingAsync\n    method: GET\n",
        )
        .unwrap();

        let out_path = generate_file(&contract_path, &dir.path().join("generated")).unwrap();
        let source = fs::read_to_string(out_path).unwrap();
        assert!(source.contains("self.processor.execute(request).await"));
    }
}
