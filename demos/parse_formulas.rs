//! Parse a handful of condition expressions and print the trees as JSON
//!
//! Run with: `RUST_LOG=debug cargo run --example parse_formulas`

use interlock_sdk::ConditionEngineBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = ConditionEngineBuilder::new()
        .add_name_table_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config/names.yaml"))
        .enable_tracing(true)
        .build()
        .await?;

    let formulas = [
        "21 22 (23)",
        "1R又は2R但30秒",
        "10T[11T[[12T]]13T]",
        "<((L11))> X1",
        "21 Q99",
        "22 23>",
    ];

    for (formula, report) in formulas.iter().zip(engine.parse_many(&formulas[..])) {
        println!("=== {}", formula);
        println!("{}", serde_json::to_string_pretty(&report.nodes)?);
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}
