//! Parse a route-lock formula clause by clause
//!
//! Run with: `cargo run --example route_lock -- "(21 10T) (1R但30秒)"`

use interlock_sdk::ConditionEngineBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let formula = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(21 [10T]) ((22)) (1R但30秒)".to_string());

    let engine = ConditionEngineBuilder::new()
        .add_name_table_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config/names.yaml"))
        .build()
        .await?;

    let report = engine.parse_route_lock(&formula);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.has_errors() {
        anyhow::bail!("{} clause(s) rejected", report.errors().count());
    }
    Ok(())
}
