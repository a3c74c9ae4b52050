fn main() -> anyhow::Result<()> {
    hearth_observability::init();

    let config = hearth_demo::DemoConfig::from_env()?;
    tracing::info!(currency = %config.report_currency, "building demo household");

    let report = hearth_demo::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
