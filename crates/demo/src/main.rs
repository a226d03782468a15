use anyhow::Context;

fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let config = acme_demo::DemoConfig::from_env();
    let outcome = acme_demo::run(&config, chrono::Utc::now())
        .with_context(|| format!("building purchase order {}", config.order_number))?;

    println!("order total: {}", outcome.total);
    Ok(())
}
