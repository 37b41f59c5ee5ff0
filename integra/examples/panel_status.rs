//! Panel status example
//!
//! Prints version, clock, violated zones and active outputs with their names.

use integra::{ClientConfig, ObjectKind, Panel};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    
    // INTEGRA_HOST, INTEGRA_PORT, INTEGRA_ENCODING
    let config = ClientConfig::from_env()?;
    println!("Connecting to {}:{}...", config.host, config.port);
    
    let mut panel = Panel::new(config);
    
    let version = panel.get_version().await?;
    println!("{}", version);
    
    println!("Integra time: {}", panel.get_time().await?);
    
    let partition = panel.get_name(ObjectKind::Partition, 1).await?;
    let armed = panel.get_armed_partitions().await?;
    println!("{} armed: {}", partition.name(), armed.contains(&1));
    
    println!("Violated zones:");
    for zone in panel.get_violated_zones().await? {
        let name = panel.get_name(ObjectKind::Zone, u8::try_from(zone)?).await?;
        println!("{} {}:*", zone, name.name());
    }
    
    println!("Active outputs:");
    for output in panel.get_active_outputs().await? {
        let name = panel.get_name(ObjectKind::Output, u8::try_from(output)?).await?;
        println!("{} {}: ON", output, name.name());
    }
    
    Ok(())
}
