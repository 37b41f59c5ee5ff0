//! Event log example
//!
//! Walks back through the most recent events.

use integra::{ClientConfig, Panel};
use integra_core::constants::LATEST_EVENT;

#[tokio::main]
async fn main() -> integra::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    
    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);
    
    let mut panel = Panel::new(ClientConfig::from_env()?);
    
    for event in panel.get_events(LATEST_EVENT, count).await? {
        println!(
            "{} [{}] {} (restore: {})",
            event,
            event.event_index(),
            event.event_class,
            event.restore
        );
    }
    
    Ok(())
}
