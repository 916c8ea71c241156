// Performs the single background fetch for the TUI session.
use crate::client::ListingClient;
use crate::config::Config;
use crate::tui::action::AppEvent;
use tokio::sync::mpsc::Sender;

/// Fetches the full listing once and reports back over the event channel.
/// There is no retry, refresh, or cross-session cache: a failure is terminal
/// for this session's data load and is surfaced as a single error message.
pub async fn run_network_actor(config: Config, event_tx: Sender<AppEvent>) {
    let _ = event_tx
        .send(AppEvent::Status("Loading schools data...".to_string()))
        .await;

    let client = match ListingClient::new(&config.listing_url) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Listing client init failed: {}", e);
            let _ = event_tx.send(AppEvent::Error(e)).await;
            return;
        }
    };

    match client.fetch_schools().await {
        Ok(schools) => {
            let _ = event_tx.send(AppEvent::SchoolsLoaded(schools)).await;
            let _ = event_tx.send(AppEvent::Status("Ready.".to_string())).await;
        }
        Err(e) => {
            log::warn!("Listing fetch failed: {}", e);
            let _ = event_tx.send(AppEvent::Error(e)).await;
        }
    }
}
