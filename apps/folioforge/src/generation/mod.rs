//! Portfolio generation — the simulated pass over the pure builder.
//!
//! Flow: fixed-latency wait → `builder::build` → portfolio snapshot.
//! There is no model call behind the latency; the wait only paces the UI.

pub mod builder;
pub mod defaults;

use std::time::Duration;

use tracing::{debug, info};

use crate::models::{FormInput, Portfolio};

/// Default simulated generation latency.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Runs one generation pass: waits out the simulated latency, then builds.
///
/// The returned future is cancellable by drop; nothing is produced until
/// the wait completes. Callers that must refuse concurrent passes gate on
/// their own pending flag; this function itself is reentrant.
pub async fn generate(input: &FormInput, delay: Duration) -> Portfolio {
    info!("Generation pass started ({} ms simulated latency)", delay.as_millis());
    tokio::time::sleep(delay).await;

    let portfolio = builder::build(input);
    info!(
        "Generated portfolio for {:?}: {} skills, {} projects",
        portfolio.name,
        portfolio.skills.len(),
        portfolio.projects.len()
    );
    debug!(
        "Portfolio record: {}",
        serde_json::to_string(&portfolio).unwrap_or_default()
    );
    portfolio
}
