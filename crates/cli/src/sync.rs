//! The one command: push a profile to every terminal, every editor, and
//! the global look-and-feel, strictly in that order.

use themeflip_core::{Result, bus, konsole, lookandfeel, nvim};
use tracing::{debug, info};

/// Sequential and unforgiving: the first failure aborts the remaining
/// steps and leaves earlier updates in place.
pub async fn run(profile: &str) -> Result<()> {
    let conn = bus::session_bus().await?;

    let services: Vec<String> = bus::list_service_names(&conn)
        .await?
        .into_iter()
        .filter(|name| konsole::is_konsole_service(name))
        .collect();
    debug!(count = services.len(), "discovered konsole services");

    for service in &services {
        konsole::set_profile(&conn, service, profile).await?;
    }
    konsole::set_profile(&conn, konsole::YAKUAKE_SERVICE, profile).await?;

    for socket in nvim::socket_paths()? {
        nvim::reload_config(&socket).await?;
    }

    // Theme-name validity is only discovered here; see lookandfeel::apply.
    lookandfeel::apply(profile).await?;

    info!(profile, "theme applied");
    Ok(())
}
