//! Profile updates for Konsole-compatible terminals over the
//! `org.kde.konsole.*` D-Bus interfaces.
//!
//! Each running Konsole registers a unique `org.kde.konsole-<pid>` name
//! and exposes its windows under `/Windows/<n>` and sessions under
//! `/Sessions/<n>`. Yakuake speaks the same interfaces under a fixed
//! well-known name.

use tracing::info;
use zbus::{Connection, proxy};

use crate::bus;
use crate::error::{Error, Result};

/// Yakuake is always addressed in addition to whatever Konsole instances
/// discovery turns up.
pub const YAKUAKE_SERVICE: &str = "org.kde.yakuake";

const KONSOLE_PREFIX: &str = "org.kde.konsole-";

#[proxy(
    interface = "org.kde.konsole.Window",
    assume_defaults = false,
    gen_blocking = false
)]
trait Window {
    #[zbus(name = "defaultProfile")]
    async fn default_profile(&self) -> zbus::Result<String>;

    #[zbus(name = "setDefaultProfile")]
    async fn set_default_profile(&self, profile: &str) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.kde.konsole.Session",
    assume_defaults = false,
    gen_blocking = false
)]
trait Session {
    #[zbus(name = "profile")]
    async fn profile(&self) -> zbus::Result<String>;

    #[zbus(name = "setProfile")]
    async fn set_profile(&self, profile: &str) -> zbus::Result<()>;
}

/// Whether a bus name belongs to a Konsole process.
pub fn is_konsole_service(name: &str) -> bool {
    name.contains(KONSOLE_PREFIX)
}

/// Point every window and session of `service` at `profile`.
///
/// Windows are updated before sessions, in the order the service
/// enumerates them. Each handle gets exactly one read (logged for the
/// operator) and one write; a failure part-way leaves earlier handles
/// updated.
pub async fn set_profile(conn: &Connection, service: &str, profile: &str) -> Result<()> {
    for window in bus::introspect_children(conn, service, "/Windows").await? {
        set_window_profile(conn, service, &window, profile).await?;
    }
    for session in bus::introspect_children(conn, service, "/Sessions").await? {
        set_session_profile(conn, service, &session, profile).await?;
    }
    Ok(())
}

async fn set_window_profile(
    conn: &Connection,
    service: &str,
    window: &str,
    profile: &str,
) -> Result<()> {
    let proxy = WindowProxy::builder(conn)
        .destination(service.to_owned())?
        .path(format!("/Windows/{window}"))?
        .build()
        .await?;
    let current = proxy
        .default_profile()
        .await
        .map_err(|e| Error::from_call(service, e))?;
    info!(service, window, %current, "setting window default profile");
    proxy
        .set_default_profile(profile)
        .await
        .map_err(|e| Error::from_call(service, e))?;
    Ok(())
}

async fn set_session_profile(
    conn: &Connection,
    service: &str,
    session: &str,
    profile: &str,
) -> Result<()> {
    let proxy = SessionProxy::builder(conn)
        .destination(service.to_owned())?
        .path(format!("/Sessions/{session}"))?
        .build()
        .await?;
    let current = proxy
        .profile()
        .await
        .map_err(|e| Error::from_call(service, e))?;
    info!(service, session, %current, "setting session profile");
    proxy
        .set_profile(profile)
        .await
        .map_err(|e| Error::from_call(service, e))?;
    Ok(())
}
