//! Global desktop appearance via the Plasma `lookandfeeltool` command.

use tokio::process::Command;
use tracing::info;

use crate::error::{Error, Result};
use crate::theme::Theme;

const LOOKANDFEEL_TOOL: &str = "lookandfeeltool";

/// Resolve `profile` to a look-and-feel package and apply it desktop-wide.
///
/// Resolution happens here rather than up front, so an unsupported name
/// only surfaces once the terminal and editor steps have already run.
pub async fn apply(profile: &str) -> Result<()> {
    let theme: Theme = profile.parse()?;
    let package = theme.package();
    info!(package, "applying global look-and-feel");

    let status = Command::new(LOOKANDFEEL_TOOL)
        .args(["--apply", package])
        .status()
        .await?;
    if !status.success() {
        return Err(Error::CommandFailed {
            command: format!("{LOOKANDFEEL_TOOL} --apply {package}"),
            status,
        });
    }
    Ok(())
}
