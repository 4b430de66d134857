//! Reload running Neovim instances so their own theme logic re-runs.
//!
//! Neovim leaves one control socket per instance under
//! `$XDG_RUNTIME_DIR` (`nvim.<pid>.0` and friends). Each socket is driven
//! through `nvim`'s own remote client, which keeps the msgpack-rpc
//! framing out of this crate.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::info;

use crate::error::{Error, Result};

const RUNTIME_DIR_VAR: &str = "XDG_RUNTIME_DIR";
const SOCKET_PREFIX: &str = "nvim";

/// Control sockets of running Neovim instances.
pub fn socket_paths() -> Result<Vec<PathBuf>> {
    let dir = env::var_os(RUNTIME_DIR_VAR).ok_or(Error::RuntimeDirUnset)?;
    sockets_in(Path::new(&dir))
}

fn sockets_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sockets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with(SOCKET_PREFIX) {
            sockets.push(entry.path());
        }
    }
    sockets.sort();
    Ok(sockets)
}

/// Tell the instance at `socket` to re-source its init file.
///
/// Whether the re-source itself succeeded is never checked; only failure
/// to reach the socket (a non-zero client exit) is reported, and it
/// aborts the rest of the run.
pub async fn reload_config(socket: &Path) -> Result<()> {
    info!(socket = %socket.display(), "reloading nvim config");

    let status = Command::new("nvim")
        .arg("--server")
        .arg(socket)
        .args(["--remote-send", "<Cmd>source $MYVIMRC<CR>"])
        .status()
        .await?;
    if !status.success() {
        return Err(Error::CommandFailed {
            command: format!("nvim --server {}", socket.display()),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_nvim_prefixed_entries_are_returned() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["nvim.1000.0", "nvim.2000.0", "pulse.sock", "dbus-session"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let sockets = sockets_in(dir.path()).unwrap();
        let names: Vec<_> = sockets
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["nvim.1000.0", "nvim.2000.0"]);
    }

    #[test]
    fn empty_runtime_dir_yields_no_sockets() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sockets_in(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_runtime_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(matches!(sockets_in(&gone), Err(Error::Io(_))));
    }
}
