use std::process::ExitStatus;

use zbus::fdo;

/// Failures surfaced while synchronizing the theme.
///
/// Nothing in this crate catches or retries: every variant propagates to
/// the binary, which reports it once and exits nonzero. Updates applied
/// before the failure stay applied.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bus service stopped answering between discovery and the call
    /// targeting it.
    #[error("service {service} is no longer reachable on the session bus")]
    RemoteUnavailable {
        service: String,
        #[source]
        source: zbus::Error,
    },

    /// An introspection document could not be parsed.
    #[error("malformed introspection document")]
    Parse(#[from] zbus_xml::Error),

    /// The requested theme name has no look-and-feel mapping.
    #[error("unsupported theme {0:?} (expected \"Light\" or \"Dark\")")]
    UnsupportedTheme(String),

    /// An external command exited with a failure status.
    #[error("{command} exited with {status}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
    },

    /// Neovim sockets cannot be located without a runtime directory.
    #[error("XDG_RUNTIME_DIR is not set; cannot locate nvim sockets")]
    RuntimeDirUnset,

    /// Any other session-bus failure.
    #[error(transparent)]
    Bus(#[from] zbus::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify a bus error from a call aimed at `service`: peers that
    /// dropped off the bus become [`Error::RemoteUnavailable`], everything
    /// else stays a plain bus error.
    pub(crate) fn from_call(service: &str, err: zbus::Error) -> Self {
        let vanished = match &err {
            zbus::Error::FDO(fdo_err) => matches!(
                **fdo_err,
                fdo::Error::ServiceUnknown(_) | fdo::Error::NameHasNoOwner(_)
            ),
            zbus::Error::MethodError(name, _, _) => matches!(
                name.as_str(),
                "org.freedesktop.DBus.Error.ServiceUnknown"
                    | "org.freedesktop.DBus.Error.NameHasNoOwner"
            ),
            _ => false,
        };

        if vanished {
            Error::RemoteUnavailable {
                service: service.to_owned(),
                source: err,
            }
        } else {
            Error::Bus(err)
        }
    }
}
