//! Push a light/dark theme preference to every running desktop component
//! that cares about it: Konsole-compatible terminals on the D-Bus session
//! bus, Neovim instances on local control sockets, and the Plasma global
//! look-and-feel.
//!
//! Everything here is strictly sequential and best-effort-free: the first
//! failure propagates to the caller and aborts the rest of the run, with
//! no rollback of updates already applied.

pub mod bus;
pub mod error;
pub mod konsole;
pub mod lookandfeel;
pub mod nvim;
pub mod theme;

pub use error::{Error, Result};
pub use theme::Theme;
