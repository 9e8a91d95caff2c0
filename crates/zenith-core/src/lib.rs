//! Zenith launcher core.
//!
//! Everything here is platform-agnostic and single-threaded: input arrives
//! as [`zenith_types::input::InputEvent`], time advances through
//! [`Launcher::tick`], and side effects leave as sound cues, toasts, and
//! calls into the host service traits from `zenith-platform`.

pub mod ambient;
pub mod boot;
pub mod catalog;
pub mod focus;
pub mod hud;
pub mod idle;
pub mod launch;
pub mod launcher;
pub mod osk;
pub mod overlay;
pub mod projection;
pub mod readout;
pub mod scheduler;
pub mod search;
pub mod sound;
pub mod store;

pub use launcher::{Launcher, Snapshot};
