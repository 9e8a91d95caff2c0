//! Foundation types for the Zenith launcher.
//!
//! This crate holds the platform-agnostic types shared by every Zenith
//! crate: input events, launcher configuration, and the error enum.

pub mod config;
pub mod error;
pub mod input;
