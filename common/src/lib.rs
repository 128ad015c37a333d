//! # Toolbelt Common
//!
//! Shared models and pure logic for the `toolbelt` workspace: persisted
//! settings, the tool catalog and home-screen subset, and the network-facing
//! data types (subnet prefix, scanned devices, Wi-Fi classification).
//!
//! Nothing in this crate performs network IO besides local interface
//! enumeration; the engines live in `toolbelt-core`.

pub mod config;
pub mod logging;
pub mod network;
pub mod tools;
