//! # Toolbelt Core
//!
//! The engines behind the toolbox features:
//!
//! * [`scanner`]: the local-network scan workflow: Wi-Fi listing, the
//!   sequential `/24` reachability sweep, port probing and the optional
//!   remote analysis dispatch, all reported as a stream of events.
//! * [`wifi`]: the platform Wi-Fi scan behind a port trait.
//! * [`analysis`]: the remote text-analysis client.
//! * [`update`]: the release-feed self-update check.
//! * [`speedtest`]: downstream bandwidth measurement.
//!
//! High-level code depends on the port traits ([`scanner::probe::Prober`],
//! [`wifi::WifiScanner`], [`analysis::Analyst`]) rather than the shipped
//! adapters, which keeps every workflow drivable from tests.

pub mod analysis;
pub mod scanner;
pub mod speedtest;
pub mod update;
pub mod wifi;
