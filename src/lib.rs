//! Lift controller firmware library.
//!
//! Exposes the dispatch core and the board drivers for integration testing
//! and for the firmware binary.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod actuator;
pub mod app;
pub mod car;
pub mod config;
pub mod dispatch;
pub mod door;
pub mod error;
pub mod events;
pub mod ingestor;
pub mod presentation;
pub mod request;
pub mod store;

pub mod adapters;
pub mod drivers;
pub mod pins;
