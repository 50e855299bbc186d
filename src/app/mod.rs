//! Application core: controller wiring and the port boundary.
//!
//! The dispatch rules live in [`crate::dispatch`]; this module holds the
//! **port traits** in [`ports`] through which every piece of hardware is
//! reached, and the [`service::LiftController`] that assembles the tasks.

pub mod ports;
pub mod service;
