//! Locale-independent data tables.

pub mod address;
pub mod business;
pub mod code;
pub mod datetime;
pub mod development;
pub mod file;
pub mod hardware;
pub mod network;
pub mod personal;
pub mod scientific;
pub mod structured;
pub mod transport;
