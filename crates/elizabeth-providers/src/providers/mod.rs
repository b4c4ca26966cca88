//! Fake-data providers.
//!
//! Every provider owns its own [`Random`](elizabeth_core::Random) stream.
//! Locale aware providers also hold a reference to the compiled-in tables of
//! their locale.

pub mod address;
pub mod business;
pub mod clothing;
pub mod code;
pub mod datetime;
pub mod development;
pub mod file;
pub mod food;
pub mod generic;
pub mod hardware;
pub mod internet;
pub mod path;
pub mod personal;
pub mod science;
pub mod structured;
pub mod text;
pub mod transport;
pub mod units;

pub use address::{Address, Coordinates};
pub use business::Business;
pub use clothing::ClothingSizes;
pub use code::Code;
pub use datetime::Datetime;
pub use development::Development;
pub use file::File;
pub use food::Food;
pub use generic::Generic;
pub use hardware::Hardware;
pub use internet::Internet;
pub use path::{Path, Platform};
pub use personal::Personal;
pub use science::{ChemicalElement, Science};
pub use structured::Structured;
pub use text::Text;
pub use transport::Transport;
pub use units::UnitSystem;
