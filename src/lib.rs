//! This is the documentation for the **optisim** software package, a paraxial imaging simulator
//! for sequential lens systems.
//!
//! An [`OpticalSystem`] holds a [`LightSource`](imaging_subject::LightSource) and a number of named
//! thin and thick lenses placed along a single optical axis. Calculating the system images the
//! light source through all lenses in axial order, recording every intermediate image as well as
//! two representative rays. Systems can be read from and written to JSON files
//! ([`system_document`]) and summarized in a [`SystemReport`](reporter::SystemReport).
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod imaging_subject;
pub mod nodes;
pub mod optical_system;
pub mod parameters;
pub mod rays;
pub mod reporter;
pub mod system_document;
pub mod system_settings;
pub mod utils;

pub use optical_system::OpticalSystem;
pub use system_document::SystemDocument;

/// Return the version information of the currently built optisim executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
