#![warn(missing_docs)]
//! This module contains the concrete optical element types (thin and thick lenses)
mod lens;
mod optical_element;
mod thick_lens;
mod thin_lens;

pub use lens::Lens;
pub use optical_element::OpticalElement;
pub use thick_lens::ThickLens;
pub use thin_lens::ThinLens;
