#![warn(missing_docs)]
//! Objects that can be imaged by an optical element.
//!
//! An imaging subject is a point on the optical axis (`x`) carrying a transverse height (`y`). The
//! physical object of a system is the [`LightSource`]. Every optical element turns a subject into an
//! [`Image`], which in turn serves as the subject of the next element.
use nalgebra::Point2;
use serde::Serialize;
use std::fmt::Display;

/// Anything with an axial position and a height that can be imaged by an optical element.
pub trait ImagingSubject {
    /// Axial position (distance along the optical axis).
    fn x(&self) -> f64;
    /// Transverse height / size.
    fn y(&self) -> f64;
    /// Position and height as a point in the meridional plane.
    fn point(&self) -> Point2<f64> {
        Point2::new(self.x(), self.y())
    }
}

/// The physical object being imaged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightSource {
    x: f64,
    y: f64,
}
impl LightSource {
    /// Creates a new [`LightSource`] at axial position `x` with height `y`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Sets the axial position of this [`LightSource`].
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }
    /// Sets the height of this [`LightSource`].
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}
impl ImagingSubject for LightSource {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}
impl Display for LightSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "light source (x: {}, y: {})", self.x, self.y)
    }
}

/// An image formed by an optical element.
///
/// A real image is formed by physically converging rays, a virtual image by the backward
/// extension of diverging rays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Image {
    x: f64,
    y: f64,
    real: bool,
}
impl Image {
    /// Creates a new [`Image`].
    #[must_use]
    pub const fn new(x: f64, y: f64, real: bool) -> Self {
        Self { x, y, real }
    }
    /// Returns `true` if this [`Image`] is real, `false` if it is virtual.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.real
    }
    /// Returns `true` if this [`Image`] lies at infinity (position or height not finite).
    #[must_use]
    pub fn is_at_infinity(&self) -> bool {
        !self.x.is_finite() || !self.y.is_finite()
    }
}
impl ImagingSubject for Image {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}
impl Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.real { "real" } else { "virtual" };
        write!(f, "{kind} image (x: {}, y: {})", self.x, self.y)
    }
}
