#![warn(missing_docs)]
//! A thick lens with spherical (or flat) surfaces
use super::lens::{check_position, paraxial_image, Lens};
use crate::{
    error::{OptiResult, OptiSimError},
    imaging_subject::{Image, ImagingSubject},
};
use std::fmt::Display;

/// A thick lens with two spherical (or flat) surfaces.
///
/// The lens is centered at its axial position `x` and extends by `d / 2` to both sides. The focal
/// length is not a free parameter: it follows from the refractive index and the surface geometry
/// (lensmaker's equation) and is recomputed on every change of these parameters. Object and image
/// distances are measured from the two principal planes.
///
/// # Curvature convention:
/// - a positive radius has its center of curvature on the right (image) side
/// - a negative radius has its center of curvature on the left (object) side
/// - a radius of +/- infinity corresponds to a flat surface
///
/// A bi-convex lens thus has `r_left > 0` and `r_right < 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThickLens {
    x: f64,
    n: f64,
    d: f64,
    r_left: f64,
    r_right: f64,
    f: f64,
}
fn check_refractive_index(n: f64) -> OptiResult<()> {
    if n > 0.0 && n.is_finite() {
        Ok(())
    } else {
        Err(OptiSimError::Configuration(format!(
            "refractive index must be > 0.0 and finite, got {n}"
        )))
    }
}
fn check_thickness(d: f64) -> OptiResult<()> {
    if d > 0.0 && d.is_finite() {
        Ok(())
    } else {
        Err(OptiSimError::Configuration(format!(
            "thickness must be > 0.0 and finite, got {d}"
        )))
    }
}
fn check_radius(r: f64, side: &str) -> OptiResult<()> {
    if r == 0.0 || r.is_nan() {
        Err(OptiSimError::Configuration(format!(
            "{side} radius of curvature must not be 0.0 or NaN"
        )))
    } else {
        Ok(())
    }
}
/// `1/r` with a flat surface (`r = ±∞`) contributing nothing.
fn curvature(r: f64) -> f64 {
    if r.is_infinite() {
        0.0
    } else {
        1.0 / r
    }
}
impl ThickLens {
    /// Creates a new [`ThickLens`].
    ///
    /// # Attributes
    /// * `x`: axial position of the lens center
    /// * `n`: refractive index of the lens material
    /// * `d`: axial (center) thickness
    /// * `r_left`: radius of curvature of the left surface
    /// * `r_right`: radius of curvature of the right surface
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - the refractive index or the thickness is not > 0.0 (or not finite).
    ///  - one of the radii is 0.0 or NaN.
    ///  - the position is not finite.
    pub fn new(x: f64, n: f64, d: f64, r_left: f64, r_right: f64) -> OptiResult<Self> {
        check_position(x)?;
        check_refractive_index(n)?;
        check_thickness(d)?;
        let f = Self::compute_f(n, d, r_left, r_right)?;
        Ok(Self {
            x,
            n,
            d,
            r_left,
            r_right,
            f,
        })
    }
    /// Calculate the focal length of a thick lens using the lensmaker's equation.
    ///
    /// If the refractive power vanishes (`|1/f| < ε`) the focal length is `+∞`.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the radii is 0.0 or NaN.
    pub fn compute_f(n: f64, d: f64, r_left: f64, r_right: f64) -> OptiResult<f64> {
        check_radius(r_left, "left")?;
        check_radius(r_right, "right")?;
        let term1 = curvature(r_left);
        let term2 = curvature(r_right);
        let term3 = if r_left.is_infinite() || r_right.is_infinite() {
            0.0
        } else {
            (n - 1.0) * d / (n * r_left * r_right)
        };
        let f_inv = (n - 1.0) * (term1 - term2 + term3);
        if f_inv.abs() < f64::EPSILON {
            Ok(f64::INFINITY)
        } else {
            Ok(1.0 / f_inv)
        }
    }
    /// Returns the refractive index of this [`ThickLens`].
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }
    /// Returns the thickness of this [`ThickLens`].
    #[must_use]
    pub const fn d(&self) -> f64 {
        self.d
    }
    /// Returns the radius of curvature of the left surface of this [`ThickLens`].
    #[must_use]
    pub const fn r_left(&self) -> f64 {
        self.r_left
    }
    /// Returns the radius of curvature of the right surface of this [`ThickLens`].
    #[must_use]
    pub const fn r_right(&self) -> f64 {
        self.r_right
    }
    /// Sets the refractive index of this [`ThickLens`] and updates the focal length.
    ///
    /// # Errors
    ///
    /// This function returns an error if `n` is not > 0.0 or not finite. The lens is left unchanged in this case.
    pub fn set_n(&mut self, n: f64) -> OptiResult<()> {
        check_refractive_index(n)?;
        self.f = Self::compute_f(n, self.d, self.r_left, self.r_right)?;
        self.n = n;
        Ok(())
    }
    /// Sets the thickness of this [`ThickLens`] and updates the focal length.
    ///
    /// # Errors
    ///
    /// This function returns an error if `d` is not > 0.0 or not finite. The lens is left unchanged in this case.
    pub fn set_d(&mut self, d: f64) -> OptiResult<()> {
        check_thickness(d)?;
        self.f = Self::compute_f(self.n, d, self.r_left, self.r_right)?;
        self.d = d;
        Ok(())
    }
    /// Sets the radius of curvature of the left surface and updates the focal length.
    ///
    /// # Errors
    ///
    /// This function returns an error if `r_left` is 0.0 or NaN. The lens is left unchanged in this case.
    pub fn set_r_left(&mut self, r_left: f64) -> OptiResult<()> {
        self.f = Self::compute_f(self.n, self.d, r_left, self.r_right)?;
        self.r_left = r_left;
        Ok(())
    }
    /// Sets the radius of curvature of the right surface and updates the focal length.
    ///
    /// # Errors
    ///
    /// This function returns an error if `r_right` is 0.0 or NaN. The lens is left unchanged in this case.
    pub fn set_r_right(&mut self, r_right: f64) -> OptiResult<()> {
        self.f = Self::compute_f(self.n, self.d, self.r_left, r_right)?;
        self.r_right = r_right;
        Ok(())
    }
    /// Offset of a principal plane from its vertex. The radius passed is the one of the opposite surface.
    fn principal_plane_offset(&self, r: f64) -> f64 {
        if self.f.is_infinite() || r.is_infinite() {
            0.0
        } else {
            -self.f * (self.n - 1.0) * self.d / (r * self.n)
        }
    }
    /// Returns the axial position of the left (object side) principal plane.
    #[must_use]
    pub fn h_left(&self) -> f64 {
        self.principal_plane_offset(self.r_right) + self.x - self.d / 2.0
    }
    /// Returns the axial position of the right (image side) principal plane.
    #[must_use]
    pub fn h_right(&self) -> f64 {
        self.principal_plane_offset(self.r_left) + self.x + self.d / 2.0
    }
    /// Calculate the image of the given subject formed by this [`ThickLens`].
    #[must_use]
    pub fn calculate(&self, subject: &dyn ImagingSubject) -> Image {
        paraxial_image(self.h_left(), self.h_right(), self.f, subject)
    }
}
impl Lens for ThickLens {
    fn x(&self) -> f64 {
        self.x
    }
    fn set_x(&mut self, x: f64) -> OptiResult<()> {
        check_position(x)?;
        self.x = x;
        Ok(())
    }
    fn f(&self) -> f64 {
        self.f
    }
    fn calculate(&self, subject: &dyn ImagingSubject) -> Image {
        Self::calculate(self, subject)
    }
}
impl Display for ThickLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "thick lens (x: {}, n: {}, d: {}, r_left: {}, r_right: {}, f: {})",
            self.x, self.n, self.d, self.r_left, self.r_right, self.f
        )
    }
}
