#![warn(missing_docs)]
//! An ideal thin lens
use super::lens::{check_position, paraxial_image, Lens};
use crate::{
    error::{OptiResult, OptiSimError},
    imaging_subject::{Image, ImagingSubject},
};
use std::fmt::Display;

/// An ideal, infinitely thin lens.
///
/// The lens is fully described by its axial position `x` and its focal length `f`. A positive focal
/// length corresponds to a converging (convex) lens, a negative one to a diverging (concave) lens.
///
/// ## Example
///
/// ```rust
/// use optisim::imaging_subject::{ImagingSubject, LightSource};
/// use optisim::nodes::ThinLens;
///
/// let lens = ThinLens::new(20.0, 10.0).unwrap();
/// let image = lens.calculate(&LightSource::new(0.0, 8.0));
/// assert_eq!(image.x(), 40.0);
/// assert_eq!(image.y(), -8.0);
/// assert!(image.is_real());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThinLens {
    x: f64,
    f: f64,
}
fn check_focal_length(f: f64) -> OptiResult<()> {
    if f == 0.0 || f.is_nan() {
        Err(OptiSimError::Configuration(format!(
            "focal length of a thin lens must not be 0.0 or NaN, got {f}"
        )))
    } else {
        Ok(())
    }
}
impl ThinLens {
    /// Creates a new [`ThinLens`] at axial position `x` with focal length `f`.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - the focal length is 0.0 or NaN.
    ///  - the position is not finite.
    pub fn new(x: f64, f: f64) -> OptiResult<Self> {
        check_position(x)?;
        check_focal_length(f)?;
        Ok(Self { x, f })
    }
    /// Sets the focal length of this [`ThinLens`].
    ///
    /// # Errors
    ///
    /// This function returns an error if the focal length is 0.0 or NaN. The lens is left unchanged in this case.
    pub fn set_f(&mut self, f: f64) -> OptiResult<()> {
        check_focal_length(f)?;
        self.f = f;
        Ok(())
    }
    /// Calculate the image of the given subject formed by this [`ThinLens`].
    #[must_use]
    pub fn calculate(&self, subject: &dyn ImagingSubject) -> Image {
        paraxial_image(self.x, self.x, self.f, subject)
    }
}
impl Lens for ThinLens {
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
impl Display for ThinLens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "thin lens (x: {}, f: {})", self.x, self.f)
    }
}
