#![warn(missing_docs)]
//! Behaviour common to all lenses
use crate::{
    error::{OptiResult, OptiSimError},
    imaging_subject::{Image, ImagingSubject},
};

/// A lens placed on the optical axis.
///
/// A lens has an axial position and a focal length and forms an [`Image`] of any [`ImagingSubject`].
/// Forming an image is a pure function of the lens parameters and the subject.
pub trait Lens {
    /// Returns the axial position of the lens.
    fn x(&self) -> f64;
    /// Sets the axial position of the lens.
    ///
    /// # Errors
    ///
    /// This function returns an error if `x` is not finite.
    fn set_x(&mut self, x: f64) -> OptiResult<()>;
    /// Returns the (effective) focal length of the lens.
    fn f(&self) -> f64;
    /// Calculate the image of the given subject formed by this lens.
    fn calculate(&self, subject: &dyn ImagingSubject) -> Image;
}

/// Checks that a lens position is usable.
pub fn check_position(x: f64) -> OptiResult<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(OptiSimError::Configuration(format!(
            "lens position must be finite, got {x}"
        )))
    }
}

/// Image formed by an ideal lens of focal length `f`.
///
/// Object distances are measured from the object side principal plane at `front`, image
/// distances from the image side principal plane at `rear`. For a thin lens both planes
/// coincide with the lens position.
///
/// The cases handled are
///  - object at infinity: the image is formed in the focal plane on the axis.
///  - infinite focal length: the lens does not refract, image and object coincide.
///  - object in the focal plane: the image lies at infinity.
///  - object in the principal plane: the image coincides with the object.
pub fn paraxial_image(front: f64, rear: f64, f: f64, subject: &dyn ImagingSubject) -> Image {
    let d_obj = front - subject.x();
    let (d_img, y_img, real) = if d_obj.is_infinite() {
        (f, 0.0, f > 0.0)
    } else if f.is_infinite() {
        let d_img = -d_obj;
        (d_img, subject.y(), d_img > 0.0)
    } else if (d_obj - f).abs() < f64::EPSILON {
        if f > 0.0 {
            (f64::INFINITY, f64::INFINITY, true)
        } else {
            (f64::NEG_INFINITY, f64::INFINITY, false)
        }
    } else if d_obj == 0.0 {
        (0.0, subject.y(), false)
    } else {
        let d_img = f * d_obj / (d_obj - f);
        (d_img, -d_img / d_obj * subject.y(), d_img > 0.0)
    };
    Image::new(rear + d_img, y_img, real)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::imaging_subject::LightSource;
    use approx::assert_abs_diff_eq;
    #[test]
    fn check_position_values() {
        assert!(check_position(0.0).is_ok());
        assert!(check_position(-12.5).is_ok());
        assert!(check_position(f64::NAN).is_err());
        assert!(check_position(f64::INFINITY).is_err());
        assert!(check_position(f64::NEG_INFINITY).is_err());
    }
    #[test]
    fn real_image() {
        let image = paraxial_image(15.0, 15.0, 10.0, &LightSource::new(0.0, 2.0));
        assert_eq!(image.x(), 45.0);
        assert_eq!(image.y(), -4.0);
        assert!(image.is_real());
    }
    #[test]
    fn virtual_image() {
        // object inside the focal length of a converging lens
        let image = paraxial_image(10.0, 10.0, 10.0, &LightSource::new(5.0, 1.0));
        assert_eq!(image.x(), 0.0);
        assert_eq!(image.y(), 2.0);
        assert!(!image.is_real());
        // diverging lens
        let image = paraxial_image(20.0, 20.0, -10.0, &LightSource::new(0.0, 3.0));
        assert_abs_diff_eq!(image.x(), 20.0 - 20.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(image.y(), 1.0, epsilon = 1e-12);
        assert!(!image.is_real());
    }
    #[test]
    fn separate_principal_planes() {
        let image = paraxial_image(14.0, 16.0, 10.0, &LightSource::new(-6.0, 1.0));
        assert_eq!(image.x(), 36.0);
        assert_eq!(image.y(), -1.0);
        assert!(image.is_real());
    }
    #[test]
    fn object_at_infinity() {
        let image = paraxial_image(10.0, 10.0, 5.0, &LightSource::new(f64::NEG_INFINITY, 3.0));
        assert_eq!(image.x(), 15.0);
        assert_eq!(image.y(), 0.0);
        assert!(image.is_real());
        let image = paraxial_image(10.0, 10.0, -5.0, &LightSource::new(f64::NEG_INFINITY, 3.0));
        assert_eq!(image.x(), 5.0);
        assert!(!image.is_real());
        let image = paraxial_image(10.0, 10.0, 5.0, &Image::new(f64::INFINITY, 3.0, true));
        assert_eq!(image.x(), 15.0);
        assert_eq!(image.y(), 0.0);
    }
    #[test]
    fn object_in_focal_plane() {
        let image = paraxial_image(10.0, 10.0, 5.0, &LightSource::new(5.0, 3.0));
        assert_eq!(image.x(), f64::INFINITY);
        assert_eq!(image.y(), f64::INFINITY);
        assert!(image.is_real());
        let image = paraxial_image(10.0, 10.0, -5.0, &LightSource::new(15.0, 3.0));
        assert_eq!(image.x(), f64::NEG_INFINITY);
        assert_eq!(image.y(), f64::INFINITY);
        assert!(!image.is_real());
    }
    #[test]
    fn infinite_focal_length() {
        let image = paraxial_image(10.0, 12.0, f64::INFINITY, &LightSource::new(0.0, 3.0));
        assert_eq!(image.x(), 2.0);
        assert_eq!(image.y(), 3.0);
        assert!(!image.is_real());
        let image = paraxial_image(10.0, 12.0, f64::INFINITY, &Image::new(20.0, 3.0, true));
        assert_eq!(image.x(), 22.0);
        assert!(image.is_real());
    }
    #[test]
    fn object_in_principal_plane() {
        let image = paraxial_image(10.0, 10.0, 5.0, &Image::new(10.0, 3.0, true));
        assert_eq!(image.x(), 10.0);
        assert_eq!(image.y(), 3.0);
        assert!(!image.is_real());
    }
}
