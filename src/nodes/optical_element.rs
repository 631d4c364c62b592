#![warn(missing_docs)]
//! The closed set of optical elements an [`OpticalSystem`](crate::optical_system::OpticalSystem) can hold
use super::{Lens, ThickLens, ThinLens};
use crate::{
    error::OptiResult,
    imaging_subject::{Image, ImagingSubject},
    parameters::{parse_parameter, ThickLensParameter, ThinLensParameter},
};
use std::fmt::Display;
use strum::IntoEnumIterator;

/// An optical element placed on the optical axis.
///
/// All operations are dispatched to the concrete lens type.
#[derive(Debug, Clone, PartialEq)]
pub enum OpticalElement {
    /// an ideal thin lens
    Thin(ThinLens),
    /// a thick lens with spherical surfaces
    Thick(ThickLens),
}
impl OpticalElement {
    /// Returns the type name of this element as used in system files (`"thin"` or `"thick"`).
    #[must_use]
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Thin(_) => "thin",
            Self::Thick(_) => "thick",
        }
    }
    /// Returns the defining parameters of this element by name, in their canonical order.
    #[must_use]
    pub fn parameters(&self) -> Vec<(String, f64)> {
        match self {
            Self::Thin(lens) => ThinLensParameter::iter()
                .map(|p| {
                    let value = match p {
                        ThinLensParameter::X => lens.x(),
                        ThinLensParameter::F => lens.f(),
                    };
                    (p.to_string(), value)
                })
                .collect(),
            Self::Thick(lens) => ThickLensParameter::iter()
                .map(|p| {
                    let value = match p {
                        ThickLensParameter::X => lens.x(),
                        ThickLensParameter::N => lens.n(),
                        ThickLensParameter::D => lens.d(),
                        ThickLensParameter::RLeft => lens.r_left(),
                        ThickLensParameter::RRight => lens.r_right(),
                    };
                    (p.to_string(), value)
                })
                .collect(),
        }
    }
    /// Set a parameter of this element given by its name.
    ///
    /// Valid names are `x` and `f` for a thin lens and `x`, `n`, `d`, `r_left`, `r_right` for a thick lens.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - the parameter name is not valid for the concrete lens type.
    ///  - the value is not valid for this parameter.
    pub fn set_parameter(&mut self, param: &str, value: f64) -> OptiResult<()> {
        let target = format!("{} lens", self.node_type());
        match self {
            Self::Thin(lens) => match parse_parameter::<ThinLensParameter>(param, &target)? {
                ThinLensParameter::X => lens.set_x(value),
                ThinLensParameter::F => lens.set_f(value),
            },
            Self::Thick(lens) => match parse_parameter::<ThickLensParameter>(param, &target)? {
                ThickLensParameter::X => lens.set_x(value),
                ThickLensParameter::N => lens.set_n(value),
                ThickLensParameter::D => lens.set_d(value),
                ThickLensParameter::RLeft => lens.set_r_left(value),
                ThickLensParameter::RRight => lens.set_r_right(value),
            },
        }
    }
}
impl Lens for OpticalElement {
    fn x(&self) -> f64 {
        match self {
            Self::Thin(lens) => lens.x(),
            Self::Thick(lens) => lens.x(),
        }
    }
    fn set_x(&mut self, x: f64) -> OptiResult<()> {
        match self {
            Self::Thin(lens) => lens.set_x(x),
            Self::Thick(lens) => lens.set_x(x),
        }
    }
    fn f(&self) -> f64 {
        match self {
            Self::Thin(lens) => lens.f(),
            Self::Thick(lens) => lens.f(),
        }
    }
    fn calculate(&self, subject: &dyn ImagingSubject) -> Image {
        match self {
            Self::Thin(lens) => lens.calculate(subject),
            Self::Thick(lens) => lens.calculate(subject),
        }
    }
}
impl From<ThinLens> for OpticalElement {
    fn from(lens: ThinLens) -> Self {
        Self::Thin(lens)
    }
}
impl From<ThickLens> for OpticalElement {
    fn from(lens: ThickLens) -> Self {
        Self::Thick(lens)
    }
}
impl Display for OpticalElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thin(lens) => Display::fmt(lens, f),
            Self::Thick(lens) => Display::fmt(lens, f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::OptiSimError, imaging_subject::LightSource};
    use assert_matches::assert_matches;
    fn thin() -> OpticalElement {
        ThinLens::new(10.0, 5.0).unwrap().into()
    }
    fn thick() -> OpticalElement {
        ThickLens::new(30.0, 1.5, 5.0, -20.0, 25.0).unwrap().into()
    }
    #[test]
    fn node_type() {
        assert_eq!(thin().node_type(), "thin");
        assert_eq!(thick().node_type(), "thick");
    }
    #[test]
    fn dispatch() {
        let source = LightSource::new(0.0, 2.0);
        let thin_lens = ThinLens::new(10.0, 5.0).unwrap();
        assert_eq!(thin().x(), 10.0);
        assert_eq!(thin().f(), 5.0);
        assert_eq!(thin().calculate(&source), thin_lens.calculate(&source));
        let thick_lens = ThickLens::new(30.0, 1.5, 5.0, -20.0, 25.0).unwrap();
        assert_eq!(thick().x(), 30.0);
        assert_eq!(thick().f(), thick_lens.f());
        assert_eq!(thick().calculate(&source), thick_lens.calculate(&source));
    }
    #[test]
    fn parameters() {
        assert_eq!(
            thin().parameters(),
            vec![("x".to_owned(), 10.0), ("f".to_owned(), 5.0)]
        );
        let names: Vec<String> = thick().parameters().into_iter().map(|p| p.0).collect();
        assert_eq!(names, vec!["x", "n", "d", "r_left", "r_right"]);
        assert_eq!(thick().parameters()[3].1, -20.0);
    }
    #[test]
    fn set_parameter_thin() {
        let mut element = thin();
        element.set_parameter("x", 0.0).unwrap();
        element.set_parameter("f", 10.0).unwrap();
        assert_eq!(
            element,
            OpticalElement::from(ThinLens::new(0.0, 10.0).unwrap())
        );
        assert_matches!(
            element.set_parameter("n", 1.5),
            Err(OptiSimError::Configuration(_))
        );
        assert_matches!(
            element.set_parameter("f", 0.0),
            Err(OptiSimError::Configuration(_))
        );
        assert_eq!(element.f(), 10.0);
    }
    #[test]
    fn set_parameter_thick() {
        let mut element = thick();
        element.set_parameter("x", 30.0).unwrap();
        element.set_parameter("n", 1.7).unwrap();
        element.set_parameter("d", 3.0).unwrap();
        element.set_parameter("r_left", 35.0).unwrap();
        element.set_parameter("r_right", 40.0).unwrap();
        assert_eq!(
            element,
            OpticalElement::from(ThickLens::new(30.0, 1.7, 3.0, 35.0, 40.0).unwrap())
        );
        assert!(element.set_parameter("f", 10.0).is_err());
        assert!(element.set_parameter("d", -1.0).is_err());
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", thin()), "thin lens (x: 10, f: 5)");
    }
}
