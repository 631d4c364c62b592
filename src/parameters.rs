#![warn(missing_docs)]
//! Names of the parameters that can be modified on a light source or an optical element.
//!
//! The parameters are addressed by strings (e.g. `"r_left"`) at the API boundary. These enums parse
//! them into typed values so that an unknown name is rejected before anything is changed.
use crate::error::{OptiResult, OptiSimError};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Modifiable parameters of a [`LightSource`](crate::imaging_subject::LightSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
pub enum LightSourceParameter {
    /// axial position
    #[strum(serialize = "x")]
    X,
    /// height
    #[strum(serialize = "y")]
    Y,
}

/// Modifiable parameters of a [`ThinLens`](crate::nodes::ThinLens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
pub enum ThinLensParameter {
    /// axial position
    #[strum(serialize = "x")]
    X,
    /// focal length
    #[strum(serialize = "f")]
    F,
}

/// Modifiable parameters of a [`ThickLens`](crate::nodes::ThickLens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
pub enum ThickLensParameter {
    /// axial position
    #[strum(serialize = "x")]
    X,
    /// refractive index
    #[strum(serialize = "n")]
    N,
    /// axial thickness
    #[strum(serialize = "d")]
    D,
    /// radius of curvature of the left (object side) surface
    #[strum(serialize = "r_left")]
    RLeft,
    /// radius of curvature of the right (image side) surface
    #[strum(serialize = "r_right")]
    RRight,
}

/// Parse a parameter name into one of the parameter enums above.
///
/// `target` is only used for the error message.
///
/// # Errors
///
/// This function returns [`OptiSimError::Configuration`] if `param` is not a valid name for `T`.
pub fn parse_parameter<T>(param: &str, target: &str) -> OptiResult<T>
where
    T: FromStr + IntoEnumIterator + std::fmt::Display,
{
    T::from_str(param).map_err(|_| {
        let valid = T::iter().map(|p| p.to_string()).collect::<Vec<_>>();
        OptiSimError::Configuration(format!(
            "invalid parameter '{param}' for {target} (valid: {})",
            valid.join(", ")
        ))
    })
}
