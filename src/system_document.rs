#![warn(missing_docs)]
//! The JSON configuration file of an [`OpticalSystem`].
//!
//! A file holds exactly one system: the light source (`object`) and a list of lenses.
//!
//! ```json
//! {
//!   "object": { "position": 0.0, "size": 8.0 },
//!   "lenses": [
//!     { "name": "L1", "type": "thin", "position": 60.0, "focal_length": 30.0 },
//!     { "name": "L2", "type": "thick", "position": 90.0, "refractive_index": 1.5,
//!       "thickness": 3.0, "radius_left": 10.0, "radius_right": -10.0 }
//!   ]
//! }
//! ```
//!
//! The lens `type` defaults to `"thin"`. A missing (or `null`) radius denotes a flat surface.
use crate::{
    error::{OptiResult, OptiSimError},
    imaging_subject::{ImagingSubject, LightSource},
    nodes::{Lens, OpticalElement, ThickLens, ThinLens},
    optical_system::OpticalSystem,
    system_settings::SystemSettings,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// The light source entry of a [`SystemDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// axial position
    pub position: f64,
    /// height
    pub size: f64,
}
impl TryFrom<LightSource> for ObjectRecord {
    type Error = OptiSimError;

    fn try_from(light_source: LightSource) -> OptiResult<Self> {
        let finite = |value: f64, field: &str| {
            savable(value).ok_or_else(|| {
                OptiSimError::Io(format!(
                    "cannot save the light source: field '{field}' is {value}"
                ))
            })
        };
        Ok(Self {
            position: finite(light_source.x(), "position")?,
            size: finite(light_source.y(), "size")?,
        })
    }
}
impl From<ObjectRecord> for LightSource {
    fn from(record: ObjectRecord) -> Self {
        Self::new(record.position, record.size)
    }
}

/// Returns the value if it can be written to JSON without loss.
fn savable(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// The lens types of a [`LensRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensType {
    /// a [`ThinLens`]
    #[default]
    Thin,
    /// a [`ThickLens`]
    Thick,
}

/// A lens entry of a [`SystemDocument`].
///
/// Only the fields belonging to the given [`LensType`] are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensRecord {
    /// unique name of the lens
    pub name: String,
    /// type of the lens
    #[serde(rename = "type", default)]
    pub lens_type: LensType,
    /// axial position
    pub position: f64,
    /// focal length (thin lens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    /// refractive index (thick lens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refractive_index: Option<f64>,
    /// center thickness (thick lens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// radius of the left surface (thick lens), `None` for a flat surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_left: Option<f64>,
    /// radius of the right surface (thick lens), `None` for a flat surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_right: Option<f64>,
}
impl LensRecord {
    /// Creates the record of the given element.
    ///
    /// A radius of `+inf` (flat surface) is omitted.
    ///
    /// # Errors
    ///
    /// This function returns an [`OptiSimError::Io`] if any other value to be written is not
    /// finite. JSON has no representation for it.
    pub fn new(name: &str, element: &OpticalElement) -> OptiResult<Self> {
        let finite = |value: f64, field: &str| {
            savable(value).ok_or_else(|| {
                OptiSimError::Io(format!(
                    "cannot save lens '{name}': field '{field}' is {value}"
                ))
            })
        };
        let radius = |r: f64, field: &str| {
            if r == f64::INFINITY {
                Ok(None)
            } else {
                finite(r, field).map(Some)
            }
        };
        let record = match element {
            OpticalElement::Thin(lens) => Self {
                name: name.to_owned(),
                lens_type: LensType::Thin,
                position: finite(lens.x(), "position")?,
                focal_length: Some(finite(lens.f(), "focal_length")?),
                refractive_index: None,
                thickness: None,
                radius_left: None,
                radius_right: None,
            },
            OpticalElement::Thick(lens) => Self {
                name: name.to_owned(),
                lens_type: LensType::Thick,
                position: finite(lens.x(), "position")?,
                focal_length: None,
                refractive_index: Some(finite(lens.n(), "refractive_index")?),
                thickness: Some(finite(lens.d(), "thickness")?),
                radius_left: radius(lens.r_left(), "radius_left")?,
                radius_right: radius(lens.r_right(), "radius_right")?,
            },
        };
        Ok(record)
    }
    /// Creates the optical element described by this record.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - a field required by the lens type is missing ([`OptiSimError::Io`]).
    ///  - the lens parameters are invalid ([`OptiSimError::Configuration`]).
    pub fn to_element(&self) -> OptiResult<OpticalElement> {
        match self.lens_type {
            LensType::Thin => {
                let f = self.required(self.focal_length, "focal_length")?;
                Ok(ThinLens::new(self.position, f)?.into())
            }
            LensType::Thick => {
                let n = self.required(self.refractive_index, "refractive_index")?;
                let d = self.required(self.thickness, "thickness")?;
                let r_left = self.radius_left.unwrap_or(f64::INFINITY);
                let r_right = self.radius_right.unwrap_or(f64::INFINITY);
                Ok(ThickLens::new(self.position, n, d, r_left, r_right)?.into())
            }
        }
    }
    fn required(&self, value: Option<f64>, field: &str) -> OptiResult<f64> {
        value.ok_or_else(|| {
            OptiSimError::Io(format!(
                "lens '{}' is missing the field '{field}'",
                self.name
            ))
        })
    }
}

/// The content of a system configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDocument {
    /// the light source
    pub object: ObjectRecord,
    /// the lenses
    #[serde(default)]
    pub lenses: Vec<LensRecord>,
}
impl SystemDocument {
    /// Read a [`SystemDocument`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> OptiResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            OptiSimError::Io(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Create a [`SystemDocument`] from the given JSON string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(file_string: &str) -> OptiResult<Self> {
        serde_json::from_str(file_string)
            .map_err(|e| OptiSimError::Io(format!("parsing of system failed: {e}")))
    }
    /// Save this [`SystemDocument`] to a JSON file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the document failed.
    ///   - the file cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> OptiResult<()> {
        let serialized = self.to_json_string()?;
        let mut output = File::create(path).map_err(|e| {
            OptiSimError::Io(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        writeln!(output, "{serialized}").map_err(|e| {
            OptiSimError::Io(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
    /// Return the JSON representation of this [`SystemDocument`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_json_string(&self) -> OptiResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OptiSimError::Io(format!("serialization of system failed: {e}")))
    }
    /// Build an [`OpticalSystem`] with the given [`SystemSettings`] from this document.
    ///
    /// The lenses are added in the listed order.
    ///
    /// # Errors
    ///
    /// This function will return an error if a lens record is incomplete or invalid or if a lens
    /// cannot be added to the system (duplicate name, minimum separation violated).
    pub fn build_system(&self, settings: SystemSettings) -> OptiResult<OpticalSystem> {
        let mut system = OpticalSystem::with_settings(settings);
        system.add_light_source(self.object.into())?;
        for record in &self.lenses {
            system.add(&record.name, record.to_element()?)?;
        }
        Ok(system)
    }
}
impl TryFrom<&OpticalSystem> for SystemDocument {
    type Error = OptiSimError;

    fn try_from(system: &OpticalSystem) -> OptiResult<Self> {
        let light_source = system.light_source().ok_or_else(|| {
            OptiSimError::Precondition("cannot save a system without light source".into())
        })?;
        let lenses = system
            .axial_order()
            .iter()
            .map(|name| LensRecord::new(name, &system.element(name)?))
            .collect::<OptiResult<Vec<_>>>()?;
        Ok(Self {
            object: light_source.try_into()?,
            lenses,
        })
    }
}
impl TryFrom<SystemDocument> for OpticalSystem {
    type Error = OptiSimError;

    fn try_from(document: SystemDocument) -> OptiResult<Self> {
        document.build_system(SystemSettings::default())
    }
}
impl OpticalSystem {
    /// Load an [`OpticalSystem`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file cannot be read or parsed or if the described
    /// system is invalid.
    pub fn from_file(path: &Path) -> OptiResult<Self> {
        let system = Self::try_from(SystemDocument::from_file(path)?)?;
        info!(
            "loaded system with {} element(s) from {}",
            system.nr_of_elements(),
            path.display()
        );
        Ok(system)
    }
    /// Save this [`OpticalSystem`] to a JSON file at the given path.
    ///
    /// The lenses are written in axial order.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the system has no light source.
    ///   - a value to be written is not finite. The file is left untouched in this case.
    ///   - the file cannot be written.
    pub fn save(&self, path: &Path) -> OptiResult<()> {
        SystemDocument::try_from(self)?.save_to_file(path)?;
        info!("saved system to {}", path.display());
        Ok(())
    }
}
