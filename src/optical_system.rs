#![warn(missing_docs)]
//! The optical system: a light source and named optical elements placed along a single optical axis.
use crate::{
    error::{OptiResult, OptiSimError},
    imaging_subject::{Image, ImagingSubject, LightSource},
    nodes::{Lens, OpticalElement},
    parameters::{parse_parameter, LightSourceParameter},
    rays::RayTracks,
    system_settings::SystemSettings,
};
use log::{debug, info, warn};
use std::collections::HashMap;

/// An ordered collection of optical elements imaging a light source.
///
/// Elements are registered under a unique name and kept sorted by their axial position. No two
/// elements, and no element and the light source, may be closer than the minimum separation given
/// by the [`SystemSettings`].
///
/// The system owns copies of everything added to it. Accessors return copies as well, so the
/// internal state can only be changed through the functions of this structure. Every change of the
/// configuration discards the results of a previous [`calculate`](OpticalSystem::calculate) run.
///
/// # Example
///
/// ```rust
/// use optisim::error::OptiResult;
/// use optisim::imaging_subject::{ImagingSubject, LightSource};
/// use optisim::nodes::ThinLens;
/// use optisim::optical_system::OpticalSystem;
///
/// fn main() -> OptiResult<()> {
///   let mut system = OpticalSystem::new();
///   system.add_light_source(LightSource::new(0.0, 8.0))?;
///   system.add("Lens_1", ThinLens::new(20.0, 10.0)?)?;
///   let image = system.calculate()?;
///   assert_eq!(image.x(), 40.0);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpticalSystem {
    light_source: Option<LightSource>,
    elements: HashMap<String, OpticalElement>,
    axial_order: Vec<String>,
    image_sequence: Vec<Image>,
    rays: RayTracks,
    settings: SystemSettings,
}
impl OpticalSystem {
    /// Creates a new, empty [`OpticalSystem`] with default [`SystemSettings`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new, empty [`OpticalSystem`] with the given [`SystemSettings`].
    #[must_use]
    pub fn with_settings(settings: SystemSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }
    /// Returns the [`SystemSettings`] of this [`OpticalSystem`].
    #[must_use]
    pub const fn settings(&self) -> SystemSettings {
        self.settings
    }
    /// Add an optical element to this [`OpticalSystem`] under the given name.
    ///
    /// The element is inserted into the axial order in front of the first element located further
    /// along the axis.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - an element with the given name already exists ([`OptiSimError::Configuration`]).
    ///  - the element is closer than the minimum separation to the light source or another element ([`OptiSimError::Geometry`]).
    ///
    /// The system is left unchanged in case of an error.
    pub fn add(&mut self, name: &str, element: impl Into<OpticalElement>) -> OptiResult<()> {
        let element = element.into();
        if self.elements.contains_key(name) {
            return Err(OptiSimError::Configuration(format!(
                "element with name '{name}' already exists"
            )));
        }
        self.check_collisions(element.x(), None)?;
        info!("add {element} as '{name}'");
        self.insert_sorted(name, element);
        self.invalidate();
        Ok(())
    }
    /// Add a light source to this [`OpticalSystem`], replacing a previously added one.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - the position or height of the light source is NaN ([`OptiSimError::Configuration`]).
    ///  - the light source is closer than the minimum separation to an element ([`OptiSimError::Geometry`]).
    pub fn add_light_source(&mut self, light_source: LightSource) -> OptiResult<()> {
        Self::check_light_source_value(light_source.x())?;
        Self::check_light_source_value(light_source.y())?;
        self.check_element_collisions(light_source.x(), None)?;
        if let Some(old) = self.light_source.replace(light_source) {
            info!("replace {old} by {light_source}");
        } else {
            info!("add {light_source}");
        }
        self.invalidate();
        Ok(())
    }
    /// Remove the element with the given name from this [`OpticalSystem`] and return it.
    ///
    /// # Errors
    ///
    /// This function returns an error if no element with the given name exists.
    pub fn remove(&mut self, name: &str) -> OptiResult<OpticalElement> {
        let element = self.elements.remove(name).ok_or_else(|| {
            OptiSimError::Configuration(format!("element with name '{name}' not found"))
        })?;
        self.axial_order.retain(|n| n != name);
        info!("removed '{name}'");
        self.invalidate();
        Ok(element)
    }
    /// Modify a parameter (`"x"` or `"y"`) of the light source.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - no light source has been added ([`OptiSimError::Precondition`]).
    ///  - the parameter name is not valid or the value is NaN ([`OptiSimError::Configuration`]).
    ///  - a new position collides with an element ([`OptiSimError::Geometry`]).
    pub fn modify_light_source(&mut self, param: &str, value: f64) -> OptiResult<()> {
        let mut light_source = self.light_source.ok_or_else(|| {
            OptiSimError::Precondition("no light source to be modified".into())
        })?;
        let param_type = parse_parameter::<LightSourceParameter>(param, "light source")?;
        Self::check_light_source_value(value)?;
        match param_type {
            LightSourceParameter::X => {
                self.check_element_collisions(value, None)?;
                light_source.set_x(value);
            }
            LightSourceParameter::Y => light_source.set_y(value),
        }
        info!("set light source parameter '{param}' to {value}");
        self.light_source = Some(light_source);
        self.invalidate();
        Ok(())
    }
    /// Modify a parameter of the element with the given name.
    ///
    /// Valid parameters are `x` and `f` for a thin lens and `x`, `n`, `d`, `r_left` and `r_right`
    /// for a thick lens. A change of the position (`x`) is subject to the same collision checks as
    /// [`add`](OpticalSystem::add) and moves the element within the axial order.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///  - no element with the given name exists.
    ///  - the parameter name is not valid for the type of the element.
    ///  - the value is not valid for the parameter.
    ///  - the new position collides with the light source or another element.
    ///
    /// The system is left unchanged in case of an error.
    pub fn modify_optical_object(&mut self, name: &str, param: &str, value: f64) -> OptiResult<()> {
        let element = self.element_ref(name)?;
        let old_x = element.x();
        let mut modified = element.clone();
        modified.set_parameter(param, value)?;
        if modified.x() == old_x {
            self.elements.insert(name.to_owned(), modified);
        } else {
            self.check_collisions(modified.x(), Some(name))?;
            self.axial_order.retain(|n| n != name);
            self.insert_sorted(name, modified);
        }
        info!("set parameter '{param}' of '{name}' to {value}");
        self.invalidate();
        Ok(())
    }
    /// Calculate the image formation of this [`OpticalSystem`].
    ///
    /// The light source is imaged by the first element located behind it. Each following element
    /// images the image of its predecessor. Elements in front of the light source are ignored.
    /// Along the way, the sequence of images and two representative rays are recorded (see
    /// [`image_sequence`](OpticalSystem::image_sequence) and [`rays`](OpticalSystem::rays)).
    ///
    /// Returns the final image.
    ///
    /// # Errors
    ///
    /// This function returns [`OptiSimError::Precondition`] if
    ///  - no light source has been added.
    ///  - no elements have been added.
    ///  - all elements are located in front of the light source.
    pub fn calculate(&mut self) -> OptiResult<Image> {
        self.invalidate();
        let light_source = self.light_source.ok_or_else(|| {
            OptiSimError::Precondition("no light source has been added to the system".into())
        })?;
        if self.elements.is_empty() {
            return Err(OptiSimError::Precondition(
                "no optical elements have been added to the system".into(),
            ));
        }
        let mut illuminated = Vec::with_capacity(self.axial_order.len());
        for name in &self.axial_order {
            let element = self.element_ref(name)?;
            if element.x() >= light_source.x() {
                illuminated.push((name.as_str(), element));
            }
        }
        let skipped = self.axial_order.len() - illuminated.len();
        let Some(((first_name, first), following)) = illuminated.split_first() else {
            return Err(OptiSimError::Precondition(
                "the light source does not illuminate any element".into(),
            ));
        };
        if skipped > 0 {
            warn!("{skipped} element(s) in front of the light source are ignored");
        }
        let mut image_sequence = Vec::with_capacity(illuminated.len());
        let mut rays = RayTracks::new(light_source.point());
        rays.enter_first_element(first.x(), light_source.y());
        let mut image = first.calculate(&light_source);
        Self::log_image(first_name, &image);
        image_sequence.push(image);
        for (name, element) in following {
            rays.propagate_to(element.x(), image.point());
            image = element.calculate(&image);
            Self::log_image(name, &image);
            image_sequence.push(image);
        }
        rays.converge_at(image.point());
        info!("final {image}");
        self.image_sequence = image_sequence;
        self.rays = rays;
        Ok(image)
    }
    /// Returns a copy of the light source of this [`OpticalSystem`] (if any).
    #[must_use]
    pub const fn light_source(&self) -> Option<LightSource> {
        self.light_source
    }
    /// Returns a copy of the element with the given name.
    ///
    /// # Errors
    ///
    /// This function returns an error if no element with the given name exists.
    pub fn element(&self, name: &str) -> OptiResult<OpticalElement> {
        self.element_ref(name).cloned()
    }
    /// Returns a copy of all elements of this [`OpticalSystem`] by their names.
    #[must_use]
    pub fn system_elements(&self) -> HashMap<String, OpticalElement> {
        self.elements.clone()
    }
    /// Returns the element names sorted by ascending axial position.
    #[must_use]
    pub fn axial_order(&self) -> &[String] {
        &self.axial_order
    }
    /// Returns the number of elements of this [`OpticalSystem`].
    #[must_use]
    pub fn nr_of_elements(&self) -> usize {
        self.elements.len()
    }
    /// Returns the images formed during the last [`calculate`](OpticalSystem::calculate) run.
    ///
    /// The sequence is empty if the system has been changed since.
    #[must_use]
    pub fn image_sequence(&self) -> &[Image] {
        &self.image_sequence
    }
    /// Returns the final image of the last [`calculate`](OpticalSystem::calculate) run (if any).
    #[must_use]
    pub fn final_image(&self) -> Option<Image> {
        self.image_sequence.last().copied()
    }
    /// Returns the rays traced during the last [`calculate`](OpticalSystem::calculate) run.
    ///
    /// The rays are empty if the system has been changed since.
    #[must_use]
    pub const fn rays(&self) -> &RayTracks {
        &self.rays
    }
    fn element_ref(&self, name: &str) -> OptiResult<&OpticalElement> {
        self.elements.get(name).ok_or_else(|| {
            OptiSimError::Configuration(format!("element with name '{name}' not found"))
        })
    }
    fn check_light_source_value(value: f64) -> OptiResult<()> {
        if value.is_nan() {
            Err(OptiSimError::Configuration(
                "position and height of light source must not be NaN".into(),
            ))
        } else {
            Ok(())
        }
    }
    /// Check a position against all elements except the one named `exclude`.
    fn check_element_collisions(&self, x: f64, exclude: Option<&str>) -> OptiResult<()> {
        for (name, element) in &self.elements {
            if exclude == Some(name.as_str()) {
                continue;
            }
            if self.settings.collide(element.x(), x) {
                return Err(OptiSimError::Geometry(format!(
                    "position {x} is too close to element '{name}' at {} (minimum separation {})",
                    element.x(),
                    self.settings.min_separation()
                )));
            }
        }
        Ok(())
    }
    /// Check a position against the light source and all elements except the one named `exclude`.
    fn check_collisions(&self, x: f64, exclude: Option<&str>) -> OptiResult<()> {
        if let Some(light_source) = &self.light_source {
            if self.settings.collide(light_source.x(), x) {
                return Err(OptiSimError::Geometry(format!(
                    "position {x} is too close to the light source at {} (minimum separation {})",
                    light_source.x(),
                    self.settings.min_separation()
                )));
            }
        }
        self.check_element_collisions(x, exclude)
    }
    fn insert_sorted(&mut self, name: &str, element: OpticalElement) {
        let x = element.x();
        let index = self
            .axial_order
            .iter()
            .position(|n| self.elements.get(n).is_some_and(|e| e.x() > x))
            .unwrap_or(self.axial_order.len());
        self.axial_order.insert(index, name.to_owned());
        self.elements.insert(name.to_owned(), element);
    }
    fn invalidate(&mut self) {
        self.image_sequence.clear();
        self.rays = RayTracks::default();
    }
    fn log_image(name: &str, image: &Image) {
        debug!("'{name}' forms {image}");
        if image.is_at_infinity() {
            warn!("'{name}' forms an image at infinity");
        }
    }
}
