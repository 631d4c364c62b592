#![warn(missing_docs)]
//! Reports of an imaging calculation.
//!
//! A [`SystemReport`] is a snapshot of an [`OpticalSystem`] taken after (or without) a calculation
//! run. It can be written as human-readable text or exported as JSON.
use crate::{
    error::{OptiResult, OptiSimError},
    get_version,
    imaging_subject::{Image, LightSource},
    nodes::{Lens, OpticalElement},
    optical_system::OpticalSystem,
    rays::RayTracks,
    system_settings::SystemSettings,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

/// Report entry of a single optical element.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElementReport {
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    parameters: Vec<(String, f64)>,
    focal_length: f64,
    description: String,
}
impl ElementReport {
    /// Creates a new [`ElementReport`] for the given element.
    #[must_use]
    pub fn new(name: &str, element: &OpticalElement) -> Self {
        Self {
            name: name.to_owned(),
            node_type: element.node_type().to_owned(),
            parameters: element.parameters(),
            focal_length: element.f(),
            description: element.to_string(),
        }
    }
    /// Returns the name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the (derived) focal length of the element.
    #[must_use]
    pub const fn focal_length(&self) -> f64 {
        self.focal_length
    }
}

/// Structure for storing the data of an [`OpticalSystem`] being integrated in a report.
#[derive(Serialize, Debug, Clone)]
pub struct SystemReport {
    optisim_version: String,
    report_timestamp: DateTime<Local>,
    settings: SystemSettings,
    light_source: Option<LightSource>,
    elements: Vec<ElementReport>,
    images: Vec<(String, Image)>,
    rays: RayTracks,
    final_image: Option<Image>,
}
impl SystemReport {
    /// Creates a new [`SystemReport`] from the current state of the given [`OpticalSystem`].
    ///
    /// The elements are listed in axial order. Each image is paired with the name of the element
    /// forming it.
    #[must_use]
    pub fn new(system: &OpticalSystem) -> Self {
        let all_elements = system.system_elements();
        let elements: Vec<ElementReport> = system
            .axial_order()
            .iter()
            .filter_map(|name| {
                all_elements
                    .get(name)
                    .map(|element| ElementReport::new(name, element))
            })
            .collect();
        // elements in front of the light source form no image and precede all others
        let images = system.image_sequence();
        let skipped = elements.len().saturating_sub(images.len());
        let images = elements
            .iter()
            .skip(skipped)
            .zip(images)
            .map(|(element, image)| (element.name.clone(), *image))
            .collect();
        Self {
            optisim_version: get_version(),
            report_timestamp: Local::now(),
            settings: system.settings(),
            light_source: system.light_source(),
            elements,
            images,
            rays: system.rays().clone(),
            final_image: system.final_image(),
        }
    }
    /// Returns the element entries of this [`SystemReport`] in axial order.
    #[must_use]
    pub fn elements(&self) -> &[ElementReport] {
        &self.elements
    }
    /// Returns the final image of this [`SystemReport`] (if calculated).
    #[must_use]
    pub const fn final_image(&self) -> Option<Image> {
        self.final_image
    }
    /// Write the system description and the final image as text.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing fails.
    pub fn write_text(&self, writer: &mut impl Write) -> OptiResult<()> {
        let mut text = format!(
            "optisim {} report ({})\n",
            self.optisim_version,
            self.report_timestamp.format("%Y/%m/%d %H:%M")
        );
        match &self.light_source {
            Some(light_source) => text += &format!("{light_source}\n"),
            None => text += "no light source\n",
        }
        text += &format!("{} optical element(s):\n", self.elements.len());
        for element in &self.elements {
            text += &format!("  {}: {}\n", element.name, element.description);
        }
        match &self.final_image {
            Some(image) => text += &format!("final image: {image}\n"),
            None => text += "final image: not calculated\n",
        }
        write_all(writer, &text)
    }
    /// Write the sequence of images, one line per image.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing fails.
    pub fn write_image_list(&self, writer: &mut impl Write) -> OptiResult<()> {
        let mut text = String::from("images:\n");
        for (i, (name, image)) in self.images.iter().enumerate() {
            text += &format!("  {}: {image} formed by '{name}'\n", i + 1);
        }
        write_all(writer, &text)
    }
    /// Write the points of both rays as a table of axial position and height.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing fails.
    pub fn write_ray_table(&self, writer: &mut impl Write) -> OptiResult<()> {
        let mut text = String::new();
        for (name, ray) in self.rays.iter() {
            text += &format!("{name}:\n{:>14} {:>14}\n", "x", "y");
            for point in ray.points() {
                text += &format!("{:>14.6} {:>14.6}\n", point.x, point.y);
            }
        }
        write_all(writer, &text)
    }
    /// Return the JSON representation of this [`SystemReport`].
    ///
    /// JSON has no representation for infinite numbers. Coordinates of images and ray points at
    /// infinity are written as `null`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_json_string(&self) -> OptiResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OptiSimError::Io(format!("serialization of report failed: {e}")))
    }
}

fn write_all(writer: &mut impl Write, text: &str) -> OptiResult<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| OptiSimError::Io(format!("writing report failed: {e}")))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nodes::{ThickLens, ThinLens};

    fn calculated_system() -> OpticalSystem {
        let mut system = OpticalSystem::new();
        system.add_light_source(LightSource::new(0.0, 8.0)).unwrap();
        system.add("L2", ThinLens::new(90.0, 30.0).unwrap()).unwrap();
        system.add("L1", ThinLens::new(60.0, 30.0).unwrap()).unwrap();
        system
            .add("Behind", ThickLens::new(-10.0, 1.5, 3.0, 10.0, 10.0).unwrap())
            .unwrap();
        system.calculate().unwrap();
        system
    }
    fn to_text(
        report: &SystemReport,
        f: fn(&SystemReport, &mut Vec<u8>) -> OptiResult<()>,
    ) -> String {
        let mut buffer = Vec::new();
        f(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }
    #[test]
    fn new() {
        let report = SystemReport::new(&calculated_system());
        let names: Vec<&str> = report.elements().iter().map(ElementReport::name).collect();
        assert_eq!(names, vec!["Behind", "L1", "L2"]);
        assert_eq!(report.elements()[2].focal_length(), 30.0);
        assert_eq!(report.final_image(), Some(Image::new(105.0, -4.0, true)));
        assert_eq!(report.images.len(), 2);
        assert_eq!(report.images[0].0, "L1");
        assert_eq!(report.images[1].0, "L2");
    }
    #[test]
    fn element_report() {
        let element = OpticalElement::from(ThickLens::new(30.0, 1.5, 3.0, 10.0, 10.0).unwrap());
        let report = ElementReport::new("T", &element);
        assert_eq!(report.name(), "T");
        assert_eq!(report.node_type, "thick");
        assert_eq!(report.parameters.len(), 5);
        assert_eq!(report.focal_length(), element.f());
    }
    #[test]
    fn write_text() {
        let text = to_text(&SystemReport::new(&calculated_system()), |r, w| {
            r.write_text(w)
        });
        assert!(text.starts_with(&format!("optisim {} report (", get_version())));
        assert!(text.contains("light source (x: 0, y: 8)\n"));
        assert!(text.contains("3 optical element(s):\n"));
        assert!(text.contains("  L1: thin lens (x: 60, f: 30)\n"));
        assert!(text.contains("  Behind: thick lens (x: -10,"));
        assert!(text.ends_with("final image: real image (x: 105, y: -4)\n"));
    }
    #[test]
    fn write_text_empty_system() {
        let text = to_text(&SystemReport::new(&OpticalSystem::new()), |r, w| {
            r.write_text(w)
        });
        assert!(text.contains("no light source\n"));
        assert!(text.contains("0 optical element(s):\n"));
        assert!(text.ends_with("final image: not calculated\n"));
    }
    #[test]
    fn write_image_list() {
        let text = to_text(&SystemReport::new(&calculated_system()), |r, w| {
            r.write_image_list(w)
        });
        assert_eq!(
            text,
            "images:\n  1: real image (x: 120, y: -8) formed by 'L1'\n  2: real image (x: 105, y: -4) formed by 'L2'\n"
        );
    }
    #[test]
    fn write_ray_table() {
        let text = to_text(&SystemReport::new(&calculated_system()), |r, w| {
            r.write_ray_table(w)
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "ray_1:");
        assert_eq!(lines[2], "      0.000000       8.000000");
        assert_eq!(lines[6], "ray_2:");
        assert_eq!(lines[9], "     60.000000       0.000000");
        assert_eq!(lines[11], "    105.000000      -4.000000");
    }
    #[test]
    fn to_json_string() {
        let json = SystemReport::new(&calculated_system())
            .to_json_string()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["optisim_version"], get_version());
        assert_eq!(value["settings"]["min_separation"], 0.001);
        assert_eq!(value["light_source"]["y"], 8.0);
        assert_eq!(value["elements"][1]["name"], "L1");
        assert_eq!(value["elements"][1]["type"], "thin");
        assert_eq!(value["final_image"]["x"], 105.0);
        assert_eq!(value["final_image"]["real"], true);
        assert_eq!(value["rays"]["ray_1"]["points"][0][1], 8.0);
    }
    #[test]
    fn to_json_string_image_at_infinity() {
        let mut system = OpticalSystem::new();
        system.add_light_source(LightSource::new(0.0, 1.0)).unwrap();
        system.add("L1", ThinLens::new(10.0, 10.0).unwrap()).unwrap();
        system.add("L2", ThinLens::new(30.0, 5.0).unwrap()).unwrap();
        system.calculate().unwrap();
        let report = SystemReport::new(&system);
        assert!(report.images[0].1.is_at_infinity());
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_string().unwrap()).unwrap();
        assert_eq!(value["images"][0][0], "L1");
        assert!(value["images"][0][1]["x"].is_null());
        assert!(value["images"][0][1]["y"].is_null());
        assert_eq!(value["images"][1][1]["x"], 35.0);
        assert_eq!(value["final_image"]["x"], 35.0);
    }
}
