#![warn(missing_docs)]
//! Representative rays traced through an optical system.
//!
//! Two rays are reconstructed during an imaging run, both starting at the tip of the light source:
//!  - `ray_1` leaves the source parallel to the optical axis.
//!  - `ray_2` passes the first element on the optical axis.
//!
//! Behind every element a ray heads for the image formed by that element. The rays are stored as
//! the sequence of points where they cross the element planes, ending at the final image.
use nalgebra::Point2;
use serde::Serialize;

/// Intersection of the straight line from `from` through `through` with the plane at axial position `x`.
///
/// If the line is not defined (`through` at infinity or in the same plane as `from`) the height of
/// `from` is kept.
#[must_use]
pub fn intersect_plane(from: Point2<f64>, through: Point2<f64>, x: f64) -> Point2<f64> {
    let slope = (through.y - from.y) / (through.x - from.x);
    let intercept = from.y - slope * from.x;
    let y = slope * x + intercept;
    if slope.is_finite() && y.is_finite() {
        Point2::new(x, y)
    } else {
        Point2::new(x, from.y)
    }
}

/// A single ray given by the points where it crosses the element planes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ray {
    points: Vec<Point2<f64>>,
}
impl Ray {
    /// Creates a new [`Ray`] starting at the given point.
    #[must_use]
    pub fn new(start: Point2<f64>) -> Self {
        Self {
            points: vec![start],
        }
    }
    /// Appends a point to this [`Ray`].
    pub fn add_point(&mut self, point: Point2<f64>) {
        self.points.push(point);
    }
    /// Returns the points of this [`Ray`].
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }
    /// Returns the axial positions of all points of this [`Ray`].
    #[must_use]
    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }
    /// Returns the heights of all points of this [`Ray`].
    #[must_use]
    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
    /// Returns the number of points of this [`Ray`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns `true` if this [`Ray`] has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Extend this [`Ray`] to the plane at `x` on the line from its last point towards `image`.
    pub fn propagate_to(&mut self, x: f64, image: Point2<f64>) {
        let from = self.points.last().copied().unwrap_or(image);
        self.points.push(intersect_plane(from, image, x));
    }
}

/// The two representative rays of an imaging run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RayTracks {
    ray_1: Ray,
    ray_2: Ray,
}
impl RayTracks {
    /// Creates new [`RayTracks`] with both rays starting at `start` (the tip of the light source).
    #[must_use]
    pub fn new(start: Point2<f64>) -> Self {
        Self {
            ray_1: Ray::new(start),
            ray_2: Ray::new(start),
        }
    }
    /// Returns the ray leaving the source parallel to the optical axis.
    #[must_use]
    pub const fn ray_1(&self) -> &Ray {
        &self.ray_1
    }
    /// Returns the ray crossing the first element on the optical axis.
    #[must_use]
    pub const fn ray_2(&self) -> &Ray {
        &self.ray_2
    }
    /// Returns a ray by its name (`"ray_1"` or `"ray_2"`).
    #[must_use]
    pub fn ray(&self, name: &str) -> Option<&Ray> {
        match name {
            "ray_1" => Some(&self.ray_1),
            "ray_2" => Some(&self.ray_2),
            _ => None,
        }
    }
    /// Iterate over the named rays.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Ray)> {
        [("ray_1", &self.ray_1), ("ray_2", &self.ray_2)].into_iter()
    }
    /// Returns `true` if no rays have been traced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ray_1.is_empty() && self.ray_2.is_empty()
    }
    /// Extend both rays to the plane of the first element at `x`.
    ///
    /// `ray_1` keeps the height of the light source, `ray_2` hits the element on the axis.
    pub(crate) fn enter_first_element(&mut self, x: f64, source_height: f64) {
        self.ray_1.add_point(Point2::new(x, source_height));
        self.ray_2.add_point(Point2::new(x, 0.0));
    }
    /// Extend both rays to the plane at `x` heading for `image`.
    pub(crate) fn propagate_to(&mut self, x: f64, image: Point2<f64>) {
        self.ray_1.propagate_to(x, image);
        self.ray_2.propagate_to(x, image);
    }
    /// Terminate both rays at the final image.
    pub(crate) fn converge_at(&mut self, image: Point2<f64>) {
        self.ray_1.add_point(image);
        self.ray_2.add_point(image);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    #[test]
    fn intersect() {
        let p = intersect_plane(Point2::new(60.0, 8.0), Point2::new(120.0, -8.0), 90.0);
        assert_eq!(p.x, 90.0);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        let p = intersect_plane(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0), 20.0);
        assert_eq!(p, Point2::new(20.0, 10.0));
    }
    #[test]
    fn intersect_degenerate() {
        let p = intersect_plane(
            Point2::new(10.0, 3.0),
            Point2::new(f64::INFINITY, f64::INFINITY),
            20.0,
        );
        assert_eq!(p, Point2::new(20.0, 3.0));
        let p = intersect_plane(Point2::new(10.0, 3.0), Point2::new(10.0, 1.0), 20.0);
        assert_eq!(p, Point2::new(20.0, 3.0));
        let p = intersect_plane(
            Point2::new(10.0, 3.0),
            Point2::new(f64::NEG_INFINITY, 2.0),
            20.0,
        );
        assert_eq!(p, Point2::new(20.0, 3.0));
    }
    #[test]
    fn ray() {
        let mut ray = Ray::new(Point2::new(0.0, 1.0));
        assert_eq!(ray.len(), 1);
        assert!(!ray.is_empty());
        ray.propagate_to(10.0, Point2::new(20.0, -1.0));
        assert_eq!(ray.x(), vec![0.0, 10.0]);
        assert_eq!(ray.y(), vec![1.0, 0.0]);
        assert!(Ray::default().is_empty());
    }
    #[test]
    fn ray_tracks() {
        let mut rays = RayTracks::new(Point2::new(-20.0, 10.0));
        rays.enter_first_element(0.0, 10.0);
        rays.converge_at(Point2::new(20.0, -10.0));
        assert_eq!(rays.ray_1().x(), vec![-20.0, 0.0, 20.0]);
        assert_eq!(rays.ray_1().y(), vec![10.0, 10.0, -10.0]);
        assert_eq!(rays.ray_2().x(), vec![-20.0, 0.0, 20.0]);
        assert_eq!(rays.ray_2().y(), vec![10.0, 0.0, -10.0]);
        assert_eq!(rays.ray("ray_1"), Some(rays.ray_1()));
        assert_eq!(rays.ray("ray_2"), Some(rays.ray_2()));
        assert!(rays.ray("ray_3").is_none());
        let names: Vec<&str> = rays.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ray_1", "ray_2"]);
        assert!(RayTracks::default().is_empty());
        assert!(!rays.is_empty());
    }
}
