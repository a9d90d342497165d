//! Problem instances: graphs, item sets, and city sets.
//!
//! An instance is generated once per "Generate" action and stays immutable
//! for the lifetime of a solving session. Engines are created fresh over an
//! instance each time a solve starts and are discarded when it stops.

mod cities;
mod graph;
mod items;

pub use cities::CitySet;
pub use graph::Graph;
pub use items::{Item, ItemSet};

/// A 2D point used for vertex layouts and city positions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
