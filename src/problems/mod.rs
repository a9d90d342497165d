//! Problem encodings for the genetic engine.
//!
//! One [`Encoding`](crate::ga::Encoding) implementation per domain:
//!
//! - [`ColoringEncoding`]: color-index genomes over a [`Graph`](crate::instance::Graph)
//! - [`SubsetEncoding`]: boolean selection genomes over an [`ItemSet`](crate::instance::ItemSet)
//! - [`TourEncoding`]: city-permutation genomes over a [`CitySet`](crate::instance::CitySet)

mod coloring;
mod subset;
mod tour;

pub use coloring::{Coloring, ColoringEncoding};
pub use subset::{SubsetEncoding, SubsetSelection};
pub use tour::{Tour, TourEncoding};
