//! Conversion between vector paths and flat point sequences.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s. [`extract_points`]
//! flattens the segments of a path into the points that define them and
//! [`build_closed_polygon`] goes the other way, joining a list of points into
//! a closed polygon.
//!
//! ```
//! use path_points::{build_closed_polygon, types::Point};
//!
//! let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].map(Point::from);
//! let path = build_closed_polygon(&square).unwrap();
//! assert_eq!(path.points(), square);
//! ```
//!
//! With the `kurbo` feature (enabled by default) paths can also be exchanged
//! with [`kurbo::BezPath`](https://docs.rs/kurbo/latest/kurbo/struct.BezPath.html).
//!
//! The crate also carries a couple of small helpers that tend to travel with
//! path code: [`Color::from_hex`] and [`Path::from_point`].

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Expose the underlying geometry types crate.
pub extern crate path_types as types;

mod codec;
mod color;
mod error;
#[cfg(feature = "kurbo")]
mod bezpath;
mod path;

pub use codec::{build_closed_polygon, extract_points};
pub use color::Color;
pub use error::{EmptyInputError, MalformedPath};
#[cfg(feature = "kurbo")]
pub use bezpath::bezpath_points;
pub use path::Path;

#[doc(inline)]
pub use types::{PathSegment, Pen, Point, Rect};
