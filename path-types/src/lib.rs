//! Geometry types shared by the path point tools.
//!
//! These are plain value types: points, rectangles, path segments and the
//! [`Pen`] trait for receiving a stream of path commands.

// `Point` needs an unsafe impl to be plain old data.
#![cfg_attr(not(feature = "bytemuck"), forbid(unsafe_code))]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod pen;
mod point;
mod rect;
mod segment;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use pen::Pen;
pub use point::Point;
pub use rect::Rect;
pub use segment::{PathSegment, SegmentPoints};
