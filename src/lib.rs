// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D path thinning and corner rounding.
//!
//! Glato represents a vector path as a sequence of independently
//! processable closed sub-paths, built from typed elements (moves, lines,
//! quadratic and cubic Bézier curves, closes), and provides two transforms
//! over them:
//!
//! - [`Path::thinned`] merges runs of geometrically insignificant elements
//!   into one while keeping the figure's general form, removing the jitter
//!   typical of traced or scanned outlines.
//! - [`Path::rounded`] replaces the figure's vertices with quadratic Bézier
//!   blends of a given radius, filtered by turn direction through a
//!   [`RoundingRule`].
//!
//! The crate is a pure in-memory transform library: no drawing, no I/O.
//! Everything is an immutable value, so paths can be processed from many
//! threads without coordination. The boundary representation is the
//! [`PathEl`] sequence; adapters to platform path types decompose into and
//! re-assemble from it.
//!
//! # Example
//!
//! ```
//! use glato::{Path, PathEl, Point, RoundingRule};
//!
//! let square = Path::from_els([
//!     PathEl::MoveTo(Point::new(0.0, 0.0)),
//!     PathEl::LineTo(Point::new(0.0, 100.0)),
//!     PathEl::LineTo(Point::new(100.0, 100.0)),
//!     PathEl::LineTo(Point::new(100.0, 0.0)),
//!     PathEl::ClosePath,
//! ]);
//!
//! let rounded = square.rounded(10.0, RoundingRule::All);
//! // Four shortened sides interleaved with four corner blends.
//! assert_eq!(rounded.subpaths()[0].len(), 10);
//! ```
//!
//! Lower layers are exported too: [`QuadBez`] and [`CubicBez`] with their
//! sampled arc-length parameterization ([`ParamCurveArclen`]), and the
//! [`Point`]/[`Vec2`]/[`Line`] vocabulary types.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]

mod cubicbez;
mod line;
mod param_curve;
mod path;
mod path_el;
mod point;
mod quadbez;
mod subpath;
mod vec2;

pub use crate::cubicbez::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::path_el::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::subpath::*;
pub use crate::vec2::*;
