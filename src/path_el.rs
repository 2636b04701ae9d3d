// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path elements.

use std::fmt;

use crate::Point;

/// One drawing instruction of a path.
///
/// A valid sub-path has a `MoveTo` at the beginning and a `ClosePath` at the
/// end. An element never stores its own start point; it starts wherever the
/// previous element ended.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// sub-path.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic Bézier from the current location to the second
    /// point, with the first point as the control point.
    QuadTo(Point, Point),
    /// Draw a cubic Bézier from the current location to the third point,
    /// with the first two points as control points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl PathEl {
    /// Is the element a quadratic or cubic curve?
    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, PathEl::QuadTo(..) | PathEl::CurveTo(..))
    }

    /// The point this element draws (or moves) to, if it has one.
    ///
    /// `ClosePath` carries no coordinate of its own; its destination is the
    /// enclosing sub-path's start point, which the element alone cannot
    /// know. See [`SubPath::end_point`](crate::SubPath::end_point) for the
    /// sub-path-aware query.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathEl::MoveTo(p) => Some(p),
            PathEl::LineTo(p) => Some(p),
            PathEl::QuadTo(_, p) => Some(p),
            PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        }
    }

    /// A copy of this element with the destination replaced and any control
    /// points kept.
    ///
    /// `ClosePath` is returned unchanged.
    #[must_use]
    pub fn with_end_point(self, p: Point) -> PathEl {
        match self {
            PathEl::MoveTo(_) => PathEl::MoveTo(p),
            PathEl::LineTo(_) => PathEl::LineTo(p),
            PathEl::QuadTo(c, _) => PathEl::QuadTo(c, p),
            PathEl::CurveTo(c1, c2, _) => PathEl::CurveTo(c1, c2, p),
            PathEl::ClosePath => PathEl::ClosePath,
        }
    }

    /// Is this path element finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            PathEl::MoveTo(p) => p.is_finite(),
            PathEl::LineTo(p) => p.is_finite(),
            PathEl::QuadTo(p, p2) => p.is_finite() && p2.is_finite(),
            PathEl::CurveTo(p, p2, p3) => p.is_finite() && p2.is_finite() && p3.is_finite(),
            PathEl::ClosePath => true,
        }
    }
}

impl fmt::Display for PathEl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEl::MoveTo(p) => write!(f, "move to {p}"),
            PathEl::LineTo(p) => write!(f, "line to {p}"),
            PathEl::QuadTo(c, p) => write!(f, "quad curve to {p} [c: {c}]"),
            PathEl::CurveTo(c1, c2, p) => write!(f, "cubic curve to {p} [c1: {c1}, c2: {c2}]"),
            PathEl::ClosePath => write!(f, "close subpath"),
        }
    }
}
