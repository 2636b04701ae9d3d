// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use thiserror::Error;

use crate::{ParamCurve, ParamCurveArclen, Point, Vec2};

/// A single directed line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

/// The error produced when walking a distance along a line whose endpoints
/// coincide.
///
/// The walk direction of a zero-length line is undefined; succeeding would
/// mean silently propagating `NaN` coordinates into downstream geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot walk a distance along a zero-length line")]
pub struct ZeroLengthLine;

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Line {
        Line {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.vector().hypot()
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The displacement from the start to the end of the line.
    #[inline]
    pub fn vector(self) -> Vec2 {
        self.p1 - self.p0
    }

    /// Computes the point where two lines, if extended to infinity, would
    /// cross.
    ///
    /// The lines are expressed in implicit form `a·x + b·y = c` and solved
    /// with the standard 2×2 determinant method. Returns `None` when the
    /// determinant magnitude falls below machine epsilon, which covers both
    /// parallel and coincident lines.
    pub fn crossing_point(self, other: Line) -> Option<Point> {
        let (p1, p2) = (self.p0, self.p1);
        let (p3, p4) = (other.p0, other.p1);

        let a1 = p2.y - p1.y;
        let b1 = p1.x - p2.x;
        let c1 = a1 * p1.x + b1 * p1.y;

        let a2 = p4.y - p3.y;
        let b2 = p3.x - p4.x;
        let c2 = a2 * p3.x + b2 * p3.y;

        let determinant = a1 * b2 - a2 * b1;
        if determinant.abs() < f64::EPSILON {
            return None;
        }

        let x = (b2 * c1 - b1 * c2) / determinant;
        let y = (a1 * c2 - a2 * c1) / determinant;
        Some(Point::new(x, y))
    }

    /// The point at `distance` from the start of the line, walking the
    /// line's direction.
    ///
    /// A `distance` greater than the line's length extrapolates past the
    /// end point.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroLengthLine`] when the endpoints coincide.
    pub fn point_at_start(self, distance: f64) -> Result<Point, ZeroLengthLine> {
        let v = self.vector();
        if v.hypot() == 0.0 {
            return Err(ZeroLengthLine);
        }
        Ok(self.p0 + v.normalize() * distance)
    }

    /// The point at `distance` from the end of the line, walking against the
    /// line's direction.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroLengthLine`] when the endpoints coincide.
    pub fn point_at_end(self, distance: f64) -> Result<Point, ZeroLengthLine> {
        let v = self.vector();
        if v.hypot() == 0.0 {
            return Err(ZeroLengthLine);
        }
        Ok(self.p1 - v.normalize() * distance)
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

impl From<(Point, Point)> for Line {
    #[inline]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveArclen for Line {
    /// A line's arc length is exact; the sampling resolution is ignored.
    #[inline]
    fn arclen_to_with_steps(&self, t: f64, _steps: usize) -> f64 {
        self.vector().hypot() * t
    }

    fn point_at_arclen_with(&self, len: f64, _steps: usize, _tolerance: f64) -> Point {
        let total = self.arclen();
        if len <= 0.0 {
            return self.p0;
        }
        if len >= total {
            return self.p1;
        }
        self.eval(len / total)
    }
}
