// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar, and their arc-length
//! parameterization.

use crate::Point;

/// The number of uniform samples used to approximate arc length, and the
/// maximum number of bisection iterations when inverting it.
pub const ARCLEN_STEPS: usize = 20;

/// The distance tolerance at which the arc-length bisection stops early.
pub const ARCLEN_TOLERANCE: f64 = 0.5;

/// A curve parametrized by a scalar.
///
/// The parameter `t` is generally in the range [0..1].
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A parametrized curve that can have its arc length measured and inverted.
///
/// No closed form exists for the arc length of quadratic and cubic Béziers,
/// so the default methods approximate it piecewise-linearly: the curve is
/// sampled at a fixed number of uniform parameter steps and chord lengths
/// are summed. Inversion is bisection over the parameter. Accuracy is
/// bounded by the sampling resolution; the defaults ([`ARCLEN_STEPS`],
/// [`ARCLEN_TOLERANCE`]) are adequate for screen-space rounding radii.
/// The `_with` variants take explicit tunables.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve from parameter 0 to `t`, approximated
    /// with `steps` uniform samples.
    ///
    /// The result is monotonic non-decreasing in `t` for curves that do not
    /// fold back on themselves at the sampled resolution.
    fn arclen_to_with_steps(&self, t: f64, steps: usize) -> f64 {
        let mut length = 0.0;
        let mut prev = self.eval(0.0);
        let step = t / steps as f64;
        for i in 1..=steps {
            let curr = self.eval(i as f64 * step);
            length += curr.distance(prev);
            prev = curr;
        }
        length
    }

    /// The arc length of the curve from parameter 0 to `t`.
    fn arclen_to(&self, t: f64) -> f64 {
        self.arclen_to_with_steps(t, ARCLEN_STEPS)
    }

    /// The total arc length of the curve.
    fn arclen(&self) -> f64 {
        self.arclen_to(1.0)
    }

    /// The point at arc length `len` from the curve's start, with explicit
    /// tunables.
    ///
    /// Bisection over `t`: probe the bracket midpoint, measure its arc
    /// length, and narrow to the half containing the target. Stops once the
    /// measured length is within `tolerance` of `len`, or after `steps`
    /// iterations.
    ///
    /// `len <= 0` returns the start point exactly and `len >= arclen()` the
    /// end point exactly, so the walk never extrapolates.
    fn point_at_arclen_with(&self, len: f64, steps: usize, tolerance: f64) -> Point {
        if len <= 0.0 {
            return self.start();
        }
        if len >= self.arclen_to_with_steps(1.0, steps) {
            return self.end();
        }

        let mut t0 = 0.0;
        let mut t1 = 1.0;
        let mut tm = 0.5;
        for _ in 0..steps {
            tm = 0.5 * (t0 + t1);
            let measured = self.arclen_to_with_steps(tm, steps);
            if (measured - len).abs() < tolerance {
                break;
            }
            if measured < len {
                t0 = tm;
            } else {
                t1 = tm;
            }
        }
        self.eval(tm)
    }

    /// The point at arc length `len` from the curve's start.
    fn point_at_arclen(&self, len: f64) -> Point {
        self.point_at_arclen_with(len, ARCLEN_STEPS, ARCLEN_TOLERANCE)
    }

    /// The point at arc length `len` from the curve's end.
    fn point_from_end(&self, len: f64) -> Point {
        self.point_at_arclen(self.arclen() - len)
    }
}
