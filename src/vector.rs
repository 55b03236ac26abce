//! Small 2D vector math used by the viewer.
//!
//! Every operation takes its inputs by value and returns a new value. Degenerate
//! inputs (zero-length vectors) never panic: `normalize`, `angle` and `reflect`
//! substitute a defined fallback instead.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Default tolerance for [`Vec2::equal`].
pub const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    /// Squared length, `x*x + y*y`.
    #[inline]
    pub fn length2(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length2().sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn dist2(self, other: Vec2) -> f32 {
        self.sub(other).length2()
    }

    #[inline]
    pub fn dist(self, other: Vec2) -> f32 {
        self.sub(other).length()
    }

    /// Unit vector in the same direction. A vector of exactly zero length
    /// comes back as `(0, 0)`.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product with both vectors lifted to z = 0.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Unsigned angle between two vectors in `[0, π]`.
    ///
    /// Returns 0 when either vector has zero length.
    pub fn angle(self, other: Vec2) -> f32 {
        let len_a = self.length();
        let len_b = other.length();
        if len_a == 0.0 || len_b == 0.0 {
            return 0.0;
        }
        // rounding can push parallel inputs just past ±1
        (self.dot(other) / (len_a * len_b)).clamp(-1.0, 1.0).acos()
    }

    /// Tolerant comparison.
    ///
    /// Two vectors that are both shorter than `eps` compare equal. Otherwise each
    /// axis is compared with a relative tolerance, `|a - b| <= eps * max(|a|, |b|)`.
    /// When one side of an axis is exactly zero the tolerance on that axis
    /// collapses to zero, so only an exact match passes.
    pub fn equal(self, other: Vec2, eps: f32) -> bool {
        if self.length() < eps && other.length() < eps {
            return true;
        }
        (self.x - other.x).abs() <= eps * self.x.abs().max(other.x.abs())
            && (self.y - other.y).abs() <= eps * self.y.abs().max(other.y.abs())
    }

    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
        )
    }

    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
        )
    }

    #[inline]
    pub fn abs(self) -> Vec2 {
        Vec2::new(self.x.abs(), self.y.abs())
    }

    /// Perpendicular, rotated 90° counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Projection of `self` onto `onto`.
    ///
    /// `onto` must not be the zero vector; the result is NaN if it is.
    pub fn project(self, onto: Vec2) -> Vec2 {
        let scalar = self.dot(onto) / onto.length2();
        onto.mul(scalar)
    }

    /// Component of `self` orthogonal to `from`.
    pub fn reject(self, from: Vec2) -> Vec2 {
        self.sub(self.project(from))
    }

    /// Reflection about the normal `n`, which is normalized first.
    /// A zero normal leaves `self` unchanged.
    pub fn reflect(self, n: Vec2) -> Vec2 {
        let n = n.normalize();
        self.sub(n.mul(2.0 * self.dot(n)))
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotate(self, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn rotate_around(self, pivot: Vec2, radians: f32) -> Vec2 {
        self.sub(pivot).rotate(radians).add(pivot)
    }

    #[inline]
    pub fn rot90_ccw(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    pub fn rot90_cw(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::add(self, other)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::sub(self, other)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::mul(self, s)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, s: f32) -> Vec2 {
        Vec2::new(self.x / s, self.y / s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Vec2::new(v[0], v[1])
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn coord() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    fn vec2() -> impl Strategy<Value = Vec2> {
        (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
    }

    /// Vectors long enough that normalizing or projecting onto them is well conditioned.
    fn non_zero_vec2() -> impl Strategy<Value = Vec2> {
        vec2().prop_filter("too short", |v| v.length() > 1e-2)
    }

    fn close(a: Vec2, b: Vec2, scale: f32) -> bool {
        let tol = 1e-4 * scale.max(1.0);
        (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
    }

    proptest! {
        #[test]
        fn length2_is_self_dot(a in vec2()) {
            prop_assert_eq!(a.length2(), a.dot(a));
        }

        #[test]
        fn normalized_has_unit_length(a in non_zero_vec2()) {
            let len = a.normalize().length();
            prop_assert!((len - 1.0).abs() <= 1e-5, "|normalize({})| = {}", a, len);
        }

        #[test]
        fn cross_is_antisymmetric_and_dot_symmetric(a in vec2(), b in vec2()) {
            prop_assert_eq!(a.cross(b), -b.cross(a));
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn rotate_around_by_zero_is_identity(v in vec2(), pivot in vec2()) {
            let r = v.rotate_around(pivot, 0.0);
            prop_assert!(close(r, v, v.length() + pivot.length()), "{} -> {}", v, r);
        }

        #[test]
        fn rot90_ccw_matches_rotate(v in vec2()) {
            let fast = v.rot90_ccw();
            let slow = v.rotate(FRAC_PI_2);
            prop_assert!(close(fast, slow, v.length()), "{} vs {}", fast, slow);
        }

        #[test]
        fn project_plus_reject_is_identity(a in vec2(), b in non_zero_vec2()) {
            let sum = a.project(b) + a.reject(b);
            prop_assert!(close(sum, a, a.length()), "{} vs {}", sum, a);
        }

        #[test]
        fn reflect_twice_is_identity(a in vec2(), n in non_zero_vec2()) {
            let back = a.reflect(n).reflect(n);
            prop_assert!(close(back, a, a.length()), "{} vs {}", back, a);
        }

        #[test]
        fn angle_stays_in_range(a in vec2(), b in vec2()) {
            let angle = a.angle(b);
            prop_assert!((0.0..=std::f32::consts::PI).contains(&angle), "angle = {}", angle);
        }
    }
}
