#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::bounds;
use num_traits::Zero;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector representation using 32-bit floating point coordinates.
///
/// [`Vec2`] doubles as a point and a direction; the coordinate convention is
/// screen space, +x to the right and +y downward, so a "clockwise" rotation is
/// clockwise as seen on screen.
///
/// # Equality
/// Two vectors are considered equal if their components differ by less than
/// [`EPSILON`](crate::core::config::EPSILON). This handles floating point
/// imprecision while still ensuring reflexivity and transitivity.
///
/// # Examples
///
/// ```
/// use glide2d::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
#[derive(Default, Debug, Copy, Clone, bincode::Encode, bincode::Decode)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// The point on a circle of the given radius at the given heading, i.e.
    /// `(radius·cos θ, radius·sin θ)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide2d::core::prelude::*;
    /// let p = Vec2::from_polar(std::f32::consts::FRAC_PI_2, 2.0);
    /// assert_eq!(p, Vec2 { x: 0.0, y: 2.0 });
    /// ```
    #[must_use]
    pub fn from_polar(radians: f32, radius: f32) -> Vec2 {
        Vec2 {
            x: radius * radians.cos(),
            y: radius * radians.sin(),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid
    /// the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this vector.
    /// A zero vector norms to zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns a new vector rotated clockwise about the origin by the given
    /// angle in radians. Clockwise here means clockwise on screen (+y down);
    /// in a mathematical +y-up frame this is a counter-clockwise rotation.
    ///
    /// The rotation projects onto the rotated basis `(cos θ, sin θ)`,
    /// `(cos(θ+π/2), sin(θ+π/2))`, which preserves length.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide2d::core::prelude::*;
    /// let rotated = Vec2::right().rotated(std::f32::consts::PI / 2.0);
    /// assert!(rotated.almost_eq(Vec2::down()));
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: f32) -> Vec2 {
        let basis_x = Vec2 {
            x: radians.cos(),
            y: radians.sin(),
        };
        let basis_y = Vec2 {
            x: (radians + FRAC_PI_2).cos(),
            y: (radians + FRAC_PI_2).sin(),
        };
        self.x * basis_x + self.y * basis_y
    }

    /// Rotates this point clockwise (on screen) about `origin` by the given
    /// angle in radians. Preserves the distance from `origin`.
    #[must_use]
    pub fn rotated_about(&self, origin: Vec2, radians: f32) -> Vec2 {
        (*self - origin).rotated(radians) + origin
    }

    /// The heading angle from this point to `other`, in radians normalized to
    /// `[0, 2π)`. Coincident points give 0 (the `atan2(0, 0)` convention).
    #[must_use]
    pub fn direction_to(&self, other: Vec2) -> f32 {
        let dir = f32::atan2(other.y - self.y, other.x - self.x);
        if dir < 0.0 { dir + TAU } else { dir }
    }

    /// Returns an orthogonal vector, rotated 90 degrees clockwise from this
    /// vector. Used as the perpendicular in the perp-dot intersection formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide2d::core::prelude::*;
    /// let vec = Vec2 { x: 3.0, y: 2.0 };
    /// assert_eq!(vec.orthog(), Vec2 { x: 2.0, y: -3.0 });
    /// assert_eq!(vec.dot(vec.orthog()), 0.0);
    /// ```
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perp-dot) of two vectors: the signed
    /// area of the parallelogram they span.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Projects the vector onto the x-axis.
    #[must_use]
    pub fn project_x(&self) -> Vec2 {
        Vec2 { x: self.x, y: 0.0 }
    }

    /// Projects the vector onto the y-axis.
    #[must_use]
    pub fn project_y(&self) -> Vec2 {
        Vec2 { x: 0.0, y: self.y }
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide2d::core::prelude::*;
    /// let p1 = Vec2 { x: 0.0, y: 0.0 };
    /// let p2 = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(p1.dist(p2), 5.0);
    /// ```
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (other - *self).len()
    }

    /// Computes the squared Euclidean distance between two points. More
    /// efficient than [`dist`](Vec2::dist) when only comparing distances.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (other - *self).len_squared()
    }

    /// Component-wise minimum of two vectors.
    #[must_use]
    pub fn min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum of two vectors.
    #[must_use]
    pub fn max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Rounds each component to the nearest whole number.
    #[must_use]
    pub fn round(&self) -> Vec2 {
        Vec2 {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than
    /// [`EPSILON`](crate::core::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A trait for shapes with an axis-aligned bounding extent.
///
/// Implementors provide `top_left()` and `extent()`; everything else (edges,
/// corners, centre, containment, overlap) is derived. Keeping the core methods
/// representation-exact matters: the swept collision test compares edge
/// coordinates with exact floating point equality after snapping.
///
/// # Examples
///
/// ```
/// use glide2d::core::prelude::*;
///
/// let rect = Rect::new(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 4.0, y: 3.0 });
/// assert_eq!(rect.right(), 4.0);
/// assert_eq!(rect.centre(), Vec2 { x: 2.0, y: 1.5 });
/// assert!(rect.contains_point(Vec2 { x: 0.0, y: 0.0 }));
/// assert!(!rect.contains_point(Vec2 { x: 4.0, y: 3.0 }));
/// ```
pub trait AxisAlignedExtent {
    fn top_left(&self) -> Vec2;
    fn extent(&self) -> Vec2;

    fn half_widths(&self) -> Vec2 {
        self.extent() / 2.0
    }
    fn centre(&self) -> Vec2 {
        self.top_left() + self.half_widths()
    }
    fn top_right(&self) -> Vec2 {
        self.top_left() + self.extent().project_x()
    }
    fn bottom_left(&self) -> Vec2 {
        self.top_left() + self.extent().project_y()
    }
    fn bottom_right(&self) -> Vec2 {
        self.top_left() + self.extent()
    }

    fn left(&self) -> f32 {
        self.top_left().x
    }
    fn right(&self) -> f32 {
        self.top_left().x + self.extent().x
    }
    fn top(&self) -> f32 {
        self.top_left().y
    }
    fn bottom(&self) -> f32 {
        self.top_left().y + self.extent().y
    }

    fn as_rect(&self) -> Rect {
        Rect::new(self.top_left(), self.extent())
    }
    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    fn contains_point(&self, pos: Vec2) -> bool {
        (self.left()..self.right()).contains(&pos.x) && (self.top()..self.bottom()).contains(&pos.y)
    }

    /// Exclusive overlap test: rectangles that merely touch along an edge do
    /// NOT intersect. The swept collision broad phase relies on this.
    fn intersects(&self, rhs: &impl AxisAlignedExtent) -> bool {
        bounds::intersect_exclusive(self.left(), self.right(), rhs.left(), rhs.right())
            && bounds::intersect_exclusive(self.top(), self.bottom(), rhs.top(), rhs.bottom())
    }
}

/// An axis-aligned rectangle stored as a top-left position and a non-negative
/// extent (width, height). Behaviour with negative extents is unspecified.
///
/// # Examples
///
/// ```
/// use glide2d::core::prelude::*;
///
/// let rect = Rect::from_coords(Vec2 { x: -1.0, y: -2.0 }, Vec2 { x: 3.0, y: 4.0 });
/// assert_eq!(rect.extent(), Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(rect.centre(), Vec2 { x: 1.0, y: 1.0 });
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Rect {
    pos: Vec2,
    extent: Vec2,
}

impl Rect {
    /// Creates a new rectangle with the given top-left position and extent.
    pub fn new(pos: Vec2, extent: Vec2) -> Self {
        Self { pos, extent }
    }
    /// Creates a new rectangle from two diagonal corner points.
    pub fn from_coords(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            pos: top_left,
            extent: bottom_right - top_left,
        }
    }
    /// This rectangle translated by the given vector.
    #[must_use]
    pub fn translated(&self, by: Vec2) -> Rect {
        Self {
            pos: self.pos + by,
            extent: self.extent,
        }
    }

    /// The smallest rectangle containing both `self` and `rhs`.
    #[must_use]
    pub fn union(&self, rhs: &Rect) -> Rect {
        let top_left = self.top_left().min(rhs.top_left());
        let bottom_right = self.bottom_right().max(rhs.bottom_right());
        Self::from_coords(top_left, bottom_right)
    }
}

impl AxisAlignedExtent for Rect {
    fn top_left(&self) -> Vec2 {
        self.pos
    }
    fn extent(&self) -> Vec2 {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    // ==================== Vec2 Basic Operations ====================

    #[test]
    fn vec2_scalar_multiplication() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        check_eq!(a * 2.0, Vec2 { x: 2.0, y: 2.0 });
        check_eq!(2.0 * a, Vec2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn vec2_addition_and_subtraction() {
        let a = Vec2 { x: 5.0, y: 6.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        check_eq!(a + b, Vec2 { x: 8.0, y: 10.0 });
        check_eq!(a - b, Vec2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn vec2_assign_ops() {
        let mut a = Vec2 { x: 1.0, y: 2.0 };
        a += Vec2 { x: 3.0, y: 4.0 };
        check_eq!(a, Vec2 { x: 4.0, y: 6.0 });
        a -= Vec2 { x: 1.0, y: 2.0 };
        check_eq!(a, Vec2 { x: 3.0, y: 4.0 });
        a *= 2.0;
        check_eq!(a, Vec2 { x: 6.0, y: 8.0 });
        a /= 4.0;
        check_eq!(a, Vec2 { x: 1.5, y: 2.0 });
    }

    #[test]
    fn vec2_negation_and_division() {
        let a = Vec2 { x: 4.0, y: -6.0 };
        check_eq!(-a, Vec2 { x: -4.0, y: 6.0 });
        check_eq!(a / 2.0, Vec2 { x: 2.0, y: -3.0 });
    }

    #[test]
    fn vec2_cardinal_directions() {
        check_eq!(Vec2::right(), Vec2 { x: 1.0, y: 0.0 });
        check_eq!(Vec2::left(), Vec2 { x: -1.0, y: 0.0 });
        check_eq!(Vec2::up(), Vec2 { x: 0.0, y: -1.0 });
        check_eq!(Vec2::down(), Vec2 { x: 0.0, y: 1.0 });
        check_ne!(Vec2::up(), Vec2::down());
        check_eq!(Vec2::one(), Vec2 { x: 1.0, y: 1.0 });
        check_eq!(Vec2::zero(), Vec2 { x: 0.0, y: 0.0 });
        check_eq!(Vec2::splat(3.0), Vec2 { x: 3.0, y: 3.0 });
    }

    #[test]
    fn vec2_display() {
        let v = Vec2 { x: 1.5, y: 2.5 };
        check_eq!(format!("{}", v), "vec(1.5, 2.5)");
        let v2 = Vec2 {
            x: 1.23456,
            y: 7.89012,
        };
        check_eq!(format!("{:.2}", v2), "vec(1.23, 7.89)");
    }

    // ==================== Vec2 Geometric Operations ====================

    #[test]
    fn vec2_len_and_len_squared() {
        let v = Vec2 { x: 3.0, y: -4.0 };
        check_eq!(v.len_squared(), 25.0);
        check_eq!(v.len(), 5.0);
    }

    #[test]
    fn vec2_normed() {
        let v = Vec2 { x: 3.0, y: 4.0 };
        check_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
        check_eq!(Vec2::zero().normed(), Vec2::zero());
    }

    #[test]
    fn vec2_dot_and_cross() {
        let v1 = Vec2 { x: 2.0, y: 3.0 };
        let v2 = Vec2 { x: 4.0, y: 5.0 };
        check_eq!(v1.dot(v2), 23.0);
        check_eq!(v1.cross(v2), -2.0);
        check_eq!(v1.dot(v1.orthog()), 0.0);
    }

    #[test]
    fn vec2_dist_consistent_with_dist_squared() {
        let p1 = Vec2 { x: 1.0, y: 2.0 };
        let p2 = Vec2 { x: -3.0, y: 5.0 };
        check_eq!(p1.dist(p2), 5.0);
        check_lt!((p1.dist(p2).powi(2) - p1.dist_squared(p2)).abs(), EPSILON);
    }

    #[test]
    fn vec2_min_max_abs_round() {
        let a = Vec2 { x: 1.0, y: 5.0 };
        let b = Vec2 { x: 3.0, y: 2.0 };
        check_eq!(a.min(b), Vec2 { x: 1.0, y: 2.0 });
        check_eq!(a.max(b), Vec2 { x: 3.0, y: 5.0 });
        check_eq!(Vec2 { x: -1.5, y: 2.5 }.abs(), Vec2 { x: 1.5, y: 2.5 });
        check_eq!(Vec2 { x: 1.4, y: -2.6 }.round(), Vec2 { x: 1.0, y: -3.0 });
    }

    // ==================== Rotation and Heading ====================

    #[test]
    fn rotated_screen_space_clockwise() {
        check_almost_eq!(Vec2::right().rotated(FRAC_PI_2), Vec2::down());
        check_almost_eq!(Vec2::down().rotated(FRAC_PI_2), Vec2::left());
        check_almost_eq!(Vec2::left().rotated(FRAC_PI_2), Vec2::up());
        check_almost_eq!(Vec2::up().rotated(FRAC_PI_2), Vec2::right());
        check_almost_eq!(Vec2::right().rotated(FRAC_PI_4), Vec2::one().normed());
    }

    #[test]
    fn rotated_about_identity() {
        let p = Vec2 { x: 3.0, y: -7.0 };
        let o = Vec2 { x: 1.0, y: 2.0 };
        check_eq!(p.rotated_about(o, 0.0), p);
    }

    #[test]
    fn rotated_about_preserves_distance_from_origin() {
        let p = Vec2 { x: 5.0, y: 1.0 };
        let o = Vec2 { x: -2.0, y: 3.0 };
        for theta in [0.0, 0.3, FRAC_PI_2, PI, 2.5, -1.2, 6.0] {
            let rotated = p.rotated_about(o, theta);
            check_lt!((rotated.dist(o) - p.dist(o)).abs(), 1e-4);
        }
    }

    #[test]
    fn rotated_about_half_turn() {
        let p = Vec2 { x: 2.0, y: 0.0 };
        let o = Vec2 { x: 1.0, y: 0.0 };
        check_almost_eq!(p.rotated_about(o, PI), Vec2::zero());
    }

    #[test]
    fn direction_to_cardinal_headings() {
        let o = Vec2::zero();
        check_lt!((o.direction_to(Vec2 { x: 1.0, y: 0.0 }) - 0.0).abs(), EPSILON);
        check_lt!((o.direction_to(Vec2 { x: 0.0, y: 1.0 }) - FRAC_PI_2).abs(), EPSILON);
        check_lt!((o.direction_to(Vec2 { x: -1.0, y: 0.0 }) - PI).abs(), EPSILON);
        // Heading to straight up is 3π/2, normalized into [0, 2π).
        check_lt!((o.direction_to(Vec2 { x: 0.0, y: -1.0 }) - 3.0 * FRAC_PI_2).abs(), EPSILON);
    }

    #[test]
    fn direction_to_coincident_points_is_zero() {
        let p = Vec2 { x: 4.0, y: 4.0 };
        check_eq!(p.direction_to(p), 0.0);
    }

    #[test]
    fn from_polar_matches_heading() {
        let p = Vec2::from_polar(FRAC_PI_2, 3.0);
        check_almost_eq!(p, Vec2 { x: 0.0, y: 3.0 });
        check_lt!((p.len() - 3.0).abs(), EPSILON);
    }

    // ==================== Rect ====================

    #[test]
    fn rect_accessors() {
        let rect = Rect::new(Vec2 { x: 1.0, y: 2.0 }, Vec2 { x: 4.0, y: 6.0 });
        check_eq!(rect.left(), 1.0);
        check_eq!(rect.right(), 5.0);
        check_eq!(rect.top(), 2.0);
        check_eq!(rect.bottom(), 8.0);
        check_eq!(rect.centre(), Vec2 { x: 3.0, y: 5.0 });
        check_eq!(rect.top_right(), Vec2 { x: 5.0, y: 2.0 });
        check_eq!(rect.bottom_left(), Vec2 { x: 1.0, y: 8.0 });
        check_eq!(rect.bottom_right(), Vec2 { x: 5.0, y: 8.0 });
    }

    #[test]
    fn rect_from_coords_round_trip() {
        let rect = Rect::from_coords(Vec2 { x: -1.0, y: -2.0 }, Vec2 { x: 3.0, y: 4.0 });
        check_eq!(rect.top_left(), Vec2 { x: -1.0, y: -2.0 });
        check_eq!(rect.bottom_right(), Vec2 { x: 3.0, y: 4.0 });
        check_eq!(rect.extent(), Vec2 { x: 4.0, y: 6.0 });
    }

    #[test]
    fn rect_translated() {
        let rect = Rect::new(Vec2::zero(), Vec2 { x: 2.0, y: 2.0 });
        let moved = rect.translated(Vec2 { x: 3.0, y: -1.0 });
        check_eq!(moved.top_left(), Vec2 { x: 3.0, y: -1.0 });
        check_eq!(moved.extent(), rect.extent());
    }

    #[test]
    fn rect_union_is_bounding_box() {
        let a = Rect::new(Vec2::zero(), Vec2 { x: 2.0, y: 2.0 });
        let b = Rect::new(Vec2 { x: 5.0, y: -1.0 }, Vec2 { x: 1.0, y: 1.0 });
        let u = a.union(&b);
        check_eq!(u.top_left(), Vec2 { x: 0.0, y: -1.0 });
        check_eq!(u.bottom_right(), Vec2 { x: 6.0, y: 2.0 });
    }

    #[test]
    fn rect_intersects_is_exclusive() {
        let a = Rect::new(Vec2::zero(), Vec2 { x: 10.0, y: 10.0 });
        let overlapping = Rect::new(Vec2 { x: 5.0, y: 5.0 }, Vec2 { x: 10.0, y: 10.0 });
        let touching = Rect::new(Vec2 { x: 10.0, y: 0.0 }, Vec2 { x: 10.0, y: 10.0 });
        let disjoint = Rect::new(Vec2 { x: 20.0, y: 20.0 }, Vec2 { x: 1.0, y: 1.0 });
        check!(a.intersects(&overlapping));
        check_false!(a.intersects(&touching));
        check_false!(a.intersects(&disjoint));
    }

    #[test]
    fn rect_contains_point_half_open() {
        let rect = Rect::new(Vec2::zero(), Vec2 { x: 4.0, y: 4.0 });
        check!(rect.contains_point(Vec2::zero()));
        check!(rect.contains_point(Vec2 { x: 3.9, y: 3.9 }));
        check_false!(rect.contains_point(Vec2 { x: 4.0, y: 4.0 }));
        check_false!(rect.contains_point(Vec2 { x: -0.1, y: 2.0 }));
    }

    #[test]
    fn rect_zero_size_on_boundary_intersects_nothing() {
        // A degenerate rect strictly inside still overlaps, but on the
        // boundary it only touches, which the exclusive test rejects.
        let inside = Rect::new(Vec2 { x: 5.0, y: 5.0 }, Vec2::zero());
        let on_edge = Rect::new(Vec2 { x: 10.0, y: 5.0 }, Vec2::zero());
        let big = Rect::new(Vec2::zero(), Vec2 { x: 10.0, y: 10.0 });
        check!(big.intersects(&inside));
        check_false!(big.intersects(&on_edge));
        check_false!(inside.intersects(&inside));
    }
}
