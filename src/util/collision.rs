#[allow(unused_imports)]
use crate::core::prelude::*;

/// Collision policy for [`sweep_test`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SweepMode {
    /// All four faces are solid.
    Solid,
    /// One-way platform: only a top-face hit while moving downward counts.
    Platform,
}

/// Result of a swept collision step.
///
/// When `collided` is false, `rect` is the unobstructed end position (start
/// translated by the full velocity); no partial correction is ever applied on
/// a miss. When `collided` is true, `rect` is the position at first contact,
/// with the deciding axis snapped exactly onto the touching edge of the
/// static rectangle.
#[derive(Copy, Clone, Debug, PartialEq, bincode::Encode, bincode::Decode)]
pub struct SweepResult {
    pub collided: bool,
    pub rect: Rect,
}

impl SweepResult {
    fn miss(end_rect: Rect) -> Self {
        Self {
            collided: false,
            rect: end_rect,
        }
    }
}

// The later of two per-axis entry times; an infinite time on one axis is
// irrelevant if the other is finite, and both infinite means the axis
// velocities played no role at all (None).
fn later_time(tx: f32, ty: f32) -> Option<f32> {
    match (tx.is_infinite(), ty.is_infinite()) {
        (true, true) => None,
        (true, false) => Some(ty),
        (false, true) => Some(tx),
        (false, false) => Some(tx.max(ty)),
    }
}

// Symmetric: the earlier of two per-axis exit times.
fn earlier_time(tx: f32, ty: f32) -> Option<f32> {
    match (tx.is_infinite(), ty.is_infinite()) {
        (true, true) => None,
        (true, false) => Some(ty),
        (false, true) => Some(tx),
        (false, false) => Some(tx.min(ty)),
    }
}

/// Continuous ("swept") collision test between a static rectangle and a
/// rectangle moving by `velocity` over one step.
///
/// Rather than testing overlap only at the end position, this computes, per
/// axis, the normalized time within the step (0 = start, 1 = end) at which the
/// moving rectangle's leading edge would reach the static rectangle's facing
/// edge, and symmetrically when the trailing edges would separate again. The
/// rectangles touch iff the two axes' overlap windows coincide somewhere in
/// the step; this prevents fast movers from tunnelling through thin obstacles.
///
/// On a hit, the axis that decided the collision (the later entry time) has
/// its coordinate snapped exactly onto the touching edge, so callers can find
/// what they ended up flush against with exact comparisons. When both entry
/// times are exactly equal (corner-on-corner approach), the axis with the
/// larger velocity magnitude snaps, or both do if the magnitudes are equal
/// too.
///
/// # Examples
///
/// ```
/// use glide2d::core::prelude::*;
///
/// let wall = Rect::new(Vec2 { x: 20.0, y: 0.0 }, Vec2 { x: 10.0, y: 10.0 });
/// let mover = Rect::new(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 10.0, y: 10.0 });
/// let result = sweep_test(&wall, &mover, Vec2 { x: 30.0, y: 0.0 }, SweepMode::Solid);
/// assert!(result.collided);
/// assert_eq!(result.rect.right(), wall.left());
/// ```
#[allow(clippy::float_cmp)]
#[must_use]
pub fn sweep_test(
    static_rect: &Rect,
    move_rect: &Rect,
    velocity: Vec2,
    mode: SweepMode,
) -> SweepResult {
    let end_rect = move_rect.translated(velocity);
    let union_rect = move_rect.union(&end_rect);
    if !static_rect.intersects(&union_rect) {
        // The static rectangle is nowhere inside the area swept this step.
        return SweepResult::miss(end_rect);
    }

    // Displacement on each axis for the leading edge of the mover to reach
    // the facing edge of the static rect; the velocity sign picks the edge
    // pair. Dividing by the axis velocity gives the normalized entry time,
    // with zero velocity yielding an infinity. The 0/0 NaN case cannot occur:
    // a zero-velocity axis with a zero joint displacement means the rects
    // only touch, and the exclusive broad phase already rejected that.
    let joint_x = if velocity.x > 0.0 {
        static_rect.left() - move_rect.right()
    } else {
        -(move_rect.left() - static_rect.right())
    };
    let joint_y = if velocity.y > 0.0 {
        static_rect.top() - move_rect.bottom()
    } else {
        -(move_rect.top() - static_rect.bottom())
    };
    let joint_time_x = joint_x / velocity.x;
    let joint_time_y = joint_y / velocity.y;

    if (joint_time_x < 0.0 && joint_time_y < 0.0) || (joint_time_x > 1.0 && joint_time_y > 1.0) {
        // Either moving away on both axes, or contact lies beyond this step.
        return SweepResult::miss(end_rect);
    }

    let Some(max_joint_time) = later_time(joint_time_x, joint_time_y) else {
        // Both axes infinite, typically zero velocity.
        return SweepResult::miss(end_rect);
    };

    let disjoint_x = if velocity.x > 0.0 {
        static_rect.right() - move_rect.left()
    } else {
        -(move_rect.right() - static_rect.left())
    };
    let disjoint_y = if velocity.y > 0.0 {
        static_rect.bottom() - move_rect.top()
    } else {
        -(move_rect.bottom() - static_rect.top())
    };

    let Some(min_disjoint_time) = earlier_time(disjoint_x / velocity.x, disjoint_y / velocity.y)
    else {
        return SweepResult::miss(end_rect);
    };

    if min_disjoint_time < max_joint_time {
        // One axis separates before the other joins: the per-axis overlap
        // windows never coincide.
        return SweepResult::miss(end_rect);
    }

    if mode == SweepMode::Platform && !is_top_face_hit(joint_time_x, joint_time_y, velocity) {
        return SweepResult::miss(end_rect);
    }

    let mut position = move_rect.top_left() + velocity * max_joint_time;

    // Snap the deciding axis exactly onto the touching edge. An axis decides
    // if its finite entry time is the strictly later one, or if it is the
    // only finite one.
    let tied = joint_time_x == joint_time_y && joint_time_x.is_finite();
    let snap_x = if tied {
        velocity.x.abs() >= velocity.y.abs()
    } else {
        joint_time_x.is_finite() && (joint_time_y.is_infinite() || joint_time_x > joint_time_y)
    };
    let snap_y = if tied {
        velocity.y.abs() >= velocity.x.abs()
    } else {
        joint_time_y.is_finite() && (joint_time_x.is_infinite() || joint_time_y > joint_time_x)
    };

    if snap_x {
        if velocity.x > 0.0 {
            position.x = static_rect.left() - move_rect.extent().x;
        } else if velocity.x < 0.0 {
            position.x = static_rect.right();
        }
    }
    if snap_y {
        if velocity.y > 0.0 {
            position.y = static_rect.top() - move_rect.extent().y;
        } else if velocity.y < 0.0 {
            position.y = static_rect.bottom();
        }
    }

    SweepResult {
        collided: true,
        rect: Rect::new(position, move_rect.extent()),
    }
}

// Platform-mode filter: accept only collisions driven by the top face while
// moving downward.
#[allow(clippy::float_cmp)]
fn is_top_face_hit(joint_time_x: f32, joint_time_y: f32, velocity: Vec2) -> bool {
    if joint_time_x == joint_time_y && joint_time_x.is_finite() {
        // Corner-on-corner graze: counts as a top hit only while moving down.
        return velocity.y > 0.0;
    }
    if joint_time_x > joint_time_y && joint_time_x.is_finite() {
        // Left or right face drove the collision.
        return false;
    }
    if joint_time_y > joint_time_x && joint_time_y.is_finite() && velocity.y < 0.0 {
        // Bottom face, moving upward.
        return false;
    }
    if joint_time_y.is_infinite() {
        // Vertical motion played no role, so it cannot be a top hit.
        return false;
    }
    if joint_time_x.is_infinite() && velocity.y <= 0.0 {
        return false;
    }
    true
}
