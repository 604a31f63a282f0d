use crate::core::prelude::*;

/// World-space bounds the view may not leave. A side set to ±infinity is
/// disabled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewLimits {
    pub min: Vec2,
    pub max: Vec2,
}

/// Camera math for a scrollable, zoomable, rotatable 2D view.
///
/// Pure state plus transforms: no window handle, no input polling, no draw
/// calls. The screen size is fixed at construction; `centre` is the world
/// position shown at the centre of the screen. Rotation is in radians,
/// clockwise on screen, like everything else in this crate.
///
/// # Examples
///
/// ```
/// use glide2d::core::prelude::*;
///
/// let mut view = Viewport::new(Vec2 { x: 640.0, y: 480.0 }, Vec2::zero())
///     .unwrap()
///     .with_zoom(2.0);
/// assert_eq!(view.size_world(), Vec2 { x: 320.0, y: 240.0 });
/// view.target = Vec2 { x: 100.0, y: 0.0 };
/// view.update();
/// assert_eq!(view.centre, Vec2 { x: 100.0, y: 0.0 });
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// World position at the centre of the screen.
    pub centre: Vec2,
    /// Position the view interpolates towards on [`update`](Viewport::update).
    pub target: Vec2,
    /// Follow lag: values of at most 1 snap straight to the target, `n > 1`
    /// closes 1/n of the remaining gap per update.
    pub lag: f32,
    /// Screen pixels per world unit. 2 = zoomed in 2x, 0.5 = zoomed out 2x.
    pub zoom: f32,
    /// Screen rotation in radians, clockwise on screen.
    pub rotation: f32,
    /// Round `centre` to whole units after each update; avoids subpixel
    /// rendering artifacts.
    pub round_position: bool,
    screen_size: Vec2,
    limits: Option<ViewLimits>,
}

impl Viewport {
    pub fn new(screen_size: Vec2, centre: Vec2) -> Result<Self> {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            bail!("viewport screen size must be positive: {screen_size}");
        }
        Ok(Self {
            centre,
            target: centre,
            lag: 1.0,
            zoom: 1.0,
            rotation: 0.0,
            round_position: false,
            screen_size,
            limits: None,
        })
    }

    #[must_use]
    pub fn with_lag(mut self, lag: f32) -> Self {
        self.lag = lag;
        self
    }
    #[must_use]
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        check_gt!(zoom, 0.0);
        self.zoom = zoom;
        self
    }
    #[must_use]
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }
    #[must_use]
    pub fn with_rounding(mut self, round_position: bool) -> Self {
        self.round_position = round_position;
        self
    }
    pub fn with_limits(mut self, min: Vec2, max: Vec2) -> Result<Self> {
        if min.x > max.x || min.y > max.y {
            bail!("viewport limits inverted: min {min}, max {max}");
        }
        self.limits = Some(ViewLimits { min, max });
        Ok(self)
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// The size of the view in world coordinates.
    pub fn size_world(&self) -> Vec2 {
        self.screen_size / self.zoom
    }

    /// Sets `centre` and `target` together, skipping any interpolation.
    pub fn set_position(&mut self, position: Vec2) {
        self.centre = position;
        self.target = position;
    }

    /// World positions of the screen corners, in order top-left, top-right,
    /// bottom-right, bottom-left. Accounts for rotation.
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.size_world() / 2.0;
        if self.rotation == 0.0 {
            [
                self.centre - half,
                self.centre + half.project_x() - half.project_y(),
                self.centre + half,
                self.centre - half.project_x() + half.project_y(),
            ]
        } else {
            [
                (-half).rotated(self.rotation) + self.centre,
                (half.project_x() - half.project_y()).rotated(self.rotation) + self.centre,
                half.rotated(self.rotation) + self.centre,
                (half.project_y() - half.project_x()).rotated(self.rotation) + self.centre,
            ]
        }
    }

    /// Moves `centre` towards `target` by the lag factor, then clamps to the
    /// limits and optionally rounds. Call once per step after adjusting
    /// `target`.
    pub fn update(&mut self) {
        if self.lag <= 1.0 {
            self.centre = self.target;
        } else {
            self.centre += (self.target - self.centre) / self.lag;
        }

        if self.limits.is_some() {
            self.clamp_to_limits();
        }

        if self.round_position {
            self.centre = self.centre.round();
        }
    }

    /// Pushes the view's world bounding box back inside the enabled limit
    /// sides. When a finite min/max pair is narrower than the view on an
    /// axis, the view is centred between them instead.
    pub fn clamp_to_limits(&mut self) {
        let Some(ViewLimits { min, max }) = self.limits else {
            return;
        };
        let bounds = self.as_rect();

        if min.x.is_finite() && bounds.left() < min.x {
            self.centre.x += min.x - bounds.left();
        }
        if min.y.is_finite() && bounds.top() < min.y {
            self.centre.y += min.y - bounds.top();
        }
        if max.x.is_finite() && bounds.right() > max.x {
            self.centre.x -= bounds.right() - max.x;
        }
        if max.y.is_finite() && bounds.bottom() > max.y {
            self.centre.y -= bounds.bottom() - max.y;
        }

        if min.x.is_finite() && max.x.is_finite() && max.x - min.x <= bounds.extent().x {
            self.centre.x = (max.x + min.x) / 2.0;
        }
        if min.y.is_finite() && max.y.is_finite() && max.y - min.y <= bounds.extent().y {
            self.centre.y = (max.y + min.y) / 2.0;
        }
    }

    /// World position to screen position.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        ((world - self.centre) * self.zoom).rotated(self.rotation) + self.screen_size / 2.0
    }

    /// Screen position to world position; exact inverse of
    /// [`to_screen`](Viewport::to_screen).
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.screen_size / 2.0).rotated(-self.rotation) / self.zoom + self.centre
    }
}

/// The world-space bounding box of the (possibly rotated) view.
impl AxisAlignedExtent for Viewport {
    fn top_left(&self) -> Vec2 {
        if self.rotation == 0.0 {
            self.centre - self.size_world() / 2.0
        } else {
            let [a, b, c, d] = self.corners();
            a.min(b).min(c.min(d))
        }
    }
    fn extent(&self) -> Vec2 {
        if self.rotation == 0.0 {
            self.size_world()
        } else {
            let [a, b, c, d] = self.corners();
            a.max(b).max(c.max(d)) - a.min(b).min(c.min(d))
        }
    }
}
