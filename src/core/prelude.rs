#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        assert::*,
        collision::{sweep_test, SweepMode, SweepResult},
        intersect::Segment,
        linalg,
        linalg::{AxisAlignedExtent, Rect, Vec2},
        viewport::{ViewLimits, Viewport},
    },
};
