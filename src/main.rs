//! Headless platformer demo: a player rectangle falls, runs, bounces off
//! walls and lands on a one-way platform, all via swept collision tests,
//! while a lagged viewport follows it around the level. Progress goes to
//! run.log.

use glide2d::{core::prelude::*, util};

const SCREEN: Vec2 = Vec2 { x: 640.0, y: 480.0 };
const STEP_SECS: f32 = 1.0 / 60.0;
const STEPS: u32 = 600;
const GRAVITY: f32 = 600.0;
const RUN_SPEED: f32 = 120.0;
const JUMP_SPEED: f32 = 350.0;

struct Block {
    name: &'static str,
    rect: Rect,
    mode: SweepMode,
}

fn build_level() -> Vec<Block> {
    let block = |name, x, y, w, h, mode| Block {
        name,
        rect: Rect::new(Vec2 { x, y }, Vec2 { x: w, y: h }),
        mode,
    };
    vec![
        block("floor", 0.0, 440.0, 640.0, 40.0, SweepMode::Solid),
        block("left wall", 0.0, 0.0, 20.0, 440.0, SweepMode::Solid),
        block("right wall", 620.0, 0.0, 20.0, 440.0, SweepMode::Solid),
        block("platform", 240.0, 320.0, 160.0, 10.0, SweepMode::Platform),
    ]
}

struct Player {
    rect: Rect,
    velocity: Vec2,
    grounded: bool,
}

impl Player {
    fn new() -> Self {
        Self {
            rect: Rect::new(Vec2 { x: 60.0, y: 200.0 }, Vec2 { x: 20.0, y: 20.0 }),
            velocity: Vec2 { x: RUN_SPEED, y: 0.0 },
            grounded: false,
        }
    }

    fn step(&mut self, blocks: &[Block]) {
        self.velocity.y += GRAVITY * STEP_SECS;
        self.grounded = false;

        // A hit snaps only the deciding axis, so after responding there may
        // be movement left to spend on the other axis (sliding along the
        // floor, or continuing after a wall bounce). A few passes suffice.
        let mut delta = self.velocity * STEP_SECS;
        for _ in 0..3 {
            if delta == Vec2::zero() {
                break;
            }
            let Some((block, result)) = earliest_hit(blocks, &self.rect, delta) else {
                self.rect = self.rect.translated(delta);
                break;
            };
            delta -= result.rect.top_left() - self.rect.top_left();
            self.rect = result.rect;
            self.respond(block, &mut delta);
        }
    }

    // Snapped edges compare bitwise-equal to the block's, which tells us
    // which face we ended up flush against.
    #[allow(clippy::float_cmp)]
    fn respond(&mut self, block: &Block, delta: &mut Vec2) {
        if (self.velocity.x > 0.0 && self.rect.right() == block.rect.left())
            || (self.velocity.x < 0.0 && self.rect.left() == block.rect.right())
        {
            self.velocity.x = -self.velocity.x;
            delta.x = -delta.x;
            info!("bounced off the {}", block.name);
        }
        if self.velocity.y > 0.0 && self.rect.bottom() == block.rect.top() {
            self.velocity.y = 0.0;
            delta.y = 0.0;
            self.grounded = true;
        } else if self.velocity.y < 0.0 && self.rect.top() == block.rect.bottom() {
            self.velocity.y = 0.0;
            delta.y = 0.0;
            info!("bumped head on the {}", block.name);
        }
    }
}

fn earliest_hit<'a>(
    blocks: &'a [Block],
    rect: &Rect,
    delta: Vec2,
) -> Option<(&'a Block, SweepResult)> {
    let start = rect.top_left();
    blocks
        .iter()
        .map(|block| (block, sweep_test(&block.rect, rect, delta, block.mode)))
        .filter(|(_, result)| result.collided)
        .min_by(|(_, a), (_, b)| {
            start
                .dist_squared(a.rect.top_left())
                .total_cmp(&start.dist_squared(b.rect.top_left()))
        })
}

fn sight_line_clear(blocks: &[Block], from: Vec2, to: Vec2) -> bool {
    let ray = Segment::new(from, to);
    blocks
        .iter()
        .all(|block| ray.intersect_rect(&block.rect).0.is_none())
}

fn main() -> Result<()> {
    util::setup_log()?;

    let blocks = build_level();
    let beacon = Vec2 { x: 560.0, y: 60.0 };
    let mut player = Player::new();
    let mut view = Viewport::new(SCREEN, player.rect.centre())?
        .with_zoom(2.0)
        .with_lag(10.0)
        .with_rounding(true)
        .with_limits(Vec2::zero(), SCREEN)?;

    info!(
        "level with {} blocks, beacon at {beacon}, {STEPS} steps of {STEP_SECS:.4}s",
        blocks.len()
    );

    for step in 0..STEPS {
        if player.grounded && step % 90 == 0 {
            player.velocity.y = -JUMP_SPEED;
            info!("jumping from {}", player.rect.centre());
        }
        player.step(&blocks);

        view.target = player.rect.centre();
        view.update();

        if step % 60 == 0 {
            let centre = player.rect.centre();
            let sight = if sight_line_clear(&blocks, centre, beacon) {
                "clear"
            } else {
                "blocked"
            };
            info!(
                "step {step}: player at {centre} (screen {:.1}), velocity {}, \
                 grounded={}, beacon {sight}",
                view.to_screen(centre),
                player.velocity,
                player.grounded,
            );
        }
    }

    let centre = player.rect.centre();
    info!("finished at {centre}, view centred on {}", view.centre);
    Ok(())
}
