//! Headless demo shell
//!
//! Stands in for the excluded game shell: builds the canonical scene (ball,
//! paddle, four bounds walls), feeds scripted movement intents and elapsed
//! time into the core each frame, and logs what happens.
//!
//! Usage: `bounce [config.json] [seed]`, with `RUST_LOG=info` for bounce
//! reports or `RUST_LOG=debug` for per-frame world dumps.

use std::path::Path;

use glam::{IVec2, Vec2};
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use bounce::consts::SIM_DT;
use bounce::{Axis, CollisionMask, Entity, HitReaction, SimConfig, World};

/// How long the scripted session runs
const DEMO_SECONDS: f32 = 10.0;

/// Movement intents for one frame, as the input layer would report them
#[derive(Debug, Clone, Copy, Default)]
struct Controls {
    left: bool,
    right: bool,
}

impl Controls {
    /// Scripted stand-in for keyboard polling: push right for the first
    /// three seconds, left for the next three, then release
    fn scripted(time: f32) -> Self {
        Self {
            left: (3.0..6.0).contains(&time),
            right: time < 3.0,
        }
    }

    fn sign(self) -> i32 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

struct Scene {
    ball: Entity,
    paddle: Entity,
}

/// Populate the world with the canonical arena: a served ball, the player
/// paddle, and four bounds walls enclosing the playfield interior
fn build_scene(world: &mut World, config: &SimConfig, rng: &mut Pcg32) -> Scene {
    let hw = config.interior_half_width();
    let hh = config.interior_half_height();
    let thickness = config.arena.wall_thickness;

    // serve somewhere in the downward arc
    use std::f32::consts::FRAC_PI_4;
    let angle = rng.random_range(-3.0 * FRAC_PI_4..-FRAC_PI_4);
    let serve = Vec2::new(angle.cos(), angle.sin()) * config.ball.serve_speed;

    let ball = world.spawn();
    world.add_name(ball, "ball");
    world.add_position(ball, config.ball.start_x, config.ball.start_y);
    world.add_movement(ball, serve, 0.0, config.ball.gravity);
    world.add_collider_circle(ball, CollisionMask::BALL, IVec2::ZERO, config.ball.radius);
    world.set_hit_reaction(ball, Axis::X, HitReaction::Bounce);
    world.set_hit_reaction(ball, Axis::Y, HitReaction::Bounce);

    let paddle = world.spawn();
    world.add_name(paddle, "paddle");
    world.add_position(paddle, 0, -hh + config.paddle.height / 2 + 15);
    world.add_movement(paddle, Vec2::ZERO, 0.0, 0.0);
    world.add_collider_rect(
        paddle,
        CollisionMask::PADDLE,
        IVec2::new(-config.paddle.width / 2, -config.paddle.height / 2),
        config.paddle.width,
        config.paddle.height,
    );

    let walls = [
        ("wall-floor", IVec2::new(-hw - thickness, -hh - thickness), 2 * (hw + thickness), thickness),
        ("wall-ceiling", IVec2::new(-hw - thickness, hh), 2 * (hw + thickness), thickness),
        ("wall-left", IVec2::new(-hw - thickness, -hh), thickness, 2 * hh),
        ("wall-right", IVec2::new(hw, -hh), thickness, 2 * hh),
    ];
    for (name, top_left, width, height) in walls {
        let wall = world.spawn();
        world.add_name(wall, name);
        world.add_position(wall, top_left.x, top_left.y);
        world.add_collider_rect(wall, CollisionMask::BOUNDS, IVec2::ZERO, width, height);
    }

    Scene { ball, paddle }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load_or_default(Path::new(&path)),
        None => SimConfig::default(),
    };
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xB0CCE);
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut world = World::new();
    let scene = build_scene(&mut world, &config, &mut rng);
    info!(
        "scene ready: {} entities, seed {seed}, interior {}x{}",
        world.num_entities(),
        2 * config.interior_half_width(),
        2 * config.interior_half_height(),
    );

    let frames = (DEMO_SECONDS / SIM_DT) as u32;
    let mut contacts = 0u32;
    for frame in 0..frames {
        let time = frame as f32 * SIM_DT;

        // input layer: movement intents drive the paddle's velocity
        let controls = Controls::scripted(time);
        if let Some(movement) = world.movement_mut(scene.paddle) {
            movement.vel.x = controls.sign() as f32 * config.paddle.speed;
        }

        world.update(SIM_DT);

        for event in world.drain_events() {
            contacts += 1;
            info!(
                "t={time:.2}s: {} blocked on {:?} by {}",
                world.name(event.entity).unwrap_or("?"),
                event.axis,
                world.name(event.other).unwrap_or("?"),
            );
        }

        if frame % 120 == 0 {
            let ball = world.position(scene.ball).map(|p| p.pos).unwrap_or_default();
            let paddle = world.position(scene.paddle).map(|p| p.pos).unwrap_or_default();
            info!("t={time:.2}s: ball at {ball}, paddle at {paddle}");
        }
    }

    let ball = world.position(scene.ball).map(|p| p.pos).unwrap_or_default();
    info!("done: {frames} frames, {contacts} wall contacts, ball resting at {ball}");
}
