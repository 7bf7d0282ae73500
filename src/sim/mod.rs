//! Deterministic simulation module
//!
//! A data-oriented entity/component world for arcade physics. This module
//! must be pure and deterministic:
//! - Integer positions, sub-pixel remainders carried across frames
//! - Stable iteration order (by entity index)
//! - No rendering or platform dependencies
//!
//! Entities are opaque indices; components live in parallel arrays keyed by
//! that index. Each `World::update(dt)` integrates movement, sweeps it
//! through the collision mask one pixel at a time, and separates any pairs
//! left overlapping.

pub mod collision;
pub mod components;
pub mod shapes;
pub mod tick;
pub mod world;

pub use components::{
    Axis, Collider, CollisionMask, ComponentMask, Entity, EntityInfo, HitEvent, HitReaction,
    Movement, Position, Shape,
};
pub use shapes::{circle_rect_overlap, circles_overlap, rects_overlap};
pub use world::World;
