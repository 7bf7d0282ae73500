//! Entity handles, component masks, and component data types
//!
//! Components are plain data stored in parallel arrays inside the `World`,
//! one slot per entity index. The `ComponentMask` bits in `EntityInfo` are
//! the authoritative record of which slots hold live data.

use bitflags::bitflags;
use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An opaque handle into every component array.
///
/// Index 0 is reserved as the "no entity" sentinel and is always allocated
/// first. Entities live for the lifetime of the world; indices are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity(pub(crate) u32);

impl Entity {
    /// The reserved "no entity" sentinel
    pub const NONE: Entity = Entity(0);

    /// Raw id of this entity
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }

    /// Slot index into the component arrays
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NONE
    }
}

bitflags! {
    /// Which components an entity currently owns.
    ///
    /// Updated together with the component data on every attach; systems
    /// must test membership here before reading a component slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ComponentMask: u32 {
        const NAME     = 1 << 0;
        const POSITION = 1 << 1;
        const MOVEMENT = 1 << 2;
        const COLLIDER = 1 << 3;
    }
}

bitflags! {
    /// Collision category bits, used to filter which pairs of colliders are
    /// tested against each other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollisionMask: u32 {
        const BALL   = 1 << 0;
        const PADDLE = 1 << 1;
        const BOUNDS = 1 << 2;
    }
}

impl Default for ComponentMask {
    fn default() -> Self {
        ComponentMask::empty()
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        CollisionMask::empty()
    }
}

/// Liveness bookkeeping for one entity slot
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityInfo {
    /// Slot holds a created entity. When false, no component access for this
    /// index is valid.
    pub in_use: bool,
    /// Entity participates in the update loop and collision scans
    pub active: bool,
    pub components: ComponentMask,
}

/// Integer pixel position, with the value from the start of the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub pos: IVec2,
    /// Snapshot of `pos` captured before integration each frame. For
    /// interpolation and debugging only, never for physics math.
    pub prev: IVec2,
}

/// Velocity integration state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub vel: Vec2,
    /// Fractional pixel carried to the next frame so sub-pixel velocities
    /// still accumulate into whole-pixel moves. Each component stays in
    /// (-1, 1) after integration.
    pub remainder: Vec2,
    /// Exponential approach rate toward zero velocity, per axis. Zero
    /// disables friction.
    pub friction: f32,
    /// Applied to the y axis only
    pub gravity: f32,
}

/// Collider geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    None,
    Circle,
    Rect,
}

/// Which axis a sweep contact happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Reaction applied when the collision sweep is blocked on an axis.
///
/// Replaces per-entity hit callbacks with plain data so the world stays
/// copyable and deterministic; gameplay code that needs richer behavior
/// reads the frame's `HitEvent`s instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitReaction {
    /// Halt on the blocked axis: velocity and remainder are zeroed
    #[default]
    Stop,
    /// Reflect: velocity flips sign on the blocked axis, remainder is zeroed
    Bounce,
}

/// Collision shape attached to an entity.
///
/// The shape is anchored at `position + offset`: circle centers sit there,
/// rect AABBs use it as their top-left corner. For circles `radius` is
/// authoritative and `width == height == 2 * radius`; for rects
/// `width`/`height` are authoritative and `radius` is only a conservative
/// bounding value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collider {
    pub offset: IVec2,
    pub width: i32,
    pub height: i32,
    pub radius: i32,
    pub shape: Shape,
    /// What this collider *is*, for other entities' sweep queries
    pub mask: CollisionMask,
    pub on_hit_x: HitReaction,
    pub on_hit_y: HitReaction,
}

/// One blocked sweep contact, recorded during `World::update` and drained by
/// the shell between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEvent {
    /// The entity that was moving
    pub entity: Entity,
    /// The entity it would have overlapped
    pub other: Entity,
    pub axis: Axis,
}
