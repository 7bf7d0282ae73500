//! World storage and entity registry
//!
//! The world owns one parallel array per component type, one slot per
//! entity index. Every entity gets a slot in every array at spawn time
//! (sparse-but-preallocated); the `ComponentMask` in `EntityInfo` records
//! which slots actually hold data. Unset slots hold zeroed defaults, so the
//! `has` gate is the only form of type checking across the entity set.

use glam::{IVec2, Vec2};
use log::debug;

use super::components::{
    Axis, Collider, CollisionMask, ComponentMask, Entity, EntityInfo, HitEvent, HitReaction,
    Movement, Position, Shape,
};

/// Name given to the reserved index-0 entity
const SENTINEL_NAME: &str = "ENTITY_NONE";

/// The simulation world, exclusively owned and mutated by the update loop.
///
/// Renderers and game shells read it between `update` calls through the
/// per-entity accessors.
#[derive(Debug, Default)]
pub struct World {
    pub(crate) infos: Vec<EntityInfo>,
    pub(crate) names: Vec<String>,
    pub(crate) positions: Vec<Position>,
    pub(crate) movements: Vec<Movement>,
    pub(crate) colliders: Vec<Collider>,
    pub(crate) events: Vec<HitEvent>,
}

impl World {
    /// Create a world holding only the reserved sentinel entity
    pub fn new() -> Self {
        let mut world = Self::default();
        world.create_sentinel();
        world
    }

    /// Idempotent re-init: afterwards only the sentinel entity exists,
    /// exactly as in a freshly created world
    pub fn reset(&mut self) {
        self.infos.clear();
        self.names.clear();
        self.positions.clear();
        self.movements.clear();
        self.colliders.clear();
        self.events.clear();
        self.create_sentinel();
    }

    fn create_sentinel(&mut self) {
        let entity = self.spawn();
        self.add_name(entity, SENTINEL_NAME);
    }

    /// Number of allocated entity slots, sentinel included
    pub fn num_entities(&self) -> u32 {
        self.infos.len() as u32
    }

    /// Allocate the next entity index, appending one empty slot to every
    /// component array.
    ///
    /// Entities are never destroyed or recycled; they live until the world
    /// is reset or dropped.
    pub fn spawn(&mut self) -> Entity {
        let id = self.infos.len() as u32;
        self.infos.push(EntityInfo {
            in_use: true,
            active: true,
            components: ComponentMask::empty(),
        });
        self.names.push(String::new());
        self.positions.push(Position::default());
        self.movements.push(Movement::default());
        self.colliders.push(Collider::default());
        Entity(id)
    }

    /// The single gate every system passes before touching a component slot:
    /// false when the index is out of range or not in use, otherwise a
    /// subset test against the entity's component mask
    pub fn has(&self, entity: Entity, mask: ComponentMask) -> bool {
        match self.infos.get(entity.index()) {
            Some(info) if info.in_use => info.components.contains(mask),
            _ => false,
        }
    }

    /// In use and participating in updates and collision scans
    pub fn is_active(&self, entity: Entity) -> bool {
        matches!(self.infos.get(entity.index()), Some(info) if info.in_use && info.active)
    }

    /// Activity toggle: inactive entities keep their components but are
    /// skipped by the update loop and by collision scans
    pub fn set_active(&mut self, entity: Entity, active: bool) {
        if let Some(info) = self.infos.get_mut(entity.index()) {
            if info.in_use {
                info.active = active;
            }
        }
    }

    // Attach a component bit, refusing invalid entities. Attaches to an
    // invalid entity are silently ignored, consistent with the rest of the
    // degrade-don't-fail API.
    fn mark(&mut self, entity: Entity, bit: ComponentMask) -> bool {
        match self.infos.get_mut(entity.index()) {
            Some(info) if info.in_use => {
                info.components |= bit;
                true
            }
            _ => false,
        }
    }

    pub fn add_name(&mut self, entity: Entity, name: &str) {
        if self.mark(entity, ComponentMask::NAME) {
            self.names[entity.index()] = name.to_owned();
        }
    }

    pub fn add_position(&mut self, entity: Entity, x: i32, y: i32) {
        if self.mark(entity, ComponentMask::POSITION) {
            let pos = IVec2::new(x, y);
            self.positions[entity.index()] = Position { pos, prev: pos };
        }
    }

    /// Attach velocity integration state. Re-adding overwrites, clearing any
    /// carried remainder.
    pub fn add_movement(&mut self, entity: Entity, vel: Vec2, friction: f32, gravity: f32) {
        if self.mark(entity, ComponentMask::MOVEMENT) {
            self.movements[entity.index()] = Movement {
                vel,
                remainder: Vec2::ZERO,
                friction,
                gravity,
            };
        }
    }

    /// Attach a rect collider anchored top-left at `position + offset`.
    /// `radius` is derived as a conservative bound, never used for exact
    /// rect math.
    pub fn add_collider_rect(
        &mut self,
        entity: Entity,
        mask: CollisionMask,
        offset: IVec2,
        width: i32,
        height: i32,
    ) {
        if self.mark(entity, ComponentMask::COLLIDER) {
            let width = width.max(0);
            let height = height.max(0);
            self.colliders[entity.index()] = Collider {
                offset,
                width,
                height,
                radius: width.max(height) / 2,
                shape: Shape::Rect,
                mask,
                on_hit_x: HitReaction::default(),
                on_hit_y: HitReaction::default(),
            };
        }
    }

    /// Attach a circle collider centered at `position + offset`
    pub fn add_collider_circle(
        &mut self,
        entity: Entity,
        mask: CollisionMask,
        offset: IVec2,
        radius: i32,
    ) {
        if self.mark(entity, ComponentMask::COLLIDER) {
            let radius = radius.max(0);
            self.colliders[entity.index()] = Collider {
                offset,
                width: 2 * radius,
                height: 2 * radius,
                radius,
                shape: Shape::Circle,
                mask,
                on_hit_x: HitReaction::default(),
                on_hit_y: HitReaction::default(),
            };
        }
    }

    /// Set the reaction applied when the sweep blocks this entity on `axis`
    pub fn set_hit_reaction(&mut self, entity: Entity, axis: Axis, reaction: HitReaction) {
        if let Some(collider) = self.collider_mut(entity) {
            match axis {
                Axis::X => collider.on_hit_x = reaction,
                Axis::Y => collider.on_hit_y = reaction,
            }
        }
    }

    pub fn name(&self, entity: Entity) -> Option<&str> {
        if self.has(entity, ComponentMask::NAME) {
            Some(self.names[entity.index()].as_str())
        } else {
            None
        }
    }

    pub fn position(&self, entity: Entity) -> Option<&Position> {
        if self.has(entity, ComponentMask::POSITION) {
            Some(&self.positions[entity.index()])
        } else {
            None
        }
    }

    pub fn position_mut(&mut self, entity: Entity) -> Option<&mut Position> {
        if self.has(entity, ComponentMask::POSITION) {
            Some(&mut self.positions[entity.index()])
        } else {
            None
        }
    }

    pub fn movement(&self, entity: Entity) -> Option<&Movement> {
        if self.has(entity, ComponentMask::MOVEMENT) {
            Some(&self.movements[entity.index()])
        } else {
            None
        }
    }

    pub fn movement_mut(&mut self, entity: Entity) -> Option<&mut Movement> {
        if self.has(entity, ComponentMask::MOVEMENT) {
            Some(&mut self.movements[entity.index()])
        } else {
            None
        }
    }

    pub fn collider(&self, entity: Entity) -> Option<&Collider> {
        if self.has(entity, ComponentMask::COLLIDER) {
            Some(&self.colliders[entity.index()])
        } else {
            None
        }
    }

    pub fn collider_mut(&mut self, entity: Entity) -> Option<&mut Collider> {
        if self.has(entity, ComponentMask::COLLIDER) {
            Some(&mut self.colliders[entity.index()])
        } else {
            None
        }
    }

    /// Blocked sweep contacts recorded by the most recent `update`
    pub fn events(&self) -> &[HitEvent] {
        &self.events
    }

    /// Take this frame's blocked sweep contacts, leaving the buffer empty
    pub fn drain_events(&mut self) -> Vec<HitEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dump every live entity to the log, one line each
    pub fn log_entities(&self) {
        debug!("world: {} entities", self.num_entities());
        for idx in 1..self.infos.len() {
            let entity = Entity(idx as u32);
            let info = &self.infos[idx];
            if !info.in_use {
                continue;
            }
            let p = &self.positions[idx];
            let m = &self.movements[idx];
            let c = &self.colliders[idx];
            debug!(
                "entity {} '{}' (active: {}, components: {:?}): pos: {}, prev: {}, \
                 vel: ({:.2}, {:.2}), remainder: ({:.2}, {:.2}), friction: {:.2}, \
                 gravity: {:.2}, collider: ({:?}, offset: {}, {}x{}, r: {})",
                idx,
                self.names[idx],
                info.active,
                info.components,
                p.pos,
                p.prev,
                m.vel.x,
                m.vel.y,
                m.remainder.x,
                m.remainder.y,
                m.friction,
                m.gravity,
                c.shape,
                c.offset,
                c.width,
                c.height,
                c.radius,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_reserves_sentinel() {
        let world = World::new();
        assert_eq!(world.num_entities(), 1);
        assert_eq!(world.name(Entity::NONE), Some(SENTINEL_NAME));
    }

    #[test]
    fn test_spawn_allocates_parallel_slots() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert_eq!(world.num_entities(), 3);
        assert_eq!(world.infos.len(), world.positions.len());
        assert_eq!(world.infos.len(), world.movements.len());
        assert_eq!(world.infos.len(), world.colliders.len());
        assert_eq!(world.infos.len(), world.names.len());
    }

    #[test]
    fn test_has_gates_unattached_components() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_position(e, 5, 5);
        assert!(world.has(e, ComponentMask::POSITION));
        assert!(!world.has(e, ComponentMask::COLLIDER));
        assert!(!world.has(e, ComponentMask::POSITION | ComponentMask::COLLIDER));
        assert!(world.collider(e).is_none());
    }

    #[test]
    fn test_has_rejects_out_of_range() {
        let world = World::new();
        assert!(!world.has(Entity(999), ComponentMask::POSITION));
        assert!(!world.is_active(Entity(999)));
    }

    #[test]
    fn test_attach_to_invalid_entity_is_ignored() {
        let mut world = World::new();
        world.add_position(Entity(42), 1, 1);
        assert_eq!(world.num_entities(), 1);
        assert!(world.position(Entity(42)).is_none());
    }

    #[test]
    fn test_readd_overwrites_in_place() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_position(e, 1, 2);
        world.add_position(e, 3, 4);
        let p = world.position(e).unwrap();
        assert_eq!(p.pos, IVec2::new(3, 4));
        assert_eq!(p.prev, IVec2::new(3, 4));
        assert_eq!(world.num_entities(), 2);
    }

    #[test]
    fn test_rect_collider_derives_bounding_radius() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_collider_rect(e, CollisionMask::PADDLE, IVec2::ZERO, 200, 50);
        let c = world.collider(e).unwrap();
        assert_eq!(c.shape, Shape::Rect);
        assert_eq!(c.radius, 100);
    }

    #[test]
    fn test_circle_collider_derives_extents() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_collider_circle(e, CollisionMask::BALL, IVec2::ZERO, 25);
        let c = world.collider(e).unwrap();
        assert_eq!(c.shape, Shape::Circle);
        assert_eq!(c.width, 50);
        assert_eq!(c.height, 50);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_position(e, 9, 9);
        world.reset();
        world.reset();
        assert_eq!(world.num_entities(), 1);
        assert_eq!(world.name(Entity::NONE), Some(SENTINEL_NAME));
        assert!(world.position(e).is_none());
    }

    #[test]
    fn test_set_active_keeps_components() {
        let mut world = World::new();
        let e = world.spawn();
        world.add_position(e, 1, 1);
        world.set_active(e, false);
        assert!(!world.is_active(e));
        assert!(world.has(e, ComponentMask::POSITION));
        world.set_active(e, true);
        assert!(world.is_active(e));
    }
}
