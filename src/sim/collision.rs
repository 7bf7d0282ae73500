//! Collision queries, the unit-step movement sweep, and penetration
//! resolution
//!
//! Movement is axis-separated: the sweep advances an entity one pixel at a
//! time and halts the instant the next pixel would overlap a masked
//! obstacle, so no step size can tunnel. Pairs that are already overlapping
//! after movement are pushed apart by the penetration resolvers.

use glam::{IVec2, Vec2};

use super::components::{Axis, CollisionMask, ComponentMask, Entity, HitEvent, HitReaction, Shape};
use super::shapes;
use super::world::World;

impl World {
    /// Would `a`, displaced by `offset`, overlap `b`? Dispatches on the
    /// shape pair; `Shape::None` never overlaps anything.
    pub fn entities_overlap(&self, a: Entity, b: Entity, offset: IVec2) -> bool {
        if !self.has(a, ComponentMask::COLLIDER) || !self.has(b, ComponentMask::COLLIDER) {
            return false;
        }

        let ca = &self.colliders[a.index()];
        let cb = &self.colliders[b.index()];
        let a_at = self.positions[a.index()].pos + ca.offset + offset;
        let b_at = self.positions[b.index()].pos + cb.offset;

        match (ca.shape, cb.shape) {
            (Shape::Circle, Shape::Circle) => {
                shapes::circles_overlap(a_at.x, a_at.y, ca.radius, b_at.x, b_at.y, cb.radius)
            }
            (Shape::Circle, Shape::Rect) => {
                shapes::circle_rect_overlap(a_at.x, a_at.y, ca.radius, b_at.x, b_at.y, cb.width, cb.height)
            }
            (Shape::Rect, Shape::Circle) => {
                shapes::circle_rect_overlap(b_at.x, b_at.y, cb.radius, a_at.x, a_at.y, ca.width, ca.height)
            }
            (Shape::Rect, Shape::Rect) => shapes::rects_overlap(
                a_at.x, a_at.y, ca.width, ca.height, b_at.x, b_at.y, cb.width, cb.height,
            ),
            _ => false,
        }
    }

    /// Scan every other active collider-bearing entity, in entity-index
    /// order, for one whose category matches `mask` and whose shape would
    /// overlap `entity` displaced by `offset`.
    ///
    /// Returns the first match; ties are broken by index, not distance,
    /// which keeps the sweep deterministic.
    pub fn check_collisions(
        &self,
        entity: Entity,
        mask: CollisionMask,
        offset: IVec2,
    ) -> Option<Entity> {
        if !self.has(entity, ComponentMask::COLLIDER) {
            return None;
        }

        for idx in 0..self.infos.len() {
            let other = Entity(idx as u32);
            if other == entity || !self.is_active(other) {
                continue;
            }
            if !self.has(other, ComponentMask::COLLIDER) {
                continue;
            }
            if !self.colliders[idx].mask.contains(mask) {
                continue;
            }
            if self.entities_overlap(entity, other, offset) {
                return Some(other);
            }
        }
        None
    }

    /// Move `entity` along one axis, one pixel at a time, halting at the
    /// first pixel that would overlap a solid obstacle. Returns true when
    /// the move was blocked.
    ///
    /// Entities without a collider move the full amount unchecked.
    pub(crate) fn move_axis(&mut self, entity: Entity, axis: Axis, amount: i32) -> bool {
        if !self.has(entity, ComponentMask::COLLIDER) {
            let pos = &mut self.positions[entity.index()].pos;
            match axis {
                Axis::X => pos.x += amount,
                Axis::Y => pos.y += amount,
            }
            return false;
        }

        let sign = amount.signum();
        let step = match axis {
            Axis::X => IVec2::new(sign, 0),
            Axis::Y => IVec2::new(0, sign),
        };

        let mut remaining = amount;
        while remaining != 0 {
            if let Some(other) = self.check_collisions(entity, CollisionMask::BOUNDS, step) {
                let reaction = match axis {
                    Axis::X => self.colliders[entity.index()].on_hit_x,
                    Axis::Y => self.colliders[entity.index()].on_hit_y,
                };
                self.apply_hit_reaction(entity, axis, reaction);
                self.events.push(HitEvent {
                    entity,
                    other,
                    axis,
                });
                // moving any further would cause an overlap of colliders
                return true;
            }

            // won't collide, move one unit
            remaining -= sign;
            let pos = &mut self.positions[entity.index()].pos;
            match axis {
                Axis::X => pos.x += sign,
                Axis::Y => pos.y += sign,
            }
        }

        false
    }

    fn apply_hit_reaction(&mut self, entity: Entity, axis: Axis, reaction: HitReaction) {
        // Unset movement slots hold zeros, so writing them is harmless.
        let m = &mut self.movements[entity.index()];
        match axis {
            Axis::X => {
                if reaction == HitReaction::Bounce {
                    m.vel.x = -m.vel.x;
                } else {
                    m.vel.x = 0.0;
                }
                m.remainder.x = 0.0;
            }
            Axis::Y => {
                if reaction == HitReaction::Bounce {
                    m.vel.y = -m.vel.y;
                } else {
                    m.vel.y = 0.0;
                }
                m.remainder.y = 0.0;
            }
        }
    }

    /// Separate an already-overlapping pair and react their velocities,
    /// dispatched by shape pair. Mixed pairs are canonicalized so the
    /// circle-rect resolver only sees the circle first. Rect-rect pairs are
    /// left unresolved; paddle/bounds contacts are fully handled by the
    /// sweep.
    pub(crate) fn resolve_collision(&mut self, a: Entity, b: Entity) {
        match (self.colliders[a.index()].shape, self.colliders[b.index()].shape) {
            (Shape::Circle, Shape::Circle) => self.resolve_circle_circle(a, b),
            (Shape::Circle, Shape::Rect) => self.resolve_circle_rect(a, b),
            (Shape::Rect, Shape::Circle) => self.resolve_circle_rect(b, a),
            _ => {}
        }
    }

    /// Push both circles apart by half the penetration depth along the
    /// center-to-center normal and invert both velocity vectors.
    fn resolve_circle_circle(&mut self, entity: Entity, other: Entity) {
        let ca = self.colliders[entity.index()];
        let cb = self.colliders[other.index()];
        let a_center = (self.positions[entity.index()].pos + ca.offset).as_vec2();
        let b_center = (self.positions[other.index()].pos + cb.offset).as_vec2();

        let delta = a_center - b_center;
        let distance = delta.length();
        // coincident centers have no usable normal; separate along +x
        let normal = if distance > 0.0 { delta / distance } else { Vec2::X };

        let overlap = (ca.radius + cb.radius) as f32 - distance;
        let half = normal * (overlap * 0.5);

        let a_pos = &mut self.positions[entity.index()].pos;
        a_pos.x = (a_pos.x as f32 + half.x) as i32;
        a_pos.y = (a_pos.y as f32 + half.y) as i32;
        let b_pos = &mut self.positions[other.index()].pos;
        b_pos.x = (b_pos.x as f32 - half.x) as i32;
        b_pos.y = (b_pos.y as f32 - half.y) as i32;

        let m = &mut self.movements[entity.index()];
        m.vel = -m.vel;
        let m = &mut self.movements[other.index()];
        m.vel = -m.vel;
    }

    /// Push the circle out of the rect along the vector to the nearest
    /// point on the rect's AABB and invert the circle's velocity; the rect
    /// is treated as immovable.
    fn resolve_circle_rect(&mut self, circle: Entity, rect: Entity) {
        let cc = self.colliders[circle.index()];
        let rc = self.colliders[rect.index()];
        let center = (self.positions[circle.index()].pos + cc.offset).as_vec2();
        let rect_min = (self.positions[rect.index()].pos + rc.offset).as_vec2();
        let rect_max = rect_min + Vec2::new(rc.width as f32, rc.height as f32);

        let nearest = center.clamp(rect_min, rect_max);
        let delta = nearest - center;
        let distance = delta.length();
        // center exactly on the surface (or inside): no usable normal,
        // push out along +x
        let normal = if distance > 0.0 { delta / distance } else { Vec2::X };

        let overlap = cc.radius as f32 - distance;
        let pos = &mut self.positions[circle.index()].pos;
        pos.x = (pos.x as f32 - normal.x * overlap) as i32;
        pos.y = (pos.y as f32 - normal.y * overlap) as i32;

        let m = &mut self.movements[circle.index()];
        m.vel = -m.vel;
    }
}
