//! Fixed timestep world update
//!
//! Advances every live entity once per frame, in entity-index order:
//! snapshot the previous position, integrate velocity into an integer step
//! plus a sub-pixel remainder, sweep the step through the collision mask,
//! then push apart any pairs that ended up overlapping.

use glam::IVec2;
use log::{Level, log_enabled};

use super::components::{Axis, ComponentMask, Entity, Movement};
use super::world::World;
use crate::approach;

impl World {
    /// Advance the simulation by `dt` seconds (the frame's measured elapsed
    /// time, non-negative).
    ///
    /// Clears the previous frame's hit events; the shell reads or drains
    /// them after this call returns.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();

        if log_enabled!(Level::Debug) {
            self.log_entities();
        }

        // index 0 is the reserved sentinel
        for idx in 1..self.infos.len() {
            let entity = Entity(idx as u32);
            if !self.is_active(entity) {
                continue;
            }

            let has_position = self.has(entity, ComponentMask::POSITION);
            let has_movement = self.has(entity, ComponentMask::MOVEMENT);
            let has_collider = self.has(entity, ComponentMask::COLLIDER);

            if has_position {
                let p = &mut self.positions[idx];
                p.prev = p.pos;
            }

            let mut step = IVec2::ZERO;
            if has_movement {
                step = integrate(&mut self.movements[idx], dt);
            }

            if has_position {
                // x is resolved fully before y, so diagonal motion slides
                // along the free axis when the other is blocked
                self.move_axis(entity, Axis::X, step.x);
                self.move_axis(entity, Axis::Y, step.y);
            }

            if has_collider {
                for other_idx in 0..self.infos.len() {
                    if other_idx == idx {
                        continue;
                    }
                    let other = Entity(other_idx as u32);
                    if !self.is_active(other) || !self.has(other, ComponentMask::COLLIDER) {
                        continue;
                    }
                    if self.entities_overlap(entity, other, IVec2::ZERO) {
                        self.resolve_collision(entity, other);
                    }
                }
            }
        }
    }
}

/// Integrate one entity's velocity over `dt`: friction approach toward zero,
/// unconditional gravity on y, then conversion of the continuous
/// displacement into an integer step with the fractional pixel carried to
/// the next frame.
///
/// The step is truncated toward zero rather than rounded, so a slow drift
/// emits its first pixel only once the accumulated fraction passes 1.
fn integrate(m: &mut Movement, dt: f32) -> IVec2 {
    if m.friction > 0.0 {
        m.vel.x = approach(m.vel.x, 0.0, m.friction * dt);
        m.vel.y = approach(m.vel.y, 0.0, m.friction * dt);
    }

    // gravity stays on even while resting against a surface
    if m.gravity != 0.0 {
        m.vel.y += m.gravity * dt;
    }

    let total = m.remainder + m.vel * dt;
    let step = total.as_ivec2();
    m.remainder = total - step.as_vec2();
    step
}
