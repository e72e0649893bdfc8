//! Velocity integration and collision resolution
//!
//! One particle per call: apply gravity and damping, then resolve the
//! candidate cell against the occupancy map. A heavier particle moving into
//! a lighter one's cell swaps with it (sand sinks through water, oil floats
//! on water); anything else blocks and bleeds velocity.

use glam::Vec2;

use crate::particle::ParticleSlot;
use crate::simulation::Simulation;

/// Base downward acceleration added to every material's own gravity bias
const BASE_GRAVITY: f32 = 0.1;
/// Velocity kept (and reflected) when bouncing off a grid edge
const WALL_RESTITUTION: f32 = 0.8;
/// Velocity kept after a blocked move
const BLOCKED_LOSS: f32 = 0.5;

/// Per-particle movement step
pub struct MotionSystem;

impl MotionSystem {
    pub fn resolve(sim: &mut Simulation, slot: ParticleSlot) {
        let Some(mut particle) = sim.particles[slot.index()] else {
            return;
        };
        let def = sim.materials.get(particle.material_id);

        // Weightless and buoyant materials are exempt from gravity
        if def.weight > 0 {
            particle.vel.y += def.gravity + BASE_GRAVITY;
        }
        particle.vel *= def.loss;

        let (old_x, old_y) = particle.cell();
        let candidate = particle.pos + particle.vel;
        let (new_x, new_y) = (candidate.x as i32, candidate.y as i32);

        if !sim.map.in_bounds(new_x, new_y) {
            // Bounce off the wall: reflect the out-of-range axes, stay put
            if new_x < 0 || new_x >= sim.map.width() {
                particle.vel.x *= -WALL_RESTITUTION;
            }
            if new_y < 0 || new_y >= sim.map.height() {
                particle.vel.y *= -WALL_RESTITUTION;
            }
            sim.particles[slot.index()] = Some(particle);
            return;
        }

        if (new_x, new_y) == (old_x, old_y) {
            // Still inside the same cell: keep accumulating sub-cell drift
            particle.pos = candidate;
            sim.particles[slot.index()] = Some(particle);
            return;
        }

        match sim.map.slot_at(new_x, new_y) {
            None => {
                sim.map.clear_cell(old_x, old_y);
                sim.map.set(new_x, new_y, slot);
                particle.pos = candidate;
            }
            Some(other) => {
                let other_weight = sim.particles[other.index()]
                    .map(|o| sim.materials.get(o.material_id).weight);
                match other_weight {
                    Some(weight) if def.weight > weight => {
                        // Heavier sinks through lighter; the displaced
                        // particle snaps to the vacated cell without
                        // inheriting sub-cell precision
                        sim.map.set(old_x, old_y, other);
                        sim.map.set(new_x, new_y, slot);
                        particle.pos = candidate;
                        if let Some(displaced) = sim.particles[other.index()].as_mut() {
                            displaced.pos = Vec2::new(old_x as f32, old_y as f32);
                        }
                    }
                    _ => {
                        particle.vel *= BLOCKED_LOSS;
                    }
                }
            }
        }

        sim.particles[slot.index()] = Some(particle);
    }
}
