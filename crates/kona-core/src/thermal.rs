//! Ambient heat relaxation
//!
//! The base engine only pulls every conductive particle toward the ambient
//! temperature; real neighbor-to-neighbor conduction is left to behavior
//! hooks (fire and lava heat their surroundings directly).

use crate::particle::ParticleSlot;
use crate::simulation::Simulation;
use crate::state_changes::StateChangeSystem;

/// Ambient temperature in Kelvin (22C)
pub(crate) const AMBIENT_TEMP: f32 = 295.15;
/// Fraction of the distance to ambient covered per tick
const AMBIENT_RATE: f32 = 0.001;

/// Per-particle thermal step: ambient relaxation, then state transitions
pub struct ThermalSystem;

impl ThermalSystem {
    pub fn resolve(sim: &mut Simulation, slot: ParticleSlot) {
        let Some(particle) = sim.particles[slot.index()].as_mut() else {
            return;
        };
        let def = sim.materials.get(particle.material_id);

        if def.heat_conduct > 0 {
            particle.temp += (AMBIENT_TEMP - particle.temp) * AMBIENT_RATE;
        }

        StateChangeSystem::apply(particle, def);
    }
}
