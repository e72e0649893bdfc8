//! Per-material behavior hooks
//!
//! Materials that do more than fall plug a hook into the dispatch table; the
//! tick driver calls it generically before motion and thermal resolution.
//! Hooks receive the whole engine so they can reach neighbors, and they must
//! tolerate being invoked on a slot that an earlier hook in the same pass
//! already emptied.

use kona_materials::{MaterialId, Materials};

use crate::particle::ParticleSlot;
use crate::rng::SimRng;
use crate::simulation::Simulation;

/// Per-tick material hook: engine, slot, and the particle's cell coordinates
pub type BehaviorFn = fn(&mut Simulation, ParticleSlot, i32, i32);

/// Dispatch table from material id to its optional hook
pub struct Behaviors {
    hooks: Vec<Option<BehaviorFn>>,
}

impl Behaviors {
    /// The built-in hook set, aligned with the material registry
    pub fn standard(materials: &Materials) -> Self {
        let mut hooks: Vec<Option<BehaviorFn>> = vec![None; materials.len()];
        hooks[MaterialId::WATER as usize] = Some(water_spread);
        hooks[MaterialId::FIRE as usize] = Some(fire_update);
        hooks[MaterialId::LAVA as usize] = Some(lava_update);
        hooks[MaterialId::SALT as usize] = Some(salt_update);
        Self { hooks }
    }

    pub fn get(&self, material_id: u16) -> Option<BehaviorFn> {
        self.hooks.get(material_id as usize).copied().flatten()
    }
}

/// Ticks a fire particle survives before burning out
const FIRE_LIFETIME: i32 = 50;
/// Heat added to each cell of fire's 3x3 neighborhood per tick (Kelvin)
const FIRE_HEAT: f32 = 10.0;
/// Heat lava radiates into each neighboring cell per tick (Kelvin)
const LAVA_HEAT: f32 = 50.0;
/// Sideways impulse water gains when it finds an open cell
const SPREAD_IMPULSE: f32 = 0.5;
/// Chance per watery neighbor per tick that salt dissolves
const DISSOLVE_CHANCE: f32 = 0.05;

/// Water drifts sideways into open cells, seeking its level
fn water_spread(sim: &mut Simulation, slot: ParticleSlot, x: i32, y: i32) {
    if sim.particles[slot.index()].is_none() {
        return;
    }
    if !sim.rng.gen_bool() {
        return;
    }
    let dir: i32 = if sim.rng.gen_bool() { 1 } else { -1 };
    let nx = x + dir;
    if sim.map.in_bounds(nx, y)
        && sim.map.slot_at(nx, y).is_none()
        && let Some(particle) = sim.particles[slot.index()].as_mut()
    {
        particle.vel.x += dir as f32 * SPREAD_IMPULSE;
    }
}

/// Fire ages every tick, heats everything around it (its own cell included),
/// and burns out past its lifetime
fn fire_update(sim: &mut Simulation, slot: ParticleSlot, x: i32, y: i32) {
    let Some(particle) = sim.particles[slot.index()].as_mut() else {
        return;
    };
    particle.life += 1;
    if particle.life > FIRE_LIFETIME {
        sim.delete_particle(x, y);
        return;
    }
    for dy in -1..=1 {
        for dx in -1..=1 {
            sim.add_heat(x + dx, y + dy, FIRE_HEAT);
        }
    }
}

/// Lava radiates intense heat into its neighborhood
fn lava_update(sim: &mut Simulation, slot: ParticleSlot, x: i32, y: i32) {
    if sim.particles[slot.index()].is_none() {
        return;
    }
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            sim.add_heat(x + dx, y + dy, LAVA_HEAT);
        }
    }
}

/// Salt dissolves when touching water
fn salt_update(sim: &mut Simulation, slot: ParticleSlot, x: i32, y: i32) {
    if sim.particles[slot.index()].is_none() {
        return;
    }
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let Some(neighbor) = sim.map.slot_at(x + dx, y + dy) else {
                continue;
            };
            let is_water = sim.particles[neighbor.index()]
                .is_some_and(|p| p.material_id == MaterialId::WATER);
            if is_water && sim.rng.check_probability(DISSOLVE_CHANCE) {
                sim.delete_particle(x, y);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn small_sim(seed: u64) -> Simulation {
        Simulation::new(SimConfig {
            width: 10,
            height: 10,
            capacity: 32,
            seed,
        })
    }

    #[test]
    fn test_standard_table_wiring() {
        let materials = Materials::new();
        let behaviors = Behaviors::standard(&materials);
        assert!(behaviors.get(MaterialId::WATER).is_some());
        assert!(behaviors.get(MaterialId::FIRE).is_some());
        assert!(behaviors.get(MaterialId::LAVA).is_some());
        assert!(behaviors.get(MaterialId::SALT).is_some());
        assert!(behaviors.get(MaterialId::SAND).is_none());
        assert!(behaviors.get(MaterialId::NONE).is_none());
        assert!(behaviors.get(999).is_none());
    }

    #[test]
    fn test_fire_ages_and_burns_out() {
        let mut sim = small_sim(3);
        let slot = sim.create_particle(4, 4, MaterialId::FIRE).unwrap();

        for expected_age in 1..=FIRE_LIFETIME {
            fire_update(&mut sim, slot, 4, 4);
            assert_eq!(sim.particle(slot).unwrap().life, expected_age);
        }
        assert_eq!(sim.active_count(), 1);

        fire_update(&mut sim, slot, 4, 4);
        assert_eq!(sim.active_count(), 0, "fire burns out past its lifetime");
        assert_eq!(sim.map().slot_at(4, 4), None);
    }

    #[test]
    fn test_fire_heats_neighbors() {
        let mut sim = small_sim(3);
        let fire = sim.create_particle(4, 4, MaterialId::FIRE).unwrap();
        let dust = sim.create_particle(5, 4, MaterialId::DUST).unwrap();
        let before = sim.particle(dust).unwrap().temp;

        fire_update(&mut sim, fire, 4, 4);

        assert_eq!(sim.particle(dust).unwrap().temp, before + FIRE_HEAT);
        let own = sim.particle(fire).unwrap().temp;
        assert_eq!(own, 600.0 + FIRE_HEAT, "fire feeds its own heat");
    }

    #[test]
    fn test_lava_heats_neighbors_but_not_itself() {
        let mut sim = small_sim(3);
        let lava = sim.create_particle(4, 4, MaterialId::LAVA).unwrap();
        let dust = sim.create_particle(4, 5, MaterialId::DUST).unwrap();
        let before = sim.particle(dust).unwrap().temp;

        lava_update(&mut sim, lava, 4, 4);

        assert_eq!(sim.particle(dust).unwrap().temp, before + LAVA_HEAT);
        assert_eq!(sim.particle(lava).unwrap().temp, 2273.15);
    }

    #[test]
    fn test_water_cannot_spread_when_walled_in() {
        let mut sim = small_sim(3);
        let water = sim.create_particle(4, 4, MaterialId::WATER).unwrap();
        sim.create_particle(3, 4, MaterialId::STONE).unwrap();
        sim.create_particle(5, 4, MaterialId::STONE).unwrap();

        // Whatever the rng picks, both sides are blocked
        for _ in 0..50 {
            water_spread(&mut sim, water, 4, 4);
        }
        assert_eq!(sim.particle(water).unwrap().vel.x, 0.0);
    }

    #[test]
    fn test_salt_ignores_dry_neighbors() {
        let mut sim = small_sim(3);
        let salt = sim.create_particle(4, 4, MaterialId::SALT).unwrap();
        sim.create_particle(5, 4, MaterialId::SAND).unwrap();

        for _ in 0..200 {
            salt_update(&mut sim, salt, 4, 4);
        }
        assert_eq!(sim.active_count(), 2, "salt only dissolves next to water");
    }

    #[test]
    fn test_hooks_tolerate_emptied_slot() {
        let mut sim = small_sim(3);
        let slot = sim.create_particle(4, 4, MaterialId::WATER).unwrap();
        sim.delete_particle(4, 4);

        water_spread(&mut sim, slot, 4, 4);
        fire_update(&mut sim, slot, 4, 4);
        lava_update(&mut sim, slot, 4, 4);
        salt_update(&mut sim, slot, 4, 4);
        assert_eq!(sim.active_count(), 0);
    }
}
