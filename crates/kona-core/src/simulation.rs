//! The engine instance: particle pool, occupancy map, tick driver

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use kona_materials::{MaterialId, Materials};

use crate::behaviors::Behaviors;
use crate::config::SimConfig;
use crate::error::CreateError;
use crate::map::ParticleMap;
use crate::motion::MotionSystem;
use crate::particle::{Particle, ParticleSlot};
use crate::thermal::ThermalSystem;

/// One falling-sand simulation
///
/// Owns the particle pool and the occupancy map exclusively; all mutation
/// happens through [`Simulation::create_particle`],
/// [`Simulation::delete_particle`], [`Simulation::clear`] and
/// [`Simulation::tick`]. A tick is atomic from the caller's perspective:
/// nothing reads the world until the pass over all slots completes.
pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) materials: Materials,
    pub(crate) behaviors: Behaviors,
    pub(crate) particles: Vec<Option<Particle>>,
    /// Slots freed by deletion, reused LIFO before fresh ones
    pub(crate) free_slots: Vec<u32>,
    /// First never-used slot
    pub(crate) next_slot: u32,
    pub(crate) active: usize,
    pub(crate) map: ParticleMap,
    pub(crate) rng: Xoshiro256StarStar,
    pub(crate) frame_count: u64,
}

impl Simulation {
    /// Build an engine instance
    ///
    /// Panics on a degenerate config (non-positive dimensions or zero
    /// capacity); those are construction-time programmer errors, not
    /// runtime conditions.
    pub fn new(config: SimConfig) -> Self {
        assert!(
            config.width > 0 && config.height > 0,
            "grid dimensions must be positive"
        );
        assert!(
            config.capacity > 0 && config.capacity < u32::MAX as usize,
            "particle capacity must fit a u32 slot index"
        );

        let materials = Materials::new();
        let behaviors = Behaviors::standard(&materials);
        Self {
            materials,
            behaviors,
            particles: vec![None; config.capacity],
            free_slots: Vec::new(),
            next_slot: 0,
            active: 0,
            map: ParticleMap::new(config.width, config.height),
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
            frame_count: 0,
            config,
        }
    }

    /// Create a particle at an empty, in-bounds cell
    ///
    /// The particle starts at rest with its material's default temperature.
    /// Fails without side effects when the cell is out of bounds or
    /// occupied, or when the pool is full.
    pub fn create_particle(
        &mut self,
        x: i32,
        y: i32,
        material_id: u16,
    ) -> Result<ParticleSlot, CreateError> {
        if !self.map.in_bounds(x, y) {
            return Err(CreateError::OutOfBounds);
        }
        if self.map.slot_at(x, y).is_some() {
            return Err(CreateError::CellOccupied);
        }
        if self.active == self.config.capacity {
            log::debug!("particle pool exhausted ({} live)", self.active);
            return Err(CreateError::PoolExhausted);
        }
        assert_ne!(
            material_id,
            MaterialId::NONE,
            "the empty material cannot be instantiated"
        );

        let default_temp = self.materials.get(material_id).default_temp;
        let index = match self.free_slots.pop() {
            Some(index) => index,
            None => {
                let index = self.next_slot;
                self.next_slot += 1;
                index
            }
        };
        let slot = ParticleSlot(index);
        self.particles[slot.index()] = Some(Particle::new(material_id, x, y, default_temp));
        self.map.set(x, y, slot);
        self.active += 1;
        Ok(slot)
    }

    /// Delete the particle at a cell; no-op when the cell is empty or out
    /// of bounds
    pub fn delete_particle(&mut self, x: i32, y: i32) {
        let Some(slot) = self.map.slot_at(x, y) else {
            return;
        };
        self.particles[slot.index()] = None;
        self.free_slots.push(slot.0);
        self.map.clear_cell(x, y);
        self.active -= 1;
    }

    /// Reset to an empty grid and zero frame counter
    pub fn clear(&mut self) {
        self.particles.fill(None);
        self.free_slots.clear();
        self.next_slot = 0;
        self.active = 0;
        self.map.reset();
        self.frame_count = 0;
        log::info!("cleared simulation grid");
    }

    /// Advance the simulation by exactly one step
    ///
    /// Visits slots in ascending order; for each live particle the material's
    /// behavior hook runs first, then motion, then thermal resolution. A
    /// particle deleted earlier in the pass is skipped. Particles created
    /// mid-pass update this tick only if they landed in a slot the pass has
    /// not reached yet.
    pub fn tick(&mut self) {
        for index in 0..self.particles.len() {
            let Some(particle) = self.particles[index] else {
                continue;
            };
            if particle.material_id == MaterialId::NONE {
                continue;
            }
            let slot = ParticleSlot(index as u32);
            let (x, y) = particle.cell();

            if let Some(hook) = self.behaviors.get(particle.material_id) {
                hook(self, slot, x, y);
            }
            MotionSystem::resolve(self, slot);
            ThermalSystem::resolve(self, slot);
        }
        self.frame_count += 1;
    }

    /// Add heat to the particle at a cell; no-op on empty or out-of-bounds
    /// cells. Used by hooks (fire, lava) and by callers forcing
    /// temperatures.
    pub fn add_heat(&mut self, x: i32, y: i32, delta: f32) {
        if let Some(slot) = self.map.slot_at(x, y)
            && let Some(particle) = self.particles[slot.index()].as_mut()
        {
            particle.temp += delta;
        }
    }

    pub fn width(&self) -> i32 {
        self.config.width
    }

    pub fn height(&self) -> i32 {
        self.config.height
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Read access to the occupancy map
    pub fn map(&self) -> &ParticleMap {
        &self.map
    }

    /// Read access to the material registry
    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// The particle in a slot, `None` when the slot is free
    pub fn particle(&self, slot: ParticleSlot) -> Option<&Particle> {
        self.particles.get(slot.index()).and_then(|p| p.as_ref())
    }

    /// The particle at a cell, `None` when the cell is empty
    pub fn particle_at(&self, x: i32, y: i32) -> Option<&Particle> {
        self.map.slot_at(x, y).and_then(|slot| self.particle(slot))
    }

    /// Iterate all live particles with their slots, e.g. for rendering
    pub fn particles(&self) -> impl Iterator<Item = (ParticleSlot, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .filter_map(|(index, p)| p.as_ref().map(|p| (ParticleSlot(index as u32), p)))
    }
}
