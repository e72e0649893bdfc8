//! Temperature-driven material transitions
//!
//! A particle whose temperature crosses one of its material's thresholds
//! changes material id in place: lava solidifies to stone, gunpowder ignites
//! to fire. Only the material id changes; position, velocity, life and
//! scratch state carry over.

use kona_materials::MaterialDef;

use crate::particle::Particle;

/// System for checking and applying threshold transitions
pub struct StateChangeSystem;

impl StateChangeSystem {
    /// Check if a particle should change material based on its temperature
    ///
    /// The cold check runs first and short-circuits the hot check, so a
    /// particle transitions at most once per tick. A threshold whose target
    /// material is undefined never fires.
    ///
    /// Returns true if the particle was transformed to a different material.
    pub fn apply(particle: &mut Particle, def: &MaterialDef) -> bool {
        if let Some(threshold) = def.low_temp
            && particle.temp < threshold
            && let Some(target) = def.low_becomes
        {
            particle.material_id = target;
            return true;
        }

        if let Some(threshold) = def.high_temp
            && particle.temp > threshold
            && let Some(target) = def.high_becomes
        {
            particle.material_id = target;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use kona_materials::{MaterialId, Materials};

    fn particle_with_temp(material_id: u16, temp: f32) -> Particle {
        let mut p = Particle::new(material_id, 4, 4, temp);
        p.vel = Vec2::new(0.25, -0.5);
        p.life = 7;
        p.scratch = [3, -9];
        p
    }

    #[test]
    fn test_lava_solidifies_when_cold() {
        let materials = Materials::new();
        let lava = materials.get(MaterialId::LAVA);

        let mut p = particle_with_temp(MaterialId::LAVA, 1200.0);
        assert!(StateChangeSystem::apply(&mut p, lava));
        assert_eq!(p.material_id, MaterialId::STONE);
    }

    #[test]
    fn test_no_transition_above_low_threshold() {
        let materials = Materials::new();
        let lava = materials.get(MaterialId::LAVA);

        let mut p = particle_with_temp(MaterialId::LAVA, 1500.0);
        assert!(!StateChangeSystem::apply(&mut p, lava));
        assert_eq!(p.material_id, MaterialId::LAVA);
    }

    #[test]
    fn test_gunpowder_ignites_when_hot() {
        let materials = Materials::new();
        let gunpowder = materials.get(MaterialId::GUNPOWDER);

        let mut p = particle_with_temp(MaterialId::GUNPOWDER, 700.0);
        assert!(StateChangeSystem::apply(&mut p, gunpowder));
        assert_eq!(p.material_id, MaterialId::FIRE);
    }

    #[test]
    fn test_transition_only_touches_material_id() {
        let materials = Materials::new();
        let wood = materials.get(MaterialId::WOOD);

        let mut p = particle_with_temp(MaterialId::WOOD, 650.0);
        let before = p;
        assert!(StateChangeSystem::apply(&mut p, wood));
        assert_eq!(p.material_id, MaterialId::FIRE);
        assert_eq!(p.pos, before.pos);
        assert_eq!(p.vel, before.vel);
        assert_eq!(p.life, before.life);
        assert_eq!(p.scratch, before.scratch);
    }

    #[test]
    fn test_untargeted_threshold_never_fires() {
        let materials = Materials::new();
        let water = materials.get(MaterialId::WATER);

        // Water carries freeze/boil thresholds but no target materials
        let mut cold = particle_with_temp(MaterialId::WATER, 250.0);
        assert!(!StateChangeSystem::apply(&mut cold, water));
        assert_eq!(cold.material_id, MaterialId::WATER);

        let mut hot = particle_with_temp(MaterialId::WATER, 400.0);
        assert!(!StateChangeSystem::apply(&mut hot, water));
        assert_eq!(hot.material_id, MaterialId::WATER);
    }

    #[test]
    fn test_cold_check_wins_over_hot() {
        // Synthetic material where a single temperature satisfies both
        // checks; the cold transition must win.
        let def = MaterialDef {
            id: 99,
            low_temp: Some(300.0),
            low_becomes: Some(MaterialId::STONE),
            high_temp: Some(200.0),
            high_becomes: Some(MaterialId::FIRE),
            ..Default::default()
        };

        let mut p = particle_with_temp(99, 250.0);
        assert!(StateChangeSystem::apply(&mut p, &def));
        assert_eq!(p.material_id, MaterialId::STONE);
    }
}
