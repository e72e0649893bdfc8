//! Particle record and slot handle

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Typed handle to a slot in the particle pool
///
/// Wraps the raw pool index so map entries and caller-held references cannot
/// be mixed up with plain integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleSlot(pub(crate) u32);

impl ParticleSlot {
    /// Index into the particle pool
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One live occupant of a grid cell
///
/// Position and velocity keep sub-cell precision; the occupancy map only ever
/// sees the truncated cell. `life` and `scratch` are general-purpose state
/// for behavior hooks (fire's decay counter, dissolution progress, ...).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Particle {
    pub material_id: u16,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Temperature in Kelvin
    pub temp: f32,
    /// Age / lifetime counter
    pub life: i32,
    /// Material-specific scratch state
    pub scratch: [i32; 2],
}

impl Particle {
    pub(crate) fn new(material_id: u16, x: i32, y: i32, temp: f32) -> Self {
        Self {
            material_id,
            pos: Vec2::new(x as f32, y as f32),
            vel: Vec2::ZERO,
            temp,
            life: 0,
            scratch: [0; 2],
        }
    }

    /// The grid cell this particle occupies
    ///
    /// `as` truncates toward zero, which is the convention the occupancy map
    /// indexes by.
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x as i32, self.pos.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(3, 7, 12, 295.15);
        assert_eq!(p.cell(), (7, 12));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.life, 0);
        assert_eq!(p.scratch, [0; 2]);
    }

    #[test]
    fn test_cell_truncates_sub_cell_position() {
        let mut p = Particle::new(1, 4, 9, 295.15);
        p.pos = Vec2::new(4.99, 9.01);
        assert_eq!(p.cell(), (4, 9));
    }
}
