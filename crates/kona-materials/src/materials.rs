//! Material definitions and registry

use serde::{Deserialize, Serialize};

/// Built-in material IDs
pub struct MaterialId;

impl MaterialId {
    /// Empty space; never instantiated as a live particle
    pub const NONE: u16 = 0;
    pub const DUST: u16 = 1;
    pub const WATER: u16 = 2;
    pub const SAND: u16 = 3;
    pub const FIRE: u16 = 4;
    pub const STONE: u16 = 5;
    pub const LAVA: u16 = 6;
    pub const GUNPOWDER: u16 = 7;
    pub const SALT: u16 = 8;
    pub const OIL: u16 = 9;
    pub const WOOD: u16 = 10;
}

/// How a material moves, carried as data for callers and behavior hooks.
///
/// The motion resolver itself is weight-driven; the kind groups materials for
/// UI menus and kind-specific hooks (liquids spreading, gases rising).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Doesn't flow (stone, wood)
    Solid,
    /// Falls, piles up (dust, sand, salt, gunpowder)
    Powder,
    /// Flows, seeks level (water, oil, lava)
    Liquid,
    /// Rises, disperses (fire)
    Gas,
}

/// Definition of a material's physical and thermal properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDef {
    pub id: u16,
    pub name: String,
    pub kind: MaterialKind,

    /// Base display color (RGBA)
    pub color: [u8; 4],
    /// Shown in element pickers
    pub menu_visible: bool,

    /// Density, 0-100; heavier sinks through lighter. Negative is buoyant.
    pub weight: i32,
    /// Per-material gravity bias added on top of the engine's base gravity
    pub gravity: f32,
    /// Velocity damping factor applied every tick (0-1)
    pub loss: f32,

    /// Heat conductivity (0-255); zero opts out of ambient relaxation
    pub heat_conduct: u8,
    /// Temperature a fresh particle starts at (Kelvin)
    pub default_temp: f32,

    /// Transition threshold when cooling; a threshold without a target
    /// material is carried as data but produces no transition
    pub low_temp: Option<f32>,
    /// What this becomes when colder than `low_temp`
    pub low_becomes: Option<u16>,
    /// Transition threshold when heating
    pub high_temp: Option<f32>,
    /// What this becomes when hotter than `high_temp`
    pub high_becomes: Option<u16>,

    // Reactive constants exposed to behavior hooks; the base engine stores
    // them without interpreting them.
    /// Flammability (0-1000)
    pub flammable: u16,
    /// Explosive power (0-100)
    pub explosive: u16,
    /// Resistance to destruction (0-100)
    pub hardness: u8,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            id: 0,
            name: "unknown".to_string(),
            kind: MaterialKind::Solid,
            color: [255, 0, 255, 255], // Magenta for missing materials
            menu_visible: true,
            weight: 50,
            gravity: 0.0,
            loss: 0.95,
            heat_conduct: 0,
            default_temp: 295.15,
            low_temp: None,
            low_becomes: None,
            high_temp: None,
            high_becomes: None,
            flammable: 0,
            explosive: 0,
            hardness: 0,
        }
    }
}

/// Registry of all materials
///
/// Built once at engine start; read-only afterwards, so a single registry can
/// be shared by reference across simulations.
pub struct Materials {
    materials: Vec<MaterialDef>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self {
            materials: Vec::new(),
        };
        materials.register_defaults();
        log::debug!("registered {} materials", materials.materials.len());
        materials
    }

    fn register_defaults(&mut self) {
        // Empty space
        self.register(MaterialDef {
            id: MaterialId::NONE,
            name: "empty".to_string(),
            kind: MaterialKind::Gas,
            color: [0, 0, 0, 0], // Transparent
            menu_visible: false,
            weight: 0,
            ..Default::default()
        });

        // Dust - light powder, piles up
        self.register(MaterialDef {
            id: MaterialId::DUST,
            name: "dust".to_string(),
            kind: MaterialKind::Powder,
            color: [255, 224, 178, 255],
            weight: 75,
            gravity: 0.1,
            loss: 0.95,
            heat_conduct: 70,
            ..Default::default()
        });

        // Water - freezes at 0C and boils at 100C, but the engine defines no
        // ice or steam material, so both thresholds stay untargeted
        self.register(MaterialDef {
            id: MaterialId::WATER,
            name: "water".to_string(),
            kind: MaterialKind::Liquid,
            color: [32, 64, 255, 255],
            weight: 20,
            gravity: 0.1,
            loss: 0.98,
            heat_conduct: 251,
            low_temp: Some(273.15),
            high_temp: Some(373.15),
            ..Default::default()
        });

        // Sand - heavy powder, sinks through liquids
        self.register(MaterialDef {
            id: MaterialId::SAND,
            name: "sand".to_string(),
            kind: MaterialKind::Powder,
            color: [255, 204, 0, 255],
            weight: 90,
            gravity: 0.15,
            loss: 0.90,
            heat_conduct: 70,
            high_temp: Some(1973.15),
            ..Default::default()
        });

        // Fire - buoyant, short-lived, heats its surroundings
        self.register(MaterialDef {
            id: MaterialId::FIRE,
            name: "fire".to_string(),
            kind: MaterialKind::Gas,
            color: [255, 100, 0, 255],
            weight: -2,
            gravity: -0.1,
            loss: 0.92,
            heat_conduct: 88,
            default_temp: 600.0,
            ..Default::default()
        });

        // Stone
        self.register(MaterialDef {
            id: MaterialId::STONE,
            name: "stone".to_string(),
            kind: MaterialKind::Solid,
            color: [128, 128, 128, 255],
            weight: 100,
            heat_conduct: 200,
            high_temp: Some(1973.15),
            hardness: 50,
            ..Default::default()
        });

        // Lava - solidifies below 1000C
        self.register(MaterialDef {
            id: MaterialId::LAVA,
            name: "lava".to_string(),
            kind: MaterialKind::Liquid,
            color: [255, 40, 0, 255],
            weight: 45,
            gravity: 0.1,
            loss: 0.95,
            heat_conduct: 255,
            default_temp: 2273.15,
            low_temp: Some(1273.15),
            low_becomes: Some(MaterialId::STONE),
            ..Default::default()
        });

        // Gunpowder - ignites at 400C
        self.register(MaterialDef {
            id: MaterialId::GUNPOWDER,
            name: "gunpowder".to_string(),
            kind: MaterialKind::Powder,
            color: [128, 128, 64, 255],
            weight: 85,
            gravity: 0.1,
            loss: 0.92,
            heat_conduct: 70,
            high_temp: Some(673.15),
            high_becomes: Some(MaterialId::FIRE),
            flammable: 600,
            explosive: 1,
            ..Default::default()
        });

        // Salt - dissolves in water
        self.register(MaterialDef {
            id: MaterialId::SALT,
            name: "salt".to_string(),
            kind: MaterialKind::Powder,
            color: [255, 255, 255, 255],
            weight: 95,
            gravity: 0.12,
            loss: 0.90,
            heat_conduct: 110,
            high_temp: Some(1074.15),
            ..Default::default()
        });

        // Oil - lighter than water, ignites at 260C
        self.register(MaterialDef {
            id: MaterialId::OIL,
            name: "oil".to_string(),
            kind: MaterialKind::Liquid,
            color: [64, 32, 0, 255],
            weight: 10,
            gravity: 0.08,
            loss: 0.97,
            heat_conduct: 40,
            high_temp: Some(533.15),
            high_becomes: Some(MaterialId::FIRE),
            flammable: 20,
            ..Default::default()
        });

        // Wood - burns at 300C
        self.register(MaterialDef {
            id: MaterialId::WOOD,
            name: "wood".to_string(),
            kind: MaterialKind::Solid,
            color: [139, 69, 19, 255],
            weight: 100,
            heat_conduct: 40,
            high_temp: Some(573.15),
            high_becomes: Some(MaterialId::FIRE),
            flammable: 5,
            ..Default::default()
        });
    }

    fn register(&mut self, material: MaterialDef) {
        let id = material.id as usize;

        // Ensure vec is large enough
        if self.materials.len() <= id {
            self.materials.resize(id + 1, MaterialDef::default());
        }

        self.materials[id] = material;
    }

    /// Get material definition by ID
    ///
    /// Panics for an unregistered id: a correct engine only passes ids that
    /// came out of this registry or one of its transition tables.
    pub fn get(&self, id: u16) -> &MaterialDef {
        self.try_get(id)
            .unwrap_or_else(|| panic!("unknown material id {id}"))
    }

    /// Get material definition by ID, `None` if unregistered
    pub fn try_get(&self, id: u16) -> Option<&MaterialDef> {
        self.materials.get(id as usize)
    }

    /// Get color for a material
    pub fn get_color(&self, id: u16) -> [u8; 4] {
        self.get(id).color
    }

    /// Enumerate registered materials, e.g. for UI menus
    pub fn list(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter()
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}
