//! Literal game data for the base Terraforming Mars set.
//!
//! Values are kept exactly as the source data lists them. Entries that look
//! like data-entry mistakes (the trailing comma on `"Science,"`, the lower-case
//! special tile names) stay untouched here and are reported by
//! [`crate::audit`] instead.

// Counts -------------------------------------------------------------------
pub const CARD_COUNT: u32 = 137;
pub const CORPORATION_COUNT: u32 = 10;
pub const TILES_COUNT: u32 = 61;

// Cards --------------------------------------------------------------------
pub const CARD_TYPES: [&str; 4] = ["Automated", "Active", "Event", "Corporation"];
pub const REQUIREMENTS: [&str; 5] = ["Temperature", "Oxygen", "Oceans", "Tag", "Production"];
pub const TAGS: [&str; 12] = [
    "Science,", "Building", "Space", "Microbe", "Plant", "Animal", "City", "Earth", "Jovian",
    "Energy", "Venus", "Event",
];

// Economy ------------------------------------------------------------------
pub const RESOURCES: [&str; 6] = ["Megacredit", "Steel", "Titanium", "Plant", "Energy", "Heat"];
pub const GLOBAL_STATES: [&str; 5] = [
    "Temperature",
    "Oceans",
    "Oxygen",
    "Terraforming Rating",
    "Generation",
];

// Board --------------------------------------------------------------------
pub const TILES: [&str; 4] = ["City", "Ocean", "Greenery", "Special"];
pub const SPECIAL_TILES: [&str; 3] = ["vulcan", "nuclear explosion", "Mine"];
pub const EXTRA_TILES: [&str; 2] = ["Phobos Space Haven", "Ganymede Colony"];

// Achievements -------------------------------------------------------------
pub const MILESTONES: [&str; 5] = ["Terraformer", "Mayor", "Gardener", "Builder", "Planner"];
pub const AWARDS: [&str; 5] = ["Landlord", "Banker", "Scientist", "Thermalist", "Miner"];
