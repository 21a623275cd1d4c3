//! Terraforming Mars game constants
//!
//! Platform-agnostic, read-only data describing the base game: card and tile
//! counts, card types, requirement kinds, tags, resources, global parameters,
//! tile categories, milestones and awards. Game rules, scoring and persistence
//! belong to the crates that consume this table.

pub mod achievements;
pub mod audit;
pub mod board;
pub mod cards;
pub mod constants;
pub mod economy;
pub mod labels;
pub mod table;

// Re-export commonly used types
pub use achievements::{Award, Milestone};
pub use audit::{AuditReport, Finding, Issue, Severity, audit};
pub use board::{ExtraTile, SpecialTile, TileKind};
pub use cards::{CardType, Requirement, Tag};
pub use economy::{GlobalState, Resource};
pub use labels::{Label, LabelError};
pub use table::{CountField, Field, FieldError, GameConstants, ListField, game_constants};
