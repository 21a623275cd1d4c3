//! The process-wide game constants table.
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    AWARDS, CARD_COUNT, CARD_TYPES, CORPORATION_COUNT, EXTRA_TILES, GLOBAL_STATES, MILESTONES,
    REQUIREMENTS, RESOURCES, SPECIAL_TILES, TAGS, TILES, TILES_COUNT,
};

static GAME_CONSTANTS: GameConstants = GameConstants {
    card_count: CARD_COUNT,
    corporation_count: CORPORATION_COUNT,
    tiles_count: TILES_COUNT,
    card_types: &CARD_TYPES,
    requirements: &REQUIREMENTS,
    tags: &TAGS,
    resources: &RESOURCES,
    global_states: &GLOBAL_STATES,
    tiles: &TILES,
    special_tiles: &SPECIAL_TILES,
    extra_tiles: &EXTRA_TILES,
    milestones: &MILESTONES,
    awards: &AWARDS,
};

/// Returns the game constants table.
///
/// The table is statically initialized and never mutated, so every call hands
/// out the same value and it can be shared across threads freely.
#[must_use]
pub fn game_constants() -> &'static GameConstants {
    &GAME_CONSTANTS
}

/// Fixed enumerations consumed by the rules engine, UI and persistence layers.
///
/// Counts are informational upper bounds; nothing here checks them against the
/// lists. See [`crate::audit`] for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConstants {
    pub card_count: u32,
    pub corporation_count: u32,
    pub tiles_count: u32,
    pub card_types: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub resources: &'static [&'static str],
    pub global_states: &'static [&'static str],
    pub tiles: &'static [&'static str],
    pub special_tiles: &'static [&'static str],
    pub extra_tiles: &'static [&'static str],
    pub milestones: &'static [&'static str],
    pub awards: &'static [&'static str],
}

impl GameConstants {
    /// Read one of the label sequences.
    #[must_use]
    pub const fn list(&self, field: ListField) -> &'static [&'static str] {
        match field {
            ListField::CardTypes => self.card_types,
            ListField::Requirements => self.requirements,
            ListField::Tags => self.tags,
            ListField::Resources => self.resources,
            ListField::GlobalStates => self.global_states,
            ListField::Tiles => self.tiles,
            ListField::SpecialTiles => self.special_tiles,
            ListField::ExtraTiles => self.extra_tiles,
            ListField::Milestones => self.milestones,
            ListField::Awards => self.awards,
        }
    }

    /// Read one of the informational counts.
    #[must_use]
    pub const fn count(&self, field: CountField) -> u32 {
        match field {
            CountField::CardCount => self.card_count,
            CountField::CorporationCount => self.corporation_count,
            CountField::TilesCount => self.tiles_count,
        }
    }

    /// Label sequences in declaration order.
    pub fn lists(&self) -> impl Iterator<Item = (ListField, &'static [&'static str])> + '_ {
        ListField::ALL.into_iter().map(move |field| (field, self.list(field)))
    }

    /// Counts in declaration order.
    pub fn counts(&self) -> impl Iterator<Item = (CountField, u32)> + '_ {
        CountField::ALL.into_iter().map(move |field| (field, self.count(field)))
    }

    /// Serialize the table with camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Errors raised when naming a table field that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown constants field `{0}`")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    CardTypes,
    Requirements,
    Tags,
    Resources,
    GlobalStates,
    Tiles,
    SpecialTiles,
    ExtraTiles,
    Milestones,
    Awards,
}

impl ListField {
    pub const ALL: [Self; 10] = [
        Self::CardTypes,
        Self::Requirements,
        Self::Tags,
        Self::Resources,
        Self::GlobalStates,
        Self::Tiles,
        Self::SpecialTiles,
        Self::ExtraTiles,
        Self::Milestones,
        Self::Awards,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CardTypes => "cardTypes",
            Self::Requirements => "requirements",
            Self::Tags => "tags",
            Self::Resources => "resources",
            Self::GlobalStates => "globalStates",
            Self::Tiles => "tiles",
            Self::SpecialTiles => "specialTiles",
            Self::ExtraTiles => "extraTiles",
            Self::Milestones => "milestones",
            Self::Awards => "awards",
        }
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CountField {
    CardCount,
    CorporationCount,
    TilesCount,
}

impl CountField {
    pub const ALL: [Self; 3] = [Self::CardCount, Self::CorporationCount, Self::TilesCount];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CardCount => "cardCount",
            Self::CorporationCount => "corporationCount",
            Self::TilesCount => "tilesCount",
        }
    }
}

impl fmt::Display for CountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Any field of the table, addressed by its camelCase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Field {
    Count(CountField),
    List(ListField),
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count(field) => field.as_str(),
            Self::List(field) => field.as_str(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CountField>()
            .map(Self::Count)
            .or_else(|_| s.parse::<ListField>().map(Self::List))
    }
}

impl From<ListField> for Field {
    fn from(value: ListField) -> Self {
        Self::List(value)
    }
}

impl From<CountField> for Field {
    fn from(value: CountField) -> Self {
        Self::Count(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accessor_returns_the_same_table() {
        let first = game_constants();
        let second = game_constants();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn every_list_has_distinct_entries() {
        for (field, entries) in game_constants().lists() {
            let unique: HashSet<_> = entries.iter().collect();
            assert_eq!(unique.len(), entries.len(), "{field} has duplicates");
        }
    }

    #[test]
    fn counts_are_positive() {
        for (field, value) in game_constants().counts() {
            assert!(value > 0, "{field} must be positive");
        }
    }

    #[test]
    fn field_keys_parse_back() {
        for field in ListField::ALL {
            assert_eq!(field.as_str().parse::<ListField>(), Ok(field));
        }
        for field in CountField::ALL {
            assert_eq!(field.as_str().parse::<CountField>(), Ok(field));
        }
        assert_eq!(
            "cardTypes".parse::<CountField>(),
            Err(FieldError::Unknown("cardTypes".to_string()))
        );
    }

    #[test]
    fn field_dispatches_to_counts_and_lists() {
        assert_eq!(
            "tilesCount".parse::<Field>(),
            Ok(Field::Count(CountField::TilesCount))
        );
        assert_eq!(
            "globalStates".parse::<Field>(),
            Ok(Field::List(ListField::GlobalStates))
        );
        let err = "CorporationCount".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown constants field `CorporationCount`");
    }

    #[test]
    fn list_lookup_matches_struct_fields() {
        let table = game_constants();
        assert_eq!(table.list(ListField::Tiles), table.tiles);
        assert_eq!(table.list(ListField::ExtraTiles), table.extra_tiles);
        assert_eq!(table.count(CountField::CardCount), 137);
        assert_eq!(table.lists().count(), 10);
    }

    #[test]
    fn table_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| game_constants().milestones.len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    }
}
