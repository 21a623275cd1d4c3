//! Tile vocabularies for the Mars board.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::labels::{Label, LabelError};
use crate::table::ListField;

/// Categories of tile a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    City,
    Ocean,
    Greenery,
    Special,
}

impl TileKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Ocean => "Ocean",
            Self::Greenery => "Greenery",
            Self::Special => "Special",
        }
    }
}

impl Label for TileKind {
    const KIND: &'static str = "tile";
    const FIELD: ListField = ListField::Tiles;
    const ALL: &'static [Self] = &[Self::City, Self::Ocean, Self::Greenery, Self::Special];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileKind {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Unique tiles placed by specific project cards. All of them are [`TileKind::Special`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialTile {
    #[serde(rename = "vulcan")]
    Vulcan,
    #[serde(rename = "nuclear explosion")]
    NuclearExplosion,
    Mine,
}

impl SpecialTile {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vulcan => "vulcan",
            Self::NuclearExplosion => "nuclear explosion",
            Self::Mine => "Mine",
        }
    }
}

impl Label for SpecialTile {
    const KIND: &'static str = "special tile";
    const FIELD: ListField = ListField::SpecialTiles;
    const ALL: &'static [Self] = &[Self::Vulcan, Self::NuclearExplosion, Self::Mine];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for SpecialTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialTile {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Large-project areas that sit off the main map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraTile {
    #[serde(rename = "Phobos Space Haven")]
    PhobosSpaceHaven,
    #[serde(rename = "Ganymede Colony")]
    GanymedeColony,
}

impl ExtraTile {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhobosSpaceHaven => "Phobos Space Haven",
            Self::GanymedeColony => "Ganymede Colony",
        }
    }

    /// Both off-map areas are reserved for city tiles.
    #[must_use]
    pub const fn reserved_for(self) -> TileKind {
        match self {
            Self::PhobosSpaceHaven | Self::GanymedeColony => TileKind::City,
        }
    }
}

impl Label for ExtraTile {
    const KIND: &'static str = "extra tile";
    const FIELD: ListField = ListField::ExtraTiles;
    const ALL: &'static [Self] = &[Self::PhobosSpaceHaven, Self::GanymedeColony];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for ExtraTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraTile {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
