//! Resources and the planetary parameters tracked for the whole game.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::labels::{Label, LabelError};
use crate::table::ListField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Megacredit,
    Steel,
    Titanium,
    Plant,
    Energy,
    Heat,
}

impl Resource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Megacredit => "Megacredit",
            Self::Steel => "Steel",
            Self::Titanium => "Titanium",
            Self::Plant => "Plant",
            Self::Energy => "Energy",
            Self::Heat => "Heat",
        }
    }
}

impl Label for Resource {
    const KIND: &'static str = "resource";
    const FIELD: ListField = ListField::Resources;
    const ALL: &'static [Self] = &[
        Self::Megacredit,
        Self::Steel,
        Self::Titanium,
        Self::Plant,
        Self::Energy,
        Self::Heat,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalState {
    Temperature,
    Oceans,
    Oxygen,
    #[serde(rename = "Terraforming Rating")]
    TerraformingRating,
    Generation,
}

impl GlobalState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Oceans => "Oceans",
            Self::Oxygen => "Oxygen",
            Self::TerraformingRating => "Terraforming Rating",
            Self::Generation => "Generation",
        }
    }
}

impl Label for GlobalState {
    const KIND: &'static str = "global state";
    const FIELD: ListField = ListField::GlobalStates;
    const ALL: &'static [Self] = &[
        Self::Temperature,
        Self::Oceans,
        Self::Oxygen,
        Self::TerraformingRating,
        Self::Generation,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalState {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_labels_roundtrip_through_serde() {
        let json = serde_json::to_string(&GlobalState::TerraformingRating).unwrap();
        assert_eq!(json, "\"Terraforming Rating\"");
        let back: GlobalState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GlobalState::TerraformingRating);
    }

    #[test]
    fn unknown_resource_reports_kind() {
        let err = "Credits".parse::<Resource>().unwrap_err();
        assert_eq!(err.to_string(), "unknown resource label `Credits`");
    }
}
