//! Named milestones and end-game awards.
//!
//! Eligibility rules live in the rules engine; these are only the names.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::labels::{Label, LabelError};
use crate::table::ListField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    Terraformer,
    Mayor,
    Gardener,
    Builder,
    Planner,
}

impl Milestone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terraformer => "Terraformer",
            Self::Mayor => "Mayor",
            Self::Gardener => "Gardener",
            Self::Builder => "Builder",
            Self::Planner => "Planner",
        }
    }
}

impl Label for Milestone {
    const KIND: &'static str = "milestone";
    const FIELD: ListField = ListField::Milestones;
    const ALL: &'static [Self] = &[
        Self::Terraformer,
        Self::Mayor,
        Self::Gardener,
        Self::Builder,
        Self::Planner,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Milestone {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Award {
    Landlord,
    Banker,
    Scientist,
    Thermalist,
    Miner,
}

impl Award {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landlord => "Landlord",
            Self::Banker => "Banker",
            Self::Scientist => "Scientist",
            Self::Thermalist => "Thermalist",
            Self::Miner => "Miner",
        }
    }
}

impl Label for Award {
    const KIND: &'static str = "award";
    const FIELD: ListField = ListField::Awards;
    const ALL: &'static [Self] = &[
        Self::Landlord,
        Self::Banker,
        Self::Scientist,
        Self::Thermalist,
        Self::Miner,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Award {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
