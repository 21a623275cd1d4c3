//! Card vocabularies: card types, requirement kinds and tags.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::labels::{Label, LabelError};
use crate::table::ListField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Automated,
    Active,
    Event,
    Corporation,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automated => "Automated",
            Self::Active => "Active",
            Self::Event => "Event",
            Self::Corporation => "Corporation",
        }
    }

    /// Corporations are dealt at setup rather than bought from the project deck.
    #[must_use]
    pub const fn is_project(self) -> bool {
        !matches!(self, Self::Corporation)
    }
}

impl Label for CardType {
    const KIND: &'static str = "card type";
    const FIELD: ListField = ListField::CardTypes;
    const ALL: &'static [Self] = &[Self::Automated, Self::Active, Self::Event, Self::Corporation];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Kinds of condition a card may place on being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    Temperature,
    Oxygen,
    Oceans,
    Tag,
    Production,
}

impl Requirement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Oxygen => "Oxygen",
            Self::Oceans => "Oceans",
            Self::Tag => "Tag",
            Self::Production => "Production",
        }
    }

    /// Whether the requirement reads a planetary parameter rather than the player's tableau.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Temperature | Self::Oxygen | Self::Oceans)
    }
}

impl Label for Requirement {
    const KIND: &'static str = "requirement";
    const FIELD: ListField = ListField::Requirements;
    const ALL: &'static [Self] = &[
        Self::Temperature,
        Self::Oxygen,
        Self::Oceans,
        Self::Tag,
        Self::Production,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Requirement {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Tag categories printed on cards.
///
/// `Science` is labelled `"Science"`; the raw table entry carries a stray comma
/// that is reported by the audit but not corrected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Science,
    Building,
    Space,
    Microbe,
    Plant,
    Animal,
    City,
    Earth,
    Jovian,
    Energy,
    Venus,
    Event,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Building => "Building",
            Self::Space => "Space",
            Self::Microbe => "Microbe",
            Self::Plant => "Plant",
            Self::Animal => "Animal",
            Self::City => "City",
            Self::Earth => "Earth",
            Self::Jovian => "Jovian",
            Self::Energy => "Energy",
            Self::Venus => "Venus",
            Self::Event => "Event",
        }
    }
}

impl Label for Tag {
    const KIND: &'static str = "tag";
    const FIELD: ListField = ListField::Tags;
    const ALL: &'static [Self] = &[
        Self::Science,
        Self::Building,
        Self::Space,
        Self::Microbe,
        Self::Plant,
        Self::Animal,
        Self::City,
        Self::Earth,
        Self::Jovian,
        Self::Energy,
        Self::Venus,
        Self::Event,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::game_constants;

    #[test]
    fn card_types_follow_table_order() {
        let labels: Vec<_> = CardType::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, game_constants().card_types);
        assert!(!CardType::Corporation.is_project());
        assert!(CardType::Event.is_project());
    }

    #[test]
    fn requirement_scope_split() {
        let global: Vec<_> = Requirement::ALL
            .iter()
            .filter(|r| r.is_global())
            .copied()
            .collect();
        assert_eq!(
            global,
            vec![
                Requirement::Temperature,
                Requirement::Oxygen,
                Requirement::Oceans
            ]
        );
    }

    #[test]
    fn science_tag_uses_clean_label() {
        assert_eq!("Science".parse::<Tag>(), Ok(Tag::Science));
        assert_eq!(
            "Science,".parse::<Tag>(),
            Err(LabelError::Unknown {
                kind: "tag",
                label: "Science,".to_string()
            })
        );
        assert_eq!(game_constants().tags[0], "Science,");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("automated".parse::<CardType>().is_err());
        assert_eq!("Automated".parse::<CardType>(), Ok(CardType::Automated));
    }
}
