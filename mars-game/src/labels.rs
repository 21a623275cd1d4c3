//! Shared plumbing for the typed label enums.
use thiserror::Error;

use crate::table::ListField;

/// Errors raised when a string does not name a known label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("unknown {kind} label `{label}`")]
    Unknown { kind: &'static str, label: String },
}

/// A closed vocabulary mirroring one label sequence of the constants table.
pub trait Label: Copy + Eq + 'static {
    /// Human-readable name of the vocabulary, used in error messages.
    const KIND: &'static str;
    /// Table field this vocabulary mirrors.
    const FIELD: ListField;
    /// Every variant, in table order.
    const ALL: &'static [Self];

    /// Canonical label text.
    fn as_str(self) -> &'static str;

    /// Look up a variant by its exact canonical label.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Unknown` when no variant carries `label`.
    fn from_label(label: &str) -> Result<Self, LabelError> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == label)
            .ok_or_else(|| LabelError::Unknown {
                kind: Self::KIND,
                label: label.to_string(),
            })
    }
}
