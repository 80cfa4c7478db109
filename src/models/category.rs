use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A curated subset of questions.
///
/// Variants are ordered the way categories are sampled and reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// Questions containing a decimal digit.
    Numbers,
    /// Questions with at least one word missing from the English dictionary.
    NonEnglish,
    /// Questions naming a proper noun that is rare in general English.
    UnusualProperNouns,
}
