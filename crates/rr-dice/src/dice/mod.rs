//! Die types, face labels, and face resolution.
//!
//! Two dice are supported: the six-sided ring die with one slot per face,
//! and the skill die whose twelve slots repeat some faces so that a uniform
//! draw lands on them more often.

pub mod face;

pub use face::resolve_face;

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DiceError, DiceResult};

/// Slots of the ring die, one per face.
pub const RING_FACES: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Slots of the skill die. Duplicate entries carry the extra weight.
pub const SKILL_FACES: [u8; 12] = [1, 1, 3, 3, 3, 6, 6, 8, 8, 10, 11, 12];

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    /// Six equally weighted faces.
    Ring,
    /// Twelve weighted slots over seven distinct faces.
    Skill,
}

impl DieType {
    /// The weighting table for this die; each slot is equally likely.
    pub fn slots(self) -> &'static [u8] {
        match self {
            Self::Ring => &RING_FACES,
            Self::Skill => &SKILL_FACES,
        }
    }

    /// Short polyhedral name used in compact tags ("d6", "d12").
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Ring => "d6",
            Self::Skill => "d12",
        }
    }

    /// Parse a die type from "ring", "skill", "d6" or "d12".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ring" | "d6" => Some(Self::Ring),
            "skill" | "d12" => Some(Self::Skill),
            _ => None,
        }
    }

    /// Whether `face` appears on this die.
    pub fn has_face(self, face: u8) -> bool {
        self.slots().contains(&face)
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ring => write!(f, "ring"),
            Self::Skill => write!(f, "skill"),
        }
    }
}

/// A resolved face, tagged with the die it was rolled on.
///
/// The die type travels with the face so a reroll can reapply the same
/// weighting table. Deserializing goes through [`FaceLabel::new`], so a face
/// the die does not have is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FaceLabel {
    /// The die this face was resolved on.
    pub die: DieType,
    /// The face value.
    pub face: u8,
}

impl FaceLabel {
    /// Build a label, rejecting faces the die does not have.
    pub fn new(die: DieType, face: u8) -> DiceResult<Self> {
        if die.has_face(face) {
            Ok(Self { die, face })
        } else {
            Err(DiceError::InvalidLabel(format!("{die} die has no face {face}")))
        }
    }

    /// Compact tag such as "d6-4" or "d12-10".
    pub fn tag(&self) -> String {
        format!("{}-{}", self.die.short_name(), self.face)
    }
}

impl<'de> Deserialize<'de> for FaceLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            die: DieType,
            face: u8,
        }

        let Record { die, face } = Record::deserialize(deserializer)?;
        Self::new(die, face).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} face {}", self.die, self.face)
    }
}

impl FromStr for FaceLabel {
    type Err = DiceError;

    /// Accepts both the display form ("skill face 8") and the compact tag
    /// ("d12-8").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceError::InvalidLabel(s.to_string());
        let trimmed = s.trim();

        let (die, face) = match trimmed.split_once(" face ") {
            Some(parts) => parts,
            None => trimmed.split_once('-').ok_or_else(invalid)?,
        };

        let die = DieType::from_str_tag(die).ok_or_else(invalid)?;
        let face = face.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::new(die, face)
    }
}
