//! Roll orchestration: main rolls, bonus dice, and single-die rerolls.
//!
//! The [`Roller`] keeps no results of its own. Callers own a [`RollResult`]
//! and hand it in mutably for each operation.

use serde::Serialize;

use crate::dice::{DieType, FaceLabel, resolve_face};
use crate::entropy::{
    EntropyMode, EntropySelector, EntropySource, LocalSource, RemoteConfig, RemoteSource,
};
use crate::error::{DiceError, DiceResult};

/// A request for a main roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RollRequest {
    /// Number of ring dice.
    pub ring: usize,
    /// Number of skill dice.
    pub skill: usize,
    /// Where the draws come from.
    pub mode: EntropyMode,
}

impl RollRequest {
    /// A local request for `ring` ring dice and `skill` skill dice.
    pub fn new(ring: usize, skill: usize) -> Self {
        Self {
            ring,
            skill,
            mode: EntropyMode::Local,
        }
    }

    /// The same request with a different entropy mode.
    pub fn with_mode(mut self, mode: EntropyMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Which result sequence an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sequence {
    /// Dice from the main roll.
    Primary,
    /// Dice added after the main roll.
    Bonus,
}

impl Sequence {
    /// Parse "primary"/"main" or "bonus".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "primary" | "main" => Some(Self::Primary),
            "bonus" => Some(Self::Bonus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Bonus => write!(f, "bonus"),
        }
    }
}

/// The faces currently on the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RollResult {
    /// Ring faces followed by skill faces from the last main roll.
    pub primary: Vec<FaceLabel>,
    /// Bonus dice in the order they were added.
    pub bonus: Vec<FaceLabel>,
}

impl RollResult {
    /// The faces of one sequence.
    pub fn sequence(&self, sequence: Sequence) -> &[FaceLabel] {
        match sequence {
            Sequence::Primary => &self.primary,
            Sequence::Bonus => &self.bonus,
        }
    }

    fn sequence_mut(&mut self, sequence: Sequence) -> &mut Vec<FaceLabel> {
        match sequence {
            Sequence::Primary => &mut self.primary,
            Sequence::Bonus => &mut self.bonus,
        }
    }

    /// True when nothing has been rolled yet.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.bonus.is_empty()
    }

    /// Total number of dice across both sequences.
    pub fn count(&self) -> usize {
        self.primary.len() + self.bonus.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |faces: &[FaceLabel]| {
            faces
                .iter()
                .map(|face| face.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        };
        write!(f, "[{}]", join(&self.primary))?;
        if !self.bonus.is_empty() {
            write!(f, " + [{}]", join(&self.bonus))?;
        }
        Ok(())
    }
}

/// Combines entropy acquisition and face resolution for table actions.
#[derive(Debug)]
pub struct Roller<P = RemoteSource> {
    entropy: EntropySelector<P>,
}

impl Roller {
    /// A roller using the remote service described by `config`.
    pub fn remote(config: RemoteConfig, local: LocalSource) -> Self {
        Self::new(EntropySelector::remote(config, local))
    }
}

impl Default for Roller {
    fn default() -> Self {
        Self::new(EntropySelector::default())
    }
}

impl<P: EntropySource> Roller<P> {
    /// Wrap an entropy selector.
    pub fn new(entropy: EntropySelector<P>) -> Self {
        Self { entropy }
    }

    /// Roll `quantity` dice of one type as a single entropy batch.
    pub async fn roll(
        &mut self,
        die: DieType,
        quantity: usize,
        mode: EntropyMode,
    ) -> Vec<FaceLabel> {
        self.entropy
            .get_draws(quantity, mode)
            .await
            .into_iter()
            .map(|draw| resolve_face(draw, die))
            .collect()
    }

    /// Start a fresh roll: ring dice then skill dice into the primary
    /// sequence. Existing bonus dice are discarded.
    pub async fn roll_main(&mut self, result: &mut RollResult, request: &RollRequest) {
        result.bonus.clear();

        let ring = self.roll(DieType::Ring, request.ring, request.mode).await;
        let skill = self.roll(DieType::Skill, request.skill, request.mode).await;

        log::debug!("main roll - ring: {ring:?}, skill: {skill:?}");
        result.primary = ring.into_iter().chain(skill).collect();
    }

    /// Roll one die and append it to the bonus sequence.
    pub async fn add_bonus_die(
        &mut self,
        result: &mut RollResult,
        die: DieType,
        mode: EntropyMode,
    ) -> FaceLabel {
        let draw = self.entropy.get_draw(mode).await;
        let face = resolve_face(draw, die);
        log::debug!("bonus die - {face}");
        result.bonus.push(face);
        face
    }

    /// Reroll the die at `index` of `sequence` using the same die type.
    ///
    /// The index is checked before any entropy is acquired. Other entries
    /// keep their positions and values.
    pub async fn reroll_at(
        &mut self,
        result: &mut RollResult,
        sequence: Sequence,
        index: usize,
        mode: EntropyMode,
    ) -> DiceResult<FaceLabel> {
        let faces = result.sequence(sequence);
        let die = faces
            .get(index)
            .map(|face| face.die)
            .ok_or_else(|| DiceError::IndexOutOfRange {
                sequence: sequence.to_string(),
                index,
                len: faces.len(),
            })?;

        let draw = self.entropy.get_draw(mode).await;
        let face = resolve_face(draw, die);

        log::debug!("reroll {sequence}[{index}] - {face}");
        result.sequence_mut(sequence)[index] = face;
        Ok(face)
    }
}
