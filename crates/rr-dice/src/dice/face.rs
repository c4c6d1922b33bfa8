//! Mapping a uniform draw onto a die face.

use super::{DieType, FaceLabel};
use crate::entropy::Draw;

/// Resolve a draw to a face of the given die.
///
/// The slot is `floor(draw * slots)`, capped at the last slot so rounding
/// near 1.0 can never index past the table.
pub fn resolve_face(draw: Draw, die: DieType) -> FaceLabel {
    let slots = die.slots();
    let last = slots.len() - 1;
    let index = ((draw.value() * slots.len() as f64).floor() as usize).min(last);
    FaceLabel {
        die,
        face: slots[index],
    }
}
