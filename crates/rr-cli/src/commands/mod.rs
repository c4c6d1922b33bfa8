pub mod roll;
pub mod session;

use colored::Colorize;

use rr_dice::{DieType, EntropyMode, FaceLabel, LocalSource, RemoteConfig, RollResult, Roller};

/// Everything a dice table needs between actions: the roller, the faces on
/// the table, and the two toggles.
pub struct Table {
    pub roller: Roller,
    pub result: RollResult,
    pub online: bool,
    pub sound: bool,
}

impl Table {
    pub fn new(config: RemoteConfig, seed: Option<u64>, online: bool, sound: bool) -> Self {
        let local = seed.map_or_else(LocalSource::new, LocalSource::seeded);
        Self {
            roller: Roller::remote(config, local),
            result: RollResult::default(),
            online,
            sound,
        }
    }

    pub fn mode(&self) -> EntropyMode {
        EntropyMode::from_online(self.online)
    }

    /// Audible cue for a roll action, when sound is on.
    pub fn chime(&self) {
        if self.sound {
            print!("\x07");
        }
    }
}

/// Colour a face by die type.
fn render_face(face: &FaceLabel) -> String {
    let text = face.to_string();
    match face.die {
        DieType::Ring => text.yellow().to_string(),
        DieType::Skill => text.cyan().to_string(),
    }
}

/// One sequence as "name: [0] face  [1] face", or "(none)" when empty.
fn render_sequence(name: &str, faces: &[FaceLabel]) -> String {
    let body = if faces.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        faces
            .iter()
            .enumerate()
            .map(|(i, face)| format!("{} {}", format!("[{i}]").dimmed(), render_face(face)))
            .collect::<Vec<_>>()
            .join("  ")
    };
    format!("  {} {body}", format!("{name}:").bold())
}

/// Print both result sequences.
pub fn print_result(result: &RollResult) {
    println!("{}", render_sequence("primary", &result.primary));
    println!("{}", render_sequence("bonus", &result.bonus));
}
