//! Interactive dice table driven by line commands on stdin.

use tokio::io::{AsyncBufReadExt, BufReader};

use rr_dice::{DieType, RollRequest, Sequence};

use super::{Table, print_result};

const HELP: &str = "\
  roll [<ring> [<skill>]]      roll 1-5 ring dice and 0-5 skill dice (clears bonus dice)
  ring | skill                 add a bonus die
  reroll [primary|bonus] <i>   reroll the die at position i
  online on|off                use the remote randomness service
  sound on|off                 ring the bell on every roll
  show                         print the table
  help                         this text
  exit | quit                  leave the session";

/// A parsed session command.
#[derive(Debug, PartialEq)]
pub enum Action {
    Roll(Option<(usize, usize)>),
    Bonus(DieType),
    Reroll(Sequence, usize),
    Online(bool),
    Sound(bool),
    Show,
    Help,
    Exit,
}

fn parse_count(value: &str, min: usize, name: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| (min..=5).contains(n))
        .ok_or_else(|| format!("{name} dice must be between {min} and 5, got '{value}'"))
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(format!("expected on or off, got '{other}'")),
    }
}

fn parse_index(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("invalid position '{value}'"))
}

impl Action {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let parts = line.split_whitespace().collect::<Vec<&str>>();

        let action = match parts[..] {
            [] => return Ok(None),
            ["roll"] => Action::Roll(None),
            ["roll", ring] => Action::Roll(Some((parse_count(ring, 1, "ring")?, 0))),
            ["roll", ring, skill] => Action::Roll(Some((
                parse_count(ring, 1, "ring")?,
                parse_count(skill, 0, "skill")?,
            ))),
            ["ring" | "d6"] => Action::Bonus(DieType::Ring),
            ["skill" | "d12"] => Action::Bonus(DieType::Skill),
            ["reroll", index] => Action::Reroll(Sequence::Primary, parse_index(index)?),
            ["reroll", sequence, index] => {
                let sequence = Sequence::from_str_tag(sequence)
                    .ok_or_else(|| format!("unknown sequence '{sequence}'"))?;
                Action::Reroll(sequence, parse_index(index)?)
            }
            ["online", value] => Action::Online(parse_switch(value)?),
            ["sound", value] => Action::Sound(parse_switch(value)?),
            ["show"] => Action::Show,
            ["help"] => Action::Help,
            ["exit" | "quit"] => Action::Exit,
            _ => return Err(format!("unknown command '{}'", line.trim())),
        };

        Ok(Some(action))
    }
}

/// Current dice selection for the next main roll.
struct Selection {
    ring: usize,
    skill: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self { ring: 1, skill: 0 }
    }
}

/// Apply one action. Returns `false` when the session should end.
async fn apply(
    table: &mut Table,
    selection: &mut Selection,
    action: Action,
) -> Result<bool, String> {
    let mode = table.mode();

    match action {
        Action::Roll(counts) => {
            if let Some((ring, skill)) = counts {
                *selection = Selection { ring, skill };
            }
            let request = RollRequest::new(selection.ring, selection.skill).with_mode(mode);
            table.chime();
            table.roller.roll_main(&mut table.result, &request).await;
        }
        Action::Bonus(die) => {
            table.chime();
            table.roller.add_bonus_die(&mut table.result, die, mode).await;
        }
        Action::Reroll(sequence, index) => {
            table
                .roller
                .reroll_at(&mut table.result, sequence, index, mode)
                .await
                .map_err(|e| e.to_string())?;
            table.chime();
        }
        Action::Online(on) => {
            table.online = on;
            println!("  online: {}", if on { "on" } else { "off" });
            return Ok(true);
        }
        Action::Sound(on) => {
            table.sound = on;
            println!("  sound: {}", if on { "on" } else { "off" });
            return Ok(true);
        }
        Action::Show => {}
        Action::Help => {
            println!("{HELP}");
            return Ok(true);
        }
        Action::Exit => return Ok(false),
    }

    print_result(&table.result);
    Ok(true)
}

/// Read actions from stdin until `exit` or end of input.
pub async fn run(mut table: Table) -> Result<(), String> {
    println!("ringroll session, type 'help' for commands");

    let mut selection = Selection::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| format!("cannot read input: {e}"))?
    {
        let action = match Action::parse(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match apply(&mut table, &mut selection, action).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
