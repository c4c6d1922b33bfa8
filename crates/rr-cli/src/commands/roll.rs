//! One-shot main roll.

use rr_dice::RollRequest;

use super::{Table, print_result};

/// Roll `ring` ring dice and `skill` skill dice and print the faces.
pub async fn run(mut table: Table, ring: usize, skill: usize, json: bool) -> Result<(), String> {
    let request = RollRequest::new(ring, skill).with_mode(table.mode());

    table.chime();
    table.roller.roll_main(&mut table.result, &request).await;

    if json {
        let out = serde_json::to_string_pretty(&table.result)
            .map_err(|e| format!("cannot encode result: {e}"))?;
        println!("{out}");
    } else {
        print_result(&table.result);
    }

    Ok(())
}
