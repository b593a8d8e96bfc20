use std::fs;

use super::{booking_file, resolve_today};
use crate::cli::parser::{Cli, Commands};
use crate::core::input::ReconciliationInput;
use crate::core::sequencer::fill_week;
use crate::driver::script::ScriptDriver;
use crate::errors::AppResult;
use crate::models::row::RemoteRowLabel;
use crate::ui::messages;

pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    let Commands::Plan { rows, out } = cmd else {
        return Ok(());
    };

    let today = resolve_today(cli)?;
    let path = booking_file(cli);

    let Some(input) = ReconciliationInput::resolve(&path, today) else {
        messages::info("No data to book. Exiting...");
        return Ok(());
    };

    let labels = match rows {
        Some(rows_file) => {
            let cells: Vec<String> = serde_json::from_str(&fs::read_to_string(rows_file)?)?;
            RemoteRowLabel::pair_cells(&cells)
        }
        // without a scraped layout, assume one row per booking in list order
        None => input
            .store
            .entries()
            .iter()
            .enumerate()
            .map(|(k, e)| RemoteRowLabel {
                row_index: k,
                project: e.project.clone(),
                task: e.task.clone(),
            })
            .collect(),
    };

    let mut driver = ScriptDriver::new(labels);
    let report = fill_week(&mut driver, &input.store, &input.week)?;

    match out {
        Some(out_file) => {
            fs::write(out_file, serde_json::to_string_pretty(driver.ops())?)?;
            messages::success(format!("Write script saved to {out_file}"));
        }
        None => {
            for op in driver.ops() {
                println!("{op}");
            }
        }
    }

    messages::success(format!(
        "Planned {} day(s) on {} row(s), {} skipped",
        report.written_days, report.matched_rows, report.skipped_days
    ));
    Ok(())
}
