use std::fs;

use serde_json::Value;

use super::{booking_file, resolve_today};
use crate::cli::parser::{Cli, Commands};
use crate::core::convert::convert_export;
use crate::errors::{AppError, AppResult};
use crate::models::booking::BookingEntry;
use crate::ui::messages;

pub fn handle(cli: &Cli, cmd: &Commands) -> AppResult<()> {
    let Commands::Convert { out } = cmd else {
        return Ok(());
    };

    let today = resolve_today(cli)?;
    let path = booking_file(cli);

    let text = fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&text)?;

    let entries: Vec<BookingEntry> = match value {
        Value::Array(_) => {
            messages::info("Input is already in canonical form");
            serde_json::from_value(value)?
        }
        Value::Object(map) => convert_export(&map, today)?,
        _ => {
            return Err(AppError::Other(
                "booking input is neither an array nor an export object".to_string(),
            ));
        }
    };

    if entries.is_empty() {
        messages::info("No data to book. Exiting...");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&entries)?;
    match out {
        Some(out_file) => {
            fs::write(out_file, json)?;
            messages::success(format!("Canonical bookings saved to {out_file}"));
        }
        None => println!("{json}"),
    }
    Ok(())
}
