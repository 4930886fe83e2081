use crate::cli::context::Context;
use crate::core::store::open_for_read;
use crate::core::validate::{Entry, Filter, read_entries};
use crate::errors::AppResult;
use crate::models::{Record, Timestamp};
use crate::ui::messages::info;
use crate::utils::formatting::{pad_right, readable_duration};
use ansi_term::Colour;

/// Handle the `list` command
pub fn handle(ctx: &Context) -> AppResult<()> {
    let Some(file) = open_for_read(&ctx.path)? else {
        info(format!("No times file at {}", ctx.path.display()));
        return Ok(());
    };

    let scan = read_entries(file, Filter::All)?;

    if let Some(report) = &scan.report
        && ctx.strict
        && !report.just_incomplete()
    {
        return Err(report.clone().into());
    }

    if scan.entries.is_empty() {
        info(format!("No entries yet in {}", ctx.path.display()));
        return Ok(());
    }

    let line_w = scan
        .entries
        .iter()
        .map(|e| e.line.to_string().len())
        .max()
        .unwrap_or(1);
    let stamp_w = scan
        .records()
        .map(|r| r.start.as_str().len())
        .max()
        .unwrap_or(0);

    for entry in &scan.entries {
        println!("{:>line_w$}: {}", entry.line, describe(entry, stamp_w), line_w = line_w);
    }

    Ok(())
}

fn describe(entry: &Entry, stamp_w: usize) -> String {
    match &entry.record {
        Ok(Record {
            start,
            end: Some(end),
        }) => format!(
            "{} → {} | {}",
            pad_right(start.as_str(), stamp_w),
            pad_right(end.as_str(), stamp_w),
            readable_duration(start.until(end))
        ),
        Ok(Record { start, end: None }) => {
            let running = readable_duration(start.until(&Timestamp::now()));
            format!(
                "{} → {} | {}",
                pad_right(start.as_str(), stamp_w),
                Colour::Yellow.paint(pad_right("running", stamp_w)),
                Colour::Yellow.paint(running)
            )
        }
        Err(reason) => Colour::Red
            .paint(format!("invalid entry ({})", reason))
            .to_string(),
    }
}
