use crate::cli::context::Context;
use crate::core::store::open_for_read;
use crate::core::total::total;
use crate::core::validate::{Filter, read_entries};
use crate::errors::AppResult;
use crate::models::Timestamp;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::{bold, readable_duration};

/// Handle the `status` command (the default)
pub fn handle(ctx: &Context) -> AppResult<()> {
    let Some(file) = open_for_read(&ctx.path)? else {
        info(format!("No times file at {}", ctx.path.display()));
        return Ok(());
    };

    let scan = read_entries(file, Filter::All)?;

    if let Some(report) = &scan.report
        && !report.just_incomplete()
    {
        if ctx.strict {
            return Err(report.clone().into());
        }
        warning(report);
    }

    let Some(last) = scan.last() else {
        info(format!("No entries yet in {}", ctx.path.display()));
        return Ok(());
    };

    match &last.record {
        Ok(record) => match &record.end {
            None => {
                let running = record.start.until(&Timestamp::now());
                println!(
                    "{} since {} ({})",
                    bold("Running"),
                    record.start,
                    readable_duration(running)
                );
            }
            Some(end) => println!("{} since {}", bold("Stopped"), end),
        },
        Err(reason) => println!("{} last entry is invalid: {}", bold("Unknown:"), reason),
    }

    let closed = scan.records().filter(|r| r.is_closed()).count();
    let elapsed = total(scan.records())?;
    println!(
        "Total: {} over {} completed entries",
        readable_duration(elapsed),
        closed
    );

    Ok(())
}
