use std::io::Write;

use clap::Args;

use crate::filtering::known_filters;
use crate::formatting::known_formatters;

#[derive(Args)]
pub struct ListArgs {
    /// Print as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_listing(&args, &mut stdout)?;
    Ok(())
}

fn write_listing(args: &ListArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let filters = known_filters();
    let formatters = known_formatters();

    if args.json {
        let output = serde_json::json!({
            "filters": filters,
            "formatters": formatters,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "Filters:")?;
        for name in &filters {
            writeln!(out, "  {name}")?;
        }
        writeln!(out, "Formatters:")?;
        for name in &formatters {
            writeln!(out, "  {name}")?;
        }
    }

    Ok(())
}
