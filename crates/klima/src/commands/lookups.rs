//! Reference-data command handlers: statuses, types, manufacturers.

use tabled::Tabled;

use klima_core::Console;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::{check_store_error, fetch_spinner};

#[derive(Tabled)]
struct LookupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct ManufacturerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    country: String,
}

async fn load(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = fetch_spinner(global, "Loading reference data...");
    console.ensure_lookups_loaded().await;
    spinner.finish_and_clear();
    check_store_error(console)
}

pub async fn statuses(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    load(console, global).await?;

    let bundle = console.store().lookups();
    let out = output::render_list(
        &global.output,
        &bundle.statuses,
        |s| LookupRow {
            id: s.id,
            name: s.name.clone(),
        },
        |s| s.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn types(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    load(console, global).await?;

    let bundle = console.store().lookups();
    let out = output::render_list(
        &global.output,
        &bundle.types,
        |t| LookupRow {
            id: t.id,
            name: t.name.clone(),
        },
        |t| t.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn manufacturers(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    load(console, global).await?;

    let bundle = console.store().lookups();
    let out = output::render_list(
        &global.output,
        &bundle.manufacturers,
        |m| ManufacturerRow {
            id: m.id,
            name: m.name.clone(),
            country: m.country.clone().unwrap_or_default(),
        },
        |m| m.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
