//! Conditioner command handlers: list, show, create, update, delete.

use dialoguer::Confirm;
use owo_colors::OwoColorize;
use tabled::Tabled;

use klima_core::{Conditioner, Console, DraftInput, validation};

use crate::cli::{DeleteArgs, DraftArgs, GlobalOpts, ListArgs, ShowArgs, UpdateArgs};
use crate::error::CliError;
use crate::output;

use super::{check_store_error, fetch_spinner};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConditionerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    unit_type: String,
    #[tabled(rename = "Manufacturer")]
    manufacturer: String,
}

fn row(console: &Console, c: &Conditioner) -> ConditionerRow {
    let store = console.store();
    ConditionerRow {
        id: c.id,
        name: c.name.clone().unwrap_or_default(),
        model: c.model.clone().unwrap_or_default(),
        serial: c.serial_number.clone().unwrap_or_default(),
        location: c.location.clone().unwrap_or_default(),
        status: store.status_name(c.status_id),
        unit_type: store.type_name(c.type_id),
        manufacturer: store
            .manufacturer(c.manufacturer_id)
            .map_or_else(|| "Unknown".into(), |m| m.name),
    }
}

fn detail(console: &Console, c: &Conditioner) -> String {
    let store = console.store();
    let manufacturer = store.manufacturer(c.manufacturer_id).map_or_else(
        || "Unknown".into(),
        |m| match m.country {
            Some(country) => format!("{} ({country})", m.name),
            None => m.name,
        },
    );

    let mut lines = vec![
        format!("ID:            {}", c.id),
        format!("Name:          {}", c.name.as_deref().unwrap_or("-")),
        format!("Model:         {}", c.model.as_deref().unwrap_or("-")),
        format!("Serial:        {}", c.serial_number.as_deref().unwrap_or("-")),
        format!("Location:      {}", c.location.as_deref().unwrap_or("-")),
        format!(
            "Installed:     {}",
            c.installation_date
                .map_or_else(|| "-".into(), |d| d.to_string())
        ),
        format!("Status:        {}", store.status_name(c.status_id)),
        format!("Type:          {}", store.type_name(c.type_id)),
        format!("Manufacturer:  {manufacturer}"),
    ];
    if let Some(created) = c.created_at {
        lines.push(format!("Created:       {created}"));
    }
    if let Some(updated) = c.updated_at {
        lines.push(format!("Updated:       {updated}"));
    }
    lines.join("\n")
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(
    console: &Console,
    args: ListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = fetch_spinner(global, "Loading conditioners...");
    console.ensure_lookups_loaded().await;
    console.ensure_loaded().await;
    spinner.finish_and_clear();
    check_store_error(console)?;

    // Route the flags through the shared filter state, so the printed view
    // is exactly the store's filtered view.
    console.store().update_filters(|f| {
        if let Some(search) = args.search {
            f.search = search;
        }
        if args.status.is_some() {
            f.status_id = args.status;
        }
        if args.type_id.is_some() {
            f.type_id = args.type_id;
        }
        if args.manufacturer.is_some() {
            f.manufacturer_id = args.manufacturer;
        }
    });

    let filtered = console.store().filtered();
    let out = output::render_list(
        &global.output,
        &filtered,
        |c| row(console, c),
        |c| c.id.to_string(),
    );
    output::print_output(&out, global.quiet);

    if !global.quiet && matches!(global.output, crate::cli::OutputFormat::Table) {
        let total = console.store().conditioners().len();
        eprintln!("{} of {} conditioner(s)", filtered.len(), total);
    }

    Ok(())
}

pub async fn show(
    console: &Console,
    args: ShowArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = fetch_spinner(global, "Loading conditioner...");
    console.ensure_lookups_loaded().await;
    let result = console.fetch_one(args.id).await;
    spinner.finish_and_clear();

    let conditioner = result?;
    let out = output::render_single(
        &global.output,
        &conditioner,
        |c| detail(console, c),
        |c| c.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn create(
    console: &Console,
    args: DraftArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let draft = validation::validate(&draft_input(args)).map_err(|e| CliError::validation(&e))?;

    let created = console.create(&draft).await?;
    announce(global, &format!("Conditioner created successfully (id {})", created.id));

    // Structured formats also get the created record itself.
    if !matches!(global.output, crate::cli::OutputFormat::Table) {
        let out = output::render_single(
            &global.output,
            &created,
            |c| detail(console, c),
            |c| c.id.to_string(),
        );
        output::print_output(&out, global.quiet);
    }
    Ok(())
}

pub async fn update(
    console: &Console,
    args: UpdateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let draft =
        validation::validate(&draft_input(args.draft)).map_err(|e| CliError::validation(&e))?;

    console.update(args.id, &draft).await?;
    announce(global, "Conditioner updated successfully");
    Ok(())
}

pub async fn delete(
    console: &Console,
    args: DeleteArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !global.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete conditioner {}?", args.id))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            if !global.quiet {
                eprintln!("Aborted.");
            }
            return Ok(());
        }
    }

    console.delete(args.id).await?;
    announce(global, "Conditioner deleted successfully");
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────

fn draft_input(args: DraftArgs) -> DraftInput {
    DraftInput {
        name: args.name.unwrap_or_default(),
        model: args.model.unwrap_or_default(),
        serial_number: args.serial_number.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        installation_date: args.installation_date.unwrap_or_default(),
        status_id: args.status,
        type_id: args.type_id,
        manufacturer_id: args.manufacturer,
    }
}

fn announce(global: &GlobalOpts, message: &str) {
    if global.quiet {
        return;
    }
    if output::should_color(&global.color) {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("✓ {message}");
    }
}
