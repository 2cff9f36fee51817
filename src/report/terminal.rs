use anyhow::Result;
use chrono::Local;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::formatter::Formatter;
use crate::models::{FormattedMetadata, NormalizedCondition, NormalizedSpecification};

/// Render normalized sections as colored tables. Empty sections are left out.
pub fn render(md: &FormattedMetadata, formatter: &Formatter, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "Conditions: {}  Limitations: {}  Specifications: {}  Skipped: {}",
            md.conditions.len(),
            md.limitations.len(),
            md.specifications.len(),
            if md.skipped > 0 {
                md.skipped.to_string().red()
            } else {
                md.skipped.to_string().green()
            },
        );
        return Ok(());
    }

    println!(
        "\n {} v{}  [{}, {}]",
        "isogeo-formatter".bold(),
        env!("CARGO_PKG_VERSION"),
        formatter.locale().locale,
        formatter.mode()
    );
    println!(
        " {}\n",
        formatter.format_datetime(&Local::now().naive_local()).dimmed()
    );

    if !md.title.is_empty() {
        println!(" {}\n", md.title.bold());
    }
    if let Some(abstract_text) = &md.abstract_text {
        println!(" {}\n", abstract_text);
    }

    if !md.conditions.is_empty() {
        println!(" {} Conditions\n", "[CGU]".cyan().bold());
        render_conditions(&md.conditions);
        println!();
    }

    if !md.limitations.is_empty() {
        println!(" {} Limitations\n", "[LIM]".yellow().bold());
        render_limitations(&md.limitations);
        println!();
    }

    if !md.specifications.is_empty() {
        println!(" {} Specifications\n", "[SPEC]".green().bold());
        render_specifications(&md.specifications);
        println!();
    }

    if md.skipped > 0 {
        println!(
            " {} {} record(s) skipped, see log output\n",
            "⚠".yellow(),
            md.skipped
        );
    }

    Ok(())
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Grey placeholder for a missing or empty value.
fn optional_cell(value: Option<&str>, color: Color) -> Cell {
    match value {
        Some(v) if !v.is_empty() => Cell::new(v).fg(color),
        _ => Cell::new("—").fg(Color::DarkGrey),
    }
}

fn render_conditions(conditions: &[NormalizedCondition]) {
    let mut table = new_table();
    table.set_header(header(&["Description", "License", "Link"]));

    for condition in conditions {
        table.add_row(vec![
            Cell::new(&condition.description),
            optional_cell(condition.name.as_deref(), Color::Reset),
            optional_cell(condition.link.as_deref(), Color::Blue),
        ]);
    }

    println!("{}", table);
}

fn render_limitations(limitations: &[String]) {
    let mut table = new_table();
    table.set_header(header(&["#", "Limitation"]));

    for (i, limitation) in limitations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(limitation.trim_end()),
        ]);
    }

    println!("{}", table);
}

fn render_specifications(specifications: &[NormalizedSpecification]) {
    let mut table = new_table();
    table.set_header(header(&["Conformity", "Specification", "Link", "Published"]));

    for spec in specifications {
        table.add_row(vec![
            Cell::new(&spec.conformant),
            Cell::new(&spec.name),
            optional_cell(Some(spec.link.as_str()), Color::Blue),
            optional_cell(Some(spec.published.as_str()), Color::Reset).set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}
