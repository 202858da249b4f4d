//! Human-readable output for the subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use visa_generate::RunSummary;
use visa_model::{
    COUNTRIES, EntryRule, VisaRule, flag_emoji, visa_category_label, visa_type_label,
};
use visa_rules::GuideResponse;

pub fn print_generate_summary(summary: &RunSummary, dry_run: bool) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Destination"),
        header_cell("Matrix entries"),
        header_cell(if dry_run { "Would change" } else { "Changed" }),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    for outcome in &summary.outcomes {
        table.add_row(vec![
            Cell::new(format!(
                "{} {}",
                flag_emoji(&outcome.destination),
                outcome.destination
            )),
            Cell::new(outcome.matrix_entries),
            changed_cell(outcome.modified),
        ]);
    }
    println!("{table}");

    if dry_run {
        println!(
            "Would update {}/{} destination rule files.",
            summary.updated(),
            summary.total()
        );
    } else {
        println!(
            "Updated {}/{} destination rule files.",
            summary.updated(),
            summary.total()
        );
    }
}

pub fn print_guide(response: &GuideResponse<'_>) {
    let (Some(citizenship), Some(destination)) = (&response.citizenship, &response.destination)
    else {
        println!("Both a citizenship and a destination are required.");
        return;
    };

    println!(
        "{} {} -> {} {} ({})",
        flag_emoji(citizenship),
        citizenship,
        flag_emoji(destination),
        destination,
        response.purpose
    );

    match response.rule {
        Some(rule) => print_entry_rule(rule, response.stay_days),
        None => println!("No curated entry rule found for this route."),
    }
    if let Some(rule) = response.visa_matrix_rule {
        print_matrix_rule("Dataset matrix", rule);
    } else if response.missing_data {
        println!("No dataset coverage for this route either.");
    }

    if let Some(transit) = &response.transit {
        println!();
        match response.transit_hours {
            Some(hours) => println!(
                "Transit via {} {} ({hours}h layover):",
                flag_emoji(transit),
                transit
            ),
            None => println!("Transit via {} {}:", flag_emoji(transit), transit),
        }
        match response.transit_rule {
            Some(rule) => print_entry_rule(rule, None),
            None => println!("No curated transit rule found."),
        }
        if let Some(rule) = response.transit_visa_matrix_rule {
            print_matrix_rule("Dataset matrix", rule);
        }
    }
}

fn print_entry_rule(rule: &EntryRule, stay_days: Option<u32>) {
    let mut table = Table::new();
    apply_table_style(&mut table);

    table.add_row(vec![
        header_cell("Visa"),
        Cell::new(visa_type_label(Some(rule.visa_type))),
    ]);
    if let Some(max_stay) = rule.max_stay_days {
        let mut stay = format!("up to {max_stay} days");
        if let Some(planned) = stay_days
            && planned > max_stay
        {
            stay.push_str(&format!(" (planned stay of {planned} days exceeds this)"));
        }
        table.add_row(vec![header_cell("Max stay"), Cell::new(stay)]);
    }
    table.add_row(vec![
        header_cell("Last updated"),
        Cell::new(rule.last_updated),
    ]);
    if !rule.sources.is_empty() {
        table.add_row(vec![
            header_cell("Sources"),
            Cell::new(rule.sources.join("\n")),
        ]);
    }
    println!("{table}");

    if !rule.requirements.is_empty() {
        let mut requirements = Table::new();
        requirements.set_header(vec![
            header_cell("Requirement"),
            header_cell("Category"),
            header_cell("Details"),
        ]);
        apply_table_style(&mut requirements);
        for requirement in &rule.requirements {
            requirements.add_row(vec![
                Cell::new(&requirement.title),
                Cell::new(format!("{:?}", requirement.category).to_lowercase()),
                Cell::new(&requirement.details),
            ]);
        }
        println!("{requirements}");
    }
}

fn print_matrix_rule(label: &str, rule: &VisaRule) {
    let mut line = format!("{label}: {}", visa_category_label(Some(rule.category)));
    if let Some(days) = rule.max_stay_days {
        line.push_str(&format!(", up to {days} days"));
    }
    if let Some(raw) = &rule.raw {
        line.push_str(&format!(" (dataset says: {raw:?})"));
    }
    println!("{line}");
}

pub fn print_countries() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Flag"),
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Region"),
    ]);
    apply_table_style(&mut table);

    for country in COUNTRIES {
        table.add_row(vec![
            Cell::new(flag_emoji(country.code)),
            Cell::new(country.code),
            Cell::new(country.name),
            Cell::new(country.region),
        ]);
    }
    println!("{table}");
    println!("{} countries known.", COUNTRIES.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn changed_cell(modified: bool) -> Cell {
    if modified {
        Cell::new("yes")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}
