use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use gid_map::{ConfidenceLevel, ConfidenceThresholds};
use gid_model::{
    ElementProfile, MappingReport, MatchResult, PhaseComparison, Prescription, PrescriptionMatch,
    PrescriptionRecord, ProjectPhase, group_by_category,
};

pub fn print_phases() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Phase"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for phase in ProjectPhase::ALL {
        table.add_row(vec![
            code_cell(phase.code()),
            Cell::new(phase.name()),
            Cell::new(phase.description()),
        ]);
    }
    println!("{table}");
}

/// Dataset elements with their prescription counts.
pub fn print_elements(rows: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Element"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (element, count) in rows {
        table.add_row(vec![Cell::new(element), Cell::new(count)]);
    }
    println!("{table}");
    println!("{} element(s)", rows.len());
}

pub fn print_catalog(profiles: &[&ElementProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Element"),
        header_cell("Group"),
        header_cell("IFC class"),
        header_cell("Property set"),
        header_cell("Properties"),
    ]);
    apply_table_style(&mut table);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(profile.name),
            dim_cell(profile.group),
            code_cell(profile.ifc_class),
            Cell::new(profile.pset),
            Cell::new(profile.properties.join(", ")),
        ]);
    }
    println!("{table}");
    println!("{} element(s)", profiles.len());
}

pub fn print_prescriptions(element: &str, phase: ProjectPhase, prescriptions: &[Prescription]) {
    println!("Element: {element}");
    println!("Phase: {} ({})", phase.code(), phase.name());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("ID"),
        header_cell("Phase"),
        header_cell("Document"),
        header_cell("Property"),
        header_cell("IFC reference"),
        header_cell("Revit parameter"),
        header_cell("IFC type"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (category, group) in group_by_category(prescriptions) {
        for (position, prescription) in group.into_iter().enumerate() {
            let record = &prescription.record;
            table.add_row(vec![
                category_cell(category, position),
                dim_cell(&prescription.id),
                Cell::new(&record.phase),
                Cell::new(&record.document_type),
                Cell::new(&record.property),
                text_or_dash(&record.ifc_reference),
                code_cell(&record.revit_param),
                text_or_dash(&record.ifc_type),
            ]);
        }
    }
    println!("{table}");
    println!("{} prescription(s)", prescriptions.len());
}

pub fn print_comparison(comparison: &PhaseComparison) {
    println!("Element: {}", comparison.element);
    println!(
        "Phases: {} -> {}",
        comparison.from.code(),
        comparison.to.code()
    );
    print_comparison_section("Common", &comparison.common, Color::Green);
    print_comparison_section(
        &format!("New in {}", comparison.to.code()),
        &comparison.added,
        Color::Blue,
    );
    print_comparison_section(
        &format!("Removed in {}", comparison.to.code()),
        &comparison.removed,
        Color::Red,
    );
    if comparison.is_unchanged() {
        println!("No change between the two phases");
    }
}

fn print_comparison_section(title: &str, records: &[PrescriptionRecord], color: Color) {
    println!();
    println!("{title} ({})", records.len());
    if records.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Property"),
        header_cell("IFC reference"),
        header_cell("Revit parameter"),
        header_cell("Phase"),
    ]);
    apply_wide_table_style(&mut table);
    for (category, group) in group_by_category(records) {
        for (position, record) in group.into_iter().enumerate() {
            table.add_row(vec![
                category_cell(category, position),
                Cell::new(&record.property).fg(color),
                text_or_dash(&record.ifc_reference),
                code_cell(&record.revit_param),
                dim_cell(&record.phase),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_report(profile: &ElementProfile, report: &MappingReport) {
    println!("Category: {} ({})", profile.name, profile.ifc_class);
    println!("Property set: {}", profile.pset);
    let thresholds = ConfidenceThresholds::default();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("IFC property"),
        header_cell("Confidence"),
        header_cell("Source"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in report {
        table.add_row(vec![
            Cell::new(&row.input_label),
            matched_cell(row.matched_label.as_deref()),
            confidence_cell(row, &thresholds),
            dim_cell(row.source.as_str()),
        ]);
    }
    println!("{table}");
    print_totals(report.matched_count(), report.len());
    for (level, count) in thresholds.count_by_level(report).iter().rev() {
        println!("  {count} {}", level.description());
    }
}

pub fn print_prescription_matches(element: &str, phase: ProjectPhase, matches: &[PrescriptionMatch]) {
    println!("Element: {element}");
    println!("Phase: {} ({})", phase.code(), phase.name());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Revit parameter"),
        header_cell("Property"),
        header_cell("IFC reference"),
        header_cell("Document"),
        header_cell("Confidence"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for entry in matches {
        let (official, property, reference, document) = if entry.matched {
            (
                code_cell(&entry.official_revit_param),
                Cell::new(&entry.property),
                text_or_dash(&entry.ifc_reference),
                text_or_dash(&entry.document_type),
            )
        } else {
            (unmatched_cell(), dim_cell("-"), dim_cell("-"), dim_cell("-"))
        };
        table.add_row(vec![
            Cell::new(&entry.input),
            official,
            property,
            reference,
            document,
            percent_cell(entry.matched, entry.confidence, None),
        ]);
    }
    println!("{table}");
    let matched = matches.iter().filter(|m| m.matched).count();
    print_totals(matched, matches.len());
}

fn print_totals(matched: usize, total: usize) {
    println!("{matched}/{total} matched");
    if matched < total {
        eprintln!("{} parameter(s) left unmatched", total - matched);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(row: &MatchResult, thresholds: &ConfidenceThresholds) -> Cell {
    percent_cell(row.matched, row.confidence, thresholds.categorize(row))
}

fn percent_cell(matched: bool, confidence: f64, level: Option<ConfidenceLevel>) -> Cell {
    if !matched {
        return dim_cell("-");
    }
    let cell = Cell::new(format!("{:.0}%", confidence * 100.0));
    match level {
        Some(ConfidenceLevel::High) => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        Some(ConfidenceLevel::Medium) => cell.fg(Color::Yellow),
        Some(ConfidenceLevel::Low) => cell.fg(Color::Red),
        None => cell,
    }
}

fn matched_cell(label: Option<&str>) -> Cell {
    match label {
        Some(label) => code_cell(label),
        None => unmatched_cell(),
    }
}

fn unmatched_cell() -> Cell {
    Cell::new("no match").fg(Color::Red)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

/// Category name on the first row of its group only.
fn category_cell(category: &str, position: usize) -> Cell {
    if position == 0 {
        Cell::new(category).add_attribute(Attribute::Bold)
    } else {
        Cell::new("")
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
