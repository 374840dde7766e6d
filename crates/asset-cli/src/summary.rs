use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use asset_model::{ColumnProfile, FieldDescriptor, Severity, ValidationReport};

use crate::types::ImportResult;

/// How validation findings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FindingsFormat {
    #[default]
    Table,
    Json,
}

pub fn print_import_summary(result: &ImportResult, format: FindingsFormat) {
    println!("File: {}", result.file.display());
    println!("{} rows detected", result.row_count);
    println!("{}", mapping_table(&result.columns));
    let mapping = &result.mapping;
    println!(
        "Required fields mapped: {}/{}",
        mapping.required_mapped, mapping.required_total
    );
    if !mapping.duplicate_targets.is_empty() {
        let keys: Vec<&str> = mapping.duplicate_targets.iter().map(|f| f.key()).collect();
        println!(
            "Mapped from more than one column (rightmost wins): {}",
            keys.join(", ")
        );
    }
    match format {
        FindingsFormat::Table => print_findings_table(&result.report),
        FindingsFormat::Json => match serde_json::to_string_pretty(&result.report.findings) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("error: failed to serialize findings: {error}"),
        },
    }
    if result.blocked {
        eprintln!(
            "Import blocked: {} error(s). Fix the mapping or the file and run again.",
            result.report.error_count()
        );
        return;
    }
    match &result.output {
        Some(path) => println!(
            "Imported {} record(s) -> {}",
            result.records.len(),
            path.display()
        ),
        None => println!("{} record(s) ready to import", result.records.len()),
    }
}

/// Column-to-field table with sample values.
pub fn mapping_table(columns: &[ColumnProfile]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Samples"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in columns {
        let samples = if column.sample_values.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(column.sample_values.join(", "))
        };
        let field = match column.mapped_to {
            Some(field) if field.is_required() => Cell::new(field.label())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            Some(field) => Cell::new(field.label()).fg(Color::Green),
            None => dim_cell("don't import"),
        };
        table.add_row(vec![
            Cell::new(column.index + 1),
            Cell::new(&column.name),
            samples,
            field,
        ]);
    }
    table
}

/// Table of findings, or a success line when there are none.
pub fn findings_table(report: &ValidationReport) -> Option<Table> {
    if report.is_clean() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for finding in &report.findings {
        let row = if finding.row == 0 {
            dim_cell("-")
        } else {
            Cell::new(finding.row)
        };
        table.add_row(vec![
            row,
            severity_cell(finding.severity),
            Cell::new(&finding.column),
            Cell::new(&finding.error),
        ]);
    }
    Some(table)
}

fn print_findings_table(report: &ValidationReport) {
    match findings_table(report) {
        Some(table) => {
            println!();
            println!(
                "Findings: {} error(s), {} warning(s)",
                report.error_count(),
                report.warning_count()
            );
            println!("{table}");
        }
        None => println!("Validation passed: no issues found"),
    }
}

/// Listing for the `fields` command.
pub fn fields_table(fields: &[FieldDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in fields {
        let required = if field.is_required() {
            Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(field.key.key()).fg(Color::Blue),
            Cell::new(field.label),
            required,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
