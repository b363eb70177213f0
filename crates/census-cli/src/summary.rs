use std::path::PathBuf;

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use census_core::RunSummary;
use census_map::MatchMethod;
use census_model::{ISSUE_HEADERS, IssueTable};

use crate::types::{ConvertReport, HeaderReport, HeaderStatus, NormalizeReport};

pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_normalize_summary(report: &NormalizeReport) {
    println!("Source: {}", report.source);
    print_outputs(&report.outputs);
    println!("{}", run_table(&report.summary));
    print_issue_table(&report.issues);
}

pub fn print_convert_summary(report: &ConvertReport) {
    println!("Source: {}", report.source);
    let mut company = Table::new();
    apply_table_style(&mut company);
    for (label, value) in report.metadata.entries() {
        let value = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        company.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value]);
    }
    println!("{company}");
    println!("{}", report.totals.summary_line());
    if report.outputs.is_empty() {
        println!("Layout: {} (dry run, not written)", report.file_name);
    }
    print_outputs(&report.outputs);
    println!("{}", run_table(&report.summary));
    print_issue_table(&report.issues);
}

pub fn print_headers(reports: &[HeaderReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source label"),
        header_cell("Cleaned"),
        header_cell("Field"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for report in reports {
        let field = match (report.field, report.status) {
            (Some(field), HeaderStatus::Mapped) => Cell::new(field.label())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            (Some(field), _) => dim_cell(format!("{} (superseded)", field.label())),
            (None, _) => dim_cell("ignored"),
        };
        let method = match report.method {
            Some(MatchMethod::Alias) => Cell::new("alias"),
            Some(MatchMethod::Heuristic) => Cell::new("heuristic").fg(Color::Yellow),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(report.index + 1),
            Cell::new(&report.label),
            Cell::new(&report.cleaned),
            field,
            method,
        ]);
    }
    println!("{table}");
}

fn print_outputs(outputs: &[PathBuf]) {
    for path in outputs {
        println!("Wrote: {}", path.display());
    }
}

fn run_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Issues"),
        header_cell("Mapped"),
        header_cell("Ignored"),
        header_cell("Missing fields"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let missing = if summary.missing_fields.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(summary.missing_fields.join(", ")).fg(Color::Yellow)
    };
    table.add_row(vec![
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
        count_cell(summary.issues, Color::Yellow),
        Cell::new(summary.mapped_columns),
        count_cell(summary.ignored_columns, Color::DarkGrey),
        missing,
    ]);
    table
}

/// The issues table as shown on the terminal, or nothing when clean.
pub fn issue_table(issues: &IssueTable) -> Option<Table> {
    if issues.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(ISSUE_HEADERS.map(header_cell).to_vec());
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.first_name),
            Cell::new(&issue.last_name),
            Cell::new(&issue.message).fg(Color::Yellow),
        ]);
    }
    Some(table)
}

fn print_issue_table(issues: &IssueTable) {
    if let Some(table) = issue_table(issues) {
        println!();
        println!("Issues:");
        println!("{table}");
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(20)),
        ]);
    }
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
