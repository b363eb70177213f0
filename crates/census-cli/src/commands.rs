use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use census_core::{CensusSource, IngestOptions, NormalizationResult, normalize_and_validate_with};
use census_ingest::load_source;
use census_map::{
    HEADER_ALIASES, HEURISTIC_RULES, clean_header_label, resolve_columns, resolve_header,
};
use census_model::SheetMetadata;
use census_output::{
    CarrierLayout, CsvLayoutWriter, ISSUES_FILE_NAME, LayoutWriter, NORMALIZED_FILE_NAME,
    output_file_name, project_carrier, write_census_file, write_issues_file, write_layout_file,
};

use crate::cli::{ConvertArgs, NormalizeArgs, OutputArgs, SourceArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::{ConvertReport, HeaderReport, HeaderStatus, NormalizeReport};

/// Settings for one carrier conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub ingest: IngestOptions,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    /// Non-empty fields replace what the sheet's fixed cells hold.
    pub overrides: SheetMetadata,
    /// Date stamped into the layout file name.
    pub run_date: NaiveDate,
}

impl ConvertOptions {
    pub fn new(run_date: NaiveDate) -> Self {
        Self {
            ingest: IngestOptions::default(),
            output_dir: PathBuf::from("."),
            dry_run: false,
            overrides: SheetMetadata::default(),
            run_date,
        }
    }

    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: SheetMetadata) -> Self {
        self.overrides = overrides;
        self
    }
}

pub fn ingest_options(args: &SourceArgs) -> IngestOptions {
    let options = IngestOptions::default().with_header_row(args.header_row);
    match args.first_data_row {
        Some(row) => options.with_first_data_row(row),
        None => options,
    }
}

fn output_dir(args: &OutputArgs) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output directory {}", dir.display()))
}

fn normalize_input(path: &Path, ingest: &IngestOptions) -> Result<NormalizationResult> {
    normalize_and_validate_with(CensusSource::path(path), ingest)
        .with_context(|| format!("normalize {}", path.display()))
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeReport> {
    let dir = (!args.output.dry_run).then(|| output_dir(&args.output));
    normalize(&args.source.input, &ingest_options(&args.source), dir.as_deref())
}

/// Normalize a census file; write the canonical and issues tables into
/// `output_dir` when one is given.
pub fn normalize(
    input: &Path,
    ingest: &IngestOptions,
    output_dir: Option<&Path>,
) -> Result<NormalizeReport> {
    let result = normalize_input(input, ingest)?;
    let mut outputs = Vec::new();
    if let Some(dir) = output_dir {
        ensure_output_dir(dir)?;
        let normalized = dir.join(NORMALIZED_FILE_NAME);
        write_census_file(&result.table, &normalized)
            .with_context(|| format!("write {}", normalized.display()))?;
        outputs.push(normalized);
        let issues = dir.join(ISSUES_FILE_NAME);
        write_issues_file(&result.issues, &issues)
            .with_context(|| format!("write {}", issues.display()))?;
        outputs.push(issues);
    }
    info!(
        rows = result.table.len(),
        issues = result.issues.len(),
        files = outputs.len(),
        "normalize complete"
    );
    Ok(NormalizeReport {
        source: input.display().to_string(),
        summary: result.summary(),
        issues: result.issues,
        outputs,
    })
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertReport> {
    let overrides = SheetMetadata {
        company: args.company.clone().unwrap_or_default(),
        address: args.address.clone().unwrap_or_default(),
        fein: args.fein.clone().unwrap_or_default(),
        sic: args.sic.clone().unwrap_or_default(),
    };
    let options = ConvertOptions::new(chrono::Local::now().date_naive())
        .with_ingest(ingest_options(&args.source))
        .with_output_dir(output_dir(&args.output))
        .with_dry_run(args.output.dry_run)
        .with_overrides(overrides);
    convert(&args.source.input, &options)
}

/// Normalize a census file and render the carrier layout.
pub fn convert(input: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let result = normalize_input(input, &options.ingest)?;
    let metadata = result.metadata.clone().merged_with(&options.overrides);
    let projection = project_carrier(&result.table);
    let layout = CarrierLayout::build(&metadata, &projection);
    let writer = CsvLayoutWriter;
    let file_name = output_file_name(&metadata.company, options.run_date, writer.extension());

    let mut outputs = Vec::new();
    if !options.dry_run {
        ensure_output_dir(&options.output_dir)?;
        let layout_path = options.output_dir.join(&file_name);
        write_layout_file(&writer, &layout, &layout_path)
            .with_context(|| format!("write {}", layout_path.display()))?;
        outputs.push(layout_path);
        let issues = options.output_dir.join(ISSUES_FILE_NAME);
        write_issues_file(&result.issues, &issues)
            .with_context(|| format!("write {}", issues.display()))?;
        outputs.push(issues);
    }
    info!(
        rows = projection.table.len(),
        employees = projection.totals.total_employees,
        enrolled = projection.totals.total_enrolled,
        dry_run = options.dry_run,
        "convert complete"
    );
    Ok(ConvertReport {
        source: input.display().to_string(),
        summary: result.summary(),
        metadata,
        totals: projection.totals,
        carrier_rows: projection.table.len(),
        file_name,
        issues: result.issues,
        outputs,
    })
}

pub fn run_headers(args: &SourceArgs) -> Result<Vec<HeaderReport>> {
    let loaded = load_source(CensusSource::path(&args.input), &ingest_options(args))
        .with_context(|| format!("load {}", args.input.display()))?;
    Ok(header_reports(&loaded.table.headers))
}

/// Per-column resolution, including columns that lose to a later duplicate.
pub fn header_reports(headers: &[String]) -> Vec<HeaderReport> {
    let mapping = resolve_columns(headers);
    headers
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let resolved = resolve_header(label);
            let status = match resolved {
                None => HeaderStatus::Ignored,
                Some(_) if mapping.assignments.iter().any(|a| a.index == index) => {
                    HeaderStatus::Mapped
                }
                Some(_) => HeaderStatus::Superseded,
            };
            HeaderReport {
                index,
                label: label.clone(),
                cleaned: clean_header_label(label),
                field: resolved.map(|(field, _)| field),
                method: resolved.map(|(_, method)| method),
                status,
            }
        })
        .collect()
}

pub fn run_aliases() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source label"), header_cell("Field")]);
    apply_table_style(&mut table);
    for (label, field) in HEADER_ALIASES {
        table.add_row(vec![(*label).to_string(), field.label().to_string()]);
    }
    println!("{table}");

    let mut rules = Table::new();
    rules.set_header(vec![
        header_cell("#"),
        header_cell("Fallback rule"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut rules);
    align_column(&mut rules, 0, CellAlignment::Right);
    for (position, rule) in HEURISTIC_RULES.iter().enumerate() {
        rules.add_row(vec![
            Cell::new(position + 1),
            Cell::new(rule.name),
            dim_cell(rule.target.label()),
        ]);
    }
    println!("{rules}");
    Ok(())
}
