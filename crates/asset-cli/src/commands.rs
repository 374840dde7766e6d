use std::fs;

use anyhow::{Context, Result};
use asset_cli::logging::redact_value;
use asset_cli::summary::fields_table;
use asset_cli::types::ImportResult;
use asset_core::{ImportOptions, ImportSession};
use asset_ingest::write_template;
use asset_model::all_fields;
use tracing::{debug, info, info_span};

use crate::cli::{ImportArgs, TemplateArgs};

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let span = info_span!("import", file = %args.file.display());
    let _guard = span.enter();

    let options = ImportOptions::default().with_auto_map(!args.no_auto_map);
    let mut session = ImportSession::new(options);
    session
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;

    for column in session.columns() {
        for value in &column.sample_values {
            debug!(column = %column.name, sample = redact_value(value), "sample value");
        }
    }

    for mapping in &args.map {
        session
            .set_mapping_by_name(&mapping.column, mapping.field)
            .with_context(|| format!("apply --map {mapping}"))?;
        debug!(%mapping, "manual mapping applied");
    }

    let report = session.validate()?.clone();
    let blocked = report.has_errors();
    let mut output = None;
    if args.dry_run {
        info!("dry run: records not built");
    } else if !blocked {
        session.import()?;
        if let Some(path) = &args.output {
            let json = serde_json::to_string_pretty(session.records())
                .context("serialize imported records")?;
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "records written");
            output = Some(path.clone());
        }
    }

    Ok(ImportResult {
        file: args.file.clone(),
        row_count: session.row_count(),
        columns: session.columns().to_vec(),
        mapping: session.mapping_summary(),
        report,
        records: session.into_records(),
        output,
        blocked,
    })
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let path = write_template(&args.output_dir)
        .with_context(|| format!("write template to {}", args.output_dir.display()))?;
    println!("Template written to {}", path.display());
    Ok(())
}

pub fn run_fields() {
    println!("{}", fields_table(&all_fields()));
}
