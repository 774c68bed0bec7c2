use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::FillArgs;
use crate::model::FillReport;
use crate::util::{now_utc_string, sha256_file, write_json_pretty};
use crate::{extract, fill, mapping, normalize, pdf_text};

pub fn run(args: FillArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let template_path = args
        .template_path
        .clone()
        .unwrap_or_else(|| args.template_dir.join(args.variant.template_filename()));

    info!(
        input = %args.input.display(),
        template = %template_path.display(),
        variant = args.variant.as_str(),
        "processing claim document"
    );

    let text = pdf_text::document_text(&bytes, args.variant.page_count())?;
    let raw = extract::extract_fields(&text);
    let missing = extract::missing_fields(&raw);
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "expected fields did not match any pattern"
        );
    }

    let record = normalize::normalize(&raw);
    let values = mapping::map_record(args.variant, &record)?;
    let filled = fill::fill_form(&template_path, &values)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    fs::write(&output_path, &filled.bytes)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!(
        path = %output_path.display(),
        fields_mapped = values.len(),
        fields_written = filled.fields_set,
        "wrote filled form"
    );

    if let Some(report_path) = args.report_path {
        let report = FillReport {
            generated_at: now_utc_string(),
            input_path: args.input.display().to_string(),
            input_sha256: sha256_file(&args.input)?,
            template_path: template_path.display().to_string(),
            template_sha256: sha256_file(&template_path)?,
            variant: args.variant.as_str().to_string(),
            output_path: output_path.display().to_string(),
            fields_mapped: values.len(),
            fields_written: filled.fields_set,
            missing_raw_fields: missing.iter().map(|field| field.to_string()).collect(),
            record,
        };

        write_json_pretty(&report_path, &report)?;
        info!(path = %report_path.display(), "wrote fill report");
    }

    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "claim".to_string());

    input.with_file_name(format!("{stem}-output.pdf"))
}
