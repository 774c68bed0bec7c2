use std::collections::BTreeMap;

use crate::cli::TemplateVariant;
use crate::error::PipelineError;
use crate::model::CanonicalRecord;

mod alberta;
mod atlantic;
mod generic;
mod ontario;


/// Target-form field name → value to write. Built once per document per
/// variant and consumed exactly once by the form filler.
pub type TemplateFieldMap = BTreeMap<String, String>;

/// Signatory identity stamped onto every filled form.
const APPRAISER_NAME: &str = "R. Fontaine";
const APPRAISER_COMPANY: &str = "Keystone Vehicle Appraisals Ltd.";
const APPRAISER_PHONE: &str = "416-555-0176";
const APPRAISER_EMAIL: &str = "r.fontaine@keystoneappraisals.ca";

/// Trailing noise marker the license-plate capture tends to drag in.
const PLATE_NOISE_MARKER: &str = "COLOR";

pub fn map_record(
    variant: TemplateVariant,
    record: &CanonicalRecord,
) -> Result<TemplateFieldMap, PipelineError> {
    match variant {
        TemplateVariant::Generic => generic::field_map(record),
        TemplateVariant::Ontario => ontario::field_map(record),
        TemplateVariant::Atlantic => atlantic::field_map(record),
        TemplateVariant::Alberta => alberta::field_map(record),
    }
}

/// Splits the combined make/model capture into its two tokens. A record
/// without both tokens is malformed source data and fails hard here instead
/// of producing a half-filled form.
fn split_make_model(record: &CanonicalRecord) -> Result<(String, String), PipelineError> {
    let mut tokens = record.make.split_whitespace();

    let make = tokens
        .next()
        .ok_or_else(|| PipelineError::malformed("make", "is empty"))?;
    let model = tokens
        .next()
        .ok_or_else(|| PipelineError::malformed("make", "has no model token"))?;

    Ok((make.to_string(), model.to_string()))
}

/// Splits the loss date into its month/day/year segments for templates with
/// separate date boxes. Hard-fails unless exactly three segments are present.
fn date_of_loss_parts(
    record: &CanonicalRecord,
) -> Result<(String, String, String), PipelineError> {
    let parts: Vec<&str> = record.date_of_loss.split('/').collect();
    if parts.len() != 3 {
        return Err(PipelineError::malformed(
            "date_of_loss",
            format!(
                "expected three `/`-separated segments, found {} in {:?}",
                parts.len(),
                record.date_of_loss
            ),
        ));
    }

    Ok((
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    ))
}

/// License plate with everything from the `COLOR` marker onward removed.
fn plate_without_noise(record: &CanonicalRecord) -> String {
    let plate = record
        .license_plate
        .split_once(PLATE_NOISE_MARKER)
        .map_or(record.license_plate.as_str(), |(head, _)| head);

    plate.trim().to_string()
}
