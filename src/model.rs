use serde::Serialize;

/// Normalized, fixed-shape view of one claim document. Every field is always
/// present; source data that was absent or malformed degrades to an empty
/// string instead of an error, so the pipeline always produces a record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CanonicalRecord {
    pub claim_number: String,
    pub policy_number: String,
    pub company_name: String,
    /// `MM/DD/YYYY` with a four-digit year when the source date parsed;
    /// otherwise the raw string unchanged.
    pub date_of_loss: String,
    pub owner_name: String,
    pub owner_address: String,
    pub city: String,
    pub post_code: String,
    pub state_prefix: String,
    pub phone_number: String,
    /// Characters separated by four spaces, matching the character-boxed VIN
    /// field on the target forms.
    pub vin: String,
    pub make: String,
    pub model_year: String,
    pub color: String,
    pub mileage: String,
    pub license_plate: String,
    pub assignment_sent_date: String,
    pub adjuster_email: String,
    /// Date of notification, stamped from the wall clock at processing time
    /// rather than taken from the document.
    pub formatted_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub template_path: String,
    pub template_sha256: String,
    pub variant: String,
    pub output_path: String,
    pub fields_mapped: usize,
    pub fields_written: usize,
    pub missing_raw_fields: Vec<String>,
    pub record: CanonicalRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_record_exposes_every_pipeline_field() {
        let expected = [
            "claim_number",
            "policy_number",
            "company_name",
            "date_of_loss",
            "owner_name",
            "owner_address",
            "city",
            "post_code",
            "state_prefix",
            "phone_number",
            "vin",
            "make",
            "model_year",
            "color",
            "mileage",
            "license_plate",
            "assignment_sent_date",
            "adjuster_email",
            "formatted_date",
        ];

        let value = serde_json::to_value(CanonicalRecord::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), expected.len());
        for key in expected {
            assert!(object.contains_key(key), "record is missing `{key}`");
        }
    }
}
