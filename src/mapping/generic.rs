use super::{APPRAISER_COMPANY, APPRAISER_NAME, TemplateFieldMap};
use crate::error::PipelineError;
use crate::model::CanonicalRecord;

/// Catalog for the plain single-page appraisal template
/// (`vehicle_generic.pdf`), which uses descriptive field names throughout.
pub(super) fn field_map(record: &CanonicalRecord) -> Result<TemplateFieldMap, PipelineError> {
    let (make, model) = super::split_make_model(record)?;
    let plate = super::plate_without_noise(record);

    let mut fields = TemplateFieldMap::new();
    fields.insert("Claim Number".to_string(), record.claim_number.clone());
    fields.insert("Policy Number".to_string(), record.policy_number.clone());
    fields.insert("Insurer".to_string(), record.company_name.clone());
    fields.insert("Date of Loss".to_string(), record.date_of_loss.clone());
    fields.insert("Owner Name".to_string(), record.owner_name.clone());
    fields.insert("Owner Address".to_string(), record.owner_address.clone());
    fields.insert("City".to_string(), record.city.clone());
    fields.insert("Province".to_string(), record.state_prefix.clone());
    fields.insert("Postal Code".to_string(), record.post_code.clone());
    fields.insert("Phone Number".to_string(), record.phone_number.clone());
    fields.insert("VIN".to_string(), record.vin.clone());
    fields.insert("Make".to_string(), make);
    fields.insert("Model".to_string(), model);
    fields.insert("Year".to_string(), record.model_year.clone());
    fields.insert("Colour".to_string(), record.color.clone());
    fields.insert("Mileage".to_string(), record.mileage.clone());
    fields.insert("Licence Plate".to_string(), plate);
    fields.insert("Appraiser".to_string(), APPRAISER_NAME.to_string());
    fields.insert(
        "Appraisal Company".to_string(),
        APPRAISER_COMPANY.to_string(),
    );
    fields.insert("Report Date".to_string(), record.formatted_date.clone());

    Ok(fields)
}
