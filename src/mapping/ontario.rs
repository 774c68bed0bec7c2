use super::{APPRAISER_COMPANY, APPRAISER_NAME, APPRAISER_PHONE, TemplateFieldMap};
use crate::error::PipelineError;
use crate::model::CanonicalRecord;

/// Catalog for the Ontario vehicle appraisal template
/// (`vehicle_ontario.pdf`). The template mixes descriptive names with
/// positional `TextNN` boxes; `Text24` is the combed VIN box the filler
/// compacts, `Text79` the signature line it stamps an appearance onto.
pub(super) fn field_map(record: &CanonicalRecord) -> Result<TemplateFieldMap, PipelineError> {
    let (make, model) = super::split_make_model(record)?;
    let plate = super::plate_without_noise(record);

    let mut fields = TemplateFieldMap::new();
    fields.insert("Claim Number".to_string(), record.claim_number.clone());
    fields.insert("Policy Number".to_string(), record.policy_number.clone());
    fields.insert("Insurance Company".to_string(), record.company_name.clone());
    fields.insert("Date of Loss".to_string(), record.date_of_loss.clone());
    fields.insert("Name".to_string(), record.owner_name.clone());
    fields.insert("Address".to_string(), record.owner_address.clone());
    fields.insert("City".to_string(), record.city.clone());
    fields.insert("Province".to_string(), record.state_prefix.clone());
    fields.insert("Postal Code".to_string(), record.post_code.clone());
    fields.insert("Telephone Number".to_string(), record.phone_number.clone());
    fields.insert(
        "Vehicle Identification Number".to_string(),
        record.vin.clone(),
    );
    fields.insert("Text24".to_string(), record.vin.clone());
    fields.insert("Vehicle Information, Make".to_string(), make);
    fields.insert("Vehicle Information, Model".to_string(), model);
    fields.insert(
        "Vehicle Information, Year".to_string(),
        record.model_year.clone(),
    );
    fields.insert(
        "Vehicle Information, Colour".to_string(),
        record.color.clone(),
    );
    fields.insert("Odometer Reading".to_string(), record.mileage.clone());
    fields.insert("Plate Number".to_string(), plate);
    fields.insert("Text79".to_string(), APPRAISER_NAME.to_string());
    fields.insert("Appraisal Firm".to_string(), APPRAISER_COMPANY.to_string());
    fields.insert(
        "Appraiser Telephone".to_string(),
        APPRAISER_PHONE.to_string(),
    );
    fields.insert(
        "Date of Notification".to_string(),
        record.formatted_date.clone(),
    );

    Ok(fields)
}
