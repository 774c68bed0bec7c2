use super::{APPRAISER_COMPANY, APPRAISER_EMAIL, APPRAISER_NAME, TemplateFieldMap};
use crate::error::PipelineError;
use crate::model::CanonicalRecord;

/// Catalog for the Aviva Atlantic assignment template
/// (`aviva_atlantic.pdf`), which names nearly every box positionally. The
/// loss date lands in three separate day/month/year boxes.
pub(super) fn field_map(record: &CanonicalRecord) -> Result<TemplateFieldMap, PipelineError> {
    let (month, day, year) = super::date_of_loss_parts(record)?;
    let plate = super::plate_without_noise(record);

    let mut fields = TemplateFieldMap::new();
    fields.insert("Text1".to_string(), record.claim_number.clone());
    fields.insert("Text2".to_string(), record.policy_number.clone());
    fields.insert("Text3".to_string(), record.company_name.clone());
    fields.insert("Text5".to_string(), record.owner_name.clone());
    fields.insert("Text6".to_string(), record.owner_address.clone());
    fields.insert("Text7".to_string(), record.city.clone());
    fields.insert("Text8".to_string(), record.state_prefix.clone());
    fields.insert("Text9".to_string(), record.post_code.clone());
    fields.insert("Text10".to_string(), record.phone_number.clone());
    fields.insert("Text12".to_string(), day);
    fields.insert("Text13".to_string(), month);
    fields.insert("Text14".to_string(), year);
    fields.insert("Text24".to_string(), record.vin.clone());
    fields.insert("Text26".to_string(), record.model_year.clone());
    fields.insert("Text27".to_string(), record.make.clone());
    fields.insert("Text29".to_string(), record.color.clone());
    fields.insert("Text30".to_string(), record.mileage.clone());
    fields.insert("Text31".to_string(), plate);
    fields.insert(
        "Text33".to_string(),
        record.assignment_sent_date.clone(),
    );
    fields.insert("Text34".to_string(), record.adjuster_email.clone());
    fields.insert("Text40".to_string(), APPRAISER_NAME.to_string());
    fields.insert("Text41".to_string(), APPRAISER_COMPANY.to_string());
    fields.insert("Text42".to_string(), APPRAISER_EMAIL.to_string());
    fields.insert("Text44".to_string(), record.formatted_date.clone());

    Ok(fields)
}
