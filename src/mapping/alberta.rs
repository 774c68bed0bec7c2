use super::{APPRAISER_NAME, APPRAISER_PHONE, TemplateFieldMap};
use crate::error::PipelineError;
use crate::model::CanonicalRecord;

/// Catalog for the Aviva Alberta assignment template (`aviva_alberta.pdf`).
/// Mostly positional boxes with a handful of descriptive names; the loss
/// date is split across three day/month/year boxes.
pub(super) fn field_map(record: &CanonicalRecord) -> Result<TemplateFieldMap, PipelineError> {
    let (month, day, year) = super::date_of_loss_parts(record)?;
    let plate = super::plate_without_noise(record);

    let mut fields = TemplateFieldMap::new();
    fields.insert("Claim No".to_string(), record.claim_number.clone());
    fields.insert("Policy No".to_string(), record.policy_number.clone());
    fields.insert("Text4".to_string(), record.company_name.clone());
    fields.insert("Text8".to_string(), record.owner_name.clone());
    fields.insert("Text9".to_string(), record.owner_address.clone());
    fields.insert("Text10".to_string(), record.city.clone());
    fields.insert("Text11".to_string(), record.state_prefix.clone());
    fields.insert("Text12".to_string(), record.post_code.clone());
    fields.insert("Text14".to_string(), record.phone_number.clone());
    fields.insert("Text16".to_string(), day);
    fields.insert("Text17".to_string(), month);
    fields.insert("Text18".to_string(), year);
    fields.insert("Text20".to_string(), record.model_year.clone());
    fields.insert("Text21".to_string(), record.make.clone());
    fields.insert("Text22".to_string(), record.color.clone());
    fields.insert("Text23".to_string(), record.mileage.clone());
    fields.insert("Text24".to_string(), record.vin.clone());
    fields.insert("Text25".to_string(), plate);
    fields.insert(
        "Text27".to_string(),
        record.assignment_sent_date.clone(),
    );
    fields.insert("Text28".to_string(), record.adjuster_email.clone());
    fields.insert("Appraiser Name".to_string(), APPRAISER_NAME.to_string());
    fields.insert("Appraiser Phone".to_string(), APPRAISER_PHONE.to_string());
    fields.insert("Text30".to_string(), record.formatted_date.clone());

    Ok(fields)
}
