use chrono::{Datelike, Local, NaiveDate};

use crate::extract::RawExtraction;
use crate::model::CanonicalRecord;
use crate::patterns::RawField;

/// Marker ending the usable part of the address block; the capture routinely
/// drags in the contact-methods section that follows it.
const ADDRESS_NOISE_MARKER: &str = "CONTACT";

/// Builds the canonical record for one document. Never fails: absent or
/// malformed source values degrade to empty or unchanged strings.
pub fn normalize(raw: &RawExtraction) -> CanonicalRecord {
    normalize_at(raw, Local::now().date_naive())
}

pub(crate) fn normalize_at(raw: &RawExtraction, today: NaiveDate) -> CanonicalRecord {
    let (city, post_code, state_prefix) =
        split_city_province_postal(&raw.value_or_default(RawField::CityProvincePostal));

    CanonicalRecord {
        claim_number: raw.value_or_default(RawField::ClaimNumber),
        policy_number: raw.value_or_default(RawField::PolicyNumber),
        company_name: raw.value_or_default(RawField::CompanyName),
        date_of_loss: normalize_date_of_loss(&raw.value_or_default(RawField::DateOfLoss)),
        owner_name: raw.value_or_default(RawField::OwnerName),
        owner_address: raw.value_or_default(RawField::OwnerAddress),
        city,
        post_code,
        state_prefix,
        phone_number: raw.value_or_default(RawField::PhoneNumber),
        vin: respace_vin(&raw.value_or_default(RawField::Vin)),
        make: raw.value_or_default(RawField::Make),
        model_year: raw.value_or_default(RawField::ModelYear),
        color: raw.value_or_default(RawField::Color),
        mileage: raw.value_or_default(RawField::Mileage),
        license_plate: raw.value_or_default(RawField::LicensePlate),
        assignment_sent_date: raw.value_or_default(RawField::AssignmentSentDate),
        adjuster_email: raw.value_or_default(RawField::AdjusterEmail),
        formatted_date: notification_date(today),
    }
}

/// `M/D/YY` gains a `20` century prefix. Anything that does not split into
/// exactly three segments passes through unchanged; that silent fallback is
/// the contract, not an oversight.
fn normalize_date_of_loss(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return raw.to_string();
    }

    let (month, day, year) = (parts[0], parts[1], parts[2]);
    if year.len() == 2 {
        format!("{month}/{day}/20{year}")
    } else {
        format!("{month}/{day}/{year}")
    }
}

/// Decomposes the captured city/province/postal block. The last two
/// whitespace tokens before the `CONTACT` marker form the postal code, the
/// token before them is the province prefix, and whatever precedes that is
/// the city. Short or missing input degrades to empty strings.
fn split_city_province_postal(raw: &str) -> (String, String, String) {
    let usable = raw.split(ADDRESS_NOISE_MARKER).next().unwrap_or_default();
    let tokens: Vec<&str> = usable.split_whitespace().collect();

    let split_at = tokens.len().saturating_sub(2);
    let post_code = tokens[split_at..].join(" ");

    let (state_prefix, city_tokens) = match tokens[..split_at].split_last() {
        Some((last, rest)) => ((*last).to_string(), rest),
        None => (String::new(), &tokens[..0]),
    };

    (city_tokens.join(" "), post_code, state_prefix)
}

/// Each VIN character separated by four spaces, the visual convention the
/// character-boxed VIN field on the target forms expects.
fn respace_vin(raw: &str) -> String {
    raw.chars()
        .map(|character| character.to_string())
        .collect::<Vec<String>>()
        .join("    ")
}

/// Date of notification: today's date as `D/M/YY` with leading zeros
/// stripped from the day and month.
fn notification_date(today: NaiveDate) -> String {
    format!(
        "{}/{}/{:02}",
        today.day(),
        today.month(),
        today.year() % 100
    )
}
