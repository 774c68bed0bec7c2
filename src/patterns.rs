use std::sync::LazyLock;

use regex::Regex;

/// Fixed vocabulary of fields the extraction rules can produce. `ModelYear`
/// and `Make` carry no rule of their own; they are decomposed from the
/// `MakeModelYear` capture pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawField {
    ClaimNumber,
    PolicyNumber,
    CompanyName,
    DateOfLoss,
    OwnerName,
    OwnerAddress,
    CityProvincePostal,
    PhoneNumber,
    Vin,
    MakeModelYear,
    Color,
    Mileage,
    LicensePlate,
    AssignmentSentDate,
    AdjusterEmail,
    ModelYear,
    Make,
}

impl RawField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClaimNumber => "claim_number",
            Self::PolicyNumber => "policy_number",
            Self::CompanyName => "company_name",
            Self::DateOfLoss => "date_of_loss",
            Self::OwnerName => "owner_name",
            Self::OwnerAddress => "owner_address",
            Self::CityProvincePostal => "city_province_postal",
            Self::PhoneNumber => "phone_number",
            Self::Vin => "vin",
            Self::MakeModelYear => "make_model_year",
            Self::Color => "color",
            Self::Mileage => "mileage",
            Self::LicensePlate => "license_plate",
            Self::AssignmentSentDate => "assignment_sent_date",
            Self::AdjusterEmail => "adjuster_email",
            Self::ModelYear => "model_year",
            Self::Make => "make",
        }
    }
}

/// Extraction rules applied to the whole document text. Each rule is an
/// independent search; order carries no meaning. The adjuster email rule is
/// case-insensitive, everything else matches the upper-case labels the claim
/// documents print verbatim.
pub static PATTERN_RULES: LazyLock<Vec<(RawField, Regex)>> = LazyLock::new(|| {
    [
        (RawField::ClaimNumber, r"CLAIM:\s*(\S+)"),
        (RawField::PolicyNumber, r"POLICY\s*(\S+)"),
        (RawField::CompanyName, r"ADJUSTER\s*(.+)"),
        (
            RawField::DateOfLoss,
            r"DATE OF LOSS\s*(\d{1,2}/\d{1,2}/\d{2,4})",
        ),
        (RawField::OwnerName, r"OWNER\s*(.+)"),
        (RawField::OwnerAddress, r"ADDRESS\s*(.+)"),
        (
            RawField::CityProvincePostal,
            r"ADDRESS\s*[\s\S]*?\n([\w\s]+(?:\s+[A-Z]{2}\s+\w{1}\d{1}\w{1}\s*\d{1}\w{1}\d{1})?)",
        ),
        (RawField::PhoneNumber, r"CONTACT METHODS\s*([\d-]+)"),
        (RawField::Vin, r"VIN\s*(\S+)"),
        (RawField::MakeModelYear, r"VEHICLE:\s*(\d{4})\s+(.+)"),
        (RawField::Color, r"COLOR\s*(.+)"),
        (RawField::Mileage, r"MILEAGE\s*(\d+)"),
        (RawField::LicensePlate, r"LICENSE PLATE\s*\n([A-Z0-9\s]+)\n"),
        (
            RawField::AssignmentSentDate,
            r"ASSIGNMENT SENT:\s*(\d{2}/\d{2}/\d{4})",
        ),
        (
            RawField::AdjusterEmail,
            r"(?i)([A-Za-z0-9._%+-]+@aviva\.com)",
        ),
    ]
    .into_iter()
    .map(|(field, pattern)| {
        let regex = Regex::new(pattern).expect("extraction pattern compiles");
        (field, regex)
    })
    .collect()
});
