use std::collections::HashMap;

use crate::patterns::{PATTERN_RULES, RawField};

/// Sparse field → matched-substring map for one document. A key is present
/// only when its rule matched; a whitespace-only capture is kept as an empty
/// string, which is distinct from absence.
#[derive(Debug, Default)]
pub struct RawExtraction {
    fields: HashMap<RawField, String>,
}

impl RawExtraction {
    pub fn get(&self, field: RawField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn value_or_default(&self, field: RawField) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn contains(&self, field: RawField) -> bool {
        self.fields.contains_key(&field)
    }

    pub(crate) fn set(&mut self, field: RawField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }
}

/// Applies every registry rule to the raw text and stores the first match's
/// first capture group, trimmed. Rules that do not match contribute nothing.
pub fn extract_fields(text: &str) -> RawExtraction {
    let mut raw = RawExtraction::default();

    for (field, regex) in PATTERN_RULES.iter() {
        let Some(captures) = regex.captures(text) else {
            continue;
        };
        let Some(capture) = captures.get(1) else {
            continue;
        };
        raw.set(*field, capture.as_str().trim());

        // The vehicle line carries the model year and the make/model text in
        // one match; surface both as their own keys.
        if *field == RawField::MakeModelYear {
            if let Some(remainder) = captures.get(2) {
                raw.set(RawField::ModelYear, capture.as_str().trim());
                raw.set(RawField::Make, remainder.as_str().trim());
            }
        }
    }

    raw
}

/// Rule keys that produced no match. Diagnostic only: missing fields are not
/// errors and default to empty strings downstream.
pub fn missing_fields(raw: &RawExtraction) -> Vec<&'static str> {
    PATTERN_RULES
        .iter()
        .filter(|(field, _)| !raw.contains(*field))
        .map(|(field, _)| field.as_str())
        .collect()
}
