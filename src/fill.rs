use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::PipelineError;
use crate::mapping::TemplateFieldMap;

/// Fields whose appearance entry is rewritten alongside the value so the
/// text renders even in viewers that never regenerate appearances.
const APPEARANCE_FIELDS: [&str; 3] = ["Vehicle Identification Number", "Name", "Text79"];

/// The combed VIN box stores its value without the visual spacing and drops
/// any cached appearance so the viewer regenerates it from the raw value.
const COMBED_VIN_FIELD: &str = "Text24";

#[derive(Debug)]
pub struct FilledForm {
    pub bytes: Vec<u8>,
    pub fields_set: usize,
}

pub struct TemplateField {
    pub name: String,
    pub field_type: String,
    pub value: String,
}

/// Opens the template, writes every mapped value into the matching field
/// annotations, and serializes the result to an independent byte buffer.
/// The on-disk template is never mutated.
pub fn fill_form(
    template_path: &Path,
    values: &TemplateFieldMap,
) -> Result<FilledForm, PipelineError> {
    let mut document = Document::load(template_path)
        .map_err(|err| PipelineError::bad_template(template_path, err))?;

    let fields_set = apply_field_values(&mut document, values)
        .map_err(|err| PipelineError::bad_template(template_path, err))?;

    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|err| PipelineError::bad_template(template_path, err))?;

    Ok(FilledForm { bytes, fields_set })
}

/// Lists every named field annotation in a template: name, field type, and
/// current value. Read-only companion to `fill_form` for catalog debugging.
pub fn template_fields(template_path: &Path) -> Result<Vec<TemplateField>, PipelineError> {
    let document = Document::load(template_path)
        .map_err(|err| PipelineError::bad_template(template_path, err))?;
    let ids = annotation_ids(&document)
        .map_err(|err| PipelineError::bad_template(template_path, err))?;

    let mut fields = Vec::with_capacity(ids.len());
    for id in ids {
        let annotation = document
            .get_dictionary(id)
            .map_err(|err| PipelineError::bad_template(template_path, err))?;
        let Some(name) = field_name(annotation) else {
            continue;
        };

        let field_type = match annotation.get(b"FT") {
            Ok(Object::Name(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
            _ => "unknown".to_string(),
        };
        let value = match annotation.get(b"V") {
            Ok(Object::String(bytes, _)) => String::from_utf8_lossy(bytes).into_owned(),
            _ => String::new(),
        };

        fields.push(TemplateField {
            name,
            field_type,
            value,
        });
    }

    Ok(fields)
}

fn apply_field_values(
    document: &mut Document,
    values: &TemplateFieldMap,
) -> Result<usize, lopdf::Error> {
    let ids = annotation_ids(document)?;
    let mut fields_set = 0_usize;

    for id in ids {
        let annotation = document.get_object_mut(id)?.as_dict_mut()?;
        let Some(name) = field_name(annotation) else {
            continue;
        };
        let Some(value) = values.get(&name) else {
            continue;
        };

        if name == COMBED_VIN_FIELD {
            let compact: String = value.chars().filter(|ch| *ch != ' ').collect();
            annotation.set("V", Object::string_literal(compact.clone()));
            annotation.set("AS", Object::string_literal(compact));
            annotation.remove(b"AP");
        } else {
            annotation.set("V", Object::string_literal(value.as_str()));
            if APPEARANCE_FIELDS.contains(&name.as_str()) {
                annotation.set("AP", Object::string_literal(value.as_str()));
            }
        }

        fields_set += 1;
    }

    Ok(fields_set)
}

fn annotation_ids(document: &Document) -> Result<Vec<ObjectId>, lopdf::Error> {
    let mut ids = Vec::new();

    for page_id in document.get_pages().into_values() {
        let page = document.get_dictionary(page_id)?;
        let Ok(annots) = page.get(b"Annots") else {
            continue;
        };
        let annots = match annots {
            Object::Reference(reference) => document.get_object(*reference)?.as_array()?,
            other => other.as_array()?,
        };

        // Annotations embedded inline in the array cannot be addressed for
        // mutation, so a non-reference entry fails the walk rather than
        // leaving its field silently unfilled.
        for entry in annots {
            ids.push(entry.as_reference()?);
        }
    }

    Ok(ids)
}

fn field_name(annotation: &Dictionary) -> Option<String> {
    match annotation.get(b"T") {
        Ok(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use lopdf::dictionary;

    use super::*;
    use crate::cli::TemplateVariant;

    fn template_document(field_names: &[&str], with_stale_appearance: bool) -> Document {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        let mut annotation_refs = Vec::new();
        for name in field_names {
            let mut annotation = dictionary! {
                "Type" => "Annot",
                "Subtype" => "Widget",
                "FT" => "Tx",
                "T" => Object::string_literal(*name),
                "Rect" => vec![0.into(), 0.into(), 200.into(), 20.into()],
            };
            if with_stale_appearance {
                annotation.set("AP", Object::string_literal("stale"));
            }
            annotation_refs.push(Object::Reference(document.add_object(annotation)));
        }

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Annots" => annotation_refs,
        });
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        document
    }

    fn reload(document: &mut Document) -> Document {
        let mut bytes = Vec::new();
        document.save_to(&mut bytes).expect("template serializes");
        Document::load_mem(&bytes).expect("filled output reloads")
    }

    fn annotation<'a>(document: &'a Document, name: &str) -> &'a Dictionary {
        let ids = annotation_ids(document).expect("annotations walkable");
        for id in ids {
            let dict = document.get_dictionary(id).expect("annotation is a dict");
            if field_name(dict).as_deref() == Some(name) {
                return dict;
            }
        }
        panic!("no annotation named {name}");
    }

    fn string_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
        match dict.get(key) {
            Ok(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    #[test]
    fn matched_field_value_survives_a_write_read_round_trip() {
        let mut document = template_document(&["Vehicle Identification Number"], false);
        let mut values = TemplateFieldMap::new();
        values.insert(
            "Vehicle Identification Number".to_string(),
            "1    G    1    F".to_string(),
        );

        let written = apply_field_values(&mut document, &values).unwrap();
        assert_eq!(written, 1);

        let reloaded = reload(&mut document);
        let field = annotation(&reloaded, "Vehicle Identification Number");
        assert_eq!(string_entry(field, b"V").as_deref(), Some("1    G    1    F"));
        // VIN is one of the fields that also gets an appearance entry.
        assert_eq!(string_entry(field, b"AP").as_deref(), Some("1    G    1    F"));
    }

    #[test]
    fn combed_vin_box_strips_spaces_and_drops_the_appearance() {
        let mut document = template_document(&["Text24"], true);
        let mut values = TemplateFieldMap::new();
        values.insert("Text24".to_string(), "A B".to_string());

        apply_field_values(&mut document, &values).unwrap();

        let reloaded = reload(&mut document);
        let field = annotation(&reloaded, "Text24");
        assert_eq!(string_entry(field, b"V").as_deref(), Some("AB"));
        assert_eq!(string_entry(field, b"AS").as_deref(), Some("AB"));
        assert!(field.get(b"AP").is_err(), "appearance should be removed");
    }

    #[test]
    fn ordinary_fields_get_a_value_but_no_appearance() {
        let mut document = template_document(&["City"], false);
        let mut values = TemplateFieldMap::new();
        values.insert("City".to_string(), "TORONTO".to_string());

        apply_field_values(&mut document, &values).unwrap();

        let reloaded = reload(&mut document);
        let field = annotation(&reloaded, "City");
        assert_eq!(string_entry(field, b"V").as_deref(), Some("TORONTO"));
        assert!(field.get(b"AP").is_err());
    }

    #[test]
    fn annotations_without_a_mapped_value_are_untouched() {
        let mut document = template_document(&["Unrelated Field"], false);
        let values = TemplateFieldMap::new();

        let written = apply_field_values(&mut document, &values).unwrap();
        assert_eq!(written, 0);

        let reloaded = reload(&mut document);
        let field = annotation(&reloaded, "Unrelated Field");
        assert!(field.get(b"V").is_err());
    }

    #[test]
    fn inline_annotation_dictionaries_fail_the_walk() {
        let mut document = template_document(&["City"], false);
        let inline = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::string_literal("Claim Number"),
        };

        let pages = document.get_pages();
        let page_id = *pages.values().next().expect("template has a page");
        let page = document
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .expect("page is a dictionary");
        let Ok(Object::Array(annots)) = page.get_mut(b"Annots") else {
            panic!("page annotations missing");
        };
        annots.push(Object::Dictionary(inline));

        assert!(annotation_ids(&document).is_err());

        let mut values = TemplateFieldMap::new();
        values.insert("City".to_string(), "TORONTO".to_string());
        assert!(apply_field_values(&mut document, &values).is_err());
    }

    #[test]
    fn missing_template_path_is_a_template_error() {
        let err = fill_form(
            Path::new("/nonexistent/templates/vehicle_ontario.pdf"),
            &TemplateFieldMap::new(),
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::BadTemplate { .. }));
    }

    #[test]
    fn template_field_listing_reports_names_and_types() {
        let mut document = template_document(&["Claim Number", "Text24"], false);
        let reloaded = reload(&mut document);

        let ids = annotation_ids(&reloaded).unwrap();
        assert_eq!(ids.len(), 2);

        let field = annotation(&reloaded, "Claim Number");
        assert_eq!(
            field.get(b"FT").ok().and_then(|obj| match obj {
                Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            }),
            Some("Tx".to_string())
        );
    }

    #[test]
    fn raw_claim_text_flows_through_the_whole_pipeline() {
        let text = "CLAIM: C123\nPOLICY P456\nADDRESS 1 MAIN ST\nTORONTO ON M1A 1A1\nCONTACT METHODS 416-555-0100\nVIN 1G1F\nVEHICLE: 2020 Honda Civic\n";

        let raw = crate::extract::extract_fields(text);
        let record = crate::normalize::normalize(&raw);
        let values = crate::mapping::map_record(TemplateVariant::Ontario, &record)
            .expect("ontario mapping succeeds");

        let mut document = template_document(
            &[
                "Vehicle Information, Make",
                "Vehicle Information, Model",
                "Text24",
            ],
            false,
        );
        let written = apply_field_values(&mut document, &values).unwrap();
        assert_eq!(written, 3);

        let reloaded = reload(&mut document);
        assert_eq!(
            string_entry(annotation(&reloaded, "Vehicle Information, Make"), b"V").as_deref(),
            Some("Honda")
        );
        assert_eq!(
            string_entry(annotation(&reloaded, "Vehicle Information, Model"), b"V").as_deref(),
            Some("Civic")
        );
        assert_eq!(
            string_entry(annotation(&reloaded, "Text24"), b"V").as_deref(),
            Some("1G1F")
        );
    }
}
