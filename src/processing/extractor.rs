use log::debug;

use crate::models::{DocumentType, ExtractedFields};
use crate::processing::patterns::{
    AADHAR_DATE, AADHAR_DOB_LABEL, AADHAR_NUMBER, PAN_BIRTH_LABEL, PAN_DATE, PAN_FATHER_LABEL,
    PAN_NUMBER, PAN_NUMBER_MAX_LINE_LEN,
};

/// FieldExtractor turns raw OCR text from an Aadhaar or PAN card into
/// name, date of birth and ID number.
///
/// Every rule takes the first qualifying match and stops. Empty or
/// unrecognizable text yields an all-absent field set, never an error.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(raw_text: &str, document_type: DocumentType) -> ExtractedFields {
        let lines = Self::split_lines(raw_text);

        let fields = match document_type {
            DocumentType::Pan => ExtractedFields {
                name: Self::pan_name(&lines),
                date_of_birth: Self::pan_date_of_birth(&lines),
                id_number: Self::pan_number(&lines),
            },
            DocumentType::Aadhar => ExtractedFields {
                name: Self::aadhar_name(&lines),
                date_of_birth: Self::aadhar_date_of_birth(raw_text),
                id_number: Self::aadhar_number(raw_text),
            },
        };

        debug!(
            "{} extraction: name={:?} dob={:?} id={:?}",
            document_type, fields.name, fields.date_of_birth, fields.id_number
        );
        fields
    }

    /// Non-empty lines, trimmed, in their original order
    pub fn split_lines(raw_text: &str) -> Vec<&str> {
        raw_text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn pan_number(lines: &[&str]) -> Option<String> {
        lines.iter().find_map(|line| {
            let found = PAN_NUMBER.find(line)?;
            if line.chars().count() < PAN_NUMBER_MAX_LINE_LEN {
                Some(found.as_str().to_string())
            } else {
                None
            }
        })
    }

    fn pan_date_of_birth(lines: &[&str]) -> Option<String> {
        lines
            .iter()
            .filter(|line| line.contains(PAN_BIRTH_LABEL))
            .find_map(|line| PAN_DATE.find(line))
            .map(|m| m.as_str().to_string())
    }

    // The holder's name sits right above the "Father's Name" label and is
    // printed in capitals.
    fn pan_name(lines: &[&str]) -> Option<String> {
        let label_index = lines.iter().position(|line| line.contains(PAN_FATHER_LABEL))?;
        let candidate = lines.get(label_index.checked_sub(1)?)?;
        if is_upper_case(candidate) {
            Some(candidate.to_string())
        } else {
            None
        }
    }

    fn aadhar_number(raw_text: &str) -> Option<String> {
        AADHAR_NUMBER
            .find(raw_text)
            .map(|m| m.as_str().replace(' ', ""))
    }

    fn aadhar_date_of_birth(raw_text: &str) -> Option<String> {
        AADHAR_DATE
            .captures(raw_text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    }

    // Aadhaar prints the date-of-birth line directly under the name.
    fn aadhar_name(lines: &[&str]) -> Option<String> {
        let anchor_index = lines
            .iter()
            .position(|line| line.contains(AADHAR_DOB_LABEL) || AADHAR_DATE.is_match(line))?;
        lines
            .get(anchor_index.checked_sub(1)?)
            .map(|line| line.to_string())
    }
}

/// True when the text has at least one cased letter and every cased letter
/// is upper case. Title-case letters such as `ǅ` count as not upper case.
fn is_upper_case(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() || is_title_case(c) {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn is_title_case(c: char) -> bool {
    c.is_alphabetic() && !c.is_uppercase() && c.to_lowercase().ne(c.to_uppercase())
}
