// Card-specific patterns and layout constants used by the extractor
use lazy_static::lazy_static;
use regex::Regex;

/// PAN numbers are printed alone on a short line; longer lines are body text.
pub const PAN_NUMBER_MAX_LINE_LEN: usize = 15;

pub const PAN_BIRTH_LABEL: &str = "Birth";
pub const PAN_FATHER_LABEL: &str = "Father's Name";
pub const AADHAR_DOB_LABEL: &str = "DOB";

lazy_static! {
    // AAAAA9999A, searched anywhere inside a line
    pub static ref PAN_NUMBER: Regex = Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").unwrap();

    // DD/MM/YYYY with no word boundaries, PAN labels often run into the date
    pub static ref PAN_DATE: Regex = Regex::new(r"(\d{2}/\d{2}/\d{4})").unwrap();

    // 12 digits, optionally 4-4-4 with single spaces
    pub static ref AADHAR_NUMBER: Regex = Regex::new(r"\b\d{4} ?\d{4} ?\d{4}\b").unwrap();

    pub static ref AADHAR_DATE: Regex = Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b").unwrap();
}
