use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::VerifyError;

/// Identity document kinds with a dedicated extraction ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Aadhar,
    Pan,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Aadhar => "AADHAR",
            DocumentType::Pan => "PAN",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aadhar" | "aadhaar" => Ok(DocumentType::Aadhar),
            "pan" => Ok(DocumentType::Pan),
            _ => Err(VerifyError::UnknownDocumentType(s.to_string())),
        }
    }
}

/// Fields recovered from the OCR text of one document.
///
/// `date_of_birth` keeps the card's own `DD/MM/YYYY` spelling. `id_number` is
/// normalized: digits only for Aadhaar, upper-case alphanumeric for PAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub id_number: Option<String>,
}

impl ExtractedFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date_of_birth.is_none() && self.id_number.is_none()
    }
}

/// What the user says about themselves.
///
/// `date_of_birth` is ISO `YYYY-MM-DD`. `id_number` is compared exactly as
/// given, so any trimming or case folding is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedIdentity {
    pub full_name: String,
    pub date_of_birth: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub name_verified: bool,
    pub dob_verified: bool,
    pub id_verified: bool,
    pub overall_verified: bool,
}

impl VerificationVerdict {
    pub fn new(name_verified: bool, dob_verified: bool, id_verified: bool) -> Self {
        VerificationVerdict {
            name_verified,
            dob_verified,
            id_verified,
            overall_verified: name_verified && dob_verified && id_verified,
        }
    }
}

/// Outcome of running one document through extraction and matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub document_type: DocumentType,
    pub fields: ExtractedFields,
    pub verdict: VerificationVerdict,
}
