use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::data::{ClaimedIdentity, DocumentType, ExtractedFields, VerificationVerdict};

/// One submitted registration together with what OCR found and how it
/// compared. This is the entry appended to the registration log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: u64,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub dob: NaiveDate,
    pub age: Option<u32>,
    pub id_type: DocumentType,
    pub id_number_input: String,
    pub image_filename: Option<String>,
    pub ocr_extracted_text: String,
    pub ocr_extracted_name: Option<String>,
    pub ocr_extracted_dob: Option<String>,
    pub ocr_extracted_id_number: Option<String>,
    pub name_verified: bool,
    pub dob_verified: bool,
    pub id_verified: bool,
    pub registration_timestamp: DateTime<Utc>,
}

/// Contact details that travel with a registration but play no part in
/// verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applicant {
    pub phone_number: Option<String>,
    pub age: Option<u32>,
    pub image_filename: Option<String>,
}

impl Registration {
    /// Builds an unsaved registration (`id` 0); the log assigns the id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        claims: &ClaimedIdentity,
        dob: NaiveDate,
        applicant: Applicant,
        document_type: DocumentType,
        raw_text: &str,
        fields: &ExtractedFields,
        verdict: &VerificationVerdict,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Registration {
            id: 0,
            full_name: claims.full_name.clone(),
            phone_number: applicant.phone_number,
            dob,
            age: applicant.age,
            id_type: document_type,
            id_number_input: claims.id_number.clone(),
            image_filename: applicant.image_filename,
            ocr_extracted_text: raw_text.to_string(),
            ocr_extracted_name: fields.name.clone(),
            ocr_extracted_dob: fields.date_of_birth.clone(),
            ocr_extracted_id_number: fields.id_number.clone(),
            name_verified: verdict.name_verified,
            dob_verified: verdict.dob_verified,
            id_verified: verdict.id_verified,
            registration_timestamp: registered_at,
        }
    }

    pub fn overall_verified(&self) -> bool {
        self.name_verified && self.dob_verified && self.id_verified
    }
}

/// Prefixes an uploaded file name with its upload time, e.g.
/// `20240102030405_card.jpg`.
pub fn stamped_filename(original: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}", at.format("%Y%m%d%H%M%S"), original)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamped_filename() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(stamped_filename("card.jpg", at), "20240102030405_card.jpg");
    }

    #[test]
    fn test_registration_copies_fields_and_verdict() {
        let claims = ClaimedIdentity {
            full_name: "John Smith".to_string(),
            date_of_birth: "1990-08-15".to_string(),
            id_number: "ABCDE1234F".to_string(),
        };
        let fields = ExtractedFields {
            name: Some("JOHN SMITH".to_string()),
            date_of_birth: Some("15/08/1990".to_string()),
            id_number: None,
        };
        let verdict = VerificationVerdict::new(true, true, false);
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let dob = NaiveDate::from_ymd_opt(1990, 8, 15).unwrap();

        let registration = Registration::new(
            &claims,
            dob,
            Applicant { phone_number: Some("9876543210".to_string()), age: Some(34), image_filename: None },
            DocumentType::Pan,
            "JOHN SMITH",
            &fields,
            &verdict,
            at,
        );

        assert_eq!(registration.id, 0);
        assert_eq!(registration.id_number_input, "ABCDE1234F");
        assert_eq!(registration.ocr_extracted_name.as_deref(), Some("JOHN SMITH"));
        assert_eq!(registration.ocr_extracted_id_number, None);
        assert!(registration.dob_verified);
        assert!(!registration.overall_verified());
    }

    #[test]
    fn test_registration_json_shape() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let registration = Registration::new(
            &ClaimedIdentity {
                full_name: "Asha Rao".to_string(),
                date_of_birth: "1985-01-31".to_string(),
                id_number: "123456789012".to_string(),
            },
            NaiveDate::from_ymd_opt(1985, 1, 31).unwrap(),
            Applicant::default(),
            DocumentType::Aadhar,
            "",
            &ExtractedFields::default(),
            &VerificationVerdict::new(false, false, false),
            at,
        );

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["dob"], "1985-01-31");
        assert_eq!(value["id_type"], "AADHAR");
        assert!(value["ocr_extracted_dob"].is_null());
    }
}
