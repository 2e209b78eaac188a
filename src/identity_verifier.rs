use crate::models::*;
use crate::processing::*;
use crate::validation::*;
use log::info;
use std::path::Path;

/// Runs a card's OCR text through extraction and claim matching.
///
/// Holds no state; one verifier can serve any number of requests at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityVerifier;

impl IdentityVerifier {
    pub fn new() -> Self {
        IdentityVerifier
    }

    pub fn verify_text(
        &self,
        raw_text: &str,
        document_type: DocumentType,
        claims: &ClaimedIdentity,
    ) -> VerificationReport {
        // Step 1: Pull structured fields out of the OCR text
        let fields = FieldExtractor::extract(raw_text, document_type);

        // Step 2: Compare them with the claims
        let verdict = FieldMatcher::verify(raw_text, &fields, claims);

        info!(
            "{} verification: name={} dob={} id={} overall={}",
            document_type,
            verdict.name_verified,
            verdict.dob_verified,
            verdict.id_verified,
            verdict.overall_verified
        );

        VerificationReport {
            document_type,
            fields,
            verdict,
        }
    }

    /// Recognizes the image first. Text the provider could not produce is
    /// verified as empty text.
    pub fn verify_image<P: OcrProvider + ?Sized>(
        &self,
        provider: &P,
        image_path: &Path,
        document_type: DocumentType,
        claims: &ClaimedIdentity,
    ) -> (String, VerificationReport) {
        let raw_text = provider.recognize(image_path);
        let report = self.verify_text(&raw_text, document_type, claims);
        (raw_text, report)
    }
}
