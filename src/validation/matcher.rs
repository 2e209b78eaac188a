use crate::models::{ClaimedIdentity, ExtractedFields, VerificationVerdict};
use crate::validation::dates::normalize_card_date;

/// FieldMatcher compares extracted card fields with what the user claimed.
///
/// The claimed side is taken exactly as given. Only the extracted side is
/// normalized: the card date is rewritten to ISO before comparing.
pub struct FieldMatcher;

impl FieldMatcher {
    pub fn verify(
        raw_text: &str,
        fields: &ExtractedFields,
        claims: &ClaimedIdentity,
    ) -> VerificationVerdict {
        VerificationVerdict::new(
            Self::name_matches(raw_text, &claims.full_name),
            Self::dob_matches(fields.date_of_birth.as_deref(), &claims.date_of_birth),
            Self::id_matches(fields.id_number.as_deref(), &claims.id_number),
        )
    }

    /// Every whitespace-separated token of the claimed name must occur
    /// somewhere in the OCR text, case-insensitively.
    ///
    /// This looks at the whole text rather than the extracted name line and
    /// is a plain substring test, so "ram" is found inside "shriram". A claim
    /// with no tokens matches trivially; rejecting blank names is the
    /// caller's job (see `ClaimValidator`).
    pub fn name_matches(raw_text: &str, full_name: &str) -> bool {
        let haystack = raw_text.to_lowercase();
        full_name
            .split_whitespace()
            .map(str::to_lowercase)
            .all(|token| haystack.contains(&token))
    }

    pub fn dob_matches(extracted: Option<&str>, claimed_iso: &str) -> bool {
        extracted
            .and_then(normalize_card_date)
            .map_or(false, |normalized| normalized == claimed_iso)
    }

    pub fn id_matches(extracted: Option<&str>, claimed: &str) -> bool {
        extracted.map_or(false, |id| id == claimed)
    }
}
