use chrono::NaiveDate;

use crate::models::ClaimedIdentity;
use crate::utils::VerifyError;
use crate::validation::dates::parse_iso_date;

/// Checks a claim is well formed before it is verified or recorded.
///
/// The matcher itself accepts anything; this is the caller-side check.
pub struct ClaimValidator;

impl ClaimValidator {
    /// Returns the claimed date of birth on success.
    pub fn validate(claims: &ClaimedIdentity) -> Result<NaiveDate, VerifyError> {
        if claims.full_name.trim().is_empty() {
            return Err(VerifyError::InvalidClaim("Full name is missing".to_string()));
        }

        if claims.id_number.is_empty() {
            return Err(VerifyError::InvalidClaim("ID number is missing".to_string()));
        }

        parse_iso_date(&claims.date_of_birth).ok_or_else(|| {
            VerifyError::InvalidDate(format!(
                "Date of birth must be YYYY-MM-DD, got {:?}",
                claims.date_of_birth
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(full_name: &str, date_of_birth: &str, id_number: &str) -> ClaimedIdentity {
        ClaimedIdentity {
            full_name: full_name.to_string(),
            date_of_birth: date_of_birth.to_string(),
            id_number: id_number.to_string(),
        }
    }

    #[test]
    fn test_valid_claim_returns_date() {
        let dob = ClaimValidator::validate(&claims("Asha Rao", "1985-01-31", "123456789012")).unwrap();
        assert_eq!(dob, NaiveDate::from_ymd_opt(1985, 1, 31).unwrap());
    }

    #[test]
    fn test_missing_name() {
        let err = ClaimValidator::validate(&claims("  ", "1985-01-31", "123456789012")).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidClaim(_)));
    }

    #[test]
    fn test_missing_id_number() {
        let err = ClaimValidator::validate(&claims("Asha Rao", "1985-01-31", "")).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidClaim(_)));
    }

    #[test]
    fn test_non_iso_date() {
        let err = ClaimValidator::validate(&claims("Asha Rao", "31/01/1985", "123456789012")).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidDate(_)));
    }
}
