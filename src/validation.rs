//! Pure checks over a registration candidate. The order is fixed: required
//! fields first, then email shape, then GSTIN length; the first failing
//! check wins and later ones are not evaluated.

use crate::models::ClientRegistrationData;
use crate::utils::error::{RegistryError, Result};

/// Required fields by wire name, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] =
    ["companyName", "contactName", "email", "gstin", "clientType"];

/// GSTIN is always 15 characters
pub const GSTIN_LENGTH: usize = 15;

pub fn validate(candidate: &ClientRegistrationData) -> Result<()> {
    let missing = missing_required_fields(candidate);
    if !missing.is_empty() {
        return Err(RegistryError::MissingFields(
            missing.iter().map(|name| name.to_string()).collect(),
        ));
    }

    if !is_valid_email(&candidate.email) {
        return Err(RegistryError::InvalidEmail);
    }

    if candidate.gstin.chars().count() != GSTIN_LENGTH {
        return Err(RegistryError::InvalidGstin);
    }

    Ok(())
}

/// Names of required fields that came through empty, in declaration order
pub fn missing_required_fields(candidate: &ClientRegistrationData) -> Vec<&'static str> {
    let values = [
        &candidate.company_name,
        &candidate.contact_name,
        &candidate.email,
        &candidate.gstin,
        &candidate.client_type,
    ];

    REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Structural email check: no whitespace anywhere, one `@` with a non-empty
/// local part, and a dot inside the domain with at least one character on
/// each side. Matches the registration form's own pattern.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_candidate() -> ClientRegistrationData {
        ClientRegistrationData {
            company_name: "Acme Exports".to_string(),
            contact_name: "Priya Sharma".to_string(),
            email: "priya@acmeexports.in".to_string(),
            phone: "+91 98200 12345".to_string(),
            gstin: "27AAPFU0939F1ZV".to_string(),
            client_type: "exporter".to_string(),
            address: "12 Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
        }
    }

    #[test]
    fn test_valid_candidate_passes() {
        assert!(validate(&valid_candidate()).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let candidate = ClientRegistrationData {
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            ..valid_candidate()
        };
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_declaration_order() {
        let candidate = ClientRegistrationData {
            company_name: String::new(),
            gstin: String::new(),
            client_type: String::new(),
            ..valid_candidate()
        };
        match validate(&candidate).unwrap_err() {
            RegistryError::MissingFields(missing) => {
                assert_eq!(missing, vec!["companyName", "gstin", "clientType"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_all_required_fields_missing() {
        let missing = missing_required_fields(&ClientRegistrationData::default());
        assert_eq!(missing, REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_missing_fields_win_over_bad_email_and_gstin() {
        // companyName empty AND email/gstin malformed: only the missing
        // field is reported
        let candidate = ClientRegistrationData {
            company_name: String::new(),
            email: "not-an-email".to_string(),
            gstin: "SHORT".to_string(),
            ..valid_candidate()
        };
        match validate(&candidate).unwrap_err() {
            RegistryError::MissingFields(missing) => {
                assert_eq!(missing, vec!["companyName"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_email_wins_over_bad_gstin() {
        let candidate = ClientRegistrationData {
            email: "no-at-sign".to_string(),
            gstin: "SHORT".to_string(),
            ..valid_candidate()
        };
        assert!(matches!(
            validate(&candidate).unwrap_err(),
            RegistryError::InvalidEmail
        ));
    }

    #[test]
    fn test_gstin_must_be_exactly_15_chars() {
        let short = ClientRegistrationData {
            gstin: "27AAPFU0939F1Z".to_string(),
            ..valid_candidate()
        };
        assert!(matches!(
            validate(&short).unwrap_err(),
            RegistryError::InvalidGstin
        ));

        let long = ClientRegistrationData {
            gstin: "27AAPFU0939F1ZVX".to_string(),
            ..valid_candidate()
        };
        assert!(matches!(
            validate(&long).unwrap_err(),
            RegistryError::InvalidGstin
        ));
    }

    #[test]
    fn test_gstin_length_counts_characters_not_bytes() {
        // 15 characters, more than 15 bytes
        let candidate = ClientRegistrationData {
            gstin: "27AAPFU0939F1Z✓".to_string(),
            ..valid_candidate()
        };
        assert_eq!(candidate.gstin.chars().count(), 15);
        assert!(candidate.gstin.len() > 15);
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("priya.sharma+tag@acme-exports.in"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_email_rejects_structural_failures() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.in"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("two@@ats.in"));
        assert!(!is_valid_email("a@b@c.in"));
        assert!(!is_valid_email("spaced name@acme.in"));
        assert!(!is_valid_email("tab\tchar@acme.in"));
    }

    #[test]
    fn test_email_requires_dot_inside_domain() {
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.starts-with-dot"));
        assert!(!is_valid_email("user@ends-with-dot."));
        assert!(is_valid_email("user@a.b"));
    }
}
