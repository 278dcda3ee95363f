//! Business profile configured once in settings.

use serde::{Deserialize, Serialize};

/// The business profile shown on invoices.
///
/// All text fields are optional and deserialize to empty strings when absent.
/// The profile is replaced wholesale on every settings submission, except
/// `logo`, which callers carry forward when no new logo is uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub shop_name: String,
    pub shop_address: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
    /// Public path to an uploaded logo image, or empty.
    pub logo: String,
}

impl BusinessProfile {
    /// Whether the profile is complete enough to create bills.
    ///
    /// Bill creation redirects to settings until a shop name is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.shop_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_not_configured() {
        assert!(!BusinessProfile::default().is_configured());
    }

    #[test]
    fn test_whitespace_shop_name_is_not_configured() {
        let profile = BusinessProfile {
            shop_name: "   ".to_string(),
            ..BusinessProfile::default()
        };
        assert!(!profile.is_configured());
    }

    #[test]
    fn test_named_profile_is_configured() {
        let profile = BusinessProfile {
            shop_name: "Sharma Traders".to_string(),
            ..BusinessProfile::default()
        };
        assert!(profile.is_configured());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let profile: BusinessProfile = serde_json::from_str("{}").expect("valid json");
        assert_eq!(profile, BusinessProfile::default());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{"shopName":"Sharma Traders","shopAddress":"12 MG Road","gstin":"27AAAPA1234A1Z5"}"#;
        let profile: BusinessProfile = serde_json::from_str(json).expect("valid json");
        assert_eq!(profile.shop_name, "Sharma Traders");
        assert_eq!(profile.shop_address, "12 MG Road");
        assert_eq!(profile.gstin, "27AAAPA1234A1Z5");
        assert!(profile.logo.is_empty());
    }
}
