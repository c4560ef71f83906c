//! Typed representation of the remote configuration document.
//!
//! Field names follow the configuration server's JSON (`PascalCase`). Maps are
//! `BTreeMap`s so that two equal documents always serialize to identical bytes,
//! which the checksum relies on.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::service::Service;
use crate::error::{AppError, AppResult};
use crate::utils::checksum;

/// Token substituted with the logical key inside a secret-locator template
pub const SECRET_KEY_PLACEHOLDER: &str = "%s";

/// The server may emit `null` for empty maps and lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-domain policy record, including the secret-locator template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainSettings {
    /// Secret-locator template, e.g. `projects/1/secrets/shop-%s/versions/latest`
    #[serde(deserialize_with = "null_as_default")]
    pub base_secret_key: String,
    /// Changing this value invalidates every token issued for the domain
    #[serde(deserialize_with = "null_as_default")]
    pub global_key: String,
    pub token_validity_in_mins: i64,
    pub message_expiry_in_days: i64,
    pub email_notification_enabled: i64,
    pub publish_to_indexer: i64,
    pub enable_usr_token_authentication: i64,
}

impl DomainSettings {
    /// Fully-qualified secret name for `logical_key`.
    ///
    /// Returns `None` when the template has no placeholder to substitute.
    pub fn secret_locator(&self, logical_key: &str) -> Option<String> {
        if !self.base_secret_key.contains(SECRET_KEY_PLACEHOLDER) {
            return None;
        }
        Some(
            self.base_secret_key
                .replacen(SECRET_KEY_PLACEHOLDER, logical_key, 1),
        )
    }

    pub fn email_notifications(&self) -> bool {
        self.email_notification_enabled != 0
    }

    pub fn publishes_to_indexer(&self) -> bool {
        self.publish_to_indexer != 0
    }

    pub fn user_token_authentication(&self) -> bool {
        self.enable_usr_token_authentication != 0
    }
}

/// Per-(service, domain) policy record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceSettings {
    pub message_expiry_in_days: i64,
    pub email_notification_enabled: i64,
    pub publish_to_indexer: i64,
}

impl ServiceSettings {
    pub fn email_notifications(&self) -> bool {
        self.email_notification_enabled != 0
    }

    pub fn publishes_to_indexer(&self) -> bool {
        self.publish_to_indexer != 0
    }
}

/// Valid-domain set and per-domain settings of one service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceDomains {
    #[serde(deserialize_with = "null_as_default")]
    pub valid_domains: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_and_servicesettings: BTreeMap<String, ServiceSettings>,
}

/// Root configuration document served by the configuration server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigurationDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub domain_and_buckets: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_settings: BTreeMap<String, DomainSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_form_api: ServiceDomains,
    #[serde(deserialize_with = "null_as_default")]
    pub super_chat_api: ServiceDomains,
    #[serde(deserialize_with = "null_as_default")]
    pub user_api: ServiceDomains,
}

impl ConfigurationDocument {
    /// Storage bucket for `domain`, or an empty string when the domain is unknown
    pub fn bucket_name(&self, domain: &str) -> &str {
        self.domain_and_buckets
            .get(domain)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Whether `domain` maps to a non-empty storage bucket
    pub fn has_bucket(&self, domain: &str) -> bool {
        !self.bucket_name(domain).is_empty()
    }

    pub fn service(&self, service: Service) -> &ServiceDomains {
        match service {
            Service::ContactForm => &self.contact_form_api,
            Service::SuperChat => &self.super_chat_api,
            Service::User => &self.user_api,
        }
    }

    /// Whether `domain` is listed in the valid-domain set of `service`
    pub fn is_valid_domain(&self, service: Service, domain: &str) -> bool {
        self.service(service)
            .valid_domains
            .iter()
            .any(|d| d == domain)
    }

    /// Service settings for `domain`, zero-valued when none are configured
    pub fn service_settings(&self, service: Service, domain: &str) -> ServiceSettings {
        self.service(service)
            .domain_and_servicesettings
            .get(domain)
            .copied()
            .unwrap_or_default()
    }

    pub fn domain_settings(&self, domain: &str) -> Option<&DomainSettings> {
        self.domain_settings.get(domain)
    }

    /// Domain and bucket pairs in domain order
    pub fn domains(&self) -> impl Iterator<Item = (&str, &str)> {
        self.domain_and_buckets
            .iter()
            .map(|(domain, bucket)| (domain.as_str(), bucket.as_str()))
    }

    /// Check the structural invariant required before serving traffic
    pub fn validate(&self) -> AppResult<()> {
        if self.domain_and_buckets.is_empty() {
            return Err(AppError::invalid_configuration(
                "configuration document contains no domain to bucket mappings",
            ));
        }
        Ok(())
    }

    /// Content checksum over the canonical JSON serialization
    pub fn checksum(&self) -> AppResult<String> {
        let bytes = serde_json::to_vec(self).map_err(|e| {
            AppError::invalid_configuration(format!("failed to serialize document: {}", e))
        })?;
        Ok(checksum::checksum(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigurationDocument {
        serde_json::from_value(json!({
            "DomainAndBuckets": { "shop.example": "shop-bucket", "blog.example": "" },
            "DomainSettings": {
                "shop.example": {
                    "BaseSecretKey": "projects/42/secrets/shop-%s/versions/latest",
                    "GlobalKey": "epoch-7",
                    "TokenValidityInMins": 30,
                    "MessageExpiryInDays": 14,
                    "EmailNotificationEnabled": 1,
                    "PublishToIndexer": 0,
                    "EnableUsrTokenAuthentication": 1
                }
            },
            "ContactFormApi": {
                "ValidDomains": ["shop.example"],
                "DomainAndServicesettings": {
                    "shop.example": {
                        "MessageExpiryInDays": 7,
                        "EmailNotificationEnabled": 1,
                        "PublishToIndexer": 1
                    }
                }
            },
            "SuperChatApi": { "ValidDomains": null, "DomainAndServicesettings": null },
            "UserApi": { "ValidDomains": ["blog.example"] }
        }))
        .unwrap()
    }

    #[test]
    fn test_bucket_lookup() {
        let doc = sample();
        assert_eq!(doc.bucket_name("shop.example"), "shop-bucket");
        assert_eq!(doc.bucket_name("unknown.example"), "");
        assert!(doc.has_bucket("shop.example"));
        assert!(!doc.has_bucket("blog.example"));
        assert!(!doc.has_bucket("unknown.example"));
    }

    #[test]
    fn test_is_valid_domain_per_service() {
        let doc = sample();
        assert!(doc.is_valid_domain(Service::ContactForm, "shop.example"));
        assert!(!doc.is_valid_domain(Service::ContactForm, "blog.example"));
        assert!(doc.is_valid_domain(Service::User, "blog.example"));
        // null valid-domain list behaves as an empty set
        assert!(!doc.is_valid_domain(Service::SuperChat, "shop.example"));
        assert!(!ConfigurationDocument::default().is_valid_domain(Service::User, "x"));
    }

    #[test]
    fn test_service_settings_default_when_absent() {
        let doc = sample();
        let settings = doc.service_settings(Service::ContactForm, "shop.example");
        assert_eq!(settings.message_expiry_in_days, 7);
        assert!(settings.email_notifications());
        assert!(settings.publishes_to_indexer());

        assert_eq!(
            doc.service_settings(Service::SuperChat, "shop.example"),
            ServiceSettings::default()
        );
    }

    #[test]
    fn test_domain_settings_presence() {
        let doc = sample();
        let settings = doc.domain_settings("shop.example").unwrap();
        assert_eq!(settings.token_validity_in_mins, 30);
        assert_eq!(settings.global_key, "epoch-7");
        assert!(settings.email_notifications());
        assert!(!settings.publishes_to_indexer());
        assert!(settings.user_token_authentication());
        assert!(doc.domain_settings("blog.example").is_none());
    }

    #[test]
    fn test_secret_locator_substitution() {
        let settings = DomainSettings {
            base_secret_key: "projects/42/secrets/shop-%s/versions/latest".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.secret_locator("authentication-key").unwrap(),
            "projects/42/secrets/shop-authentication-key/versions/latest"
        );
    }

    #[test]
    fn test_secret_locator_without_placeholder() {
        let settings = DomainSettings {
            base_secret_key: "projects/42/secrets/static/versions/latest".to_string(),
            ..Default::default()
        };
        assert!(settings.secret_locator("k").is_none());
    }

    #[test]
    fn test_validate_requires_bucket_mapping() {
        assert!(sample().validate().is_ok());
        let err = ConfigurationDocument::default().validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_domains_iterates_in_order() {
        let doc = sample();
        let domains: Vec<_> = doc.domains().map(|(d, _)| d).collect();
        assert_eq!(domains, vec!["blog.example", "shop.example"]);
    }

    #[test]
    fn test_checksum_is_deterministic_and_sensitive() {
        let doc = sample();
        let first = doc.checksum().unwrap();
        let second = sample().checksum().unwrap();
        assert_eq!(first, second);

        let mut changed = sample();
        changed
            .domain_and_buckets
            .insert("shop.example".to_string(), "shop-bucket-2".to_string());
        assert_ne!(first, changed.checksum().unwrap());
    }
}
