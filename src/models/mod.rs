mod document;
mod service;

pub use document::{
    ConfigurationDocument, DomainSettings, SECRET_KEY_PLACEHOLDER, ServiceDomains,
    ServiceSettings,
};
pub use service::Service;
