use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Services that carry their own valid-domain set and per-domain settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    ContactForm,
    SuperChat,
    User,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::ContactForm, Service::SuperChat, Service::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::ContactForm => "contact-form",
            Service::SuperChat => "super-chat",
            Service::User => "user",
        }
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contact-form" | "contactform" => Ok(Service::ContactForm),
            "super-chat" | "superchat" | "chat" => Ok(Service::SuperChat),
            "user" => Ok(Service::User),
            _ => Err(format!(
                "Invalid service '{}'. Valid values are: contact-form, super-chat, user",
                s
            )),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
