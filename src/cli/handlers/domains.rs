//! Domains command handler
//!
//! Lists domain to bucket mappings, or the valid domains of one service.

use crate::AppState;
use crate::models::Service;

/// Handler for the domains command
pub struct DomainsCommandHandler {
    state: AppState,
    service: Option<Service>,
}

impl DomainsCommandHandler {
    /// Create a new domains command handler
    pub fn new(state: AppState, service: Option<Service>) -> Self {
        Self { state, service }
    }

    /// One line per domain
    pub fn report(&self) -> String {
        let document = &self.state.document;
        match self.service {
            Some(service) => document
                .service(service)
                .valid_domains
                .iter()
                .map(|domain| {
                    let settings = document.service_settings(service, domain);
                    format!(
                        "{}\texpiry_days={}\temail={}\tindexer={}",
                        domain,
                        settings.message_expiry_in_days,
                        settings.email_notifications(),
                        settings.publishes_to_indexer()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            None => document
                .domains()
                .map(|(domain, bucket)| format!("{}\t{}", domain, bucket))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Print the listing
    pub fn execute(&self) {
        let report = self.report();
        if report.is_empty() {
            if let Some(service) = self.service {
                println!("No valid domains configured for {}", service);
            }
            return;
        }
        println!("{}", report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::state;

    #[test]
    fn test_domains_report_lists_buckets() {
        let report = DomainsCommandHandler::new(state(), None).report();
        assert_eq!(report, "blog.example\tblog-bucket\nshop.example\tshop-bucket");
    }

    #[test]
    fn test_domains_report_for_service() {
        let report = DomainsCommandHandler::new(state(), Some(Service::SuperChat)).report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("shop.example\t"));
        assert!(lines[1].starts_with("blog.example\t"));
    }

    #[test]
    fn test_domains_report_for_unconfigured_service() {
        let report = DomainsCommandHandler::new(state(), Some(Service::User)).report();
        assert!(report.is_empty());
    }
}
