//! Check command handler
//!
//! Reports on the loaded configuration document.

use crate::AppState;

/// Handler for the check command
pub struct CheckCommandHandler {
    state: AppState,
}

impl CheckCommandHandler {
    /// Create a new check command handler
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Summary of the loaded document
    pub fn report(&self) -> String {
        let document = &self.state.document;
        let without_bucket = document
            .domains()
            .filter(|(domain, _)| !document.has_bucket(domain))
            .count();

        let mut lines = vec![
            "✓ Configuration document loaded".to_string(),
            format!("✓ Domains: {}", document.domain_and_buckets.len()),
            format!("✓ Domain settings: {}", document.domain_settings.len()),
            format!("✓ Checksum: {}", self.state.checksum),
        ];
        if without_bucket > 0 {
            lines.push(format!("! Domains without a bucket: {}", without_bucket));
        }
        lines.join("\n")
    }

    /// Print the summary
    pub fn execute(&self) {
        println!("{}", self.report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::state;

    #[test]
    fn test_check_report() {
        let state = state();
        let checksum = state.checksum.clone();
        let report = CheckCommandHandler::new(state).report();

        assert!(report.contains("Domains: 2"));
        assert!(report.contains("Domain settings: 1"));
        assert!(report.contains(&checksum));
        assert!(!report.contains("without a bucket"));
    }
}
