//! Console output formatter for orchestrated replies

use colored::Colorize;
use rutobot_application::OrchestratorConfig;
use rutobot_domain::{DomainLabel, FinalResponse, ModelRole, QueryAnalysis};

/// Formats replies, routing analyses and configuration for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Reply text only
    pub fn format_text(response: &FinalResponse) -> String {
        response.text.clone()
    }

    /// Reply with routing details
    pub fn format_full(query: &str, response: &FinalResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("rutobot"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Request:".cyan().bold(), query));
        output.push_str(&format!(
            "{} {}\n",
            "Domains:".cyan().bold(),
            Self::domain_list(&response.domains)
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Path:".cyan().bold(),
            response.source,
            if response.used_parallel {
                "parallel".green()
            } else {
                "sequential".yellow()
            }
        ));
        output.push_str(&format!(
            "{} {:.2}s\n",
            "Elapsed:".cyan().bold(),
            response.elapsed.as_secs_f64()
        ));

        output.push_str(&Self::section_header("Reply"));
        output.push_str(&response.text);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(response: &FinalResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Routing analysis (for `--detect`)
    pub fn format_analysis(query: &str, analysis: &QueryAnalysis) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Request:".cyan().bold(), query));
        output.push_str(&format!(
            "{} {}\n",
            "Domains:".cyan().bold(),
            Self::domain_list(analysis.domains())
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Complexity:".cyan().bold(),
            analysis.complexity()
        ));
        let parallel = if analysis.should_parallelize() {
            "yes".green()
        } else {
            "no".yellow()
        };
        output.push_str(&format!("{} {}\n", "Parallel:".cyan().bold(), parallel));
        output
    }

    /// Effective orchestrator configuration (for `--print-config`)
    pub fn format_config(config: &OrchestratorConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Parallel"));
        output.push_str(&format!("  enabled:        {}\n", config.policy.enabled()));
        output.push_str(&format!("  min domains:    {}\n", config.policy.min_domains()));
        output.push_str(&format!(
            "  task timeout:   {}s\n",
            config.task_timeout.as_secs()
        ));
        output.push_str(&format!("  debug timeline: {}\n", config.debug_timeline));

        output.push_str(&Self::section_header("Models"));
        for role in ModelRole::ALL {
            output.push_str(&format!(
                "  {:<15} {}\n",
                format!("{}:", role),
                config.models.get(role)
            ));
        }

        output.push_str(&Self::section_header("Domains"));
        for domain in DomainLabel::SPECIALISTS {
            let keywords = config.keywords.keywords(domain);
            if config.keywords.domains().any(|d| d == domain) {
                output.push_str(&format!(
                    "  {} {:<15} {} keywords ({})\n",
                    "on ".green(),
                    domain,
                    keywords.len(),
                    domain.toolset()
                ));
            } else {
                output.push_str(&format!("  {} {}\n", "off".red(), domain));
            }
        }

        output
    }

    fn domain_list(domains: &[DomainLabel]) -> String {
        domains
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
