//! Console output formatter for completed briefs

use colored::Colorize;
use brief_application::{DeliveryOutcome, SubmitBriefOutput};
use brief_domain::{AnswerValue, BriefSubmission, Catalog, Category, ChoiceOption, FieldAnswers};

/// Formats completed briefs for console display.
///
/// Answers are stored under field ids with option values; the catalog is
/// consulted to render question labels and option labels instead.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete brief, grouped the way the form asked it
    pub fn format(catalog: &Catalog, output: &SubmitBriefOutput) -> String {
        let submission = &output.submission;
        let mut out = String::new();

        // Header
        out.push_str(&Self::header("Brief Submitted"));
        out.push('\n');

        // Opening facts
        out.push_str(&format!(
            "{} {}\n",
            "Company:".cyan().bold(),
            submission.company_name
        ));
        out.push_str(&format!(
            "{} {}\n",
            "Project:".cyan().bold(),
            submission.project_name
        ));
        out.push_str(&format!("{} {}\n", "Date:".cyan().bold(), submission.date));
        out.push_str(&format!(
            "{} {}\n",
            "Services:".cyan().bold(),
            Self::service_list(submission)
        ));
        if let Some(user) = &submission.submitted_by {
            out.push_str(&format!("{} {}\n", "Submitted by:".cyan().bold(), user));
        }

        // One section per selected service, with its extra group inline
        for category in &submission.selected_categories {
            out.push_str(&Self::section_header(category.label()));
            let mut lines = 0;
            if let Some(fields) = submission.per_category_details.get(category) {
                lines += Self::push_category_answers(&mut out, catalog, *category, fields);
            }
            if let Some(fields) = submission.extra_category_details.get(category) {
                lines += Self::push_extra_answers(&mut out, catalog, *category, fields);
            }
            if lines == 0 {
                out.push_str("  (no questions for this service)\n");
            }
        }

        // Questions asked once across services
        if !submission.shared_details.is_empty() {
            out.push_str(&Self::section_header("Across Services"));
            for rule in catalog.shared_rules() {
                if let Some(value) = submission.shared_details.get(&rule.name) {
                    out.push_str(&Self::answer_line(
                        &rule.block.label,
                        value,
                        rule.block.kind.options(),
                    ));
                }
            }
        }

        out.push('\n');
        out.push_str(&Self::delivery_line(&output.delivery));
        out.push_str(&Self::footer());

        out
    }

    /// Format a compact recap
    pub fn format_summary(output: &SubmitBriefOutput) -> String {
        let submission = &output.submission;
        let mut out = String::new();

        out.push_str(&format!("{}\n\n", "=== Brief Submitted ===".cyan().bold()));
        out.push_str(&format!(
            "{} {} / {} ({})\n",
            "Project:".bold(),
            submission.company_name,
            submission.project_name,
            submission.date
        ));
        out.push_str(&format!(
            "{} {}\n\n",
            "Services:".bold(),
            Self::service_list(submission)
        ));
        out.push_str(&Self::delivery_line(&output.delivery));

        out
    }

    /// Format as JSON (the submission only, suitable for piping)
    pub fn format_json(submission: &BriefSubmission) -> String {
        serde_json::to_string_pretty(submission).unwrap_or_else(|_| "{}".to_string())
    }

    fn service_list(submission: &BriefSubmission) -> String {
        submission
            .selected_categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn push_category_answers(
        out: &mut String,
        catalog: &Catalog,
        category: Category,
        fields: &FieldAnswers,
    ) -> usize {
        let mut lines = 0;
        if let Some(block) = catalog.exclusive_block(category) {
            if let Some(value) = fields.get(&block.field_id) {
                out.push_str(&Self::answer_line(
                    &block.label,
                    value,
                    block.kind.options(),
                ));
                lines += 1;
            }
        }
        lines
    }

    fn push_extra_answers(
        out: &mut String,
        catalog: &Catalog,
        category: Category,
        fields: &FieldAnswers,
    ) -> usize {
        let mut lines = 0;
        for block in catalog.extra_blocks(category) {
            if let Some(value) = fields.get(&block.field_id) {
                out.push_str(&Self::answer_line(
                    &block.label,
                    value,
                    block.kind.options(),
                ));
                lines += 1;
            }
        }
        lines
    }

    fn answer_line(label: &str, value: &AnswerValue, options: &[ChoiceOption]) -> String {
        format!(
            "  {} {}\n",
            format!("{}:", label).yellow(),
            Self::display_value(value, options)
        )
    }

    /// Render a stored answer, mapping option values back to their labels
    fn display_value(value: &AnswerValue, options: &[ChoiceOption]) -> String {
        match value {
            AnswerValue::Single(Some(v)) => Self::option_label(options, v),
            AnswerValue::Single(None) => "(not answered)".dimmed().to_string(),
            AnswerValue::Multi(values) if values.is_empty() => "(none)".dimmed().to_string(),
            AnswerValue::Multi(values) => values
                .iter()
                .map(|v| Self::option_label(options, v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn option_label(options: &[ChoiceOption], value: &str) -> String {
        options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| value.to_string())
    }

    fn delivery_line(delivery: &DeliveryOutcome) -> String {
        match delivery {
            DeliveryOutcome::Delivered => format!("{} Brief delivered\n", "✓".green()),
            DeliveryOutcome::Skipped => format!("{}\n", "Delivery skipped".dimmed()),
            DeliveryOutcome::Failed(reason) => {
                format!("{} Delivery failed: {}\n", "✗".red(), reason)
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use brief_domain::{AnswerSheet, Selection};

    fn sample_output() -> (Catalog, SubmitBriefOutput) {
        let catalog = Catalog::standard().unwrap();
        let selection = Selection {
            company_name: "Acme Corp".to_string(),
            project_name: "Rebrand".to_string(),
            date: "2025-03-01".to_string(),
            categories: vec![Category::Naming],
            submitted_by: Some("ana".to_string()),
        };
        let mut sheet = AnswerSheet::new();
        sheet.set_value("naming_complexity_level_block", "complexity_level", "Tier 2");
        sheet.set_value("shared_client_materials_block", "client_materials", "5");
        let submission = catalog.extract(&selection, &sheet);
        let output = SubmitBriefOutput {
            submission,
            delivery: DeliveryOutcome::Delivered,
        };
        (catalog, output)
    }

    #[test]
    fn test_full_format_shows_labels_and_sections() {
        let (catalog, output) = sample_output();
        let text = ConsoleFormatter::format(&catalog, &output);
        assert!(text.contains("Brief Submitted"));
        assert!(text.contains("Acme Corp"));
        assert!(text.contains("Naming: Complexity Level"));
        assert!(text.contains("Tier 2"));
        assert!(text.contains("How many client materials to review?"));
        assert!(text.contains("Across Services"));
        assert!(text.contains("Brief delivered"));
    }

    #[test]
    fn test_full_format_marks_unanswered_questions() {
        let (catalog, mut output) = sample_output();
        output
            .submission
            .per_category_details
            .insert(Category::Naming, {
                let mut fields = FieldAnswers::new();
                fields.insert("complexity_level".to_string(), AnswerValue::null());
                fields
            });
        let text = ConsoleFormatter::format(&catalog, &output);
        assert!(text.contains("(not answered)"));
    }

    #[test]
    fn test_summary_recaps_without_answers() {
        let (_, output) = sample_output();
        let text = ConsoleFormatter::format_summary(&output);
        assert!(text.contains("Acme Corp / Rebrand (2025-03-01)"));
        assert!(text.contains("Services:"));
        assert!(!text.contains("Complexity Level"));
    }

    #[test]
    fn test_json_format_is_the_submission_document() {
        let (_, output) = sample_output();
        let text = ConsoleFormatter::format_json(&output.submission);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["company_name"], "Acme Corp");
        assert_eq!(parsed["selected_categories"][0], "Naming");
        assert_eq!(
            parsed["shared_details"]["client_materials"],
            serde_json::json!("5")
        );
    }

    #[test]
    fn test_failed_delivery_appears_in_output() {
        let (catalog, mut output) = sample_output();
        output.delivery = DeliveryOutcome::Failed("HTTP 500: oops".to_string());
        let text = ConsoleFormatter::format(&catalog, &output);
        assert!(text.contains("Delivery failed: HTTP 500: oops"));
    }
}
