//! Interactive intake wizard
//!
//! Walks the two intake pages on a terminal. Validation failures on the
//! opening page re-prompt only the offending fields, so nothing already
//! typed is lost. Generic over its reader and writer so whole sessions
//! can be scripted in tests.

use std::io::{BufRead, Write};

use brief_application::{
    BeginIntakeUseCase, BriefSink, ComposeDetailsUseCase, SubmitBriefError, SubmitBriefOutput,
    SubmitBriefUseCase,
};
use brief_domain::{
    AnswerSheet, ChoiceOption, FieldErrors, FormPage, InputKind, OpeningDraft, QuestionBlock,
    opening,
};
use colored::Colorize;
use thiserror::Error;

use super::prompts;

/// Errors that can end a wizard session early
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the form was completed")]
    InputClosed,

    #[error(transparent)]
    Submit(#[from] SubmitBriefError),
}

/// Terminal front end for the intake flow
pub struct IntakeWizard<R, W> {
    input: R,
    output: W,
    organization: Option<String>,
}

impl<R: BufRead, W: Write> IntakeWizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            organization: None,
        }
    }

    /// Name the organization shown in the banner
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Run a full intake session: opening page, composed details, submit.
    pub async fn run<S: BriefSink + 'static>(
        mut self,
        begin: &BeginIntakeUseCase,
        compose: &ComposeDetailsUseCase,
        submit: &SubmitBriefUseCase<S>,
    ) -> Result<SubmitBriefOutput, WizardError> {
        let opened = begin.execute();
        let mut session = opened.session;
        let opening_page = opened.page;

        self.print_banner()?;
        self.print_page_title(&opening_page)?;
        let mut draft = self.collect_opening(&opening_page)?;

        let details = loop {
            match compose.execute(&mut session, draft.clone()) {
                Ok(details) => break details,
                Err(errors) => {
                    self.print_errors(&errors)?;
                    self.revise_opening(&opening_page, &mut draft, &errors)?;
                }
            }
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} {}",
            "Services:".cyan().bold(),
            details.summary
        )?;
        self.print_page_title(&details.page)?;
        let sheet = self.collect_page(&details.page)?;

        let result = submit.execute(&mut session, &details.token, &sheet).await?;
        Ok(result)
    }

    fn print_banner(&mut self) -> Result<(), WizardError> {
        writeln!(self.output)?;
        writeln!(self.output, "╭─────────────────────────────────────────────╮")?;
        writeln!(self.output, "│          Briefdesk - Project Intake         │")?;
        writeln!(self.output, "╰─────────────────────────────────────────────╯")?;
        if let Some(organization) = &self.organization {
            writeln!(self.output)?;
            writeln!(self.output, "Organization: {organization}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_page_title(&mut self, page: &FormPage) -> Result<(), WizardError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", page.title.cyan().bold())?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(())
    }

    fn print_errors(&mut self, errors: &FieldErrors) -> Result<(), WizardError> {
        writeln!(self.output)?;
        for error in errors.iter() {
            writeln!(self.output, "{} {}", "✗".red(), error.message.red())?;
        }
        Ok(())
    }

    /// Prompt every block of the opening page into a draft.
    fn collect_opening(&mut self, page: &FormPage) -> Result<OpeningDraft, WizardError> {
        let mut draft = OpeningDraft::default();
        for block in &page.blocks {
            self.fill_opening_field(block, &mut draft)?;
        }
        Ok(draft)
    }

    /// Re-prompt only the opening fields that failed validation.
    fn revise_opening(
        &mut self,
        page: &FormPage,
        draft: &mut OpeningDraft,
        errors: &FieldErrors,
    ) -> Result<(), WizardError> {
        for block in &page.blocks {
            if errors.message_for(&block.field_id).is_some() {
                self.fill_opening_field(block, draft)?;
            }
        }
        Ok(())
    }

    fn fill_opening_field(
        &mut self,
        block: &QuestionBlock,
        draft: &mut OpeningDraft,
    ) -> Result<(), WizardError> {
        match block.field_id.as_str() {
            opening::COMPANY_NAME => {
                draft.company_name = self.prompt_single(block)?.unwrap_or_default();
            }
            opening::PROJECT_NAME => {
                draft.project_name = self.prompt_single(block)?.unwrap_or_default();
            }
            opening::DATE => {
                draft.date = self.prompt_single(block)?.unwrap_or_default();
            }
            opening::CATEGORIES => {
                draft.categories = self.prompt_values(block)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Prompt every block of a composed page into an answer sheet.
    ///
    /// Blank input skips a question; the extractor records skipped
    /// questions as null (or an empty list) on its own.
    fn collect_page(&mut self, page: &FormPage) -> Result<AnswerSheet, WizardError> {
        let mut sheet = AnswerSheet::new();
        for block in &page.blocks {
            if block.kind.is_multi() {
                let values = self.prompt_values(block)?;
                if !values.is_empty() {
                    sheet.set_values(&block.block_id, &block.field_id, values);
                }
            } else if let Some(value) = self.prompt_single(block)? {
                sheet.set_value(&block.block_id, &block.field_id, value);
            }
        }
        Ok(sheet)
    }

    /// Prompt a block that yields at most one value.
    fn prompt_single(&mut self, block: &QuestionBlock) -> Result<Option<String>, WizardError> {
        match &block.kind {
            InputKind::SingleChoice { options } => self.prompt_choice(block, options),
            _ => self.prompt_text(block),
        }
    }

    /// Prompt a multi-choice block, returning the resolved option values.
    fn prompt_values(&mut self, block: &QuestionBlock) -> Result<Vec<String>, WizardError> {
        let options = block.kind.options().to_vec();
        self.print_question(block)?;
        write!(self.output, "{}", prompts::render_options(&options))?;
        loop {
            let line = self.read_line("Select one or more (comma-separated):")?;
            let line = line.trim();
            if line.is_empty() {
                return Ok(Vec::new());
            }
            match prompts::resolve_multi(line, &options) {
                Ok(values) => return Ok(values),
                Err(message) => writeln!(self.output, "{}", message.red())?,
            }
        }
    }

    fn prompt_choice(
        &mut self,
        block: &QuestionBlock,
        options: &[ChoiceOption],
    ) -> Result<Option<String>, WizardError> {
        self.print_question(block)?;
        write!(self.output, "{}", prompts::render_options(options))?;
        loop {
            let line = self.read_line("Select one:")?;
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            match prompts::resolve_option(line, options) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "{}", message.red())?,
            }
        }
    }

    fn prompt_text(&mut self, block: &QuestionBlock) -> Result<Option<String>, WizardError> {
        self.print_question(block)?;
        let line = self.read_line(">")?;
        let line = line.trim();
        Ok(if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        })
    }

    fn print_question(&mut self, block: &QuestionBlock) -> Result<(), WizardError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", block.label.cyan().bold())?;
        let hint = match &block.kind {
            InputKind::Date => Some("YYYY-MM-DD".to_string()),
            _ => block.placeholder.clone(),
        };
        if let Some(hint) = hint {
            writeln!(self.output, "{}", format!("({hint})").dimmed())?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, WizardError> {
        write!(self.output, "{} ", prompt.magenta().bold())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WizardError::InputClosed);
        }
        Ok(line)
    }
}
