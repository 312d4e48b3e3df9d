//! The opening form, first screen of every intake.
//!
//! Collects the required top-level fields (company, project, date, selected
//! categories). Its block and field ids are fixed and reserved: catalog
//! construction rejects any details block that reuses one of them.

use super::block::{ChoiceOption, FormPage, QuestionBlock};
use super::category::Category;

pub const TITLE: &str = "Project Kickoff";
pub const SUBMIT_LABEL: &str = "Next";

pub const COMPANY_NAME_BLOCK: &str = "company_name_block";
pub const COMPANY_NAME: &str = "company_name";
pub const PROJECT_NAME_BLOCK: &str = "project_name_block";
pub const PROJECT_NAME: &str = "project_name";
pub const DATE_BLOCK: &str = "date_block";
pub const DATE: &str = "date";
pub const CATEGORIES_BLOCK: &str = "categories_block";
pub const CATEGORIES: &str = "categories";

/// Block ids no details block may reuse.
pub fn reserved_block_ids() -> [&'static str; 4] {
    [
        COMPANY_NAME_BLOCK,
        PROJECT_NAME_BLOCK,
        DATE_BLOCK,
        CATEGORIES_BLOCK,
    ]
}

/// Build the opening page. The category options always reflect
/// [`Category::all`], so the page never drifts from the enum.
pub fn page() -> FormPage {
    let category_options = Category::all()
        .iter()
        .map(|c| ChoiceOption::new(c.as_str(), c.label()))
        .collect();

    FormPage::new(TITLE, SUBMIT_LABEL).with_blocks(vec![
        QuestionBlock::free_text(COMPANY_NAME_BLOCK, COMPANY_NAME, "Company Name")
            .with_placeholder("Enter company name"),
        QuestionBlock::free_text(PROJECT_NAME_BLOCK, PROJECT_NAME, "Project Name")
            .with_placeholder("Enter project name"),
        QuestionBlock::date(DATE_BLOCK, DATE, "Date").with_placeholder("Select a date"),
        QuestionBlock::multi_choice(
            CATEGORIES_BLOCK,
            CATEGORIES,
            "Services We Offer",
            category_options,
        ),
    ])
}
