//! Prompt parsing for the interactive wizard.
//!
//! Pure helpers so the menu grammar can be tested without a terminal.

use brief_domain::ChoiceOption;

/// Render a numbered option menu, one option per line.
pub(crate) fn render_options(options: &[ChoiceOption]) -> String {
    let mut out = String::new();
    for (i, option) in options.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, option.label));
    }
    out
}

/// Resolve one typed token against an option list.
///
/// A token that exactly matches an option value wins over a menu number,
/// so menus whose values are themselves numbers ("3", "5", ...) behave as
/// value lookups. Otherwise a 1-based menu number or a label (both
/// case-insensitive) is accepted.
pub(crate) fn resolve_option(token: &str, options: &[ChoiceOption]) -> Result<String, String> {
    let token = token.trim();
    if let Some(option) = options.iter().find(|o| o.value.eq_ignore_ascii_case(token)) {
        return Ok(option.value.clone());
    }
    if let Ok(n) = token.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Ok(options[n - 1].value.clone());
        }
        return Err(format!(
            "Please enter a number between 1 and {}",
            options.len()
        ));
    }
    if let Some(option) = options.iter().find(|o| o.label.eq_ignore_ascii_case(token)) {
        return Ok(option.value.clone());
    }
    Err(format!("Unknown option: {token}"))
}

/// Resolve a comma-separated list of tokens, de-duplicated in typed order.
pub(crate) fn resolve_multi(input: &str, options: &[ChoiceOption]) -> Result<Vec<String>, String> {
    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = resolve_option(token, options)?;
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Ok(values)
}
