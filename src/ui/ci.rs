//! GitHub Actions workflow commands

use icongen::generator::IconOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_workflow_command_value(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_workflow_command_value(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

/// Annotation for a failed icon, or one written despite a tool error.
pub fn outcome_annotation(outcome: &IconOutcome) -> Option<String> {
    let message = outcome.error.as_deref()?;
    let level = if outcome.is_warning() {
        AnnotationLevel::Warning
    } else {
        AnnotationLevel::Error
    };
    let file = outcome.output.to_string_lossy();
    Some(github_actions_annotation(
        level,
        message,
        Some(&file),
        Some("icongen"),
    ))
}

pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_workflow_command_value(s: &str) -> String {
    escape_workflow_command_message(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}
