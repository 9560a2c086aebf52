use icongen::IconError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::events::ErrorEvent;

/// Short machine-readable name for an error, used as the JSON `kind`.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<IconError>() {
        Some(IconError::RasterizerNotFound { .. }) => "rasterizer_not_found",
        Some(IconError::Spawn { .. }) => "spawn",
        Some(IconError::ConversionFailed { .. }) => "conversion_failed",
        Some(IconError::Config { .. }) => "config",
        Some(IconError::UnknownIcon { .. }) => "unknown_icon",
        Some(IconError::InvalidSize { .. }) => "invalid_size",
        Some(IconError::Io(_)) => "io",
        None => "other",
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<IconError>() {
        Some(IconError::RasterizerNotFound { .. }) => format!("{}\n", err),
        _ => {
            let mut text = format!("[ERROR] {}\n", err);
            for cause in err.chain().skip(1) {
                text.push_str(&format!("  caused by: {}\n", cause));
            }
            text
        }
    }
}

/// Report a fatal error.
///
/// A missing rasterizer is printed to stdout, everything else to stderr.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit_event(&ErrorEvent::new(error_kind(err), err.to_string()));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && crate::ui::ci::in_github_actions() {
        let file = match err.downcast_ref::<IconError>() {
            Some(IconError::Config { file, .. }) => Some(file.to_string_lossy().to_string()),
            _ => None,
        };
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("icongen"),
            )
        );
    }

    let text = format_error(err);
    if matches!(
        err.downcast_ref::<IconError>(),
        Some(IconError::RasterizerNotFound { .. })
    ) {
        print!("{}", text);
    } else {
        eprint!("{}", text);
    }
}
