use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use icongen::presentation::TextRenderer;
use icongen::Verbosity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    /// Unicode glyphs; piped or redirected output outside CI gets ASCII
    pub unicode: bool,
    /// Emit GitHub Actions annotations for failed icons
    pub annotate: bool,
}

impl UiContext {
    pub fn new(json: bool, verbosity: Verbosity) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbosity, caps, crate::ui::ci::in_github_actions())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbosity: Verbosity,
        caps: TerminalCapabilities,
        github_actions: bool,
    ) -> Self {
        Self {
            json,
            verbosity,
            unicode: caps.supports_unicode && (caps.is_tty || caps.is_ci),
            annotate: !json && caps.is_ci && github_actions,
        }
    }

    pub fn renderer(&self) -> TextRenderer {
        TextRenderer {
            unicode: self.unicode,
            verbosity: self.verbosity,
        }
    }

    pub fn is_debug(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Debug
    }
}
