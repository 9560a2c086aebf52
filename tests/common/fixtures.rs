//! Test fixtures - reusable content constants for tests.

/// Every icon in the manifest, in manifest order
pub const ICON_NAMES: &[&str] = &[
    "arrow_back",
    "brush",
    "bucket",
    "cancel",
    "close",
    "code",
    "edit",
    "eraser",
    "error_stopped",
    "game",
    "hourglass",
    "library",
    "line_weight",
    "object_add",
    "object",
    "open_in_new",
    "properties",
    "scene",
    "zoom_in",
];

/// Every (icon, size) pair, in manifest order
pub const ICON_JOBS: &[(&str, u32)] = &[
    ("arrow_back", 24),
    ("brush", 24),
    ("bucket", 48),
    ("cancel", 32),
    ("close", 18),
    ("code", 24),
    ("edit", 48),
    ("eraser", 48),
    ("error_stopped", 32),
    ("game", 24),
    ("hourglass", 32),
    ("library", 24),
    ("line_weight", 24),
    ("object_add", 24),
    ("object", 14),
    ("open_in_new", 24),
    ("properties", 14),
    ("scene", 24),
    ("zoom_in", 14),
];

pub const SIMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>
"#;

/// Writes `<flag> <height> <source>` to stdout, standing in for PNG bytes.
pub const ECHO_TOOL: &str = "#!/bin/sh\nprintf '%s %s %s\\n' \"$1\" \"$2\" \"$3\"\n";

/// Writes a partial image, complains on stderr, and exits 1.
pub const FAILING_TOOL: &str =
    "#!/bin/sh\nprintf 'partial %s\\n' \"$2\"\necho \"rsvg-convert: cannot render $3\" >&2\nexit 1\n";

/// Fails only for the `edit` icon.
pub const EDIT_FAILS_TOOL: &str = "#!/bin/sh\ncase \"$3\" in\n  */edit.svg) echo 'bad svg' >&2; exit 1 ;;\nesac\nprintf '%s %s %s\\n' \"$1\" \"$2\" \"$3\"\n";

/// Message printed when the tool is not on `PATH`
pub const NOT_FOUND_MESSAGE: &str =
    "rsvg-convert not found - please make sure librsvg is installed and available in your PATH.";
