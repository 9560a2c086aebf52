//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, IconResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "icongen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration assembled from every layer, plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IconResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> IconResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> IconError {
    IconError::Config {
        file: path.to_path_buf(),
        message: err.to_string().trim().to_string(),
    }
}

/// Load the user config, then the project config (or `explicit`), each
/// overriding the keys it sets, then apply `ICONGEN_*` overrides.
///
/// A missing user or project file is skipped; a missing `explicit` file is an
/// error.
pub fn load_layered(project_root: &Path, explicit: Option<&Path>) -> IconResult<LoadedConfig> {
    let mut files: Vec<PathBuf> = Vec::new();
    if let Some(user) = user_config_path().filter(|p| p.is_file()) {
        files.push(user);
    }
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(config_error(path, "file not found"));
            }
            files.push(path.to_path_buf());
        }
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                files.push(project);
            }
        }
    }

    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file)?;
        let (_, file_warnings) = parse_with_warnings(&content, file)?;
        warnings.extend(file_warnings);

        let table: toml::Table = content.parse().map_err(|e| config_error(file, e))?;
        merge_tables(&mut merged, table);
    }

    let config: Config = toml::Value::Table(merged)
        .try_into()
        .map_err(|e| config_error(files.last().map_or(project_root, |p| p.as_path()), e))?;

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        sources: files,
    })
}

/// Merge `overlay` into `base`; nested tables merge key by key, everything
/// else is replaced.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Apply environment variable overrides (ICONGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // ICONGEN_RASTERIZER
    if let Some(program) = get_env("ICONGEN_RASTERIZER").filter(|p| !p.trim().is_empty()) {
        config.rasterizer.program = program.trim().to_string();
    }

    // ICONGEN_STRICT
    if let Some(strict) = get_env("ICONGEN_STRICT").and_then(|v| parse_env_bool(&v)) {
        config.generate.strict = strict;
    }

    // ICONGEN_JOBS
    if let Some(jobs) = get_env("ICONGEN_JOBS").and_then(|v| v.trim().parse::<usize>().ok()) {
        config.generate.jobs = jobs;
    }

    // ICONGEN_VERBOSITY
    if let Some(verbosity) = get_env("ICONGEN_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// `1/true/yes/on` or `0/false/no/off/""`; anything else is ignored.
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `~/.config/icongen/config.toml`, honouring `XDG_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("icongen").join("config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "source_dir",
        "output_dir",
        "rasterizer",
        "program",
        "height_flag",
        "generate",
        "strict",
        "jobs",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
