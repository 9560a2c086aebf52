//! Test environment builder for isolated icongen testing.
//!
//! Every run gets a `PATH` made of a single temp directory, so the only
//! `rsvg-convert` the binary can find is the fake one a test installs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::SIMPLE_SVG;

/// Variables that would leak the developer's setup into a run
const SCRUBBED_ENV: &[&str] = &[
    "ICONGEN_RASTERIZER",
    "ICONGEN_STRICT",
    "ICONGEN_JOBS",
    "ICONGEN_VERBOSITY",
    "CI",
    "GITHUB_ACTIONS",
    "LC_ALL",
    "LC_CTYPE",
];

/// Result of running an icongen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Project root the binary runs in
    pub project_root: TempDir,
    /// The only directory on `PATH`
    pub tool_dir: TempDir,
    /// `XDG_CONFIG_HOME` for the user config layer
    pub config_home: TempDir,
    icongen_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of the artifact for `name` at `size` in the default output dir
    pub fn icon_path(&self, name: &str, size: u32) -> PathBuf {
        self.project_path(&format!("src/images/icons/{}_{}.png", name, size))
    }

    pub fn read_icon(&self, name: &str, size: u32) -> String {
        let path = self.icon_path(name, size);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Run icongen in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run icongen from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run icongen from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.icongen_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PATH", self.tool_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("LANG", "en_US.UTF-8")
            .env("TERM", "xterm");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute icongen");
        output_to_result(output)
    }

    /// Install (or replace) the fake `rsvg-convert` on `PATH`.
    #[cfg(unix)]
    pub fn install_tool(&self, script: &str) -> PathBuf {
        write_script(self.tool_dir.path(), "rsvg-convert", script)
    }

    /// Write an executable script outside `PATH`, for explicit tool paths.
    #[cfg(unix)]
    pub fn write_script(&self, relative: &str, script: &str) -> PathBuf {
        let full_path = self.project_path(relative);
        let parent = full_path.parent().expect("script path has a parent");
        std::fs::create_dir_all(parent).expect("Failed to create directories");
        let name = full_path.file_name().expect("script path has a file name");
        write_script(parent, &name.to_string_lossy(), script)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write the user-level `icongen/config.toml`
    pub fn write_user_config(&self, content: &str) {
        write_file(
            &self.config_home.path().join("icongen").join("config.toml"),
            content,
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Write an executable script and wait until it can be exec'd.
///
/// A concurrently forked test process may briefly hold the write handle,
/// which makes exec fail with ETXTBSY.
#[cfg(unix)]
fn write_script(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    use std::process::Stdio;

    let path = dir.join(name);
    let tmp = dir.join(format!(".{}.tmp", name));
    std::fs::write(&tmp, script).expect("Failed to write script");
    std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
    std::fs::rename(&tmp, &path).expect("Failed to install script");

    for _ in 0..50 {
        let probe = Command::new(&path)
            .args(["-h", "1", "/dev/null"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match probe {
            Err(e) if e.raw_os_error() == Some(26) => {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            _ => break,
        }
    }
    path
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    sources: bool,
    missing_sources: Vec<String>,
    project_config: Option<String>,
    user_config: Option<String>,
    #[cfg(unix)]
    tool: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            sources: true,
            missing_sources: Vec::new(),
            project_config: None,
            user_config: None,
            #[cfg(unix)]
            tool: None,
        }
    }

    /// Do not write any `assets/icons/*.svg`
    pub fn without_sources(mut self) -> Self {
        self.sources = false;
        self
    }

    /// Leave out the SVG for `name`
    pub fn without_source(mut self, name: &str) -> Self {
        self.missing_sources.push(name.to_string());
        self
    }

    /// Set `icongen.toml` content
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Set `$XDG_CONFIG_HOME/icongen/config.toml` content
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    /// Put a fake `rsvg-convert` running `script` on `PATH`
    #[cfg(unix)]
    pub fn with_tool(mut self, script: &str) -> Self {
        self.tool = Some(script.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            tool_dir: TempDir::new().expect("Failed to create tool dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            icongen_bin: PathBuf::from(env!("CARGO_BIN_EXE_icongen")),
        };

        if self.sources {
            for name in super::fixtures::ICON_NAMES {
                if self.missing_sources.iter().any(|m| m == name) {
                    continue;
                }
                env.write_project_file(&format!("assets/icons/{}.svg", name), SIMPLE_SVG);
            }
        }
        if let Some(config) = &self.project_config {
            env.write_project_file("icongen.toml", config);
        }
        if let Some(config) = &self.user_config {
            env.write_user_config(config);
        }
        #[cfg(unix)]
        if let Some(script) = &self.tool {
            env.install_tool(script);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
