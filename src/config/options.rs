// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Base endpoint; the query goes in as `?query=`.
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(API_BASE_URL),
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl LookupOptions {
    /// Defaults, with the endpoint taken from `SPEC_LOOKUP_ENDPOINT` when set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(v) = std::env::var(ENDPOINT_ENV) {
            let v = v.trim();
            if !v.is_empty() {
                opts.endpoint = s!(v);
            }
        }
        opts
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// `None` → stdout.
    out_path: Option<OutputPath>,
}

impl ExportOptions {
    pub fn out_path(&self) -> Option<PathBuf> {
        let p = self.out_path.as_ref()?;
        let mut path = p.dir.clone();
        match &p.file_name {
            Some(name) => path.push(name),
            None => path.push(join!(DEFAULT_FILE, ".", self.format.ext())),
        }
        Some(path)
    }

    /// Parse a user path. A trailing separator or an existing directory means
    /// "put `device.<ext>` in there"; anything else is taken as the file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }

        let p = Path::new(s);
        let is_dir = s.ends_with('/') || s.ends_with('\\') || p.is_dir();

        self.out_path = Some(if is_dir {
            OutputPath { dir: p.to_path_buf(), file_name: None }
        } else {
            OutputPath {
                dir: p.parent().map(Path::to_path_buf).unwrap_or_default(),
                file_name: p.file_name().map(|n| n.to_os_string()),
            }
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: Option<OsString>,
}
