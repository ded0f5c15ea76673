//! Configuration for a QR generation run.
//!
//! Everything that is not part of the [`crate::Request`] itself lives in
//! [`GenerateConfig`], built via [`GenerateConfigBuilder`]. There is no config
//! file; the CLI fills the builder from flags and environment variables.

use crate::error::QrArchiveError;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Name of the archive directory under the install root.
pub const ARCHIVE_DIR_NAME: &str = "archive";

/// Settings for one QR generation run.
///
/// # Example
/// ```rust
/// use qr_archive::GenerateConfig;
///
/// let config = GenerateConfig::builder()
///     .archive_dir("/tmp/qr-archive")
///     .module_size(8)
///     .build()
///     .unwrap();
/// assert_eq!(config.module_size, 8);
/// ```
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory receiving the PNG and PDF. Created if missing.
    ///
    /// Default: `archive/` next to the directory holding the executable
    /// (for `/opt/site/bin/genqr` that is `/opt/site/archive`), or
    /// `./archive` if the executable path cannot be determined.
    pub archive_dir: PathBuf,

    /// Pixels per QR module in the PNG. Range: 1–50. Default: 10.
    pub module_size: u32,

    /// Surround the symbol with the standard 4-module white border. Default: true.
    ///
    /// Scanners need the quiet zone to find the finder patterns; only turn
    /// it off if the artifact will be placed on a white background anyway.
    pub quiet_zone: bool,

    /// Side of the QR square on the PDF page, in mm. Range: 20–190. Default: 100.
    pub qr_size_mm: f32,

    /// Directory for the scoped temp PNG used during PDF assembly.
    /// `None` uses the system temp directory.
    pub temp_dir: Option<PathBuf>,

    /// Date used for filenames and the PDF footer. `None` means today
    /// (local time), resolved at the start of each run.
    pub today: Option<NaiveDate>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            module_size: 10,
            quiet_zone: true,
            qr_size_mm: 100.0,
            temp_dir: None,
            today: None,
        }
    }
}

impl GenerateConfig {
    /// Create a new builder for `GenerateConfig`.
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder {
            config: Self::default(),
        }
    }

    /// The date this run is stamped with.
    pub fn resolve_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// `<install root>/archive`, where the install root is the parent of the
/// executable's directory.
pub fn default_archive_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| install_root(&exe).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ARCHIVE_DIR_NAME)
}

fn install_root(exe: &Path) -> Option<&Path> {
    exe.parent()?.parent()
}

/// Builder for [`GenerateConfig`].
#[derive(Debug)]
pub struct GenerateConfigBuilder {
    config: GenerateConfig,
}

impl GenerateConfigBuilder {
    pub fn archive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.archive_dir = dir.into();
        self
    }

    pub fn module_size(mut self, px: u32) -> Self {
        self.config.module_size = px;
        self
    }

    pub fn quiet_zone(mut self, v: bool) -> Self {
        self.config.quiet_zone = v;
        self
    }

    pub fn qr_size_mm(mut self, mm: f32) -> Self {
        self.config.qr_size_mm = mm;
        self
    }

    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(dir.into());
        self
    }

    pub fn today(mut self, date: NaiveDate) -> Self {
        self.config.today = Some(date);
        self
    }

    /// Build the configuration, validating ranges.
    pub fn build(self) -> Result<GenerateConfig, QrArchiveError> {
        let c = &self.config;
        if !(1_u32..=50).contains(&c.module_size) {
            return Err(QrArchiveError::InvalidConfig(format!(
                "module size must be 1–50 px, got {}",
                c.module_size
            )));
        }
        if !(20.0_f32..=190.0).contains(&c.qr_size_mm) {
            return Err(QrArchiveError::InvalidConfig(format!(
                "QR size must be 20–190 mm, got {}",
                c.qr_size_mm
            )));
        }
        if c.archive_dir.as_os_str().is_empty() {
            return Err(QrArchiveError::InvalidConfig(
                "archive directory must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
