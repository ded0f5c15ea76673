//! CLI binary for qr-archive.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `Request` + `GenerateConfig` and prints the summary.

use anyhow::{Context, Result};
use clap::Parser;
use qr_archive::{generate, ContentType, GenerateConfig, Request};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # A website, titled
  genqr --content "https://example.com" --label "My Website"

  # Email address (encoded as mailto:)
  genqr --content "paul@example.com"

  # Phone number (encoded as tel:)
  genqr --content "+1-555-123-4567" --label "Office Phone"

  # Wi-Fi credentials
  genqr --content "WIFI:T:WPA;S:MyNetwork;P:MyPassword;;" --label "Home WiFi"

  # Force plain text
  genqr --content "Hello World" --type text

TYPE DETECTION (first match wins):
  WIFI:...                       wifi
  http://, https://, www.        url
  mailto:, name@domain.tld       email
  tel:, +1 (555) 123-4567        phone
  anything else                  text

OUTPUT:
  <archive>/<slug>_<YYYY-MM-DD>.png and .pdf; -2, -3, ... is appended when
  either file already exists.

ENVIRONMENT VARIABLES:
  GENQR_ARCHIVE_DIR    Archive directory (default: <install root>/archive)
  GENQR_MODULE_SIZE    Pixels per QR module
  RUST_LOG             Log filter for stderr diagnostics
"#;

/// Generate a QR code and save it as PNG + PDF to the archive.
#[derive(Parser, Debug)]
#[command(
    name = "genqr",
    version,
    about = "Generate a QR code and save it as PNG + PDF to the archive",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// The data to encode (URL, text, email, phone, Wi-Fi string, etc.).
    #[arg(long)]
    content: String,

    /// Human-readable label for the PDF title and filename. Defaults to the content.
    #[arg(long)]
    label: Option<String>,

    /// Content type. Auto-detected if omitted.
    #[arg(long = "type", value_enum)]
    content_type: Option<TypeArg>,

    /// Directory receiving the PNG and PDF.
    #[arg(long, env = "GENQR_ARCHIVE_DIR")]
    archive_dir: Option<PathBuf>,

    /// Pixels per QR module in the PNG (1–50).
    #[arg(long, env = "GENQR_MODULE_SIZE", default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(1..=50))]
    module_size: u32,

    /// Omit the 4-module white border around the symbol.
    #[arg(long)]
    no_border: bool,

    /// Side of the QR square on the PDF page, in millimetres (20–190).
    #[arg(long, default_value_t = 100.0)]
    qr_size_mm: f32,

    /// Print the result as JSON instead of the summary block.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TypeArg {
    Url,
    Text,
    Email,
    Phone,
    Wifi,
    Other,
}

impl From<TypeArg> for ContentType {
    fn from(v: TypeArg) -> Self {
        match v {
            TypeArg::Url => ContentType::Url,
            TypeArg::Text => ContentType::Text,
            TypeArg::Email => ContentType::Email,
            TypeArg::Phone => ContentType::Phone,
            TypeArg::Wifi => ContentType::Wifi,
            TypeArg::Other => ContentType::Other,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries only the summary; diagnostics go to stderr.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build request and config ─────────────────────────────────────────
    let request = Request::new(
        cli.content.clone(),
        cli.label.clone(),
        cli.content_type.map(ContentType::from),
    )
    .context("Invalid input")?;
    let config = build_config(&cli)?;

    // ── Run ──────────────────────────────────────────────────────────────
    let output = generate(&request, &config).context("QR generation failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else {
        println!("{output}");
    }

    Ok(())
}

/// Map CLI args to `GenerateConfig`.
fn build_config(cli: &Cli) -> Result<GenerateConfig> {
    let mut builder = GenerateConfig::builder()
        .module_size(cli.module_size)
        .quiet_zone(!cli.no_border)
        .qr_size_mm(cli.qr_size_mm);

    if let Some(ref dir) = cli.archive_dir {
        builder = builder.archive_dir(dir);
    }

    builder.build().context("Invalid configuration")
}
