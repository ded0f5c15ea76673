//! Output naming: label → dated slug → first free `(png, pdf)` pair.
//!
//! Artifacts accumulate in one flat archive directory, so names must be both
//! filesystem-safe and unique. The stem is `<slug>_<YYYY-MM-DD>`; if either
//! file of that stem already exists, `-2`, `-3`, … are tried in turn.
//!
//! The free-slot scan is advisory. Two invocations racing on the same label
//! on the same day can pick the same stem; this tool is single-operator.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Used when nothing survives sanitisation (all punctuation, emoji, …).
pub const FALLBACK_SLUG: &str = "qr-code";

/// Maximum slug length in characters, before whitespace is collapsed.
pub const MAX_SLUG_CHARS: usize = 50;

static RE_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Build the dated file stem for `label`.
///
/// Steps, in this order:
/// 1. drop everything except word characters, whitespace and `-`
/// 2. keep the first 50 characters (may cut a word in half)
/// 3. trim, turn whitespace runs into `-`, lowercase
/// 4. fall back to `qr-code` if empty
/// 5. append `_` and the ISO date
pub fn slug(label: &str, date: NaiveDate) -> String {
    let cleaned = RE_UNSAFE.replace_all(label, "");
    let truncated: String = cleaned.chars().take(MAX_SLUG_CHARS).collect();
    let mut safe = RE_WHITESPACE
        .replace_all(truncated.trim(), "-")
        .to_lowercase();
    if safe.is_empty() {
        safe = FALLBACK_SLUG.to_string();
    }
    format!("{safe}_{}", date.format("%Y-%m-%d"))
}

/// The pair of artifact paths for one run, sharing a stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    pub pdf: PathBuf,
}

impl OutputPaths {
    fn for_stem(dir: &Path, stem: &str) -> Self {
        Self {
            png: dir.join(format!("{stem}.png")),
            pdf: dir.join(format!("{stem}.pdf")),
        }
    }

    fn both_free(&self) -> bool {
        !self.png.exists() && !self.pdf.exists()
    }
}

/// Find the first stem among `base`, `base-2`, `base-3`, … for which neither
/// the `.png` nor the `.pdf` exists in `archive_dir`.
///
/// Unbounded: keeps counting until a free pair turns up.
pub fn resolve_output_paths(archive_dir: &Path, base_name: &str) -> OutputPaths {
    let mut paths = OutputPaths::for_stem(archive_dir, base_name);
    let mut counter: u64 = 2;
    while !paths.both_free() {
        paths = OutputPaths::for_stem(archive_dir, &format!("{base_name}-{counter}"));
        counter += 1;
    }
    debug!("Resolved output stem: {}", paths.png.display());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn basic_label() {
        assert_eq!(slug("My Website", day()), "my-website_2025-03-07");
    }

    #[test]
    fn strips_punctuation_and_collapses_whitespace() {
        assert_eq!(slug("  Home   WiFi!! (guest)  ", day()), "home-wifi-guest_2025-03-07");
        assert_eq!(slug("a\t\nb", day()), "a-b_2025-03-07");
        assert_eq!(slug("keep_under-score", day()), "keep_under-score_2025-03-07");
    }

    #[test]
    fn falls_back_when_nothing_survives() {
        assert_eq!(slug("!!!", day()), "qr-code_2025-03-07");
        assert_eq!(slug("🎉🎉", day()), "qr-code_2025-03-07");
        assert_eq!(slug("   ", day()), "qr-code_2025-03-07");
        assert_eq!(slug("", day()), "qr-code_2025-03-07");
    }

    #[test]
    fn truncates_before_collapsing() {
        // 48 chars of "a", a space, then "bcdef": the cut lands mid-word.
        let label = format!("{} bcdef", "a".repeat(48));
        let s = slug(&label, day());
        assert_eq!(s, format!("{}-b_2025-03-07", "a".repeat(48)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let label = "é".repeat(60);
        let s = slug(&label, day());
        assert_eq!(s, format!("{}_2025-03-07", "é".repeat(50)));
    }

    #[test]
    fn url_label() {
        assert_eq!(
            slug("https://example.com/a?b=c", day()),
            "httpsexamplecomabc_2025-03-07"
        );
    }

    #[test]
    fn slug_shape_invariants() {
        for label in [
            "My Website",
            "WIFI:T:WPA;S:MyNetwork;P:MyPassword;;",
            "+1-555-123-4567",
            "   ",
            "Ünïcödé Label",
            &"word ".repeat(40),
        ] {
            let s = slug(label, day());
            let stem = s.strip_suffix("_2025-03-07").expect("date suffix");
            assert!(!stem.is_empty(), "{label:?}");
            assert!(stem.chars().count() <= MAX_SLUG_CHARS, "{label:?}");
            assert!(
                stem.chars().all(|c| c == '-' || c == '_' || c.is_alphanumeric()),
                "{label:?} -> {s}"
            );
            assert_eq!(stem, stem.to_lowercase());
        }
    }

    #[test]
    fn first_free_stem_is_base() {
        let dir = TempDir::new().unwrap();
        let paths = resolve_output_paths(dir.path(), "x_2025-03-07");
        assert_eq!(paths.png, dir.path().join("x_2025-03-07.png"));
        assert_eq!(paths.pdf, dir.path().join("x_2025-03-07.pdf"));
    }

    #[test]
    fn second_call_after_writing_gets_dash_two() {
        let dir = TempDir::new().unwrap();
        let first = resolve_output_paths(dir.path(), "x");
        fs::write(&first.png, b"png").unwrap();
        fs::write(&first.pdf, b"pdf").unwrap();

        let second = resolve_output_paths(dir.path(), "x");
        assert_eq!(second.png, dir.path().join("x-2.png"));
        assert_eq!(second.pdf, dir.path().join("x-2.pdf"));
    }

    #[test]
    fn either_file_blocks_a_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.pdf"), b"").unwrap();
        fs::write(dir.path().join("x-2.png"), b"").unwrap();

        let paths = resolve_output_paths(dir.path(), "x");
        assert_eq!(paths.png, dir.path().join("x-3.png"));
    }
}
