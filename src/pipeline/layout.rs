//! Page layout for the PDF summary sheet, computed without touching the PDF
//! backend.
//!
//! `printpdf` places text at an absolute baseline and has no notion of cells,
//! centring or wrapping, so this module does that work: it walks a top-down
//! cursor down a US-letter page and emits positioned [`TextRun`]s plus one
//! [`ImageBox`]. [`crate::pipeline::artifact`] then paints the plan verbatim.
//!
//! Widths come from the standard Helvetica AFM metrics (the base-14 fonts are
//! not embedded, so their metrics are fixed by the PDF standard). Characters
//! outside printable ASCII are measured at the average digit width.
//!
//! All coordinates are millimetres measured from the top-left corner.

use chrono::NaiveDate;

/// US letter, portrait.
pub const PAGE_WIDTH_MM: f32 = 215.9;
pub const PAGE_HEIGHT_MM: f32 = 279.4;
/// Left, right and top margin.
pub const MARGIN_MM: f32 = 10.0;
/// Horizontal padding inside a wrapped text block.
const CELL_PADDING_MM: f32 = 1.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// The three Helvetica faces used on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

// Advance widths in 1/1000 em for ' ' (0x20) through '~' (0x7E).
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

fn units_to_mm(units: u32, size_pt: f32) -> f32 {
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

impl Face {
    fn char_width(self, c: char) -> u16 {
        let table = match self {
            Face::Regular | Face::Oblique => &HELVETICA,
            Face::Bold => &HELVETICA_BOLD,
        };
        (c as u32)
            .checked_sub(0x20)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Rendered width of `text` at `size_pt`, in millimetres.
    pub fn text_width_mm(self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units_to_mm(units, size_pt)
    }
}

/// One line of text at an absolute position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub face: Face,
    pub size_pt: f32,
    /// Left edge of the text.
    pub x_mm: f32,
    /// Baseline, from the top of the page.
    pub baseline_mm: f32,
}

/// Where the QR raster goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub x_mm: f32,
    /// Top edge, from the top of the page.
    pub y_mm: f32,
    pub size_mm: f32,
}

/// The complete positioned content of the summary sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub title: TextRun,
    pub badge: TextRun,
    pub image: ImageBox,
    pub caption: Vec<TextRun>,
    pub footer: TextRun,
}

/// Top-down cursor over the printable area.
struct Cursor {
    y: f32,
}

impl Cursor {
    fn printable_width() -> f32 {
        PAGE_WIDTH_MM - 2.0 * MARGIN_MM
    }

    /// A single-line cell spanning the printable width, text centred in it.
    fn centred_cell(&mut self, text: String, face: Face, size_pt: f32, height: f32) -> TextRun {
        self.centred_cell_in(text, face, size_pt, height, 0.0)
    }

    fn centred_cell_in(
        &mut self,
        text: String,
        face: Face,
        size_pt: f32,
        height: f32,
        padding: f32,
    ) -> TextRun {
        let inner = Self::printable_width() - 2.0 * padding;
        let width = face.text_width_mm(&text, size_pt);
        let x_mm = MARGIN_MM + padding + (inner - width) / 2.0;
        let baseline_mm = self.y + height / 2.0 + 0.3 * size_pt * PT_TO_MM;
        self.y += height;
        TextRun {
            text,
            face,
            size_pt,
            x_mm,
            baseline_mm,
        }
    }

    fn gap(&mut self, h: f32) {
        self.y += h;
    }
}

// Font sizes (pt) and cell heights (mm), top to bottom.
const TITLE_PT: f32 = 24.0;
const TITLE_CELL: f32 = 15.0;
const BADGE_PT: f32 = 12.0;
const BADGE_CELL: f32 = 8.0;
const CAPTION_PT: f32 = 11.0;
const CAPTION_LINE: f32 = 7.0;
const FOOTER_PT: f32 = 10.0;
const FOOTER_CELL: f32 = 8.0;

impl SheetLayout {
    /// Lay out the sheet for one QR code.
    ///
    /// `content_type` is the lowercase type name; it is shown uppercased.
    pub fn new(
        label: &str,
        content_type: &str,
        encoded_content: &str,
        created: NaiveDate,
        qr_size_mm: f32,
    ) -> Self {
        let mut cur = Cursor { y: MARGIN_MM };

        let title = cur.centred_cell(label.to_string(), Face::Bold, TITLE_PT, TITLE_CELL);
        cur.gap(5.0);

        let badge = cur.centred_cell(
            format!("Type: {}", content_type.to_uppercase()),
            Face::Regular,
            BADGE_PT,
            BADGE_CELL,
        );
        cur.gap(10.0);

        let image = ImageBox {
            x_mm: MARGIN_MM + (Cursor::printable_width() - qr_size_mm) / 2.0,
            y_mm: cur.y,
            size_mm: qr_size_mm,
        };
        cur.gap(qr_size_mm + 10.0);

        let wrap_width = Cursor::printable_width() - 2.0 * CELL_PADDING_MM;
        let caption: Vec<TextRun> = wrap(
            &caption_text(encoded_content),
            Face::Regular,
            CAPTION_PT,
            wrap_width,
        )
        .into_iter()
        .map(|line| {
            cur.centred_cell_in(line, Face::Regular, CAPTION_PT, CAPTION_LINE, CELL_PADDING_MM)
        })
        .collect();
        cur.gap(5.0);

        let footer = cur.centred_cell(footer_text(created), Face::Oblique, FOOTER_PT, FOOTER_CELL);

        Self {
            title,
            badge,
            image,
            caption,
            footer,
        }
    }

    /// The caption's lines, top to bottom.
    pub fn caption_lines(&self) -> Vec<&str> {
        self.caption.iter().map(|r| r.text.as_str()).collect()
    }
}

/// `Encoded: <payload>`.
pub fn caption_text(encoded_content: &str) -> String {
    format!("Encoded: {encoded_content}")
}

/// `Created: March 07, 2025`.
pub fn footer_text(created: NaiveDate) -> String {
    format!("Created: {}", created.format("%B %d, %Y"))
}

/// Greedy line wrapping to `max_width_mm`.
///
/// Breaks after the last space that fits; a word longer than a whole line is
/// split between characters. Explicit `\n` always breaks. The space a break
/// lands on is dropped. Only an empty paragraph yields an empty line.
pub fn wrap(text: &str, face: Face, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, face, size_pt, max_width_mm, &mut lines);
    }
    lines
}

fn wrap_paragraph(text: &str, face: Face, size_pt: f32, max_width_mm: f32, out: &mut Vec<String>) {
    let chars: Vec<char> = text.chars().collect();
    let mut start = 0;
    let mut last_space: Option<usize> = None;
    let mut units: u32 = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            last_space = Some(i);
        }
        units += u32::from(face.char_width(c));

        if units_to_mm(units, size_pt) > max_width_mm && i > start {
            match last_space {
                Some(sp) if sp > start => {
                    out.push(chars[start..sp].iter().collect());
                    start = sp + 1;
                }
                _ => {
                    out.push(chars[start..i].iter().collect());
                    start = i;
                }
            }
            last_space = None;
            units = 0;
            i = start;
            continue;
        }
        i += 1;
    }
    out.push(chars[start..].iter().collect());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    fn layout(label: &str, encoded: &str) -> SheetLayout {
        SheetLayout::new(label, "url", encoded, day(), 100.0)
    }

    #[test]
    fn known_widths() {
        // "Hello" in Helvetica: 722+556+222+222+556 = 2278 units.
        let w = Face::Regular.text_width_mm("Hello", 10.0);
        assert!((w - 2.278 * 10.0 * PT_TO_MM).abs() < 1e-4);
        assert!(Face::Bold.text_width_mm("Hello", 10.0) > w);
        assert_eq!(Face::Oblique.text_width_mm("Hello", 10.0), w);
        assert_eq!(Face::Regular.text_width_mm("", 10.0), 0.0);
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        let w = Face::Regular.text_width_mm("é", 10.0);
        assert!((w - 0.556 * 10.0 * PT_TO_MM).abs() < 1e-4);
    }

    #[test]
    fn text_is_centred_on_the_page() {
        let sheet = layout("My Website", "https://example.com");
        for run in [&sheet.title, &sheet.badge, &sheet.footer] {
            let w = run.face.text_width_mm(&run.text, run.size_pt);
            let centre = run.x_mm + w / 2.0;
            assert!((centre - PAGE_WIDTH_MM / 2.0).abs() < 1e-3, "{run:?}");
        }
    }

    #[test]
    fn image_is_centred_square_below_badge() {
        let sheet = layout("My Website", "https://example.com");
        assert_eq!(sheet.image.size_mm, 100.0);
        let centre = sheet.image.x_mm + sheet.image.size_mm / 2.0;
        assert!((centre - PAGE_WIDTH_MM / 2.0).abs() < 1e-3);
        // 10 top margin + 15 title + 5 gap + 8 badge + 10 gap.
        assert!((sheet.image.y_mm - 48.0).abs() < 1e-3);
    }

    #[test]
    fn blocks_run_top_to_bottom_inside_the_page() {
        let sheet = layout("Label", &"long-token ".repeat(40));
        assert!(sheet.title.baseline_mm < sheet.badge.baseline_mm);
        assert!(sheet.badge.baseline_mm < sheet.image.y_mm);
        let below_image = sheet.image.y_mm + sheet.image.size_mm;
        assert!(sheet.caption.len() > 1);
        assert!(sheet.caption[0].baseline_mm > below_image);
        assert!(sheet.caption.windows(2).all(|w| w[0].baseline_mm < w[1].baseline_mm));
        let last = sheet.caption.last().unwrap();
        assert!(sheet.footer.baseline_mm > last.baseline_mm);
        assert!(sheet.footer.baseline_mm < PAGE_HEIGHT_MM);
    }

    #[test]
    fn badge_and_footer_text() {
        let sheet = layout("x", "https://example.com");
        assert_eq!(sheet.badge.text, "Type: URL");
        assert_eq!(sheet.footer.text, "Created: March 07, 2025");
        assert_eq!(sheet.footer.face, Face::Oblique);
        assert_eq!(sheet.title.face, Face::Bold);
    }

    #[test]
    fn short_caption_is_one_line() {
        let wifi = "WIFI:T:WPA;S:MyNetwork;P:MyPassword;;";
        let sheet = layout("Home WiFi", wifi);
        assert_eq!(
            sheet.caption_lines(),
            vec!["Encoded: WIFI:T:WPA;S:MyNetwork;P:MyPassword;;"]
        );
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        let lines = wrap("aaa bbb ccc", Face::Regular, 10.0, Face::Regular.text_width_mm("aaa bbb", 10.0));
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        let max = Face::Regular.text_width_mm("aaaa", 10.0);
        let lines = wrap("aaaaaaaaaa", Face::Regular, 10.0, max);
        assert_eq!(lines, vec!["aaaa", "aaaa", "aa"]);
    }

    #[test]
    fn wrap_honours_newlines_and_keeps_empty_text() {
        assert_eq!(wrap("a\nb", Face::Regular, 10.0, 100.0), vec!["a", "b"]);
        assert_eq!(wrap("", Face::Regular, 10.0, 100.0), vec![""]);
    }

    #[test]
    fn wrap_never_loses_non_space_characters() {
        let text = format!("Encoded: https://example.com/{}", "segment/".repeat(30));
        let lines = wrap(&text, Face::Regular, CAPTION_PT, 60.0);
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        let expected: String = text.chars().filter(|c| *c != ' ').collect();
        let got: String = rejoined.chars().filter(|c| *c != ' ').collect();
        assert_eq!(got, expected);
        for line in &lines {
            assert!(Face::Regular.text_width_mm(line, CAPTION_PT) <= 60.0 + 1e-3, "{line}");
        }
    }
}
