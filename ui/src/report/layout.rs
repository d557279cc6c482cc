//! Page layout for the clinical emotion report.
//!
//! Layout is expressed in millimetres on an A4 page with the origin at the
//! top-left corner and `y` growing downwards. Backends translate that into
//! their own coordinate systems.

use crate::emotion::Emotion;
use crate::report::metrics::{self, wrap_text};
use crate::report::stats::EmotionStats;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN_X: f32 = 20.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
pub const TOP_MARGIN: f32 = 25.0;
/// Lowest baseline body content may use before a page break.
pub const BOTTOM_LIMIT: f32 = 270.0;
pub const FOOTER_Y: f32 = 285.0;
pub const BAR_MAX_WIDTH: f32 = 120.0;

const BAR_X: f32 = 62.0;
const BAR_HEIGHT: f32 = 5.0;
const ROW_STEP: f32 = 10.0;
const BULLET_INDENT: f32 = 6.0;
const SECTION_GAP: f32 = 8.0;

pub const TITLE: &str = "MindFuse – Clinical Emotion Report";
pub const SUBTITLE: &str = "Emotional wellbeing summary from tracked observations";
pub const FOOTER_TEXT: &str = "MindFuse – AI Powered Emotional Intelligence";

const COVER_DISCLAIMER: &str = "This report summarises automatically detected emotion signals \
captured during a MindFuse session. It is intended to support a conversation with a qualified \
professional and is not a diagnosis, medical advice, or a treatment plan.";

const NARRATIVE_DISCLAIMER: &str = "The observations below were written by a language model from \
the aggregated emotion percentages only. They are supportive suggestions, not clinical findings, \
and may contain mistakes.";

pub const INTERPRETATION_BULLETS: [&str; 4] = [
    "Emotions naturally fluctuate over a day; a single session is a snapshot, not a trend.",
    "A high share of one emotion reflects the context of this session and is not a label for the person.",
    "Detection accuracy depends on lighting, camera angle, and how strongly expressions are shown.",
    "Use these results as a starting point for reflection or a conversation with someone you trust.",
];

const ADVISORY_TITLE: &str = "Important Notice";
const ADVISORY_TEXT: &str = "MindFuse is not a medical device. If you are experiencing persistent \
distress or thoughts of self-harm, contact a qualified health professional or your local \
emergency services immediately.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

const INK: Rgb = Rgb(17, 24, 39);
const MUTED: Rgb = Rgb(100, 116, 139);
const FAINT: Rgb = Rgb(150, 150, 150);
const ACCENT: Rgb = Rgb(99, 102, 241);
const RULE: Rgb = Rgb(203, 213, 225);
const ADVISORY_FILL: Rgb = Rgb(254, 243, 199);
const ADVISORY_STROKE: Rgb = Rgb(217, 119, 6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
}

impl TextStyle {
    const fn new(size: f32, weight: FontWeight, color: Rgb) -> Self {
        Self {
            size,
            weight,
            color,
        }
    }
}

const TITLE_STYLE: TextStyle = TextStyle::new(22.0, FontWeight::Bold, INK);
const SUBTITLE_STYLE: TextStyle = TextStyle::new(12.0, FontWeight::Regular, MUTED);
const HEADING_STYLE: TextStyle = TextStyle::new(14.0, FontWeight::Bold, INK);
const LABEL_STYLE: TextStyle = TextStyle::new(11.0, FontWeight::Bold, INK);
const BODY_STYLE: TextStyle = TextStyle::new(10.0, FontWeight::Regular, INK);
const SMALL_STYLE: TextStyle = TextStyle::new(9.0, FontWeight::Regular, MUTED);
const FOOTER_STYLE: TextStyle = TextStyle::new(8.0, FontWeight::Regular, FAINT);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(Rgb),
    Stroke(Rgb),
    FillStroke { fill: Rgb, stroke: Rgb },
}

/// Drawing surface the layout writes to.
pub trait Canvas {
    /// Starts a fresh page; subsequent calls draw onto it.
    fn begin_page(&mut self);
    /// Draws a single line of text with its baseline at `y`.
    fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle);
    /// Draws a rectangle whose top-left corner is `(x, y)`.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint);
}

/// Inputs to a single render.
#[derive(Debug, Clone, Copy)]
pub struct ReportContent<'a> {
    pub stats: &'a EmotionStats,
    pub narrative: &'a str,
    pub generated_at: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSummary {
    pub pages: usize,
    pub distribution_rows: usize,
    pub narrative_bullets: usize,
}

/// Splits untrusted narrative text into bullet lines: one per non-empty line,
/// trimmed, in original order. Control characters are dropped (whitespace
/// controls such as tabs become spaces).
pub fn narrative_bullets(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(|line| {
            line.chars()
                .filter_map(|ch| match ch {
                    c if c.is_control() && c.is_whitespace() => Some(' '),
                    c if c.is_control() => None,
                    c => Some(c),
                })
                .collect::<String>()
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Lays out the whole report on `canvas`.
pub fn render_report<C: Canvas>(canvas: &mut C, content: &ReportContent<'_>) -> LayoutSummary {
    let mut layout = Layout::new(canvas);

    layout.cover(content.generated_at);
    layout.new_page();
    layout.overview(content.stats);
    let distribution_rows = layout.distribution(content.stats);
    let narrative_bullets = layout.narrative(content.narrative);
    layout.interpretation();
    layout.advisory();

    LayoutSummary {
        pages: layout.finish(),
        distribution_rows,
        narrative_bullets,
    }
}

struct Layout<'c, C: Canvas> {
    canvas: &'c mut C,
    y: f32,
    page: usize,
}

impl<'c, C: Canvas> Layout<'c, C> {
    fn new(canvas: &'c mut C) -> Self {
        Self {
            canvas,
            y: TOP_MARGIN,
            page: 0,
        }
    }

    fn new_page(&mut self) {
        if self.page > 0 {
            self.footer();
        }
        self.canvas.begin_page();
        self.page += 1;
        self.y = TOP_MARGIN;
    }

    fn finish(mut self) -> usize {
        if self.page > 0 {
            self.footer();
        }
        self.page
    }

    fn footer(&mut self) {
        self.canvas.rect(MARGIN_X, FOOTER_Y - 5.0, CONTENT_WIDTH, 0.3, Paint::Fill(RULE));
        self.canvas.text(MARGIN_X, FOOTER_Y, FOOTER_TEXT, FOOTER_STYLE);
        let page_label = format!("Page {}", self.page);
        let x = MARGIN_X + CONTENT_WIDTH - metrics::text_width(&page_label, FOOTER_STYLE.size);
        self.canvas.text(x, FOOTER_Y, &page_label, FOOTER_STYLE);
    }

    /// Breaks the page when `height` more millimetres would cross the limit.
    fn ensure_space(&mut self, height: f32) {
        if self.page == 0 || self.y + height > BOTTOM_LIMIT {
            self.new_page();
        }
    }

    fn line(&mut self, x: f32, text: &str, style: TextStyle) {
        let step = metrics::metrics(style.size).line_h;
        self.ensure_space(step);
        self.y += step;
        self.canvas.text(x, self.y, text, style);
    }

    /// `following` is the height of the first block after the heading; both
    /// land on the same page.
    fn heading(&mut self, title: &str, following: f32) {
        let heading_h = metrics::metrics(HEADING_STYLE.size).line_h;
        self.ensure_space(SECTION_GAP + heading_h + 2.0 + following);
        self.y += SECTION_GAP;
        self.line(MARGIN_X, title, HEADING_STYLE);
        self.y += 2.0;
    }

    fn paragraph(&mut self, text: &str, style: TextStyle) {
        for line in wrap_text(text, style.size, CONTENT_WIDTH) {
            self.line(MARGIN_X, &line, style);
        }
    }

    fn bullet(&mut self, text: &str, style: TextStyle) {
        let text_x = MARGIN_X + BULLET_INDENT;
        let lines = wrap_text(text, style.size, CONTENT_WIDTH - BULLET_INDENT);
        for (idx, line) in lines.iter().enumerate() {
            self.line(text_x, line, style);
            if idx == 0 {
                let asc = metrics::metrics(style.size).asc;
                let mark = 1.3;
                self.canvas.rect(
                    MARGIN_X + 1.5,
                    self.y - asc / 2.0 - mark / 2.0,
                    mark,
                    mark,
                    Paint::Fill(ACCENT),
                );
            }
        }
    }

    fn cover(&mut self, generated_at: &str) {
        self.new_page();
        self.canvas.rect(0.0, 0.0, PAGE_WIDTH, 8.0, Paint::Fill(ACCENT));
        self.y = 40.0;
        self.line(MARGIN_X, TITLE, TITLE_STYLE);
        self.y += 2.0;
        self.line(MARGIN_X, SUBTITLE, SUBTITLE_STYLE);
        self.y += 4.0;
        self.line(MARGIN_X, &format!("Generated: {generated_at}"), SMALL_STYLE);
        self.y += 6.0;
        self.canvas.rect(MARGIN_X, self.y, CONTENT_WIDTH, 0.4, Paint::Fill(RULE));
        self.y += 4.0;
        self.paragraph(COVER_DISCLAIMER, BODY_STYLE);
    }

    fn overview(&mut self, stats: &EmotionStats) {
        let dominant = stats
            .dominant()
            .map(Emotion::label)
            .unwrap_or("None recorded");
        let rows = [
            format!("Total observations: {}", stats.total()),
            format!("Dominant emotion: {dominant}"),
            format!(
                "Emotions observed: {} of {}",
                stats.distinct(),
                Emotion::ALL.len()
            ),
        ];

        let label_h = metrics::metrics(LABEL_STYLE.size).line_h;
        let row_h = metrics::metrics(BODY_STYLE.size).line_h;
        let box_h = label_h + row_h * rows.len() as f32 + 8.0;

        self.heading("Overview", box_h);
        let top = self.y;
        self.canvas.rect(
            MARGIN_X,
            top,
            CONTENT_WIDTH,
            box_h,
            Paint::Stroke(INK),
        );
        self.y += 2.0;
        self.line(MARGIN_X + 5.0, "Session Summary", LABEL_STYLE);
        for row in &rows {
            self.line(MARGIN_X + 5.0, row, BODY_STYLE);
        }
        self.y = top + box_h;
    }

    fn distribution(&mut self, stats: &EmotionStats) -> usize {
        self.heading("Emotion Distribution", ROW_STEP);
        let shares = stats.shares();
        for share in &shares {
            self.ensure_space(ROW_STEP);
            self.y += ROW_STEP;
            let baseline = self.y;
            self.canvas.text(MARGIN_X, baseline, share.emotion.label(), BODY_STYLE);
            self.canvas
                .text(MARGIN_X + 26.0, baseline, &format!("{}%", share.percent), BODY_STYLE);

            let width = bar_width(share.percent);
            self.canvas.rect(
                BAR_X,
                baseline - BAR_HEIGHT + 0.8,
                BAR_MAX_WIDTH,
                BAR_HEIGHT,
                Paint::Fill(RULE),
            );
            if width > 0.0 {
                self.canvas.rect(
                    BAR_X,
                    baseline - BAR_HEIGHT + 0.8,
                    width,
                    BAR_HEIGHT,
                    Paint::Fill(share.emotion.color().into()),
                );
            }
            self.canvas.text(
                BAR_X + BAR_MAX_WIDTH + 3.0,
                baseline,
                &format!("({})", share.count),
                SMALL_STYLE,
            );
        }
        shares.len()
    }

    fn narrative(&mut self, narrative: &str) -> usize {
        self.heading("AI Analysis", metrics::metrics(SMALL_STYLE.size).line_h);
        self.paragraph(NARRATIVE_DISCLAIMER, SMALL_STYLE);
        self.y += 2.0;
        let bullets = narrative_bullets(narrative);
        for bullet in &bullets {
            self.bullet(bullet, BODY_STYLE);
        }
        bullets.len()
    }

    fn interpretation(&mut self) {
        self.heading("Reading This Report", metrics::metrics(BODY_STYLE.size).line_h);
        for text in INTERPRETATION_BULLETS {
            self.bullet(text, BODY_STYLE);
        }
    }

    fn advisory(&mut self) {
        let label_h = metrics::metrics(LABEL_STYLE.size).line_h;
        let body_h = metrics::metrics(BODY_STYLE.size).line_h;
        let lines = wrap_text(ADVISORY_TEXT, BODY_STYLE.size, CONTENT_WIDTH - 10.0);
        let box_h = label_h + body_h * lines.len() as f32 + 8.0;

        self.ensure_space(SECTION_GAP + box_h);
        self.y += SECTION_GAP;
        let top = self.y;
        self.canvas.rect(
            MARGIN_X,
            top,
            CONTENT_WIDTH,
            box_h,
            Paint::FillStroke {
                fill: ADVISORY_FILL,
                stroke: ADVISORY_STROKE,
            },
        );
        self.y += 2.0;
        self.line(MARGIN_X + 5.0, ADVISORY_TITLE, LABEL_STYLE);
        for line in &lines {
            self.line(MARGIN_X + 5.0, line, BODY_STYLE);
        }
        self.y = top + box_h;
    }
}

/// Bar length for a rounded percentage, linear up to [`BAR_MAX_WIDTH`].
pub fn bar_width(percent: u32) -> f32 {
    percent.min(100) as f32 / 100.0 * BAR_MAX_WIDTH
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::emotion::EmotionData;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Page,
        Text { x: f32, y: f32, text: String, style: TextStyle },
        Rect { x: f32, y: f32, width: f32, height: f32, paint: Paint },
    }

    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// Zero-based page index of every text op, paired with the text.
        pub fn texts_by_page(&self) -> Vec<(usize, f32, String)> {
            let mut page = 0usize;
            let mut out = Vec::new();
            for op in &self.ops {
                match op {
                    Op::Page => page += 1,
                    Op::Text { y, text, .. } => out.push((page - 1, *y, text.clone())),
                    Op::Rect { .. } => {}
                }
            }
            out
        }
    }

    impl Canvas for RecordingCanvas {
        fn begin_page(&mut self) {
            self.ops.push(Op::Page);
        }

        fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
            self.ops.push(Op::Text {
                x,
                y,
                text: text.to_string(),
                style,
            });
        }

        fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
            self.ops.push(Op::Rect {
                x,
                y,
                width,
                height,
                paint,
            });
        }
    }

    fn stats(counts: &[(Emotion, usize)]) -> EmotionStats {
        let obs: Vec<EmotionData> = counts
            .iter()
            .flat_map(|&(emotion, n)| std::iter::repeat(emotion).take(n))
            .map(|emotion| EmotionData::new(emotion, 1.0, 0))
            .collect();
        EmotionStats::from_observations(&obs)
    }

    fn render(stats: &EmotionStats, narrative: &str) -> (RecordingCanvas, LayoutSummary) {
        let mut canvas = RecordingCanvas::default();
        let summary = render_report(
            &mut canvas,
            &ReportContent {
                stats,
                narrative,
                generated_at: "2026-10-16 09:30 UTC",
            },
        );
        (canvas, summary)
    }

    #[test]
    fn narrative_lines_become_trimmed_bullets() {
        assert_eq!(
            narrative_bullets("Line one.\n\n  Line two.\n"),
            vec!["Line one.".to_string(), "Line two.".to_string()]
        );
    }

    #[test]
    fn narrative_keeps_order_and_duplicates() {
        let bullets = narrative_bullets("b\r\na\r\nb\n\t\n");
        assert_eq!(bullets, vec!["b", "a", "b"]);
    }

    #[test]
    fn narrative_strips_control_characters() {
        let bullets = narrative_bullets("Calm\u{0007} mood\tobserved\u{001b}");
        assert_eq!(bullets, vec!["Calm mood observed"]);
    }

    #[test]
    fn whitespace_only_narrative_renders_no_bullets() {
        let stats = stats(&[(Emotion::Happy, 2)]);
        let (canvas, summary) = render(&stats, "  \n\n\t ");
        assert_eq!(summary.narrative_bullets, 0);
        let joined = canvas.texts().join(" ");
        for fixed in INTERPRETATION_BULLETS {
            assert!(joined.contains(fixed), "missing fixed bullet {fixed:?}");
        }
    }

    #[test]
    fn cover_and_overview_on_separate_pages() {
        let stats = stats(&[(Emotion::Happy, 3), (Emotion::Sad, 3), (Emotion::Neutral, 1)]);
        let (canvas, summary) = render(&stats, "- steady");
        assert!(summary.pages >= 2);

        let by_page = canvas.texts_by_page();
        let page_of = |needle: &str| {
            by_page
                .iter()
                .find(|(_, _, text)| text.starts_with(needle))
                .map(|(page, _, _)| *page)
        };
        assert_eq!(page_of(TITLE), Some(0));
        assert_eq!(page_of("Generated: 2026-10-16 09:30 UTC"), Some(0));
        assert_eq!(page_of("Total observations: 7"), Some(1));
        assert_eq!(page_of("Dominant emotion: Happy"), Some(1));
        assert_eq!(page_of("Emotions observed: 3 of 7"), Some(1));
    }

    #[test]
    fn distribution_lists_only_nonzero_emotions() {
        let stats = stats(&[(Emotion::Angry, 1), (Emotion::Neutral, 3)]);
        let (canvas, summary) = render(&stats, "");
        assert_eq!(summary.distribution_rows, 2);

        let texts = canvas.texts();
        assert!(texts.contains(&"Angry"));
        assert!(texts.contains(&"25%"));
        assert!(texts.contains(&"Neutral"));
        assert!(texts.contains(&"75%"));
        for absent in ["Happy", "Sad", "Fearful", "Disgusted", "Surprised"] {
            assert!(!texts.contains(&absent), "{absent} should not be drawn");
        }
    }

    #[test]
    fn bars_scale_linearly_with_percentage() {
        assert_eq!(bar_width(0), 0.0);
        assert_eq!(bar_width(100), BAR_MAX_WIDTH);
        assert!((bar_width(25) - BAR_MAX_WIDTH / 4.0).abs() < 1e-4);

        let stats = stats(&[(Emotion::Happy, 1)]);
        let (canvas, _) = render(&stats, "");
        let happy = Rgb::from(Emotion::Happy.color());
        let bar = canvas.ops.iter().find_map(|op| match op {
            Op::Rect {
                width,
                paint: Paint::Fill(color),
                ..
            } if *color == happy => Some(*width),
            _ => None,
        });
        assert_eq!(bar, Some(BAR_MAX_WIDTH));
    }

    #[test]
    fn every_page_gets_a_footer() {
        let long: String = (0..120)
            .map(|i| format!("Observation {i}: mood remained broadly stable across the session."))
            .collect::<Vec<_>>()
            .join("\n");
        let stats = stats(&[(Emotion::Sad, 2), (Emotion::Happy, 1)]);
        let (canvas, summary) = render(&stats, &long);

        assert!(summary.pages > 2);
        assert_eq!(summary.narrative_bullets, 120);
        let footers = canvas
            .texts_by_page()
            .into_iter()
            .filter(|(_, _, text)| text == FOOTER_TEXT)
            .map(|(page, _, _)| page)
            .collect::<Vec<_>>();
        assert_eq!(footers, (0..summary.pages).collect::<Vec<_>>());
    }

    #[test]
    fn body_text_never_crosses_bottom_limit() {
        let wall = "word ".repeat(2_000);
        let stats = stats(&[(Emotion::Fearful, 5)]);
        let (canvas, _) = render(&stats, &wall);

        for (_, y, text) in canvas.texts_by_page() {
            if text == FOOTER_TEXT || text.starts_with("Page ") {
                assert_eq!(y, FOOTER_Y);
            } else {
                assert!(y <= BOTTOM_LIMIT, "{text:?} drawn at {y}");
            }
        }
    }

    #[test]
    fn headings_stay_with_following_line() {
        let filler: String = (0..40)
            .map(|i| format!("Point {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let stats = stats(&[(Emotion::Surprised, 2)]);
        let (canvas, _) = render(&stats, &filler);
        let by_page = canvas.texts_by_page();

        for heading in ["Overview", "Emotion Distribution", "AI Analysis", "Reading This Report"] {
            let idx = by_page
                .iter()
                .position(|(_, _, text)| text == heading)
                .unwrap_or_else(|| panic!("missing heading {heading}"));
            let (page, _, _) = &by_page[idx];
            let (next_page, _, _) = &by_page[idx + 1];
            assert_eq!(page, next_page, "{heading} separated from its body");
        }
    }
}
