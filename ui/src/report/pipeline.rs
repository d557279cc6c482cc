//! The report action: aggregate, ask for narrative, render, deliver.

use time::{macros::format_description, OffsetDateTime};
use tracing::{error, info, warn};

use crate::emotion::EmotionData;
use crate::report::delivery::{report_filename, ReportSink};
use crate::report::error::ReportError;
use crate::report::layout::{render_report, ReportContent, TITLE};
use crate::report::narrative::{NarrativePrompt, NarrativeService};
use crate::report::pdf::PdfCanvas;
use crate::report::stats::EmotionStats;

/// Everything one report run needs from the caller.
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest<'a> {
    pub history: &'a [EmotionData],
    pub current: Option<&'a EmotionData>,
    pub temperature: f32,
    pub now: OffsetDateTime,
}

/// What was handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredReport {
    pub filename: String,
    pub location: Option<String>,
    pub pages: usize,
    pub bytes: usize,
}

/// Busy indicator driven by [`run_report`].
pub trait BusyFlag {
    fn set_busy(&mut self, busy: bool);
}

impl BusyFlag for bool {
    fn set_busy(&mut self, busy: bool) {
        *self = busy;
    }
}

/// Runs the pipeline once. An empty history returns `Ok(None)` without
/// touching the service or the sink.
pub async fn generate_report(
    request: ReportRequest<'_>,
    service: &dyn NarrativeService,
    sink: &dyn ReportSink,
) -> Result<Option<DeliveredReport>, ReportError> {
    if request.history.is_empty() {
        return Ok(None);
    }

    let stats = EmotionStats::from_observations(request.history);
    let prompt = NarrativePrompt::build(&stats, request.current, request.temperature);
    info!(
        observations = stats.total(),
        distinct = stats.distinct(),
        "requesting report narrative"
    );

    let narrative = service.narrate(&prompt).await?;
    info!(chars = narrative.len(), "narrative received");
    if narrative.trim().is_empty() {
        warn!("narrative service returned no text; rendering fixed sections only");
    }

    let generated_at = format_generated_at(request.now);
    let mut canvas = PdfCanvas::new(TITLE)?;
    let layout = render_report(
        &mut canvas,
        &ReportContent {
            stats: &stats,
            narrative: &narrative,
            generated_at: &generated_at,
        },
    );
    let bytes = canvas.into_bytes()?;
    let size = bytes.len();

    let filename = report_filename(request.now);
    let location = sink.deliver(&filename, bytes).await?;
    info!(%filename, pages = layout.pages, size, "report delivered");

    Ok(Some(DeliveredReport {
        filename,
        location,
        pages: layout.pages,
        bytes: size,
    }))
}

/// [`generate_report`] wrapped with the busy indicator.
///
/// The flag is left untouched for an empty history, raised before the
/// narrative request, and always lowered afterwards. Failures are logged and
/// swallowed: no partial document, no retry.
pub async fn run_report<B: BusyFlag>(
    busy: &mut B,
    request: ReportRequest<'_>,
    service: &dyn NarrativeService,
    sink: &dyn ReportSink,
) -> Option<DeliveredReport> {
    if request.history.is_empty() {
        return None;
    }

    busy.set_busy(true);
    let outcome = generate_report(request, service, sink).await;
    busy.set_busy(false);

    match outcome {
        Ok(delivered) => delivered,
        Err(err) => {
            error!("Doctor report generation failed: {err}");
            None
        }
    }
}

fn format_generated_at(now: OffsetDateTime) -> String {
    now.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
    ))
    .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use time::macros::datetime;

    use crate::emotion::Emotion;
    use crate::report::error::NarrativeError;

    struct FakeService {
        reply: Result<&'static str, u16>,
        calls: Cell<usize>,
        prompts: RefCell<Vec<String>>,
    }

    impl FakeService {
        fn ok(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: Cell::new(0),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl NarrativeService for FakeService {
        fn narrate<'a>(
            &'a self,
            prompt: &'a NarrativePrompt,
        ) -> LocalBoxFuture<'a, Result<String, NarrativeError>> {
            self.calls.set(self.calls.get() + 1);
            self.prompts.borrow_mut().push(prompt.text.clone());
            let reply = self.reply;
            async move {
                reply.map(str::to_string).map_err(|status| NarrativeError::Status {
                    status,
                    body: "upstream unavailable".into(),
                })
            }
            .boxed_local()
        }
    }

    #[derive(Default)]
    struct MemorySink {
        saved: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl ReportSink for MemorySink {
        fn deliver<'a>(
            &'a self,
            filename: &'a str,
            bytes: Vec<u8>,
        ) -> LocalBoxFuture<'a, Result<Option<String>, ReportError>> {
            self.saved.borrow_mut().push((filename.to_string(), bytes));
            async { Ok(None) }.boxed_local()
        }
    }

    struct FullDisk;

    impl ReportSink for FullDisk {
        fn deliver<'a>(
            &'a self,
            _filename: &'a str,
            _bytes: Vec<u8>,
        ) -> LocalBoxFuture<'a, Result<Option<String>, ReportError>> {
            async { Err(ReportError::Delivery("disk full".into())) }.boxed_local()
        }
    }

    /// Records every transition so tests can assert the exact sequence.
    #[derive(Default)]
    struct BusyLog(Vec<bool>);

    impl BusyFlag for BusyLog {
        fn set_busy(&mut self, busy: bool) {
            self.0.push(busy);
        }
    }

    fn history(emotions: &[Emotion]) -> Vec<EmotionData> {
        emotions
            .iter()
            .enumerate()
            .map(|(idx, &e)| EmotionData::new(e, 0.9, 1_000 * idx as i64))
            .collect()
    }

    fn request<'a>(history: &'a [EmotionData]) -> ReportRequest<'a> {
        ReportRequest {
            history,
            current: history.last(),
            temperature: 0.3,
            now: datetime!(2026-10-16 09:30:00 UTC),
        }
    }

    #[test]
    fn empty_history_is_a_silent_no_op() {
        let service = FakeService::ok("- unused");
        let sink = MemorySink::default();
        let mut busy = BusyLog::default();

        let delivered = block_on(run_report(&mut busy, request(&[]), &service, &sink));

        assert!(delivered.is_none());
        assert_eq!(service.calls.get(), 0);
        assert!(sink.saved.borrow().is_empty());
        assert!(busy.0.is_empty());
    }

    #[test]
    fn successful_run_delivers_one_pdf() {
        let obs = history(&[Emotion::Happy, Emotion::Sad, Emotion::Happy]);
        let service = FakeService::ok("Clinician Insights\n- Predominantly positive affect.\n");
        let sink = MemorySink::default();
        let mut busy = false;

        let delivered = block_on(run_report(&mut busy, request(&obs), &service, &sink))
            .expect("report should be delivered");

        assert!(!busy);
        assert_eq!(service.calls.get(), 1);
        let prompt = &service.prompts.borrow()[0];
        assert!(prompt.contains("Happy: 67%\nSad: 33%"));
        assert!(prompt.contains("Current emotion:\nhappy"));

        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, delivered.filename);
        assert!(saved[0].1.starts_with(b"%PDF"));
        assert_eq!(delivered.bytes, saved[0].1.len());
        assert!(delivered.pages >= 2);
    }

    #[test]
    fn busy_flag_rises_then_falls() {
        let obs = history(&[Emotion::Neutral]);
        let service = FakeService::ok("");
        let sink = MemorySink::default();
        let mut busy = BusyLog::default();

        block_on(run_report(&mut busy, request(&obs), &service, &sink));
        assert_eq!(busy.0, vec![true, false]);
    }

    #[test]
    fn service_failure_leaves_no_artifact() {
        let obs = history(&[Emotion::Angry, Emotion::Fearful]);
        let service = FakeService::failing(503);
        let sink = MemorySink::default();
        let mut busy = BusyLog::default();

        let delivered = block_on(run_report(&mut busy, request(&obs), &service, &sink));

        assert!(delivered.is_none());
        assert_eq!(service.calls.get(), 1);
        assert!(sink.saved.borrow().is_empty());
        assert_eq!(busy.0, vec![true, false]);
    }

    #[test]
    fn delivery_failure_leaves_no_artifact() {
        let obs = history(&[Emotion::Happy, Emotion::Neutral]);
        let service = FakeService::ok("- steady");
        let mut busy = BusyLog::default();

        let delivered = block_on(run_report(&mut busy, request(&obs), &service, &FullDisk));

        assert!(delivered.is_none());
        assert_eq!(service.calls.get(), 1);
        assert_eq!(busy.0, vec![true, false]);

        let result = block_on(generate_report(request(&obs), &service, &FullDisk));
        assert!(matches!(result, Err(ReportError::Delivery(msg)) if msg == "disk full"));
    }

    #[test]
    fn failure_is_reported_by_generate_report() {
        let obs = history(&[Emotion::Sad]);
        let service = FakeService::failing(500);
        let sink = MemorySink::default();

        let result = block_on(generate_report(request(&obs), &service, &sink));
        assert!(matches!(
            result,
            Err(ReportError::Narrative(NarrativeError::Status { status: 500, .. }))
        ));
    }

    #[test]
    fn repeated_runs_use_distinct_filenames() {
        let obs = history(&[Emotion::Surprised, Emotion::Happy]);
        let service = FakeService::ok("- ok");
        let sink = MemorySink::default();
        let mut busy = false;

        for _ in 0..3 {
            block_on(run_report(&mut busy, request(&obs), &service, &sink));
        }

        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 3);
        assert_ne!(saved[0].0, saved[1].0);
        assert_ne!(saved[1].0, saved[2].0);
        assert_ne!(saved[0].0, saved[2].0);
    }

    #[test]
    fn generated_at_is_human_readable() {
        assert_eq!(
            format_generated_at(datetime!(2026-10-16 09:30:05 UTC)),
            "2026-10-16 09:30:05 UTC"
        );
    }
}
