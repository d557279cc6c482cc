//! Clinical emotion report: aggregation, narrative, PDF layout and delivery.

pub mod delivery;
pub mod error;
pub mod generator;
pub mod layout;
pub mod metrics;
pub mod narrative;
pub mod pdf;
pub mod pipeline;
pub mod stats;

pub use delivery::{report_filename, DownloadSink, ReportSink};
pub use error::{NarrativeError, ReportError};
pub use generator::{ReportGenerator, ReportServices};
pub use layout::{render_report, Canvas, LayoutSummary, ReportContent};
pub use narrative::{ChatCompletionsClient, NarrativePrompt, NarrativeService};
pub use pdf::PdfCanvas;
pub use pipeline::{generate_report, run_report, BusyFlag, DeliveredReport, ReportRequest};
pub use stats::{EmotionShare, EmotionStats};
