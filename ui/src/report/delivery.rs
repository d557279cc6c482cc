//! Handing the finished document to the user.

use std::sync::atomic::{AtomicI64, Ordering};

use futures::future::{FutureExt, LocalBoxFuture};
use time::OffsetDateTime;

use crate::report::error::ReportError;

pub const FILENAME_PREFIX: &str = "mindfuse-clinical-report";
pub const PDF_MIME: &str = "application/pdf";

static LAST_STAMP_MS: AtomicI64 = AtomicI64::new(i64::MIN);

/// `mindfuse-clinical-report-<unix ms>.pdf`.
///
/// Two reports requested within the same millisecond get consecutive
/// suffixes, so names never repeat within a session.
pub fn report_filename(now: OffsetDateTime) -> String {
    let wall_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    let stamp = match LAST_STAMP_MS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(wall_ms.max(last.saturating_add(1)))
    }) {
        Ok(last) | Err(last) => wall_ms.max(last.saturating_add(1)),
    };
    format!("{FILENAME_PREFIX}-{stamp}.pdf")
}

/// Where a rendered report goes. `Ok(Some(path))` when the sink knows the
/// final location, `Ok(None)` for browser downloads.
pub trait ReportSink {
    fn deliver<'a>(
        &'a self,
        filename: &'a str,
        bytes: Vec<u8>,
    ) -> LocalBoxFuture<'a, Result<Option<String>, ReportError>>;
}

/// Browser download on the web; a file in the reports folder on desktop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSink {
    #[cfg(not(target_arch = "wasm32"))]
    dir: Option<std::path::PathBuf>,
}

impl DownloadSink {
    /// Writes into `dir` instead of the per-user data directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl ReportSink for DownloadSink {
    fn deliver<'a>(
        &'a self,
        filename: &'a str,
        bytes: Vec<u8>,
    ) -> LocalBoxFuture<'a, Result<Option<String>, ReportError>> {
        async move {
            #[cfg(target_arch = "wasm32")]
            {
                browser_download(filename, &bytes)?;
                Ok(None)
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let dir = match &self.dir {
                    Some(dir) => dir.clone(),
                    None => reports_dir()?,
                };
                std::fs::create_dir_all(&dir).map_err(delivery_error)?;
                let path = dir.join(filename);
                std::fs::write(&path, &bytes).map_err(delivery_error)?;
                Ok(Some(path.display().to_string()))
            }
        }
        .boxed_local()
    }
}

fn delivery_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Delivery(err.to_string())
}

/// Hands the PDF to the browser through a temporary object URL.
#[cfg(target_arch = "wasm32")]
fn browser_download(filename: &str, bytes: &[u8]) -> Result<(), ReportError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).buffer());
    let props = BlobPropertyBag::new();
    props.set_type(PDF_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| delivery_error("could not wrap the report in a Blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| delivery_error("could not create an object URL"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| delivery_error("no document to attach the download to"))?;
    let body = document
        .body()
        .ok_or_else(|| delivery_error("document has no body"))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| delivery_error("could not create a download link"))?;

    link.set_href(&url);
    link.set_download(filename);
    link.style().set_property("display", "none").ok();
    body.append_child(&link).ok();
    link.click();
    link.remove();
    Url::revoke_object_url(&url).ok();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn reports_dir() -> Result<std::path::PathBuf, ReportError> {
    directories::ProjectDirs::from("com", "MindFuse", "MindFuse")
        .map(|dirs| dirs.data_dir().join("reports"))
        .ok_or_else(|| delivery_error("no home directory for the reports folder"))
}
