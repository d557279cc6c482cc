//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Where a generated report ends up, for the dashboard hint.
    pub fn report_destination(self) -> &'static str {
        match self {
            Platform::Web => "The PDF is downloaded by your browser.",
            Platform::Desktop => "The PDF is saved to the MindFuse reports folder.",
        }
    }
}
