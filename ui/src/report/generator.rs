use std::rc::Rc;

use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::config::NarrativeConfig;
use crate::emotion::EmotionData;
use crate::report::delivery::{DownloadSink, ReportSink};
use crate::report::narrative::{ChatCompletionsClient, NarrativeService};
use crate::report::pipeline::{run_report, BusyFlag, ReportRequest};

/// Collaborators for the report button. Provide one through context to swap
/// the narrative service or the delivery target; otherwise the button builds
/// the default set from the environment on first render.
#[derive(Clone)]
pub struct ReportServices {
    pub narrative: Rc<dyn NarrativeService>,
    pub sink: Rc<dyn ReportSink>,
    pub temperature: f32,
}

impl ReportServices {
    pub fn new(narrative: Rc<dyn NarrativeService>, sink: Rc<dyn ReportSink>) -> Self {
        Self {
            narrative,
            sink,
            temperature: crate::core::config::DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_config(config: NarrativeConfig) -> Self {
        let temperature = config.temperature;
        Self {
            narrative: Rc::new(ChatCompletionsClient::new(config)),
            sink: Rc::new(DownloadSink::default()),
            temperature,
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(NarrativeConfig::from_env())
    }
}

impl BusyFlag for Signal<bool> {
    fn set_busy(&mut self, busy: bool) {
        self.set(busy);
    }
}

#[component]
pub fn ReportGenerator(
    history: Vec<EmotionData>,
    current: Option<EmotionData>,
    is_disabled: bool,
) -> Element {
    let services = use_hook(|| {
        try_consume_context::<ReportServices>().unwrap_or_else(ReportServices::from_env)
    });
    let loading = use_signal(|| false);

    let onclick = move |_| {
        if loading() {
            return;
        }
        let history = history.clone();
        let current = current.clone();
        let services = services.clone();
        let mut busy = loading;
        // Scoped to this component: unmounting drops the task before it can
        // touch `loading` again.
        spawn(async move {
            let request = ReportRequest {
                history: &history,
                current: current.as_ref(),
                temperature: services.temperature,
                now: OffsetDateTime::now_utc(),
            };
            run_report(
                &mut busy,
                request,
                services.narrative.as_ref(),
                services.sink.as_ref(),
            )
            .await;
        });
    };

    let label = if loading() {
        "Generating Doctor Report..."
    } else {
        "Generate Doctor Report (PDF)"
    };

    rsx! {
        button {
            r#type: "button",
            class: "button button--secondary report-generator",
            disabled: is_disabled || loading(),
            "aria-busy": "{loading()}",
            onclick,
            span { class: "report-generator__icon", "📄" }
            "{label}"
        }
    }
}
