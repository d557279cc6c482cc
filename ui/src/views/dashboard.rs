use dioxus::prelude::*;

use crate::core::format::{format_confidence, pluralize};
use crate::core::platform::Platform;
use crate::core::timing;
use crate::emotion::{Emotion, EmotionData, EmotionLog, EmotionSource};
use crate::report::{EmotionStats, ReportGenerator};

const RECENT_LIMIT: usize = 8;
/// Manual tags are certain by definition.
const MANUAL_CONFIDENCE: f32 = 1.0;

#[component]
pub fn Dashboard() -> Element {
    let mut log = use_signal(EmotionLog::new);

    let history: Vec<EmotionData> = log.read().history().to_vec();
    let current = log.read().current().cloned();
    let recent: Vec<EmotionData> = log.read().recent(RECENT_LIMIT).cloned().collect();
    let stats = EmotionStats::from_observations(&history);
    let shares = stats.shares();
    let dominant = stats.dominant();
    let summary = pluralize(stats.total(), "observation", "observations");
    let destination = Platform::current().report_destination();
    let current_meta = current.as_ref().map(|obs| {
        format!(
            "Confidence {} · {}",
            format_confidence(obs.confidence),
            timing::format_clock(obs.timestamp_ms)
        )
    });
    let recent_rows: Vec<(String, Emotion, String)> = recent
        .iter()
        .enumerate()
        .map(|(idx, obs)| {
            (
                format!("{}-{idx}", obs.timestamp_ms),
                obs.emotion,
                timing::format_clock(obs.timestamp_ms),
            )
        })
        .collect();

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                h1 { "Emotion Dashboard" }
                p { class: "dashboard__lead",
                    "Tag each emotion as you observe it. The distribution updates live and "
                    "the full session can be exported as a clinical PDF report."
                }
            }

            div { class: "dashboard__grid",
                div { class: "card dashboard-card",
                    h2 { class: "dashboard-card__title", "Tag an emotion" }
                    div { class: "emotion-picker",
                        for emotion in Emotion::ALL {
                            button {
                                key: "{emotion.key()}",
                                r#type: "button",
                                class: "emotion-chip {emotion.css_modifier()}",
                                onclick: move |_| {
                                    log.write()
                                        .record(EmotionData::new(emotion, MANUAL_CONFIDENCE, timing::now_ms()));
                                },
                                span { class: "emotion-chip__emoji", "{emotion.emoji()}" }
                                span { class: "emotion-chip__label", "{emotion.label()}" }
                            }
                        }
                    }
                }

                div { class: "card dashboard-card current-emotion",
                    h2 { class: "dashboard-card__title", "Current emotion" }
                    if let Some(obs) = current.as_ref() {
                        div { class: "current-emotion__value {obs.emotion.css_modifier()}",
                            span { class: "current-emotion__emoji", "{obs.emotion.emoji()}" }
                            span { class: "current-emotion__label", "{obs.emotion.label()}" }
                        }
                        if let Some(meta) = current_meta.as_ref() {
                            p { class: "current-emotion__meta", "{meta}" }
                        }
                    } else {
                        p { class: "dashboard-card__placeholder", "No emotion recorded yet." }
                    }
                }

                div { class: "card dashboard-card distribution",
                    h2 { class: "dashboard-card__title", "Distribution" }
                    p { class: "distribution__summary",
                        "{summary}"
                        if let Some(emotion) = dominant {
                            " · mostly {emotion.label()}"
                        }
                    }
                    if shares.is_empty() {
                        p { class: "dashboard-card__placeholder",
                            "The distribution appears once you tag an emotion."
                        }
                    } else {
                        ul { class: "distribution__rows",
                            for share in shares.iter() {
                                li { key: "{share.emotion.key()}", class: "distribution__row",
                                    span { class: "distribution__label", "{share.emotion.label()}" }
                                    span { class: "distribution__track",
                                        span {
                                            class: "distribution__bar {share.emotion.css_modifier()}",
                                            style: "width: {share.percent}%",
                                        }
                                    }
                                    span { class: "distribution__value", "{share.percent}% ({share.count})" }
                                }
                            }
                        }
                    }
                }

                div { class: "card dashboard-card history",
                    div { class: "history__header",
                        h2 { class: "dashboard-card__title", "Recent history" }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            disabled: history.is_empty(),
                            onclick: move |_| log.write().clear(),
                            "Clear"
                        }
                    }
                    if recent_rows.is_empty() {
                        p { class: "dashboard-card__placeholder", "Nothing recorded in this session." }
                    } else {
                        ol { class: "history__items",
                            for (key, emotion, clock) in recent_rows.iter() {
                                li { key: "{key}", class: "history__item",
                                    span { class: "history__emoji", "{emotion.emoji()}" }
                                    span { class: "history__label", "{emotion.label()}" }
                                    span { class: "history__time", "{clock}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card report-panel",
                div { class: "report-panel__text",
                    h2 { class: "dashboard-card__title", "Doctor report" }
                    p {
                        "Generates a multi-page PDF with the session distribution and an "
                        "AI-written clinical summary. {destination}"
                    }
                }
                ReportGenerator {
                    is_disabled: history.is_empty(),
                    current: current.clone(),
                    history: history.clone(),
                }
            }
        }
    }
}
