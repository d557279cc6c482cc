use dioxus::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::components::{nav_link, NavTarget};
use crate::core::timing;

pub const MIN_PASSWORD_LEN: usize = 8;
/// Sign-up is simulated; there is no account backend.
const SIMULATED_DELAY_MS: u64 = 1_000;
const SUCCESS_TEXT: &str = "Account created successfully!";

const PERKS: [&str; 4] = [
    "Real-time emotion detection",
    "Detailed analytics dashboard",
    "Export reports as PDF",
    "Privacy-focused processing",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// `None` until something has been typed.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    match password.chars().count() {
        0 => None,
        n if n >= MIN_PASSWORD_LEN => Some(PasswordStrength::Strong),
        _ => Some(PasswordStrength::Weak),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose a password.")]
    MissingPassword,
    #[error("Please accept the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
}

/// Required-field checks only. A weak password is shown as weak, not refused.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), RegistrationError> {
    if form.name.trim().is_empty() {
        return Err(RegistrationError::MissingName);
    }
    if !looks_like_email(form.email.trim()) {
        return Err(RegistrationError::InvalidEmail);
    }
    if form.password.is_empty() {
        return Err(RegistrationError::MissingPassword);
    }
    if !form.accepted_terms {
        return Err(RegistrationError::TermsNotAccepted);
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Success,
    Error(String),
}

#[component]
pub fn Register(on_registered: Option<EventHandler<()>>) -> Element {
    let mut form = use_signal(RegistrationForm::default);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let snapshot = form.read().clone();
        if let Err(err) = validate_registration(&snapshot) {
            notice.set(Some(Notice::Error(err.to_string())));
            return;
        }

        notice.set(None);
        loading.set(true);
        spawn(async move {
            timing::sleep_ms(SIMULATED_DELAY_MS).await;
            loading.set(false);
            notice.set(Some(Notice::Success));
            info!("simulated account registration complete");
            if let Some(handler) = on_registered {
                handler.call(());
            }
        });
    };

    let strength = password_strength(&form.read().password);
    let password_type = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };
    let home_link = nav_link(NavTarget::Home, "MindFuse");

    rsx! {
        section { class: "page page-register",
            aside { class: "register__aside",
                div { class: "register__aside-icon", "🎯" }
                h2 { "Join the Future" }
                p {
                    "Create your account and start analyzing emotions with our AI-powered platform."
                }
                ul { class: "register__perks",
                    for perk in PERKS {
                        li { key: "{perk}", class: "register__perk", "✓ {perk}" }
                    }
                }
            }

            div { class: "register__panel",
                div { class: "register__brand",
                    if let Some(link) = home_link {
                        {link}
                    } else {
                        span { class: "gradient-text", "MindFuse" }
                    }
                }
                h1 { "Create account" }
                p { class: "register__lead", "Start your journey with AI-powered emotion analysis." }

                form { class: "register__form", onsubmit,
                    label { class: "field",
                        span { class: "field__label", "Full Name" }
                        input {
                            class: "field__input",
                            r#type: "text",
                            placeholder: "John Doe",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", "Email Address" }
                        input {
                            class: "field__input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { class: "field__label", r#for: "register-password", "Password" }
                        div { class: "field__row",
                            input {
                                id: "register-password",
                                class: "field__input",
                                r#type: "{password_type}",
                                placeholder: "••••••••",
                                value: "{form.read().password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost field__toggle",
                                onclick: move |_| show_password.set(!show_password()),
                                "{toggle_label}"
                            }
                        }
                        if let Some(strength) = strength {
                            div {
                                class: match strength {
                                    PasswordStrength::Strong => "password-strength password-strength--strong",
                                    PasswordStrength::Weak => "password-strength password-strength--weak",
                                },
                                span { class: "password-strength__bar" }
                                span { class: "password-strength__label", "{strength.label()}" }
                            }
                        }
                    }
                    label { class: "field field--checkbox",
                        input {
                            r#type: "checkbox",
                            checked: form.read().accepted_terms,
                            oninput: move |evt| form.write().accepted_terms = evt.checked(),
                        }
                        span { "I agree to the Terms of Service and Privacy Policy" }
                    }

                    {
                        match notice() {
                            Some(Notice::Success) => rsx! {
                                p { class: "notice notice--success", role: "status", "{SUCCESS_TEXT}" }
                            },
                            Some(Notice::Error(message)) => rsx! {
                                p { class: "notice notice--error", role: "alert", "{message}" }
                            },
                            None => rsx! {},
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary register__submit",
                        disabled: loading(),
                        if loading() {
                            span { class: "spinner", aria_hidden: "true" }
                            "Creating account..."
                        } else {
                            "Create Account →"
                        }
                    }
                }
            }
        }
    }
}
