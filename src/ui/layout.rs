//! Host page around the widget
//!
//! A bare stand-in for the marketing page: header with the theme switch,
//! an empty body with a contact anchor, and the floating assistant.

use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::ui::widget::FloatingChatbot;
use dioxus::prelude::*;

const STYLES: &str = include_str!("../../assets/jarvis.css");

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let is_dark = app_state.settings.read().is_dark();
    let theme_class = if is_dark { "theme-dark" } else { "theme-light" };
    let theme_label = if is_dark { "Light mode" } else { "Dark mode" };

    let toggle_theme = move |_: MouseEvent| {
        let mut signal = app_state.settings;
        let mut settings = signal.write();
        settings.theme = if settings.is_dark() { "light" } else { "dark" }.to_string();
        if let Err(error) = save_settings(&settings) {
            tracing::error!("Failed to save settings: {}", error);
        }
    };

    rsx! {
        style { "{STYLES}" }
        div {
            class: "page {theme_class}",

            header {
                class: "page-header",
                span { class: "brand", "TechNova" }
                button {
                    class: "ghost-button",
                    onclick: toggle_theme,
                    "{theme_label}"
                }
            }

            main {
                class: "page-body",
                p {
                    class: "muted",
                    "Crafting next-generation technology solutions across AI, Cloud, Web, Mobile, and DevOps domains."
                }
                section {
                    id: "contact",
                    class: "contact-anchor",
                    h2 { "Contact" }
                    p { class: "muted", "Tell us about your project and we'll get back to you." }
                }
            }

            footer {
                class: "page-footer muted",
                "© 2024 TechNova. All rights reserved."
            }

            FloatingChatbot {}
        }
    }
}
