//! Message bubbles, quick-reply chips and the typing indicator

use crate::types::message::Message;
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: Message, on_suggestion: EventHandler<String>) -> Element {
    if !message.is_bot() {
        // User message, right-aligned gradient bubble
        return rsx! {
            div { class: "message-row justify-end animate-fade-in-up",
                div { class: "message-user", "{message.content}" }
                div { class: "user-avatar", "👤" }
            }
        };
    }

    rsx! {
        div { class: "message-row justify-start animate-fade-in-up",
            div { class: "bot-avatar small", "🤖" }
            div {
                class: "message-bot",
                p { "{message.content}" }

                if !message.suggestions.is_empty() {
                    div {
                        class: "suggestions",
                        for suggestion in message.suggestions.iter().cloned() {
                            button {
                                class: "suggestion-chip",
                                onclick: {
                                    let suggestion = suggestion.clone();
                                    move |_| on_suggestion.call(suggestion.clone())
                                },
                                "{suggestion}"
                            }
                        }
                    }
                }

                if !message.recommended_contacts.is_empty() {
                    div {
                        class: "contacts",
                        for contact in message.recommended_contacts.iter() {
                            div {
                                class: "contact-card",
                                span { class: "contact-name", "{contact.name}" }
                                span { class: "contact-meta", "{contact.domain} · {contact.availability}" }
                                span { class: "contact-score", "{contact.match_score}% match" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Three bouncing dots while a reply is pending
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row justify-start",
            div { class: "bot-avatar small", "🤖" }
            div {
                class: "message-bot typing",
                for delay in ["0ms", "150ms", "300ms"] {
                    span { class: "typing-dot", style: "animation-delay: {delay};" }
                }
            }
        }
    }
}
