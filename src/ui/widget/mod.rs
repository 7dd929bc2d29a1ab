//! Floating assistant widget
//!
//! Renders a mounted [`ChatWidget`]: the round trigger, the greeting bubble
//! and the chat window. All state lives in the widget; this component only
//! mirrors its snapshot into a signal whenever an event arrives.

pub mod greeting;
pub mod input;
pub mod message;

use std::rc::Rc;

use dioxus::prelude::*;
use greeting::GreetingBubble;
use input::ChatInput;
use message::{MessageBubble, TypingIndicator};
use tokio::sync::broadcast::error::RecvError;

use crate::app::AppState;
use crate::chat::{ChatWidget, Visibility, WidgetEvent, WidgetSnapshot};

const SCROLL_TO_LATEST: &str =
    "document.getElementById('jarvis-messages-end')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn FloatingChatbot() -> Element {
    let app_state = use_context::<AppState>();

    // Dropping the last Rc unmounts the widget and cancels its timers.
    let widget = use_hook(|| {
        let config = app_state.settings.read().widget_config();
        Rc::new(ChatWidget::mount(config))
    });

    let mut snapshot = use_signal(WidgetSnapshot::default);

    {
        let widget = widget.clone();
        use_future(move || {
            let widget = widget.clone();
            async move {
                let mut events = widget.subscribe();
                snapshot.set(widget.snapshot());
                loop {
                    match events.recv().await {
                        Ok(event) => {
                            snapshot.set(widget.snapshot());
                            match event {
                                WidgetEvent::MessageAppended(_) => {
                                    let _ = dioxus::document::eval(SCROLL_TO_LATEST);
                                }
                                WidgetEvent::ContactSuggested => {
                                    tracing::debug!("Assistant pointed the visitor to #contact");
                                }
                                _ => {}
                            }
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Widget view lagged by {} events", skipped);
                            snapshot.set(widget.snapshot());
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            }
        });
    }

    let state = snapshot.read().clone();
    let is_open = state.visibility == Visibility::Open;
    let show_greeting = state.greeting_bubble && !is_open;
    let assistant_name = widget.config().assistant_name.clone();

    let trigger_title = if is_open {
        "Close chat".to_string()
    } else {
        format!("Chat with {}", assistant_name)
    };

    let on_toggle = {
        let widget = widget.clone();
        move |_: MouseEvent| {
            widget.toggle();
        }
    };
    let on_close = {
        let widget = widget.clone();
        move |_: MouseEvent| {
            widget.close();
        }
    };
    let on_open_from_bubble = {
        let widget = widget.clone();
        move |_: ()| {
            widget.open();
        }
    };
    let on_dismiss = {
        let widget = widget.clone();
        move |_: ()| {
            widget.dismiss_greeting();
        }
    };
    let on_send = {
        let widget = widget.clone();
        move |text: String| {
            widget.send(&text);
        }
    };
    let on_suggestion = {
        let widget = widget.clone();
        move |text: String| {
            widget.select_suggestion(&text);
        }
    };

    rsx! {
        if show_greeting {
            GreetingBubble {
                assistant_name: assistant_name.clone(),
                on_open: on_open_from_bubble,
                on_dismiss: on_dismiss,
            }
        }

        if is_open {
            div {
                class: "chat-window animate-pop-in",

                // Header
                div {
                    class: "chat-header",
                    div {
                        class: "flex items-center gap-3",
                        div {
                            class: "avatar-wrap",
                            div { class: "bot-avatar", "🤖" }
                            div { class: "online-dot" }
                        }
                        div {
                            h3 { class: "chat-title", "{assistant_name} AI" }
                            p { class: "chat-subtitle", "Your Tech Consultant" }
                        }
                    }
                    button {
                        class: "ghost-button",
                        title: "Close",
                        onclick: on_close,
                        "✕"
                    }
                }

                // Messages
                div {
                    class: "chat-messages custom-scrollbar",
                    for message in state.messages.iter().cloned() {
                        MessageBubble {
                            key: "{message.id.0}",
                            message: message,
                            on_suggestion: on_suggestion.clone(),
                        }
                    }
                    if state.is_typing {
                        TypingIndicator {}
                    }
                    div { id: "jarvis-messages-end" }
                }

                ChatInput {
                    on_send: on_send,
                    is_typing: state.is_typing,
                }
            }
        }

        // Floating trigger
        button {
            class: "chat-trigger",
            title: "{trigger_title}",
            onclick: on_toggle,
            if is_open { "✕" } else { "💬" }
            if show_greeting {
                span { class: "trigger-badge", "⚡" }
            }
        }
    }
}
