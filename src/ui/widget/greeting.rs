//! Unsolicited greeting bubble shown next to the collapsed trigger

use dioxus::prelude::*;

#[component]
pub fn GreetingBubble(
    assistant_name: String,
    on_open: EventHandler<()>,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "greeting-bubble animate-slide-in",
            onclick: move |_| on_open.call(()),

            div {
                class: "flex items-start gap-3",
                div { class: "bot-avatar", "🤖" }
                div {
                    class: "flex-1",
                    p { class: "greeting-title", "Hi! I'm {assistant_name} 👋" }
                    p { class: "greeting-text", "Need help with your tech project? I'm here to assist!" }
                }
                button {
                    class: "ghost-button",
                    title: "Dismiss",
                    onclick: move |evt: MouseEvent| {
                        // Keep the click from reaching the bubble, which would open the chat.
                        evt.stop_propagation();
                        on_dismiss.call(());
                    },
                    "✕"
                }
            }
        }
    }
}
