//! Chat input component - send button disabled while a reply is pending

use dioxus::prelude::*;

#[component]
pub fn ChatInput(on_send: EventHandler<String>, is_typing: bool) -> Element {
    let mut text = use_signal(String::new);

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !is_typing && !text().trim().is_empty() {
                on_send.call(text());
                text.set(String::new());
            }
        }
    };

    let can_send = !is_typing && !text().trim().is_empty();
    let send_class = if can_send {
        "send-button"
    } else {
        "send-button disabled"
    };

    rsx! {
        div {
            class: "chat-input",
            input {
                class: "flex-1",
                r#type: "text",
                placeholder: "Ask me about your project...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: handle_keydown,
            }
            button {
                class: "{send_class}",
                title: "Send (Enter)",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        on_send.call(text());
                        text.set(String::new());
                    }
                },
                "➤"
            }
        }
    }
}
