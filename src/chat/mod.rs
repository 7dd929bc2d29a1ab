//! Jarvis chat widget core
//!
//! Framework-independent state of the floating assistant: the canned reply
//! table, the conversation session with its visibility machine, and the
//! tokio-driven widget runtime that the UI mounts.

pub mod delay;
pub mod responder;
pub mod rules;
pub mod session;
pub mod visibility;
pub mod widget;

pub use responder::{generate_reply, BotReply};
pub use session::{ConversationSession, IgnoreReason, SendOutcome, SessionError};
pub use visibility::{Visibility, VisibilityController, VisibilityEvent};
pub use widget::{ChatWidget, WidgetEvent, WidgetSnapshot};
