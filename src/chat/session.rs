//! Conversation session
//!
//! Append-only message store plus the visibility machine of one mounted
//! widget. Everything here is synchronous; timers live in
//! [`crate::chat::widget`] and hand back [`PendingReply`] tickets.

use thiserror::Error;
use uuid::Uuid;

use crate::chat::responder::{generate_reply, BotReply};
use crate::chat::rules::{GREETING, GREETING_SUGGESTIONS};
use crate::chat::visibility::{Transition, VisibilityController, VisibilityEvent};
use crate::types::message::{Message, MessageId};

/// Errors raised when delivering a bot reply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session {0} has been disposed")]
    Disposed(Uuid),
    #[error("Reply ticket {0} is no longer outstanding")]
    StaleReply(u64),
}

/// Handle for the one reply a session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    ticket: u64,
    utterance: String,
}

impl PendingReply {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn utterance(&self) -> &str {
        &self.utterance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Blank or whitespace-only input
    Empty,
    /// A bot reply is still being typed
    ReplyPending,
    Disposed,
}

/// What happened to a send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent {
        message_id: MessageId,
        reply: PendingReply,
    },
    Ignored(IgnoreReason),
}

/// Outcome of a visibility event, including the greeting it may have seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityOutcome {
    pub transition: Transition,
    pub greeting: Option<MessageId>,
}

#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    messages: Vec<Message>,
    is_typing: bool,
    visibility: VisibilityController,
    next_message_id: u64,
    next_ticket: u64,
    outstanding: Option<u64>,
    disposed: bool,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            is_typing: false,
            visibility: VisibilityController::new(),
            next_message_id: 1,
            next_ticket: 1,
            outstanding: None,
            disposed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn has_user_interacted(&self) -> bool {
        self.visibility.has_user_interacted()
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Feed a visibility event. Opening the window or showing the bubble
    /// seeds the greeting message if the conversation is still empty.
    pub fn handle_visibility(&mut self, event: VisibilityEvent) -> VisibilityOutcome {
        if self.disposed {
            return VisibilityOutcome {
                transition: Transition {
                    changed: false,
                    greeting_shown: false,
                    opened: false,
                },
                greeting: None,
            };
        }

        let transition = self.visibility.handle(event);
        let greeting = if transition.opened || transition.greeting_shown {
            self.ensure_greeting()
        } else {
            None
        };
        VisibilityOutcome {
            transition,
            greeting,
        }
    }

    /// Append the initial greeting once, only into an empty conversation.
    pub fn ensure_greeting(&mut self) -> Option<MessageId> {
        if self.disposed || !self.messages.is_empty() {
            return None;
        }
        let id = self.allocate_id();
        let suggestions = GREETING_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        self.messages.push(Message::bot(id, GREETING, suggestions));
        tracing::debug!(session = %self.id, message = %id, "Greeting appended");
        Some(id)
    }

    /// Append a visitor message and open a pending reply for it.
    ///
    /// Blank input is ignored, and so is any send while the previous reply
    /// is still pending, which keeps replies in the order of their prompts.
    pub fn append_user_message(&mut self, text: &str) -> SendOutcome {
        if self.disposed {
            return SendOutcome::Ignored(IgnoreReason::Disposed);
        }
        if text.trim().is_empty() {
            return SendOutcome::Ignored(IgnoreReason::Empty);
        }
        if self.is_typing {
            return SendOutcome::Ignored(IgnoreReason::ReplyPending);
        }

        let message_id = self.allocate_id();
        self.messages.push(Message::user(message_id, text));
        self.is_typing = true;
        self.visibility.mark_interacted();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.outstanding = Some(ticket);

        tracing::debug!(session = %self.id, message = %message_id, ticket, "User message appended");
        SendOutcome::Sent {
            message_id,
            reply: PendingReply {
                ticket,
                utterance: text.to_string(),
            },
        }
    }

    /// Append a bot message and stop the typing indicator.
    pub fn append_bot_message(&mut self, reply: BotReply) -> Result<&Message, SessionError> {
        if self.disposed {
            return Err(SessionError::Disposed(self.id));
        }
        let id = self.allocate_id();
        self.messages.push(reply.into_message(id));
        self.is_typing = false;
        self.outstanding = None;
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Generate and append the reply a [`PendingReply`] was waiting for.
    pub fn deliver_reply(&mut self, pending: &PendingReply) -> Result<&Message, SessionError> {
        if self.disposed {
            return Err(SessionError::Disposed(self.id));
        }
        if self.outstanding != Some(pending.ticket) {
            return Err(SessionError::StaleReply(pending.ticket));
        }
        let reply = generate_reply(&pending.utterance);
        self.append_bot_message(reply)
    }

    /// Tear the session down. Outstanding replies become undeliverable.
    pub fn dispose(&mut self) {
        if !self.disposed {
            tracing::debug!(session = %self.id, messages = self.messages.len(), "Session disposed");
        }
        self.disposed = true;
        self.outstanding = None;
        self.is_typing = false;
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::visibility::Visibility;
    use crate::types::message::Sender;

    fn sent(outcome: SendOutcome) -> PendingReply {
        match outcome {
            SendOutcome::Sent { reply, .. } => reply,
            SendOutcome::Ignored(reason) => panic!("send ignored: {:?}", reason),
        }
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ConversationSession::new();
        for text in ["", "   ", "\n\t "] {
            assert_eq!(
                session.append_user_message(text),
                SendOutcome::Ignored(IgnoreReason::Empty)
            );
        }
        assert!(session.messages().is_empty());
        assert!(!session.is_typing());
        assert!(!session.has_user_interacted());
    }

    #[test]
    fn test_send_then_deliver() {
        let mut session = ConversationSession::new();
        let pending = sent(session.append_user_message("hello"));

        let last = session.last_message().expect("user message");
        assert_eq!(last.content, "hello");
        assert_eq!(last.sender, Sender::User);
        assert!(session.is_typing());
        assert!(session.has_user_interacted());

        session.deliver_reply(&pending).expect("deliver");
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::Bot);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_user_content_kept_as_typed() {
        let mut session = ConversationSession::new();
        sent(session.append_user_message("  padded  "));
        assert_eq!(session.messages()[0].content, "  padded  ");
    }

    #[test]
    fn test_second_send_refused_while_typing() {
        let mut session = ConversationSession::new();
        let pending = sent(session.append_user_message("first"));
        assert_eq!(
            session.append_user_message("second"),
            SendOutcome::Ignored(IgnoreReason::ReplyPending)
        );
        session.deliver_reply(&pending).expect("deliver");
        sent(session.append_user_message("second"));
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_ids_increase_in_creation_order() {
        let mut session = ConversationSession::new();
        session.ensure_greeting();
        let pending = sent(session.append_user_message("ai please"));
        session.deliver_reply(&pending).expect("deliver");
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let mut session = ConversationSession::new();
        let pending = sent(session.append_user_message("one"));
        session.deliver_reply(&pending).expect("deliver");
        assert_eq!(
            session.deliver_reply(&pending),
            Err(SessionError::StaleReply(pending.ticket()))
        );
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_disposed_session_rejects_reply() {
        let mut session = ConversationSession::new();
        let pending = sent(session.append_user_message("hello"));
        let id = session.id();
        session.dispose();
        assert_eq!(session.deliver_reply(&pending), Err(SessionError::Disposed(id)));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(
            session.append_user_message("again"),
            SendOutcome::Ignored(IgnoreReason::Disposed)
        );
    }

    #[test]
    fn test_open_seeds_greeting_once() {
        let mut session = ConversationSession::new();
        let outcome = session.handle_visibility(VisibilityEvent::Open);
        assert!(outcome.greeting.is_some());
        assert_eq!(session.visibility().visibility(), Visibility::Open);

        session.handle_visibility(VisibilityEvent::Close);
        let again = session.handle_visibility(VisibilityEvent::Open);
        assert!(again.greeting.is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].suggestions.len(), 5);
    }

    #[test]
    fn test_idle_timeout_seeds_greeting() {
        let mut session = ConversationSession::new();
        let outcome = session.handle_visibility(VisibilityEvent::IdleTimeout);
        assert!(outcome.transition.greeting_shown);
        assert!(outcome.greeting.is_some());
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_no_greeting_over_existing_conversation() {
        let mut session = ConversationSession::new();
        let pending = sent(session.append_user_message("hi"));
        session.deliver_reply(&pending).expect("deliver");
        assert!(session.handle_visibility(VisibilityEvent::Open).greeting.is_none());
        assert_eq!(session.messages()[0].content, "hi");
    }
}
