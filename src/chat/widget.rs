//! Mounted chat widget
//!
//! Wraps a [`ConversationSession`] with the two timers the widget needs:
//! the idle timer that may pop the greeting bubble, and the simulated
//! thinking delay before each bot reply. Both run as tokio tasks that only
//! hold a weak reference to the session and are aborted on teardown.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::chat::delay::{ReplyDelay, UniformDelay};
use crate::chat::responder::match_rule;
use crate::chat::rules::RULES;
use crate::chat::session::{ConversationSession, PendingReply, SendOutcome, VisibilityOutcome};
use crate::chat::visibility::{Transition, Visibility, VisibilityEvent};
use crate::types::config::WidgetConfig;
use crate::types::message::{Message, MessageId};
use crate::types::routing::RuleCategory;

const EVENT_CAPACITY: usize = 64;

/// Change notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A message was appended; the view should scroll to the latest one.
    MessageAppended(MessageId),
    TypingChanged(bool),
    VisibilityChanged {
        visibility: Visibility,
        greeting_bubble: bool,
    },
    /// The assistant offered to book a call; hosts may route to their contact section.
    ContactSuggested,
}

/// Render state of the widget at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSnapshot {
    pub messages: Vec<Message>,
    pub is_typing: bool,
    pub visibility: Visibility,
    pub greeting_bubble: bool,
    pub has_user_interacted: bool,
}

impl Default for WidgetSnapshot {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            is_typing: false,
            visibility: Visibility::Closed,
            greeting_bubble: false,
            has_user_interacted: false,
        }
    }
}

pub struct ChatWidget {
    session: Arc<Mutex<ConversationSession>>,
    events: broadcast::Sender<WidgetEvent>,
    delay: Arc<dyn ReplyDelay>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    config: WidgetConfig,
}

fn lock(session: &Mutex<ConversationSession>) -> MutexGuard<'_, ConversationSession> {
    session.lock().expect("session mutex poisoned")
}

fn publish(events: &broadcast::Sender<WidgetEvent>, batch: Vec<WidgetEvent>) {
    for event in batch {
        // No subscriber is fine; nothing is rendering yet.
        let _ = events.send(event);
    }
}

fn visibility_events(session: &ConversationSession, outcome: &VisibilityOutcome) -> Vec<WidgetEvent> {
    let mut batch = Vec::new();
    if let Some(id) = outcome.greeting {
        batch.push(WidgetEvent::MessageAppended(id));
    }
    if outcome.transition.changed {
        batch.push(WidgetEvent::VisibilityChanged {
            visibility: session.visibility().visibility(),
            greeting_bubble: session.visibility().greeting_bubble(),
        });
    }
    batch
}

impl ChatWidget {
    /// Mount a widget with the uniform thinking delay from `config`.
    ///
    /// Must be called from within a tokio runtime: the idle timer starts here.
    pub fn mount(config: WidgetConfig) -> Self {
        let delay = UniformDelay::new(config.reply_delay_min, config.reply_delay_max);
        Self::with_delay(config, Arc::new(delay))
    }

    /// Mount with a custom delay strategy.
    pub fn with_delay(config: WidgetConfig, delay: Arc<dyn ReplyDelay>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let widget = Self {
            session: Arc::new(Mutex::new(ConversationSession::new())),
            events,
            delay,
            tasks: Mutex::new(Vec::new()),
            config,
        };
        tracing::info!(session = %widget.session_id(), "Chat widget mounted");
        widget.start_idle_timer();
        widget
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session_id(&self) -> uuid::Uuid {
        lock(&self.session).id()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        let session = lock(&self.session);
        WidgetSnapshot {
            messages: session.messages().to_vec(),
            is_typing: session.is_typing(),
            visibility: session.visibility().visibility(),
            greeting_bubble: session.visibility().greeting_bubble(),
            has_user_interacted: session.has_user_interacted(),
        }
    }

    pub fn open(&self) -> Transition {
        self.apply(VisibilityEvent::Open)
    }

    pub fn close(&self) -> Transition {
        self.apply(VisibilityEvent::Close)
    }

    pub fn toggle(&self) -> Transition {
        self.apply(VisibilityEvent::Toggle)
    }

    pub fn dismiss_greeting(&self) -> Transition {
        self.apply(VisibilityEvent::DismissGreeting)
    }

    /// Send visitor text and schedule the bot reply.
    pub fn send(&self, text: &str) -> SendOutcome {
        let outcome = lock(&self.session).append_user_message(text);
        match &outcome {
            SendOutcome::Sent { message_id, reply } => {
                publish(
                    &self.events,
                    vec![
                        WidgetEvent::MessageAppended(*message_id),
                        WidgetEvent::TypingChanged(true),
                    ],
                );
                self.schedule_reply(reply.clone());
            }
            SendOutcome::Ignored(reason) => {
                tracing::debug!(?reason, "Send ignored");
            }
        }
        outcome
    }

    /// A clicked quick reply is sent exactly as if it had been typed.
    pub fn select_suggestion(&self, suggestion: &str) -> SendOutcome {
        self.send(suggestion)
    }

    /// Tear the widget down. Pending timers are cancelled and the session
    /// refuses any late reply.
    pub fn unmount(self) {
        drop(self);
    }

    fn apply(&self, event: VisibilityEvent) -> Transition {
        let (transition, batch) = {
            let mut session = lock(&self.session);
            let outcome = session.handle_visibility(event);
            (outcome.transition, visibility_events(&session, &outcome))
        };
        publish(&self.events, batch);
        transition
    }

    fn start_idle_timer(&self) {
        let session = Arc::downgrade(&self.session);
        let events = self.events.clone();
        let wait = self.config.greeting_delay;

        let handle = tokio::spawn(async move {
            sleep(wait).await;
            let Some(session) = Weak::upgrade(&session) else {
                return;
            };
            let batch = {
                let mut session = lock(&session);
                let outcome = session.handle_visibility(VisibilityEvent::IdleTimeout);
                if outcome.transition.greeting_shown {
                    tracing::info!(session = %session.id(), "Greeting bubble shown");
                }
                visibility_events(&session, &outcome)
            };
            publish(&events, batch);
        });
        self.track(handle);
    }

    fn schedule_reply(&self, pending: PendingReply) {
        let session = Arc::downgrade(&self.session);
        let events = self.events.clone();
        let wait = self.delay.next_delay();
        tracing::debug!(ticket = pending.ticket(), delay_ms = wait.as_millis() as u64, "Reply scheduled");

        let handle = tokio::spawn(async move {
            sleep(wait).await;
            let Some(session) = Weak::upgrade(&session) else {
                return;
            };
            let delivered = lock(&session).deliver_reply(&pending).map(|message| message.id);
            match delivered {
                Ok(id) => {
                    let mut batch = vec![
                        WidgetEvent::MessageAppended(id),
                        WidgetEvent::TypingChanged(false),
                    ];
                    let category = match_rule(RULES, pending.utterance()).map(|rule| rule.category);
                    if category == Some(RuleCategory::Scheduling) {
                        batch.push(WidgetEvent::ContactSuggested);
                    }
                    publish(&events, batch);
                }
                Err(e) => tracing::debug!("Dropping reply: {}", e),
            }
        });
        self.track(handle);
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut tasks = self.tasks.lock().expect("tasks mutex poisoned");
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for task in tasks.drain(..) {
                task.abort();
            }
        }
        if let Ok(mut session) = self.session.lock() {
            session.dispose();
            tracing::info!(session = %session.id(), "Chat widget unmounted");
        }
    }
}
