//! Widget visibility state machine
//!
//! Tracks whether the chat window is open and whether the unsolicited
//! greeting bubble is showing next to the collapsed trigger.

use serde::{Deserialize, Serialize};

/// Whether the chat window is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Closed,
    Open,
}

/// Inputs of the visibility machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The idle timer started at mount has elapsed
    IdleTimeout,
    /// Floating trigger or greeting bubble clicked
    Open,
    /// Close button in the chat header
    Close,
    /// Floating trigger clicked, flips between open and closed
    Toggle,
    /// Bubble's own close button
    DismissGreeting,
}

/// Result of feeding one event to the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    /// The greeting bubble appeared as a result of this event
    pub greeting_shown: bool,
    /// The window was opened as a result of this event
    pub opened: bool,
}

impl Transition {
    fn unchanged() -> Self {
        Self {
            changed: false,
            greeting_shown: false,
            opened: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityController {
    visibility: Visibility,
    greeting_bubble: bool,
    has_user_interacted: bool,
    /// Set once the bubble has been shown or suppressed; it never comes back.
    greeting_spent: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Closed,
            greeting_bubble: false,
            has_user_interacted: false,
            greeting_spent: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// The bubble only ever coexists with `Closed`.
    pub fn greeting_bubble(&self) -> bool {
        self.greeting_bubble && self.visibility == Visibility::Closed
    }

    pub fn has_user_interacted(&self) -> bool {
        self.has_user_interacted
    }

    /// Record an interaction that did not go through the machine (sending a message).
    pub fn mark_interacted(&mut self) {
        self.has_user_interacted = true;
        self.greeting_spent = true;
    }

    pub fn handle(&mut self, event: VisibilityEvent) -> Transition {
        let before = self.clone();
        let mut transition = Transition::unchanged();

        match event {
            VisibilityEvent::IdleTimeout => {
                if !self.has_user_interacted
                    && !self.greeting_spent
                    && self.visibility == Visibility::Closed
                {
                    self.greeting_bubble = true;
                    self.greeting_spent = true;
                    transition.greeting_shown = true;
                }
            }
            VisibilityEvent::Open => {
                transition.opened = self.visibility == Visibility::Closed;
                self.open();
            }
            VisibilityEvent::Close => {
                if self.visibility == Visibility::Open {
                    self.visibility = Visibility::Closed;
                }
            }
            VisibilityEvent::Toggle => match self.visibility {
                Visibility::Closed => {
                    transition.opened = true;
                    self.open();
                }
                Visibility::Open => self.visibility = Visibility::Closed,
            },
            VisibilityEvent::DismissGreeting => {
                // No re-prompt later in the session, and dismissal alone
                // does not count as interacting with the widget.
                self.greeting_bubble = false;
                self.greeting_spent = true;
            }
        }

        transition.changed = *self != before;
        if transition.changed {
            tracing::debug!(?event, visibility = ?self.visibility, bubble = self.greeting_bubble, "Visibility transition");
        }
        transition
    }

    fn open(&mut self) {
        self.visibility = Visibility::Open;
        self.greeting_bubble = false;
        self.mark_interacted();
    }
}
