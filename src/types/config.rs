//! Configuration types
//!
//! Runtime timing configuration for the chat widget.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs of a mounted widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Idle time after mount before the greeting bubble appears
    pub greeting_delay: Duration,
    /// Lower bound (inclusive) of the simulated thinking delay
    pub reply_delay_min: Duration,
    /// Upper bound (exclusive) of the simulated thinking delay
    pub reply_delay_max: Duration,
    /// Name shown in the widget header and greeting
    pub assistant_name: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting_delay: Duration::from_secs(15),
            reply_delay_min: Duration::from_millis(1000),
            reply_delay_max: Duration::from_millis(2000),
            assistant_name: "Jarvis".to_string(),
        }
    }
}
