//! Keyword reply generator
//!
//! Maps the latest visitor utterance to a canned reply. Pure and
//! deterministic: the only randomness in the widget is the reply delay.

use crate::chat::rules::{FALLBACK, RULES};
use crate::types::message::{Message, MessageId};
use crate::types::routing::{RecommendedContact, RoutingRule, RuleCategory};

/// Reply chosen for an utterance, before it gets an id in a session
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub category: RuleCategory,
    pub content: String,
    pub suggestions: Vec<String>,
    pub recommended_contacts: Vec<RecommendedContact>,
}

impl BotReply {
    fn from_rule(rule: &RoutingRule) -> Self {
        Self {
            category: rule.category,
            content: rule.response.to_string(),
            suggestions: rule.suggestions.iter().map(|s| s.to_string()).collect(),
            recommended_contacts: rule
                .recommended_contacts
                .iter()
                .map(RecommendedContact::from)
                .collect(),
        }
    }

    pub fn into_message(self, id: MessageId) -> Message {
        Message::bot(id, self.content, self.suggestions).with_contacts(self.recommended_contacts)
    }
}

/// Pick the first rule of `rules` matching `utterance`, or `None`.
pub fn match_rule<'a>(rules: &'a [RoutingRule], utterance: &str) -> Option<&'a RoutingRule> {
    let lowered = utterance.to_lowercase();
    rules.iter().find(|rule| rule.matches(&lowered))
}

/// Generate the canned reply for `utterance`.
///
/// First match wins, so a message mentioning both AI and web work gets the
/// AI answer. Utterances without any known keyword get the fallback prompt.
pub fn generate_reply(utterance: &str) -> BotReply {
    let rule = match_rule(RULES, utterance).unwrap_or(&FALLBACK);
    tracing::debug!(category = %rule.category, "Routing rule selected");
    BotReply::from_rule(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_request() {
        let reply = generate_reply("I need an ai solution");
        assert_eq!(reply.category, RuleCategory::Ai);
        assert!(reply.content.starts_with("Great choice! AI and Machine Learning"));
        assert_eq!(reply.suggestions.len(), 3);
        assert_eq!(reply.recommended_contacts[0].name, "Dr. Sarah Chen");
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(generate_reply("MACHINE LEARNING pipeline").category, RuleCategory::Ai);
        assert_eq!(generate_reply("We run on AWS").category, RuleCategory::Cloud);
    }

    #[test]
    fn test_ai_outranks_web() {
        let reply = generate_reply("ai web app");
        assert_eq!(reply.category, RuleCategory::Ai);
    }

    #[test]
    fn test_precedence_down_the_table() {
        assert_eq!(generate_reply("a website").category, RuleCategory::Web);
        assert_eq!(generate_reply("cloud for my android build").category, RuleCategory::Cloud);
        assert_eq!(generate_reply("an ios thing").category, RuleCategory::Mobile);
        assert_eq!(generate_reply("book a meeting").category, RuleCategory::Scheduling);
        assert_eq!(generate_reply("what's the price?").category, RuleCategory::Pricing);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "ai" is a bare substring check, so "email" routes to the AI rule.
        assert_eq!(generate_reply("send me an email").category, RuleCategory::Ai);
        // "ml" inside "html"
        assert_eq!(generate_reply("html page").category, RuleCategory::Ai);
    }

    #[test]
    fn test_fallback_for_unknown_input() {
        let reply = generate_reply("xyz123");
        assert_eq!(reply.category, RuleCategory::Fallback);
        assert_eq!(reply.content, FALLBACK.response);
        assert_eq!(
            reply.suggestions,
            vec![
                "I need technical consultation",
                "Looking for a development team",
                "Want to see your portfolio",
                "Schedule a call",
            ]
        );
        assert!(reply.recommended_contacts.is_empty());
    }

    #[test]
    fn test_reply_is_deterministic() {
        for input in ["hello there", "ai", "cost of a mobile app", "xyz123"] {
            assert_eq!(generate_reply(input), generate_reply(input));
        }
    }

    #[test]
    fn test_match_rule_on_custom_table() {
        let rules = [RoutingRule {
            category: RuleCategory::Pricing,
            keywords: &["quote"],
            response: "ok",
            suggestions: &[],
            recommended_contacts: &[],
        }];
        assert!(match_rule(&rules, "Need a QUOTE").is_some());
        assert!(match_rule(&rules, "ai").is_none());
    }

    #[test]
    fn test_into_message() {
        let message = generate_reply("budget").into_message(MessageId(4));
        assert!(message.is_bot());
        assert_eq!(message.id, MessageId(4));
        assert_eq!(message.suggestions.len(), 3);
    }
}
