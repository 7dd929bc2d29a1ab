//! Canned replies
//!
//! The decision list evaluated by [`crate::chat::responder::generate_reply`].
//! Order is precedence: the first rule with a matching keyword wins.

use crate::types::routing::{ContactEntry, RoutingRule, RuleCategory};

pub const GREETING: &str = "👋 Hi! I'm Jarvis, your AI assistant. I'm here to help you find the perfect tech solution for your project. What are you looking to build?";

pub const GREETING_SUGGESTIONS: &[&str] = &[
    "I need an AI solution",
    "Looking for web development",
    "Cloud architecture help",
    "Mobile app development",
    "DevOps consultation",
];

pub static RULES: &[RoutingRule] = &[
    RoutingRule {
        category: RuleCategory::Ai,
        keywords: &["ai", "machine learning", "ml"],
        response: "Great choice! AI and Machine Learning are our strongest domains. I can connect you with our AI specialists who have delivered 15+ successful projects with 95% expertise rating.",
        suggestions: &[
            "What AI technologies do you use?",
            "Show me AI project examples",
            "Schedule consultation",
        ],
        recommended_contacts: &[
            ContactEntry {
                name: "Dr. Sarah Chen",
                domain: "AI/ML",
                availability: "Available this week",
                match_score: 98,
            },
            ContactEntry {
                name: "Marcus Rodriguez",
                domain: "Deep Learning",
                availability: "Available next week",
                match_score: 92,
            },
        ],
    },
    RoutingRule {
        category: RuleCategory::Web,
        keywords: &["web", "website", "full-stack"],
        response: "Excellent! Full-stack web development is our most popular service with 35+ completed projects. We specialize in modern frameworks and scalable architectures.",
        suggestions: &[
            "What frameworks do you use?",
            "Show web development portfolio",
            "Get project estimate",
        ],
        recommended_contacts: &[
            ContactEntry {
                name: "Alex Thompson",
                domain: "Full-Stack",
                availability: "Available now",
                match_score: 96,
            },
            ContactEntry {
                name: "Emma Wilson",
                domain: "Frontend",
                availability: "Available this week",
                match_score: 94,
            },
        ],
    },
    RoutingRule {
        category: RuleCategory::Cloud,
        keywords: &["cloud", "aws", "azure"],
        response: "Perfect! Our cloud architecture team has extensive experience with AWS, Azure, and GCP. We've delivered 22+ cloud projects with 92% expertise rating.",
        suggestions: &[
            "Which cloud platform is best for me?",
            "Show cloud architecture examples",
            "Discuss my infrastructure needs",
        ],
        recommended_contacts: &[
            ContactEntry {
                name: "David Kumar",
                domain: "Cloud Architecture",
                availability: "Available this week",
                match_score: 94,
            },
            ContactEntry {
                name: "Lisa Park",
                domain: "DevOps",
                availability: "Available next week",
                match_score: 89,
            },
        ],
    },
    RoutingRule {
        category: RuleCategory::Mobile,
        keywords: &["mobile", "app", "ios", "android"],
        response: "Mobile development is a fantastic choice! We create both native and cross-platform apps with 18+ successful launches and 89% expertise rating.",
        suggestions: &[
            "Native vs Cross-platform?",
            "Show mobile app portfolio",
            "Discuss app features",
        ],
        recommended_contacts: &[
            ContactEntry {
                name: "Jordan Lee",
                domain: "Mobile Dev",
                availability: "Available this week",
                match_score: 91,
            },
            ContactEntry {
                name: "Priya Sharma",
                domain: "UI/UX",
                availability: "Available now",
                match_score: 87,
            },
        ],
    },
    RoutingRule {
        category: RuleCategory::Scheduling,
        keywords: &["schedule", "meeting", "consultation"],
        response: "I'd be happy to schedule a consultation for you! Let me know your preferred time and I'll set up a meeting with the most suitable team member.",
        suggestions: &["This week", "Next week", "Show available slots"],
        recommended_contacts: &[],
    },
    RoutingRule {
        category: RuleCategory::Pricing,
        keywords: &["budget", "cost", "price"],
        response: "Our pricing is competitive and tailored to your specific needs. Let me understand your project scope better to provide an accurate estimate.",
        suggestions: &[
            "Small project ($5K-$20K)",
            "Medium project ($20K-$50K)",
            "Enterprise project ($50K+)",
        ],
        recommended_contacts: &[],
    },
];

pub static FALLBACK: RoutingRule = RoutingRule {
    category: RuleCategory::Fallback,
    keywords: &[],
    response: "Thanks for reaching out! To better assist you, could you tell me more about your project requirements? I can then recommend the best team members and provide relevant information.",
    suggestions: &[
        "I need technical consultation",
        "Looking for a development team",
        "Want to see your portfolio",
        "Schedule a call",
    ],
    recommended_contacts: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_precedence_order() {
        let order: Vec<RuleCategory> = RULES.iter().map(|rule| rule.category).collect();
        assert_eq!(
            order,
            vec![
                RuleCategory::Ai,
                RuleCategory::Web,
                RuleCategory::Cloud,
                RuleCategory::Mobile,
                RuleCategory::Scheduling,
                RuleCategory::Pricing,
            ]
        );
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "rule {}", rule.category);
            }
        }
    }

    #[test]
    fn test_fallback_offers_four_suggestions() {
        assert_eq!(FALLBACK.suggestions.len(), 4);
        assert!(FALLBACK.keywords.is_empty());
    }

    #[test]
    fn test_greeting_suggestions() {
        assert_eq!(GREETING_SUGGESTIONS.len(), 5);
        assert!(GREETING.contains("Jarvis"));
    }
}
