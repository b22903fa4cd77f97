//! Intent Classification using regex patterns.
//!
//! Ordered, first-match-wins pattern groups. Groups are not mutually exclusive,
//! so the order below is part of the contract: comparison beats resume help,
//! resume help beats the role-content intents.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// What a role is about (what is, explain, role of, ...)
    RoleInfo,
    /// Skills a role requires
    SkillsNeeded,
    /// Learning path for a role
    Roadmap,
    /// Portfolio project ideas for a role
    Projects,
    /// Side-by-side comparison of two roles
    CompareRoles,
    /// Resume / CV advice
    ResumeTip,
    /// Anything else
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::RoleInfo => "role_info",
            Intent::SkillsNeeded => "skills_needed",
            Intent::Roadmap => "roadmap",
            Intent::Projects => "projects",
            Intent::CompareRoles => "compare_roles",
            Intent::ResumeTip => "resume_tip",
            Intent::General => "general",
        }
    }

    /// Intents answered from a single dataset role.
    pub fn is_role_content(&self) -> bool {
        matches!(
            self,
            Intent::RoleInfo | Intent::SkillsNeeded | Intent::Roadmap | Intent::Projects
        )
    }
}

/// Error returned when a label does not name any intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent label: {0}")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "role_info" => Ok(Intent::RoleInfo),
            "skills_needed" => Ok(Intent::SkillsNeeded),
            "roadmap" => Ok(Intent::Roadmap),
            "projects" => Ok(Intent::Projects),
            "compare_roles" => Ok(Intent::CompareRoles),
            "resume_tip" => Ok(Intent::ResumeTip),
            "general" => Ok(Intent::General),
            other => Err(UnknownIntent(other.to_string())),
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Text fragment that decided the match, if any
    pub matched: Option<String>,
}

/// Pattern definition for intent matching
struct IntentPattern {
    intent: Intent,
    patterns: &'static [Regex],
}

/// Intent classifier using regex patterns
pub struct IntentClassifier {
    patterns: Vec<IntentPattern>,
}

// Compile patterns once at startup
static COMPARE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(compare|comparing|comparison|versus|vs)\b").expect("Invalid regex: compare verbs"),
        Regex::new(r"(?i)\b(difference|differences|different from)\b").expect("Invalid regex: difference nouns"),
        Regex::new(r"(?i)\b(which is better|better than|or should i)\b").expect("Invalid regex: preference phrases"),
    ]
});

static RESUME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(resume|resumes|résumé|cv|curriculum vitae)\b").expect("Invalid regex: resume nouns"),
        Regex::new(r"(?i)\b(cover letter|linkedin profile|ats)\b").expect("Invalid regex: application documents"),
    ]
});

static SKILLS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(skill|skills|skillset|skill set|tech stack)\b").expect("Invalid regex: skill nouns"),
        Regex::new(r"(?i)\b(required|requirements|prerequisites|qualifications)\b").expect("Invalid regex: requirement nouns"),
        Regex::new(r"(?i)\bwhat (do|should) i (need to )?(know|learn)\b").expect("Invalid regex: what to learn"),
    ]
});

static ROADMAP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(roadmap|road map|learning path|career path)\b").expect("Invalid regex: roadmap nouns"),
        Regex::new(r"(?i)\bhow (to|do i|can i) (start|begin|become|get started|get into)\b").expect("Invalid regex: how to start"),
        Regex::new(r"(?i)\b(steps to|path to|where to start)\b").expect("Invalid regex: step phrases"),
    ]
});

static PROJECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(project|projects|project ideas?)\b").expect("Invalid regex: project nouns"),
        Regex::new(r"(?i)\b(portfolio|side project|build ideas)\b").expect("Invalid regex: portfolio nouns"),
    ]
});

static ROLE_INFO_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(what is|what's|what are|what does|who is)\b").expect("Invalid regex: what-is phrases"),
        Regex::new(r"(?i)\b(role of|tell me about|describe|explain)\b").expect("Invalid regex: describe phrases"),
        Regex::new(r"(?i)\b(responsibilities|day to day|job description)\b").expect("Invalid regex: responsibility nouns"),
    ]
});

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all pattern groups, in priority order
    pub fn new() -> Self {
        let patterns = vec![
            IntentPattern {
                intent: Intent::CompareRoles,
                patterns: COMPARE_PATTERNS.as_slice(),
            },
            IntentPattern {
                intent: Intent::ResumeTip,
                patterns: RESUME_PATTERNS.as_slice(),
            },
            IntentPattern {
                intent: Intent::SkillsNeeded,
                patterns: SKILLS_PATTERNS.as_slice(),
            },
            IntentPattern {
                intent: Intent::Roadmap,
                patterns: ROADMAP_PATTERNS.as_slice(),
            },
            IntentPattern {
                intent: Intent::Projects,
                patterns: PROJECT_PATTERNS.as_slice(),
            },
            IntentPattern {
                intent: Intent::RoleInfo,
                patterns: ROLE_INFO_PATTERNS.as_slice(),
            },
        ];

        Self { patterns }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> Intent {
        self.classify_detailed(text).intent
    }

    /// Classify and report which fragment decided it
    pub fn classify_detailed(&self, text: &str) -> IntentResult {
        let text = text.trim();

        if text.is_empty() {
            return IntentResult {
                intent: Intent::General,
                matched: None,
            };
        }

        for group in &self.patterns {
            if let Some(m) = group.patterns.iter().find_map(|p| p.find(text)) {
                return IntentResult {
                    intent: group.intent,
                    matched: Some(m.as_str().to_string()),
                };
            }
        }

        IntentResult {
            intent: Intent::General,
            matched: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("What skills are required for Data Scientist?"),
            Intent::SkillsNeeded
        );
        assert_eq!(classifier.classify("tech stack for backend"), Intent::SkillsNeeded);
    }

    #[test]
    fn test_word_boundaries() {
        let classifier = IntentClassifier::new();

        // "skillful" is not "skill", "projector" is not "project"
        assert_eq!(classifier.classify("a skillful projector"), Intent::General);
        // "resumed" is not "resume"
        assert_eq!(classifier.classify("we resumed the meeting"), Intent::General);
    }

    #[test]
    fn test_compare_beats_everything() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Compare resume skills for data roles");
        assert_eq!(result.intent, Intent::CompareRoles);
        assert_eq!(result.matched.as_deref(), Some("Compare"));
    }

    #[test]
    fn test_unknown_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify(""), Intent::General);
        assert_eq!(classifier.classify("   "), Intent::General);
        assert_eq!(classifier.classify("hello there"), Intent::General);
    }

    #[test]
    fn test_label_round_trip() {
        for intent in [
            Intent::RoleInfo,
            Intent::SkillsNeeded,
            Intent::Roadmap,
            Intent::Projects,
            Intent::CompareRoles,
            Intent::ResumeTip,
            Intent::General,
        ] {
            assert_eq!(intent.label().parse::<Intent>(), Ok(intent));
        }
        assert!("weather".parse::<Intent>().is_err());
    }
}
