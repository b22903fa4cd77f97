//! Brain Module Tests
//!
//! Priority ordering of the classifier, role extraction against the bundled
//! dataset, and sanitizer properties.

use crate::brain::{
    clean_output, extract_role, resolve_comparison, sanitize, wants_expansion, Intent,
    IntentClassifier,
};
use crate::tests::mocks::bundled_dataset;

#[cfg(test)]
mod intent_classifier_tests {
    use super::*;

    #[test]
    fn test_compare_wins_over_resume() {
        let classifier = IntentClassifier::new();

        let compare_words = ["compare", "vs", "versus", "difference", "which is better"];
        let resume_words = ["resume", "CV", "cover letter"];

        for c in compare_words {
            for r in resume_words {
                for message in [format!("{} {}", c, r), format!("{} {}", r, c)] {
                    assert_eq!(
                        classifier.classify(&message),
                        Intent::CompareRoles,
                        "Expected CompareRoles for '{}'",
                        message
                    );
                }
            }
        }
    }

    #[test]
    fn test_resume_wins_over_role_content() {
        let classifier = IntentClassifier::new();

        let messages = [
            "Resume tips please",
            "what skills should my resume show",
            "projects to put on a CV",
            "What is a good resume roadmap",
        ];

        for message in messages {
            assert_eq!(
                classifier.classify(message),
                Intent::ResumeTip,
                "Expected ResumeTip for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_role_content_order() {
        let classifier = IntentClassifier::new();

        let cases = [
            ("skills and roadmap for Data Analyst", Intent::SkillsNeeded),
            ("roadmap and projects for Data Analyst", Intent::Roadmap),
            ("what is a good project for Data Analyst", Intent::Projects),
            ("What is a Cloud Engineer?", Intent::RoleInfo),
            ("Tell me about DevOps Engineer", Intent::RoleInfo),
            ("How to become a Frontend Developer", Intent::Roadmap),
        ];

        for (message, expected) in cases {
            assert_eq!(
                classifier.classify(message),
                expected,
                "Unexpected intent for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_unmatched_messages_are_general() {
        let classifier = IntentClassifier::new();

        let messages = [
            "",
            "   \n\t",
            "hello",
            "I like turtles",
            "skillful versatility",
            "projection",
            "cvs pharmacy",
        ];

        for message in messages {
            assert_eq!(
                classifier.classify(message),
                Intent::General,
                "Expected General for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_classification_is_pure() {
        let classifier = IntentClassifier::new();
        let message = "Explain the roadmap for Data Analyst";
        let first = classifier.classify_detailed(message);
        for _ in 0..5 {
            assert_eq!(classifier.classify_detailed(message), first);
        }
    }
}

#[cfg(test)]
mod role_extraction_tests {
    use super::*;

    #[test]
    fn test_scenario_roles_are_found() {
        let dataset = bundled_dataset();

        assert_eq!(
            extract_role(&dataset, "What skills are required for Data Scientist?"),
            Some("Data Scientist")
        );
        assert_eq!(
            extract_role(&dataset, "roadmap for frontend developer"),
            Some("Frontend Developer")
        );
    }

    #[test]
    fn test_no_dataset_key_means_none() {
        let dataset = bundled_dataset();

        for message in ["", "What skills does a chef need?", "data", "scientist", "Data-Scientist"] {
            assert_eq!(extract_role(&dataset, message), None, "for '{}'", message);
        }
    }

    #[test]
    fn test_comparison_uses_dataset_first() {
        let dataset = bundled_dataset();

        let pair = resolve_comparison(&dataset, "Data Scientist vs Data Analyst").unwrap();
        assert!(pair.from_dataset);
        assert_eq!(
            (pair.first.as_str(), pair.second.as_str()),
            ("Data Scientist", "Data Analyst")
        );

        // dataset order, not message order
        let pair = resolve_comparison(&dataset, "Data Analyst versus Data Scientist").unwrap();
        assert_eq!(pair.first, "Data Scientist");
    }
}

#[cfg(test)]
mod sanitizer_tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        "plain answer",
        "  padded  ",
        "<|im_start|>assistant\nHello<|im_end|>",
        "<s>[INST] <<SYS>>be nice<</SYS>> hi [/INST] answer</s>",
        "<think>reasoning</think>\n\nFinal",
        "<|IM_END|><|Im_Start|>",
        "<s<s>>",
        "<<<SYS>>SYS>>",
        "[/[INST]INST]",
        "<thi<think>nk>x</think>",
        "  <|eot_id|>  \n",
        "multi\nline\n\n text with <b>html</b>",
    ];

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in CORPUS {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "sanitize not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_clean_output_is_idempotent() {
        let long = format!("<s>{}</s>", "x".repeat(5000));
        for raw in CORPUS.iter().copied().chain([long.as_str()]) {
            let once = clean_output(raw);
            assert_eq!(clean_output(&once), once, "clean_output not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_expansion_triggers() {
        assert!(wants_expansion("Explain the skills for Data Scientist"));
        assert!(wants_expansion("why these projects?"));
        assert!(!wants_expansion("What skills are required for Data Scientist?"));
    }
}
