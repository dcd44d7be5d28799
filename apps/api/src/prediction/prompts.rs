// Prompt template for the admissions advice completion.
// Reuses the formatting contract from llm_client::prompts.

use crate::llm_client::prompts::{fill_template, FORMATTING_CONTRACT};
use crate::models::Submission;

pub const NO_CV: &str = "No CV provided";
pub const NO_SAT_SCORE: &str = "No SAT score provided";
pub const NO_GPA: &str = "No GPA provided";
pub const NO_OTHER_SCORES: &str = "No international scores provided";

/// Replace: {cv_text}, {sat_score}, {gpa}, {others}, {search_results},
///          {user_request}, {formatting_contract}
pub const PREDICTION_PROMPT_TEMPLATE: &str = r#"Using the following details:
- CV: {cv_text}
- SAT Score: {sat_score}
- GPA: {gpa}
- International Scores: {others}
- Search Results: {search_results}
- User Request: {user_request}

Answer this using all info you got in this prompt: {user_request}. Provide detailed and specific tips to improve the user's chances of getting accepted to their chosen university. Structure the information clearly (like deadlines, requirements, etc.). {formatting_contract}

End by asking if the user needs further assistance. Use a conversational tone like you're speaking to a friend. Write MAXIMUM 100 words (or if needed 150-200). Make SPECIFIC tips and add examples. Do NOT write the word count at the end."#;

/// Assembles the single prompt sent to the model.
pub fn build_prediction_prompt(
    submission: &Submission,
    cv_text: Option<&str>,
    search_results: &str,
) -> String {
    let cv_text = cv_text.map(str::trim).filter(|t| !t.is_empty());

    fill_template(
        PREDICTION_PROMPT_TEMPLATE,
        &[
            ("cv_text", cv_text.unwrap_or(NO_CV)),
            ("sat_score", or_fallback(&submission.sat_score, NO_SAT_SCORE)),
            ("gpa", or_fallback(&submission.gpa, NO_GPA)),
            ("others", or_fallback(&submission.others, NO_OTHER_SCORES)),
            ("search_results", search_results),
            ("user_request", submission.message.as_str()),
            ("formatting_contract", FORMATTING_CONTRACT),
        ],
    )
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::enrichment::NO_RESULTS_FALLBACK;

    fn mit_submission() -> Submission {
        Submission {
            university: "MIT".into(),
            sat_score: "1500".into(),
            message: "How can I improve?".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_cv_uses_fallback() {
        let prompt = build_prediction_prompt(&mit_submission(), None, "snippets");
        assert!(prompt.contains("- CV: No CV provided\n"));
        assert!(prompt.contains("- SAT Score: 1500\n"));
    }

    #[test]
    fn test_blank_cv_text_uses_fallback() {
        let prompt = build_prediction_prompt(&mit_submission(), Some("  \n"), "snippets");
        assert!(prompt.contains("- CV: No CV provided\n"));
    }

    #[test]
    fn test_missing_scores_use_fallbacks() {
        let prompt = build_prediction_prompt(&Submission::default(), None, "");
        assert!(prompt.contains(NO_SAT_SCORE));
        assert!(prompt.contains(NO_GPA));
        assert!(prompt.contains(NO_OTHER_SCORES));
    }

    #[test]
    fn test_fallback_search_text_is_embedded() {
        let prompt = build_prediction_prompt(&mit_submission(), None, NO_RESULTS_FALLBACK);
        assert!(prompt.contains("- Search Results: No relevant search results found.\n"));
        assert!(!prompt.contains("{search_results}"));
    }

    #[test]
    fn test_question_repeated_and_contract_embedded() {
        let prompt = build_prediction_prompt(&mit_submission(), Some("Robotics club lead"), "x");
        assert!(prompt.contains("- CV: Robotics club lead\n"));
        assert_eq!(prompt.matches("How can I improve?").count(), 2);
        assert!(prompt.contains("## Section Header"));
        assert!(prompt.contains("Do NOT write the word count"));
    }

    #[test]
    fn test_user_text_with_braces_is_verbatim() {
        let submission = Submission {
            message: "what about {gpa}?".into(),
            gpa: "3.2".into(),
            ..Default::default()
        };
        let prompt = build_prediction_prompt(&submission, None, "");
        assert!(prompt.contains("- User Request: what about {gpa}?\n"));
    }
}
