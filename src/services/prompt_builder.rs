//! Prompt 构建 - 业务能力层
//!
//! 只负责把调用方的参数填进固定模板，不做任何转义

/// 构建出题 prompt
///
/// `count > 1` 时要求返回 JSON 数组，否则要求返回单个 JSON 对象
pub fn build_generation_prompt(
    topic: &str,
    difficulty: &str,
    question_type: &str,
    count: u32,
) -> String {
    if count > 1 {
        format!(
            r#"You are a math teacher. Generate {count} distinct {difficulty} difficulty math questions about {topic}.
The questions type is {question_type}.

Return ONLY a valid JSON ARRAY of objects, where each object has the following fields:
- content: The question text
- expected_answer: The correct answer (string)
- explanation: A step-by-step explanation
- type: {question_type}
- options: Array of 4 strings (REQUIRED if type is multiple_choice, otherwise empty array)

Ensure the JSON is valid and strictly follows the format.
Do not output any markdown formatting like ```json, just the raw JSON array."#
        )
    } else {
        format!(
            r#"You are a math teacher. Generate a {difficulty} difficulty math question about {topic}.
The question type is {question_type}.

Return ONLY a valid JSON object with the following fields:
- content: The question text
- expected_answer: The correct answer
- explanation: A step-by-step explanation
- type: {question_type}
- options: Array of 4 strings (REQUIRED if type is multiple_choice, otherwise empty array)

Do not output any markdown formatting like ```json, just the raw JSON."#
        )
    }
}

/// 构建判题 prompt
pub fn build_evaluation_prompt(
    question_type: &str,
    expected_answer: &str,
    user_answer: &str,
    tolerance: f64,
) -> String {
    format!(
        r#"You are a math grader. Evaluate the student's answer.
Question Type: {question_type}
Expected Answer: {expected_answer}
Student Answer: {user_answer}
Tolerance (if numerical): {tolerance}

Return ONLY a valid JSON object with:
- score: 0 to 100 (integer)
- feedback: Constructive feedback (string)
- is_correct: boolean

Do not output any markdown formatting like ```json, just the raw JSON."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_question_prompt() {
        let prompt = build_generation_prompt("fractions", "easy", "open", 1);
        assert!(prompt.contains("Generate a easy difficulty math question about fractions."));
        assert!(prompt.contains("Return ONLY a valid JSON object"));
        assert!(!prompt.contains("JSON ARRAY"));
        assert!(prompt.contains("- type: open"));
    }

    #[test]
    fn test_batch_prompt_mentions_count() {
        let prompt = build_generation_prompt("algebra", "hard", "multiple_choice", 5);
        assert!(prompt.contains("Generate 5 distinct hard difficulty math questions about algebra."));
        assert!(prompt.contains("JSON ARRAY"));
        assert!(prompt.contains("- type: multiple_choice"));
        assert!(prompt.contains("Array of 4 strings"));
    }

    #[test]
    fn test_zero_count_uses_single_template() {
        let prompt = build_generation_prompt("geometry", "medium", "open", 0);
        assert!(prompt.contains("Return ONLY a valid JSON object"));
    }

    #[test]
    fn test_values_interpolated_literally() {
        let prompt = build_generation_prompt("{\"x\": 1}", "medium", "open", 1);
        assert!(prompt.contains("about {\"x\": 1}."));
    }

    #[test]
    fn test_evaluation_prompt() {
        let prompt = build_evaluation_prompt("numeric", "3.14", "3.1", 0.05);
        assert!(prompt.contains("Question Type: numeric"));
        assert!(prompt.contains("Expected Answer: 3.14"));
        assert!(prompt.contains("Student Answer: 3.1"));
        assert!(prompt.contains("Tolerance (if numerical): 0.05"));
        assert!(prompt.contains("- is_correct: boolean"));
    }

    #[test]
    fn test_evaluation_prompt_zero_tolerance() {
        let prompt = build_evaluation_prompt("open", "x = 2", "x = 2", 0.0);
        assert!(prompt.contains("Tolerance (if numerical): 0\n"));
    }
}
