//! Incorrect-question records

use serde::{Deserialize, Serialize};

/// A question the user answered wrong
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectQuestion {
    pub id: u32,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub topic: String,
    /// Date the question was answered, as shown (`YYYY-MM-DD`)
    pub date: String,
}

impl IncorrectQuestion {
    pub fn new(
        id: u32,
        question: impl Into<String>,
        your_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            your_answer: your_answer.into(),
            correct_answer: correct_answer.into(),
            topic: String::new(),
            date: String::new(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_question_camel_case() {
        let q = IncorrectQuestion::new(7, "2 + 2?", "5", "4")
            .with_topic("Arithmetic")
            .with_date("2024-02-01");

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["yourAnswer"], "5");
        assert_eq!(json["correctAnswer"], "4");
        assert_eq!(json["topic"], "Arithmetic");

        let back: IncorrectQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }
}
