use serde::{Deserialize, Serialize};

// Shared models for the community-needs survey API and desktop client.
//
// Field names follow the wire contract exactly: write payloads use the
// API's camelCase keys, response rows come back snake_case.

/// Question id for "greatest need in your community".
pub const QUESTION_NEED_ID: i64 = 1;
/// Question id for "concrete action you would propose".
pub const QUESTION_PROPOSAL_ID: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub prompt: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Server-computed aggregate count of needs per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub slug: String,
    pub count: i64,
}

/// One submitted answer as the read API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRow {
    pub id: i64,
    pub description: String,
    pub created_at: String,
    /// Prompt text of the originating question.
    pub question: String,
    /// Explicit question tag; older rows may not carry it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,
    pub participant_name: String,
    pub participant_email: String,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

/// Which of the two survey questions a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Need,
    Proposal,
    Other,
}

impl ResponseRow {
    /// Classifies the row by its question tag, falling back to a prompt-text
    /// match for rows that predate the tag.
    pub fn question_kind(&self) -> QuestionKind {
        match self.question_id {
            Some(QUESTION_NEED_ID) => QuestionKind::Need,
            Some(QUESTION_PROPOSAL_ID) => QuestionKind::Proposal,
            Some(_) => QuestionKind::Other,
            None => {
                if self.question.contains("mayor necesidad") {
                    QuestionKind::Need
                } else if self.question.contains("acción concreta") {
                    QuestionKind::Proposal
                } else {
                    QuestionKind::Other
                }
            }
        }
    }

    /// Category name and slug travel together or not at all.
    pub fn category(&self) -> Option<(&str, &str)> {
        match (self.category_name.as_deref(), self.category_slug.as_deref()) {
            (Some(name), Some(slug)) => Some((name, slug)),
            _ => None,
        }
    }
}

/// Registration payload for a survey participant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Creation payload for one question-response pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedInput {
    pub email: String,
    pub question_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    pub description: String,
}

impl NeedInput {
    /// Question-1 answer: a described need tagged with a category.
    pub fn need(email: String, category_slug: String, description: String) -> Self {
        Self {
            email,
            question_id: QUESTION_NEED_ID,
            category_slug: Some(category_slug),
            description,
        }
    }

    /// Question-2 answer: a free-text proposal, never categorized.
    pub fn proposal(email: String, description: String) -> Self {
        Self {
            email,
            question_id: QUESTION_PROPOSAL_ID,
            category_slug: None,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(question_id: Option<i64>, question: &str) -> ResponseRow {
        ResponseRow {
            id: 1,
            description: "desc".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            question: question.to_string(),
            question_id,
            participant_name: "Ana".to_string(),
            participant_email: "ana@test.com".to_string(),
            category_name: None,
            category_slug: None,
        }
    }

    #[test]
    fn question_kind_prefers_explicit_tag() {
        assert_eq!(row(Some(1), "whatever").question_kind(), QuestionKind::Need);
        assert_eq!(
            row(Some(2), "whatever").question_kind(),
            QuestionKind::Proposal
        );
        assert_eq!(row(Some(9), "whatever").question_kind(), QuestionKind::Other);
    }

    #[test]
    fn question_kind_falls_back_to_prompt_text() {
        assert_eq!(
            row(None, "¿Cuál crees que es la mayor necesidad en tu comunidad?").question_kind(),
            QuestionKind::Need
        );
        assert_eq!(
            row(None, "¿Qué acción concreta propondrías para mejorar esa situación?")
                .question_kind(),
            QuestionKind::Proposal
        );
        assert_eq!(row(None, "otra pregunta").question_kind(), QuestionKind::Other);
    }

    #[test]
    fn category_fields_travel_together() {
        let mut r = row(Some(1), "q");
        assert_eq!(r.category(), None);

        r.category_name = Some("Salud".to_string());
        assert_eq!(r.category(), None);

        r.category_slug = Some("salud".to_string());
        assert_eq!(r.category(), Some(("Salud", "salud")));
    }

    #[test]
    fn need_input_serializes_camel_case() {
        let need = NeedInput::need(
            "diego@test.com".to_string(),
            "salud".to_string(),
            "No hay hospital".to_string(),
        );
        let json = serde_json::to_value(&need).unwrap();
        assert_eq!(json["questionId"], 1);
        assert_eq!(json["categorySlug"], "salud");
        assert_eq!(json["email"], "diego@test.com");
    }

    #[test]
    fn proposal_input_omits_category() {
        let proposal = NeedInput::proposal("a@b.com".to_string(), "Más parques".to_string());
        let json = serde_json::to_value(&proposal).unwrap();
        assert_eq!(json["questionId"], 2);
        assert!(json.get("categorySlug").is_none());
    }

    #[test]
    fn participant_input_omits_absent_fields() {
        let participant = ParticipantInput {
            name: "Ana".to_string(),
            email: "ana@test.com".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&participant).unwrap();
        assert!(json.get("age").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn response_row_parses_without_question_tag() {
        let raw = r#"{
            "id": 7,
            "description": "No hay hospital",
            "created_at": "2024-05-01T10:00:00Z",
            "question": "¿Cuál crees que es la mayor necesidad en tu comunidad?",
            "participant_name": "Diego",
            "participant_email": "diego@test.com",
            "category_name": "Salud",
            "category_slug": "salud"
        }"#;
        let parsed: ResponseRow = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.question_id, None);
        assert_eq!(parsed.question_kind(), QuestionKind::Need);
        assert_eq!(parsed.category(), Some(("Salud", "salud")));
    }
}
