pub mod category_stats;
pub mod live_feed;
pub mod responses_grid;
pub mod responses_table;
pub mod stats_charts;
pub mod status_bar;
pub mod survey_form;

pub use category_stats::*;
pub use live_feed::*;
pub use responses_grid::*;
pub use responses_table::*;
pub use stats_charts::*;
pub use status_bar::*;
pub use survey_form::*;

use chrono::{DateTime, Local};
use survey_models::Question;

/// "HH:MM" in local time, or the raw string when it does not parse.
pub fn fmt_time_hhmm(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// "DD/MM" in local time for compact listings.
pub fn fmt_date_short(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.with_timezone(&Local).format("%d/%m").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// "DD/MM/YYYY HH:MM" in local time for the full table.
pub fn fmt_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}…")
    }
}

/// Emoji marker for a category slug.
pub fn category_icon(slug: &str) -> &'static str {
    match slug {
        "salud" => "🏥",
        "educacion" => "📚",
        "seguridad" => "🚨",
        "empleo" => "💼",
        "vivienda" => "🏠",
        "transporte" => "🚌",
        "medio-ambiente" => "🌳",
        _ => "📌",
    }
}

/// Prompt text for a question id, with a fixed label when the question
/// list has not loaded.
pub fn prompt_for(questions: &[Question], id: i64, fallback: &'static str) -> String {
    questions
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.prompt.clone())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(fmt_time_hhmm("hace un momento"), "hace un momento");
        assert_eq!(fmt_date("hace un momento"), "hace un momento");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("ñandú corre rápido", 5), "ñandú…");
    }

    #[test]
    fn unknown_slug_gets_generic_icon() {
        assert_eq!(category_icon("salud"), "🏥");
        assert_eq!(category_icon("otra-cosa"), "📌");
    }

    #[test]
    fn prompt_falls_back_when_questions_missing() {
        let questions = vec![Question {
            id: 1,
            prompt: "¿Cuál crees que es la mayor necesidad en tu comunidad?".to_string(),
            created_at: None,
        }];
        assert!(prompt_for(&questions, 1, "Pregunta 1").starts_with("¿Cuál"));
        assert_eq!(prompt_for(&questions, 2, "Pregunta 2"), "Pregunta 2");
    }
}
