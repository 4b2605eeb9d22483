use std::collections::HashSet;
use survey_models::{CategoryStat, QuestionKind, ResponseRow};

/// Cap for the paginated response grid.
pub const GRID_PAGE_SIZE: usize = 12;

/// Sum of all per-category counts.
pub fn total_responses(stats: &[CategoryStat]) -> i64 {
    stats.iter().map(|s| s.count).sum()
}

/// Largest per-category count, floored at 1 so progress math never divides
/// by zero.
pub fn max_count(stats: &[CategoryStat]) -> i64 {
    stats.iter().map(|s| s.count).max().unwrap_or(0).max(1)
}

pub fn percent_of_total(count: i64, total: i64) -> f32 {
    if total <= 0 {
        0.0
    } else {
        count as f32 * 100.0 / total as f32
    }
}

/// Stats worth charting: those with at least one response.
pub fn charted(stats: &[CategoryStat]) -> Vec<&CategoryStat> {
    stats.iter().filter(|s| s.count > 0).collect()
}

/// Category stats keep the server's ordering; the first entry is the most
/// mentioned one.
pub fn top_category(stats: &[CategoryStat]) -> Option<&CategoryStat> {
    stats.first()
}

/// Responses answering one question, or all of them when `kind` is `None`.
pub fn by_kind(responses: &[ResponseRow], kind: Option<QuestionKind>) -> Vec<&ResponseRow> {
    match kind {
        None => responses.iter().collect(),
        Some(kind) => responses
            .iter()
            .filter(|r| r.question_kind() == kind)
            .collect(),
    }
}

pub fn count_by_kind(responses: &[ResponseRow], kind: QuestionKind) -> usize {
    responses
        .iter()
        .filter(|r| r.question_kind() == kind)
        .count()
}

/// Distinct submitters, keyed by email.
pub fn unique_participants(responses: &[ResponseRow]) -> usize {
    responses
        .iter()
        .map(|r| r.participant_email.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn avg_responses_per_participant(responses: &[ResponseRow]) -> f64 {
    let participants = unique_participants(responses);
    if participants == 0 {
        0.0
    } else {
        responses.len() as f64 / participants as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, slug: &str, count: i64) -> CategoryStat {
        CategoryStat {
            name: name.to_string(),
            slug: slug.to_string(),
            count,
        }
    }

    fn row(id: i64, question_id: i64, email: &str) -> ResponseRow {
        ResponseRow {
            id,
            description: "d".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            question: "q".to_string(),
            question_id: Some(question_id),
            participant_name: "p".to_string(),
            participant_email: email.to_string(),
            category_name: None,
            category_slug: None,
        }
    }

    #[test]
    fn percentages_over_charted_stats_sum_to_hundred() {
        let stats = vec![
            stat("Salud", "salud", 3),
            stat("Educación", "educacion", 1),
            stat("Empleo", "empleo", 0),
            stat("Vivienda", "vivienda", 4),
        ];
        let total = total_responses(&stats);
        let sum: f32 = charted(&stats)
            .iter()
            .map(|s| percent_of_total(s.count, total))
            .sum();
        assert!((sum - 100.0).abs() < 0.01, "sum was {sum}");
    }

    #[test]
    fn totals_and_max_for_known_fixture() {
        let stats = vec![stat("Salud", "salud", 3), stat("Educación", "educacion", 1)];
        assert_eq!(total_responses(&stats), 4);
        assert_eq!(max_count(&stats), 3);
        assert_eq!(top_category(&stats).unwrap().name, "Salud");
    }

    #[test]
    fn empty_stats_are_safe() {
        let stats: Vec<CategoryStat> = Vec::new();
        assert_eq!(total_responses(&stats), 0);
        assert_eq!(max_count(&stats), 1);
        assert_eq!(percent_of_total(0, 0), 0.0);
        assert!(charted(&stats).is_empty());
        assert!(top_category(&stats).is_none());
    }

    #[test]
    fn filters_by_question_kind() {
        let responses = vec![
            row(1, 1, "a@test.com"),
            row(2, 2, "a@test.com"),
            row(3, 1, "b@test.com"),
        ];
        assert_eq!(by_kind(&responses, None).len(), 3);
        assert_eq!(by_kind(&responses, Some(QuestionKind::Need)).len(), 2);
        assert_eq!(count_by_kind(&responses, QuestionKind::Proposal), 1);
    }

    #[test]
    fn participant_counts_deduplicate_by_email() {
        let responses = vec![
            row(1, 1, "a@test.com"),
            row(2, 2, "a@test.com"),
            row(3, 1, "b@test.com"),
        ];
        assert_eq!(unique_participants(&responses), 2);
        assert!((avg_responses_per_participant(&responses) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_responses_are_safe() {
        let responses: Vec<ResponseRow> = Vec::new();
        assert_eq!(unique_participants(&responses), 0);
        assert_eq!(avg_responses_per_participant(&responses), 0.0);
        assert!(by_kind(&responses, Some(QuestionKind::Need)).is_empty());
    }
}
