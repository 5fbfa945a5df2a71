//! Pure query-pipeline stages over an in-memory batch of vacancies.
//! Composed by the caller; every stage preserves input order.

use std::cmp::Ordering;

use crate::models::vacancy::Vacancy;

/// Keep vacancies containing every keyword (see `Vacancy::contains_keywords`).
pub fn filter_by_keywords(vacancies: Vec<Vacancy>, keywords: &[String]) -> Vec<Vacancy> {
    vacancies
        .into_iter()
        .filter(|v| v.contains_keywords(keywords))
        .collect()
}

/// Keep vacancies whose salary overlaps a `"MIN-MAX"` range; a malformed
/// range keeps nothing (see `Vacancy::salary_in_range`).
pub fn filter_by_salary_range(vacancies: Vec<Vacancy>, range: &str) -> Vec<Vacancy> {
    vacancies
        .into_iter()
        .filter(|v| v.salary_in_range(range))
        .collect()
}

/// Stable descending sort by the salary ordering. Records with an absent or
/// zero minimum compare as equal and keep their relative order.
pub fn sort_by_salary_desc(mut vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    vacancies.sort_by(|a, b| {
        if a.salary.is_below(&b.salary) {
            Ordering::Greater
        } else if b.salary.is_below(&a.salary) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    });
    vacancies
}

/// First `n` elements. `n` past the end returns everything; zero returns
/// nothing. The count is unsigned, so a negative count cannot arise.
pub fn top_n(mut vacancies: Vec<Vacancy>, n: usize) -> Vec<Vacancy> {
    vacancies.truncate(n);
    vacancies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::salary::Salary;

    fn vacancy(id: &str, title: &str, min: Option<u32>, max: Option<u32>) -> Vacancy {
        Vacancy::new(
            id,
            title,
            Some(Salary::new(min, max, None, false)),
            "",
            "",
            "",
            "",
            "",
            "",
            None,
        )
    }

    #[test]
    fn keyword_filter_preserves_order() {
        let batch = vec![
            vacancy("1", "Rust developer", None, None),
            vacancy("2", "Go developer", None, None),
            vacancy("3", "Senior Rust engineer", None, None),
        ];
        let kept = filter_by_keywords(batch, &["rust".to_string()]);
        let ids: Vec<_> = kept.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn empty_keyword_list_keeps_everything() {
        let batch = vec![vacancy("1", "Anything", None, None)];
        assert_eq!(filter_by_keywords(batch, &[]).len(), 1);
    }

    #[test]
    fn salary_range_filter_uses_overlap() {
        let batch = vec![
            vacancy("overlaps", "a", Some(90000), Some(140000)),
            vacancy("outside", "b", Some(10000), Some(20000)),
            vacancy("unspecified", "c", None, None),
        ];
        let kept = filter_by_salary_range(batch, "100000-150000");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "overlaps");
    }

    #[test]
    fn malformed_range_keeps_nothing() {
        let batch = vec![vacancy("1", "a", Some(100000), None)];
        assert!(filter_by_salary_range(batch, "oops").is_empty());
    }

    #[test]
    fn sort_is_descending_by_min_value() {
        let batch = vec![
            vacancy("mid", "a", Some(100000), None),
            vacancy("high", "b", Some(300000), None),
            vacancy("low", "c", Some(50000), None),
        ];
        let ids: Vec<String> = sort_by_salary_desc(batch).into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn unspecified_minimums_keep_their_relative_order() {
        let batch = vec![
            vacancy("none1", "a", None, None),
            vacancy("high", "b", Some(300000), None),
            vacancy("none2", "c", None, Some(500000)),
        ];
        let ids: Vec<String> = sort_by_salary_desc(batch).into_iter().map(|v| v.id).collect();
        // absent minimums never compare below anything; stability keeps them in place
        assert_eq!(ids, vec!["none1", "high", "none2"]);
    }

    #[test]
    fn top_n_boundaries() {
        let batch = vec![
            vacancy("1", "a", None, None),
            vacancy("2", "b", None, None),
        ];
        assert!(top_n(batch.clone(), 0).is_empty());
        assert_eq!(top_n(batch.clone(), 1).len(), 1);
        assert_eq!(top_n(batch.clone(), batch.len() + 5), batch);
    }
}
