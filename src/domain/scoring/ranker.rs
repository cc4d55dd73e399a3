//! Ranker - Deterministic ordering and dense rank assignment.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::warn;

use super::ResultItem;

/// Orders result items best-first and numbers them 1..=n.
pub struct Ranker;

impl Ranker {
    /// Sorts by total score descending, then name ascending, then id ascending,
    /// and assigns ranks by position.
    ///
    /// Names compare with root-locale collation at tertiary strength: "apple"
    /// sorts before "Banana" and "Émile" before "Zed", and case only decides
    /// otherwise-equal names (lowercase first). Ties never share a rank.
    pub fn rank(mut items: Vec<ResultItem>) -> Vec<ResultItem> {
        let names = NameCollator::root();
        items.sort_by(|a, b| Self::compare(&names, a, b));

        for (position, item) in items.iter_mut().enumerate() {
            item.rank = position as u32 + 1;
        }

        items
    }

    fn compare(names: &NameCollator, a: &ResultItem, b: &ResultItem) -> Ordering {
        b.total_score
            .total_cmp(&a.total_score)
            .then_with(|| names.compare(&a.alternative_name, &b.alternative_name))
            .then_with(|| a.alternative_id.cmp(&b.alternative_id))
    }
}

/// Locale-aware name comparison using the root collation tables.
struct NameCollator(Option<Collator>);

impl NameCollator {
    fn root() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Self(Some(collator)),
            Err(err) => {
                // Compiled data always carries the root tables.
                warn!(error = ?err, "Root collation unavailable, comparing names by code point");
                Self(None)
            }
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.0 {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlternativeId;

    fn item(id: &str, name: &str, score: f64) -> ResultItem {
        ResultItem {
            alternative_id: id.parse().unwrap(),
            alternative_name: name.to_string(),
            total_score: score,
            rank: 0,
            contributions: vec![],
        }
    }

    const ID_1: &str = "00000000-0000-4000-8000-000000000001";
    const ID_2: &str = "00000000-0000-4000-8000-000000000002";
    const ID_3: &str = "00000000-0000-4000-8000-000000000003";

    fn names(items: &[ResultItem]) -> Vec<&str> {
        items.iter().map(|i| i.alternative_name.as_str()).collect()
    }

    #[test]
    fn higher_score_ranks_first() {
        let ranked = Ranker::rank(vec![item(ID_1, "B", 2.6), item(ID_2, "A", 4.6)]);
        assert_eq!(names(&ranked), vec!["A", "B"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn equal_scores_break_by_name() {
        let ranked = Ranker::rank(vec![
            item(ID_1, "Zeta", 3.0),
            item(ID_2, "Alpha", 3.0),
            item(ID_3, "Mu", 3.0),
        ]);
        assert_eq!(names(&ranked), vec!["Alpha", "Mu", "Zeta"]);
        assert_eq!(
            ranked.iter().map(|i| i.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn equal_scores_and_names_break_by_id() {
        let ranked = Ranker::rank(vec![
            item(ID_3, "Same", 3.0),
            item(ID_1, "Same", 3.0),
            item(ID_2, "Same", 3.0),
        ]);
        let ids: Vec<AlternativeId> = ranked.iter().map(|i| i.alternative_id).collect();
        let expected: Vec<AlternativeId> =
            [ID_1, ID_2, ID_3].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn names_follow_locale_collation() {
        let ranked = Ranker::rank(vec![
            item(ID_1, "Banana", 1.0),
            item(ID_2, "apple", 1.0),
            item(ID_3, "Émile", 1.0),
            item("00000000-0000-4000-8000-000000000004", "Zed", 1.0),
        ]);
        assert_eq!(names(&ranked), vec!["apple", "Banana", "Émile", "Zed"]);
    }

    #[test]
    fn case_decides_otherwise_equal_names_lowercase_first() {
        let ranked = Ranker::rank(vec![item(ID_1, "Apple", 1.0), item(ID_2, "apple", 1.0)]);
        assert_eq!(names(&ranked), vec!["apple", "Apple"]);
    }

    #[test]
    fn name_outranks_id_in_tie_break() {
        let ranked = Ranker::rank(vec![item(ID_1, "beta", 2.0), item(ID_2, "Alpha", 2.0)]);
        assert_eq!(names(&ranked), vec!["Alpha", "beta"]);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn ordering_ignores_input_order() {
        let forward = Ranker::rank(vec![
            item(ID_1, "A", 1.0),
            item(ID_2, "B", 1.0),
            item(ID_3, "C", 5.0),
        ]);
        let backward = Ranker::rank(vec![
            item(ID_3, "C", 5.0),
            item(ID_2, "B", 1.0),
            item(ID_1, "A", 1.0),
        ]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(Ranker::rank(vec![]).is_empty());
    }
}
