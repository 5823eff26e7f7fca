//! Interval conflict checks for limit entities.
//!
//! At most one budget (and one saving goal) may cover any given day for a
//! (category, wallet) pair. Bounds are inclusive on both sides, so two spans
//! that merely touch on a boundary day already conflict.

use uuid::Uuid;

use crate::domain::{DateSpan, LimitEntity};

/// True when `candidate` shares at least one day with any entity in
/// `existing`, ignoring the entity identified by `exclude` (the record being
/// updated is never its own conflict).
pub fn has_overlap(candidate: DateSpan, existing: &[LimitEntity], exclude: Option<Uuid>) -> bool {
    existing
        .iter()
        .filter(|entity| exclude.map_or(true, |id| entity.id != id))
        .any(|entity| candidate.overlaps(&entity.span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LimitKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(s: (i32, u32, u32), e: (i32, u32, u32)) -> DateSpan {
        DateSpan::new(date(s.0, s.1, s.2), date(e.0, e.1, e.2)).unwrap()
    }

    fn budget(span: DateSpan) -> LimitEntity {
        LimitEntity::new(
            LimitKind::Budget,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Groceries",
            Decimal::from(100),
            span,
        )
    }

    #[test]
    fn detects_boundary_day_conflict() {
        let existing = vec![budget(span((2024, 1, 1), (2024, 1, 31)))];
        let candidate = span((2024, 1, 31), (2024, 2, 28));
        assert!(has_overlap(candidate, &existing, None));
    }

    #[test]
    fn accepts_disjoint_candidate() {
        let existing = vec![budget(span((2024, 1, 1), (2024, 1, 31)))];
        let candidate = span((2024, 2, 1), (2024, 2, 28));
        assert!(!has_overlap(candidate, &existing, None));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = span((2024, 1, 10), (2024, 2, 10));
        let b = span((2024, 2, 1), (2024, 3, 1));
        assert_eq!(
            has_overlap(a, &[budget(b)], None),
            has_overlap(b, &[budget(a)], None)
        );
    }

    #[test]
    fn excluded_entity_never_conflicts_with_itself() {
        let entity = budget(span((2024, 1, 1), (2024, 1, 31)));
        let same_interval = entity.span;
        let existing = vec![entity.clone()];
        assert!(has_overlap(same_interval, &existing, None));
        assert!(!has_overlap(same_interval, &existing, Some(entity.id)));
    }

    #[test]
    fn single_instant_interval_participates() {
        let existing = vec![budget(span((2024, 1, 15), (2024, 1, 15)))];
        assert!(has_overlap(span((2024, 1, 1), (2024, 1, 31)), &existing, None));
        assert!(!has_overlap(span((2024, 1, 16), (2024, 1, 31)), &existing, None));
    }
}
