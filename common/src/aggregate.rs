//! Grade averages for the student detail page.
//!
//! Averages are plain arithmetic means: no credit weighting, no rounding
//! (the view formats to one decimal). A subject without grades, or a student
//! without any grade at all, has no average rather than a zero.

use std::collections::BTreeMap;

use crate::model::student_detail::StudentDetail;

/// Running `(sum, count)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn merge(&mut self, other: Mean) {
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` when nothing was pushed.
    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mean = Mean::default();
        for v in iter {
            mean.push(v);
        }
        mean
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeSummary {
    /// Average per subject id; `None` for subjects without grades.
    pub per_subject: BTreeMap<i64, Option<f64>>,
    /// Average over every grade of the student, all subjects flattened.
    pub overall: Option<f64>,
    pub grade_count: usize,
}

impl GradeSummary {
    pub fn of(detail: &StudentDetail) -> Self {
        summarize(
            detail
                .subjects
                .iter()
                .map(|s| (s.id, s.grades().iter().map(|g| g.value))),
        )
    }

    pub fn subject_average(&self, subject_id: i64) -> Option<f64> {
        self.per_subject.get(&subject_id).copied().flatten()
    }
}

/// Single pass over `(subject_id, grade values)` pairs.
///
/// A subject id seen twice has its grades pooled.
pub fn summarize<I, V>(subjects: I) -> GradeSummary
where
    I: IntoIterator<Item = (i64, V)>,
    V: IntoIterator<Item = f64>,
{
    let mut per_subject: BTreeMap<i64, Mean> = BTreeMap::new();
    let mut total = Mean::default();

    for (subject_id, values) in subjects {
        let mean: Mean = values.into_iter().collect();
        total.merge(mean);
        per_subject.entry(subject_id).or_default().merge(mean);
    }

    GradeSummary {
        per_subject: per_subject
            .into_iter()
            .map(|(id, mean)| (id, mean.value()))
            .collect(),
        overall: total.value(),
        grade_count: total.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mean_has_no_value() {
        assert_eq!(Mean::default().value(), None);
    }

    #[test]
    fn subject_without_grades_has_no_average() {
        let summary = summarize(vec![(1, vec![]), (2, vec![4.0, 5.0])]);
        assert_eq!(summary.subject_average(1), None);
        assert_eq!(summary.subject_average(2), Some(4.5));
        assert_eq!(summary.overall, Some(4.5));
        assert_eq!(summary.grade_count, 2);
    }

    #[test]
    fn unknown_subject_has_no_average() {
        let summary = summarize(vec![(1, vec![3.0])]);
        assert_eq!(summary.subject_average(99), None);
    }
}
