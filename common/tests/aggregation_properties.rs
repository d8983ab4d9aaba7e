use common::aggregate::{GradeSummary, summarize};
use common::model::grade::Grade;
use common::model::student::Student;
use common::model::student_detail::StudentDetail;
use common::model::subject::Subject;

fn grade(id: i64, subject_id: i64, value: f64) -> Grade {
    Grade {
        id,
        value,
        registered_date: "2024-03-15".into(),
        subject_id,
        student_id: 1,
    }
}

fn subject(id: i64, values: &[f64]) -> Subject {
    Subject {
        grades: Some(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| grade(id * 100 + i as i64, id, *v))
                .collect(),
        ),
        ..subject_without_grade_array(id)
    }
}

fn subject_without_grade_array(id: i64) -> Subject {
    Subject {
        id,
        code: format!("S{id}"),
        name: format!("Materia {id}"),
        credits: 3,
        grades: None,
    }
}

fn detail(subjects: Vec<Subject>) -> StudentDetail {
    StudentDetail {
        student: Student {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "ana@example.com".into(),
            birth_date: "2003-05-01".into(),
        },
        subjects,
    }
}

#[test]
fn overall_average_flattens_every_subject() {
    let summary = GradeSummary::of(&detail(vec![
        subject(1, &[8.0, 6.0]),
        subject(2, &[10.0]),
    ]));
    assert_eq!(summary.overall, Some(8.0));
    assert_eq!(summary.subject_average(1), Some(7.0));
    assert_eq!(summary.subject_average(2), Some(10.0));
    assert_eq!(summary.grade_count, 3);
}

#[test]
fn no_subjects_means_no_average() {
    let summary = GradeSummary::of(&detail(vec![]));
    assert_eq!(summary.overall, None);
    assert!(summary.per_subject.is_empty());
    assert_eq!(summary.grade_count, 0);
}

#[test]
fn empty_and_missing_grade_arrays_mean_no_average() {
    let summary = GradeSummary::of(&detail(vec![subject(1, &[]), subject_without_grade_array(2)]));
    assert_eq!(summary.overall, None);
    assert_eq!(summary.per_subject.get(&1), Some(&None));
    assert_eq!(summary.per_subject.get(&2), Some(&None));
}

#[test]
fn per_subject_average_is_sum_over_count() {
    let cases: &[&[f64]] = &[&[5.0], &[1.0, 2.0, 3.0, 4.0], &[3.5, 3.5, 0.0], &[9.9, 0.1]];
    for values in cases {
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        let summary = summarize(vec![(42, values.to_vec())]);
        let got = summary.subject_average(42).expect("average");
        assert!((got - expected).abs() < 1e-12, "{values:?}: {got} != {expected}");
    }
}

#[test]
fn averages_do_not_depend_on_order() {
    let forward = GradeSummary::of(&detail(vec![
        subject(1, &[2.0, 4.5, 3.25]),
        subject(2, &[7.0, 1.0]),
    ]));
    let reversed = GradeSummary::of(&detail(vec![
        subject(2, &[1.0, 7.0]),
        subject(1, &[3.25, 4.5, 2.0]),
    ]));
    assert_eq!(forward, reversed);
    assert_eq!(forward, GradeSummary::of(&detail(vec![
        subject(1, &[2.0, 4.5, 3.25]),
        subject(2, &[7.0, 1.0]),
    ])));
}
