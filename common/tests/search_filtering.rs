use common::model::student::Student;
use common::search::filter;

fn student(id: i64, first_name: &str, last_name: &str, email: &str) -> Student {
    Student {
        id,
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        birth_date: "2000-01-01".into(),
    }
}

fn names(students: &[&Student]) -> Vec<String> {
    students.iter().map(|s| s.first_name.clone()).collect()
}

#[test]
fn keeps_matches_in_original_order() {
    let students = vec![
        student(1, "Ana", "Ruiz", "a@x.com"),
        student(2, "Juan", "Pérez", "j@x.com"),
        student(3, "Pedro", "López", "p@x.com"),
    ];
    assert_eq!(names(&filter(&students, "an")), ["Ana", "Juan"]);
}

#[test]
fn empty_query_returns_everything_unchanged() {
    let students = vec![
        student(1, "Ana", "Ruiz", "a@x.com"),
        student(2, "Juan", "Pérez", "j@x.com"),
        student(3, "Pedro", "López", "p@x.com"),
    ];
    let before = students.clone();
    let all = filter(&students, "");
    assert_eq!(all.len(), 3);
    assert_eq!(names(&all), ["Ana", "Juan", "Pedro"]);
    assert_eq!(students, before);
}

#[test]
fn matching_ignores_case() {
    let students = vec![student(1, "maria", "Soto", "m@x.com")];
    assert_eq!(filter(&students, "MARIA").len(), 1);
}

#[test]
fn last_name_and_email_are_searched() {
    let students = vec![
        student(1, "Ana", "Ruiz", "ana@colegio.edu"),
        student(2, "Luis", "Ortega", "luis@otro.org"),
    ];
    assert_eq!(names(&filter(&students, "ortega")), ["Luis"]);
    assert_eq!(names(&filter(&students, "COLEGIO")), ["Ana"]);
    assert!(filter(&students, "zzz").is_empty());
}
