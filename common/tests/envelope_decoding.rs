use common::aggregate::GradeSummary;
use common::envelope::{decode_created, decode_page, decode_record};
use common::error::ApiError;
use common::format::long_date;
use common::model::grade::Grade;
use common::model::student::Student;
use common::model::student_detail::StudentDetail;
use common::model::subject::{NewSubject, Subject};
use serde_json::json;

#[test]
fn list_endpoints_unwrap_page_content() {
    let body = json!({
        "status": 200,
        "message": "OK",
        "data": {
            "content": [
                { "id": 1, "valor": 4.0, "fechaRegistro": "2024-03-15", "materiaId": 1, "alumnoId": 7 },
                { "id": 2, "valor": 2.5, "fechaRegistro": "2024-03-16", "materiaId": 2, "alumnoId": 7 }
            ],
            "pageable": { "pageNumber": 0, "pageSize": 20, "offset": 0, "paged": true, "unpaged": false,
                          "sort": { "empty": true, "sorted": false, "unsorted": true } },
            "totalElements": 2,
            "totalPages": 1,
            "last": true,
            "first": true,
            "size": 20,
            "number": 0,
            "numberOfElements": 2,
            "empty": false
        }
    })
    .to_string();

    let grades: Vec<Grade> = decode_page(&body).unwrap();
    assert_eq!(grades.iter().map(|g| g.id).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(grades[1].value, 2.5);
}

#[test]
fn record_endpoints_accept_wrapped_and_bare_shapes() {
    let wrapped = r#"{"status":200,"message":"OK","data":{"id":3,"codigo":"QUI1","nombre":"Química","creditos":2}}"#;
    let bare = r#"{"id":3,"codigo":"QUI1","nombre":"Química","creditos":2}"#;
    let a: Subject = decode_record(wrapped).unwrap();
    let b: Subject = decode_record(bare).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.grades, None);
}

#[test]
fn created_subject_reads_back_with_submitted_fields() {
    let submitted = NewSubject {
        code: "MAT101".into(),
        name: "Algebra".into(),
        credits: 4,
    };
    let request = serde_json::to_value(&submitted).unwrap();
    assert_eq!(request, json!({ "codigo": "MAT101", "nombre": "Algebra", "creditos": 4 }));

    // The backend echoes the body back with the id it assigned.
    let mut stored = request.clone();
    stored["id"] = json!(15);
    let body = json!({ "status": 201, "message": "Creado", "data": stored }).to_string();

    let fetched: Subject = decode_record(&body).unwrap();
    assert_eq!(fetched.id, 15);
    assert_eq!(
        (fetched.code.as_str(), fetched.name.as_str(), fetched.credits),
        ("MAT101", "Algebra", 4)
    );
}

#[test]
fn null_fields_do_not_sink_the_whole_list() {
    let body = json!({
        "status": 200,
        "message": "OK",
        "data": { "content": [
            { "id": 1, "nombre": "Ana", "apellido": "Ruiz", "correo": "ana@example.com", "fechaNacimiento": "2003-05-01" },
            { "id": 2, "nombre": "Juan", "apellido": null, "correo": null, "fechaNacimiento": null }
        ] }
    })
    .to_string();

    let students: Vec<Student> = decode_page(&body).unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].full_name(), "Juan");
    assert_eq!(students[1].email, "");
    assert_eq!(long_date(&students[1].birth_date), "N/A");

    let subjects: Vec<Subject> = decode_page(
        r#"{"status":200,"data":{"content":[{"id":4,"codigo":null,"nombre":"Arte","creditos":null,"notas":null}]}}"#,
    )
    .unwrap();
    assert_eq!((subjects[0].code.as_str(), subjects[0].credits), ("", 0));
    assert!(subjects[0].grades().is_empty());
}

#[test]
fn student_detail_with_null_subjects_has_no_average() {
    let body = r#"{"status":200,"message":"OK","data":{
        "id":7,"nombre":"Ana","apellido":"Ruiz","correo":"ana@example.com",
        "fechaNacimiento":"2003-05-01","materias":null}}"#;

    let detail: StudentDetail = decode_record(body).unwrap();
    assert!(detail.subjects.is_empty());
    let summary = GradeSummary::of(&detail);
    assert_eq!(summary.overall, None);
    assert_eq!(summary.grade_count, 0);
}

#[test]
fn create_succeeds_without_the_created_record() {
    let null_data = r#"{"status":201,"message":"Nota creada","data":null}"#;
    assert_eq!(decode_created::<Grade>(null_data).unwrap(), None);
    assert_eq!(decode_created::<Grade>("").unwrap(), None);
    assert_eq!(decode_created::<Grade>("  ").unwrap(), None);

    let echoed = r#"{"status":201,"message":"Nota creada","data":{"id":9,"valor":4.0,"fechaRegistro":"2024-03-15","materiaId":1,"alumnoId":7}}"#;
    assert_eq!(decode_created::<Grade>(echoed).unwrap().map(|g| g.id), Some(9));

    let rejected = r#"{"status":400,"message":"Valor fuera de rango","data":null}"#;
    assert_eq!(
        decode_created::<Grade>(rejected).unwrap_err(),
        ApiError::Envelope {
            status: 400,
            message: "Valor fuera de rango".into()
        }
    );
}
