use serde::{Deserialize, Serialize};

use crate::model::student::Student;
use crate::model::null_as_default;
use crate::model::subject::Subject;

/// A student joined with the subjects they have grades in, each carrying its
/// grades. Only the backend builds this shape; the client reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    #[serde(rename = "materias", default, deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
}

impl StudentDetail {
    /// Number of grades across every subject.
    pub fn grade_count(&self) -> usize {
        self.subjects.iter().map(|s| s.grades().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_subjects_and_missing_grade_arrays() {
        let json = r#"{
            "id": 7,
            "nombre": "Ana",
            "apellido": "Ruiz",
            "correo": "ana@example.com",
            "fechaNacimiento": "2003-05-01",
            "materias": [
                { "id": 1, "codigo": "MAT101", "nombre": "Algebra", "creditos": 4,
                  "notas": [ { "id": 10, "valor": 4.5, "fechaRegistro": "2024-03-15", "materiaId": 1, "alumnoId": 7 } ] },
                { "id": 2, "codigo": "FIS100", "nombre": "Física", "creditos": 3 }
            ]
        }"#;

        let detail: StudentDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.student.first_name, "Ana");
        assert_eq!(detail.subjects.len(), 2);
        assert_eq!(detail.subjects[0].grades()[0].value, 4.5);
        assert!(detail.subjects[1].grades().is_empty());
        assert_eq!(detail.grade_count(), 1);
    }
}
