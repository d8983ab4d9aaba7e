use serde::{Deserialize, Serialize};

use crate::model::null_as_default;

/// A single grade ("nota") linking one student to one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "fechaRegistro", default, deserialize_with = "null_as_default")]
    pub registered_date: String,
    #[serde(rename = "materiaId", default, deserialize_with = "null_as_default")]
    pub subject_id: i64,
    #[serde(rename = "alumnoId", default, deserialize_with = "null_as_default")]
    pub student_id: i64,
}

/// Body of `POST /notas`. The backend assigns the id, the client always sends `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGrade {
    pub id: i64,
    #[serde(rename = "fechaRegistro")]
    pub registered_date: String,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "materiaId")]
    pub subject_id: i64,
    #[serde(rename = "alumnoId")]
    pub student_id: i64,
}

impl NewGrade {
    pub fn new(value: f64, registered_date: String, subject_id: i64, student_id: i64) -> Self {
        Self {
            id: 0,
            registered_date,
            value,
            subject_id,
            student_id,
        }
    }
}
