use serde::{Deserialize, Serialize};

use crate::model::grade::Grade;
use crate::model::null_as_default;

/// A course ("materia") as returned by `/materias`.
///
/// `code` is unique server-side. `grades` is only populated when the subject
/// comes nested inside a [`StudentDetail`](crate::model::student_detail::StudentDetail).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    #[serde(rename = "codigo", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "creditos", default, deserialize_with = "null_as_default")]
    pub credits: i32,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<Grade>>,
}

impl Subject {
    /// Grades of this subject, empty when the backend omitted the array.
    pub fn grades(&self) -> &[Grade] {
        self.grades.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /materias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubject {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "creditos")]
    pub credits: i32,
}

/// Body of `PUT /materias/{id}`. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "creditos", skip_serializing_if = "Option::is_none")]
    pub credits: Option<i32>,
}

impl SubjectPatch {
    /// Full replacement of every editable field, as the edit form submits it.
    pub fn full(id: i64, subject: NewSubject) -> Self {
        Self {
            id: Some(id),
            code: Some(subject.code),
            name: Some(subject.name),
            credits: Some(subject.credits),
        }
    }
}
