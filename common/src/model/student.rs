use serde::{Deserialize, Serialize};

use crate::model::null_as_default;

/// A student ("alumno") as returned by `/alumnos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "apellido", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(rename = "correo", default, deserialize_with = "null_as_default")]
    pub email: String,
    /// ISO-8601 date, sometimes with a time part appended by the backend.
    #[serde(rename = "fechaNacimiento", default, deserialize_with = "null_as_default")]
    pub birth_date: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Birth date cut down to `YYYY-MM-DD`, the format `<input type="date">` expects.
    pub fn birth_date_input(&self) -> String {
        self.birth_date.chars().take(10).collect()
    }
}

/// Body of `POST /alumnos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: String,
}

/// Body of `PUT /alumnos/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "correo", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "fechaNacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl StudentPatch {
    pub fn full(id: i64, student: NewStudent) -> Self {
        Self {
            id: Some(id),
            first_name: Some(student.first_name),
            last_name: Some(student.last_name),
            email: Some(student.email),
            birth_date: Some(student.birth_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_input_drops_time_part() {
        let student = Student {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Gómez".into(),
            email: "ana@example.com".into(),
            birth_date: "2004-02-29T00:00:00".into(),
        };
        assert_eq!(student.birth_date_input(), "2004-02-29");
        assert_eq!(student.full_name(), "Ana Gómez");
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = StudentPatch {
            email: Some("nuevo@example.com".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "correo": "nuevo@example.com" }));
    }
}
