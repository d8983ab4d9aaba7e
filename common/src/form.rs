//! Create/edit form state.
//!
//! Each entity form runs in one [`FormMode`] chosen when it mounts, from the
//! route parameter, and never re-derived afterwards. Drafts hold the raw input
//! strings and are validated into request bodies only on submit.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::grade::NewGrade;
use crate::model::student::{NewStudent, Student};
use crate::model::subject::{NewSubject, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// `Edit(id)` when the route carries a positive integer id, `Create` otherwise.
    pub fn from_route_id(id: Option<&str>) -> Self {
        match id.and_then(|raw| raw.parse::<i64>().ok()) {
            Some(id) if id > 0 => Self::Edit(id),
            _ => Self::Create,
        }
    }

    pub fn id(self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Form heading, e.g. "Crear Materia" / "Editar Materia".
    pub fn title(self, entity: &str) -> String {
        match self {
            Self::Create => format!("Crear {entity}"),
            Self::Edit(_) => format!("Editar {entity}"),
        }
    }

    /// Submit button text, e.g. "Crear Alumno" / "Actualizar Alumno".
    pub fn submit_label(self, entity: &str, saving: bool) -> String {
        if saving {
            return "Guardando...".to_string();
        }
        match self {
            Self::Create => format!("Crear {entity}"),
            Self::Edit(_) => format!("Actualizar {entity}"),
        }
    }
}

fn any_empty(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectDraft {
    pub code: String,
    pub name: String,
    pub credits: String,
}

impl SubjectDraft {
    pub fn from_subject(subject: &Subject) -> Self {
        Self {
            code: subject.code.clone(),
            name: subject.name.clone(),
            credits: subject.credits.to_string(),
        }
    }

    /// Code and name must be present, credits a positive integer.
    pub fn validate(&self) -> Result<NewSubject, ValidationError> {
        let credits = self.credits.parse::<i32>().unwrap_or(0);
        if any_empty(&[&self.code, &self.name]) || credits <= 0 {
            return Err(ValidationError::MissingFields);
        }
        Ok(NewSubject {
            code: self.code.clone(),
            name: self.name.clone(),
            credits,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: String,
}

impl StudentDraft {
    pub fn from_student(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            birth_date: student.birth_date_input(),
        }
    }

    pub fn validate(&self) -> Result<NewStudent, ValidationError> {
        if any_empty(&[
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.birth_date,
        ]) {
            return Err(ValidationError::MissingFields);
        }
        Ok(NewStudent {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeDraft {
    pub value: String,
    pub registered_date: String,
    pub subject_id: String,
    pub student_id: String,
}

impl GradeDraft {
    /// Checks run in order: presence, then the two ids, then the value.
    pub fn validate(&self) -> Result<NewGrade, ValidationError> {
        if any_empty(&[
            &self.value,
            &self.registered_date,
            &self.subject_id,
            &self.student_id,
        ]) {
            return Err(ValidationError::MissingFields);
        }

        let (Ok(subject_id), Ok(student_id)) =
            (self.subject_id.parse::<i64>(), self.student_id.parse::<i64>())
        else {
            return Err(ValidationError::InvalidReference);
        };
        if subject_id <= 0 || student_id <= 0 {
            return Err(ValidationError::InvalidReference);
        }

        let value = self
            .value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::InvalidValue)?;

        Ok(NewGrade::new(
            value,
            self.registered_date.clone(),
            subject_id,
            student_id,
        ))
    }
}

/// `?materiaId=&alumnoId=` on the grade form: preselects the pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePrefill {
    #[serde(rename = "materiaId", default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(rename = "alumnoId", default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

impl GradePrefill {
    pub fn new(subject_id: i64, student_id: i64) -> Self {
        Self {
            subject_id: Some(subject_id.to_string()),
            student_id: Some(student_id.to_string()),
        }
    }

    /// Only the student is known; the subject is picked on the form.
    pub fn for_student(student_id: i64) -> Self {
        Self {
            subject_id: None,
            student_id: Some(student_id.to_string()),
        }
    }

    /// Seeds a fresh draft with the preselected ids.
    pub fn into_draft(self) -> GradeDraft {
        GradeDraft {
            subject_id: self.subject_id.unwrap_or_default(),
            student_id: self.student_id.unwrap_or_default(),
            ..GradeDraft::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefill_for_a_student_leaves_the_subject_open() {
        let query = serde_json::to_value(GradePrefill::for_student(7)).unwrap();
        assert_eq!(query, serde_json::json!({ "alumnoId": "7" }));

        let draft = GradePrefill::for_student(7).into_draft();
        assert_eq!((draft.subject_id.as_str(), draft.student_id.as_str()), ("", "7"));

        let both = GradePrefill::new(3, 7).into_draft();
        assert_eq!((both.subject_id.as_str(), both.student_id.as_str()), ("3", "7"));
    }

    #[test]
    fn mode_comes_from_positive_integer_ids_only() {
        assert_eq!(FormMode::from_route_id(Some("12")), FormMode::Edit(12));
        assert_eq!(FormMode::from_route_id(Some("0")), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some("-3")), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some("abc")), FormMode::Create);
        assert_eq!(FormMode::from_route_id(None), FormMode::Create);
    }

    #[test]
    fn labels_follow_mode() {
        assert_eq!(FormMode::Create.title("Materia"), "Crear Materia");
        assert_eq!(FormMode::Edit(3).title("Materia"), "Editar Materia");
        assert_eq!(FormMode::Edit(3).submit_label("Alumno", false), "Actualizar Alumno");
        assert_eq!(FormMode::Create.submit_label("Alumno", true), "Guardando...");
    }

    #[test]
    fn subject_needs_positive_credits() {
        let draft = SubjectDraft {
            code: "MAT101".into(),
            name: "Algebra".into(),
            credits: "0".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));

        let draft = SubjectDraft {
            credits: "4".into(),
            ..draft
        };
        assert_eq!(
            draft.validate(),
            Ok(NewSubject {
                code: "MAT101".into(),
                name: "Algebra".into(),
                credits: 4
            })
        );
    }

    #[test]
    fn student_needs_every_field() {
        let draft = StudentDraft {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: String::new(),
            birth_date: "2003-05-01".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn grade_validation_order() {
        let mut draft = GradeDraft {
            value: "4.2".into(),
            registered_date: "2024-03-15".into(),
            subject_id: String::new(),
            student_id: "7".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::MissingFields));

        draft.subject_id = "x".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidReference));

        draft.subject_id = "1".into();
        draft.value = "cuatro".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidValue));

        draft.value = "4.2".into();
        let grade = draft.validate().unwrap();
        assert_eq!(grade.id, 0);
        assert_eq!(grade.value, 4.2);
        assert_eq!((grade.subject_id, grade.student_id), (1, 7));
    }
}
