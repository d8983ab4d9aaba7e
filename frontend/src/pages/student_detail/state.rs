use common::aggregate::GradeSummary;
use common::form::GradePrefill;
use common::model::student_detail::StudentDetail;
use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

pub struct StudentDetailPage {
    pub detail: Option<StudentDetail>,
    /// Recomputed whenever `detail` changes.
    pub summary: GradeSummary,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for StudentDetailPage {
    fn default() -> Self {
        Self {
            detail: None,
            summary: GradeSummary::default(),
            loading: true,
            error: None,
        }
    }
}

impl StudentDetailPage {
    pub fn set_detail(&mut self, detail: StudentDetail) {
        self.summary = GradeSummary::of(&detail);
        self.detail = Some(detail);
    }

    /// Opens the grade form for this student, with `subject_id` preselected when given.
    pub fn add_grade(&self, ctx: &Context<Self>, subject_id: Option<i64>) {
        let Some(detail) = &self.detail else {
            return;
        };
        let Some(navigator) = ctx.link().navigator() else {
            return;
        };
        let student_id = detail.student.id;
        let query = match subject_id {
            Some(subject_id) => GradePrefill::new(subject_id, student_id),
            None => GradePrefill::for_student(student_id),
        };
        if let Err(e) = navigator.push_with_query(&Route::GradeCreate, &query) {
            error!(format!("No se pudo abrir el formulario de notas: {e}"));
        }
    }
}
