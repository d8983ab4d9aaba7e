//! Message handling for the grade creation form.

use common::form::GradeDraft;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::helpers::Flash;
use crate::routes::Route;

use super::messages::Msg;
use super::state::GradeCreatePage;

pub fn update(page: &mut GradeCreatePage, ctx: &Context<GradeCreatePage>, msg: Msg) -> bool {
    match msg {
        Msg::DataLoaded(Ok((subjects, students))) => {
            log!(format!(
                "Cargadas {} materias y {} alumnos",
                subjects.len(),
                students.len()
            ));
            page.subjects = subjects;
            page.students = students;
            page.loading_data = false;
            true
        }
        Msg::DataLoaded(Err(_)) => {
            page.loading_data = false;
            page.error = Some("No se pudieron cargar las materias y alumnos".into());
            true
        }
        Msg::SetSubjectQuery(query) => {
            page.subject_query = query;
            true
        }
        Msg::SetStudentQuery(query) => {
            page.student_query = query;
            true
        }
        Msg::SelectSubject(id) => {
            page.draft.subject_id = id;
            true
        }
        Msg::SelectStudent(id) => {
            page.draft.student_id = id;
            true
        }
        Msg::SetValue(value) => {
            page.draft.value = value;
            true
        }
        Msg::SetDate(date) => {
            page.draft.registered_date = date;
            true
        }
        Msg::Submit => {
            if page.saving || page.loading_data {
                return false;
            }
            page.error = None;
            let grade = match page.draft.validate() {
                Ok(grade) => grade,
                Err(e) => {
                    page.error = Some(e.to_string());
                    return true;
                }
            };

            page.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Saved(api::grades::create(&grade).await));
            });
            true
        }
        Msg::Saved(Ok(_)) => {
            page.saving = false;
            page.draft = GradeDraft::default();
            page.subject_query.clear();
            page.student_query.clear();
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push_with_state(&Route::Grades, Flash::success("Nota creada exitosamente"));
            }
            true
        }
        Msg::Saved(Err(e)) => {
            page.saving = false;
            page.error = Some(
                e.server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string()),
            );
            true
        }
    }
}
