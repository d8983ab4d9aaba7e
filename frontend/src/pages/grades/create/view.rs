//! View for the grade creation form: two search-and-pick sections (subject,
//! student) followed by the value and date inputs.

use common::format::or_not_available;
use common::model::student::Student;
use common::model::subject::Subject;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::feedback::{inline_error, spinner};
use crate::helpers::{input_value, select_value};
use crate::routes::Route;

use super::messages::Msg;
use super::state::GradeCreatePage;

pub fn view(page: &GradeCreatePage, ctx: &Context<GradeCreatePage>) -> Html {
    let link = ctx.link();

    if page.loading_data {
        return spinner(Some("Cargando materias y alumnos..."));
    }

    html! {
        <div class="form-page">
            <h1>{"Crear Nota"}</h1>
            <form
                class="card form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { inline_error(&page.error) }

                <p class="muted small">
                    { format!(
                        "{} materias y {} alumnos disponibles",
                        page.subjects.len(),
                        page.students.len()
                    ) }
                </p>

                <div class="picker-grid">
                    { subject_picker(page, link) }
                    { student_picker(page, link) }
                </div>

                <div class="form-grid">
                    <label>
                        {"Valor (0 - 10)"}
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            max="10"
                            placeholder="Ej: 4.5"
                            value={page.draft.value.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetValue(input_value(&e)))}
                            disabled={page.saving}
                        />
                    </label>
                    <label>
                        {"Fecha de Registro"}
                        <input
                            type="date"
                            value={page.draft.registered_date.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetDate(input_value(&e)))}
                            disabled={page.saving}
                        />
                    </label>
                </div>

                <button type="submit" class="btn btn-primary" disabled={page.saving}>
                    { if page.saving { "Guardando..." } else { "Crear Nota" } }
                </button>
            </form>
            <Link<Route> to={Route::Grades}>{"← Volver a Notas"}</Link<Route>>
        </div>
    }
}

fn subject_picker(page: &GradeCreatePage, link: &Scope<GradeCreatePage>) -> Html {
    let filtered = page.filtered_subjects();
    let empty_text = if page.subject_query.is_empty() {
        "No hay materias disponibles"
    } else {
        "No se encontraron materias"
    };

    html! {
        <div class="picker">
            <label>
                {"Buscar Materia"}
                <input
                    type="text"
                    placeholder="Escribe para buscar materia..."
                    value={page.subject_query.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetSubjectQuery(input_value(&e)))}
                />
            </label>
            <label>
                { format!("Materia ({} de {})", filtered.len(), page.subjects.len()) }
                <select
                    size="5"
                    onchange={link.callback(|e: Event| Msg::SelectSubject(select_value(&e)))}
                    disabled={page.saving}
                >
                    <option value="" selected={page.draft.subject_id.is_empty()}>
                        {"-- Selecciona una materia --"}
                    </option>
                    if filtered.is_empty() {
                        <option disabled={true}>{ empty_text }</option>
                    } else {
                        { for filtered.iter().map(|s| subject_option(s, &page.draft.subject_id)) }
                    }
                </select>
            </label>
            if let Some(subject) = page.selected_subject() {
                <p class="selected">{ format!("Seleccionada: {}", subject.name) }</p>
            }
        </div>
    }
}

fn subject_option(subject: &Subject, selected_id: &str) -> Html {
    let id = subject.id.to_string();
    html! {
        <option key={id.clone()} value={id.clone()} selected={id == selected_id}>
            { format!("{} | {} ({} créditos)", subject.code, subject.name, subject.credits) }
        </option>
    }
}

fn student_picker(page: &GradeCreatePage, link: &Scope<GradeCreatePage>) -> Html {
    let filtered = page.filtered_students();
    let empty_text = if page.student_query.is_empty() {
        "No hay alumnos disponibles"
    } else {
        "No se encontraron alumnos"
    };

    html! {
        <div class="picker">
            <label>
                {"Buscar Alumno"}
                <input
                    type="text"
                    placeholder="Escribe para buscar alumno..."
                    value={page.student_query.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetStudentQuery(input_value(&e)))}
                />
            </label>
            <label>
                { format!("Alumno ({} de {})", filtered.len(), page.students.len()) }
                <select
                    size="5"
                    onchange={link.callback(|e: Event| Msg::SelectStudent(select_value(&e)))}
                    disabled={page.saving}
                >
                    <option value="" selected={page.draft.student_id.is_empty()}>
                        {"-- Selecciona un alumno --"}
                    </option>
                    if filtered.is_empty() {
                        <option disabled={true}>{ empty_text }</option>
                    } else {
                        { for filtered.iter().map(|s| student_option(s, &page.draft.student_id)) }
                    }
                </select>
            </label>
            if let Some(student) = page.selected_student() {
                <p class="selected">{ format!("Seleccionado: {}", student.full_name()) }</p>
            }
        </div>
    }
}

fn student_option(student: &Student, selected_id: &str) -> Html {
    let id = student.id.to_string();
    html! {
        <option key={id.clone()} value={id.clone()} selected={id == selected_id}>
            { format!("{} | {}", student.full_name(), or_not_available(&student.email)) }
        </option>
    }
}
