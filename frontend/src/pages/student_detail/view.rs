use common::format::{long_date, one_decimal, or_not_available};
use common::grading::GradeStatus;
use common::model::grade::Grade;
use common::model::subject::Subject;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::feedback::{empty_state, spinner};
use crate::routes::Route;

use super::messages::Msg;
use super::state::StudentDetailPage;

pub fn view(page: &StudentDetailPage, ctx: &Context<StudentDetailPage>) -> Html {
    let link = ctx.link();

    if page.loading {
        return spinner(Some("Cargando notas del alumno..."));
    }

    let Some(detail) = &page.detail else {
        let message = page.error.clone().unwrap_or_else(|| "Alumno no encontrado".into());
        return html! {
            <div class="panel panel-error">
                <h2>{"Error"}</h2>
                <p>{ message }</p>
                <div class="actions">
                    <Link<Route> to={Route::Students} classes="btn btn-secondary">
                        {"Volver a Alumnos"}
                    </Link<Route>>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Load)}>
                        {"Reintentar"}
                    </button>
                </div>
            </div>
        };
    };

    let student = &detail.student;
    html! {
        <div class="detail-page">
            <Link<Route> to={Route::Grades}>{"← Volver a Notas"}</Link<Route>>

            <div class="card page-header">
                <div>
                    <h1>
                        { student.full_name() }
                        <span class="badge badge-gray">{ format!("ID: {}", student.id) }</span>
                    </h1>
                    <p class="muted">{ or_not_available(&student.email) }</p>
                    <p class="muted small">
                        { format!(
                            "{} materias · {} notas totales",
                            detail.subjects.len(),
                            page.summary.grade_count
                        ) }
                    </p>
                </div>
                { average_badge("Promedio General", page.summary.overall) }
            </div>

            if detail.subjects.is_empty() {
                { empty_state(
                    "📚",
                    "No hay materias asignadas",
                    "Este alumno aún no tiene notas registradas",
                    html! {
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::AddGrade(None))}>
                            {"+ Agregar Nota"}
                        </button>
                    },
                ) }
            } else {
                { for detail.subjects.iter().map(|s| subject_card(s, page.summary.subject_average(s.id), link)) }
            }
        </div>
    }
}

fn average_badge(caption: &str, average: Option<f64>) -> Html {
    match average {
        Some(avg) => {
            let status = GradeStatus::of(avg);
            html! {
                <div class="average">
                    <span class="muted small">{ caption.to_string() }</span>
                    <span class={classes!("badge", "badge-large", format!("badge-{}", status.tone()))}>
                        { one_decimal(avg) }
                    </span>
                </div>
            }
        }
        None => html! {
            <div class="average">
                <span class="muted small">{ caption.to_string() }</span>
                <span class="badge badge-large badge-gray">{"N/A"}</span>
            </div>
        },
    }
}

fn subject_card(subject: &Subject, average: Option<f64>, link: &Scope<StudentDetailPage>) -> Html {
    let grades = subject.grades();
    let subject_id = subject.id;

    html! {
        <section class="card subject-card" key={subject.id.to_string()}>
            <div class="page-header">
                <div>
                    <h2>
                        <span class="badge badge-blue">{ subject.code.clone() }</span>
                        { " " }
                        { subject.name.clone() }
                    </h2>
                    <p class="muted small">
                        { format!("{} créditos · {} notas", subject.credits, grades.len()) }
                    </p>
                </div>
                { average_badge("Promedio", average) }
            </div>

            if grades.is_empty() {
                <p class="muted">{"No hay notas registradas en esta materia"}</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Nota"}</th>
                            <th>{"Fecha"}</th>
                            <th>{"Estado"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for grades.iter().map(grade_row) }
                    </tbody>
                </table>
            }

            <button
                class="btn btn-small btn-secondary"
                onclick={link.callback(move |_| Msg::AddGrade(Some(subject_id)))}
            >
                {"+ Agregar nueva nota"}
            </button>
        </section>
    }
}

fn grade_row(grade: &Grade) -> Html {
    let status = GradeStatus::of(grade.value);
    html! {
        <tr key={grade.id.to_string()}>
            <td>
                <span class={classes!("badge", format!("badge-{}", status.tone()))}>
                    { one_decimal(grade.value) }
                </span>
            </td>
            <td>{ long_date(&grade.registered_date) }</td>
            <td>
                <span class={classes!("status", format!("status-{}", status.tone()))}>
                    { status.label() }
                </span>
            </td>
        </tr>
    }
}
