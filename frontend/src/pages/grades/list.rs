//! `/notas`: every grade, each linking to its student's detail page.

use common::error::ApiError;
use common::format::{long_date, one_decimal};
use common::grading::GradeStatus;
use common::model::grade::Grade;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::feedback::{empty_state, error_panel, spinner};
use crate::helpers::{show_flash, Flash};
use crate::routes::Route;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Grade>, ApiError>),
}

pub struct GradesPage {
    grades: Vec<Grade>,
    loading: bool,
    error: Option<String>,
}

impl Component for GradesPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(flash) = ctx.link().location().and_then(|l| l.state::<Flash>()) {
            show_flash(&flash);
        }
        ctx.link().send_message(Msg::Load);
        Self {
            grades: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api::grades::list().await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(grades) => self.grades = grades,
                    Err(e) => self.error = Some(e.user_message("No se pudieron cargar las notas")),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading && self.grades.is_empty() {
            return spinner(None);
        }
        if let (Some(error), true) = (&self.error, self.grades.is_empty()) {
            return error_panel(error, ctx.link().callback(|_| Msg::Load));
        }

        html! {
            <div class="list-page">
                <div class="page-header">
                    <div>
                        <h1>{"Notas"}</h1>
                        <p class="muted">{ format!("{} notas registradas", self.grades.len()) }</p>
                    </div>
                    <Link<Route> to={Route::GradeCreate} classes="btn btn-primary">
                        {"+ Nueva Nota"}
                    </Link<Route>>
                </div>

                if self.grades.is_empty() {
                    { empty_state(
                        "📝",
                        "No hay notas registradas",
                        "Registra la primera calificación",
                        html! {
                            <Link<Route> to={Route::GradeCreate} classes="btn btn-primary">
                                {"Crear Primera Nota"}
                            </Link<Route>>
                        },
                    ) }
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"ID"}</th>
                                <th>{"Valor"}</th>
                                <th>{"Fecha Registro"}</th>
                                <th>{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.grades.iter().map(grade_row) }
                        </tbody>
                    </table>
                    <p class="muted small">{"Haz clic en \"Ver\" para consultar las notas del alumno"}</p>
                }
            </div>
        }
    }
}

fn grade_row(grade: &Grade) -> Html {
    let status = GradeStatus::of(grade.value);
    html! {
        <tr key={grade.id.to_string()}>
            <td class="muted">{ format!("#{}", grade.id) }</td>
            <td>
                <span class={classes!("badge", format!("badge-{}", status.tone()))}>
                    { one_decimal(grade.value) }
                </span>
            </td>
            <td>{ long_date(&grade.registered_date) }</td>
            <td class="actions">
                <Link<Route> to={Route::StudentGrades { id: grade.student_id.to_string() }} classes="btn btn-small btn-secondary">
                    {"Ver"}
                </Link<Route>>
            </td>
        </tr>
    }
}
