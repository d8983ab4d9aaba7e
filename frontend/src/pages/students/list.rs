//! `/alumnos`: student table with edit, grade-detail and delete actions.

use common::error::ApiError;
use common::format::{long_date, or_not_available};
use common::model::student::Student;
use futures::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::entity_list::{EntityListPage, ListText, ListedEntity};
use crate::routes::Route;

pub type StudentsPage = EntityListPage<Student>;

impl ListedEntity for Student {
    const TEXT: ListText = ListText {
        title: "Alumnos",
        count_suffix: "alumnos registrados",
        new_label: "+ Nuevo Alumno",
        empty_icon: "🎓",
        empty_title: "No hay alumnos registrados",
        empty_hint: "Comienza agregando el primer alumno",
        empty_action: "Crear Primer Alumno",
        load_error: "No se pudieron cargar los alumnos. Intenta nuevamente.",
        load_toast: "Error al cargar los alumnos",
        not_found: "El alumno no fue encontrado",
        confirm_object: "al alumno",
        deleted_noun: "Alumno",
        deleted_verb: "eliminado",
    };
    const CREATE_ROUTE: Route = Route::StudentCreate;

    fn load() -> LocalBoxFuture<'static, Result<Vec<Self>, ApiError>> {
        api::students::list().boxed_local()
    }

    fn remove(id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        api::students::delete(id).boxed_local()
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn header() -> Html {
        html! {
            <>
                <th>{"Alumno"}</th>
                <th>{"Correo"}</th>
                <th>{"Fecha de Nacimiento"}</th>
            </>
        }
    }

    fn cells(&self) -> Html {
        html! {
            <>
                <td>
                    <div class="strong">{ or_not_available(&self.full_name()) }</div>
                    <div class="muted small">{ format!("ID: {}", self.id) }</div>
                </td>
                <td>{ or_not_available(&self.email) }</td>
                <td>{ long_date(&self.birth_date) }</td>
            </>
        }
    }

    fn links(&self) -> Html {
        let id = self.id.to_string();
        html! {
            <>
                <Link<Route> to={Route::StudentGrades { id: id.clone() }} classes="btn btn-small btn-secondary">
                    {"Ver notas"}
                </Link<Route>>
                <Link<Route> to={Route::StudentEdit { id }} classes="btn btn-small btn-secondary">
                    {"Editar"}
                </Link<Route>>
            </>
        }
    }
}
