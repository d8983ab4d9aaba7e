//! `/materias`: every subject in a table, with edit links and deletion
//! through the confirmation modal.

use common::error::ApiError;
use common::model::subject::Subject;
use futures::future::{FutureExt, LocalBoxFuture};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::entity_list::{EntityListPage, ListText, ListedEntity};
use crate::routes::Route;

pub type SubjectsPage = EntityListPage<Subject>;

impl ListedEntity for Subject {
    const TEXT: ListText = ListText {
        title: "Materias",
        count_suffix: "materias registradas",
        new_label: "+ Nueva Materia",
        empty_icon: "📚",
        empty_title: "No hay materias registradas",
        empty_hint: "Comienza creando la primera materia",
        empty_action: "Crear Primera Materia",
        load_error: "No se pudieron cargar las materias. Intenta nuevamente.",
        load_toast: "Error al cargar las materias",
        not_found: "La materia no fue encontrada",
        confirm_object: "la materia",
        deleted_noun: "Materia",
        deleted_verb: "eliminada",
    };
    const CREATE_ROUTE: Route = Route::SubjectCreate;

    fn load() -> LocalBoxFuture<'static, Result<Vec<Self>, ApiError>> {
        api::subjects::list().boxed_local()
    }

    fn remove(id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        api::subjects::delete(id).boxed_local()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn header() -> Html {
        html! {
            <>
                <th>{"Código"}</th>
                <th>{"Nombre"}</th>
                <th>{"Créditos"}</th>
            </>
        }
    }

    fn cells(&self) -> Html {
        html! {
            <>
                <td><span class="badge badge-blue">{ self.code.clone() }</span></td>
                <td>{ self.name.clone() }</td>
                <td>{ self.credits }</td>
            </>
        }
    }

    fn links(&self) -> Html {
        html! {
            <Link<Route> to={Route::SubjectEdit { id: self.id.to_string() }} classes="btn btn-small btn-secondary">
                {"Editar"}
            </Link<Route>>
        }
    }
}
