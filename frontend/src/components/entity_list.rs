//! Table page shared by the subject and student lists.
//!
//! [`EntityListPage`] owns loading, the retry panel, the empty state and the
//! whole delete flow (confirmation modal, [`DeletableList`] transitions,
//! toasts, reload after a failure). Each entity plugs in its requests, texts
//! and table cells through [`ListedEntity`].

use common::deletion::{AfterFailure, DeletableList, DeleteState, Keyed};
use common::error::ApiError;
use futures::future::LocalBoxFuture;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::feedback::{empty_state, error_panel, spinner};
use crate::helpers::{show_flash, show_toast, Flash, ToastKind};
use crate::routes::Route;

/// Fixed wording of one list page.
pub struct ListText {
    pub title: &'static str,
    /// Follows the row count: "3 materias registradas".
    pub count_suffix: &'static str,
    pub new_label: &'static str,
    pub empty_icon: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub empty_action: &'static str,
    pub load_error: &'static str,
    pub load_toast: &'static str,
    pub not_found: &'static str,
    /// Object of "¿Estás seguro de eliminar ...": "la materia", "al alumno".
    pub confirm_object: &'static str,
    /// Subject of the success toast: "Materia", "Alumno".
    pub deleted_noun: &'static str,
    /// Agrees with `deleted_noun`: "eliminada", "eliminado".
    pub deleted_verb: &'static str,
}

impl ListText {
    pub fn count(&self, n: usize) -> String {
        format!("{n} {}", self.count_suffix)
    }

    pub fn confirm(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => format!(
                "¿Estás seguro de eliminar {} \"{name}\"? Esta acción no se puede deshacer.",
                self.confirm_object
            ),
            None => "¿Estás seguro de eliminar este registro?".to_string(),
        }
    }

    pub fn deleted(&self, name: &str) -> String {
        format!(
            "{} \"{name}\" {} exitosamente",
            self.deleted_noun, self.deleted_verb
        )
    }
}

pub trait ListedEntity: Keyed + Sized + 'static {
    const TEXT: ListText;
    const CREATE_ROUTE: Route;

    fn load() -> LocalBoxFuture<'static, Result<Vec<Self>, ApiError>>;
    fn remove(id: i64) -> LocalBoxFuture<'static, Result<(), ApiError>>;

    /// Name used in the modal and the toasts.
    fn display_name(&self) -> String;
    /// `<th>` cells, without the actions column.
    fn header() -> Html;
    /// `<td>` cells, without the actions column.
    fn cells(&self) -> Html;
    /// Navigation actions shown before "Eliminar".
    fn links(&self) -> Html;
}

pub enum Msg<E> {
    Load,
    Loaded(Result<Vec<E>, ApiError>),
    AskDelete(i64),
    CloseModal,
    ConfirmDelete,
    Deleted(i64, Result<(), ApiError>),
}

pub struct EntityListPage<E: ListedEntity> {
    rows: DeletableList<E>,
    loading: bool,
    error: Option<String>,
    /// Row the confirmation modal is asking about.
    pending: Option<i64>,
}

impl<E: ListedEntity> Component for EntityListPage<E> {
    type Message = Msg<E>;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(flash) = ctx.link().location().and_then(|l| l.state::<Flash>()) {
            show_flash(&flash);
        }
        ctx.link().send_message(Msg::Load);
        Self {
            rows: DeletableList::default(),
            loading: true,
            error: None,
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                self.error = None;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(E::load().await));
                });
                true
            }
            Msg::Loaded(Ok(rows)) => {
                self.loading = false;
                self.rows.replace(rows);
                true
            }
            Msg::Loaded(Err(_)) => {
                self.loading = false;
                self.error = Some(E::TEXT.load_error.into());
                show_toast(E::TEXT.load_toast, ToastKind::Error);
                true
            }
            Msg::AskDelete(id) => {
                self.pending = Some(id);
                true
            }
            Msg::CloseModal => {
                if self.rows.is_busy() || self.pending.is_none() {
                    return false;
                }
                self.pending = None;
                true
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.pending else {
                    return false;
                };
                if !self.rows.begin(id) {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(id, E::remove(id).await));
                });
                true
            }
            Msg::Deleted(id, Ok(())) => {
                let name = self.rows.get(id).map(E::display_name).unwrap_or_default();
                self.rows.succeed(id);
                self.pending = None;
                show_toast(&E::TEXT.deleted(&name), ToastKind::Success);
                true
            }
            Msg::Deleted(id, Err(e)) => {
                let message = if e.is_not_found() {
                    E::TEXT.not_found.to_string()
                } else {
                    e.user_message("Error al eliminar el registro")
                };
                show_toast(&message, ToastKind::Error);
                self.pending = None;
                if let Some(AfterFailure::Reload) = self.rows.fail(id, message) {
                    ctx.link().send_message(Msg::Load);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text = &E::TEXT;

        if self.loading && self.rows.is_empty() {
            return spinner(None);
        }
        if let (Some(error), true) = (&self.error, self.rows.is_empty()) {
            return error_panel(error, link.callback(|_| Msg::Load));
        }

        let pending_name = self
            .pending
            .and_then(|id| self.rows.get(id))
            .map(E::display_name);
        let deleting = self
            .pending
            .is_some_and(|id| self.rows.state(id) == &DeleteState::Deleting);

        html! {
            <div class="list-page">
                <ConfirmModal
                    open={self.pending.is_some()}
                    title="Confirmar Eliminación"
                    message={text.confirm(pending_name.as_deref())}
                    loading={deleting}
                    on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                    on_close={link.callback(|_| Msg::CloseModal)}
                />

                <div class="page-header">
                    <div>
                        <h1>{ text.title }</h1>
                        <p class="muted">{ text.count(self.rows.len()) }</p>
                    </div>
                    <Link<Route> to={E::CREATE_ROUTE} classes="btn btn-primary">
                        { text.new_label }
                    </Link<Route>>
                </div>

                if self.rows.is_empty() {
                    { empty_state(
                        text.empty_icon,
                        text.empty_title,
                        text.empty_hint,
                        html! {
                            <Link<Route> to={E::CREATE_ROUTE} classes="btn btn-primary">
                                { text.empty_action }
                            </Link<Route>>
                        },
                    ) }
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                { E::header() }
                                <th>{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.rows.visible().map(|row| self.row(link, row)) }
                        </tbody>
                    </table>
                }
            </div>
        }
    }
}

impl<E: ListedEntity> EntityListPage<E> {
    fn row(&self, link: &Scope<Self>, entity: &E) -> Html {
        let id = entity.key();
        html! {
            <tr key={id.to_string()}>
                { entity.cells() }
                <td class="actions">
                    { entity.links() }
                    <button
                        class="btn btn-small btn-danger"
                        disabled={self.rows.is_busy()}
                        onclick={link.callback(move |_| Msg::AskDelete(id))}
                    >
                        {"Eliminar"}
                    </button>
                </td>
            </tr>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn messages_agree_with_the_entity() {
        assert_eq!(TEXT.count(3), "3 alumnos registrados");
        assert_eq!(TEXT.deleted("Ana Ruiz"), "Alumno \"Ana Ruiz\" eliminado exitosamente");
        assert_eq!(
            TEXT.confirm(Some("Ana Ruiz")),
            "¿Estás seguro de eliminar al alumno \"Ana Ruiz\"? Esta acción no se puede deshacer."
        );
        assert_eq!(TEXT.confirm(None), "¿Estás seguro de eliminar este registro?");
    }
}
