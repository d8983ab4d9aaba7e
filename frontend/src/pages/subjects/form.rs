//! `/materias/crear` and `/materias/editar/:id`.
//!
//! The mode is fixed in `create` from the route id. In edit mode the subject is
//! fetched once to pre-fill the draft; if that fails the form falls back to
//! create mode and says so.

use common::error::ApiError;
use common::form::{FormMode, SubjectDraft};
use common::model::subject::{Subject, SubjectPatch};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::feedback::inline_error;
use crate::helpers::{input_value, show_toast, Flash, ToastKind};
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct SubjectFormProps {
    /// Raw `:id` route segment; absent on the create route.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

pub enum Msg {
    Loaded(Result<Subject, ApiError>),
    SetCode(String),
    SetName(String),
    SetCredits(String),
    Submit,
    /// The saved record itself is not needed.
    Saved(Result<(), ApiError>),
}

pub struct SubjectFormPage {
    mode: FormMode,
    draft: SubjectDraft,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl Component for SubjectFormPage {
    type Message = Msg;
    type Properties = SubjectFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mode = FormMode::from_route_id(ctx.props().id.as_deref());
        if let FormMode::Edit(id) = mode {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::subjects::get(id).await));
            });
        }
        Self {
            mode,
            draft: SubjectDraft::default(),
            loading: mode.is_edit(),
            saving: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(subject)) => {
                self.loading = false;
                self.draft = SubjectDraft::from_subject(&subject);
                true
            }
            Msg::Loaded(Err(_)) => {
                self.loading = false;
                self.mode = FormMode::Create;
                self.error = Some("No se pudo cargar la materia para editar".into());
                true
            }
            Msg::SetCode(code) => {
                self.draft.code = code;
                true
            }
            Msg::SetName(name) => {
                self.draft.name = name;
                true
            }
            Msg::SetCredits(credits) => {
                self.draft.credits = credits;
                true
            }
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                self.error = None;
                let subject = match self.draft.validate() {
                    Ok(subject) => subject,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return true;
                    }
                };

                self.saving = true;
                let mode = self.mode;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match mode {
                        FormMode::Create => api::subjects::create(&subject).await.map(|_| ()),
                        FormMode::Edit(id) => {
                            api::subjects::update(id, &SubjectPatch::full(id, subject))
                                .await
                                .map(|_| ())
                        }
                    };
                    link.send_message(Msg::Saved(result));
                });
                true
            }
            Msg::Saved(Ok(_)) => {
                self.saving = false;
                let name = self.draft.name.clone();
                match self.mode {
                    FormMode::Create => {
                        self.draft = SubjectDraft::default();
                        show_toast(
                            &format!("Materia \"{name}\" creada exitosamente"),
                            ToastKind::Success,
                        );
                    }
                    FormMode::Edit(_) => {
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push_with_state(
                                &Route::Subjects,
                                Flash::success(format!("Materia \"{name}\" actualizada exitosamente")),
                            );
                        }
                    }
                }
                true
            }
            Msg::Saved(Err(e)) => {
                self.saving = false;
                let fallback = match self.mode {
                    FormMode::Create => "Error al crear la materia",
                    FormMode::Edit(_) => "Error al actualizar la materia",
                };
                self.error = Some(e.user_message(fallback));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let disabled = self.loading || self.saving;

        html! {
            <div class="form-page">
                <form
                    class="card form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <div class="form-header">
                        <h2>{ self.mode.title("Materia") }</h2>
                        if let FormMode::Edit(id) = self.mode {
                            <span class="badge badge-blue">{ format!("ID: {id}") }</span>
                        }
                    </div>

                    { inline_error(&self.error) }

                    <div class="form-grid">
                        <input
                            type="text"
                            placeholder="Código"
                            value={self.draft.code.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetCode(input_value(&e)))}
                            disabled={disabled}
                        />
                        <input
                            type="text"
                            placeholder="Nombre"
                            value={self.draft.name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                            disabled={disabled}
                        />
                        <input
                            type="number"
                            min="1"
                            placeholder="Créditos"
                            value={self.draft.credits.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetCredits(input_value(&e)))}
                            disabled={disabled}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={disabled}>
                        { self.mode.submit_label("Materia", self.saving) }
                    </button>

                    <p class="muted form-hint">
                        { if self.mode.is_edit() {
                            "Modo edición: modifica los campos y haz clic en \"Actualizar\""
                        } else {
                            "Modo creación: completa los campos y haz clic en \"Crear\""
                        } }
                    </p>
                </form>
                <Link<Route> to={Route::Subjects}>{"← Volver a Materias"}</Link<Route>>
            </div>
        }
    }
}
