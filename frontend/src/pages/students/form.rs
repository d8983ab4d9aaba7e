//! `/alumnos/crear` and `/alumnos/editar/:id`.

use common::error::ApiError;
use common::form::{FormMode, StudentDraft};
use common::model::student::{Student, StudentPatch};
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::feedback::inline_error;
use crate::helpers::{input_value, show_toast, Flash, ToastKind};
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentFormProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[derive(Clone, Copy)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    BirthDate,
}

pub enum Msg {
    Loaded(Result<Student, ApiError>),
    Set(Field, String),
    Submit,
    /// The saved record itself is not needed.
    Saved(Result<(), ApiError>),
}

pub struct StudentFormPage {
    mode: FormMode,
    draft: StudentDraft,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

impl Component for StudentFormPage {
    type Message = Msg;
    type Properties = StudentFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mode = FormMode::from_route_id(ctx.props().id.as_deref());
        if let FormMode::Edit(id) = mode {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::students::get(id).await));
            });
        }
        Self {
            mode,
            draft: StudentDraft::default(),
            loading: mode.is_edit(),
            saving: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(student)) => {
                self.loading = false;
                self.draft = StudentDraft::from_student(&student);
                log!(format!("Alumno {} cargado para edición", student.id));
                true
            }
            Msg::Loaded(Err(_)) => {
                self.loading = false;
                self.mode = FormMode::Create;
                self.error = Some("No se pudo cargar el alumno para editar".into());
                true
            }
            Msg::Set(field, value) => {
                let slot = match field {
                    Field::FirstName => &mut self.draft.first_name,
                    Field::LastName => &mut self.draft.last_name,
                    Field::Email => &mut self.draft.email,
                    Field::BirthDate => &mut self.draft.birth_date,
                };
                *slot = value;
                true
            }
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                self.error = None;
                let student = match self.draft.validate() {
                    Ok(student) => student,
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
                        FormMode::Create => api::students::create(&student).await.map(|_| ()),
                        FormMode::Edit(id) => {
                            api::students::update(id, &StudentPatch::full(id, student))
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
                let full_name = format!("{} {}", self.draft.first_name, self.draft.last_name);
                match self.mode {
                    FormMode::Create => {
                        self.draft = StudentDraft::default();
                        show_toast(
                            &format!("Alumno \"{full_name}\" creado exitosamente"),
                            ToastKind::Success,
                        );
                    }
                    FormMode::Edit(_) => {
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push_with_state(
                                &Route::Students,
                                Flash::success(format!(
                                    "Alumno \"{full_name}\" actualizado exitosamente"
                                )),
                            );
                        }
                    }
                }
                true
            }
            Msg::Saved(Err(e)) => {
                self.saving = false;
                let fallback = match self.mode {
                    FormMode::Create => "Error al crear el alumno",
                    FormMode::Edit(_) => "Error al actualizar el alumno",
                };
                self.error = Some(e.user_message(fallback));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let disabled = self.loading || self.saving;
        let field = |f: Field| link.callback(move |e: InputEvent| Msg::Set(f, input_value(&e)));

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
                        <h2>{ self.mode.title("Alumno") }</h2>
                        if let FormMode::Edit(id) = self.mode {
                            <span class="badge badge-blue">{ format!("ID: {id}") }</span>
                        }
                    </div>

                    { inline_error(&self.error) }

                    <div class="form-grid">
                        <input
                            type="text"
                            placeholder="Nombre"
                            value={self.draft.first_name.clone()}
                            oninput={field(Field::FirstName)}
                            disabled={disabled}
                        />
                        <input
                            type="text"
                            placeholder="Apellido"
                            value={self.draft.last_name.clone()}
                            oninput={field(Field::LastName)}
                            disabled={disabled}
                        />
                        <input
                            type="email"
                            class="span-2"
                            placeholder="Correo"
                            value={self.draft.email.clone()}
                            oninput={field(Field::Email)}
                            disabled={disabled}
                        />
                        <input
                            type="date"
                            value={self.draft.birth_date.clone()}
                            oninput={field(Field::BirthDate)}
                            disabled={disabled}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={disabled}>
                        { self.mode.submit_label("Alumno", self.saving) }
                    </button>

                    <p class="muted form-hint">
                        { if self.mode.is_edit() {
                            "Modo edición: modifica los campos y haz clic en \"Actualizar\""
                        } else {
                            "Modo creación: completa los campos y haz clic en \"Crear\""
                        } }
                    </p>
                </form>
                <Link<Route> to={Route::Students}>{"← Volver a Alumnos"}</Link<Route>>
            </div>
        }
    }
}
