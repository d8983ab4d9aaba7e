//! `/notas/alumno/:id`: one student with their subjects, grades and averages.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod view;

use crate::api;
pub use messages::Msg;
pub use state::StudentDetailPage;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Raw route segment; validated on load.
    pub id: AttrValue,
}

impl Component for StudentDetailPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        StudentDetailPage::default()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.error = None;
                let Ok(id) = ctx.props().id.parse::<i64>() else {
                    self.loading = false;
                    self.detail = None;
                    self.error = Some("ID inválido".into());
                    return true;
                };
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api::students::detail(id).await));
                });
                true
            }
            Msg::Loaded(Ok(detail)) => {
                self.loading = false;
                self.set_detail(detail);
                true
            }
            Msg::Loaded(Err(e)) => {
                self.loading = false;
                self.detail = None;
                self.error = Some(if e.is_not_found() {
                    "Alumno no encontrado".to_string()
                } else {
                    e.user_message("Error al cargar los datos del alumno")
                });
                true
            }
            Msg::AddGrade(subject_id) => {
                self.add_grade(ctx, subject_id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
