//! Grade creation form (`/notas/crear`).
//!
//! On mount it fetches subjects and students concurrently and renders nothing
//! but a spinner until both lists are in. Each list gets a search box that
//! narrows its picker. `?materiaId=` / `?alumnoId=` query parameters (used by
//! the student detail page) preselect the pickers.
//!
//! Split like the other larger components: `messages`, `state`, `update`, `view`.

use common::form::GradePrefill;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use crate::api;
pub use messages::Msg;
pub use state::GradeCreatePage;

impl Component for GradeCreatePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let prefill = ctx
            .link()
            .location()
            .and_then(|l| l.query::<GradePrefill>().ok())
            .unwrap_or_default();

        let link = ctx.link().clone();
        spawn_local(async move {
            let (subjects, students) =
                futures::join!(api::subjects::list(), api::students::list());
            let loaded = subjects.and_then(|subjects| students.map(|students| (subjects, students)));
            link.send_message(Msg::DataLoaded(loaded));
        });

        let mut page = GradeCreatePage::new();
        page.draft = prefill.into_draft();
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
