use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="panel">
                <h2>{"Página no encontrada"}</h2>
                <Link<Route> to={Route::Subjects}>{"Volver a Materias"}</Link<Route>>
            </div>
        }
    }
}
