use crate::components::layout::navbar::Navbar;
use crate::routes::{switch, Route};
use yew::{html, Component, Context, Html};
use yew_router::{BrowserRouter, Switch};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Navbar />
                <main class="page">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        }
    }
}
