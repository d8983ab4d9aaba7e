use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Top-level sections shown in the navigation bar.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Subjects,
    Students,
    Grades,
}

impl Section {
    fn of(route: &Route) -> Option<Self> {
        match route {
            Route::Subjects | Route::SubjectCreate | Route::SubjectEdit { .. } => {
                Some(Section::Subjects)
            }
            Route::Students | Route::StudentCreate | Route::StudentEdit { .. } => {
                Some(Section::Students)
            }
            Route::Grades | Route::GradeCreate | Route::StudentGrades { .. } => {
                Some(Section::Grades)
            }
            Route::Home | Route::NotFound => None,
        }
    }
}

pub enum Msg {
    LocationChanged,
}

pub struct Navbar {
    _listener: Option<LocationHandle>,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let listener = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));
        Self {
            _listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LocationChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.link().route::<Route>().as_ref().and_then(Section::of);
        html! {
            <header class="navbar">
                <nav class="navbar-inner">
                    { nav_item(Route::Subjects, "Materias", active == Some(Section::Subjects)) }
                    { nav_item(Route::Students, "Alumnos", active == Some(Section::Students)) }
                    { nav_item(Route::Grades, "Notas", active == Some(Section::Grades)) }
                </nav>
            </header>
        }
    }
}

fn nav_item(to: Route, label: &'static str, active: bool) -> Html {
    html! {
        <Link<Route> to={to} classes={classes!("nav-item", active.then_some("active"))}>
            { label }
        </Link<Route>>
    }
}
