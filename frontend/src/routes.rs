use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::grades::create::GradeCreatePage;
use crate::pages::grades::list::GradesPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::student_detail::StudentDetailPage;
use crate::pages::students::form::StudentFormPage;
use crate::pages::students::list::StudentsPage;
use crate::pages::subjects::form::SubjectFormPage;
use crate::pages::subjects::list::SubjectsPage;

/// Client-side routes. Edit and detail ids stay strings here; each page
/// decides what an unparseable id means.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/materias")]
    Subjects,
    #[at("/materias/crear")]
    SubjectCreate,
    #[at("/materias/editar/:id")]
    SubjectEdit { id: String },
    #[at("/alumnos")]
    Students,
    #[at("/alumnos/crear")]
    StudentCreate,
    #[at("/alumnos/editar/:id")]
    StudentEdit { id: String },
    #[at("/notas")]
    Grades,
    #[at("/notas/crear")]
    GradeCreate,
    #[at("/notas/alumno/:id")]
    StudentGrades { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Subjects} /> },
        Route::Subjects => html! { <SubjectsPage /> },
        Route::SubjectCreate => html! { <SubjectFormPage /> },
        Route::SubjectEdit { id } => html! { <SubjectFormPage id={Some(AttrValue::from(id))} /> },
        Route::Students => html! { <StudentsPage /> },
        Route::StudentCreate => html! { <StudentFormPage /> },
        Route::StudentEdit { id } => html! { <StudentFormPage id={Some(AttrValue::from(id))} /> },
        Route::Grades => html! { <GradesPage /> },
        Route::GradeCreate => html! { <GradeCreatePage /> },
        Route::StudentGrades { id } => html! { <StudentDetailPage id={AttrValue::from(id)} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
