//! Loading, error and empty-state blocks reused by every page.

use yew::prelude::*;

pub fn spinner(caption: Option<&str>) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            if let Some(caption) = caption {
                <p class="muted">{ caption }</p>
            }
        </div>
    }
}

/// Error panel with a retry button.
pub fn error_panel(message: &str, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="panel panel-error">
            <div class="panel-heading">
                <span class="icon-warning">{"⚠"}</span>
                <div>
                    <h3>{"Error"}</h3>
                    <p>{ message }</p>
                </div>
            </div>
            <button class="btn btn-danger" onclick={on_retry}>{"Reintentar"}</button>
        </div>
    }
}

pub fn empty_state(icon: &str, title: &str, hint: &str, action: Html) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-icon">{ icon }</div>
            <h3>{ title }</h3>
            <p class="muted">{ hint }</p>
            { action }
        </div>
    }
}

pub fn inline_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <p class="form-error">{ message }</p> },
        None => html! {},
    }
}
