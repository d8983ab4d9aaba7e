//! Confirmation dialog built on the native `<dialog>` element.
//!
//! The parent owns the open/closed state through props; after each render the
//! component syncs the element with `showModal()` / `close()`. Buttons are
//! disabled while `loading` so a delete cannot be confirmed twice.

use web_sys::HtmlDialogElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub loading: bool,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

pub struct ConfirmModal {
    dialog_ref: NodeRef,
}

impl Component for ConfirmModal {
    type Message = ();
    type Properties = ConfirmModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialog_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let loading = props.loading;

        let on_cancel = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_confirm = {
            let on_confirm = props.on_confirm.clone();
            Callback::from(move |_: MouseEvent| on_confirm.emit(()))
        };
        // Escape key closes the dialog natively; keep the parent in sync.
        let on_native_close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: Event| on_close.emit(()))
        };

        html! {
            <dialog class="modal" ref={self.dialog_ref.clone()} onclose={on_native_close}>
                <div class="modal-body">
                    <div class="modal-heading">
                        <span class="icon-warning">{"⚠"}</span>
                        <div>
                            <h3>{ props.title.clone() }</h3>
                            <p class="modal-message">{ props.message.clone() }</p>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={loading}>
                            {"Cancelar"}
                        </button>
                        <button type="button" class="btn btn-danger" onclick={on_confirm} disabled={loading}>
                            { if loading { "Eliminando..." } else { "Eliminar" } }
                        </button>
                    </div>
                </div>
            </dialog>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(dialog) = self.dialog_ref.cast::<HtmlDialogElement>() {
            match (ctx.props().open, dialog.open()) {
                (true, false) => {
                    dialog.show_modal().ok();
                }
                (false, true) => dialog.close(),
                _ => {}
            }
        }
    }
}
