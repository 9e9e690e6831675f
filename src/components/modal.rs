use gloo_timers::callback::Timeout;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::MODAL_BACKDROP_ARM_MS;

/// Locks or releases page scrolling behind an open modal.
fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.set_property("overflow", "auto")
    };
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub visible: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub close_on_escape: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Backdrop clicks only count shortly after opening, so the click that
    // opened the modal cannot close it again.
    let armed = use_state(|| false);

    {
        let armed = armed.clone();
        use_effect_with_deps(
            move |visible| {
                lock_body_scroll(*visible);
                let timeout = if *visible {
                    Some(Timeout::new(MODAL_BACKDROP_ARM_MS, move || armed.set(true)))
                } else {
                    armed.set(false);
                    None
                };
                move || drop(timeout)
            },
            props.visible,
        );
    }

    {
        let on_close = props.on_close.clone();
        let active = props.visible && props.close_on_escape;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if active && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let armed = *armed;
        Callback::from(move |e: MouseEvent| {
            if armed && e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id={props.id.clone()} class={classes!("modal", (!props.visible).then(|| "hidden"))} onclick={on_backdrop}>
            <div class="modal-content" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Close" onclick={on_close_button}>{"✕"}</button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
