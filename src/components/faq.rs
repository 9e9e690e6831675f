use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::FAQ_RESIZE_DEBOUNCE_MS;
use crate::content::FAQS;

/// At most one answer is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    resize_tick: i32,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    {
        let answer_ref = answer_ref.clone();
        use_effect_with_deps(
            move |(is_open, _)| {
                if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                    let style = answer.style();
                    if *is_open {
                        let _ = style.set_property("display", "block");
                        let _ = style.set_property("max-height", &format!("{}px", answer.scroll_height()));
                        let _ = style.set_property("padding", "0 var(--space-16) var(--space-16)");
                    } else {
                        let _ = style.set_property("max-height", "0");
                        let _ = style.set_property("padding", "0 var(--space-16)");
                    }
                }
                || ()
            },
            (props.is_open, props.resize_tick),
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);
    let resize_tick = use_counter(0);

    // Open answers follow their content height when the window changes size.
    let remeasure = {
        let resize_tick = resize_tick.clone();
        use_debounce(move || resize_tick.increase(), FAQ_RESIZE_DEBOUNCE_MS)
    };
    use_event_with_window("resize", move |_: Event| remeasure.run());

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, item)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                    };
                    html! {
                        <FaqItem
                            question={item.question}
                            answer={item.answer}
                            is_open={accordion.is_open(index)}
                            resize_tick={*resize_tick}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
