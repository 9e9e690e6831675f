use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::client::post_contact_form;
use super::fields::{FieldControl, FieldSpec};
use super::submission::{Outcome, SubmissionController, SubmissionResult, SubmitAttempt};
use crate::analytics::engagement::FieldTimer;
use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::{FALLBACK_CONTACT_EMAIL, FOCUS_FIELD_DELAY_MS};
use crate::session::PlanRequest;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub analytics: Analytics,
    pub selected_plan: String,
    #[prop_or_default]
    pub plan_request: Option<PlanRequest>,
    pub on_success: Callback<()>,
    pub on_started: Callback<bool>,
    pub on_open_terms: Callback<()>,
}

pub enum ContactMsg {
    Input(&'static str, String),
    Focus(&'static str),
    Blur(&'static str),
    Submit,
    Finished(SubmissionResult),
    DismissError,
}

pub struct ContactForm {
    controller: SubmissionController,
    timers: HashMap<&'static str, FieldTimer>,
    started: bool,
    first_input: NodeRef,
    selects: HashMap<&'static str, NodeRef>,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let controller = SubmissionController::default();
        let selects = controller
            .form()
            .specs()
            .iter()
            .filter(|spec| matches!(spec.control, FieldControl::Select(_)))
            .map(|spec| (spec.name, NodeRef::default()))
            .collect();
        let mut form = Self {
            controller,
            timers: HashMap::new(),
            started: false,
            first_input: NodeRef::default(),
            selects,
        };
        if let Some(request) = &ctx.props().plan_request {
            form.apply_plan(ctx, request);
        }
        form
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().plan_request != old_props.plan_request {
            if let Some(request) = &ctx.props().plan_request {
                self.apply_plan(ctx, request);
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(name, value) => {
                self.controller.form_mut().input(name, value);
                self.report_progress(ctx);
                true
            }
            ContactMsg::Focus(name) => {
                self.timers.entry(name).or_default().start(now_ms());
                let field_type = spec_type(self.controller.form().specs(), name);
                ctx.props().analytics.track(
                    AnalyticsEvent::new("form_field_focused")
                        .with("field_name", name)
                        .with("field_type", field_type),
                );
                false
            }
            ContactMsg::Blur(name) => {
                self.controller.form_mut().blur(name);
                if let Some(elapsed) = self.timers.get(name).and_then(|t| t.elapsed(now_ms())) {
                    let has_value = !self.controller.form().value(name).is_empty();
                    ctx.props().analytics.track(
                        AnalyticsEvent::new("form_field_completed")
                            .with("field_name", name)
                            .with("time_spent_ms", elapsed)
                            .with("has_value", has_value),
                    );
                }
                true
            }
            ContactMsg::Submit => match self.controller.begin(&ctx.props().selected_plan) {
                SubmitAttempt::Busy => {
                    debug!("Submit ignored, a request is already in flight");
                    false
                }
                SubmitAttempt::Invalid(annotations) => {
                    debug!("Contact form has {} invalid field(s)", annotations.len());
                    true
                }
                SubmitAttempt::Send(entries) => {
                    ctx.link().send_future(async move {
                        ContactMsg::Finished(post_contact_form(entries).await)
                    });
                    true
                }
            },
            ContactMsg::Finished(result) => {
                let outcome = self.controller.finish(result, &ctx.props().analytics);
                if outcome == Some(Outcome::Succeeded) {
                    ctx.props().on_success.emit(());
                    self.report_progress(ctx);
                }
                true
            }
            ContactMsg::DismissError => {
                self.controller.dismiss_error();
                true
            }
        }
    }

    // A select the user has touched ignores later `selected` attributes, so
    // its value is pushed from the form state after every render.
    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        for (name, node_ref) in &self.selects {
            if let Some(select) = node_ref.cast::<HtmlSelectElement>() {
                let value = self.controller.form().value(name);
                if select.value() != value {
                    select.set_value(value);
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let trigger = self.controller.trigger();
        let open_terms = {
            let on_open_terms = ctx.props().on_open_terms.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_open_terms.emit(());
            })
        };

        html! {
            <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
                if let Some(notice) = self.controller.form_error() {
                    <div class="form-error" role="alert">
                        { notice }
                        {" "}
                        <a href={format!("mailto:{}", FALLBACK_CONTACT_EMAIL)}>{"Write to us"}</a>
                        <button type="button" class="form-error-close"
                            onclick={ctx.link().callback(|_| ContactMsg::DismissError)}>
                            { "✕" }
                        </button>
                    </div>
                }
                { for self.controller.form().specs().iter().map(|spec| self.render_field(ctx, spec)) }
                <p class="form-terms">
                    {"By sending this form you agree to our "}
                    <a href="/terms" onclick={open_terms}>{"terms"}</a>
                    {"."}
                </p>
                <button
                    type="submit"
                    class={classes!("btn", "btn--primary", "btn--full-width", trigger.loading.then(|| "loading"))}
                    disabled={trigger.disabled}
                >
                    { trigger.label }
                </button>
            </form>
        }
    }
}

impl ContactForm {
    fn apply_plan(&mut self, ctx: &Context<Self>, request: &PlanRequest) {
        self.controller.form_mut().prefill_for_plan(&request.plan);
        self.report_progress(ctx);

        let first_input = self.first_input.clone();
        spawn_local(async move {
            TimeoutFuture::new(FOCUS_FIELD_DELAY_MS).await;
            if let Some(input) = first_input.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        });
    }

    fn report_progress(&mut self, ctx: &Context<Self>) {
        let started = self.controller.form().is_started();
        if started != self.started {
            self.started = started;
            ctx.props().on_started.emit(started);
        }
    }

    fn render_field(&self, ctx: &Context<Self>, spec: &'static FieldSpec) -> Html {
        let name = spec.name;
        let field = self.controller.form().field(name).cloned().unwrap_or_default();
        let class = classes!("form-control", field.has_error().then(|| "error"));
        let onfocus = ctx.link().callback(move |_: FocusEvent| ContactMsg::Focus(name));
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactMsg::Blur(name));

        let control = match spec.control {
            FieldControl::Input(kind) => {
                let node_ref = if self.is_first_input(spec) {
                    self.first_input.clone()
                } else {
                    NodeRef::default()
                };
                html! {
                    <input
                        ref={node_ref}
                        type={kind}
                        id={name}
                        {name}
                        {class}
                        placeholder={spec.placeholder}
                        required={spec.required}
                        value={field.value.clone()}
                        oninput={ctx.link().callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactMsg::Input(name, input.value())
                        })}
                        {onfocus}
                        {onblur}
                    />
                }
            }
            FieldControl::Select(options) => html! {
                <select
                    ref={self.selects.get(name).cloned().unwrap_or_default()}
                    id={name}
                    {name}
                    {class}
                    required={spec.required}
                    onchange={ctx.link().callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        ContactMsg::Input(name, select.value())
                    })}
                    {onfocus}
                    {onblur}
                >
                    { for options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={field.value == *value}>{ *label }</option>
                    }) }
                </select>
            },
            FieldControl::TextArea => html! {
                <textarea
                    id={name}
                    {name}
                    {class}
                    rows="4"
                    placeholder={spec.placeholder}
                    required={spec.required}
                    value={field.value.clone()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactMsg::Input(name, area.value())
                    })}
                    {onfocus}
                    {onblur}
                />
            },
        };

        html! {
            <div class="form-group">
                <label class="form-label" for={name}>{ spec.label }</label>
                { control }
                if let Some(message) = field.error {
                    <div class="field-error">{ message }</div>
                }
            </div>
        }
    }

    fn is_first_input(&self, spec: &FieldSpec) -> bool {
        self.controller
            .form()
            .specs()
            .iter()
            .find(|s| matches!(s.control, FieldControl::Input(_)))
            .map(|s| s.name == spec.name)
            .unwrap_or(false)
    }
}

fn spec_type(specs: &[FieldSpec], name: &str) -> &'static str {
    specs
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.control.type_name())
        .unwrap_or("text")
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}
