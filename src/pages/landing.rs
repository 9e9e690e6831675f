use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::components::faq::Faq;
use crate::components::modal::Modal;
use crate::components::pricing::Pricing;
use crate::contact::form::ContactForm;
use crate::content::{FEATURES, PROBLEMS, TESTIMONIALS, WEEKS};
use crate::hooks::use_page_analytics::use_page_analytics;
use crate::hooks::use_scroll_reveal::use_scroll_reveal;
use crate::scroll::{anchor_target, scroll_to_section};
use crate::session::{PageSession, SessionAction};
use crate::termsprivacy::TermsContent;

#[function_component(Landing)]
pub fn landing() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_else(Analytics::console);
    let session = use_reducer(PageSession::default);
    let success_open = use_state(|| false);
    let terms_open = use_state(|| false);

    use_page_analytics(analytics.clone(), &session);
    use_scroll_reveal(analytics.clone());

    // In-page links scroll smoothly instead of jumping.
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(anchor) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        e.prevent_default();
        if let Some(section_id) = anchor_target(&href) {
            scroll_to_section(section_id);
        }
    });

    let open_contact_form = {
        let session = session.clone();
        let analytics = analytics.clone();
        Callback::from(move |plan: String| {
            session.dispatch(SessionAction::OpenContactForm(plan.clone()));
            scroll_to_section("contact");
            analytics.track(
                AnalyticsEvent::new("contact_form_opened")
                    .with("plan", plan)
                    .with("source", "pricing_button"),
            );
        })
    };

    let on_success = {
        let session = session.clone();
        let analytics = analytics.clone();
        let success_open = success_open.clone();
        Callback::from(move |_: ()| {
            success_open.set(true);
            analytics.track(
                AnalyticsEvent::new("form_success_modal_shown").with("plan", session.selected_plan.clone()),
            );
            session.dispatch(SessionAction::ClearPlan);
        })
    };

    let close_success = {
        let analytics = analytics.clone();
        let success_open = success_open.clone();
        Callback::from(move |_: ()| {
            if *success_open {
                success_open.set(false);
                analytics.track(AnalyticsEvent::new("form_success_modal_closed"));
            }
        })
    };

    let on_started = {
        let session = session.clone();
        Callback::from(move |started: bool| session.dispatch(SessionAction::FormStarted(started)))
    };

    let open_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |_: ()| terms_open.set(true))
    };
    let close_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |_: ()| terms_open.set(false))
    };
    let open_terms_link = {
        let open_terms = open_terms.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_terms.emit(());
        })
    };

    let close_success_button = {
        let close_success = close_success.clone();
        Callback::from(move |_: MouseEvent| close_success.emit(()))
    };

    let join_cohort = Callback::from(|_: MouseEvent| scroll_to_section("pricing"));

    html! {
        <div class="landing-page">
            <section id="hero" class="hero">
                <div class="hero-content">
                    <h1>{"Learn Python web development in 8 weeks"}</h1>
                    <p class="hero-subtitle">
                        {"A small live cohort, weekly code review and four shipped projects. Stop watching tutorials and start deploying."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="btn btn--primary cta-primary" onclick={join_cohort.clone()}>
                            {"Join the Next Cohort"}
                        </button>
                        <a href="#curriculum" class="btn btn--outline">{"See the curriculum"}</a>
                    </div>
                </div>
            </section>

            <section id="problem" class="problem-section">
                <h2>{"Sound familiar?"}</h2>
                <div class="problem-grid">
                    { for PROBLEMS.iter().map(|problem| html! {
                        <div class="problem-card">
                            <h3>{ problem.title }</h3>
                            <p>{ problem.body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="curriculum" class="curriculum-section">
                <h2>{"The curriculum"}</h2>
                <div class="week-grid">
                    { for WEEKS.iter().map(|week| html! {
                        <div class="week-card">
                            <span class="week-number">{ format!("Week {}", week.number) }</span>
                            <h3>{ week.title }</h3>
                            <p>{ week.summary }</p>
                        </div>
                    }) }
                </div>
                <div class="feature-list">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature">
                            <span class="feature-icon">{ feature.icon }</span>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <Pricing analytics={analytics.clone()} on_choose={open_contact_form} />

            <section id="testimonials" class="testimonials-section">
                <h2>{"From past cohorts"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="testimonial-card">
                            <p>{ t.quote }</p>
                            <footer>
                                <strong>{ t.author }</strong>
                                <span>{ format!(", {}", t.role) }</span>
                            </footer>
                        </blockquote>
                    }) }
                </div>
                <button class="btn btn--primary cta-primary" onclick={join_cohort.clone()}>
                    {"Join the Cohort"}
                </button>
            </section>

            <Faq />

            <section id="contact" class="contact-section">
                <h2>{"Questions? Talk to us"}</h2>
                <p>{"Tell us a bit about yourself and we will get back to you with the next cohort dates."}</p>
                <ContactForm
                    analytics={analytics.clone()}
                    selected_plan={session.selected_plan.clone()}
                    plan_request={session.plan_request.clone()}
                    {on_success}
                    {on_started}
                    on_open_terms={open_terms}
                />
            </section>

            <footer class="site-footer">
                <p>{"© Python Web Course"}</p>
                <a href="/terms" onclick={open_terms_link}>{"Terms & Conditions"}</a>
            </footer>

            <Modal id="successModal" visible={*success_open} on_close={close_success} close_on_escape={true}>
                <div class="success-icon">{"✓"}</div>
                <h2>{"Message sent!"}</h2>
                <p>{"Thanks for reaching out. We will reply within one business day with the next cohort dates."}</p>
                <button class="btn btn--primary" onclick={close_success_button}>
                    {"Back to the page"}
                </button>
            </Modal>

            <Modal id="termsModal" visible={*terms_open} on_close={close_terms}>
                <TermsContent />
            </Modal>

            <style>
                {r#"
                .hidden { display: none !important; }
                .modal {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.55);
                    z-index: 1000;
                }
                .modal-content {
                    position: relative;
                    max-width: 560px;
                    max-height: 85vh;
                    overflow-y: auto;
                    padding: 2rem;
                    border-radius: 12px;
                    background: var(--color-surface, #fff);
                }
                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    border: none;
                    background: none;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .form-control.error { border-color: var(--color-error, #c0152f); }
                .field-error {
                    color: var(--color-error, #c0152f);
                    font-size: var(--font-size-sm, 0.85rem);
                    margin-top: var(--space-4, 4px);
                }
                .form-error {
                    color: var(--color-error, #c0152f);
                    padding: var(--space-12, 12px);
                    margin-bottom: var(--space-16, 16px);
                    border: 1px solid var(--color-error, #c0152f);
                    border-radius: var(--radius-base, 8px);
                }
                .btn.loading { opacity: 0.7; cursor: progress; }
                .week-card, .pricing-card, .testimonial-card, .problem-card, .feature {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </div>
    }
}
