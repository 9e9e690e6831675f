use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::content::{Plan, PLANS};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub analytics: Analytics,
    /// Called with the plan name when its button is pressed.
    pub on_choose: Callback<String>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <h2>{"Choose your track"}</h2>
            <div class="pricing-grid">
                { for PLANS.iter().enumerate().map(|(index, plan)| render_card(props, index, plan)) }
            </div>
        </section>
    }
}

fn render_card(props: &PricingProps, index: usize, plan: &'static Plan) -> Html {
    let onmouseenter = {
        let analytics = props.analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track(
                AnalyticsEvent::new("pricing_card_hover")
                    .with("plan", plan.name)
                    .with("position", index + 1),
            );
        })
    };

    let onclick = {
        let analytics = props.analytics.clone();
        let on_choose = props.on_choose.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            analytics.track(AnalyticsEvent::new("plan_selected").with("plan", plan.name));
            on_choose.emit(plan.name.to_string());
        })
    };

    html! {
        <div class={classes!("pricing-card", plan.featured.then(|| "featured"))} {onmouseenter}>
            <h3>{ plan.name }</h3>
            <div class="price">
                <span class="amount">{ plan.price }</span>
                <span class="period">{ format!(" {}", plan.cadence) }</span>
            </div>
            <ul>
                { for plan.perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
            </ul>
            <button class={classes!("btn", if plan.featured { "btn--primary" } else { "btn--outline" })} {onclick}>
                { format!("Choose {}", plan.name) }
            </button>
        </div>
    }
}
