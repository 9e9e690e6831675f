use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::FALLBACK_CONTACT_EMAIL;
use crate::Route;

/// Terms body, shared by the terms modal and the standalone page.
#[function_component(TermsContent)]
pub fn terms_content() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h2>{"Terms and Conditions"}</h2>

            <section>
                <h3>{"1. Enrollment"}</h3>
                <p>{"Sending the contact form does not enroll you in a cohort. We reply with cohort dates and a payment link; your seat is reserved once payment is received."}</p>
            </section>

            <section>
                <h3>{"2. Payments and Refunds"}</h3>
                <ul>
                    <li>{"Prices are listed per plan on this page and are charged once per cohort."}</li>
                    <li>{"You can ask for a full refund within the first two weeks of your cohort."}</li>
                    <li>{"Self-paced material stays available to you after the cohort ends."}</li>
                </ul>
            </section>

            <section>
                <h3>{"3. Course Material"}</h3>
                <p>{"Lessons, recordings and starter repositories are for your personal use. Code you write during the course is yours."}</p>
            </section>

            <section>
                <h3>{"4. Your Data"}</h3>
                <p>{"We use the name, email, phone number and message you send us only to answer your request and to organise your cohort. We do not sell it. Ask us at any time to delete it."}</p>
            </section>

            <section>
                <h3>{"5. Changes"}</h3>
                <p>{"We may update these terms. Changes apply to cohorts starting after the update."}</p>
            </section>

            <section>
                <h3>{"6. Contact"}</h3>
                <p>
                    {"Questions about these terms? Write to "}
                    <a href={format!("mailto:{}", FALLBACK_CONTACT_EMAIL)}>{ FALLBACK_CONTACT_EMAIL }</a>
                </p>
            </section>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <TermsContent />
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to the course"}</Link<Route>>
            </div>
        </div>
    }
}
