use gloo_net::http::Request;
use log::info;
use web_sys::FormData;

use super::submission::{interpret_response, SubmissionError, SubmissionResult};
use crate::config;

fn to_form_data(entries: &[(&'static str, String)]) -> Result<FormData, SubmissionError> {
    let form_data = FormData::new()
        .map_err(|e| SubmissionError::Network(format!("Could not build form data: {:?}", e)))?;
    for (name, value) in entries {
        form_data
            .append_with_str(name, value)
            .map_err(|e| SubmissionError::Network(format!("Could not add {}: {:?}", name, e)))?;
    }
    Ok(form_data)
}

/// Posts the fields as multipart form data to the collector.
pub async fn post_contact_form(entries: Vec<(&'static str, String)>) -> SubmissionResult {
    let form_data = to_form_data(&entries)?;
    info!("Posting contact form to {}", config::get_collector_url());

    let response = Request::post(config::get_collector_url())
        .body(form_data)
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let ok = response.ok();
    // An unreadable body is handled like an empty one.
    let body = response.text().await.unwrap_or_default();
    if !ok {
        info!("Collector answered with status {}", response.status());
    }
    interpret_response(ok, &body)
}
