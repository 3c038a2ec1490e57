//! Contact form handlers.
//!
//! - `GET /contact` shows an empty form.
//! - `POST /contact` stores a valid submission and redirects to `/` with
//!   a success notice, or re-renders the form with field errors.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;

use super::render::{page_response, render_page};
use crate::flash::Flash;
use crate::forms::{ContactForm, FormErrors};
use crate::services::contact::SUCCESS_MESSAGE;
use crate::services::Submission;
use crate::state::AppState;

/// Where a successful submission sends the visitor.
const SUCCESS_URL: &str = "/";

/// Show the contact form.
///
/// `GET /contact`
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let result = render_page(
        &state,
        &headers,
        "contact.html",
        context! { form => ContactForm::default(), errors => FormErrors::default() },
    );
    page_response(&state, &headers, result)
}

/// Handle a contact form submission.
///
/// `POST /contact` (`application/x-www-form-urlencoded`: `name`, `email`, `message`)
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    match state.contact.submit(&form).await {
        Ok(Submission::Accepted(_)) => {
            let mut response = Redirect::to(SUCCESS_URL).into_response();
            response
                .headers_mut()
                .insert(SET_COOKIE, Flash::success(SUCCESS_MESSAGE).set_cookie());
            response
        }
        Ok(Submission::Rejected(errors)) => {
            let result = render_page(
                &state,
                &headers,
                "contact.html",
                context! { form => &form, errors => &errors },
            );
            page_response(&state, &headers, result)
        }
        Err(e) => e.into_response(),
    }
}
