use actix_multipart::form::MultipartForm;
use actix_web::{
    get,
    http::header::ContentType,
    post,
    web::{self, Data},
    HttpResponse, Scope,
};

use crate::{
    api::{form::TransferForm, render::render_page, state::State},
    app::error::FilterCopyError,
};

fn html_page(result: Option<&str>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(result))
}

#[get("/")]
pub async fn index() -> HttpResponse {
    html_page(None)
}

// Failures are rendered in the page; the status is always 200.
#[post("/")]
pub async fn submit(
    state: Data<State>,
    form: Result<MultipartForm<TransferForm>, actix_web::Error>,
) -> HttpResponse {
    let result = match form {
        Ok(form) => {
            state
                .filter_copy_server
                .copy_filters(form.into_inner().into())
                .await
        }
        Err(e) => Err(FilterCopyError::MalformedInput(e.to_string())),
    };
    let message = match result {
        Ok(report) => report.log(),
        Err(e) => {
            log::warn!("filter copy failed: {}", e);
            e.user_message()
        }
    };
    html_page(Some(&message))
}

pub fn filter_copy_scope() -> Scope {
    web::scope("").service(index).service(submit)
}
