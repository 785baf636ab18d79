//! The upload page and its submit action.

use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error, info};

use arxready_common::DroppedFile;

use crate::dropzone::Dropzone;
use crate::state::{AppState, SharedState};

/// Form field the upload arrives in.
pub const FILE_FIELD: &str = "file";

/// Requests carrying `X-Requested-With: fetch` get only the widget back.
pub const FRAGMENT_HEADER: &str = "x-requested-with";
pub const FRAGMENT_VALUE: &str = "fetch";

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Initial upload view. "Submit Another Paper" lands here too.
pub async fn index(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    render(&state, &Dropzone::new(), wants_fragment(&headers), StatusCode::OK)
}

/// Run one submission: select the uploaded file, send it if accepted, show the outcome.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let fragment = wants_fragment(&headers);
    let mut dropzone = Dropzone::new();

    let files = match read_files(multipart).await {
        Ok(files) => files,
        Err(e) => {
            let status = e.status();
            dropzone.finish(Err(e.body_text()));
            return render(&state, &dropzone, fragment, status);
        }
    };

    if let Err(rejection) = dropzone.on_drop(files) {
        info!("Upload rejected: {rejection}");
    }

    let outcome = match dropzone.begin_submit() {
        Some(paper) => {
            info!(file = %paper.name, kind = %paper.kind, bytes = paper.len(), "Evaluating paper");
            state.evaluator.evaluate(paper).await
        }
        None => {
            debug!("Submit without an accepted file; no request sent");
            return render(&state, &dropzone, fragment, StatusCode::OK);
        }
    };

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::BAD_GATEWAY,
    };
    dropzone.finish(outcome);
    render(&state, &dropzone, fragment, status)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn read_files(
    mut multipart: Multipart,
) -> Result<Vec<DroppedFile>, axum::extract::multipart::MultipartError> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        files.push(DroppedFile::new(name, content_type.as_deref(), bytes.to_vec()));
    }
    Ok(files)
}

fn wants_fragment(headers: &HeaderMap) -> bool {
    headers
        .get(FRAGMENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case(FRAGMENT_VALUE))
}

fn render(state: &AppState, dropzone: &Dropzone, fragment: bool, status: StatusCode) -> Response {
    let view = dropzone.view();
    let rendered = if fragment {
        state.templates.fragment(&view)
    } else {
        state.templates.page(&view)
    };

    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template rendering failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
