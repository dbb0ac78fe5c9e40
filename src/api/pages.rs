//! GET / - upload page showing whether the model artifact is installed

use axum::{extract::State, response::Html};
use tracing::error;

use crate::api::state::{AppState, UploadPolicy};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let model_ready = match state.model_store.is_ready().await {
        Ok(ready) => ready,
        Err(e) => {
            error!(error = %e, "Failed to check model artifact");
            false
        }
    };

    Html(render_index(model_ready, &state.policy))
}

fn render_index(model_ready: bool, policy: &UploadPolicy) -> String {
    let (status_class, status_text, upload_hidden) = if model_ready {
        ("ready", "Model ready", "")
    } else {
        ("missing", "Model not loaded", "hidden")
    };

    let accept = policy
        .allowed_extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");
    let model_accept = format!(".{}", policy.model_extension);
    let max_upload_mb = format!("{:.0}", policy.max_body_size as f64 / (1024.0 * 1024.0));

    INDEX_TEMPLATE
        .replace("{{status_class}}", status_class)
        .replace("{{status_text}}", status_text)
        .replace("{{upload_hidden}}", upload_hidden)
        .replace("{{accept}}", &escape_html(&accept))
        .replace("{{model_accept}}", &escape_html(&model_accept))
        .replace("{{max_upload_mb}}", &max_upload_mb)
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }

    out
}
