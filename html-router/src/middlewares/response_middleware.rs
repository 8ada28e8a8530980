use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Extension,
};
use common::utils::template_engine::{ProvidesTemplateEngine, Value};
use minijinja::context;
use serde::Serialize;
use tracing::error;

#[derive(Clone, Debug)]
pub enum TemplateKind {
    Full(String),
    Partial(String, String),
    Error(StatusCode),
}

/// What a handler wants rendered. Handlers return this value; the
/// [`with_template_response`] layer does the actual rendering, so handlers
/// never touch the engine and rendering failures are handled in one place.
#[derive(Clone)]
pub struct TemplateResponse {
    template_kind: TemplateKind,
    context: Value,
}

impl TemplateResponse {
    pub fn new_template<T: Serialize>(name: impl Into<String>, context: T) -> Self {
        Self {
            template_kind: TemplateKind::Full(name.into()),
            context: Value::from_serialize(&context),
        }
    }

    /// A single named block of a template, for htmx fragment swaps.
    pub fn new_partial<T: Serialize>(
        template: impl Into<String>,
        block: impl Into<String>,
        context: T,
    ) -> Self {
        Self {
            template_kind: TemplateKind::Partial(template.into(), block.into()),
            context: Value::from_serialize(&context),
        }
    }

    pub fn error(status: StatusCode, title: &str, description: &str) -> Self {
        let ctx = context! {
            status_code => status.as_u16(),
            title => title,
            description => description
        };
        Self {
            template_kind: TemplateKind::Error(status),
            context: ctx,
        }
    }

    pub fn not_found() -> Self {
        Self::error(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            "The page you're looking for doesn't exist or was removed.",
        )
    }
}

impl IntoResponse for TemplateResponse {
    fn into_response(self) -> Response {
        Extension(self).into_response()
    }
}

pub async fn with_template_response<S>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response
where
    S: ProvidesTemplateEngine + Clone + Send + Sync + 'static,
{
    let response = next.run(req).await;

    let Some(template_response) = response.extensions().get::<TemplateResponse>().cloned() else {
        return response;
    };

    let template_engine = state.template_engine();

    match &template_response.template_kind {
        TemplateKind::Full(name) => {
            match template_engine.render(name, &template_response.context) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    error!("Failed to render template '{}': {:?}", name, e);
                    (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
                }
            }
        }
        TemplateKind::Partial(template, block) => {
            match template_engine.render_block(template, block, &template_response.context) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    error!("Failed to render block '{}/{}': {:?}", template, block, e);
                    (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
                }
            }
        }
        TemplateKind::Error(status) => {
            match template_engine.render("errors/error.html", &template_response.context) {
                Ok(html) => (*status, Html(html)).into_response(),
                Err(e) => {
                    error!("Critical: Failed to render 'errors/error.html': {:?}", e);
                    (*status, Html(fallback_error())).into_response()
                }
            }
        }
    }
}

fn fallback_error() -> String {
    r#"
    <html>
        <body>
            <section class="section">
                <h1 class="title">Error</h1>
                <p>Sorry, something went wrong displaying this page.</p>
            </section>
        </body>
    </html>
    "#
    .to_string()
}
