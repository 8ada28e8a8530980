pub mod index;
pub mod search;

use crate::middlewares::response_middleware::TemplateResponse;

pub async fn not_found() -> TemplateResponse {
    TemplateResponse::not_found()
}
