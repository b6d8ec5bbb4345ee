use crate::application::http::{analysis::router::AnalysisApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gutcheck API"
    )
)]
struct ApiDocBase;

pub struct ApiDoc;

impl ApiDoc {
    // The derive's `nest(...)` rejects empty paths, so nest at "" via the
    // runtime API instead (identical path composition).
    pub fn openapi() -> utoipa::openapi::OpenApi {
        ApiDocBase::openapi()
            .nest("", AnalysisApiDoc::openapi())
            .nest("", HealthApiDoc::openapi())
    }
}
