use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::PresentationTemplate;

/// GET / - The presentation shell. Slide content is fetched by the client
/// from /api/slides.
pub async fn index() -> Result<HttpResponse, AppError> {
    render(PresentationTemplate)
}
