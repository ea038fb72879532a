use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::models::deck::{self, SlideDir};

/// GET /api/slides - Deck JSON: the template document plus every slide that
/// parsed, in filename order.
///
/// A missing or invalid template document and a directory-listing failure
/// answer 500 with `{"error": ...}`; individual slide failures are skipped
/// inside the assembler.
pub async fn slides(dir: web::Data<SlideDir>) -> Result<HttpResponse, AppError> {
    let deck = deck::assemble(dir.path())?;
    Ok(HttpResponse::Ok().json(deck))
}
