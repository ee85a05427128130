use actix_web::{HttpRequest, HttpResponse, web};

use crate::config::Config;
use crate::database::models::ShiftListQuery;
use crate::database::repositories::ShiftRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestIdExt;
use crate::services::shift_list::get_shift_list;

/// List shift times with their total and filled slot counts
pub async fn get_shifts(
    repo: web::Data<ShiftRepository>,
    config: web::Data<Config>,
    query: web::Query<ShiftListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate().map_err(AppError::BadRequest)?;

    let rows = repo.get_shift_rows(&query).await?;

    let row_count = rows.len();
    let shifts = get_shift_list(rows, config.shift_grouping)?;

    log::debug!(
        "Listed {} shifts from {} rows (category: {:?}, correlation_id={})",
        shifts.len(),
        row_count,
        query.category_id,
        req.correlation_id().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}
