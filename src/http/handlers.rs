use crate::core::service::ConversionService;
use crate::domain::model::{ArabicToRoman, RomanToArabic, Welcome};
use crate::http::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::QueryRejection, Query},
    http::Uri,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RomanQuery {
    pub roman: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArabicQuery {
    pub arabic: Option<String>,
}

pub async fn welcome() -> Json<Welcome> {
    Json(ConversionService::welcome())
}

/// `GET /r2a?roman=<string>`
pub async fn roman_to_arabic(
    query: Result<Query<RomanQuery>, QueryRejection>,
) -> ApiResult<Json<RomanToArabic>> {
    let Query(query) = query?;
    let result = ConversionService::roman_to_arabic(query.roman.as_deref())?;
    Ok(Json(result))
}

/// `GET /a2r?arabic=<int>`
pub async fn arabic_to_roman(
    query: Result<Query<ArabicQuery>, QueryRejection>,
) -> ApiResult<Json<ArabicToRoman>> {
    let Query(query) = query?;
    let result = ConversionService::arabic_to_roman(query.arabic.as_deref())?;
    Ok(Json(result))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
