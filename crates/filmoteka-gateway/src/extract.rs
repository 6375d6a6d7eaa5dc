//! Extractors that report rejections as [`ApiError`] problem details.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body extractor; malformed bodies surface as 422 problem details.
///
/// A body sent without an `application/json` content type is refused with
/// 415 instead of being parsed.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; non-numeric or negative ids surface as 422 problem details.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
