//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections are [`AppError`]s.
///
/// Deserialization runs the record's validation, so a handler taking
/// `ValidJson<ContactMessage>` is only called with a valid message. Schema
/// violations become 422 responses naming the offending field.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
