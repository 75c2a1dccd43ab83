//! Extract the item id from the `/items/*id` path suffix.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Base-10 item id taken from everything after `/items/`.
/// Any failure, including a suffix that is not valid UTF-8 once percent-decoded, is `AppError::InvalidId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl std::str::FromStr for ItemId {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse().map(ItemId).map_err(|_| AppError::InvalidId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting item path");
                AppError::InvalidId
            })?;
        raw.parse()
    }
}
