// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::presentation::errors::{AppError, RequestError};

/// 路径中的站点ID
#[derive(Debug, Clone, Copy)]
pub struct SiteId(pub i32);

impl<S> FromRequestParts<S> for SiteId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(SiteId(id)),
            Err(rejection) => Err(RequestError::InvalidPath(rejection.body_text()).into()),
        }
    }
}
