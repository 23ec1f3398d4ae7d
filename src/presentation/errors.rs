// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::usecases::create_site::CreateSiteError;
use crate::domain::repositories::site_repository::RepositoryError;
use crate::queue::job_queue::QueueError;

/// 请求解析错误
///
/// 请求体或路径参数无法解析时由提取器产生
#[derive(Error, Debug)]
pub enum RequestError {
    /// 请求体不是合法的JSON或字段不符合要求
    #[error("{0}")]
    InvalidBody(String),

    /// 路径参数无法解析
    #[error("{0}")]
    InvalidPath(String),

    /// 缺少 `Content-Type: application/json`
    #[error("{0}")]
    UnsupportedMediaType(String),
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按错误类型映射HTTP状态码，
/// 响应体统一为 `{"detail": ...}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        if let Some(err) = self.0.downcast_ref::<RequestError>() {
            let status = match err {
                RequestError::InvalidBody(_) | RequestError::InvalidPath(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                RequestError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            };
            return (status, err.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }

        if let Some(err) = self.0.downcast_ref::<CreateSiteError>() {
            return match err {
                CreateSiteError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CreateSiteError::Repository(e) => repository_status(e),
                CreateSiteError::Queue(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
            };
        }

        if self.0.downcast_ref::<QueueError>().is_some() {
            return (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string());
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
    }
}

fn repository_status(err: &RepositoryError) -> (StatusCode, String) {
    match err {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Site not found".to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
