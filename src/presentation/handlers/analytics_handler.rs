// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::dashboard_response::DashboardDto;
use crate::application::usecases::dashboard::DashboardUseCase;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::presentation::errors::AppError;

/// 仪表盘统计
pub async fn dashboard(
    Extension(repository): Extension<Arc<dyn SiteRepository>>,
) -> Result<Json<DashboardDto>, AppError> {
    let dashboard = DashboardUseCase::new(repository).execute().await?;
    Ok(Json(dashboard))
}
