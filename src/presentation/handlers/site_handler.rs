// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::{
        dto::{generate_site_request::GenerateSiteRequestDto, site_response::SiteSummaryDto},
        usecases::create_site::CreateSiteUseCase,
    },
    domain::{models::site::Site, repositories::site_repository::SiteRepository},
    presentation::{
        errors::AppError,
        extractors::{ApiJson, SiteId},
    },
    queue::job_queue::JobQueue,
};

/// 提交站点生成请求
///
/// 站点以 pending 状态返回，生成在后台进行
pub async fn generate_site(
    Extension(repository): Extension<Arc<dyn SiteRepository>>,
    Extension(queue): Extension<Arc<dyn JobQueue>>,
    ApiJson(payload): ApiJson<GenerateSiteRequestDto>,
) -> Result<Json<SiteSummaryDto>, AppError> {
    let site = CreateSiteUseCase::new(repository, queue)
        .execute(payload)
        .await?;

    Ok(Json(SiteSummaryDto::from(&site)))
}

/// 按创建时间倒序列出站点
pub async fn list_sites(
    Extension(repository): Extension<Arc<dyn SiteRepository>>,
) -> Result<Json<Vec<SiteSummaryDto>>, AppError> {
    let sites = repository.list().await?;
    Ok(Json(sites.iter().map(SiteSummaryDto::from).collect()))
}

/// 获取站点详情
pub async fn get_site(
    SiteId(id): SiteId,
    Extension(repository): Extension<Arc<dyn SiteRepository>>,
) -> Result<Json<Site>, AppError> {
    let site = repository.get(id).await?;
    Ok(Json(site))
}
