// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use crate::application::dto::generate_site_request::GenerateSiteRequestDto;
use crate::domain::models::generation_job::{GenerationJob, GenerationParams};
use crate::domain::models::site::{NewSite, Site};
use crate::domain::repositories::site_repository::{RepositoryError, SiteRepository};
use crate::domain::services::generation_service::abandon_site;
use crate::queue::job_queue::{JobQueue, QueueError};

/// 创建站点错误
#[derive(Error, Debug)]
pub enum CreateSiteError {
    /// 请求参数不合法，记录尚未创建
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// 创建站点用例
///
/// 校验请求、以 Pending 状态写入站点，然后把生成任务交给队列后立即返回。
/// 任务没能入队时站点直接进入 Failed，不会留下没有任务的 Pending 记录
pub struct CreateSiteUseCase {
    repository: Arc<dyn SiteRepository>,
    queue: Arc<dyn JobQueue>,
}

impl CreateSiteUseCase {
    pub fn new(repository: Arc<dyn SiteRepository>, queue: Arc<dyn JobQueue>) -> Self {
        Self { repository, queue }
    }

    pub async fn execute(&self, request: GenerateSiteRequestDto) -> Result<Site, CreateSiteError> {
        request.validate()?;

        // No record is written once the queue stops accepting jobs
        if self.queue.is_closed() {
            return Err(QueueError::Closed.into());
        }

        let params = GenerationParams::from(request);
        let site = self
            .repository
            .create(&NewSite::from_params(&params, Utc::now()))
            .await?;

        if let Err(e) = self.queue.enqueue(GenerationJob::new(site.id, params)).await {
            error!(site_id = site.id, "Failed to enqueue generation job: {}", e);
            let reason = format!("Generation job could not be queued: {}", e);
            if let Err(abandon_err) =
                abandon_site(self.repository.as_ref(), site, &reason).await
            {
                error!("Failed to mark unqueued site as failed: {}", abandon_err);
            }
            return Err(e.into());
        }

        counter!("site_generation_requests_total").increment(1);
        info!(site_id = site.id, domain = %site.domain, "Site generation queued");
        Ok(site)
    }
}
