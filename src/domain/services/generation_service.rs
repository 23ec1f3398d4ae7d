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

use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::domain::models::generation_job::{GenerationJob, GenerationParams};
use crate::domain::models::site::{Deployment, DomainError, Site, SiteStatus, DEFAULT_SEO_SCORE};
use crate::domain::repositories::site_repository::{RepositoryError, SiteRepository};
use crate::domain::services::content_generator::{
    ContentGenerator, ContentRequest, GeneratorError,
};
use crate::domain::services::site_renderer::render_site;

/// 生成任务错误
///
/// 只描述任务自身无法继续的情况；内容生成失败会被记录到站点上，
/// 不会作为错误返回
#[derive(Error, Debug)]
pub enum JobError {
    /// 目标站点不存在，属于内部一致性问题
    #[error("Site {0} not found")]
    SiteNotFound(i32),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// 生成选项
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// 模型名称
    pub model: String,
    /// 采样温度
    pub temperature: f32,
    /// 部署地址前缀，站点地址为 `{base}/site/{id}`
    pub deploy_base_url: String,
    /// 部署成功时写入的SEO评分
    pub seo_score: i32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            deploy_base_url: "https://demo.autoseo.app".to_string(),
            seo_score: DEFAULT_SEO_SCORE,
        }
    }
}

/// 站点生成服务
///
/// 执行一个生成任务：加载站点 → 标记生成中 → 调用内容生成器 →
/// 渲染HTML → 写回结果。生成失败时站点进入 Failed 状态，不重试。
pub struct SiteGenerationService {
    repository: Arc<dyn SiteRepository>,
    generator: Arc<dyn ContentGenerator>,
    options: GenerationOptions,
}

impl SiteGenerationService {
    pub fn new(
        repository: Arc<dyn SiteRepository>,
        generator: Arc<dyn ContentGenerator>,
        options: GenerationOptions,
    ) -> Self {
        Self {
            repository,
            generator,
            options,
        }
    }

    /// 执行生成任务
    ///
    /// # 返回值
    ///
    /// * `Ok(Site)` - 任务结束后的站点，状态为 Deployed 或 Failed
    /// * `Err(JobError)` - 站点不存在、状态不允许或存储失败
    #[instrument(skip(self, job), fields(site_id = job.site_id, keyword = %job.params.keyword))]
    pub async fn process(&self, job: &GenerationJob) -> Result<Site, JobError> {
        let site = self
            .repository
            .find_by_id(job.site_id)
            .await?
            .ok_or(JobError::SiteNotFound(job.site_id))?;

        // Persist the in-flight state before calling out so readers can observe it
        let site = self.repository.update(&site.start_generation()?).await?;
        info!("Site generation started");

        let started = Instant::now();
        let result = match self.generate_content(&job.params).await {
            Ok(text) => self.deploy(site, &text, &job.params.keyword).await,
            Err(e) => {
                warn!("Content generation failed: {}", e);
                self.record_failure(site, e.to_string()).await
            }
        };
        histogram!("site_generation_duration_seconds").record(started.elapsed().as_secs_f64());

        result
    }

    /// 构造内容生成请求
    pub fn build_request(&self, params: &GenerationParams) -> ContentRequest {
        build_content_request(params, &self.options.model, self.options.temperature)
    }

    async fn generate_content(&self, params: &GenerationParams) -> Result<String, GeneratorError> {
        let request = self.build_request(params);
        self.generator.generate(&request).await
    }

    async fn deploy(&self, site: Site, text: &str, keyword: &str) -> Result<Site, JobError> {
        let deployment = Deployment {
            content: render_site(text, keyword),
            cloud_url: deployment_url(&self.options.deploy_base_url, site.id),
            seo_score: self.options.seo_score,
            word_count: text.split_whitespace().count(),
        };

        let deployed = site.clone().deploy(deployment)?;
        match self.repository.update(&deployed).await {
            Ok(saved) => {
                counter!("site_generation_completed_total").increment(1);
                info!(cloud_url = ?saved.cloud_url, "Site deployed");
                Ok(saved)
            }
            Err(e) => {
                error!("Failed to store deployed site: {}", e);
                self.record_failure(site, e.to_string()).await
            }
        }
    }

    /// 放弃一个不会再执行的任务
    ///
    /// 用于工作器被中止或任务无法入队的情况，站点会以 `reason` 进入 Failed
    pub async fn abandon(&self, site_id: i32, reason: &str) -> Result<Site, JobError> {
        let site = self
            .repository
            .find_by_id(site_id)
            .await?
            .ok_or(JobError::SiteNotFound(site_id))?;

        abandon_site(self.repository.as_ref(), site, reason).await
    }

    async fn record_failure(&self, site: Site, message: String) -> Result<Site, JobError> {
        let failed = site.fail(message)?;
        let saved = self.repository.update(&failed).await?;
        counter!("site_generation_failed_total").increment(1);
        Ok(saved)
    }
}

/// 把没有任务可以完成的站点标记为失败
///
/// Pending 站点先经过 Generating 再进入 Failed，保持状态单向推进；
/// 已是终态的站点原样返回
pub async fn abandon_site(
    repository: &dyn SiteRepository,
    site: Site,
    reason: &str,
) -> Result<Site, JobError> {
    let site = match site.status {
        SiteStatus::Pending => repository.update(&site.start_generation()?).await?,
        SiteStatus::Generating => site,
        SiteStatus::Deployed | SiteStatus::Failed => return Ok(site),
    };

    let saved = repository.update(&site.fail(reason)?).await?;
    counter!("site_generation_failed_total").increment(1);
    warn!(site_id = saved.id, reason, "Site generation abandoned");
    Ok(saved)
}

/// 站点部署地址
pub fn deployment_url(base_url: &str, site_id: i32) -> String {
    format!("{}/site/{}", base_url.trim_end_matches('/'), site_id)
}

/// 根据生成参数构造提示词
///
/// 模型被要求返回纯文本文章，响应不做结构化解析
pub fn build_content_request(
    params: &GenerationParams,
    model: &str,
    temperature: f32,
) -> ContentRequest {
    let faq_instruction = if params.include_faq {
        " End the article with a FAQ section of common questions and answers."
    } else {
        ""
    };

    let system_prompt = format!(
        "You are an SEO content writer. Create SEO content for: {keyword}. \
         Write in language '{language}' using a {tone} tone, aiming for about {words} words. \
         Structure the article with clear headings.{faq} Respond with the article text only.",
        keyword = params.keyword,
        language = params.language,
        tone = params.tone,
        words = params.word_count,
        faq = faq_instruction,
    );

    let user_prompt = if params.include_faq {
        format!(
            "Write a comprehensive article about {}. Include headings, FAQs, and optimize for SEO.",
            params.keyword
        )
    } else {
        format!(
            "Write a comprehensive article about {}. Include headings and optimize for SEO.",
            params.keyword
        )
    };

    ContentRequest {
        system_prompt,
        user_prompt,
        model: model.to_string(),
        temperature,
    }
}
