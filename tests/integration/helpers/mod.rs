// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use autoseo::config::settings::DatabaseSettings;
use autoseo::domain::models::generation_job::{GenerationJob, GenerationParams};
use autoseo::domain::models::site::{Deployment, NewSite, Site, SiteStatus};
use autoseo::domain::repositories::site_repository::{RepositoryError, SiteRepository};
use autoseo::domain::services::content_generator::{
    ContentGenerator, ContentRequest, GeneratorError,
};
use autoseo::domain::services::generation_service::{GenerationOptions, SiteGenerationService};
use autoseo::infrastructure::database::connection;
use autoseo::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use autoseo::queue::job_queue::{JobQueue, QueueError};
use chrono::{Duration, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::{Arc, Mutex};

/// 创建迁移完成的内存数据库
///
/// 内存SQLite的数据只存在于单个连接上，所以连接池固定为1
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: None,
        idle_timeout: None,
        log_statements: false,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

pub async fn setup_repository() -> Arc<dyn SiteRepository> {
    Arc::new(SiteRepositoryImpl::new(setup_db().await))
}

/// 写入一个 Pending 站点，创建时间相对当前时间偏移 `offset_secs` 秒
pub async fn create_site(
    repository: &Arc<dyn SiteRepository>,
    keyword: &str,
    offset_secs: i64,
) -> Site {
    let params = GenerationParams::for_keyword(keyword);
    let now = Utc::now() + Duration::seconds(offset_secs);
    repository
        .create(&NewSite::from_params(&params, now))
        .await
        .expect("Failed to create site")
}

/// 把站点推进到 Deployed
pub async fn deploy_site(repository: &Arc<dyn SiteRepository>, site: Site, seo_score: i32) -> Site {
    let generating = repository
        .update(&site.start_generation().unwrap())
        .await
        .unwrap();
    let cloud_url = format!("https://demo.autoseo.app/site/{}", generating.id);
    let deployed = generating
        .deploy(Deployment {
            content: "<html></html>".to_string(),
            cloud_url,
            seo_score,
            word_count: 1,
        })
        .unwrap();
    repository.update(&deployed).await.unwrap()
}

/// 把站点推进到 Failed
pub async fn fail_site(repository: &Arc<dyn SiteRepository>, site: Site, error: &str) -> Site {
    let generating = repository
        .update(&site.start_generation().unwrap())
        .await
        .unwrap();
    repository
        .update(&generating.fail(error).unwrap())
        .await
        .unwrap()
}

/// 测试用内容生成器
///
/// 返回固定文本或固定错误，并记录收到的请求
pub struct StubGenerator {
    response: Result<String, String>,
    hang: bool,
    requests: Mutex<Vec<ContentRequest>>,
}

impl StubGenerator {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            hang: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 永远不返回的生成器，用来模拟卡住的外部调用
    pub fn hanging() -> Self {
        Self {
            response: Err("unreachable".to_string()),
            hang: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            hang: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, request: &ContentRequest) -> Result<String, GeneratorError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.hang {
            std::future::pending::<()>().await;
        }
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GeneratorError::Request(message.clone())),
        }
    }
}

/// 记录每次写入状态的仓库包装
pub struct RecordingRepository {
    inner: Arc<dyn SiteRepository>,
    writes: Mutex<Vec<(i32, SiteStatus)>>,
}

impl RecordingRepository {
    pub fn new(inner: Arc<dyn SiteRepository>) -> Self {
        Self {
            inner,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// 某个站点依次写入过的状态
    pub fn statuses_of(&self, id: i32) -> Vec<SiteStatus> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(site_id, _)| *site_id == id)
            .map(|(_, status)| *status)
            .collect()
    }

    fn record(&self, site: &Site) {
        self.writes.lock().unwrap().push((site.id, site.status));
    }
}

#[async_trait]
impl SiteRepository for RecordingRepository {
    async fn create(&self, site: &NewSite) -> Result<Site, RepositoryError> {
        let created = self.inner.create(site).await?;
        self.record(&created);
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Site>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn update(&self, site: &Site) -> Result<Site, RepositoryError> {
        let updated = self.inner.update(site).await?;
        self.record(&updated);
        Ok(updated)
    }

    async fn list(&self) -> Result<Vec<Site>, RepositoryError> {
        self.inner.list().await
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Site>, RepositoryError> {
        self.inner.list_recent(limit).await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.inner.count().await
    }

    async fn count_by_status(&self, status: SiteStatus) -> Result<u64, RepositoryError> {
        self.inner.count_by_status(status).await
    }

    async fn average_seo_score(&self, status: SiteStatus) -> Result<Option<f64>, RepositoryError> {
        self.inner.average_seo_score(status).await
    }
}

pub fn generation_service(
    repository: Arc<dyn SiteRepository>,
    generator: Arc<dyn ContentGenerator>,
) -> Arc<SiteGenerationService> {
    Arc::new(SiteGenerationService::new(
        repository,
        generator,
        GenerationOptions::default(),
    ))
}

/// 报告自己处于打开状态、却拒绝所有任务的队列
///
/// 模拟检查之后、入队之前队列被关闭的情况
pub struct RejectingQueue;

#[async_trait]
impl JobQueue for RejectingQueue {
    async fn enqueue(&self, _job: GenerationJob) -> Result<(), QueueError> {
        Err(QueueError::Closed)
    }

    async fn dequeue(&self) -> Option<GenerationJob> {
        None
    }

    fn close(&self) {}

    fn is_closed(&self) -> bool {
        false
    }
}
