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

use autoseo::config::settings::Settings;
use autoseo::domain::repositories::site_repository::SiteRepository;
use autoseo::domain::services::content_generator::ContentGenerator;
use autoseo::domain::services::generation_service::SiteGenerationService;
use autoseo::infrastructure::database::connection;
use autoseo::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use autoseo::infrastructure::services::openai_generator::OpenAiContentGenerator;
use autoseo::presentation::routes;
use autoseo::queue::job_queue::{ChannelJobQueue, JobQueue};
use autoseo::workers::manager::WorkerManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use autoseo::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 关闭时等待工作器处理剩余任务的时间
const WORKER_SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting autoseo...");

    // 3. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!(environment = %settings.environment, "Configuration loaded");
    if settings.generator.api_key.is_none() {
        warn!("No generator API key configured, every generation job will fail");
    }

    autoseo::infrastructure::metrics::init_metrics(&settings.metrics);

    // 4. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 5. Initialize components
    let repository: Arc<dyn SiteRepository> = Arc::new(SiteRepositoryImpl::new(db.clone()));
    let generator: Arc<dyn ContentGenerator> =
        Arc::new(OpenAiContentGenerator::new(&settings.generator)?);
    let queue: Arc<dyn JobQueue> = Arc::new(ChannelJobQueue::new());
    let service = Arc::new(SiteGenerationService::new(
        repository.clone(),
        generator,
        settings.generation_options(),
    ));

    // 6. Start workers
    let mut worker_manager = WorkerManager::new(queue.clone(), service);
    worker_manager.start_workers(settings.workers.count);

    // 7. Start HTTP server
    let app = routes::app(repository, queue);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    worker_manager.shutdown(WORKER_SHUTDOWN_GRACE).await;
    info!("autoseo stopped");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!("Unable to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
