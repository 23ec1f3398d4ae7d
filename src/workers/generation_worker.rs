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

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::models::generation_job::GenerationJob;
use crate::domain::models::site::Site;
use crate::domain::services::generation_service::{JobError, SiteGenerationService};
use crate::queue::job_queue::JobQueue;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;

/// 正在执行的任务对应的站点ID
///
/// 同一个管理器下的工作器共享，工作器被中止时用来找回未完成的站点
pub type InFlightJobs = Arc<Mutex<HashSet<i32>>>;

/// 站点生成工作器
///
/// 从队列中逐个取出生成任务并执行。任务之间互不影响：
/// 一个任务的错误只会被记录，不会终止工作器。
pub struct GenerationWorker {
    name: String,
    queue: Arc<dyn JobQueue>,
    service: Arc<SiteGenerationService>,
    in_flight: InFlightJobs,
}

impl GenerationWorker {
    /// 创建新的生成工作器实例
    pub fn new(
        queue: Arc<dyn JobQueue>,
        service: Arc<SiteGenerationService>,
        in_flight: InFlightJobs,
    ) -> Self {
        Self {
            name: format!("generation-worker-{}", Uuid::new_v4()),
            queue,
            service,
            in_flight,
        }
    }

    fn track(&self, site_id: i32, running: bool) -> Result<(), WorkerError> {
        let mut in_flight = self.in_flight.lock().map_err(|_| {
            WorkerError::InternalError("in-flight job registry poisoned".to_string())
        })?;
        if running {
            in_flight.insert(site_id);
        } else {
            in_flight.remove(&site_id);
        }
        Ok(())
    }

    /// 执行单个任务
    ///
    /// 站点不存在视为内部一致性问题，只记录日志，不重试
    pub async fn handle(&self, job: GenerationJob) -> Option<Site> {
        match self.service.process(&job).await {
            Ok(site) => {
                info!(
                    worker = %self.name,
                    site_id = site.id,
                    status = %site.status,
                    "Generation job finished"
                );
                Some(site)
            }
            Err(JobError::SiteNotFound(site_id)) => {
                error!(
                    worker = %self.name,
                    site_id,
                    "Generation job references a missing site"
                );
                None
            }
            Err(e) => {
                error!(
                    worker = %self.name,
                    site_id = job.site_id,
                    "Generation job aborted: {}",
                    e
                );
                None
            }
        }
    }
}

#[async_trait]
impl Worker for GenerationWorker {
    async fn run(&self) -> Result<(), WorkerError> {
        info!("Generation worker {} started", self.name);

        while let Some(job) = self.queue.dequeue().await {
            let site_id = job.site_id;
            self.track(site_id, true)?;
            self.handle(job).await;
            self.track(site_id, false)?;
        }

        info!("Generation worker {} stopped: queue closed", self.name);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
