// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::generation_service::SiteGenerationService;
use crate::queue::job_queue::JobQueue;
use crate::workers::generation_worker::{GenerationWorker, InFlightJobs};
use crate::workers::worker::Worker;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// 工作管理器
///
/// 启动固定数量的生成工作器，共享同一个任务队列，
/// 工作器数量即同时执行的生成任务上限
pub struct WorkerManager {
    queue: Arc<dyn JobQueue>,
    service: Arc<SiteGenerationService>,
    in_flight: InFlightJobs,
    handles: Vec<JoinHandle<()>>,
}

/// 关闭时未完成任务的失败原因
pub const SHUTDOWN_REASON: &str = "Generation interrupted by service shutdown";

impl WorkerManager {
    pub fn new(queue: Arc<dyn JobQueue>, service: Arc<SiteGenerationService>) -> Self {
        Self {
            queue,
            service,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            handles: Vec::new(),
        }
    }

    /// 启动工作进程
    ///
    /// # 参数
    ///
    /// * `count` - 要启动的工作进程数量，至少为1
    pub fn start_workers(&mut self, count: usize) {
        for _ in 0..count.max(1) {
            let worker = GenerationWorker::new(
                self.queue.clone(),
                self.service.clone(),
                self.in_flight.clone(),
            );

            let handle = tokio::spawn(async move {
                if let Err(e) = worker.run().await {
                    error!("Worker {} exited with error: {}", worker.name(), e);
                }
            });
            self.handles.push(handle);
        }

        info!("Started {} generation workers", self.handles.len());
    }

    /// 正在运行的工作器数量
    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// 关闭工作进程
    ///
    /// 关闭队列后等待工作器处理完已入队的任务；超过 `grace` 仍未结束的工作器会被中止，
    /// 它们手上的任务和队列中剩余的任务对应的站点都会被标记为失败
    pub async fn shutdown(&mut self, grace: Duration) {
        info!("Shutting down workers...");
        self.queue.close();

        let deadline = tokio::time::Instant::now() + grace;
        for handle in self.handles.iter_mut() {
            if tokio::time::timeout_at(deadline, &mut *handle).await.is_err() {
                warn!("Worker did not finish within grace period, aborting");
                handle.abort();
                // Wait for the cancelled task to drop its queue guard
                let _ = (&mut *handle).await;
            }
        }
        self.handles.clear();

        self.abandon_unfinished().await;
        info!("Workers shut down successfully");
    }

    async fn abandon_unfinished(&self) {
        let mut site_ids: Vec<i32> = match self.in_flight.lock() {
            Ok(mut in_flight) => in_flight.drain().collect(),
            Err(_) => {
                error!("In-flight job registry poisoned, interrupted sites cannot be recovered");
                Vec::new()
            }
        };
        while let Some(job) = self.queue.dequeue().await {
            site_ids.push(job.site_id);
        }

        for site_id in site_ids {
            if let Err(e) = self.service.abandon(site_id, SHUTDOWN_REASON).await {
                error!(site_id, "Failed to mark interrupted site as failed: {}", e);
            }
        }
    }
}
