// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::generation_job::GenerationJob;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// 队列已关闭，不再接受任务
    #[error("Job queue closed")]
    Closed,
}

/// 生成任务队列特质
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// 入队任务
    async fn enqueue(&self, job: GenerationJob) -> Result<(), QueueError>;

    /// 出队任务，队列关闭且已清空时返回 `None`
    async fn dequeue(&self) -> Option<GenerationJob>;

    /// 关闭队列：之后的入队都会失败，已入队的任务仍会被取出
    fn close(&self);

    /// 队列是否已关闭
    fn is_closed(&self) -> bool;
}

/// 进程内任务队列
///
/// 无界通道：入队从不阻塞请求，执行并发由工作器数量限制。
/// 所有工作器共享同一个接收端。
pub struct ChannelJobQueue {
    sender: std::sync::Mutex<Option<mpsc::UnboundedSender<GenerationJob>>>,
    receiver: Arc<Mutex<mpsc::UnboundedReceiver<GenerationJob>>>,
}

impl ChannelJobQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender: std::sync::Mutex::new(Some(sender)),
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }
}

impl Default for ChannelJobQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobQueue for ChannelJobQueue {
    async fn enqueue(&self, job: GenerationJob) -> Result<(), QueueError> {
        let sender = self.sender.lock().map_err(|_| QueueError::Closed)?;
        match sender.as_ref() {
            Some(sender) => sender.send(job).map_err(|_| QueueError::Closed),
            None => Err(QueueError::Closed),
        }
    }

    async fn dequeue(&self) -> Option<GenerationJob> {
        self.receiver.lock().await.recv().await
    }

    fn close(&self) {
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
    }

    fn is_closed(&self) -> bool {
        match self.sender.lock() {
            Ok(sender) => sender.as_ref().map_or(true, |s| s.is_closed()),
            Err(_) => true,
        }
    }
}
