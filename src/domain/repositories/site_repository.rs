// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site::{NewSite, Site, SiteStatus};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 数据库中的数据无法映射为领域模型
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// 站点仓库特质
///
/// 定义站点数据访问接口。所有写操作都是整条记录更新，
/// 同一ID只会被一个生成任务写入，因此不做额外加锁。
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// 创建站点并分配ID
    async fn create(&self, site: &NewSite) -> Result<Site, RepositoryError>;

    /// 根据ID查找站点
    async fn find_by_id(&self, id: i32) -> Result<Option<Site>, RepositoryError>;

    /// 根据ID获取站点，不存在时返回 `NotFound`
    async fn get(&self, id: i32) -> Result<Site, RepositoryError> {
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    /// 整条更新站点
    async fn update(&self, site: &Site) -> Result<Site, RepositoryError>;

    /// 按创建时间倒序列出所有站点
    async fn list(&self) -> Result<Vec<Site>, RepositoryError>;

    /// 按创建时间倒序列出最近的 `limit` 个站点
    async fn list_recent(&self, limit: u64) -> Result<Vec<Site>, RepositoryError>;

    /// 站点总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 指定状态的站点数
    async fn count_by_status(&self, status: SiteStatus) -> Result<u64, RepositoryError>;

    /// 指定状态站点的平均SEO评分，没有匹配记录时为 `None`
    async fn average_seo_score(&self, status: SiteStatus) -> Result<Option<f64>, RepositoryError>;
}
