// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::application::dto::dashboard_response::{
    DashboardDto, DashboardOverviewDto, RecentSiteDto,
};
use crate::domain::models::site::SiteStatus;
use crate::domain::repositories::site_repository::{RepositoryError, SiteRepository};

/// 仪表盘展示的最近站点数量
pub const RECENT_SITES_LIMIT: u64 = 5;

/// 仪表盘用例
pub struct DashboardUseCase {
    repository: Arc<dyn SiteRepository>,
}

impl DashboardUseCase {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<DashboardDto, RepositoryError> {
        let total_sites = self.repository.count().await?;
        let deployed_sites = self.repository.count_by_status(SiteStatus::Deployed).await?;
        let average = self
            .repository
            .average_seo_score(SiteStatus::Deployed)
            .await?;
        let recent = self.repository.list_recent(RECENT_SITES_LIMIT).await?;

        Ok(DashboardDto {
            overview: DashboardOverviewDto {
                total_sites,
                deployed_sites,
                average_seo_score: round_one_decimal(average.unwrap_or(0.0)),
            },
            recent_sites: recent.iter().map(RecentSiteDto::from).collect(),
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
