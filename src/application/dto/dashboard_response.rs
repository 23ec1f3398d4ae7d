// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::site::{Site, SiteStatus};

/// 仪表盘响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub overview: DashboardOverviewDto,
    pub recent_sites: Vec<RecentSiteDto>,
}

/// 仪表盘总览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverviewDto {
    pub total_sites: u64,
    pub deployed_sites: u64,
    /// 已部署站点的平均评分，保留一位小数，没有已部署站点时为0
    pub average_seo_score: f64,
}

/// 最近的站点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSiteDto {
    pub id: i32,
    pub domain: String,
    pub status: SiteStatus,
    pub created_at: DateTime<FixedOffset>,
}

impl From<&Site> for RecentSiteDto {
    fn from(site: &Site) -> Self {
        Self {
            id: site.id,
            domain: site.domain.clone(),
            status: site.status,
            created_at: site.created_at,
        }
    }
}
