// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::site::{Site, SiteStatus};

/// 站点摘要
///
/// 生成接口和列表接口返回的字段子集；详情接口直接返回完整的 [`Site`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSummaryDto {
    pub id: i32,
    pub domain: String,
    pub title: String,
    pub keyword: String,
    pub status: SiteStatus,
    pub cloud_url: Option<String>,
    pub seo_score: i32,
    pub created_at: DateTime<FixedOffset>,
}

impl From<&Site> for SiteSummaryDto {
    fn from(site: &Site) -> Self {
        Self {
            id: site.id,
            domain: site.domain.clone(),
            title: site.title.clone(),
            keyword: site.keyword.clone(),
            status: site.status,
            cloud_url: site.cloud_url.clone(),
            seo_score: site.seo_score,
            created_at: site.created_at,
        }
    }
}
