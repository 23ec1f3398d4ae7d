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

use crate::domain::models::site::{NewSite, Site, SiteStatus};
use crate::domain::repositories::site_repository::{RepositoryError, SiteRepository};
use crate::infrastructure::database::entities::site as site_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Expr, Func, SimpleExpr},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use serde_json::json;
use std::sync::Arc;

/// 站点仓库实现
///
/// 基于SeaORM实现的站点数据访问层
#[derive(Clone)]
pub struct SiteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SiteRepositoryImpl {
    /// 创建新的站点仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn newest_first() -> Select<site_entity::Entity> {
        site_entity::Entity::find()
            .order_by_desc(site_entity::Column::CreatedAt)
            .order_by_desc(site_entity::Column::Id)
    }
}

impl TryFrom<site_entity::Model> for Site {
    type Error = RepositoryError;

    fn try_from(model: site_entity::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<SiteStatus>()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        Ok(Self {
            id: model.id,
            domain: model.domain,
            title: model.title,
            keyword: model.keyword,
            content: model.content,
            meta_description: model.meta_description,
            meta_tags: model.meta_tags,
            cloud_provider: model.cloud_provider,
            cloud_url: model.cloud_url,
            status,
            seo_score: model.seo_score,
            analytics: model.analytics,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Site> for site_entity::ActiveModel {
    fn from(site: &Site) -> Self {
        Self {
            id: Set(site.id),
            domain: Set(site.domain.clone()),
            title: Set(site.title.clone()),
            keyword: Set(site.keyword.clone()),
            content: Set(site.content.clone()),
            meta_description: Set(site.meta_description.clone()),
            meta_tags: Set(site.meta_tags.clone()),
            cloud_provider: Set(site.cloud_provider.clone()),
            cloud_url: Set(site.cloud_url.clone()),
            status: Set(site.status.to_string()),
            seo_score: Set(site.seo_score),
            analytics: Set(site.analytics.clone()),
            created_at: Set(site.created_at),
            updated_at: Set(site.updated_at),
        }
    }
}

impl From<&NewSite> for site_entity::ActiveModel {
    fn from(site: &NewSite) -> Self {
        Self {
            id: NotSet,
            domain: Set(site.domain.clone()),
            title: Set(site.title.clone()),
            keyword: Set(site.keyword.clone()),
            content: Set(None),
            meta_description: Set(None),
            meta_tags: Set(None),
            cloud_provider: Set(site.cloud_provider.clone()),
            cloud_url: Set(None),
            status: Set(SiteStatus::Pending.to_string()),
            seo_score: Set(0),
            analytics: Set(json!({})),
            created_at: Set(site.created_at),
            updated_at: Set(site.created_at),
        }
    }
}

fn into_sites(models: Vec<site_entity::Model>) -> Result<Vec<Site>, RepositoryError> {
    models.into_iter().map(Site::try_from).collect()
}

#[async_trait]
impl SiteRepository for SiteRepositoryImpl {
    async fn create(&self, site: &NewSite) -> Result<Site, RepositoryError> {
        let model: site_entity::ActiveModel = site.into();
        let inserted = model.insert(self.db.as_ref()).await?;
        inserted.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Site>, RepositoryError> {
        let model = site_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(Site::try_from).transpose()
    }

    async fn update(&self, site: &Site) -> Result<Site, RepositoryError> {
        let model: site_entity::ActiveModel = site.into();

        match model.update(self.db.as_ref()).await {
            Ok(updated) => updated.try_into(),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<Site>, RepositoryError> {
        let models = Self::newest_first().all(self.db.as_ref()).await?;
        into_sites(models)
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Site>, RepositoryError> {
        let models = Self::newest_first()
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        into_sites(models)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(site_entity::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn count_by_status(&self, status: SiteStatus) -> Result<u64, RepositoryError> {
        let count = site_entity::Entity::find()
            .filter(site_entity::Column::Status.eq(status.as_str()))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }

    async fn average_seo_score(&self, status: SiteStatus) -> Result<Option<f64>, RepositoryError> {
        // AVG over an integer column is NUMERIC on Postgres, cast so both backends decode as f64
        let average = SimpleExpr::from(Func::cast_as(
            Func::avg(Expr::col(site_entity::Column::SeoScore)),
            Alias::new("DOUBLE PRECISION"),
        ));

        let value = site_entity::Entity::find()
            .select_only()
            .column_as(average, "average_seo_score")
            .filter(site_entity::Column::Status.eq(status.as_str()))
            .into_tuple::<Option<f64>>()
            .one(self.db.as_ref())
            .await?;

        Ok(value.flatten())
    }
}
