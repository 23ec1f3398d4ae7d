// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub domain: String,
    pub title: String,
    pub keyword: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub meta_tags: Option<Json>,
    pub cloud_provider: String,
    pub cloud_url: Option<String>,
    pub status: String,
    pub seo_score: i32,
    pub analytics: Json,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
