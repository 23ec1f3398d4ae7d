// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 站点生成参数
///
/// 由请求DTO校验后转换而来，生成任务执行时原样使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// 目标关键词
    pub keyword: String,
    /// 站点标题，缺省为关键词
    pub title: Option<String>,
    /// 内容语言
    pub language: String,
    /// 行文语气
    pub tone: String,
    /// 目标字数
    pub word_count: u32,
    /// 是否包含FAQ
    pub include_faq: bool,
    /// 部署目标标签
    pub cloud_provider: String,
    /// 自定义域名
    pub custom_domain: Option<String>,
}

impl GenerationParams {
    pub const DEFAULT_LANGUAGE: &'static str = "en";
    pub const DEFAULT_TONE: &'static str = "professional";
    pub const DEFAULT_WORD_COUNT: u32 = 1500;
    pub const DEFAULT_CLOUD_PROVIDER: &'static str = "aws";

    /// 仅指定关键词，其余参数取默认值
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            title: None,
            language: Self::DEFAULT_LANGUAGE.to_string(),
            tone: Self::DEFAULT_TONE.to_string(),
            word_count: Self::DEFAULT_WORD_COUNT,
            include_faq: true,
            cloud_provider: Self::DEFAULT_CLOUD_PROVIDER.to_string(),
            custom_domain: None,
        }
    }
}

/// 生成任务
///
/// 队列中传递的工作单元：目标站点ID加上原始请求参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationJob {
    pub site_id: i32,
    pub params: GenerationParams,
}

impl GenerationJob {
    pub fn new(site_id: i32, params: GenerationParams) -> Self {
        Self { site_id, params }
    }
}
