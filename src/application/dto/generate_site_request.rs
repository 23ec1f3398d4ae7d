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

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::generation_job::GenerationParams;

/// 站点生成请求数据传输对象
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateSiteRequestDto {
    /// 目标关键词，2到100个字符
    #[validate(length(min = 2, max = 100, message = "keyword must be between 2 and 100 characters"))]
    pub keyword: String,
    /// 站点标题
    pub title: Option<String>,
    /// 内容语言
    #[serde(default = "default_language")]
    pub language: String,
    /// 行文语气
    #[serde(default = "default_tone")]
    pub tone: String,
    /// 目标字数
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    /// 是否包含FAQ
    #[serde(default = "default_include_faq")]
    pub include_faq: bool,
    /// 部署目标
    #[serde(default = "default_cloud_provider")]
    pub cloud_provider: String,
    /// 自定义域名
    pub custom_domain: Option<String>,
}

fn default_language() -> String {
    GenerationParams::DEFAULT_LANGUAGE.to_string()
}

fn default_tone() -> String {
    GenerationParams::DEFAULT_TONE.to_string()
}

fn default_word_count() -> u32 {
    GenerationParams::DEFAULT_WORD_COUNT
}

fn default_include_faq() -> bool {
    true
}

fn default_cloud_provider() -> String {
    GenerationParams::DEFAULT_CLOUD_PROVIDER.to_string()
}

impl GenerateSiteRequestDto {
    /// 只包含关键词的请求，其余字段取默认值
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            title: None,
            language: default_language(),
            tone: default_tone(),
            word_count: default_word_count(),
            include_faq: default_include_faq(),
            cloud_provider: default_cloud_provider(),
            custom_domain: None,
        }
    }
}

impl From<GenerateSiteRequestDto> for GenerationParams {
    fn from(dto: GenerateSiteRequestDto) -> Self {
        Self {
            keyword: dto.keyword,
            title: dto.title,
            language: dto.language,
            tone: dto.tone,
            word_count: dto.word_count,
            include_faq: dto.include_faq,
            cloud_provider: dto.cloud_provider,
            custom_domain: dto.custom_domain,
        }
    }
}
