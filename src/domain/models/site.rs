// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::models::generation_job::GenerationParams;

/// 部署成功后写入的固定SEO评分
pub const DEFAULT_SEO_SCORE: i32 = 85;

/// 自动生成域名使用的后缀
pub const GENERATED_DOMAIN_SUFFIX: &str = "auto-seo.app";

/// 站点实体
///
/// 表示一次站点生成请求及其结果。记录由API层以 `Pending` 状态创建，
/// 之后只会被它自己的生成任务修改，永远不会被删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// 站点唯一标识符，由存储层分配
    pub id: i32,
    /// 站点域名，自定义域名或由关键词和时间戳派生
    pub domain: String,
    /// 站点标题
    pub title: String,
    /// 目标关键词
    pub keyword: String,
    /// 生成的HTML文档，任务成功前为空
    pub content: Option<String>,
    /// SEO描述
    pub meta_description: Option<String>,
    /// SEO标签
    pub meta_tags: Option<Value>,
    /// 部署目标标签（aws、gcp等）
    pub cloud_provider: String,
    /// 部署后的访问地址
    pub cloud_url: Option<String>,
    /// 当前状态
    pub status: SiteStatus,
    /// SEO评分
    pub seo_score: i32,
    /// 统计信息：字数和部署时间，或者错误描述
    pub analytics: Value,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 待插入的站点记录
///
/// 尚未分配ID，由仓库的 `create` 写入后返回完整的 [`Site`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewSite {
    pub domain: String,
    pub title: String,
    pub keyword: String,
    pub cloud_provider: String,
    pub created_at: DateTime<FixedOffset>,
}

impl NewSite {
    /// 根据生成参数构造新的站点记录
    ///
    /// 标题缺省时使用关键词，域名缺省时由关键词和 `now` 的时分秒派生
    pub fn from_params(params: &GenerationParams, now: DateTime<Utc>) -> Self {
        Self {
            domain: derive_domain(&params.keyword, params.custom_domain.as_deref(), now),
            title: params
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| params.keyword.clone()),
            keyword: params.keyword.clone(),
            cloud_provider: params.cloud_provider.clone(),
            created_at: now.into(),
        }
    }
}

/// 派生站点域名
///
/// 自定义域名优先；否则为 `{关键词(空格替换为-)}-{HHMMSS}.auto-seo.app`
pub fn derive_domain(keyword: &str, custom_domain: Option<&str>, now: DateTime<Utc>) -> String {
    match custom_domain.map(str::trim).filter(|d| !d.is_empty()) {
        Some(domain) => domain.to_string(),
        None => format!(
            "{}-{}.{}",
            keyword.trim().replace(' ', "-"),
            now.format("%H%M%S"),
            GENERATED_DOMAIN_SUFFIX
        ),
    }
}

/// 站点状态枚举
///
/// 状态转换是单向的：
/// Pending → Generating → Deployed/Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    /// 已创建，等待生成任务执行
    #[default]
    Pending,
    /// 生成任务正在执行
    Generating,
    /// 内容已生成并"部署"
    Deployed,
    /// 生成失败
    Failed,
}

impl SiteStatus {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, SiteStatus::Deployed | SiteStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Pending => "pending",
            SiteStatus::Generating => "generating",
            SiteStatus::Deployed => "deployed",
            SiteStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SiteStatus::Pending),
            "generating" => Ok(SiteStatus::Generating),
            "deployed" => Ok(SiteStatus::Deployed),
            "failed" => Ok(SiteStatus::Failed),
            other => Err(DomainError::ValidationError(format!(
                "unknown site status: {}",
                other
            ))),
        }
    }
}

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 不允许的状态转换
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition { from: SiteStatus, to: SiteStatus },

    /// 输入数据不符合领域规则
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 部署成功时写入的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Deployment {
    /// 渲染后的HTML
    pub content: String,
    /// 访问地址
    pub cloud_url: String,
    /// SEO评分
    pub seo_score: i32,
    /// 生成文本的字数
    pub word_count: usize,
}

impl Site {
    /// 开始生成
    ///
    /// 将状态从 Pending 变更为 Generating
    ///
    /// # 返回值
    ///
    /// * `Ok(Site)` - 状态已变更的站点
    /// * `Err(DomainError)` - 状态转换失败
    pub fn start_generation(mut self) -> Result<Self, DomainError> {
        match self.status {
            SiteStatus::Pending => {
                self.status = SiteStatus::Generating;
                self.touch();
                Ok(self)
            }
            from => Err(DomainError::InvalidStateTransition {
                from,
                to: SiteStatus::Generating,
            }),
        }
    }

    /// 标记部署成功
    ///
    /// 将状态从 Generating 变更为 Deployed，并写入内容、地址、评分和统计信息
    pub fn deploy(mut self, deployment: Deployment) -> Result<Self, DomainError> {
        match self.status {
            SiteStatus::Generating => {
                let now = Utc::now();
                self.content = Some(deployment.content);
                self.cloud_url = Some(deployment.cloud_url);
                self.seo_score = deployment.seo_score;
                self.analytics = json!({
                    "word_count": deployment.word_count,
                    "deployment_time": now.to_rfc3339(),
                });
                self.status = SiteStatus::Deployed;
                self.updated_at = now.into();
                Ok(self)
            }
            from => Err(DomainError::InvalidStateTransition {
                from,
                to: SiteStatus::Deployed,
            }),
        }
    }

    /// 标记生成失败
    ///
    /// 将状态从 Generating 变更为 Failed，错误描述写入 `analytics.error`，
    /// 不保留任何部分内容
    pub fn fail(mut self, error: impl Into<String>) -> Result<Self, DomainError> {
        match self.status {
            SiteStatus::Generating => {
                self.status = SiteStatus::Failed;
                self.content = None;
                self.cloud_url = None;
                self.analytics = json!({ "error": error.into() });
                self.touch();
                Ok(self)
            }
            from => Err(DomainError::InvalidStateTransition {
                from,
                to: SiteStatus::Failed,
            }),
        }
    }

    /// 统计信息中的错误描述
    pub fn error_message(&self) -> Option<&str> {
        self.analytics.get("error").and_then(Value::as_str)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().into();
    }
}
