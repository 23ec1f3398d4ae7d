// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 内容生成请求
///
/// 传给外部语言模型的完整输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    /// 系统指令，描述期望的SEO内容
    pub system_prompt: String,
    /// 用户指令，点明关键词
    pub user_prompt: String,
    /// 模型名称
    pub model: String,
    /// 采样温度
    pub temperature: f32,
}

/// 内容生成错误
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// 未配置API密钥
    #[error("Content generator API key not configured")]
    NotConfigured,

    /// 请求发送失败（网络错误、超时等）
    #[error("Content generator request failed: {0}")]
    Request(String),

    /// 服务端返回非成功状态码
    #[error("Content generator returned error: {status} - {body}")]
    Api { status: u16, body: String },

    /// 响应格式不符合预期
    #[error("Invalid response from content generator: {0}")]
    InvalidResponse(String),
}

/// 内容生成器特质
///
/// 返回的文本被视为不透明的纯文本，不做任何结构化解析
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &ContentRequest) -> Result<String, GeneratorError>;
}
