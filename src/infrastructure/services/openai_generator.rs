// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::config::settings::GeneratorSettings;
use crate::domain::services::content_generator::{
    ContentGenerator, ContentRequest, GeneratorError,
};

/// OpenAI兼容的内容生成器
///
/// 调用 `{api_base_url}/chat/completions`，返回第一条候选消息的文本
///
/// # 配置
///
/// - `generator.api_key` - API密钥，为空时每次调用都会失败
/// - `generator.api_base_url` - API基础URL
/// - `generator.timeout_secs` - 单次请求超时
pub struct OpenAiContentGenerator {
    client: Client,
    api_key: Option<String>,
    api_base_url: String,
}

impl OpenAiContentGenerator {
    pub fn new(settings: &GeneratorSettings) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("AutoSEO/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ContentGenerator for OpenAiContentGenerator {
    async fn generate(&self, request: &ContentRequest) -> Result<String, GeneratorError> {
        let api_key = self.api_key.as_ref().ok_or(GeneratorError::NotConfigured)?;

        let request_body = json!({
            "model": request.model,
            "messages": [
                {
                    "role": "system",
                    "content": request.system_prompt
                },
                {
                    "role": "user",
                    "content": request.user_prompt
                }
            ],
            "temperature": request.temperature
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        debug!(model = %request.model, "Sending content generation request");

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Api { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                GeneratorError::InvalidResponse("missing choices[0].message.content".to_string())
            })
    }
}
