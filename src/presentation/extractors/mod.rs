// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 包装axum的内置提取器，解析失败时统一返回 `{"detail": ...}` 错误体
pub mod api_json;
pub mod site_id;

pub use api_json::ApiJson;
pub use site_id::SiteId;
