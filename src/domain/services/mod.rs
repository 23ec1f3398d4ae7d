// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 内容生成（content_generator）：外部语言模型的抽象
/// - 站点渲染（site_renderer）：把生成文本变成静态HTML
/// - 站点生成（generation_service）：编排一次完整的生成任务
pub mod content_generator;
pub mod generation_service;
pub mod site_renderer;
