// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 领域层抽象接口的技术实现：
/// - 数据库（database）：连接池和实体映射
/// - 指标（metrics）：Prometheus导出
/// - 仓库实现（repositories）：站点仓库
/// - 服务（services）：OpenAI内容生成器
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod services;
