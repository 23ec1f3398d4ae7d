// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 请求DTO和用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 站点模型、仓库接口和生成服务
pub mod domain;

/// 基础设施模块
///
/// 数据库、内容生成器和指标的具体实现
pub mod infrastructure;

/// 表示层模块
///
/// HTTP路由、处理器和错误映射
pub mod presentation;

/// 队列模块
///
/// 生成任务队列
pub mod queue;

/// 工具模块
///
/// 错误类型和日志初始化
pub mod utils;

/// 工作器模块
///
/// 后台生成任务处理和工作器管理
pub mod workers;
