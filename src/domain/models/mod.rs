// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 站点（site）：一次站点生成请求的持久化记录及其状态机
/// - 生成任务（generation_job）：后台任务携带的参数
pub mod generation_job;
pub mod site;
