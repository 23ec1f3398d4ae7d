// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：站点记录与生成任务
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：内容生成、渲染和任务编排
///
/// 领域层不依赖任何具体的存储或网络实现。
pub mod models;
pub mod repositories;
pub mod services;
