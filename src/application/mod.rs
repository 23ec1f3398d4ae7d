// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 请求DTO和用例实现，连接表示层与领域层
pub mod dto;
pub mod usecases;
