// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// 协调领域对象完成具体的业务操作
pub mod create_site;
pub mod dashboard;
