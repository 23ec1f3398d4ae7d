// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 在API请求和领域模型之间传输数据
pub mod dashboard_response;
pub mod generate_site_request;
pub mod site_response;
