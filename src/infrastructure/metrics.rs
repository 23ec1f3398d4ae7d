// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化Prometheus指标导出
///
/// 监听地址无效或端口被占用时只记录警告，不影响服务启动
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "site_generation_requests_total",
        "Total number of site generation requests accepted"
    );
    describe_counter!(
        "site_generation_completed_total",
        "Total number of sites deployed"
    );
    describe_counter!(
        "site_generation_failed_total",
        "Total number of site generations that failed"
    );
    describe_histogram!(
        "site_generation_duration_seconds",
        "Duration of site generation jobs in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}
