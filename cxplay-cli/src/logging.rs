//! CLI logging initialization
//!
//! tracing-subscriber with per-target filtering. Logs go to stderr so the
//! panel surface on stdout stays clean.

use std::io;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Initialize the log system with the given per-target configuration
pub fn init(log_config: &LogConfig) {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("cxplay::module", log_config.level_for("cxplay::module"))
        .with_target("cxplay::runner", log_config.level_for("cxplay::runner"))
        .with_target("cxplay::cli", log_config.global);

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_filter(targets);

    tracing_subscriber::registry().with(stderr_layer).init();
}
