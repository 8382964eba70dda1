//! Interactive mode command

use crate::interactive::run_dashboard;
use anyhow::Result;
use tracing::debug;

/// Start the full-screen dashboard
pub async fn interactive_command(config_loader: crate::config::CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!(
        start_page = %config.start_page,
        chart_width = config.chart_width,
        max_history = config.max_history,
        "Loaded dashboard configuration"
    );

    run_dashboard(config).await
}
