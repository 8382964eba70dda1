//! Non-interactive page rendering command

use crate::output::{render_page, RenderOptions};
use anyhow::{Context, Result};
use hms_core::{Page, PageRegistry, PageView, RenderContext};
use tracing::{debug, info};

/// Print one page, or every page, as plain text
pub async fn render_command(
    config_loader: crate::config::CliConfigLoader,
    page: Option<String>,
    all: bool,
    width: Option<usize>,
) -> Result<()> {
    let config = config_loader.load().await?;
    let width = width.unwrap_or_else(crate::output::text::terminal_width);
    let opts = RenderOptions::from_config(&config, width);

    let registry = PageRegistry::standard();
    let ctx = RenderContext::default();

    let views: Vec<PageView> = match (all, page) {
        (true, _) => Page::ALL
            .iter()
            .map(|page| {
                registry
                    .render(&page.route_id(), &ctx)
                    .with_context(|| format!("Failed to render page: {}", page))
            })
            .collect::<Result<_>>()?,
        (false, Some(name)) => vec![registry.render_named(&name, &ctx)?],
        (false, None) => vec![registry
            .render(&config.start_page.route_id(), &ctx)
            .with_context(|| format!("Failed to render page: {}", config.start_page))?],
    };

    for (i, view) in views.iter().enumerate() {
        info!("Rendering page: {}", view.page);
        debug!("{} blocks", view.blocks.len());

        if i > 0 {
            println!();
        }
        print!("{}", render_page(view, &opts));
    }

    Ok(())
}
