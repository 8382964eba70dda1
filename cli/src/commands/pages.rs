//! Page listing command

use anyhow::Result;
use hms_core::PageRegistry;
use tracing::info;

/// Show the pages available from the sidebar
pub async fn pages_command() -> Result<()> {
    info!("Listing dashboard pages");

    println!("🏥 Hospital Management System\n");

    let registry = PageRegistry::standard();
    for (i, route) in registry.config().routes().enumerate() {
        println!("{}. {} ({})", i + 1, route.name, route.id);
        if let Some(description) = &route.description {
            println!("   {}\n", description);
        }
    }

    println!("💡 Open a page with `hms render <page>` or `hms --page <page>`");

    Ok(())
}
