use crate::config::Config;
use crate::models::{SearchMode, SearchQuery, Viewer};

pub async fn cmd_search_cafes(
    config: &Config,
    viewer: Viewer,
    mode: SearchMode,
    term: &str,
    html: bool,
) -> anyhow::Result<()> {
    let query = SearchQuery::new(mode, term);
    println!("Searching by {mode}: {}", query.term);

    let controller = super::listing_controller(config, viewer)?;

    if !controller.search(query).await {
        anyhow::bail!("Search failed against {}", config.api.base_url);
    }

    super::print_container(&controller.container().await, html);
    Ok(())
}
