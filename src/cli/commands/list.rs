//! List cafes command handler

use crate::config::Config;
use crate::html::Node;
use crate::models::Viewer;
use crate::page::Container;

pub async fn cmd_list_cafes(config: &Config, viewer: Viewer, html: bool) -> anyhow::Result<()> {
    let controller = super::listing_controller(config, viewer)?;

    if !controller.load_all().await {
        anyhow::bail!("Could not load cafes from {}", config.api.base_url);
    }

    print_container(&controller.container().await, html);
    Ok(())
}

pub fn print_container(container: &Container, html: bool) {
    if html {
        println!("{}", container.to_html());
        return;
    }

    if container.is_empty() {
        println!("No cafes to show.");
        return;
    }

    for block in container.children().iter().filter_map(Node::as_element) {
        if block.attribute("class") == Some("no-results") {
            println!("{}", block.text_content());
            continue;
        }

        let name = block
            .find_all("h2")
            .first()
            .map(|heading| heading.text_content())
            .unwrap_or_default();
        let id = block.attribute("id").unwrap_or_default();

        println!("{name} [{id}]");
        println!("{:-<60}", "");

        for line in block.find_all("p") {
            if let Some(link) = line.find_all("a").first() {
                println!("  Map: {}", link.attribute("href").unwrap_or("#"));
            } else {
                println!("  {}", line.text_content().trim());
            }
        }

        for action in block.find_all("form") {
            println!(
                "  [{}] {} {}",
                action.text_content(),
                action.attribute("method").unwrap_or_default(),
                action.attribute("action").unwrap_or_default()
            );
        }

        println!();
    }
}
