use crate::clients::CafeClient;
use crate::config::Config;
use crate::models::{Listing, Viewer};
use crate::page::Container;
use crate::render::render_into;

pub async fn cmd_random_cafe(config: &Config, viewer: Viewer, html: bool) -> anyhow::Result<()> {
    let client = CafeClient::new(&config.api)?;
    let cafe = client.random().await?;

    let mut container = Container::default();
    render_into(&mut container, &Listing::Cafes(vec![cafe]), viewer);
    super::print_container(&container, html);

    Ok(())
}
