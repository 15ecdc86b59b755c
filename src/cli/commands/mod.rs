mod add;
mod close;
mod edit;
mod init;
mod list;
mod random;
mod search;
mod watch;

pub use add::cmd_add_cafe;
pub use close::cmd_close_cafe;
pub use edit::cmd_edit_cafe;
pub use init::cmd_init;
pub use list::{cmd_list_cafes, print_container};
pub use random::cmd_random_cafe;
pub use search::cmd_search_cafes;
pub use watch::cmd_watch;

use std::sync::Arc;

use crate::clients::CafeClient;
use crate::config::Config;
use crate::models::Viewer;
use crate::services::ListingController;

fn listing_controller(config: &Config, viewer: Viewer) -> anyhow::Result<ListingController> {
    let client = CafeClient::new(&config.api)?;
    Ok(ListingController::with_debounce(
        Arc::new(client),
        viewer,
        config.search.debounce(),
    ))
}

/// Client with a session, if credentials are configured.
async fn logged_in_client(config: &Config) -> anyhow::Result<CafeClient> {
    let client = CafeClient::new(&config.api)?;

    if let Some((email, password)) = config.session.credentials() {
        client.login(email, password).await?;
    } else {
        tracing::warn!("No session credentials configured; the backend may refuse this request");
    }

    Ok(client)
}
