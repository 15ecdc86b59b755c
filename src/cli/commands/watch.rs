//! Interactive search: stdin lines stand in for search-box input events.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{SearchMode, Viewer};
use crate::page::SearchBox;

/// How long to keep listening for results after stdin closes.
const SETTLE_AFTER_EOF: Duration = Duration::from_secs(2);

pub async fn cmd_watch(
    config: &Config,
    viewer: Viewer,
    mode: SearchMode,
    html: bool,
) -> anyhow::Result<()> {
    let controller = super::listing_controller(config, viewer)?;
    let by_name = mode == SearchMode::Name;
    let settle = config.search.debounce() + SETTLE_AFTER_EOF;

    let mut renders = controller.subscribe();
    controller.load_all().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut search_box = SearchBox::new("", by_name);

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line? {
                Some(text) => {
                    search_box.value = text;
                    controller.on_search_input(&search_box);
                }
                None => stdin_open = false,
            },
            event = renders.recv() => match event {
                Ok(event) => {
                    debug!(generation = event.generation, trigger = ?event.trigger, "Rendered");
                    if html {
                        println!("{}", search_box.to_element().to_html());
                    }
                    super::print_container(&controller.container().await, html);
                }
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Missed render notifications"),
                Err(RecvError::Closed) => break,
            },
            () = tokio::time::sleep(settle), if !stdin_open => break,
            result = signal::ctrl_c() => {
                result?;
                break;
            }
        }
    }

    Ok(())
}
