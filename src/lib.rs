pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod html;
pub mod models;
pub mod page;
pub mod render;
pub mod services;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
pub use config::Config;
pub use error::ClientError;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config)?;

    let viewer = cli
        .user_id
        .map_or_else(|| config.session.viewer(), models::Viewer::user);
    let default_mode = config.search.default_mode;

    match cli.command {
        Commands::List { html } => cli::cmd_list_cafes(&config, viewer, html).await,

        Commands::Search { term, by, html } => {
            let term = term.join(" ");
            cli::cmd_search_cafes(&config, viewer, by.unwrap_or(default_mode), &term, html).await
        }

        Commands::Watch { by, html } => {
            cli::cmd_watch(&config, viewer, by.unwrap_or(default_mode), html).await
        }

        Commands::Add(args) => cli::cmd_add_cafe(&config, args.into()).await,

        Commands::Edit { id, cafe } => cli::cmd_edit_cafe(&config, id, cafe.into()).await,

        Commands::Random { html } => cli::cmd_random_cafe(&config, viewer, html).await,

        Commands::Close { id } => cli::cmd_close_cafe(&config, id).await,

        Commands::Init => {
            let path = cli.config.unwrap_or_else(Config::default_config_path);
            cli::cmd_init(&path)
        }
    }
}

/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// takes precedence over `general.log_level`.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
