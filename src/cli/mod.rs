//! Subcommands for browsing, searching and maintaining the cafe directory.
//! Logging goes to stderr; each command prints its result on stdout.

mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::SearchMode;
use crate::services::CafeDraft;

/// cafe-directory - browse, search and add cafes
#[derive(Parser, Debug)]
#[command(name = "cafe-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Render as this user id instead of `session.user_id`
    #[arg(long, global = true)]
    pub user_id: Option<i32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and show every cafe
    #[command(alias = "ls")]
    List {
        /// Print the container markup instead of text
        #[arg(long)]
        html: bool,
    },

    /// Search cafes by name or location
    #[command(alias = "s")]
    Search {
        #[arg(required = true)]
        term: Vec<String>,
        /// name or loc (default: `search.default_mode`)
        #[arg(long)]
        by: Option<SearchMode>,
        #[arg(long)]
        html: bool,
    },

    /// Treat each stdin line as search-box input and re-render as results arrive
    Watch {
        #[arg(long)]
        by: Option<SearchMode>,
        #[arg(long)]
        html: bool,
    },

    /// Submit the add-cafe form
    #[command(alias = "a")]
    Add(AddArgs),

    /// Replace every field of an existing cafe (author or admin only)
    Edit {
        /// Cafe id
        id: i32,
        #[command(flatten)]
        cafe: AddArgs,
    },

    /// Show one cafe picked at random
    Random {
        #[arg(long)]
        html: bool,
    },

    /// Report a cafe as closed (admin only)
    Close {
        /// Cafe id
        id: i32,
    },

    /// Create default config file
    Init,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub map_url: String,
    #[arg(long)]
    pub img_url: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub seats: String,
    /// Price number, e.g. 2.80
    #[arg(long)]
    pub price: String,
    /// Currency symbol, e.g. £
    #[arg(long)]
    pub currency: String,
    #[arg(long)]
    pub wifi: bool,
    #[arg(long)]
    pub sockets: bool,
    #[arg(long)]
    pub toilet: bool,
    #[arg(long)]
    pub calls: bool,
}

impl From<AddArgs> for CafeDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            map_url: args.map_url,
            img_url: args.img_url,
            location: args.location,
            seats: args.seats,
            price: args.price,
            currency: args.currency,
            has_wifi: args.wifi,
            has_sockets: args.sockets,
            has_toilet: args.toilet,
            can_take_calls: args.calls,
        }
    }
}

pub use commands::*;
