pub mod cafes;

pub use cafes::{CafeClient, FormReply};
