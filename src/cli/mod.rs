//! CLI command implementations
//!
//! - `convert`: Case conversion commands (convert, all, list)
//! - `schema`: JSON schema output
//! - `util`: Shared argument and output helpers

pub mod convert;
pub mod schema;
pub mod util;

pub use convert::{cmd_all, cmd_convert, cmd_list};
pub use schema::cmd_schema;
pub use util::collect_args;
