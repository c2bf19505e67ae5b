pub mod filename;
pub mod manifest;
pub mod sessions;

pub use filename::parse_stem;
pub use manifest::load_manifest;
pub use sessions::{list_sessions, load_session, load_sessions, parse_rows};
