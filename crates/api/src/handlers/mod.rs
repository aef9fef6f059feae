pub mod assets;
pub mod chains;
pub mod common;
pub mod health;
pub mod paths;

pub use assets::{get_asset, list_assets};
pub use chains::{get_chain, get_chain_assets, get_endpoints, list_chains};
pub use health::health;
pub use paths::{filter_paths, get_path, list_path_names, list_paths};
