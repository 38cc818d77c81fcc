pub mod config;
pub mod loader;
pub mod server;
pub mod trie;

pub use trie::PrefixIndex;
