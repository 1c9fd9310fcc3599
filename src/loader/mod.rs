/*!
Everything that turns text on disk into engine state: the config file
(`config.rs`), table-list files (`table_list.rs`), and `LOAD`'s file-list
mode (`file_list.rs`).
*/

pub mod config;
pub mod file_list;
pub mod table_list;

pub use config::EngineConfig;
