pub mod fetch;
pub mod init;
pub mod list;
pub mod repl;
pub mod search;
