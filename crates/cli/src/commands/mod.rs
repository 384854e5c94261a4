pub mod ask;
pub mod classify;
pub mod config_cmd;
pub mod serve;
