pub mod config;
pub mod date;
pub mod git;
pub mod input;
pub mod memo;
pub mod output;
pub mod strings;
pub mod theme;
