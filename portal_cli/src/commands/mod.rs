//! CLI subcommand implementations.

pub mod admin;
pub mod calendar;
pub mod login;
pub mod student;
pub mod teacher;
