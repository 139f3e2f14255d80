pub mod authorization;
pub mod commands;
pub mod config;
pub mod content;
pub mod data;
pub mod event_handler;
pub mod pitch_schedule;
pub mod role_policy;
mod utils;
