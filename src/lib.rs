#![forbid(unsafe_code)]

pub mod add_content;
pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod export;
pub mod logging;
pub mod model;
pub mod notify;
pub mod paths;
pub mod sections;
pub mod web;
