pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod credentials;
pub mod decode;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod prompts;
pub mod report;
pub mod schema;
pub mod service;
pub mod session;
pub mod simulate;
pub mod spinner;
pub mod types;
