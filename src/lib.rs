pub mod error;
pub mod validation;
pub mod input;
pub mod model;
pub mod record;
pub mod directory;
pub mod queries;
pub mod config;
pub mod cli;
