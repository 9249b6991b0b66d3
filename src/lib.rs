pub mod cli;
pub mod config;
pub mod logging;
pub mod selection;
pub mod session;
pub mod surface;
