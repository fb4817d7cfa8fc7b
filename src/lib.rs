pub mod color;
pub mod config;
pub mod host;
pub mod listener;
pub mod schedule;
pub mod sensor;
pub mod signal;
pub mod strip;
