#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;

#[cfg(feature = "debug")]
extern crate chrono;
#[cfg(feature = "debug")]
extern crate fern;
#[cfg(feature = "debug")]
extern crate time;

pub mod command;
pub mod config;
pub mod error;
pub mod interactor;
#[cfg(feature = "debug")]
pub mod logging;
pub mod models;
pub mod strategy;
