#![allow(non_snake_case)]

use std::fmt::Display;

use tracing::log;

pub mod app_state;
pub mod config_handler;
pub mod form_controller;
pub mod models;
pub mod renderer;
pub mod roster_client;
pub mod roster_service;
pub mod ui_service;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
