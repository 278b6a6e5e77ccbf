#![allow(clippy::implicit_hasher)]

mod logging;

pub mod api;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod models;
pub mod renderer;

pub use components::app::App;
