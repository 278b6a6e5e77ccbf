#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod map_canvas;
pub mod map_view;
pub mod route_form;
pub mod status_panel;
