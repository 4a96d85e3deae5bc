pub mod api;
pub mod state;
pub mod ui;
pub mod view_model;
