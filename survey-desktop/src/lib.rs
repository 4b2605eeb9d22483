#![warn(clippy::all, rust_2018_idioms)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod config;
pub mod feed;
pub mod insights;
pub mod services;
pub mod state;

pub use app::SurveyApp;
