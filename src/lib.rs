//! Opinionate client library
//!
//! Client-side state and controllers for the Opinionate topic voting
//! service: alert and loading-indicator state, the REST gateway, and the
//! controllers that orchestrate fetch/submit/vote flows. A renderer (the
//! CLI binary here) reads controller state between actions; all mutation
//! happens inside response handlers.

pub mod alert;
pub mod config;
pub mod controllers;
pub mod gateway;
pub mod loading;
pub mod models;
pub mod routes;
pub mod upload;
