// src/lib.rs

//! Internal library for appdock – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    launcher::{Launch, ScriptLauncher},
    model::AppRecord,
    resolver::{ResolveError, Resolver},
    store::{AppStore, StoreError},
};
