// src/engine/mod.rs
pub mod launcher;
pub mod model;
pub mod resolver;
pub mod store;
