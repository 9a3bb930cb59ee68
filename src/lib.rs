//! typeviz library - type hierarchy analysis and Graphviz rendering.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
