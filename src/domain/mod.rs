pub mod algorithms;
pub mod analyzer;
pub mod descriptor;
pub mod document;
pub mod edge;
pub mod error;
pub mod graph;
pub mod id;
pub mod mask;
pub mod neighborhood;
pub mod ports;
pub mod presentation;
