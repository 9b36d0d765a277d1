// src/core.rs
pub mod cleaner;
pub mod counter;
pub mod scanner;
