//! This module defines the maze and provides functions for building and querying it.

pub mod builder;
pub mod direction;
pub mod graph;
pub mod line;
pub mod parser;
