//! Integration tests for Layer 1: Field paths
//!
//! Tests for path construction, the equality law, and fresh-name generation.

mod algebra;
mod fresh;
