//! Integration tests for Layer 0: Values
//!
//! Tests for the value model, the identifier codec, and both bridges.

mod codec;
mod generic;
mod native;
