//! Bit/byte primitives and the generic FSPEC/item decoding engine.
pub mod bits;
pub mod engine;
