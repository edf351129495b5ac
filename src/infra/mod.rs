//! Everything involved in turning a raw byte stream into framed records
//! before protocol-level meaning is attached: bit/byte primitives, the
//! generic FSPEC/item engine, DataBlock framing, and the recording-format
//! wrappers records arrive under.
pub mod codec;
pub mod framing;
pub mod wrappers;
