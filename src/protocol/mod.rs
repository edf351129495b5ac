//! ASTERIX category decoders: one `Uap` and one
//! `decode_record` per implemented category, tied together by
//! `categories::decode_data_block`.
pub mod categories;
