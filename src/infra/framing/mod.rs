//! DataBlock framing: the 3-octet `CAT | LEN_HI | LEN_LO`
//! header and the record loop over its payload. Grounded on the Fast
//! Packet reassembly session shape (`do_frame.cpp`/`do_netto.cpp`): both
//! walk a length-prefixed stream of frames/records one at a time, handing
//! each complete unit to a callback rather than collecting them.
use crate::error::DecodeError;

/// One ASTERIX data block: its category and the record-loop payload that
/// follows the 3-octet header.
#[derive(Debug, Clone, Copy)]
pub struct DataBlock<'a> {
    pub category: u8,
    pub payload: &'a [u8],
}

/// Parse the next `DataBlock` off `input`, returning it and the remaining
/// unconsumed bytes. `LEN` (two octets, big-endian) counts the whole block
/// including its own 3-octet header.
pub fn next_data_block(input: &[u8]) -> Result<(DataBlock<'_>, &[u8]), DecodeError> {
    let &[cat, len_hi, len_lo, ref rest @ ..] = input else {
        return Err(DecodeError::BlockTooShort {
            cat: input.first().copied().unwrap_or(0),
            len: input.len() as u16,
        });
    };
    let len = crate::infra::codec::bits::make_u16(len_hi, len_lo) as usize;
    if len < 3 {
        return Err(DecodeError::BlockTooShort {
            cat,
            len: len as u16,
        });
    }
    let payload_len = len - 3;
    if rest.len() < payload_len {
        return Err(DecodeError::ItemOverrun {
            cat,
            offset: 3,
            payload_len: rest.len(),
        });
    }
    let (payload, remainder) = rest.split_at(payload_len);
    Ok((DataBlock { category: cat, payload }, remainder))
}

/// Walk every `DataBlock` in `input` in order, calling `on_block` for each.
/// Stops at the first error unless the caller's `on_block` swallows it; an
/// empty tail after the last well-formed block is not an error, since
/// trailing alignment padding is tolerated only when it is itself empty.
pub fn for_each_data_block<'a>(
    mut input: &'a [u8],
    mut on_block: impl FnMut(DataBlock<'a>) -> Result<(), DecodeError>,
) -> Result<(), DecodeError> {
    while !input.is_empty() {
        let (block, rest) = next_data_block(input)?;
        on_block(block)?;
        input = rest;
    }
    Ok(())
}

/// Walk the length-implicit records inside one data block's payload.
/// Unlike the outer data block, individual records carry no length prefix
/// of their own: `record_len` must be derived from the record's own FSPEC
/// plus its items as it is decoded, so this hands the whole remaining
/// payload to `on_record` and trusts it to report how much it consumed.
pub fn for_each_record<'a>(
    mut payload: &'a [u8],
    mut on_record: impl FnMut(&'a [u8]) -> Result<usize, DecodeError>,
) -> Result<(), DecodeError> {
    while !payload.is_empty() {
        let consumed = on_record(payload)?;
        if consumed == 0 || consumed > payload.len() {
            return Err(DecodeError::ItemOverrun {
                cat: 0,
                offset: 0,
                payload_len: payload.len(),
            });
        }
        payload = &payload[consumed..];
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
