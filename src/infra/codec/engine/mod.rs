//! Generic FSPEC walker and item dispatcher. Every category record is
//! decoded by the same two functions here, driven entirely by its `Uap`
//! table; category modules contribute descriptors, not decoding logic.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::DomainRecord;
use crate::error::DecodeError;

/// Hard ceiling on FSPEC octets a single record may carry: a FSPEC longer
/// than this is a framing error, not a wide record.
const MAX_FSPEC_OCTETS: usize = 8;

/// One FSPEC bit, resolved to its FRN and set/clear state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FspecBit {
    frn: usize,
    set: bool,
}

/// Walk the FX-chained FSPEC octets starting at `buffer[*offset]`, calling
/// `on_bit` for every bit position up to and including the last FX-less
/// octet. Returns the number of FSPEC octets consumed.
fn walk_fspec(
    cat: u8,
    buffer: &[u8],
    offset: usize,
    max_len: usize,
    mut on_bit: impl FnMut(FspecBit),
) -> Result<usize, DecodeError> {
    let mut frn = 0usize;
    let mut octet_index = 0usize;

    loop {
        if octet_index >= max_len || octet_index >= MAX_FSPEC_OCTETS {
            return Err(DecodeError::FspecOverlong {
                cat,
                offset,
                max_len,
            });
        }
        let Some(&octet) = buffer.get(offset + octet_index) else {
            return Err(DecodeError::ItemOverrun {
                cat,
                offset: offset + octet_index,
                payload_len: buffer.len(),
            });
        };

        for bit_pos in (1..=7).rev() {
            frn += 1;
            let set = (octet >> bit_pos) & 1 == 1;
            on_bit(FspecBit { frn, set });
        }

        octet_index += 1;
        let fx = octet & 1 == 1;
        if !fx {
            return Ok(octet_index);
        }
    }
}

fn decode_record_into(
    cat: u8,
    uap: &Uap,
    buffer: &[u8],
    record_len: usize,
    mut record: DomainRecord,
) -> Result<(DomainRecord, usize), DecodeError> {
    let payload = &buffer[..record_len.min(buffer.len())];
    let mut set_frns: heapless_frns::FrnList = heapless_frns::FrnList::new();

    let fspec_len = walk_fspec(cat, payload, 0, uap.max_fspec_len, |bit| {
        if bit.set {
            set_frns.push(bit.frn);
        }
    })?;

    let mut offset = fspec_len;
    for &frn in set_frns.as_slice() {
        let desc = uap
            .slot(frn)
            .ok_or(DecodeError::UnknownFrn { cat, frn })?;
        offset = dispatch_item(cat, desc, payload, offset, &mut record)?;
    }

    Ok((record, offset))
}

/// Decode one record's data items into `record`, starting right after its
/// FSPEC. `buffer` holds at least the record's bytes (it may also hold
/// trailing records still to be decoded); `record_len` bounds how far this
/// call is allowed to read (item loop). Category modules
/// construct their own empty `DomainRecord` variant and pass it in here.
/// Returns the decoded record together with the number of bytes the FSPEC
/// and its items actually consumed, so the record-loop caller (which has no
/// length prefix of its own to go by) knows where the next record starts.
pub fn decode_items_into(
    cat: u8,
    uap: &Uap,
    buffer: &[u8],
    record_len: usize,
    record: DomainRecord,
) -> Result<(DomainRecord, usize), DecodeError> {
    decode_record_into(cat, uap, buffer, record_len, record)
}

fn dispatch_item(
    cat: u8,
    desc: &ItemDescriptor,
    buffer: &[u8],
    offset: usize,
    record: &mut DomainRecord,
) -> Result<usize, DecodeError> {
    match desc.shape {
        Shape::Fixed { len, extract } => {
            let end = offset + len as usize;
            let slice = buffer.get(offset..end).ok_or(DecodeError::ItemOverrun {
                cat,
                offset,
                payload_len: buffer.len(),
            })?;
            extract(slice, record)?;
            Ok(end)
        }
        Shape::Variable { extract } => {
            let end = scan_fx_chain(cat, desc.item_no, buffer, offset)?;
            let slice = &buffer[offset..end];
            extract(slice, record)?;
            Ok(end)
        }
        Shape::Repetitive {
            sub_len,
            extract,
            rep0_allowed,
        } => {
            let rep = *buffer
                .get(offset)
                .ok_or(DecodeError::ItemOverrun {
                    cat,
                    offset,
                    payload_len: buffer.len(),
                })? as usize;
            if rep == 0 && !rep0_allowed {
                return Err(DecodeError::ZeroRepetitionForbidden {
                    cat,
                    item_no: desc.item_no,
                });
            }
            let mut cursor = offset + 1;
            for _ in 0..rep {
                let end = cursor + sub_len as usize;
                let slice = buffer.get(cursor..end).ok_or(DecodeError::ItemOverrun {
                    cat,
                    offset: cursor,
                    payload_len: buffer.len(),
                })?;
                extract(slice, record)?;
                cursor = end;
            }
            Ok(cursor)
        }
        Shape::Compound { read } | Shape::Immediate { read } => {
            let mut cursor = offset;
            read(buffer, &mut cursor, record)?;
            Ok(cursor)
        }
    }
}

/// Scan a variable-length item's own FX chain: the last octet of each
/// group of `unit` has bit 0 clear. Most variable items are
/// single-octet-unit FX chains (bit 0 of every octet is FX); that is what
/// this implements.
fn scan_fx_chain(
    cat: u8,
    item_no: &'static str,
    buffer: &[u8],
    offset: usize,
) -> Result<usize, DecodeError> {
    let mut cursor = offset;
    loop {
        let &octet = buffer
            .get(cursor)
            .ok_or(DecodeError::ItemOverrun {
                cat,
                offset: cursor,
                payload_len: buffer.len(),
            })?;
        cursor += 1;
        if octet & 1 == 0 {
            return Ok(cursor);
        }
        if cursor - offset > 16 {
            return Err(DecodeError::FxChainUnterminated { cat, item_no });
        }
    }
}

/// Small fixed-capacity FRN accumulator; a data block record has at most
/// `Uap::CAPACITY` FRNs, so no allocation is needed.
mod heapless_frns {
    use crate::core::Uap;

    pub struct FrnList {
        items: [usize; Uap::CAPACITY],
        len: usize,
    }

    impl FrnList {
        pub fn new() -> Self {
            Self {
                items: [0; Uap::CAPACITY],
                len: 0,
            }
        }

        pub fn push(&mut self, frn: usize) {
            if self.len < self.items.len() {
                self.items[self.len] = frn;
                self.len += 1;
            }
        }

        pub fn as_slice(&self) -> &[usize] {
            &self.items[..self.len]
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
