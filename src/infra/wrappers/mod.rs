//! Recording/transport wrappers around a raw ASTERIX byte stream, grounded
//! on `do_netto.cpp`/`do_rff.cpp`: both strip a stream-specific envelope
//! off each unit before handing the bare DataBlock bytes to the decoder.
use crate::error::DecodeError;

/// A source that yields one DataBlock-framed chunk at a time, stripping
/// whatever transport envelope it was recorded under.
pub trait FrameSource {
    /// Return the next bare DataBlock chunk, or `None` at end of input.
    fn next_frame<'a>(&mut self, input: &'a [u8]) -> Result<Option<(&'a [u8], &'a [u8])>, DecodeError>;
}

/// "Netto" format: the raw DataBlock stream with no added envelope at all
/// (default). `next_frame` hands back the whole remaining
/// input as one frame, since DataBlock boundaries are self-describing via
/// their own LEN field.
#[derive(Debug, Default, Clone, Copy)]
pub struct NettoWrapper;

impl FrameSource for NettoWrapper {
    fn next_frame<'a>(&mut self, input: &'a [u8]) -> Result<Option<(&'a [u8], &'a [u8])>, DecodeError> {
        if input.is_empty() {
            Ok(None)
        } else {
            Ok(Some((input, &input[input.len()..])))
        }
    }
}

/// COMSOFT RFF recording format: each unit is prefixed with a 4-octet
/// big-endian length and, when `with_sequence_number` is set, a 2-octet
/// sequence counter immediately after it.
#[derive(Debug, Clone, Copy)]
pub struct RffWrapper {
    pub with_sequence_number: bool,
}

impl RffWrapper {
    pub fn new(with_sequence_number: bool) -> Self {
        Self {
            with_sequence_number,
        }
    }
}

impl FrameSource for RffWrapper {
    fn next_frame<'a>(&mut self, input: &'a [u8]) -> Result<Option<(&'a [u8], &'a [u8])>, DecodeError> {
        if input.is_empty() {
            return Ok(None);
        }
        let header_len = if self.with_sequence_number { 6 } else { 4 };
        if input.len() < header_len {
            return Err(DecodeError::ItemOverrun {
                cat: 0,
                offset: 0,
                payload_len: input.len(),
            });
        }
        let len = crate::infra::codec::bits::make_u32(input[0], input[1], input[2], input[3]) as usize;
        let body_start = header_len;
        let body_end = body_start
            .checked_add(len)
            .filter(|&end| end <= input.len())
            .ok_or(DecodeError::ItemOverrun {
                cat: 0,
                offset: body_start,
                payload_len: input.len(),
            })?;
        Ok(Some((&input[body_start..body_end], &input[body_end..])))
    }
}

/// SASS-C IOSS multiplexed recording format: each unit carries a 1-octet
/// channel/board tag plus a 2-octet big-endian length ahead of the bare
/// DataBlock bytes. Only the default input channel is surfaced; other
/// channels (radar command/control, housekeeping) are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct IossWrapper {
    input_channel: u8,
}

impl IossWrapper {
    pub fn new(input_channel: u8) -> Self {
        Self { input_channel }
    }
}

impl FrameSource for IossWrapper {
    fn next_frame<'a>(&mut self, input: &'a [u8]) -> Result<Option<(&'a [u8], &'a [u8])>, DecodeError> {
        let mut cursor = input;
        loop {
            if cursor.is_empty() {
                return Ok(None);
            }
            if cursor.len() < 3 {
                return Err(DecodeError::ItemOverrun {
                    cat: 0,
                    offset: 0,
                    payload_len: cursor.len(),
                });
            }
            let channel = cursor[0];
            let len = crate::infra::codec::bits::make_u16(cursor[1], cursor[2]) as usize;
            let body_end = 3usize
                .checked_add(len)
                .filter(|&end| end <= cursor.len())
                .ok_or(DecodeError::ItemOverrun {
                    cat: 0,
                    offset: 3,
                    payload_len: cursor.len(),
                })?;
            let body = &cursor[3..body_end];
            let rest = &cursor[body_end..];
            if channel == self.input_channel {
                return Ok(Some((body, rest)));
            }
            cursor = rest;
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
