//! Shared data contract between the per-category tables and the generic
//! FSPEC/dispatch engine. Mirrors the "static descriptor consumed by a
//! generic interpreter" split the codec module uses, but item shape is
//! carried as a closed tagged variant instead of a side table of function
//! pointers, per the one-descriptor-per-item contract each category needs.
use crate::domain::DomainRecord;
use crate::error::DecodeError;

/// Maximum number of bits inline fixed-capacity arrays will hold before
/// reporting truncation instead of reallocating (there is no allocator
/// assumption here; capacity is a plain array).
pub const DEFAULT_CAP: usize = 16;

/// Fixed-capacity inline array with a running length, used for repetitive
/// wire structures (BDS register lists, WEC vector lists, …). Exceeding
/// `N` truncates and sets `truncated`, it never grows.
#[derive(Debug, Clone)]
pub struct Capped<T, const N: usize> {
    items: [Option<T>; N],
    len: usize,
    pub truncated: bool,
}

impl<T: Copy, const N: usize> Default for Capped<T, N> {
    fn default() -> Self {
        Self {
            items: [None; N],
            len: 0,
            truncated: false,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Copy + serde::Serialize, const N: usize> serde::Serialize for Capped<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Copy + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de>
    for Capped<T, N>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items: Vec<T> = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        let mut out = Capped::<T, N>::default();
        for item in items.into_iter() {
            out.push(item);
        }
        Ok(out)
    }
}

impl<T: Copy, const N: usize> Capped<T, N> {
    pub fn push(&mut self, value: T) {
        if self.len < N {
            self.items[self.len] = Some(value);
            self.len += 1;
        } else {
            self.truncated = true;
        }
    }

    pub fn as_slice(&self) -> &[Option<T>] {
        &self.items[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items[..self.len].iter().filter_map(|o| o.as_ref())
    }
}

/// Tri-state wire flag: a quality/validity bit that the wire distinguishes
/// from plain absence. Reducing this to `bool` would collapse `False` and
/// `Undefined`, which spec invariants forbid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tres {
    #[default]
    Undefined,
    False,
    True,
}

impl Tres {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Tres::True
        } else {
            Tres::False
        }
    }

    pub fn is_true(self) -> bool {
        matches!(self, Tres::True)
    }
}

/// A value alongside the tri-state quality bit that qualifies it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qualified<T> {
    pub quality: Tres,
    pub value: T,
}

impl<T> Qualified<T> {
    pub fn new(quality: Tres, value: T) -> Self {
        Self { quality, value }
    }
}

/// A pre-sliced buffer of exactly the item's computed length.
pub type ExtractFn = fn(&[u8], &mut DomainRecord) -> Result<(), DecodeError>;

/// A reader that owns its own cursor into `buffer`, starting at `*pos`;
/// used by shapes whose length is not knowable before parsing begins.
pub type ReadFn = fn(&[u8], &mut usize, &mut DomainRecord) -> Result<(), DecodeError>;

/// Shape of one ASTERIX data item: fixed length, FX-chained variable,
/// REP-prefixed repetitive, or a self-cursoring compound/immediate reader.
/// Exactly one of `extract`/`read` is reachable per variant — the type
/// system enforces it instead of a descriptor carrying two optional
/// function pointers.
#[derive(Clone, Copy)]
pub enum Shape {
    Fixed { len: u16, extract: ExtractFn },
    Variable { extract: ExtractFn },
    Repetitive {
        sub_len: u16,
        extract: ExtractFn,
        /// Whether `REP == 0` is a valid (empty) repetition for this item.
        rep0_allowed: bool,
    },
    Compound { read: ReadFn },
    Immediate { read: ReadFn },
}

/// Static shape of one ASTERIX item within one category/version.
#[derive(Clone, Copy)]
pub struct ItemDescriptor {
    pub category: u8,
    pub item_no: &'static str,
    pub shape: Shape,
}

/// Sentinel FRN roles that always use the `Immediate` shape.
pub const REF_INDICATOR: &str = "REF";
pub const SPF_INDICATOR: &str = "SPF";

/// Ordered FRN → item-descriptor mapping for one category/version.
/// Slot 0 is unused; FRNs are 1-based, matching the wire's FSPEC bit order.
pub struct Uap {
    pub max_frn: usize,
    pub max_fspec_len: usize,
    slots: [Option<&'static ItemDescriptor>; Uap::CAPACITY + 1],
}

impl Uap {
    /// Upper bound on FRNs across all implemented categories; individual
    /// UAPs set `max_frn` below this to their own category's value.
    pub const CAPACITY: usize = 40;

    pub const fn empty(max_frn: usize, max_fspec_len: usize) -> Self {
        Self {
            max_frn,
            max_fspec_len,
            slots: [None; Self::CAPACITY + 1],
        }
    }

    pub const fn with_slot(mut self, frn: usize, desc: &'static ItemDescriptor) -> Self {
        self.slots[frn] = Some(desc);
        self
    }

    pub fn slot(&self, frn: usize) -> Option<&'static ItemDescriptor> {
        if frn == 0 || frn > self.max_frn {
            None
        } else {
            self.slots[frn]
        }
    }
}

/// An all-clear FSPEC (no FRN bits set in its first octet, FX clear) is
/// standardized across categories to mean "skip this record" rather than
/// "decode it into an all-`None` record".
pub fn is_empty_fspec(buf: &[u8]) -> bool {
    buf.first().copied().unwrap_or(0) & 0xFE == 0
}
