//! Per-category reference-document edition selection. A
//! category that has changed its UAP across editions (Cat 011 is the
//! worked example) compiles one `Uap` table per edition it supports and
//! picks between them once, before decoding starts — items themselves do
//! not carry per-version branches.
use crate::error::DecodeError;

/// A `"major.minor[tag]"` reference-document edition string, parsed once
/// and compared numerically on `major`/`minor` rather than lexically
/// (`"1.10" > "1.9"`). A handful of editions carry a non-numeric suffix on
/// top of the numeric minor (Cat 011's `"0.14Sensis"`, the Inn Valley
/// modification of edition 0.14); `tag` records which one, distinct from
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceVersion {
    major: u16,
    minor: u16,
    tag: VersionTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum VersionTag {
    None,
    Sensis,
}

impl ReferenceVersion {
    pub fn parse(cat: u8, text: &str) -> Result<Self, DecodeError> {
        let unknown = || DecodeError::UnknownVersion {
            cat,
            text: text.to_string(),
        };

        let mut parts = text.splitn(2, '.');
        let major: u16 = parts.next().unwrap_or("").parse().map_err(|_| unknown())?;
        let minor_field = parts.next().unwrap_or("0");
        let digits_end = minor_field
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(minor_field.len());
        let (minor_digits, suffix) = minor_field.split_at(digits_end);
        let minor: u16 = minor_digits.parse().map_err(|_| unknown())?;
        let tag = match suffix {
            "" => VersionTag::None,
            "Sensis" => VersionTag::Sensis,
            _ => return Err(unknown()),
        };
        Ok(Self { major, minor, tag })
    }

    /// Whether this is the "0.14 Sensis: Inn Valley modification" edition
    /// Cat 011's I011/042 widens to an 8-byte pair of 32-bit coordinates for.
    pub fn is_sensis(&self) -> bool {
        self.tag == VersionTag::Sensis
    }
}

/// Resolve the edition to use for `category`: the config's explicit pin if
/// set, otherwise `default`.
pub fn resolve<'a>(
    cat: u8,
    configured: Option<&'a str>,
    default: &'a str,
) -> Result<ReferenceVersion, DecodeError> {
    ReferenceVersion::parse(cat, configured.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_minor() {
        let v = ReferenceVersion::parse(11, "1.3").unwrap();
        assert_eq!(
            v,
            ReferenceVersion {
                major: 1,
                minor: 3,
                tag: VersionTag::None
            }
        );
    }

    #[test]
    fn numeric_minor_ordering_beats_lexical() {
        let older = ReferenceVersion::parse(11, "1.9").unwrap();
        let newer = ReferenceVersion::parse(11, "1.10").unwrap();
        assert!(newer > older);
    }

    #[test]
    fn unparseable_version_is_rejected() {
        let err = ReferenceVersion::parse(11, "nope").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVersion { cat: 11, .. }));
    }

    #[test]
    fn sensis_suffix_on_minor_is_recognized() {
        let v = ReferenceVersion::parse(11, "0.14Sensis").unwrap();
        assert!(v.is_sensis());
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 14);
    }

    #[test]
    fn sensis_tag_does_not_disturb_numeric_comparison_with_its_own_minor() {
        let plain = ReferenceVersion::parse(11, "0.14").unwrap();
        let sensis = ReferenceVersion::parse(11, "0.14Sensis").unwrap();
        assert!(!plain.is_sensis());
        assert_eq!(plain.major, sensis.major);
        assert_eq!(plain.minor, sensis.minor);
    }

    #[test]
    fn unrecognized_minor_suffix_is_rejected() {
        let err = ReferenceVersion::parse(11, "0.14Bogus").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVersion { cat: 11, .. }));
    }

    #[test]
    fn resolve_prefers_configured_over_default() {
        let v = resolve(11, Some("1.3"), "1.2").unwrap();
        assert_eq!(v, ReferenceVersion::parse(11, "1.3").unwrap());
        let v = resolve(11, None, "1.2").unwrap();
        assert_eq!(v, ReferenceVersion::parse(11, "1.2").unwrap());
    }
}
