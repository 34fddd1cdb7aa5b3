/// Error produced while encoding a header, IE, or message tree to bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum EncodeError {
    /// A field's value does not fit in its declared bit width
    /// (e.g. a 9-bit value written into an 8-bit field).
    ValueOutOfRange {
        what: &'static str,
        bits: u32,
        value: u64,
    },

    /// The destination slice is too small to hold the encoded output.
    DestinationTooSmall { required_bytes: usize, available_bytes: usize },
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::ValueOutOfRange { what, bits, value } => write!(
                f,
                "value {value} does not fit in the {bits}-bit field '{what}'",
            ),
            EncodeError::DestinationTooSmall {
                required_bytes,
                available_bytes,
            } => write!(
                f,
                "destination buffer has {available_bytes} byte(s), but {required_bytes} are required",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;

    #[test]
    fn display() {
        assert_eq!(
            format!(
                "{}",
                EncodeError::ValueOutOfRange {
                    what: "NSAPI",
                    bits: 4,
                    value: 20,
                }
            ),
            "value 20 does not fit in the 4-bit field 'NSAPI'"
        );
    }
}
