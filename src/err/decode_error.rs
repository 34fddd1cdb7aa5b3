/// Error produced while decoding a buffer into a header, IE, or message.
///
/// # Examples
///
/// ```
/// use gtpv1c::err::DecodeError;
///
/// let e = DecodeError::BufTooShort {
///     what: "GTP header",
///     required_bytes: 8,
///     available_bytes: 3,
/// };
/// assert!(format!("{e}").contains("GTP header"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer ended before a required field could be fully read.
    BufTooShort {
        what: &'static str,
        required_bytes: usize,
        available_bytes: usize,
    },

    /// The message type code on the wire is not present in the dispatcher
    /// table that was used to decode it.
    TypeNotExist { type_code: u8 },

    /// A decode-time inconsistency that is not a length shortfall: a bad
    /// length field, an alternative selector with no matching branch and no
    /// default, or similar structural nonsense.
    BufInvalid { what: &'static str, reason: &'static str },

    /// A template entry declared mandatory did not appear, in order, while
    /// decoding a message's IE sequence.
    MandatoryIeMissing { message: &'static str, field: &'static str },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::BufTooShort {
                what,
                required_bytes,
                available_bytes,
            } => write!(
                f,
                "Not enough data to decode '{what}'. {required_bytes} byte(s) required, but only {available_bytes} available.",
            ),
            DecodeError::TypeNotExist { type_code } => {
                write!(f, "message type code {type_code} is not present in the dispatcher table")
            }
            DecodeError::BufInvalid { what, reason } => {
                write!(f, "invalid '{what}': {reason}")
            }
            DecodeError::MandatoryIeMissing { message, field } => write!(
                f,
                "mandatory IE '{field}' missing from message '{message}'",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
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
                DecodeError::BufTooShort {
                    what: "GTP header",
                    required_bytes: 8,
                    available_bytes: 3,
                }
            ),
            "Not enough data to decode 'GTP header'. 8 byte(s) required, but only 3 available."
        );
        assert_eq!(
            format!("{}", DecodeError::TypeNotExist { type_code: 0x7f }),
            "message type code 127 is not present in the dispatcher table"
        );
        assert_eq!(
            format!(
                "{}",
                DecodeError::MandatoryIeMissing {
                    message: "CreatePDPCtxtReq",
                    field: "NSAPI",
                }
            ),
            "mandatory IE 'NSAPI' missing from message 'CreatePDPCtxtReq'"
        );
    }
}
