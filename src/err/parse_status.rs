/// Outcome of a top-level [`crate::dispatch::parse_sgsn`] /
/// [`crate::dispatch::parse_ggsn`] call.
///
/// Unlike [`crate::err::DecodeError`], this is not an error type: it is
/// returned alongside the (possibly partial) decoded message so callers can
/// distinguish a clean decode from a degraded one without matching on an
/// `Err`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseStatus {
    /// The message decoded cleanly; every mandatory IE was present in order.
    Ok,

    /// Strict decode failed because a mandatory IE was missing; the parser
    /// retried with mandatory-IE enforcement disabled and that retry
    /// succeeded. The returned message contains whatever was readable, with
    /// the missing field(s) left `None`.
    MandatoryIeMissing,

    /// The buffer ended before the header could be fully read.
    BufTooShort,

    /// The message type code on the wire has no entry in the dispatch table
    /// that was used.
    TypeNotExist,

    /// A decode-time inconsistency other than a length shortfall, including
    /// the case where even the permissive retry failed.
    BufInvalid,
}

impl ParseStatus {
    /// `true` for [`ParseStatus::Ok`] and [`ParseStatus::MandatoryIeMissing`],
    /// the two statuses for which a (possibly partial) message is returned.
    pub fn has_message(self) -> bool {
        matches!(self, ParseStatus::Ok | ParseStatus::MandatoryIeMissing)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn has_message() {
        assert!(ParseStatus::Ok.has_message());
        assert!(ParseStatus::MandatoryIeMissing.has_message());
        assert!(!ParseStatus::BufTooShort.has_message());
        assert!(!ParseStatus::TypeNotExist.has_message());
        assert!(!ParseStatus::BufInvalid.has_message());
    }
}
