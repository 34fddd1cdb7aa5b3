/// Type code of a header extension, as carried in the optional sub-header's
/// or a preceding extension's "next extension type" octet.
///
/// `None` both terminates the chain on the wire (a literal `0` byte) and is
/// the implicit value when no extensions are present at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum NextExtensionType {
    None,
    MbmsSupportIndication,
    MsInfoChangeReportingSupportIndication,
    PdcpPduNumber,
    SuspendRequest,
    SuspendResponse,
    /// A type code not catalogued above; its content is carried opaquely.
    Other(u8),
}

impl NextExtensionType {
    pub fn from_code(code: u8) -> NextExtensionType {
        match code {
            0 => NextExtensionType::None,
            1 => NextExtensionType::MbmsSupportIndication,
            2 => NextExtensionType::MsInfoChangeReportingSupportIndication,
            130 => NextExtensionType::PdcpPduNumber,
            193 => NextExtensionType::SuspendRequest,
            194 => NextExtensionType::SuspendResponse,
            other => NextExtensionType::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            NextExtensionType::None => 0,
            NextExtensionType::MbmsSupportIndication => 1,
            NextExtensionType::MsInfoChangeReportingSupportIndication => 2,
            NextExtensionType::PdcpPduNumber => 130,
            NextExtensionType::SuspendRequest => 193,
            NextExtensionType::SuspendResponse => 194,
            NextExtensionType::Other(code) => code,
        }
    }

    /// The catalogued content length, in octets, for a known extension type
    /// (TS 29.060 table 7.8): the payload proper, not counting the leading
    /// length byte, the trailing next-type byte, or the padding the frame's
    /// 4-octet alignment may add on top.
    ///
    /// `None` for [`NextExtensionType::Other`], whose content shape this
    /// crate does not catalogue; its whole padded region is kept as opaque
    /// content instead (see [`super::decode_chain`]).
    pub fn known_content_len(self) -> Option<usize> {
        match self {
            NextExtensionType::None => Some(0),
            NextExtensionType::MbmsSupportIndication => Some(0),
            NextExtensionType::MsInfoChangeReportingSupportIndication => Some(0),
            NextExtensionType::PdcpPduNumber => Some(2),
            NextExtensionType::SuspendRequest => Some(0),
            NextExtensionType::SuspendResponse => Some(0),
            NextExtensionType::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip_known() {
        for code in [0u8, 1, 2, 130, 193, 194] {
            assert_eq!(NextExtensionType::from_code(code).code(), code);
        }
    }

    #[test]
    fn roundtrip_unknown() {
        assert_eq!(NextExtensionType::from_code(77).code(), 77);
        assert_eq!(NextExtensionType::from_code(77), NextExtensionType::Other(77));
    }
}
