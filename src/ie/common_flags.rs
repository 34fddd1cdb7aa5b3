use crate::err::DecodeError;
use bitflags::bitflags;

bitflags! {
    /// Common Flags IE (TS 29.060 section 7.7.48): one bit each, independent
    /// of one another, hence `bitflags!` rather than a hand-rolled
    /// bit-by-bit struct.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CommonFlags: u8 {
        const DUAL_ADDR_BEARER_FLAG = 0b1000_0000;
        const UPGRADE_QOS_SUPPORTED = 0b0100_0000;
        const NRSN                  = 0b0010_0000;
        const NO_QOS_NEGOTIATION    = 0b0001_0000;
        const MBMS_COUNTING_INFO    = 0b0000_1000;
        const RAN_PROCEDURES_READY  = 0b0000_0100;
        const MBMS_SERVICE_TYPE     = 0b0000_0010;
        const PROHIBIT_PAYLOAD_COMP = 0b0000_0001;
    }
}

impl CommonFlags {
    pub fn decode(payload: &[u8]) -> Result<CommonFlags, DecodeError> {
        let byte = *payload.first().ok_or(DecodeError::BufTooShort {
            what: "Common Flags",
            required_bytes: 1,
            available_bytes: payload.len(),
        })?;
        Ok(CommonFlags::from_bits_retain(byte))
    }

    pub fn encode(&self) -> [u8; 1] {
        [self.bits()]
    }
}

bitflags! {
    /// Extended Common Flags IE (TS 29.060 section 7.7.93).
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ExtCommonFlags: u8 {
        const UASI        = 0b1000_0000;
        const BDWI        = 0b0100_0000;
        const PCRI        = 0b0010_0000;
        const VB          = 0b0001_0000;
        const RET_LOC     = 0b0000_1000;
        const CPSR        = 0b0000_0100;
        const CCRSI       = 0b0000_0010;
        const UNAUTH_IMSI = 0b0000_0001;
    }
}

impl ExtCommonFlags {
    pub fn decode(payload: &[u8]) -> Result<ExtCommonFlags, DecodeError> {
        let byte = *payload.first().ok_or(DecodeError::BufTooShort {
            what: "Extended Common Flags",
            required_bytes: 1,
            available_bytes: payload.len(),
        })?;
        Ok(ExtCommonFlags::from_bits_retain(byte))
    }

    pub fn encode(&self) -> [u8; 1] {
        [self.bits()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn common_flags_roundtrip() {
        let bytes = [0b1000_0001u8];
        let flags = CommonFlags::decode(&bytes).unwrap();
        assert!(flags.contains(CommonFlags::DUAL_ADDR_BEARER_FLAG));
        assert!(flags.contains(CommonFlags::PROHIBIT_PAYLOAD_COMP));
        assert_eq!(flags.encode(), bytes);
    }

    #[test]
    fn ext_common_flags_roundtrip() {
        let bytes = [0b0000_0010u8];
        let flags = ExtCommonFlags::decode(&bytes).unwrap();
        assert!(flags.contains(ExtCommonFlags::CCRSI));
        assert_eq!(flags.encode(), bytes);
    }
}
