/// The header's 1-bit protocol-type flag (`PT`): `1` for GTP, `0` for the
/// GTP' charging variant (TS 32.295).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolType {
    GtpPrime,
    Gtp,
}

impl ProtocolType {
    #[inline]
    pub fn from_bit(bit: bool) -> ProtocolType {
        if bit {
            ProtocolType::Gtp
        } else {
            ProtocolType::GtpPrime
        }
    }

    #[inline]
    pub fn as_bit(self) -> bool {
        matches!(self, ProtocolType::Gtp)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        assert_eq!(ProtocolType::from_bit(true), ProtocolType::Gtp);
        assert_eq!(ProtocolType::from_bit(false), ProtocolType::GtpPrime);
        assert!(ProtocolType::Gtp.as_bit());
        assert!(!ProtocolType::GtpPrime.as_bit());
    }
}
