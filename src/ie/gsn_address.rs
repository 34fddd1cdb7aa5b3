use crate::err::DecodeError;
use alloc::vec::Vec;

/// GSN Address IE (TS 29.060 section 7.7.32): an IPv4 or IPv6 address,
/// distinguished purely by payload length (4 or 16 octets).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GsnAddress {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl GsnAddress {
    pub fn decode(payload: &[u8]) -> Result<GsnAddress, DecodeError> {
        match payload.len() {
            4 => {
                let mut a = [0u8; 4];
                a.copy_from_slice(payload);
                Ok(GsnAddress::V4(a))
            }
            16 => {
                let mut a = [0u8; 16];
                a.copy_from_slice(payload);
                Ok(GsnAddress::V6(a))
            }
            other => Err(DecodeError::BufInvalid {
                what: "GSN Address",
                reason: if other < 4 { "too short" } else { "neither 4 nor 16 octets" },
            }),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            GsnAddress::V4(a) => a.to_vec(),
            GsnAddress::V6(a) => a.to_vec(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn v4_roundtrip() {
        let bytes = [192, 0, 2, 1];
        let addr = GsnAddress::decode(&bytes).unwrap();
        assert_eq!(addr, GsnAddress::V4([192, 0, 2, 1]));
        assert_eq!(addr.encode(), bytes);
    }

    #[test]
    fn v6_roundtrip() {
        let bytes = [0u8; 16];
        let addr = GsnAddress::decode(&bytes).unwrap();
        assert_eq!(addr, GsnAddress::V6([0u8; 16]));
        assert_eq!(addr.encode(), bytes);
    }

    #[test]
    fn invalid_length() {
        assert!(GsnAddress::decode(&[1, 2, 3]).is_err());
    }
}
