use crate::err::DecodeError;
use crate::ie::GsnAddress;
use alloc::vec::Vec;

/// RAB Setup Information IE (TS 29.060 section 7.7.39).
///
/// A presence-by-length discipline: when the payload is a single octet
/// (spare nibble + NSAPI), the TEID/RNC address fields are absent; any
/// longer payload carries both.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RabSetupInfo {
    pub nsapi: u8,
    pub teid_and_rnc: Option<(u32, GsnAddress)>,
}

impl RabSetupInfo {
    pub fn decode(payload: &[u8]) -> Result<RabSetupInfo, DecodeError> {
        let first = *payload.first().ok_or(DecodeError::BufTooShort {
            what: "RAB Setup Information",
            required_bytes: 1,
            available_bytes: payload.len(),
        })?;
        let nsapi = first & 0x0f;
        if payload.len() <= 1 {
            return Ok(RabSetupInfo {
                nsapi,
                teid_and_rnc: None,
            });
        }
        if payload.len() < 5 {
            return Err(DecodeError::BufTooShort {
                what: "RAB Setup Information TEID Data I",
                required_bytes: 5,
                available_bytes: payload.len(),
            });
        }
        let teid = u32::from_be_bytes(payload[1..5].try_into().unwrap());
        let rnc_addr = GsnAddress::decode(&payload[5..])?;
        Ok(RabSetupInfo {
            nsapi,
            teid_and_rnc: Some((teid, rnc_addr)),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = alloc::vec![self.nsapi & 0x0f];
        if let Some((teid, rnc_addr)) = &self.teid_and_rnc {
            out.extend_from_slice(&teid.to_be_bytes());
            out.extend_from_slice(&rnc_addr.encode());
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_form_roundtrip() {
        let bytes = [0x05u8];
        let info = RabSetupInfo::decode(&bytes).unwrap();
        assert_eq!(
            info,
            RabSetupInfo {
                nsapi: 5,
                teid_and_rnc: None
            }
        );
        assert_eq!(info.encode(), bytes);
    }

    #[test]
    fn long_form_roundtrip() {
        let mut bytes = alloc::vec![0x05u8];
        bytes.extend_from_slice(&0x1234_5678u32.to_be_bytes());
        bytes.extend_from_slice(&[10, 0, 0, 1]);
        let info = RabSetupInfo::decode(&bytes).unwrap();
        assert_eq!(
            info,
            RabSetupInfo {
                nsapi: 5,
                teid_and_rnc: Some((0x1234_5678, GsnAddress::V4([10, 0, 0, 1])))
            }
        );
        assert_eq!(info.encode(), bytes);
    }
}
