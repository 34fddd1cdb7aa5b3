use crate::err::DecodeError;
use alloc::vec::Vec;

/// Private Extension IE (TS 29.060 section 7.7.46). The only IE permitted
/// to repeat within a single message's IE sequence (see
/// [`crate::ie::IeSequence`]).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateExtension {
    pub extension_id: u16,
    pub value: Vec<u8>,
}

impl PrivateExtension {
    pub fn decode(payload: &[u8]) -> Result<PrivateExtension, DecodeError> {
        if payload.len() < 2 {
            return Err(DecodeError::BufTooShort {
                what: "Private Extension",
                required_bytes: 2,
                available_bytes: payload.len(),
            });
        }
        Ok(PrivateExtension {
            extension_id: u16::from_be_bytes([payload[0], payload[1]]),
            value: payload[2..].to_vec(),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.value.len());
        out.extend_from_slice(&self.extension_id.to_be_bytes());
        out.extend_from_slice(&self.value);
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let mut bytes = alloc::vec![0x00u8, 0x2a];
        bytes.extend_from_slice(&[1, 2, 3]);
        let ext = PrivateExtension::decode(&bytes).unwrap();
        assert_eq!(
            ext,
            PrivateExtension {
                extension_id: 42,
                value: alloc::vec![1, 2, 3]
            }
        );
        assert_eq!(ext.encode(), bytes);
    }

    #[test]
    fn too_short() {
        assert!(PrivateExtension::decode(&[0x00]).is_err());
    }
}
