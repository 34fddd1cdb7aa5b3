use crate::err::{DecodeError, EncodeError};
use crate::field::{BitCursor, BitSink};
use alloc::vec::Vec;

/// MBMS IP Multicast Distribution IE (TS 29.060 section 7.7.85).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MbmsIpMulticastDistrib {
    pub common_teid: u32,
    pub distribution_address_type: u8,
    pub distribution_address: Vec<u8>,
    pub source_address_type: u8,
    pub source_address: Vec<u8>,
    pub hop_counter: u8,
}

impl MbmsIpMulticastDistrib {
    pub fn decode(payload: &[u8]) -> Result<MbmsIpMulticastDistrib, DecodeError> {
        let mut c = BitCursor::new(payload);
        let common_teid = c.read_uint("MBMSIPMulticastDistrib.CommonTEID", 32)? as u32;

        let distribution_address_type =
            c.read_uint("MBMSIPMulticastDistrib.DistribAddrType", 2)? as u8;
        let distribution_address_len =
            c.read_uint("MBMSIPMulticastDistrib.DistribAddrLen", 6)? as usize;
        let distribution_address = c
            .read_bytes("MBMSIPMulticastDistrib.DistribAddr", distribution_address_len)?
            .to_vec();

        let source_address_type = c.read_uint("MBMSIPMulticastDistrib.SrcAddrType", 2)? as u8;
        let source_address_len = c.read_uint("MBMSIPMulticastDistrib.SrcAddrLen", 6)? as usize;
        let source_address = c
            .read_bytes("MBMSIPMulticastDistrib.SrcAddr", source_address_len)?
            .to_vec();

        let hop_counter = c.read_uint("MBMSIPMulticastDistrib.MBMSHCInd", 8)? as u8;

        Ok(MbmsIpMulticastDistrib {
            common_teid,
            distribution_address_type,
            distribution_address,
            source_address_type,
            source_address,
            hop_counter,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut s = BitSink::new();
        s.write_uint("CommonTEID", 32, self.common_teid as u64)?;
        s.write_uint("DistribAddrType", 2, self.distribution_address_type as u64)?;
        s.write_uint("DistribAddrLen", 6, self.distribution_address.len() as u64)?;
        s.write_bytes(&self.distribution_address);
        s.write_uint("SrcAddrType", 2, self.source_address_type as u64)?;
        s.write_uint("SrcAddrLen", 6, self.source_address.len() as u64)?;
        s.write_bytes(&self.source_address);
        s.write_uint("MBMSHCInd", 8, self.hop_counter as u64)?;
        Ok(s.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let ie = MbmsIpMulticastDistrib {
            common_teid: 0xdead_beef,
            distribution_address_type: 0,
            distribution_address: alloc::vec![239, 1, 2, 3],
            source_address_type: 0,
            source_address: alloc::vec![10, 0, 0, 1],
            hop_counter: 5,
        };
        let bytes = ie.encode().unwrap();
        let decoded = MbmsIpMulticastDistrib::decode(&bytes).unwrap();
        assert_eq!(decoded, ie);
    }

    #[test]
    fn distribution_address_longer_than_six_bits_can_express_is_rejected() {
        let mut ie = MbmsIpMulticastDistrib {
            common_teid: 0,
            distribution_address_type: 0,
            distribution_address: alloc::vec![0u8; 64], // 6-bit length field, max 63
            source_address_type: 0,
            source_address: Vec::new(),
            hop_counter: 0,
        };
        assert!(ie.encode().is_err());
        ie.distribution_address.truncate(0);
        ie.source_address_type = 4; // 2-bit field, max 3
        assert!(ie.encode().is_err());
    }
}
