use crate::err::{DecodeError, EncodeError};
use crate::field::{BitCursor, BitSink};
use alloc::vec::Vec;

/// MM Context IE (TS 29.060 section 7.7.28).
///
/// Only the leading CKSN is decoded structurally. The security mode
/// selector, the security-mode-selected tail (UMTS quintuplets with
/// used-cipher, GSM triplets, UMTS quintuplets, or GSM quintuplets), and the
/// trailing DRX parameter / MS network capability / container / access
/// restriction data are all TS 24.008 IEs — external collaborators per this
/// crate's scope — so they are carried verbatim as `tail`, which begins with
/// the security mode in its top 2 bits (see [`MmContext::security_mode`]).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MmContext {
    pub cksn: u8,
    /// Everything from the security-mode octet onward, verbatim.
    pub tail: Vec<u8>,
}

impl MmContext {
    pub fn decode(payload: &[u8]) -> Result<MmContext, DecodeError> {
        let mut c = BitCursor::new(payload);
        let _spare = c.read_uint("MMContext.spare", 5)?;
        let cksn = c.read_uint("MMContext.CKSN", 3)? as u8;
        let tail = c.remaining_bytes().to_vec();
        Ok(MmContext { cksn, tail })
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut s = BitSink::new();
        s.write_uint("spare", 5, 0x1f)?;
        s.write_uint("CKSN", 3, self.cksn as u64)?;
        s.write_bytes(&self.tail);
        Ok(s.finish())
    }

    /// The 2-bit security mode selector occupying the top of `tail`'s first
    /// byte (0 = UMTS quintuplets with used cipher, 1 = GSM triplets,
    /// 2 = UMTS quintuplets, 3 = GSM quintuplets). `None` if `tail` is empty.
    pub fn security_mode(&self) -> Option<u8> {
        self.tail.first().map(|b| (b >> 6) & 0b11)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrip() {
        let ctx = MmContext {
            cksn: 3,
            tail: alloc::vec![0b1000_0000, 1, 2, 3],
        };
        let bytes = ctx.encode().unwrap();
        let decoded = MmContext::decode(&bytes).unwrap();
        assert_eq!(decoded, ctx);
        assert_eq!(decoded.security_mode(), Some(2));
    }

    #[test]
    fn out_of_range_cksn_is_rejected() {
        let ctx = MmContext {
            cksn: 8, // 3-bit field, max 7
            tail: Vec::new(),
        };
        assert!(ctx.encode().is_err());
    }
}
