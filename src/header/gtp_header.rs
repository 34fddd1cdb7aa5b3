use crate::err::DecodeError;
use crate::header::{decode_chain, encode_chain, HeaderExtension, NextExtensionType, ProtocolType};
use alloc::vec::Vec;

/// Fixed length of the GTPv1-C/GTP' base header, in octets.
pub const BASE_HEADER_LEN: usize = 8;
/// Length of the optional sub-header, in octets.
pub const OPTIONAL_HEADER_LEN: usize = 4;

/// The GTPv1-C / GTP' header: base header, optional sub-header, and header
/// extension chain.
///
/// `length` is intentionally not a field here: it is a computed value
/// spanning the header *and* the IE block that follows it, so it is derived
/// at encode time from the caller-supplied IE block length (see
/// [`GtpHeader::to_bytes`]) rather than stored and risking drift from the
/// actual content.
///
/// E, S, and PN are independent flag bits (TS 29.060 section 6), not one
/// combined "has optional sub-header" switch: `sequence_number` tracks S,
/// `npdu_number` tracks PN, and `extensions` being non-empty implies E. Any
/// of the three being set means the 4-octet optional sub-header is present
/// on the wire; the other two fields' octets are still there but read as 0
/// and carry no meaning when their own flag is clear, per spec.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GtpHeader {
    /// 3-bit version field; 1 for every message this crate decodes.
    pub version: u8,
    pub protocol_type: ProtocolType,
    pub message_type: u8,
    pub teid: u32,
    pub sequence_number: Option<u16>,
    pub npdu_number: Option<u8>,
    pub extensions: Vec<HeaderExtension>,
}

impl GtpHeader {
    /// The base header's E/S/PN flags, derived independently from
    /// `extensions`, `sequence_number`, and `npdu_number` rather than
    /// collapsed into a single switch.
    fn flags(&self) -> (bool, bool, bool) {
        (
            !self.extensions.is_empty(),
            self.sequence_number.is_some(),
            self.npdu_number.is_some(),
        )
    }

    /// Decode the header (base + optional + extension chain) from the start
    /// of `buf`.
    ///
    /// Returns the header, the number of bytes consumed by the header
    /// itself, and the `length` field's value (the declared size, in
    /// octets, of everything from byte 8 onward — optional sub-header,
    /// extensions, and the IE block).
    pub fn from_bytes(buf: &[u8]) -> Result<(GtpHeader, usize, u16), DecodeError> {
        if buf.len() < BASE_HEADER_LEN {
            return Err(DecodeError::BufTooShort {
                what: "GTP header",
                required_bytes: BASE_HEADER_LEN,
                available_bytes: buf.len(),
            });
        }
        let flags_octet = buf[0];
        let version = (flags_octet >> 5) & 0b111;
        let protocol_type = ProtocolType::from_bit((flags_octet >> 4) & 1 != 0);
        let e = (flags_octet >> 2) & 1 != 0;
        let s = (flags_octet >> 1) & 1 != 0;
        let pn = flags_octet & 1 != 0;
        let message_type = buf[1];
        let length = u16::from_be_bytes([buf[2], buf[3]]);
        let teid = u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]);

        let mut pos = BASE_HEADER_LEN;
        let mut sequence_number = None;
        let mut npdu_number = None;
        let mut first_ext_type = NextExtensionType::None;
        if e || s || pn {
            if buf.len() < pos + OPTIONAL_HEADER_LEN {
                return Err(DecodeError::BufTooShort {
                    what: "GTP optional sub-header",
                    required_bytes: pos + OPTIONAL_HEADER_LEN,
                    available_bytes: buf.len(),
                });
            }
            let sequence_number_raw = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
            let npdu_number_raw = buf[pos + 2];
            if s {
                sequence_number = Some(sequence_number_raw);
            }
            if pn {
                npdu_number = Some(npdu_number_raw);
            }
            first_ext_type = if e {
                NextExtensionType::from_code(buf[pos + 3])
            } else {
                NextExtensionType::None
            };
            pos += OPTIONAL_HEADER_LEN;
        }

        let (extensions, pos) = decode_chain(buf, pos, first_ext_type)?;

        Ok((
            GtpHeader {
                version,
                protocol_type,
                message_type,
                teid,
                sequence_number,
                npdu_number,
                extensions,
            },
            pos,
            length,
        ))
    }

    /// Encode the header given the length, in octets, of the IE block that
    /// will follow it. The `length` field is computed from the optional
    /// sub-header, the extension chain, and `ie_block_len` — never stored.
    pub fn to_bytes(&self, ie_block_len: usize) -> Vec<u8> {
        let (ext_bytes, first_ext_type) = encode_chain(&self.extensions);
        let (e, s, pn) = self.flags();
        let needs_optional = e || s || pn;

        let optional_len = if needs_optional { OPTIONAL_HEADER_LEN } else { 0 };
        let length = (optional_len + ext_bytes.len() + ie_block_len) as u16;

        let mut out = Vec::with_capacity(BASE_HEADER_LEN + optional_len + ext_bytes.len());
        let flags_octet = (self.version << 5)
            | ((self.protocol_type.as_bit() as u8) << 4)
            | ((e as u8) << 2)
            | ((s as u8) << 1)
            | (pn as u8);
        out.push(flags_octet);
        out.push(self.message_type);
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(&self.teid.to_be_bytes());

        if needs_optional {
            out.extend_from_slice(&self.sequence_number.unwrap_or(0).to_be_bytes());
            out.push(self.npdu_number.unwrap_or(0));
            out.push(first_ext_type.code());
        }
        out.extend_from_slice(&ext_bytes);
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn echo_request_header_roundtrip() {
        // 30 01 00 04 00 00 00 00 -> version 1, PT=1, no E/S/PN, type 1, len 4, teid 0
        let buf = [0x30, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00];
        let (header, consumed, length) = GtpHeader::from_bytes(&buf).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(length, 4);
        assert_eq!(header.version, 1);
        assert_eq!(header.protocol_type, ProtocolType::Gtp);
        assert_eq!(header.message_type, 1);
        assert_eq!(header.teid, 0);
        assert!(header.sequence_number.is_none());
        assert!(header.npdu_number.is_none());
        assert!(header.extensions.is_empty());

        let encoded = header.to_bytes(4);
        assert_eq!(encoded, buf);
    }

    #[test]
    fn header_too_short() {
        let buf = [0x30, 0x01, 0x00];
        assert!(GtpHeader::from_bytes(&buf).is_err());
    }

    #[test]
    fn header_with_optional_and_extension_roundtrip() {
        let header = GtpHeader {
            version: 1,
            protocol_type: ProtocolType::Gtp,
            message_type: 1,
            teid: 0x1234_5678,
            sequence_number: Some(0x0102),
            npdu_number: Some(0),
            extensions: alloc::vec![HeaderExtension {
                ext_type: NextExtensionType::PdcpPduNumber,
                content: alloc::vec![0x00, 0x07],
            }],
        };
        let encoded = header.to_bytes(0);
        let (decoded, consumed, length) = GtpHeader::from_bytes(&encoded).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(consumed, encoded.len());
        assert_eq!(length as usize, encoded.len() - BASE_HEADER_LEN);
    }

    #[test]
    fn sequence_number_without_npdu_number_round_trips_flags_exactly() {
        // S=1, PN=0: the common case for ordinary signalling messages that
        // carry a sequence number but no N-PDU number. Collapsing S and PN
        // into one "optional header present" switch would flip PN on here.
        let header = GtpHeader {
            version: 1,
            protocol_type: ProtocolType::Gtp,
            message_type: 1,
            teid: 0,
            sequence_number: Some(0x4142),
            npdu_number: None,
            extensions: Vec::new(),
        };
        let encoded = header.to_bytes(0);
        assert_eq!(encoded[0] & 0b0000_0011, 0b10, "S=1, PN=0");
        let (decoded, _, _) = GtpHeader::from_bytes(&encoded).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.to_bytes(0), encoded);
    }

    #[test]
    fn extension_without_sequence_number_or_npdu_number_round_trips_flags_exactly() {
        // E=1, S=0, PN=0: an extension chain with no sequence number at all.
        let header = GtpHeader {
            version: 1,
            protocol_type: ProtocolType::Gtp,
            message_type: 1,
            teid: 0,
            sequence_number: None,
            npdu_number: None,
            extensions: alloc::vec![HeaderExtension {
                ext_type: NextExtensionType::PdcpPduNumber,
                content: alloc::vec![0x00, 0x07],
            }],
        };
        let encoded = header.to_bytes(0);
        assert_eq!(encoded[0] & 0b0000_0111, 0b100, "E=1, S=0, PN=0");
        let (decoded, _, _) = GtpHeader::from_bytes(&encoded).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.to_bytes(0), encoded);
    }
}
