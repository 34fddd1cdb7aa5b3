//! The message catalogue: ~69 GTPv1-C / GTP' message classes, each a pair
//! of ([`crate::header::GtpHeader`], ordered IE template), per TS 29.060
//! section 7.

mod catalogue;
pub use catalogue::*;

use crate::err::{DecodeError, EncodeError};
use crate::header::GtpHeader;
use crate::ie::{IeSequence, IeValue};
use alloc::vec::Vec;

/// A decoded GTPv1-C / GTP' message: its header and its IE sequence, tagged
/// with the message class that determined how the IE block was templated.
///
/// Mutable between decode and encode, per this crate's ownership model: a
/// tree is constructed fresh on decode, and [`GtpMessage::to_bytes`]
/// re-derives every length from the current header/IE state rather than
/// replaying anything cached from decode.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GtpMessage {
    pub message_type: MessageType,
    pub header: GtpHeader,
    pub ies: IeSequence,
}

impl GtpMessage {
    /// Decode a message of `message_type` from `buf`.
    ///
    /// `enforce_mandatory` is the permissive-mode switch from this crate's
    /// error-handling design (§7): `true` raises
    /// [`DecodeError::MandatoryIeMissing`] on the first missing mandatory
    /// IE, `false` leaves its slot absent and continues.
    ///
    /// The IE block handed to [`IeSequence::decode`] is exactly
    /// `header.length` octets (the header's declared "everything from byte
    /// 8 onward" span, minus whatever the optional sub-header and extension
    /// chain already consumed) — never the rest of `buf`, so trailing bytes
    /// past the declared length are not mistaken for message content.
    pub fn decode(
        message_type: MessageType,
        buf: &[u8],
        enforce_mandatory: bool,
    ) -> Result<GtpMessage, DecodeError> {
        let (header, consumed, declared_len) = GtpHeader::from_bytes(buf)?;
        let header_tail = consumed - crate::header::BASE_HEADER_LEN;
        let ie_block_len = (declared_len as usize)
            .checked_sub(header_tail)
            .ok_or(DecodeError::BufInvalid {
                what: "GTP header length",
                reason: "declared length shorter than the optional header and extensions",
            })?;
        if buf.len() < consumed + ie_block_len {
            return Err(DecodeError::BufTooShort {
                what: "GTP IE block",
                required_bytes: consumed + ie_block_len,
                available_bytes: buf.len(),
            });
        }
        let ie_buf = &buf[consumed..consumed + ie_block_len];
        let ies = IeSequence::decode(
            message_type.name(),
            message_type.template(),
            ie_buf,
            enforce_mandatory,
        )?;
        Ok(GtpMessage {
            message_type,
            header,
            ies,
        })
    }

    /// Encode header and IE block back to wire bytes. The header's `length`
    /// field is derived from the freshly-encoded IE block, never stored.
    ///
    /// Fails with [`EncodeError::ValueOutOfRange`] if any IE field's current
    /// value does not fit its declared bit width (e.g. a `Cause.value` above
    /// 0x3f) — this can only happen by mutating a decoded message's fields
    /// or constructing one by hand, never by round-tripping a value this
    /// crate itself decoded.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let ie_bytes = self.ies.encode()?;
        let mut out = self.header.to_bytes(ie_bytes.len());
        out.extend(ie_bytes);
        Ok(out)
    }

    /// Look up a template field by name, recursing from the message down
    /// into its IE sequence (the header's fields are plain struct members
    /// and need no path lookup).
    pub fn ie(&self, field: &str) -> Option<&IeValue> {
        self.ies.get(field)
    }

    /// Set (or clear, with `None`) a template field by name.
    pub fn set_ie(&mut self, field: &str, value: Option<IeValue>) {
        self.ies.set(field, value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::header::GtpHeader;
    use crate::header::ProtocolType;
    use crate::ie::IeValue;
    use alloc::vec;

    fn header() -> GtpHeader {
        GtpHeader {
            version: 1,
            protocol_type: ProtocolType::Gtp,
            message_type: MessageType::EchoReq.wire_code(),
            teid: 0,
            sequence_number: None,
            npdu_number: None,
            extensions: Vec::new(),
        }
    }

    #[test]
    fn echo_request_roundtrip() {
        let msg = GtpMessage {
            message_type: MessageType::EchoReq,
            header: header(),
            ies: IeSequence::empty(MessageType::EchoReq.template()),
        };
        let bytes = msg.to_bytes().unwrap();
        assert_eq!(bytes, [0x30, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let decoded = GtpMessage::decode(MessageType::EchoReq, &bytes, true).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn echo_response_with_recovery_roundtrip() {
        let buf = [0x30, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x2A];
        let decoded = GtpMessage::decode(MessageType::EchoResp, &buf, true).unwrap();
        assert_eq!(
            decoded.ie("Recovery"),
            Some(&IeValue::Raw(vec![0x2A]))
        );
        assert_eq!(decoded.to_bytes().unwrap(), buf);
    }

    #[test]
    fn ie_block_shorter_than_declared_length_is_buf_too_short() {
        let buf = [0x30, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00];
        let err = GtpMessage::decode(MessageType::EchoReq, &buf, true).unwrap_err();
        assert!(matches!(err, DecodeError::BufTooShort { .. }));
    }
}
