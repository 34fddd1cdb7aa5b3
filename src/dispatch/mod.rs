//! The top-level parser: two dispatch tables (SGSN-side, GGSN-side) mapping
//! the header's 8-bit message type code to a message decoder, and the
//! `parse_sgsn`/`parse_ggsn` entry points that apply them (TS 29.060
//! section 7, this crate's dispatcher design in spec section 4.6).
//!
//! The two tables are modelled as a shared base table plus a small override
//! list per side (see [`tables`]) rather than two independent maps, since
//! every code but Update PDP Context Request/Response (18/19) resolves to
//! the same message class on both sides.

mod tables;

use crate::err::ParseStatus;
use crate::header::BASE_HEADER_LEN;
use crate::message::GtpMessage;

/// Decode `buf` using the SGSN-side dispatch table.
///
/// Follows the algorithm in this crate's error-handling design: a missing
/// mandatory IE triggers one permissive retry before falling back to
/// [`ParseStatus::BufInvalid`]; every other decode failure maps directly to
/// its corresponding status with no message returned.
pub fn parse_sgsn(buf: &[u8]) -> (Option<GtpMessage>, ParseStatus) {
    parse_side(buf, tables::lookup_sgsn)
}

/// Decode `buf` using the GGSN-side dispatch table.
pub fn parse_ggsn(buf: &[u8]) -> (Option<GtpMessage>, ParseStatus) {
    parse_side(buf, tables::lookup_ggsn)
}

fn parse_side(
    buf: &[u8],
    lookup: fn(u8) -> Option<crate::message::MessageType>,
) -> (Option<GtpMessage>, ParseStatus) {
    if buf.len() < BASE_HEADER_LEN {
        return (None, ParseStatus::BufTooShort);
    }
    let type_code = buf[1];
    let Some(message_type) = lookup(type_code) else {
        return (None, ParseStatus::TypeNotExist);
    };
    match GtpMessage::decode(message_type, buf, true) {
        Ok(message) => (Some(message), ParseStatus::Ok),
        Err(crate::err::DecodeError::MandatoryIeMissing { .. }) => {
            match GtpMessage::decode(message_type, buf, false) {
                Ok(message) => (Some(message), ParseStatus::MandatoryIeMissing),
                Err(_) => (None, ParseStatus::BufInvalid),
            }
        }
        Err(crate::err::DecodeError::BufTooShort { .. }) => (None, ParseStatus::BufTooShort),
        Err(_) => (None, ParseStatus::BufInvalid),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::message::MessageType;

    #[test]
    fn echo_request() {
        // EchoReq's template has no Recovery slot, so a type-14 tag in its IE
        // block decodes as an anonymous trailing TLV instead.
        let buf = [
            0x30, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x00, 0x01, 0x01,
        ];
        let (msg, status) = parse_sgsn(&buf);
        assert_eq!(status, ParseStatus::Ok);
        let msg = msg.unwrap();
        assert_eq!(msg.message_type, MessageType::EchoReq);
        assert!(msg.ie("Recovery").is_none());
        assert_eq!(msg.to_bytes().unwrap(), buf);
    }

    #[test]
    fn echo_response_with_recovery() {
        let buf = [0x30, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x2A];
        let (msg, status) = parse_sgsn(&buf);
        assert_eq!(status, ParseStatus::Ok);
        assert_eq!(msg.unwrap().to_bytes().unwrap(), buf);
    }

    #[test]
    fn version_not_supported() {
        let buf = [0x30, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (msg, status) = parse_sgsn(&buf);
        assert_eq!(status, ParseStatus::Ok);
        assert_eq!(msg.unwrap().to_bytes().unwrap(), buf);
    }

    #[test]
    fn truncated_header() {
        let buf = [0x30, 0x01, 0x00];
        let (msg, status) = parse_sgsn(&buf);
        assert!(msg.is_none());
        assert_eq!(status, ParseStatus::BufTooShort);
    }

    #[test]
    fn truncated_ie_block() {
        let buf = [0x30, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00];
        let (msg, status) = parse_sgsn(&buf);
        assert!(msg.is_none());
        assert_eq!(status, ParseStatus::BufTooShort);
    }

    #[test]
    fn unknown_type() {
        let buf = [0x30, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (msg, status) = parse_sgsn(&buf);
        assert!(msg.is_none());
        assert_eq!(status, ParseStatus::TypeNotExist);
    }

    #[test]
    fn dispatcher_divergence_on_18_and_19() {
        // Empty IE block: both sides' templates declare NSAPI mandatory, so
        // this exercises the permissive fallback too, not just a clean decode.
        let buf = [0x30, 18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (sgsn_msg, sgsn_status) = parse_sgsn(&buf);
        let (ggsn_msg, ggsn_status) = parse_ggsn(&buf);
        assert_eq!(sgsn_status, ParseStatus::MandatoryIeMissing);
        assert_eq!(ggsn_status, ParseStatus::MandatoryIeMissing);
        assert_eq!(
            sgsn_msg.unwrap().message_type,
            MessageType::UpdatePDPCtxtReqGGSN
        );
        assert_eq!(
            ggsn_msg.unwrap().message_type,
            MessageType::UpdatePDPCtxtReqSGSN
        );
    }

    #[test]
    fn mandatory_ie_missing_falls_back_to_permissive() {
        // DeletePDPCtxtReq requires NSAPI; omit it entirely.
        let buf = [0x30, 20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let (msg, status) = parse_sgsn(&buf);
        assert_eq!(status, ParseStatus::MandatoryIeMissing);
        let msg = msg.unwrap();
        assert!(msg.ie("NSAPI").is_none());
    }
}
