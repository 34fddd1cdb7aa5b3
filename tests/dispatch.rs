use gtpv1c::dispatch::{parse_ggsn, parse_sgsn};
use gtpv1c::err::ParseStatus;
use gtpv1c::header::{GtpHeader, HeaderExtension, NextExtensionType, ProtocolType};
use gtpv1c::ie::{IeSequence, IeValue};
use gtpv1c::message::{GtpMessage, MessageType};

#[test]
fn echo_request_scenario() {
    // EchoReq's template only has an optional Private Extension slot, so a
    // Recovery-looking type code (14) here never matches it; it is decoded
    // as an anonymous trailing TLV IE instead, and `Recovery` stays absent.
    let buf = [
        0x30, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x00, 0x01, 0x01,
    ];
    let (msg, status) = parse_sgsn(&buf);
    assert_eq!(status, ParseStatus::Ok);
    let msg = msg.unwrap();
    assert_eq!(msg.message_type, MessageType::EchoReq);
    assert!(msg.ie("Recovery").is_none());
    assert_eq!(msg.ies.trailing(), &[(14, IeValue::Raw(vec![0x01]))]);
    assert_eq!(msg.to_bytes().unwrap(), buf);
}

#[test]
fn echo_response_with_recovery_scenario() {
    let buf = [0x30, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x2A];
    let (msg, status) = parse_sgsn(&buf);
    assert_eq!(status, ParseStatus::Ok);
    let msg = msg.unwrap();
    assert_eq!(msg.ie("Recovery"), Some(&IeValue::Raw(vec![0x2A])));
    assert_eq!(msg.to_bytes().unwrap(), buf);
}

#[test]
fn version_not_supported_scenario() {
    let buf = [0x30, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let (msg, status) = parse_sgsn(&buf);
    assert_eq!(status, ParseStatus::Ok);
    assert_eq!(msg.unwrap().message_type, MessageType::VersionNotSupported);
}

#[test]
fn truncated_echo_scenario() {
    let buf = [0x30, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00];
    let (msg, status) = parse_sgsn(&buf);
    assert!(msg.is_none());
    assert_eq!(status, ParseStatus::BufTooShort);
}

#[test]
fn unknown_type_scenario() {
    let buf = [0x30, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let (msg, status) = parse_sgsn(&buf);
    assert!(msg.is_none());
    assert_eq!(status, ParseStatus::TypeNotExist);
}

#[test]
fn codes_18_and_19_diverge_by_side_everywhere_else_they_agree() {
    let empty_18 = [0x30, 18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let (sgsn_msg, _) = parse_sgsn(&empty_18);
    let (ggsn_msg, _) = parse_ggsn(&empty_18);
    assert_eq!(
        sgsn_msg.unwrap().message_type,
        MessageType::UpdatePDPCtxtReqGGSN
    );
    assert_eq!(
        ggsn_msg.unwrap().message_type,
        MessageType::UpdatePDPCtxtReqSGSN
    );

    let echo = [0x30, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let (sgsn_echo, _) = parse_sgsn(&echo);
    let (ggsn_echo, _) = parse_ggsn(&echo);
    assert_eq!(sgsn_echo.unwrap().message_type, ggsn_echo.unwrap().message_type);
}

#[test]
fn header_with_optional_subheader_and_extension_chain_round_trips_through_dispatch() {
    let header = GtpHeader {
        version: 1,
        protocol_type: ProtocolType::Gtp,
        message_type: MessageType::EchoReq.wire_code(),
        teid: 0,
        sequence_number: Some(0x4142),
        npdu_number: None,
        extensions: vec![HeaderExtension {
            ext_type: NextExtensionType::PdcpPduNumber,
            content: vec![0x00, 0x07],
        }],
    };
    let msg = GtpMessage {
        message_type: MessageType::EchoReq,
        header,
        ies: IeSequence::empty(MessageType::EchoReq.template()),
    };
    let bytes = msg.to_bytes().unwrap();
    let (decoded, status) = parse_sgsn(&bytes);
    assert_eq!(status, ParseStatus::Ok);
    assert_eq!(decoded.unwrap(), msg);
}
