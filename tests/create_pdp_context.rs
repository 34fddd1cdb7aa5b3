use gtpv1c::dispatch::parse_sgsn;
use gtpv1c::err::ParseStatus;
use gtpv1c::header::{GtpHeader, ProtocolType};
use gtpv1c::ie::{GsnAddress, IeSequence, IeValue};
use gtpv1c::message::{GtpMessage, MessageType};

fn header() -> GtpHeader {
    GtpHeader {
        version: 1,
        protocol_type: ProtocolType::Gtp,
        message_type: MessageType::CreatePDPCtxtReq.wire_code(),
        teid: 0x1122_3344,
        sequence_number: None,
        npdu_number: None,
        extensions: Vec::new(),
    }
}

// The five IEs TS 29.060 table 7.5.1 marks mandatory for this message.
fn populated_message() -> GtpMessage {
    let mut msg = GtpMessage {
        message_type: MessageType::CreatePDPCtxtReq,
        header: header(),
        ies: IeSequence::empty(MessageType::CreatePDPCtxtReq.template()),
    };
    msg.set_ie("TEIDDataI", Some(IeValue::Raw(vec![0, 0, 0, 1])));
    msg.set_ie("NSAPI", Some(IeValue::Raw(vec![5])));
    msg.set_ie(
        "SGSNAddrForSignalling",
        Some(IeValue::GsnAddress(GsnAddress::V4([10, 0, 0, 1]))),
    );
    msg.set_ie(
        "SGSNAddrForUserTraffic",
        Some(IeValue::GsnAddress(GsnAddress::V4([10, 0, 0, 2]))),
    );
    msg.set_ie(
        "QoSProfile",
        Some(IeValue::Raw(vec![0x0b, 0x92, 0x09, 0x21, 0x63])),
    );
    msg
}

#[test]
fn only_mandatory_ies_round_trip() {
    let msg = populated_message();
    let bytes = msg.to_bytes().unwrap();
    let (decoded, status) = parse_sgsn(&bytes);
    assert_eq!(status, ParseStatus::Ok);
    assert_eq!(decoded.unwrap(), msg);
}

#[test]
fn omitting_nsapi_yields_mandatory_ie_missing_with_siblings_intact() {
    let mut msg = populated_message();
    msg.set_ie("NSAPI", None);
    let bytes = msg.to_bytes().unwrap();

    let (decoded, status) = parse_sgsn(&bytes);
    assert_eq!(status, ParseStatus::MandatoryIeMissing);
    let decoded = decoded.unwrap();
    assert!(decoded.ie("NSAPI").is_none());
    assert!(decoded.ie("TEIDDataI").is_some());
    assert!(decoded.ie("SGSNAddrForSignalling").is_some());
    assert!(decoded.ie("SGSNAddrForUserTraffic").is_some());
    assert!(decoded.ie("QoSProfile").is_some());
}

#[test]
fn omitting_an_optional_ie_leaves_status_ok() {
    let mut msg = populated_message();
    msg.set_ie("IMSI", None);
    let bytes = msg.to_bytes().unwrap();

    let (decoded, status) = parse_sgsn(&bytes);
    assert_eq!(status, ParseStatus::Ok);
    assert!(decoded.unwrap().ie("IMSI").is_none());
}
