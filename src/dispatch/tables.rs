// Generated from the GTPv1-C SGSN/GGSN dispatcher tables (TS 29.060 section 7).
use crate::message::MessageType;

/// Entries shared verbatim between the SGSN-side and GGSN-side dispatch tables.
static BASE_TABLE: [(u8, MessageType); 65] = [
    (1, MessageType::EchoReq),
    (2, MessageType::EchoResp),
    (3, MessageType::VersionNotSupported),
    (4, MessageType::NodeAliveReq),
    (5, MessageType::NodeAliveResp),
    (6, MessageType::RedirectionReq),
    (7, MessageType::RedirectionResp),
    (16, MessageType::CreatePDPCtxtReq),
    (17, MessageType::CreatePDPCtxtResp),
    (20, MessageType::DeletePDPCtxtReq),
    (21, MessageType::DeletePDPCtxtResp),
    (22, MessageType::InitiatePDPCtxtActivationReq),
    (23, MessageType::InitiatePDPCtxtActivationResp),
    (26, MessageType::ErrorInd),
    (27, MessageType::PDUNotifReq),
    (28, MessageType::PDUNotifResp),
    (29, MessageType::PDUNotifRejectReq),
    (30, MessageType::PDUNotifRejectResp),
    (31, MessageType::SupportedExtHeadersNotif),
    (32, MessageType::SendRouteingInfoforGPRSReq),
    (33, MessageType::SendRouteingInfoforGPRSResp),
    (34, MessageType::FailureReportReq),
    (35, MessageType::FailureReportResp),
    (36, MessageType::NoteMSGPRSPresentReq),
    (37, MessageType::NoteMSGPRSPresentResp),
    (48, MessageType::IdentificationReq),
    (49, MessageType::IdentificationResp),
    (50, MessageType::SGSNCtxtReq),
    (51, MessageType::SGSNCtxtResp),
    (52, MessageType::SGSNCtxtAck),
    (53, MessageType::ForwardRelocationReq),
    (54, MessageType::ForwardRelocationResp),
    (55, MessageType::ForwardRelocationComplete),
    (56, MessageType::RelocationCancelReq),
    (57, MessageType::RelocationCancelResp),
    (58, MessageType::ForwardSRNSCtxt),
    (59, MessageType::ForwardRelocationCompleteAck),
    (60, MessageType::ForwardSRNSCtxtAck),
    (61, MessageType::UERegistrationQueryReq),
    (62, MessageType::UERegistrationQueryResp),
    (70, MessageType::RANInfoRelay),
    (96, MessageType::MBMSNotifReq),
    (97, MessageType::MBMSNotifResp),
    (98, MessageType::MBMSNotifRejectReq),
    (99, MessageType::MBMSNotifRejectResp),
    (100, MessageType::CreateMBMSCtxtReq),
    (101, MessageType::CreateMBMSCtxtResp),
    (102, MessageType::UpdateMBMSCtxtReq),
    (103, MessageType::UpdateMBMSCtxtResp),
    (104, MessageType::DeleteMBMSCtxtReq),
    (105, MessageType::DeleteMBMSCtxtResp),
    (112, MessageType::MBMSRegistrationReq),
    (113, MessageType::MBMSRegistrationResp),
    (114, MessageType::MBMSDeRegistrationReq),
    (115, MessageType::MBMSDeRegistrationResp),
    (116, MessageType::MBMSSessionStartReq),
    (117, MessageType::MBMSSessionStartResp),
    (118, MessageType::MBMSSessionStopReq),
    (119, MessageType::MBMSSessionStopResp),
    (120, MessageType::MBMSSessionUpdateReq),
    (121, MessageType::MBMSSessionUpdateResp),
    (128, MessageType::MSInfoChangeNotifReq),
    (129, MessageType::MSInfoChangeNotifResp),
    (240, MessageType::DataRecordTransferReq),
    (241, MessageType::DataRecordTransferResp),
];

/// Codes where the SGSN-side decoder diverges from the GGSN-side one
/// (Update PDP Context Request/Response, type codes 18/19).
static SGSN_OVERRIDES: [(u8, MessageType); 2] = [
    (18, MessageType::UpdatePDPCtxtReqGGSN),
    (19, MessageType::UpdatePDPCtxtRespGGSN),
];

static GGSN_OVERRIDES: [(u8, MessageType); 2] = [
    (18, MessageType::UpdatePDPCtxtReqSGSN),
    (19, MessageType::UpdatePDPCtxtRespSGSN),
];

pub(crate) fn lookup_sgsn(code: u8) -> Option<MessageType> {
    SGSN_OVERRIDES
        .iter()
        .chain(BASE_TABLE.iter())
        .find(|(c, _)| *c == code)
        .map(|(_, m)| *m)
}

pub(crate) fn lookup_ggsn(code: u8) -> Option<MessageType> {
    GGSN_OVERRIDES
        .iter()
        .chain(BASE_TABLE.iter())
        .find(|(c, _)| *c == code)
        .map(|(_, m)| *m)
}
