// Generated from the GTPv1-C message catalogue (3GPP TS 29.060 section 7).
use crate::ie::IeType;

/// One expected Information Element slot within a message's IE template.
#[derive(Clone, Copy, Debug)]
pub struct TemplateEntry {
    /// Field name, unique within its message (distinct from the IE's own identity:
    /// e.g. `CreatePDPCtxtReq` carries two `GSNAddr` IEs under different field names).
    pub field: &'static str,
    pub ie_type: IeType,
    pub mandatory: bool,
}

/// Identifies one of the catalogued GTPv1-C / GTP' message classes.
///
/// A handful of wire type codes are overloaded between distinct message
/// classes (Update PDP Context Request/Response, codes 18/19); those are
/// modelled as separate variants here and resolved by the dispatcher in
/// [`crate::dispatch`], never by bits on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    EchoReq,
    EchoResp,
    VersionNotSupported,
    NodeAliveReq,
    NodeAliveResp,
    RedirectionReq,
    RedirectionResp,
    CreatePDPCtxtReq,
    CreatePDPCtxtResp,
    UpdatePDPCtxtReqGGSN,
    UpdatePDPCtxtReqSGSN,
    UpdatePDPCtxtRespGGSN,
    UpdatePDPCtxtRespSGSN,
    DeletePDPCtxtReq,
    DeletePDPCtxtResp,
    InitiatePDPCtxtActivationReq,
    InitiatePDPCtxtActivationResp,
    ErrorInd,
    PDUNotifReq,
    PDUNotifResp,
    PDUNotifRejectReq,
    PDUNotifRejectResp,
    SupportedExtHeadersNotif,
    SendRouteingInfoforGPRSReq,
    SendRouteingInfoforGPRSResp,
    FailureReportReq,
    FailureReportResp,
    NoteMSGPRSPresentReq,
    NoteMSGPRSPresentResp,
    IdentificationReq,
    IdentificationResp,
    SGSNCtxtReq,
    SGSNCtxtResp,
    SGSNCtxtAck,
    ForwardRelocationReq,
    ForwardRelocationResp,
    ForwardRelocationComplete,
    RelocationCancelReq,
    RelocationCancelResp,
    ForwardSRNSCtxt,
    ForwardRelocationCompleteAck,
    ForwardSRNSCtxtAck,
    UERegistrationQueryReq,
    UERegistrationQueryResp,
    RANInfoRelay,
    MBMSNotifReq,
    MBMSNotifResp,
    MBMSNotifRejectReq,
    MBMSNotifRejectResp,
    CreateMBMSCtxtReq,
    CreateMBMSCtxtResp,
    UpdateMBMSCtxtReq,
    UpdateMBMSCtxtResp,
    DeleteMBMSCtxtReq,
    DeleteMBMSCtxtResp,
    MBMSRegistrationReq,
    MBMSRegistrationResp,
    MBMSDeRegistrationReq,
    MBMSDeRegistrationResp,
    MBMSSessionStartReq,
    MBMSSessionStartResp,
    MBMSSessionStopReq,
    MBMSSessionStopResp,
    MBMSSessionUpdateReq,
    MBMSSessionUpdateResp,
    MSInfoChangeNotifReq,
    MSInfoChangeNotifResp,
    DataRecordTransferReq,
    DataRecordTransferResp,
}

impl MessageType {
    /// The 8-bit message type code carried in the GTP header.
    pub fn wire_code(self) -> u8 {
        match self {
            MessageType::EchoReq => 1,
            MessageType::EchoResp => 2,
            MessageType::VersionNotSupported => 3,
            MessageType::NodeAliveReq => 4,
            MessageType::NodeAliveResp => 5,
            MessageType::RedirectionReq => 6,
            MessageType::RedirectionResp => 7,
            MessageType::CreatePDPCtxtReq => 16,
            MessageType::CreatePDPCtxtResp => 17,
            MessageType::UpdatePDPCtxtReqGGSN => 18,
            MessageType::UpdatePDPCtxtReqSGSN => 18,
            MessageType::UpdatePDPCtxtRespGGSN => 19,
            MessageType::UpdatePDPCtxtRespSGSN => 19,
            MessageType::DeletePDPCtxtReq => 20,
            MessageType::DeletePDPCtxtResp => 21,
            MessageType::InitiatePDPCtxtActivationReq => 22,
            MessageType::InitiatePDPCtxtActivationResp => 23,
            MessageType::ErrorInd => 26,
            MessageType::PDUNotifReq => 27,
            MessageType::PDUNotifResp => 28,
            MessageType::PDUNotifRejectReq => 29,
            MessageType::PDUNotifRejectResp => 30,
            MessageType::SupportedExtHeadersNotif => 31,
            MessageType::SendRouteingInfoforGPRSReq => 32,
            MessageType::SendRouteingInfoforGPRSResp => 33,
            MessageType::FailureReportReq => 34,
            MessageType::FailureReportResp => 35,
            MessageType::NoteMSGPRSPresentReq => 36,
            MessageType::NoteMSGPRSPresentResp => 37,
            MessageType::IdentificationReq => 48,
            MessageType::IdentificationResp => 49,
            MessageType::SGSNCtxtReq => 50,
            MessageType::SGSNCtxtResp => 51,
            MessageType::SGSNCtxtAck => 52,
            MessageType::ForwardRelocationReq => 53,
            MessageType::ForwardRelocationResp => 54,
            MessageType::ForwardRelocationComplete => 55,
            MessageType::RelocationCancelReq => 56,
            MessageType::RelocationCancelResp => 57,
            MessageType::ForwardSRNSCtxt => 58,
            MessageType::ForwardRelocationCompleteAck => 59,
            MessageType::ForwardSRNSCtxtAck => 60,
            MessageType::UERegistrationQueryReq => 61,
            MessageType::UERegistrationQueryResp => 62,
            MessageType::RANInfoRelay => 70,
            MessageType::MBMSNotifReq => 96,
            MessageType::MBMSNotifResp => 97,
            MessageType::MBMSNotifRejectReq => 98,
            MessageType::MBMSNotifRejectResp => 99,
            MessageType::CreateMBMSCtxtReq => 100,
            MessageType::CreateMBMSCtxtResp => 101,
            MessageType::UpdateMBMSCtxtReq => 102,
            MessageType::UpdateMBMSCtxtResp => 103,
            MessageType::DeleteMBMSCtxtReq => 104,
            MessageType::DeleteMBMSCtxtResp => 105,
            MessageType::MBMSRegistrationReq => 112,
            MessageType::MBMSRegistrationResp => 113,
            MessageType::MBMSDeRegistrationReq => 114,
            MessageType::MBMSDeRegistrationResp => 115,
            MessageType::MBMSSessionStartReq => 116,
            MessageType::MBMSSessionStartResp => 117,
            MessageType::MBMSSessionStopReq => 118,
            MessageType::MBMSSessionStopResp => 119,
            MessageType::MBMSSessionUpdateReq => 120,
            MessageType::MBMSSessionUpdateResp => 121,
            MessageType::MSInfoChangeNotifReq => 128,
            MessageType::MSInfoChangeNotifResp => 129,
            MessageType::DataRecordTransferReq => 240,
            MessageType::DataRecordTransferResp => 241,
        }
    }

    /// Stable name for this message class, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            MessageType::EchoReq => "EchoReq",
            MessageType::EchoResp => "EchoResp",
            MessageType::VersionNotSupported => "VersionNotSupported",
            MessageType::NodeAliveReq => "NodeAliveReq",
            MessageType::NodeAliveResp => "NodeAliveResp",
            MessageType::RedirectionReq => "RedirectionReq",
            MessageType::RedirectionResp => "RedirectionResp",
            MessageType::CreatePDPCtxtReq => "CreatePDPCtxtReq",
            MessageType::CreatePDPCtxtResp => "CreatePDPCtxtResp",
            MessageType::UpdatePDPCtxtReqGGSN => "UpdatePDPCtxtReqGGSN",
            MessageType::UpdatePDPCtxtReqSGSN => "UpdatePDPCtxtReqSGSN",
            MessageType::UpdatePDPCtxtRespGGSN => "UpdatePDPCtxtRespGGSN",
            MessageType::UpdatePDPCtxtRespSGSN => "UpdatePDPCtxtRespSGSN",
            MessageType::DeletePDPCtxtReq => "DeletePDPCtxtReq",
            MessageType::DeletePDPCtxtResp => "DeletePDPCtxtResp",
            MessageType::InitiatePDPCtxtActivationReq => "InitiatePDPCtxtActivationReq",
            MessageType::InitiatePDPCtxtActivationResp => "InitiatePDPCtxtActivationResp",
            MessageType::ErrorInd => "ErrorInd",
            MessageType::PDUNotifReq => "PDUNotifReq",
            MessageType::PDUNotifResp => "PDUNotifResp",
            MessageType::PDUNotifRejectReq => "PDUNotifRejectReq",
            MessageType::PDUNotifRejectResp => "PDUNotifRejectResp",
            MessageType::SupportedExtHeadersNotif => "SupportedExtHeadersNotif",
            MessageType::SendRouteingInfoforGPRSReq => "SendRouteingInfoforGPRSReq",
            MessageType::SendRouteingInfoforGPRSResp => "SendRouteingInfoforGPRSResp",
            MessageType::FailureReportReq => "FailureReportReq",
            MessageType::FailureReportResp => "FailureReportResp",
            MessageType::NoteMSGPRSPresentReq => "NoteMSGPRSPresentReq",
            MessageType::NoteMSGPRSPresentResp => "NoteMSGPRSPresentResp",
            MessageType::IdentificationReq => "IdentificationReq",
            MessageType::IdentificationResp => "IdentificationResp",
            MessageType::SGSNCtxtReq => "SGSNCtxtReq",
            MessageType::SGSNCtxtResp => "SGSNCtxtResp",
            MessageType::SGSNCtxtAck => "SGSNCtxtAck",
            MessageType::ForwardRelocationReq => "ForwardRelocationReq",
            MessageType::ForwardRelocationResp => "ForwardRelocationResp",
            MessageType::ForwardRelocationComplete => "ForwardRelocationComplete",
            MessageType::RelocationCancelReq => "RelocationCancelReq",
            MessageType::RelocationCancelResp => "RelocationCancelResp",
            MessageType::ForwardSRNSCtxt => "ForwardSRNSCtxt",
            MessageType::ForwardRelocationCompleteAck => "ForwardRelocationCompleteAck",
            MessageType::ForwardSRNSCtxtAck => "ForwardSRNSCtxtAck",
            MessageType::UERegistrationQueryReq => "UERegistrationQueryReq",
            MessageType::UERegistrationQueryResp => "UERegistrationQueryResp",
            MessageType::RANInfoRelay => "RANInfoRelay",
            MessageType::MBMSNotifReq => "MBMSNotifReq",
            MessageType::MBMSNotifResp => "MBMSNotifResp",
            MessageType::MBMSNotifRejectReq => "MBMSNotifRejectReq",
            MessageType::MBMSNotifRejectResp => "MBMSNotifRejectResp",
            MessageType::CreateMBMSCtxtReq => "CreateMBMSCtxtReq",
            MessageType::CreateMBMSCtxtResp => "CreateMBMSCtxtResp",
            MessageType::UpdateMBMSCtxtReq => "UpdateMBMSCtxtReq",
            MessageType::UpdateMBMSCtxtResp => "UpdateMBMSCtxtResp",
            MessageType::DeleteMBMSCtxtReq => "DeleteMBMSCtxtReq",
            MessageType::DeleteMBMSCtxtResp => "DeleteMBMSCtxtResp",
            MessageType::MBMSRegistrationReq => "MBMSRegistrationReq",
            MessageType::MBMSRegistrationResp => "MBMSRegistrationResp",
            MessageType::MBMSDeRegistrationReq => "MBMSDeRegistrationReq",
            MessageType::MBMSDeRegistrationResp => "MBMSDeRegistrationResp",
            MessageType::MBMSSessionStartReq => "MBMSSessionStartReq",
            MessageType::MBMSSessionStartResp => "MBMSSessionStartResp",
            MessageType::MBMSSessionStopReq => "MBMSSessionStopReq",
            MessageType::MBMSSessionStopResp => "MBMSSessionStopResp",
            MessageType::MBMSSessionUpdateReq => "MBMSSessionUpdateReq",
            MessageType::MBMSSessionUpdateResp => "MBMSSessionUpdateResp",
            MessageType::MSInfoChangeNotifReq => "MSInfoChangeNotifReq",
            MessageType::MSInfoChangeNotifResp => "MSInfoChangeNotifResp",
            MessageType::DataRecordTransferReq => "DataRecordTransferReq",
            MessageType::DataRecordTransferResp => "DataRecordTransferResp",
        }
    }

    /// The ordered IE template for this message, per TS 29.060 section 7.
    pub fn template(self) -> &'static [TemplateEntry] {
        match self {
            MessageType::EchoReq => &ECHOREQ_TEMPLATE,
            MessageType::EchoResp => &ECHORESP_TEMPLATE,
            MessageType::VersionNotSupported => &VERSIONNOTSUPPORTED_TEMPLATE,
            MessageType::NodeAliveReq => &NODEALIVEREQ_TEMPLATE,
            MessageType::NodeAliveResp => &NODEALIVERESP_TEMPLATE,
            MessageType::RedirectionReq => &REDIRECTIONREQ_TEMPLATE,
            MessageType::RedirectionResp => &REDIRECTIONRESP_TEMPLATE,
            MessageType::CreatePDPCtxtReq => &CREATEPDPCTXTREQ_TEMPLATE,
            MessageType::CreatePDPCtxtResp => &CREATEPDPCTXTRESP_TEMPLATE,
            MessageType::UpdatePDPCtxtReqGGSN => &UPDATEPDPCTXTREQGGSN_TEMPLATE,
            MessageType::UpdatePDPCtxtReqSGSN => &UPDATEPDPCTXTREQSGSN_TEMPLATE,
            MessageType::UpdatePDPCtxtRespGGSN => &UPDATEPDPCTXTRESPGGSN_TEMPLATE,
            MessageType::UpdatePDPCtxtRespSGSN => &UPDATEPDPCTXTRESPSGSN_TEMPLATE,
            MessageType::DeletePDPCtxtReq => &DELETEPDPCTXTREQ_TEMPLATE,
            MessageType::DeletePDPCtxtResp => &DELETEPDPCTXTRESP_TEMPLATE,
            MessageType::InitiatePDPCtxtActivationReq => &INITIATEPDPCTXTACTIVATIONREQ_TEMPLATE,
            MessageType::InitiatePDPCtxtActivationResp => &INITIATEPDPCTXTACTIVATIONRESP_TEMPLATE,
            MessageType::ErrorInd => &ERRORIND_TEMPLATE,
            MessageType::PDUNotifReq => &PDUNOTIFREQ_TEMPLATE,
            MessageType::PDUNotifResp => &PDUNOTIFRESP_TEMPLATE,
            MessageType::PDUNotifRejectReq => &PDUNOTIFREJECTREQ_TEMPLATE,
            MessageType::PDUNotifRejectResp => &PDUNOTIFREJECTRESP_TEMPLATE,
            MessageType::SupportedExtHeadersNotif => &SUPPORTEDEXTHEADERSNOTIF_TEMPLATE,
            MessageType::SendRouteingInfoforGPRSReq => &SENDROUTEINGINFOFORGPRSREQ_TEMPLATE,
            MessageType::SendRouteingInfoforGPRSResp => &SENDROUTEINGINFOFORGPRSRESP_TEMPLATE,
            MessageType::FailureReportReq => &FAILUREREPORTREQ_TEMPLATE,
            MessageType::FailureReportResp => &FAILUREREPORTRESP_TEMPLATE,
            MessageType::NoteMSGPRSPresentReq => &NOTEMSGPRSPRESENTREQ_TEMPLATE,
            MessageType::NoteMSGPRSPresentResp => &NOTEMSGPRSPRESENTRESP_TEMPLATE,
            MessageType::IdentificationReq => &IDENTIFICATIONREQ_TEMPLATE,
            MessageType::IdentificationResp => &IDENTIFICATIONRESP_TEMPLATE,
            MessageType::SGSNCtxtReq => &SGSNCTXTREQ_TEMPLATE,
            MessageType::SGSNCtxtResp => &SGSNCTXTRESP_TEMPLATE,
            MessageType::SGSNCtxtAck => &SGSNCTXTACK_TEMPLATE,
            MessageType::ForwardRelocationReq => &FORWARDRELOCATIONREQ_TEMPLATE,
            MessageType::ForwardRelocationResp => &FORWARDRELOCATIONRESP_TEMPLATE,
            MessageType::ForwardRelocationComplete => &FORWARDRELOCATIONCOMPLETE_TEMPLATE,
            MessageType::RelocationCancelReq => &RELOCATIONCANCELREQ_TEMPLATE,
            MessageType::RelocationCancelResp => &RELOCATIONCANCELRESP_TEMPLATE,
            MessageType::ForwardSRNSCtxt => &FORWARDSRNSCTXT_TEMPLATE,
            MessageType::ForwardRelocationCompleteAck => &FORWARDRELOCATIONCOMPLETEACK_TEMPLATE,
            MessageType::ForwardSRNSCtxtAck => &FORWARDSRNSCTXTACK_TEMPLATE,
            MessageType::UERegistrationQueryReq => &UEREGISTRATIONQUERYREQ_TEMPLATE,
            MessageType::UERegistrationQueryResp => &UEREGISTRATIONQUERYRESP_TEMPLATE,
            MessageType::RANInfoRelay => &RANINFORELAY_TEMPLATE,
            MessageType::MBMSNotifReq => &MBMSNOTIFREQ_TEMPLATE,
            MessageType::MBMSNotifResp => &MBMSNOTIFRESP_TEMPLATE,
            MessageType::MBMSNotifRejectReq => &MBMSNOTIFREJECTREQ_TEMPLATE,
            MessageType::MBMSNotifRejectResp => &MBMSNOTIFREJECTRESP_TEMPLATE,
            MessageType::CreateMBMSCtxtReq => &CREATEMBMSCTXTREQ_TEMPLATE,
            MessageType::CreateMBMSCtxtResp => &CREATEMBMSCTXTRESP_TEMPLATE,
            MessageType::UpdateMBMSCtxtReq => &UPDATEMBMSCTXTREQ_TEMPLATE,
            MessageType::UpdateMBMSCtxtResp => &UPDATEMBMSCTXTRESP_TEMPLATE,
            MessageType::DeleteMBMSCtxtReq => &DELETEMBMSCTXTREQ_TEMPLATE,
            MessageType::DeleteMBMSCtxtResp => &DELETEMBMSCTXTRESP_TEMPLATE,
            MessageType::MBMSRegistrationReq => &MBMSREGISTRATIONREQ_TEMPLATE,
            MessageType::MBMSRegistrationResp => &MBMSREGISTRATIONRESP_TEMPLATE,
            MessageType::MBMSDeRegistrationReq => &MBMSDEREGISTRATIONREQ_TEMPLATE,
            MessageType::MBMSDeRegistrationResp => &MBMSDEREGISTRATIONRESP_TEMPLATE,
            MessageType::MBMSSessionStartReq => &MBMSSESSIONSTARTREQ_TEMPLATE,
            MessageType::MBMSSessionStartResp => &MBMSSESSIONSTARTRESP_TEMPLATE,
            MessageType::MBMSSessionStopReq => &MBMSSESSIONSTOPREQ_TEMPLATE,
            MessageType::MBMSSessionStopResp => &MBMSSESSIONSTOPRESP_TEMPLATE,
            MessageType::MBMSSessionUpdateReq => &MBMSSESSIONUPDATEREQ_TEMPLATE,
            MessageType::MBMSSessionUpdateResp => &MBMSSESSIONUPDATERESP_TEMPLATE,
            MessageType::MSInfoChangeNotifReq => &MSINFOCHANGENOTIFREQ_TEMPLATE,
            MessageType::MSInfoChangeNotifResp => &MSINFOCHANGENOTIFRESP_TEMPLATE,
            MessageType::DataRecordTransferReq => &DATARECORDTRANSFERREQ_TEMPLATE,
            MessageType::DataRecordTransferResp => &DATARECORDTRANSFERRESP_TEMPLATE,
        }
    }
}

static ECHOREQ_TEMPLATE: [TemplateEntry; 1] = [
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static ECHORESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static VERSIONNOTSUPPORTED_TEMPLATE: [TemplateEntry; 0] = [
];

static NODEALIVEREQ_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "NodeAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: true },
    TemplateEntry { field: "AltNodeAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static NODEALIVERESP_TEMPLATE: [TemplateEntry; 1] = [
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static REDIRECTIONREQ_TEMPLATE: [TemplateEntry; 4] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "RecommendedNodeAddr", ie_type: IeType::RecommendedNodeAddr, mandatory: false },
    TemplateEntry { field: "AltRecommendedNodeAddr", ie_type: IeType::RecommendedNodeAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static REDIRECTIONRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static CREATEPDPCTXTREQ_TEMPLATE: [TemplateEntry; 39] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: false },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "SelectionMode", ie_type: IeType::SelectionMode, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "LinkedNSAPI", ie_type: IeType::NSAPI, mandatory: false },
    TemplateEntry { field: "ChargingCharacteristics", ie_type: IeType::ChargingCharacteristics, mandatory: false },
    TemplateEntry { field: "TraceReference", ie_type: IeType::TraceReference, mandatory: false },
    TemplateEntry { field: "TraceType", ie_type: IeType::TraceType, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: false },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "SGSNAddrForSignalling", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "MSISDN", ie_type: IeType::MSISDN, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: true },
    TemplateEntry { field: "TFT", ie_type: IeType::TFT, mandatory: false },
    TemplateEntry { field: "TriggerId", ie_type: IeType::TriggerId, mandatory: false },
    TemplateEntry { field: "OMCIdentity", ie_type: IeType::OMCIdentity, mandatory: false },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: false },
    TemplateEntry { field: "APNRestriction", ie_type: IeType::APNRestriction, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "CAMELChargingInfoContainer", ie_type: IeType::CAMELChargingInfoContainer, mandatory: false },
    TemplateEntry { field: "AdditionalTraceInfo", ie_type: IeType::AdditionalTraceInfo, mandatory: false },
    TemplateEntry { field: "CorrelationID", ie_type: IeType::CorrelationID, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "UCI", ie_type: IeType::UCI, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "SignallingPriorityInd", ie_type: IeType::SignallingPriorityInd, mandatory: false },
    TemplateEntry { field: "CNOperatorSelectionEntity", ie_type: IeType::CNOperatorSelectionEntity, mandatory: false },
    TemplateEntry { field: "MappedUEUsageType", ie_type: IeType::MappedUEUsageType, mandatory: false },
    TemplateEntry { field: "UPFSelectionIndFlags", ie_type: IeType::UPFSelectionIndFlags, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static CREATEPDPCTXTRESP_TEMPLATE: [TemplateEntry; 27] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "ReorderingRequired", ie_type: IeType::ReorderingRequired, mandatory: false },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: false },
    TemplateEntry { field: "ChargingID", ie_type: IeType::ChargingID, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "GGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: false },
    TemplateEntry { field: "ChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "AltChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: false },
    TemplateEntry { field: "APNRestriction", ie_type: IeType::APNRestriction, mandatory: false },
    TemplateEntry { field: "MSInfoChangeReportingAction", ie_type: IeType::MSInfoChangeReportingAction, mandatory: false },
    TemplateEntry { field: "BearerControlMode", ie_type: IeType::BearerControlMode, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "CSGInfoReportingAction", ie_type: IeType::CSGInfoReportingAction, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "GGSNBackOffTime", ie_type: IeType::GGSNBackOffTime, mandatory: false },
    TemplateEntry { field: "ExtCommonFlagsII", ie_type: IeType::ExtCommonFlagsII, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEPDPCTXTREQGGSN_TEMPLATE: [TemplateEntry; 17] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: false },
    TemplateEntry { field: "TFT", ie_type: IeType::TFT, mandatory: false },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: false },
    TemplateEntry { field: "APNRestriction", ie_type: IeType::APNRestriction, mandatory: false },
    TemplateEntry { field: "MSInfoChangeReportingAction", ie_type: IeType::MSInfoChangeReportingAction, mandatory: false },
    TemplateEntry { field: "DirectTunnelFlags", ie_type: IeType::DirectTunnelFlags, mandatory: false },
    TemplateEntry { field: "BearerControlMode", ie_type: IeType::BearerControlMode, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "CSGInfoReportingAction", ie_type: IeType::CSGInfoReportingAction, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEPDPCTXTREQSGSN_TEMPLATE: [TemplateEntry; 31] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: false },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "TraceReference", ie_type: IeType::TraceReference, mandatory: false },
    TemplateEntry { field: "TraceType", ie_type: IeType::TraceType, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "AltSGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltSGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: true },
    TemplateEntry { field: "TFT", ie_type: IeType::TFT, mandatory: false },
    TemplateEntry { field: "TriggerId", ie_type: IeType::TriggerId, mandatory: false },
    TemplateEntry { field: "OMCIdentity", ie_type: IeType::OMCIdentity, mandatory: false },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "AdditionalTraceInfo", ie_type: IeType::AdditionalTraceInfo, mandatory: false },
    TemplateEntry { field: "DirectTunnelFlags", ie_type: IeType::DirectTunnelFlags, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "UCI", ie_type: IeType::UCI, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "SignallingPriorityInd", ie_type: IeType::SignallingPriorityInd, mandatory: false },
    TemplateEntry { field: "CNOperatorSelectionEntity", ie_type: IeType::CNOperatorSelectionEntity, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEPDPCTXTRESPGGSN_TEMPLATE: [TemplateEntry; 21] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "ChargingID", ie_type: IeType::ChargingID, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "GGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: false },
    TemplateEntry { field: "ChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "AltChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: false },
    TemplateEntry { field: "APNRestriction", ie_type: IeType::APNRestriction, mandatory: false },
    TemplateEntry { field: "BearerControlMode", ie_type: IeType::BearerControlMode, mandatory: false },
    TemplateEntry { field: "MSInfoChangeReportingAction", ie_type: IeType::MSInfoChangeReportingAction, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "CSGInfoReportingAction", ie_type: IeType::CSGInfoReportingAction, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEPDPCTXTRESPSGSN_TEMPLATE: [TemplateEntry; 12] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: false },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "DirectTunnelFlags", ie_type: IeType::DirectTunnelFlags, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "APNAMBR", ie_type: IeType::AMBR, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DELETEPDPCTXTREQ_TEMPLATE: [TemplateEntry; 9] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: false },
    TemplateEntry { field: "TeardownInd", ie_type: IeType::TeardownInd, mandatory: false },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "ULITimestamp", ie_type: IeType::ULITimestamp, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DELETEPDPCTXTRESP_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "ULITimestamp", ie_type: IeType::ULITimestamp, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static INITIATEPDPCTXTACTIVATIONREQ_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry { field: "LinkedNSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: true },
    TemplateEntry { field: "TFT", ie_type: IeType::TFT, mandatory: false },
    TemplateEntry { field: "CorrelationID", ie_type: IeType::CorrelationID, mandatory: true },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityI", ie_type: IeType::EvolvedAllocationRetentionPriorityI, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static INITIATEPDPCTXTACTIVATIONRESP_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static ERRORIND_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: true },
    TemplateEntry { field: "GTPUPeerAddr", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static PDUNOTIFREQ_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static PDUNOTIFRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static PDUNOTIFREJECTREQ_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "PCO", ie_type: IeType::PCO, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static PDUNOTIFREJECTRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static SUPPORTEDEXTHEADERSNOTIF_TEMPLATE: [TemplateEntry; 1] = [
    TemplateEntry { field: "ExtHeaderTypeList", ie_type: IeType::ExtHeaderTypeList, mandatory: true },
];

static SENDROUTEINGINFOFORGPRSREQ_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static SENDROUTEINGINFOFORGPRSRESP_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "MAPCause", ie_type: IeType::MAPCause, mandatory: false },
    TemplateEntry { field: "MSNotReachableReason", ie_type: IeType::MSNotReachableReason, mandatory: false },
    TemplateEntry { field: "GSNAddr", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FAILUREREPORTREQ_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FAILUREREPORTRESP_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "MAPCause", ie_type: IeType::MAPCause, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static NOTEMSGPRSPRESENTREQ_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "GSNAddr", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static NOTEMSGPRSPRESENTRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static IDENTIFICATIONREQ_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: true },
    TemplateEntry { field: "PTMSI", ie_type: IeType::PTMSI, mandatory: true },
    TemplateEntry { field: "PTMSISignature", ie_type: IeType::PTMSISignature, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "HopCounter", ie_type: IeType::HopCounter, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static IDENTIFICATIONRESP_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "AuthentTriplet", ie_type: IeType::AuthentTriplet, mandatory: false },
    TemplateEntry { field: "AuthentQuintuplet", ie_type: IeType::AuthentQuintuplet, mandatory: false },
    TemplateEntry { field: "UEUsageType", ie_type: IeType::UEUsageType, mandatory: false },
    TemplateEntry { field: "IOVUpdatesCounter", ie_type: IeType::IOVUpdatesCounter, mandatory: false },
];

static SGSNCTXTREQ_TEMPLATE: [TemplateEntry; 13] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: true },
    TemplateEntry { field: "TLLI", ie_type: IeType::TLLI, mandatory: false },
    TemplateEntry { field: "PTMSI", ie_type: IeType::PTMSI, mandatory: false },
    TemplateEntry { field: "PTMSISignature", ie_type: IeType::PTMSISignature, mandatory: false },
    TemplateEntry { field: "MSValidated", ie_type: IeType::MSValidated, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "AltSGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "SGSNNumber", ie_type: IeType::SGSNNumber, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: false },
    TemplateEntry { field: "HopCounter", ie_type: IeType::HopCounter, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static SGSNCTXTRESP_TEMPLATE: [TemplateEntry; 33] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "RABContext", ie_type: IeType::RABContext, mandatory: false },
    TemplateEntry { field: "RadioPrioritySMS", ie_type: IeType::RadioPrioritySMS, mandatory: false },
    TemplateEntry { field: "RadioPriority", ie_type: IeType::RadioPriority, mandatory: false },
    TemplateEntry { field: "PacketFlowId", ie_type: IeType::PacketFlowId, mandatory: false },
    TemplateEntry { field: "ChargingCharacteristics", ie_type: IeType::ChargingCharacteristics, mandatory: false },
    TemplateEntry { field: "RadioPriorityLCS", ie_type: IeType::RadioPriorityLCS, mandatory: false },
    TemplateEntry { field: "MMContext", ie_type: IeType::MMContext, mandatory: false },
    TemplateEntry { field: "PDPContext", ie_type: IeType::PDPContext, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PDPContextPrioritization", ie_type: IeType::PDPContextPrioritization, mandatory: false },
    TemplateEntry { field: "MBMSUEContext", ie_type: IeType::MBMSUEContext, mandatory: false },
    TemplateEntry { field: "SubscribedRFSPIndex", ie_type: IeType::RFSPIndex, mandatory: false },
    TemplateEntry { field: "RFSPIndex", ie_type: IeType::RFSPIndex, mandatory: false },
    TemplateEntry { field: "ColocatedGGSNPGWFQDN", ie_type: IeType::FQDN, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityII", ie_type: IeType::EvolvedAllocationRetentionPriorityII, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "UENetCap", ie_type: IeType::UENetCap, mandatory: false },
    TemplateEntry { field: "UEAMBR", ie_type: IeType::UEAMBR, mandatory: false },
    TemplateEntry { field: "APNAMBRWithNSAPI", ie_type: IeType::APNAMBRWithNSAPI, mandatory: false },
    TemplateEntry { field: "SignallingPriorityIndWithNSAPI", ie_type: IeType::SignallingPriorityIndWithNSAPI, mandatory: false },
    TemplateEntry { field: "HigherBitratesThan16MbpsFlag", ie_type: IeType::HigherBitratesThan16MbpsFlag, mandatory: false },
    TemplateEntry { field: "SelectionModeWithNSAPI", ie_type: IeType::SelectionModeWithNSAPI, mandatory: false },
    TemplateEntry { field: "LocalHomeNetworkIDWithNSAPI", ie_type: IeType::LocalHomeNetworkIDWithNSAPI, mandatory: false },
    TemplateEntry { field: "UEUsageType", ie_type: IeType::UEUsageType, mandatory: false },
    TemplateEntry { field: "ExtCommonFlagsII", ie_type: IeType::ExtCommonFlagsII, mandatory: false },
    TemplateEntry { field: "UESCEFPDNConnection", ie_type: IeType::SCEFPDNConnection, mandatory: false },
    TemplateEntry { field: "IOVUpdatesCounter", ie_type: IeType::IOVUpdatesCounter, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static SGSNCTXTACK_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDDataII", ie_type: IeType::TEIDDataII, mandatory: false },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "SGSNNumber", ie_type: IeType::SGSNNumber, mandatory: false },
    TemplateEntry { field: "NodeIdent", ie_type: IeType::NodeIdent, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDRELOCATIONREQ_TEMPLATE: [TemplateEntry; 44] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "RANAPCause", ie_type: IeType::RANAPCause, mandatory: true },
    TemplateEntry { field: "PacketFlowId", ie_type: IeType::PacketFlowId, mandatory: false },
    TemplateEntry { field: "ChargingCharacteristics", ie_type: IeType::ChargingCharacteristics, mandatory: false },
    TemplateEntry { field: "MMContext", ie_type: IeType::MMContext, mandatory: true },
    TemplateEntry { field: "PDPContext", ie_type: IeType::PDPContext, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "TargetIdent", ie_type: IeType::TargetIdent, mandatory: true },
    TemplateEntry { field: "UTRANTransparentContainer", ie_type: IeType::UTRANTransparentContainer, mandatory: true },
    TemplateEntry { field: "PDPContextPrioritization", ie_type: IeType::PDPContextPrioritization, mandatory: false },
    TemplateEntry { field: "MBMSUEContext", ie_type: IeType::MBMSUEContext, mandatory: false },
    TemplateEntry { field: "SelectedPLMNID", ie_type: IeType::SelectedPLMNID, mandatory: false },
    TemplateEntry { field: "BSSContainer", ie_type: IeType::BSSContainer, mandatory: false },
    TemplateEntry { field: "CellIdent", ie_type: IeType::CellIdent, mandatory: false },
    TemplateEntry { field: "BSSGPCause", ie_type: IeType::BSSGPCause, mandatory: false },
    TemplateEntry { field: "PSHandoverXIDParams", ie_type: IeType::PSHandoverXIDParams, mandatory: false },
    TemplateEntry { field: "DirectTunnelFlags", ie_type: IeType::DirectTunnelFlags, mandatory: false },
    TemplateEntry { field: "ReliableInterRATHandoverInfo", ie_type: IeType::ReliableInterRATHandoverInfo, mandatory: false },
    TemplateEntry { field: "SubscribedRFSPIndex", ie_type: IeType::RFSPIndex, mandatory: false },
    TemplateEntry { field: "RFSPIndex", ie_type: IeType::RFSPIndex, mandatory: false },
    TemplateEntry { field: "ColocatedGGSNPGWFQDN", ie_type: IeType::FQDN, mandatory: false },
    TemplateEntry { field: "EvolvedAllocationRetentionPriorityII", ie_type: IeType::EvolvedAllocationRetentionPriorityII, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "CSGID", ie_type: IeType::CSGID, mandatory: false },
    TemplateEntry { field: "CMI", ie_type: IeType::CMI, mandatory: false },
    TemplateEntry { field: "UENetCap", ie_type: IeType::UENetCap, mandatory: false },
    TemplateEntry { field: "UEAMBR", ie_type: IeType::UEAMBR, mandatory: false },
    TemplateEntry { field: "APNAMBRWithNSAPI", ie_type: IeType::APNAMBRWithNSAPI, mandatory: false },
    TemplateEntry { field: "SignallingPriorityIndWithNSAPI", ie_type: IeType::SignallingPriorityIndWithNSAPI, mandatory: false },
    TemplateEntry { field: "HigherBitratesThan16MbpsFlag", ie_type: IeType::HigherBitratesThan16MbpsFlag, mandatory: false },
    TemplateEntry { field: "AdditionalMMContextForSRVCC", ie_type: IeType::AdditionalMMContextForSRVCC, mandatory: false },
    TemplateEntry { field: "AdditionalFlagsForSRVCC", ie_type: IeType::AdditionalFlagsForSRVCC, mandatory: false },
    TemplateEntry { field: "STNSR", ie_type: IeType::STNSR, mandatory: false },
    TemplateEntry { field: "CMSISDN", ie_type: IeType::CMSISDN, mandatory: false },
    TemplateEntry { field: "ExtRANAPCause", ie_type: IeType::ExtRANAPCause, mandatory: false },
    TemplateEntry { field: "ENodeBID", ie_type: IeType::ENodeBID, mandatory: false },
    TemplateEntry { field: "SelectionModeWithNSAPI", ie_type: IeType::SelectionModeWithNSAPI, mandatory: false },
    TemplateEntry { field: "UEUsageType", ie_type: IeType::UEUsageType, mandatory: false },
    TemplateEntry { field: "ExtCommonFlagsII", ie_type: IeType::ExtCommonFlagsII, mandatory: false },
    TemplateEntry { field: "UESCEFPDNConnection", ie_type: IeType::SCEFPDNConnection, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDRELOCATIONRESP_TEMPLATE: [TemplateEntry; 16] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "TEIDDataII", ie_type: IeType::TEIDDataII, mandatory: false },
    TemplateEntry { field: "RANAPCause", ie_type: IeType::RANAPCause, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "UTRANTransparentContainer", ie_type: IeType::UTRANTransparentContainer, mandatory: false },
    TemplateEntry { field: "RABSetupInfo", ie_type: IeType::RABSetupInfo, mandatory: false },
    TemplateEntry { field: "AdditionalRABSetupInfo", ie_type: IeType::AdditionalRABSetupInfo, mandatory: false },
    TemplateEntry { field: "SGSNNumber", ie_type: IeType::SGSNNumber, mandatory: false },
    TemplateEntry { field: "BSSContainer", ie_type: IeType::BSSContainer, mandatory: false },
    TemplateEntry { field: "BSSGPCause", ie_type: IeType::BSSGPCause, mandatory: false },
    TemplateEntry { field: "ListOfSetupPFCs", ie_type: IeType::ListOfSetupPFCs, mandatory: false },
    TemplateEntry { field: "ExtRANAPCause", ie_type: IeType::ExtRANAPCause, mandatory: false },
    TemplateEntry { field: "NodeIdent", ie_type: IeType::NodeIdent, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDRELOCATIONCOMPLETE_TEMPLATE: [TemplateEntry; 1] = [
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static RELOCATIONCANCELREQ_TEMPLATE: [TemplateEntry; 5] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "ExtRANAPCause", ie_type: IeType::ExtRANAPCause, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static RELOCATIONCANCELRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDSRNSCTXT_TEMPLATE: [TemplateEntry; 4] = [
    TemplateEntry { field: "RABContext", ie_type: IeType::RABContext, mandatory: true },
    TemplateEntry { field: "SourceRNCPDCPContextInfo", ie_type: IeType::SourceRNCPDCPContextInfo, mandatory: false },
    TemplateEntry { field: "PDUNumbers", ie_type: IeType::PDUNumbers, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDRELOCATIONCOMPLETEACK_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static FORWARDSRNSCTXTACK_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

// TS 29.060 names this pair (type codes 61/62) but its reference source
// never registers a message class for them, only the type codes. Modelled
// on the shape of the other IMSI-keyed query/ack pairs in this catalogue
// (e.g. Note MS GPRS Present).
static UEREGISTRATIONQUERYREQ_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UEREGISTRATIONQUERYRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static RANINFORELAY_TEMPLATE: [TemplateEntry; 4] = [
    TemplateEntry { field: "RANTransparentContainer", ie_type: IeType::RANTransparentContainer, mandatory: true },
    TemplateEntry { field: "RIMRoutingAddr", ie_type: IeType::RIMRoutingAddr, mandatory: false },
    TemplateEntry { field: "RIMRoutingAddrDiscriminator", ie_type: IeType::RIMRoutingAddrDiscriminator, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSNOTIFREQ_TEMPLATE: [TemplateEntry; 8] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "MBMSPCO", ie_type: IeType::MBMSPCO, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSNOTIFRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSNOTIFREJECTREQ_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: true },
    TemplateEntry { field: "NSAPI", ie_type: IeType::NSAPI, mandatory: true },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSNOTIFREJECTRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static CREATEMBMSCTXTREQ_TEMPLATE: [TemplateEntry; 22] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "SelectionMode", ie_type: IeType::SelectionMode, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "TraceReference", ie_type: IeType::TraceReference, mandatory: false },
    TemplateEntry { field: "TraceType", ie_type: IeType::TraceType, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "SGSNAddrForSignalling", ie_type: IeType::GSNAddr, mandatory: true },
    TemplateEntry { field: "MSISDN", ie_type: IeType::MSISDN, mandatory: false },
    TemplateEntry { field: "TriggerId", ie_type: IeType::TriggerId, mandatory: false },
    TemplateEntry { field: "OMCIdentity", ie_type: IeType::OMCIdentity, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "MBMSPCO", ie_type: IeType::MBMSPCO, mandatory: false },
    TemplateEntry { field: "AdditionalTraceInfo", ie_type: IeType::AdditionalTraceInfo, mandatory: false },
    TemplateEntry { field: "EnhancedNSAPI", ie_type: IeType::EnhancedNSAPI, mandatory: true },
    TemplateEntry { field: "AdditionalMBMSTraceInfo", ie_type: IeType::AdditionalMBMSTraceInfo, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static CREATEMBMSCTXTRESP_TEMPLATE: [TemplateEntry; 10] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "ChargingID", ie_type: IeType::ChargingID, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "ChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "AltChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "MBMSPCO", ie_type: IeType::MBMSPCO, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEMBMSCTXTREQ_TEMPLATE: [TemplateEntry; 16] = [
    TemplateEntry { field: "RAI", ie_type: IeType::RAI, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "TraceReference", ie_type: IeType::TraceReference, mandatory: false },
    TemplateEntry { field: "TraceType", ie_type: IeType::TraceType, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltSGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "TriggerId", ie_type: IeType::TriggerId, mandatory: false },
    TemplateEntry { field: "OMCIdentity", ie_type: IeType::OMCIdentity, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: false },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "MSTimeZone", ie_type: IeType::MSTimeZone, mandatory: false },
    TemplateEntry { field: "AdditionalTraceInfo", ie_type: IeType::AdditionalTraceInfo, mandatory: false },
    TemplateEntry { field: "EnhancedNSAPI", ie_type: IeType::EnhancedNSAPI, mandatory: true },
    TemplateEntry { field: "AdditionalMBMSTraceInfo", ie_type: IeType::AdditionalMBMSTraceInfo, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static UPDATEMBMSCTXTRESP_TEMPLATE: [TemplateEntry; 9] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "ChargingID", ie_type: IeType::ChargingID, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "ChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "AltChargingGatewayAddr", ie_type: IeType::ChargingGatewayAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DELETEMBMSCTXTREQ_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: false },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: false },
    TemplateEntry { field: "MBMSPCO", ie_type: IeType::MBMSPCO, mandatory: false },
    TemplateEntry { field: "EnhancedNSAPI", ie_type: IeType::EnhancedNSAPI, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DELETEMBMSCTXTRESP_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "MBMSPCO", ie_type: IeType::MBMSPCO, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSREGISTRATIONREQ_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltSGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSREGISTRATIONRESP_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "TMGI", ie_type: IeType::TMGI, mandatory: false },
    TemplateEntry { field: "RequiredMBMSBearerCap", ie_type: IeType::RequiredMBMSBearerCap, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSDEREGISTRATIONREQ_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSDEREGISTRATIONRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONSTARTREQ_TEMPLATE: [TemplateEntry; 18] = [
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltGGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "QoSProfile", ie_type: IeType::QoSProfile, mandatory: true },
    TemplateEntry { field: "CommonFlags", ie_type: IeType::CommonFlags, mandatory: true },
    TemplateEntry { field: "TMGI", ie_type: IeType::TMGI, mandatory: true },
    TemplateEntry { field: "MBMSServiceArea", ie_type: IeType::MBMSServiceArea, mandatory: true },
    TemplateEntry { field: "MBMSSessionIdent", ie_type: IeType::MBMSSessionIdent, mandatory: false },
    TemplateEntry { field: "MBMS2G3GInd", ie_type: IeType::MBMS2G3GInd, mandatory: true },
    TemplateEntry { field: "MBMSSessionDuration", ie_type: IeType::MBMSSessionDuration, mandatory: true },
    TemplateEntry { field: "MBMSSessionRepetitionNumber", ie_type: IeType::MBMSSessionRepetitionNumber, mandatory: false },
    TemplateEntry { field: "MBMSTimeToDataTransfer", ie_type: IeType::MBMSTimeToDataTransfer, mandatory: true },
    TemplateEntry { field: "MBMSFlowIdent", ie_type: IeType::MBMSFlowIdent, mandatory: false },
    TemplateEntry { field: "MBMSIPMulticastDistrib", ie_type: IeType::MBMSIPMulticastDistrib, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONSTARTRESP_TEMPLATE: [TemplateEntry; 9] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "Recovery", ie_type: IeType::Recovery, mandatory: false },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "SGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "AltSGSNAddrForUserTraffic", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "MBMSDistribAck", ie_type: IeType::MBMSDistribAck, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONSTOPREQ_TEMPLATE: [TemplateEntry; 4] = [
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "MBMSFlowIdent", ie_type: IeType::MBMSFlowIdent, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONSTOPRESP_TEMPLATE: [TemplateEntry; 2] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONUPDATEREQ_TEMPLATE: [TemplateEntry; 11] = [
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "EndUserAddr", ie_type: IeType::EndUserAddr, mandatory: true },
    TemplateEntry { field: "APN", ie_type: IeType::APN, mandatory: true },
    TemplateEntry { field: "GGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "TMGI", ie_type: IeType::TMGI, mandatory: true },
    TemplateEntry { field: "MBMSSessionDuration", ie_type: IeType::MBMSSessionDuration, mandatory: true },
    TemplateEntry { field: "MBMSServiceArea", ie_type: IeType::MBMSServiceArea, mandatory: true },
    TemplateEntry { field: "MBMSSessionIdent", ie_type: IeType::MBMSSessionIdent, mandatory: false },
    TemplateEntry { field: "MBMSSessionRepetitionNumber", ie_type: IeType::MBMSSessionRepetitionNumber, mandatory: false },
    TemplateEntry { field: "MBMSFlowIdent", ie_type: IeType::MBMSFlowIdent, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MBMSSESSIONUPDATERESP_TEMPLATE: [TemplateEntry; 6] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "TEIDDataI", ie_type: IeType::TEIDDataI, mandatory: false },
    TemplateEntry { field: "TEIDCP", ie_type: IeType::TEIDCP, mandatory: false },
    TemplateEntry { field: "SGSNAddrForDataI", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "SGSNAddrForControlPlane", ie_type: IeType::GSNAddr, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MSINFOCHANGENOTIFREQ_TEMPLATE: [TemplateEntry; 8] = [
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "LinkedNSAPI", ie_type: IeType::NSAPI, mandatory: false },
    TemplateEntry { field: "RATType", ie_type: IeType::RATType, mandatory: true },
    TemplateEntry { field: "ULI", ie_type: IeType::ULI, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "ExtCommonFlags", ie_type: IeType::ExtCommonFlags, mandatory: false },
    TemplateEntry { field: "UCI", ie_type: IeType::UCI, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static MSINFOCHANGENOTIFRESP_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "IMSI", ie_type: IeType::IMSI, mandatory: false },
    TemplateEntry { field: "LinkedNSAPI", ie_type: IeType::NSAPI, mandatory: false },
    TemplateEntry { field: "IMEI", ie_type: IeType::IMEI, mandatory: false },
    TemplateEntry { field: "MSInfoChangeReportingAction", ie_type: IeType::MSInfoChangeReportingAction, mandatory: false },
    TemplateEntry { field: "CSGInfoReportingAction", ie_type: IeType::CSGInfoReportingAction, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DATARECORDTRANSFERREQ_TEMPLATE: [TemplateEntry; 5] = [
    TemplateEntry { field: "PacketTransferCmd", ie_type: IeType::PacketTransferCmd, mandatory: true },
    TemplateEntry { field: "DataRecordPacket", ie_type: IeType::DataRecordPacket, mandatory: false },
    TemplateEntry { field: "SeqNumReleasedPackets", ie_type: IeType::SeqNumReleasedPackets, mandatory: false },
    TemplateEntry { field: "SeqNumCancelledPackets", ie_type: IeType::SeqNumCancelledPackets, mandatory: false },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];

static DATARECORDTRANSFERRESP_TEMPLATE: [TemplateEntry; 3] = [
    TemplateEntry { field: "Cause", ie_type: IeType::Cause, mandatory: true },
    TemplateEntry { field: "RequestsResponded", ie_type: IeType::RequestsResponded, mandatory: true },
    TemplateEntry { field: "PrivateExt", ie_type: IeType::PrivateExt, mandatory: false },
];
