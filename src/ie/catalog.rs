// Generated from the GTPv1-C IE catalogue (3GPP TS 29.060 section 7.7).
// Each variant's discriminant is its wire type code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u8)]
pub enum IeType {
    Reserved = 0,
    Cause = 1,
    IMSI = 2,
    RAI = 3,
    TLLI = 4,
    PTMSI = 5,
    ReorderingRequired = 8,
    AuthentTriplet = 9,
    MAPCause = 11,
    PTMSISignature = 12,
    MSValidated = 13,
    Recovery = 14,
    SelectionMode = 15,
    TEIDDataI = 16,
    TEIDCP = 17,
    TEIDDataII = 18,
    TeardownInd = 19,
    NSAPI = 20,
    RANAPCause = 21,
    RABContext = 22,
    RadioPrioritySMS = 23,
    RadioPriority = 24,
    PacketFlowId = 25,
    ChargingCharacteristics = 26,
    TraceReference = 27,
    TraceType = 28,
    MSNotReachableReason = 29,
    PacketTransferCmd = 126,
    ChargingID = 127,
    EndUserAddr = 128,
    MMContext = 129,
    PDPContext = 130,
    APN = 131,
    PCO = 132,
    GSNAddr = 133,
    MSISDN = 134,
    QoSProfile = 135,
    AuthentQuintuplet = 136,
    TFT = 137,
    TargetIdent = 138,
    UTRANTransparentContainer = 139,
    RABSetupInfo = 140,
    ExtHeaderTypeList = 141,
    TriggerId = 142,
    OMCIdentity = 143,
    RANTransparentContainer = 144,
    PDPContextPrioritization = 145,
    AdditionalRABSetupInfo = 146,
    SGSNNumber = 147,
    CommonFlags = 148,
    APNRestriction = 149,
    RadioPriorityLCS = 150,
    RATType = 151,
    ULI = 152,
    MSTimeZone = 153,
    IMEI = 154,
    CAMELChargingInfoContainer = 155,
    MBMSUEContext = 156,
    TMGI = 157,
    RIMRoutingAddr = 158,
    MBMSPCO = 159,
    MBMSServiceArea = 160,
    SourceRNCPDCPContextInfo = 161,
    AdditionalTraceInfo = 162,
    HopCounter = 163,
    SelectedPLMNID = 164,
    MBMSSessionIdent = 165,
    MBMS2G3GInd = 166,
    EnhancedNSAPI = 167,
    MBMSSessionDuration = 168,
    AdditionalMBMSTraceInfo = 169,
    MBMSSessionRepetitionNumber = 170,
    MBMSTimeToDataTransfer = 171,
    BSSContainer = 173,
    CellIdent = 174,
    PDUNumbers = 175,
    BSSGPCause = 176,
    RequiredMBMSBearerCap = 177,
    RIMRoutingAddrDiscriminator = 178,
    ListOfSetupPFCs = 179,
    PSHandoverXIDParams = 180,
    MSInfoChangeReportingAction = 181,
    DirectTunnelFlags = 182,
    CorrelationID = 183,
    BearerControlMode = 184,
    MBMSFlowIdent = 185,
    MBMSIPMulticastDistrib = 186,
    MBMSDistribAck = 187,
    ReliableInterRATHandoverInfo = 188,
    RFSPIndex = 189,
    FQDN = 190,
    EvolvedAllocationRetentionPriorityI = 191,
    EvolvedAllocationRetentionPriorityII = 192,
    ExtCommonFlags = 193,
    UCI = 194,
    CSGInfoReportingAction = 195,
    CSGID = 196,
    CMI = 197,
    AMBR = 198,
    UENetCap = 199,
    UEAMBR = 200,
    APNAMBRWithNSAPI = 201,
    GGSNBackOffTime = 202,
    SignallingPriorityInd = 203,
    SignallingPriorityIndWithNSAPI = 204,
    HigherBitratesThan16MbpsFlag = 205,
    AdditionalMMContextForSRVCC = 207,
    AdditionalFlagsForSRVCC = 208,
    STNSR = 209,
    CMSISDN = 210,
    ExtRANAPCause = 211,
    ENodeBID = 212,
    SelectionModeWithNSAPI = 213,
    ULITimestamp = 214,
    LocalHomeNetworkIDWithNSAPI = 215,
    CNOperatorSelectionEntity = 216,
    UEUsageType = 217,
    ExtCommonFlagsII = 218,
    NodeIdent = 219,
    CIoTOptimSupportInd = 220,
    SCEFPDNConnection = 221,
    IOVUpdatesCounter = 222,
    MappedUEUsageType = 223,
    UPFSelectionIndFlags = 224,
    IETypeExt = 238,
    SeqNumReleasedPackets = 249,
    SeqNumCancelledPackets = 250,
    ChargingGatewayAddr = 251,
    DataRecordPacket = 252,
    RequestsResponded = 253,
    RecommendedNodeAddr = 254,
    PrivateExt = 255,
}

impl IeType {
    /// Human readable IE name, as catalogued in TS 29.060 section 7.7.
    pub fn description(self) -> &'static str {
        match self {
            IeType::Reserved => "Reserved",
            IeType::Cause => "Cause",
            IeType::IMSI => "International Mobile Subscriber Identity (IMSI)",
            IeType::RAI => "Routeing Area Identity (RAI)",
            IeType::TLLI => "Temporary Logical Link Identity (TLLI)",
            IeType::PTMSI => "Packet TMSI (P-TMSI)",
            IeType::ReorderingRequired => "Reordering Required",
            IeType::AuthentTriplet => "Authentication Triplet",
            IeType::MAPCause => "MAP Cause",
            IeType::PTMSISignature => "P-TMSI Signature",
            IeType::MSValidated => "MS Validated",
            IeType::Recovery => "Recovery",
            IeType::SelectionMode => "Selection Mode",
            IeType::TEIDDataI => "Tunnel Endpoint Identifier Data I",
            IeType::TEIDCP => "Tunnel Endpoint Identifier Control Plane",
            IeType::TEIDDataII => "Tunnel Endpoint Identifier Data II",
            IeType::TeardownInd => "Teardown Ind",
            IeType::NSAPI => "NSAPI",
            IeType::RANAPCause => "RANAP Cause",
            IeType::RABContext => "RAB Context",
            IeType::RadioPrioritySMS => "Radio Priority SMS",
            IeType::RadioPriority => "Radio Priority",
            IeType::PacketFlowId => "Packet Flow Id",
            IeType::ChargingCharacteristics => "Charging Characteristics",
            IeType::TraceReference => "Trace Reference",
            IeType::TraceType => "Trace Type",
            IeType::MSNotReachableReason => "MS Not Reachable Reason",
            IeType::PacketTransferCmd => "Packet Transfer Command",
            IeType::ChargingID => "Charging ID",
            IeType::EndUserAddr => "End User Address",
            IeType::MMContext => "MM Context",
            IeType::PDPContext => "PDP Context",
            IeType::APN => "Access Point Name",
            IeType::PCO => "Protocol Configuration Options",
            IeType::GSNAddr => "GSN Address",
            IeType::MSISDN => "MS International PSTN/ISDN Number (MSISDN)",
            IeType::QoSProfile => "Quality of Service Profile",
            IeType::AuthentQuintuplet => "Authentication Quintuplet",
            IeType::TFT => "Traffic Flow Template",
            IeType::TargetIdent => "Target Identification",
            IeType::UTRANTransparentContainer => "UTRAN Transparent Container",
            IeType::RABSetupInfo => "RAB Setup Information",
            IeType::ExtHeaderTypeList => "Extension Header Type List",
            IeType::TriggerId => "Trigger Id",
            IeType::OMCIdentity => "OMC Identity",
            IeType::RANTransparentContainer => "RAN Transparent Container",
            IeType::PDPContextPrioritization => "PDP Context Prioritization",
            IeType::AdditionalRABSetupInfo => "Additional RAB Setup Information",
            IeType::SGSNNumber => "SGSN Number",
            IeType::CommonFlags => "Common Flags",
            IeType::APNRestriction => "APN Restriction",
            IeType::RadioPriorityLCS => "Radio Priority LCS",
            IeType::RATType => "RAT Type",
            IeType::ULI => "User Location Information",
            IeType::MSTimeZone => "MS Time Zone",
            IeType::IMEI => "IMEI(SV)",
            IeType::CAMELChargingInfoContainer => "CAMEL Charging Information Container",
            IeType::MBMSUEContext => "MBMS UE Context",
            IeType::TMGI => "Temporary Mobile Group Identity (TMGI)",
            IeType::RIMRoutingAddr => "RIM Routing Address",
            IeType::MBMSPCO => "MBMS Protocol Configuration Options",
            IeType::MBMSServiceArea => "MBMS Service Area",
            IeType::SourceRNCPDCPContextInfo => "Source RNC PDCP context info",
            IeType::AdditionalTraceInfo => "Additional Trace Info",
            IeType::HopCounter => "Hop Counter",
            IeType::SelectedPLMNID => "Selected PLMN ID",
            IeType::MBMSSessionIdent => "MBMS Session Identifier",
            IeType::MBMS2G3GInd => "MBMS 2G/3G Indicator",
            IeType::EnhancedNSAPI => "Enhanced NSAPI",
            IeType::MBMSSessionDuration => "MBMS Session Duration",
            IeType::AdditionalMBMSTraceInfo => "Additional MBMS Trace Info",
            IeType::MBMSSessionRepetitionNumber => "MBMS Session Repetition Number",
            IeType::MBMSTimeToDataTransfer => "MBMS Time To Data Transfer",
            IeType::BSSContainer => "BSS Container",
            IeType::CellIdent => "Cell Identification",
            IeType::PDUNumbers => "PDU Numbers",
            IeType::BSSGPCause => "BSSGP Cause",
            IeType::RequiredMBMSBearerCap => "Required MBMS bearer capabilities",
            IeType::RIMRoutingAddrDiscriminator => "RIM Routing Address Discriminator",
            IeType::ListOfSetupPFCs => "List of set-up PFCs",
            IeType::PSHandoverXIDParams => "PS Handover XID Parameters",
            IeType::MSInfoChangeReportingAction => "MS Info Change Reporting Action",
            IeType::DirectTunnelFlags => "Direct Tunnel Flags",
            IeType::CorrelationID => "Correlation-ID",
            IeType::BearerControlMode => "Bearer Control Mode",
            IeType::MBMSFlowIdent => "MBMS Flow Identifier",
            IeType::MBMSIPMulticastDistrib => "MBMS IP Multicast Distribution",
            IeType::MBMSDistribAck => "MBMS Distribution Acknowledgement",
            IeType::ReliableInterRATHandoverInfo => "Reliable INTER RAT HANDOVER INFO",
            IeType::RFSPIndex => "RFSP Index",
            IeType::FQDN => "Fully Qualified Domain Name (FQDN)",
            IeType::EvolvedAllocationRetentionPriorityI => "Evolved Allocation/Retention Priority I",
            IeType::EvolvedAllocationRetentionPriorityII => "Evolved Allocation/Retention Priority II",
            IeType::ExtCommonFlags => "Extended Common Flags",
            IeType::UCI => "User CSG Information (UCI)",
            IeType::CSGInfoReportingAction => "CSG Information Reporting Action",
            IeType::CSGID => "CSG ID",
            IeType::CMI => "CSG Membership Indication (CMI)",
            IeType::AMBR => "Aggregate Maximum Bit Rate (AMBR)",
            IeType::UENetCap => "UE Network Capability",
            IeType::UEAMBR => "UE-AMBR",
            IeType::APNAMBRWithNSAPI => "APN-AMBR with NSAPI",
            IeType::GGSNBackOffTime => "GGSN Back-Off Time",
            IeType::SignallingPriorityInd => "Signalling Priority Indication",
            IeType::SignallingPriorityIndWithNSAPI => "Signalling Priority Indication with NSAPI",
            IeType::HigherBitratesThan16MbpsFlag => "Higher bitrates than 16 Mbps flag",
            IeType::AdditionalMMContextForSRVCC => "Additional MM context for SRVCC",
            IeType::AdditionalFlagsForSRVCC => "Additional flags for SRVCC",
            IeType::STNSR => "STN-SR",
            IeType::CMSISDN => "C-MSISDN",
            IeType::ExtRANAPCause => "Extended RANAP Cause",
            IeType::ENodeBID => "eNodeB ID",
            IeType::SelectionModeWithNSAPI => "Selection Mode with NSAPI",
            IeType::ULITimestamp => "ULI Timestamp",
            IeType::LocalHomeNetworkIDWithNSAPI => "Local Home Network ID (LHN-ID) with NSAPI",
            IeType::CNOperatorSelectionEntity => "CN Operator Selection Entity",
            IeType::UEUsageType => "UE Usage Type",
            IeType::ExtCommonFlagsII => "Extended Common Flags II",
            IeType::NodeIdent => "Node Identifier",
            IeType::CIoTOptimSupportInd => "CIoT Optimizations Support Indication",
            IeType::SCEFPDNConnection => "SCEF PDN Connection",
            IeType::IOVUpdatesCounter => "IOV_updates counter",
            IeType::MappedUEUsageType => "Mapped UE Usage Type",
            IeType::UPFSelectionIndFlags => "UP Function Selection Indication Flags",
            IeType::IETypeExt => "Special IE type for IE Type Extension",
            IeType::SeqNumReleasedPackets => "Sequence Numbers of Released Packets",
            IeType::SeqNumCancelledPackets => "Sequence Numbers of Cancelled Packets",
            IeType::ChargingGatewayAddr => "Charging Gateway Address",
            IeType::DataRecordPacket => "Data Record Packet",
            IeType::RequestsResponded => "Requests Responded",
            IeType::RecommendedNodeAddr => "Recommended Node Address",
            IeType::PrivateExt => "Private Extension",
        }
    }

    /// `true` for the Tag-Value framing (wire type codes 0-127),
    /// `false` for Tag-Length-Value (128-255).
    #[inline]
    pub fn is_tag_value(self) -> bool {
        (self as u8) < 128
    }

    /// Fixed payload length in bytes for Tag-Value IEs. `None` for TLV IEs,
    /// whose length travels on the wire.
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            IeType::Reserved => None, // length not catalogued
            IeType::Cause => Some(1),
            IeType::IMSI => Some(8),
            IeType::RAI => Some(6),
            IeType::TLLI => Some(4),
            IeType::PTMSI => Some(4),
            IeType::ReorderingRequired => Some(1),
            IeType::AuthentTriplet => Some(28),
            IeType::MAPCause => Some(1),
            IeType::PTMSISignature => Some(3),
            IeType::MSValidated => Some(1),
            IeType::Recovery => Some(1),
            IeType::SelectionMode => Some(1),
            IeType::TEIDDataI => Some(4),
            IeType::TEIDCP => Some(4),
            IeType::TEIDDataII => Some(5),
            IeType::TeardownInd => Some(1),
            IeType::NSAPI => Some(1),
            IeType::RANAPCause => Some(1),
            IeType::RABContext => Some(9),
            IeType::RadioPrioritySMS => Some(1),
            IeType::RadioPriority => Some(1),
            IeType::PacketFlowId => Some(2),
            IeType::ChargingCharacteristics => Some(2),
            IeType::TraceReference => Some(2),
            IeType::TraceType => Some(2),
            IeType::MSNotReachableReason => Some(1),
            IeType::PacketTransferCmd => Some(1),
            IeType::ChargingID => Some(4),
            _ => None,
        }
    }

    /// Whether this IE's payload layout is implemented by this crate.
    /// Types left undefined by the catalogue decode as opaque buffers.
    pub fn is_undefined(self) -> bool {
        matches!(self,
            IeType::Reserved | IeType::UTRANTransparentContainer | IeType::TriggerId | IeType::OMCIdentity | IeType::RANTransparentContainer | IeType::PDPContextPrioritization | IeType::CAMELChargingInfoContainer | IeType::SourceRNCPDCPContextInfo | IeType::BSSContainer | IeType::IETypeExt
        )
    }

    /// Construct from a raw wire type code, if it is catalogued.
    pub fn from_code(code: u8) -> Option<IeType> {
        match code {
            0 => Some(IeType::Reserved),
            1 => Some(IeType::Cause),
            2 => Some(IeType::IMSI),
            3 => Some(IeType::RAI),
            4 => Some(IeType::TLLI),
            5 => Some(IeType::PTMSI),
            8 => Some(IeType::ReorderingRequired),
            9 => Some(IeType::AuthentTriplet),
            11 => Some(IeType::MAPCause),
            12 => Some(IeType::PTMSISignature),
            13 => Some(IeType::MSValidated),
            14 => Some(IeType::Recovery),
            15 => Some(IeType::SelectionMode),
            16 => Some(IeType::TEIDDataI),
            17 => Some(IeType::TEIDCP),
            18 => Some(IeType::TEIDDataII),
            19 => Some(IeType::TeardownInd),
            20 => Some(IeType::NSAPI),
            21 => Some(IeType::RANAPCause),
            22 => Some(IeType::RABContext),
            23 => Some(IeType::RadioPrioritySMS),
            24 => Some(IeType::RadioPriority),
            25 => Some(IeType::PacketFlowId),
            26 => Some(IeType::ChargingCharacteristics),
            27 => Some(IeType::TraceReference),
            28 => Some(IeType::TraceType),
            29 => Some(IeType::MSNotReachableReason),
            126 => Some(IeType::PacketTransferCmd),
            127 => Some(IeType::ChargingID),
            128 => Some(IeType::EndUserAddr),
            129 => Some(IeType::MMContext),
            130 => Some(IeType::PDPContext),
            131 => Some(IeType::APN),
            132 => Some(IeType::PCO),
            133 => Some(IeType::GSNAddr),
            134 => Some(IeType::MSISDN),
            135 => Some(IeType::QoSProfile),
            136 => Some(IeType::AuthentQuintuplet),
            137 => Some(IeType::TFT),
            138 => Some(IeType::TargetIdent),
            139 => Some(IeType::UTRANTransparentContainer),
            140 => Some(IeType::RABSetupInfo),
            141 => Some(IeType::ExtHeaderTypeList),
            142 => Some(IeType::TriggerId),
            143 => Some(IeType::OMCIdentity),
            144 => Some(IeType::RANTransparentContainer),
            145 => Some(IeType::PDPContextPrioritization),
            146 => Some(IeType::AdditionalRABSetupInfo),
            147 => Some(IeType::SGSNNumber),
            148 => Some(IeType::CommonFlags),
            149 => Some(IeType::APNRestriction),
            150 => Some(IeType::RadioPriorityLCS),
            151 => Some(IeType::RATType),
            152 => Some(IeType::ULI),
            153 => Some(IeType::MSTimeZone),
            154 => Some(IeType::IMEI),
            155 => Some(IeType::CAMELChargingInfoContainer),
            156 => Some(IeType::MBMSUEContext),
            157 => Some(IeType::TMGI),
            158 => Some(IeType::RIMRoutingAddr),
            159 => Some(IeType::MBMSPCO),
            160 => Some(IeType::MBMSServiceArea),
            161 => Some(IeType::SourceRNCPDCPContextInfo),
            162 => Some(IeType::AdditionalTraceInfo),
            163 => Some(IeType::HopCounter),
            164 => Some(IeType::SelectedPLMNID),
            165 => Some(IeType::MBMSSessionIdent),
            166 => Some(IeType::MBMS2G3GInd),
            167 => Some(IeType::EnhancedNSAPI),
            168 => Some(IeType::MBMSSessionDuration),
            169 => Some(IeType::AdditionalMBMSTraceInfo),
            170 => Some(IeType::MBMSSessionRepetitionNumber),
            171 => Some(IeType::MBMSTimeToDataTransfer),
            173 => Some(IeType::BSSContainer),
            174 => Some(IeType::CellIdent),
            175 => Some(IeType::PDUNumbers),
            176 => Some(IeType::BSSGPCause),
            177 => Some(IeType::RequiredMBMSBearerCap),
            178 => Some(IeType::RIMRoutingAddrDiscriminator),
            179 => Some(IeType::ListOfSetupPFCs),
            180 => Some(IeType::PSHandoverXIDParams),
            181 => Some(IeType::MSInfoChangeReportingAction),
            182 => Some(IeType::DirectTunnelFlags),
            183 => Some(IeType::CorrelationID),
            184 => Some(IeType::BearerControlMode),
            185 => Some(IeType::MBMSFlowIdent),
            186 => Some(IeType::MBMSIPMulticastDistrib),
            187 => Some(IeType::MBMSDistribAck),
            188 => Some(IeType::ReliableInterRATHandoverInfo),
            189 => Some(IeType::RFSPIndex),
            190 => Some(IeType::FQDN),
            191 => Some(IeType::EvolvedAllocationRetentionPriorityI),
            192 => Some(IeType::EvolvedAllocationRetentionPriorityII),
            193 => Some(IeType::ExtCommonFlags),
            194 => Some(IeType::UCI),
            195 => Some(IeType::CSGInfoReportingAction),
            196 => Some(IeType::CSGID),
            197 => Some(IeType::CMI),
            198 => Some(IeType::AMBR),
            199 => Some(IeType::UENetCap),
            200 => Some(IeType::UEAMBR),
            201 => Some(IeType::APNAMBRWithNSAPI),
            202 => Some(IeType::GGSNBackOffTime),
            203 => Some(IeType::SignallingPriorityInd),
            204 => Some(IeType::SignallingPriorityIndWithNSAPI),
            205 => Some(IeType::HigherBitratesThan16MbpsFlag),
            207 => Some(IeType::AdditionalMMContextForSRVCC),
            208 => Some(IeType::AdditionalFlagsForSRVCC),
            209 => Some(IeType::STNSR),
            210 => Some(IeType::CMSISDN),
            211 => Some(IeType::ExtRANAPCause),
            212 => Some(IeType::ENodeBID),
            213 => Some(IeType::SelectionModeWithNSAPI),
            214 => Some(IeType::ULITimestamp),
            215 => Some(IeType::LocalHomeNetworkIDWithNSAPI),
            216 => Some(IeType::CNOperatorSelectionEntity),
            217 => Some(IeType::UEUsageType),
            218 => Some(IeType::ExtCommonFlagsII),
            219 => Some(IeType::NodeIdent),
            220 => Some(IeType::CIoTOptimSupportInd),
            221 => Some(IeType::SCEFPDNConnection),
            222 => Some(IeType::IOVUpdatesCounter),
            223 => Some(IeType::MappedUEUsageType),
            224 => Some(IeType::UPFSelectionIndFlags),
            238 => Some(IeType::IETypeExt),
            249 => Some(IeType::SeqNumReleasedPackets),
            250 => Some(IeType::SeqNumCancelledPackets),
            251 => Some(IeType::ChargingGatewayAddr),
            252 => Some(IeType::DataRecordPacket),
            253 => Some(IeType::RequestsResponded),
            254 => Some(IeType::RecommendedNodeAddr),
            255 => Some(IeType::PrivateExt),
            _ => None,
        }
    }
}
