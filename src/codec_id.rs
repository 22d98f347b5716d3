//! Codec identifier mapping.
//!
//! [`CodecId`] mirrors FFmpeg's `AVCodecID` enumeration. The enumeration is
//! large and sparse: video codecs count up from 0, PCM audio starts at
//! 0x10000, ADPCM at 0x11000, AMR at 0x12000, RealAudio at 0x13000, DPCM at
//! 0x14000, compressed audio at 0x15000, subtitles at 0x17000, and
//! attachment/data codecs at 0x18000, followed by a handful of special
//! entries (probe, MPEG-TS system streams, null codecs). Rather than
//! declaring hundreds of constants, the mapping is a static sorted table
//! with a binary-search lookup; values absent from the table render as
//! `"UNKNOWN"`.
//!
//! The range sentinels FFmpeg defines at the block boundaries
//! (`FIRST_AUDIO`, `FIRST_SUBTITLE`, `FIRST_UNKNOWN`) alias the first codec
//! of their block, so 0x10000 resolves to `"PCM_S16LE"`, 0x17000 to
//! `"DVD_SUBTITLE"`, and 0x18000 to `"TTF"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a specific codec, holding a raw `AVCodecID` value.
///
/// The wrapper is deliberately open: probing never fails on an id the table
/// does not know, it simply carries the raw value and names it `"UNKNOWN"`.
///
/// # Example
///
/// ```
/// use mediaprobe::CodecId;
///
/// assert_eq!(CodecId::from_raw(27).name(), "H264");
/// assert_eq!(CodecId::from_raw(0x15002).name(), "AAC");
/// assert_eq!(CodecId::from_raw(-7).name(), "UNKNOWN");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodecId(pub i32);

impl CodecId {
    /// The `NONE` codec id (0).
    pub const NONE: CodecId = CodecId(0);

    /// Wrap a raw `AVCodecID` value.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        CodecId(raw)
    }

    /// The raw integer value.
    #[must_use]
    pub fn raw(self) -> i32 {
        self.0
    }

    /// The canonical constant-style codec name, e.g. `"H264"` or
    /// `"PCM_S16LE"`; `"UNKNOWN"` for values outside the table.
    #[must_use]
    pub fn name(self) -> &'static str {
        match CODEC_NAMES.binary_search_by_key(&self.0, |&(value, _)| value) {
            Ok(index) => CODEC_NAMES[index].1,
            Err(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Codec id to canonical name, sorted by id for binary search.
#[rustfmt::skip]
static CODEC_NAMES: &[(i32, &str)] = &[
    (0, "NONE"),
    (1, "MPEG1VIDEO"),
    (2, "MPEG2VIDEO"),
    (3, "H261"),
    (4, "H263"),
    (5, "RV10"),
    (6, "RV20"),
    (7, "MJPEG"),
    (8, "MJPEGB"),
    (9, "LJPEG"),
    (10, "SP5X"),
    (11, "JPEGLS"),
    (12, "MPEG4"),
    (13, "RAWVIDEO"),
    (14, "MSMPEG4V1"),
    (15, "MSMPEG4V2"),
    (16, "MSMPEG4V3"),
    (17, "WMV1"),
    (18, "WMV2"),
    (19, "H263P"),
    (20, "H263I"),
    (21, "FLV1"),
    (22, "SVQ1"),
    (23, "SVQ3"),
    (24, "DVVIDEO"),
    (25, "HUFFYUV"),
    (26, "CYUV"),
    (27, "H264"),
    (28, "INDEO3"),
    (29, "VP3"),
    (30, "THEORA"),
    (31, "ASV1"),
    (32, "ASV2"),
    (33, "FFV1"),
    (34, "4XM"),
    (35, "VCR1"),
    (36, "CLJR"),
    (37, "MDEC"),
    (38, "ROQ"),
    (39, "INTERPLAY_VIDEO"),
    (40, "XAN_WC3"),
    (41, "XAN_WC4"),
    (42, "RPZA"),
    (43, "CINEPAK"),
    (44, "WS_VQA"),
    (45, "MSRLE"),
    (46, "MSVIDEO1"),
    (47, "IDCIN"),
    (48, "8BPS"),
    (49, "SMC"),
    (50, "FLIC"),
    (51, "TRUEMOTION1"),
    (52, "VMDVIDEO"),
    (53, "MSZH"),
    (54, "ZLIB"),
    (55, "QTRLE"),
    (56, "TSCC"),
    (57, "ULTI"),
    (58, "QDRAW"),
    (59, "VIXL"),
    (60, "QPEG"),
    (61, "PNG"),
    (62, "PPM"),
    (63, "PBM"),
    (64, "PGM"),
    (65, "PGMYUV"),
    (66, "PAM"),
    (67, "FFVHUFF"),
    (68, "RV30"),
    (69, "RV40"),
    (70, "VC1"),
    (71, "WMV3"),
    (72, "LOCO"),
    (73, "WNV1"),
    (74, "AASC"),
    (75, "INDEO2"),
    (76, "FRAPS"),
    (77, "TRUEMOTION2"),
    (78, "BMP"),
    (79, "CSCD"),
    (80, "MMVIDEO"),
    (81, "ZMBV"),
    (82, "AVS"),
    (83, "SMACKVIDEO"),
    (84, "NUV"),
    (85, "KMVC"),
    (86, "FLASHSV"),
    (87, "CAVS"),
    (88, "JPEG2000"),
    (89, "VMNC"),
    (90, "VP5"),
    (91, "VP6"),
    (92, "VP6F"),
    (93, "TARGA"),
    (94, "DSICINVIDEO"),
    (95, "TIERTEXSEQVIDEO"),
    (96, "TIFF"),
    (97, "GIF"),
    (98, "DXA"),
    (99, "DNXHD"),
    (100, "THP"),
    (101, "SGI"),
    (102, "C93"),
    (103, "BETHSOFTVID"),
    (104, "PTX"),
    (105, "TXD"),
    (106, "VP6A"),
    (107, "AMV"),
    (108, "VB"),
    (109, "PCX"),
    (110, "SUNRAST"),
    (111, "INDEO4"),
    (112, "INDEO5"),
    (113, "MIMIC"),
    (114, "RL2"),
    (115, "ESCAPE124"),
    (116, "DIRAC"),
    (117, "BFI"),
    (118, "CMV"),
    (119, "MOTIONPIXELS"),
    (120, "TGV"),
    (121, "TGQ"),
    (122, "TQI"),
    (123, "AURA"),
    (124, "AURA2"),
    (125, "V210X"),
    (126, "TMV"),
    (127, "V210"),
    (128, "DPX"),
    (129, "MAD"),
    (130, "FRWU"),
    (131, "FLASHSV2"),
    (132, "CDGRAPHICS"),
    (133, "R210"),
    (134, "ANM"),
    (135, "BINKVIDEO"),
    (136, "IFF_ILBM"),
    (137, "KGV1"),
    (138, "YOP"),
    (139, "VP8"),
    (140, "PICTOR"),
    (141, "ANSI"),
    (142, "A64_MULTI"),
    (143, "A64_MULTI5"),
    (144, "R10K"),
    (145, "MXPEG"),
    (146, "LAGARITH"),
    (147, "PRORES"),
    (148, "JV"),
    (149, "DFA"),
    (150, "WMV3IMAGE"),
    (151, "VC1IMAGE"),
    (152, "UTVIDEO"),
    (153, "BMV_VIDEO"),
    (154, "VBLE"),
    (155, "DXTORY"),
    (156, "XWD"),
    (157, "CDXL"),
    (158, "XBM"),
    (159, "ZEROCODEC"),
    (160, "MSS1"),
    (161, "MSA1"),
    (162, "TSCC2"),
    (163, "MTS2"),
    (164, "CLLC"),
    (165, "MSS2"),
    (166, "VP9"),
    (167, "AIC"),
    (168, "ESCAPE130"),
    (169, "G2M"),
    (170, "WEBP"),
    (171, "HNM4_VIDEO"),
    (172, "HEVC"),
    (173, "FIC"),
    (174, "ALIAS_PIX"),
    (175, "BRENDER_PIX"),
    (176, "PAF_VIDEO"),
    (177, "EXR"),
    (178, "VP7"),
    (179, "SANM"),
    (180, "SGIRLE"),
    (181, "MVC1"),
    (182, "MVC2"),
    (183, "HQX"),
    (184, "TDSC"),
    (185, "HQ_HQA"),
    (186, "HAP"),
    (187, "DDS"),
    (188, "DXV"),
    (189, "SCREENPRESSO"),
    (190, "RSCC"),
    (191, "AVS2"),
    (192, "PGX"),
    (193, "AVS3"),
    (194, "MSP2"),
    (195, "VVC"),
    (196, "Y41P"),
    (197, "AVRP"),
    (198, "012V"),
    (199, "AVUI"),
    (200, "TARGA_Y216"),
    (201, "YUV4"),
    (202, "AVRN"),
    (203, "CPIA"),
    (204, "XFACE"),
    (205, "SNOW"),
    (206, "SMVJPEG"),
    (207, "APNG"),
    (208, "DAALA"),
    (209, "CFHD"),
    (210, "TRUEMOTION2RT"),
    (211, "M101"),
    (212, "MAGICYUV"),
    (213, "SHEERVIDEO"),
    (214, "YLC"),
    (215, "PSD"),
    (216, "PIXLET"),
    (217, "SPEEDHQ"),
    (218, "FMVC"),
    (219, "SCPR"),
    (220, "CLEARVIDEO"),
    (221, "XPM"),
    (222, "AV1"),
    (223, "BITPACKED"),
    (224, "MSCC"),
    (225, "SRGC"),
    (226, "SVG"),
    (227, "GDV"),
    (228, "FITS"),
    (229, "IMM4"),
    (230, "PROSUMER"),
    (231, "MWSC"),
    (232, "WCMV"),
    (233, "RASC"),
    (234, "HYMT"),
    (235, "ARBC"),
    (236, "AGM"),
    (237, "LSCR"),
    (238, "VP4"),
    (239, "IMM5"),
    (240, "MVDV"),
    (241, "MVHA"),
    (242, "CDTOONS"),
    (243, "MV30"),
    (244, "NOTCHLC"),
    (245, "PFM"),
    (246, "MOBICLIP"),
    (247, "PHOTOCD"),
    (248, "IPU"),
    (249, "ARGO"),
    (250, "CRI"),
    (251, "SIMBIOSIS_IMX"),
    (252, "SGA_VIDEO"),
    (253, "GEM"),
    (254, "VBN"),
    (255, "JPEGXL"),
    (256, "QOI"),
    (257, "PHM"),
    (258, "RADIANCE_HDR"),
    (259, "WBMP"),
    (260, "MEDIA100"),
    (261, "VQC"),
    (262, "PDV"),
    (263, "EVC"),
    (264, "RTV1"),
    (265, "VMIX"),
    (266, "LEAD"),
    (267, "DNXUC"),
    (268, "RV60"),
    (269, "JPEGXL_ANIM"),
    (270, "APV"),
    (0x10000, "PCM_S16LE"),
    (0x10001, "PCM_S16BE"),
    (0x10002, "PCM_U16LE"),
    (0x10003, "PCM_U16BE"),
    (0x10004, "PCM_S8"),
    (0x10005, "PCM_U8"),
    (0x10006, "PCM_MULAW"),
    (0x10007, "PCM_ALAW"),
    (0x10008, "PCM_S32LE"),
    (0x10009, "PCM_S32BE"),
    (0x1000A, "PCM_U32LE"),
    (0x1000B, "PCM_U32BE"),
    (0x1000C, "PCM_S24LE"),
    (0x1000D, "PCM_S24BE"),
    (0x1000E, "PCM_U24LE"),
    (0x1000F, "PCM_U24BE"),
    (0x10010, "PCM_S24DAUD"),
    (0x10011, "PCM_ZORK"),
    (0x10012, "PCM_S16LE_PLANAR"),
    (0x10013, "PCM_DVD"),
    (0x10014, "PCM_F32BE"),
    (0x10015, "PCM_F32LE"),
    (0x10016, "PCM_F64BE"),
    (0x10017, "PCM_F64LE"),
    (0x10018, "PCM_BLURAY"),
    (0x10019, "PCM_LXF"),
    (0x1001A, "S302M"),
    (0x1001B, "PCM_S8_PLANAR"),
    (0x1001C, "PCM_S24LE_PLANAR"),
    (0x1001D, "PCM_S32LE_PLANAR"),
    (0x1001E, "PCM_S16BE_PLANAR"),
    (0x1001F, "PCM_S64LE"),
    (0x10020, "PCM_S64BE"),
    (0x10021, "PCM_F16LE"),
    (0x10022, "PCM_F24LE"),
    (0x10023, "PCM_VIDC"),
    (0x10024, "PCM_SGA"),
    (0x11000, "ADPCM_IMA_QT"),
    (0x11001, "ADPCM_IMA_WAV"),
    (0x11002, "ADPCM_IMA_DK3"),
    (0x11003, "ADPCM_IMA_DK4"),
    (0x11004, "ADPCM_IMA_WS"),
    (0x11005, "ADPCM_IMA_SMJPEG"),
    (0x11006, "ADPCM_MS"),
    (0x11007, "ADPCM_4XM"),
    (0x11008, "ADPCM_XA"),
    (0x11009, "ADPCM_ADX"),
    (0x1100A, "ADPCM_EA"),
    (0x1100B, "ADPCM_G726"),
    (0x1100C, "ADPCM_CT"),
    (0x1100D, "ADPCM_SWF"),
    (0x1100E, "ADPCM_YAMAHA"),
    (0x1100F, "ADPCM_SBPRO_4"),
    (0x11010, "ADPCM_SBPRO_3"),
    (0x11011, "ADPCM_SBPRO_2"),
    (0x11012, "ADPCM_THP"),
    (0x11013, "ADPCM_IMA_AMV"),
    (0x11014, "ADPCM_EA_R1"),
    (0x11015, "ADPCM_EA_R3"),
    (0x11016, "ADPCM_EA_R2"),
    (0x11017, "ADPCM_IMA_EA_SEAD"),
    (0x11018, "ADPCM_IMA_EA_EACS"),
    (0x11019, "ADPCM_EA_XAS"),
    (0x1101A, "ADPCM_EA_MAXIS_XA"),
    (0x1101B, "ADPCM_IMA_ISS"),
    (0x1101C, "ADPCM_G722"),
    (0x1101D, "ADPCM_IMA_APC"),
    (0x1101E, "ADPCM_VIMA"),
    (0x1101F, "ADPCM_AFC"),
    (0x11020, "ADPCM_IMA_OKI"),
    (0x11021, "ADPCM_DTK"),
    (0x11022, "ADPCM_IMA_RAD"),
    (0x11023, "ADPCM_G726LE"),
    (0x11024, "ADPCM_THP_LE"),
    (0x11025, "ADPCM_PSX"),
    (0x11026, "ADPCM_AICA"),
    (0x11027, "ADPCM_IMA_DAT4"),
    (0x11028, "ADPCM_MTAF"),
    (0x11029, "ADPCM_AGM"),
    (0x1102A, "ADPCM_ARGO"),
    (0x1102B, "ADPCM_IMA_SSI"),
    (0x1102C, "ADPCM_ZORK"),
    (0x1102D, "ADPCM_IMA_APM"),
    (0x1102E, "ADPCM_IMA_ALP"),
    (0x1102F, "ADPCM_IMA_MTF"),
    (0x11030, "ADPCM_IMA_CUNNING"),
    (0x11031, "ADPCM_IMA_MOFLEX"),
    (0x11032, "ADPCM_IMA_ACORN"),
    (0x11033, "ADPCM_XMD"),
    (0x11034, "ADPCM_IMA_XBOX"),
    (0x12000, "AMR_NB"),
    (0x12001, "AMR_WB"),
    (0x13000, "RA_144"),
    (0x13001, "RA_288"),
    (0x14000, "ROQ_DPCM"),
    (0x14001, "INTERPLAY_DPCM"),
    (0x14002, "XAN_DPCM"),
    (0x14003, "SOL_DPCM"),
    (0x14004, "SDX2_DPCM"),
    (0x14005, "GREMLIN_DPCM"),
    (0x14006, "DERF_DPCM"),
    (0x14007, "WADY_DPCM"),
    (0x14008, "CBD2_DPCM"),
    (0x15000, "MP2"),
    (0x15001, "MP3"),
    (0x15002, "AAC"),
    (0x15003, "AC3"),
    (0x15004, "DTS"),
    (0x15005, "VORBIS"),
    (0x15006, "DVAUDIO"),
    (0x15007, "WMAV1"),
    (0x15008, "WMAV2"),
    (0x15009, "MACE3"),
    (0x1500A, "MACE6"),
    (0x1500B, "VMDAUDIO"),
    (0x1500C, "FLAC"),
    (0x1500D, "MP3ADU"),
    (0x1500E, "MP3ON4"),
    (0x1500F, "SHORTEN"),
    (0x15010, "ALAC"),
    (0x15011, "WESTWOOD_SND1"),
    (0x15012, "GSM"),
    (0x15013, "QDM2"),
    (0x15014, "COOK"),
    (0x15015, "TRUESPEECH"),
    (0x15016, "TTA"),
    (0x15017, "SMACKAUDIO"),
    (0x15018, "QCELP"),
    (0x15019, "WAVPACK"),
    (0x1501A, "DSICINAUDIO"),
    (0x1501B, "IMC"),
    (0x1501C, "MUSEPACK7"),
    (0x1501D, "MLP"),
    (0x1501E, "GSM_MS"),
    (0x1501F, "ATRAC3"),
    (0x15020, "APE"),
    (0x15021, "NELLYMOSER"),
    (0x15022, "MUSEPACK8"),
    (0x15023, "SPEEX"),
    (0x15024, "WMAVOICE"),
    (0x15025, "WMAPRO"),
    (0x15026, "WMALOSSLESS"),
    (0x15027, "ATRAC3P"),
    (0x15028, "EAC3"),
    (0x15029, "SIPR"),
    (0x1502A, "MP1"),
    (0x1502B, "TWINVQ"),
    (0x1502C, "TRUEHD"),
    (0x1502D, "MP4ALS"),
    (0x1502E, "ATRAC1"),
    (0x1502F, "BINKAUDIO_RDFT"),
    (0x15030, "BINKAUDIO_DCT"),
    (0x15031, "AAC_LATM"),
    (0x15032, "QDMC"),
    (0x15033, "CELT"),
    (0x15034, "G723_1"),
    (0x15035, "G729"),
    (0x15036, "8SVX_EXP"),
    (0x15037, "8SVX_FIB"),
    (0x15038, "BMV_AUDIO"),
    (0x15039, "RALF"),
    (0x1503A, "IAC"),
    (0x1503B, "ILBC"),
    (0x1503C, "OPUS"),
    (0x1503D, "COMFORT_NOISE"),
    (0x1503E, "TAK"),
    (0x1503F, "METASOUND"),
    (0x15040, "PAF_AUDIO"),
    (0x15041, "ON2AVC"),
    (0x15042, "DSS_SP"),
    (0x15043, "CODEC2"),
    (0x15044, "FFWAVESYNTH"),
    (0x15045, "SONIC"),
    (0x15046, "SONIC_LS"),
    (0x15047, "EVRC"),
    (0x15048, "SMV"),
    (0x15049, "DSD_LSBF"),
    (0x1504A, "DSD_MSBF"),
    (0x1504B, "DSD_LSBF_PLANAR"),
    (0x1504C, "DSD_MSBF_PLANAR"),
    (0x1504D, "4GV"),
    (0x1504E, "INTERPLAY_ACM"),
    (0x1504F, "XMA1"),
    (0x15050, "XMA2"),
    (0x15051, "DST"),
    (0x15052, "ATRAC3AL"),
    (0x15053, "ATRAC3PAL"),
    (0x15054, "DOLBY_E"),
    (0x15055, "APTX"),
    (0x15056, "APTX_HD"),
    (0x15057, "SBC"),
    (0x15058, "ATRAC9"),
    (0x15059, "HCOM"),
    (0x1505A, "ACELP_KELVIN"),
    (0x1505B, "MPEGH_3D_AUDIO"),
    (0x1505C, "SIREN"),
    (0x1505D, "HCA"),
    (0x1505E, "FASTAUDIO"),
    (0x1505F, "MSNSIREN"),
    (0x15060, "DFPWM"),
    (0x15061, "BONK"),
    (0x15062, "MISC4"),
    (0x15063, "APAC"),
    (0x15064, "FTR"),
    (0x15065, "WAVARC"),
    (0x15066, "RKA"),
    (0x15067, "AC4"),
    (0x15068, "OSQ"),
    (0x15069, "QOA"),
    (0x1506A, "LC3"),
    (0x17000, "DVD_SUBTITLE"),
    (0x17001, "DVB_SUBTITLE"),
    (0x17002, "TEXT"),
    (0x17003, "XSUB"),
    (0x17004, "SSA"),
    (0x17005, "MOV_TEXT"),
    (0x17006, "HDMV_PGS_SUBTITLE"),
    (0x17007, "DVB_TELETEXT"),
    (0x17008, "SRT"),
    (0x17009, "MICRODVD"),
    (0x1700A, "EIA_608"),
    (0x1700B, "JACOSUB"),
    (0x1700C, "SAMI"),
    (0x1700D, "REALTEXT"),
    (0x1700E, "STL"),
    (0x1700F, "SUBVIEWER1"),
    (0x17010, "SUBVIEWER"),
    (0x17011, "SUBRIP"),
    (0x17012, "WEBVTT"),
    (0x17013, "MPL2"),
    (0x17014, "VPLAYER"),
    (0x17015, "PJS"),
    (0x17016, "ASS"),
    (0x17017, "HDMV_TEXT_SUBTITLE"),
    (0x17018, "TTML"),
    (0x17019, "ARIB_CAPTION"),
    (0x1701A, "IVTV_VBI"),
    (0x18000, "TTF"),
    (0x18001, "SCTE_35"),
    (0x18002, "EPG"),
    (0x18003, "BINTEXT"),
    (0x18004, "XBIN"),
    (0x18005, "IDF"),
    (0x18006, "OTF"),
    (0x18007, "SMPTE_KLV"),
    (0x18008, "DVD_NAV"),
    (0x18009, "TIMED_ID3"),
    (0x1800A, "BIN_DATA"),
    (0x1800B, "SMPTE_2038"),
    (0x1800C, "LCEVC"),
    (0x19000, "PROBE"),
    (0x20000, "MPEG2TS"),
    (0x20001, "MPEG4SYSTEMS"),
    (0x21000, "FFMETADATA"),
    (0x21001, "WRAPPED_AVFRAME"),
    (0x21002, "VNULL"),
    (0x21003, "ANULL"),
];
