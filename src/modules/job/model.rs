use crate::modules::artifact::model::ArtifactRef;
use serde::Serialize;

/// Name joining the input's audio selector to the output's audio
/// description. A single shared value so the two sides of the
/// string-keyed join cannot drift apart.
pub const AUDIO_SELECTOR_NAME: &str = "Audio Selector 1";

pub const OUTPUT_GROUP_NAME: &str = "mp4VideoFiles";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ContainerFormat {
    Mp4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum VideoCodec {
    H264,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RateControlMode {
    Qvbr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AudioCodec {
    Aac,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AudioCodingMode {
    Stereo,
}

/// AAC encoder specification variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AacVariant {
    Mpeg4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VideoEncode {
    pub codec: VideoCodec,
    pub rate_control: RateControlMode,
    pub qvbr_quality_level: i32,
    pub max_bitrate: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AudioEncode {
    pub codec: AudioCodec,
    pub bitrate: i32,
    pub coding_mode: AudioCodingMode,
    pub sample_rate: i32,
    pub specification: AacVariant,
}

/// The fixed target encoding every job is normalized to. Not user
/// input; the field combination is one the conversion service accepts
/// together (MP4 carries H.264 + AAC, QVBR is a valid H.264 rate
/// control mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncodeProfile {
    pub container: ContainerFormat,
    pub video: VideoEncode,
    pub audio: AudioEncode,
}

impl EncodeProfile {
    /// MP4, H.264 QVBR level 7 capped at 5 Mbps, AAC 96 kbps stereo at
    /// 48 kHz.
    pub fn standard_mp4() -> Self {
        Self {
            container: ContainerFormat::Mp4,
            video: VideoEncode {
                codec: VideoCodec::H264,
                rate_control: RateControlMode::Qvbr,
                qvbr_quality_level: 7,
                max_bitrate: 5_000_000,
            },
            audio: AudioEncode {
                codec: AudioCodec::Aac,
                bitrate: 96_000,
                coding_mode: AudioCodingMode::Stereo,
                sample_rate: 48_000,
                specification: AacVariant::Mpeg4,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OutputStorageClass {
    Standard,
}

/// The complete declarative description of one transcoding request,
/// built once per run and embedded verbatim into the service call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobSpec {
    pub input_location: String,
    pub audio_selector_name: String,
    pub output_group_name: String,
    pub output_destination: String,
    pub storage_class: OutputStorageClass,
    pub profile: EncodeProfile,
}

/// Terminal output of the pipeline. No completion polling happens
/// here.
#[derive(Clone, Debug)]
pub struct SubmittedJob {
    pub job_id: String,
    pub artifact: ArtifactRef,
}
