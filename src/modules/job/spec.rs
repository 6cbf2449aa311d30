use super::model::{
    AUDIO_SELECTOR_NAME, AacVariant, AudioCodec, AudioCodingMode, AudioEncode, ContainerFormat,
    EncodeProfile, JobSpec, OUTPUT_GROUP_NAME, OutputStorageClass, RateControlMode, VideoCodec,
    VideoEncode,
};
use aws_sdk_mediaconvert::types::{
    AacCodingMode, AacSettings, AacSpecification, AudioCodecSettings, AudioDefaultSelection,
    AudioDescription, AudioSelector, ContainerSettings, ContainerType, DestinationSettings,
    FileGroupSettings, H264QvbrSettings, H264RateControlMode, H264Settings, Input, JobSettings,
    Output, OutputGroup, OutputGroupSettings, OutputGroupType, S3DestinationSettings,
    S3StorageClass, VideoCodecSettings, VideoDescription,
};

/// Builds the job description for one uploaded object. Pure; all
/// variability comes from the object key and the bucket names.
pub fn build_spec(
    object_key: &str,
    source_bucket: &str,
    output_bucket: &str,
    profile: EncodeProfile,
) -> JobSpec {
    assert_ne!(
        source_bucket, output_bucket,
        "input and output buckets must differ"
    );

    JobSpec {
        input_location: format!("s3://{source_bucket}/{object_key}"),
        audio_selector_name: AUDIO_SELECTOR_NAME.to_string(),
        output_group_name: OUTPUT_GROUP_NAME.to_string(),
        output_destination: format!("s3://{output_bucket}/"),
        storage_class: OutputStorageClass::Standard,
        profile,
    }
}

/// Renders the domain spec into the service's native JobSettings
/// schema. `audio_selector_name` keys the input selector map and names
/// the output's audio source, so the join is carried by one value.
pub fn to_job_settings(spec: &JobSpec) -> JobSettings {
    let input = Input::builder()
        .file_input(spec.input_location.as_str())
        .audio_selectors(
            spec.audio_selector_name.as_str(),
            AudioSelector::builder()
                .default_selection(AudioDefaultSelection::Default)
                .build(),
        )
        .build();

    let file_group = FileGroupSettings::builder()
        .destination(spec.output_destination.as_str())
        .destination_settings(
            DestinationSettings::builder()
                .s3_settings(
                    S3DestinationSettings::builder()
                        .storage_class(storage_class(spec.storage_class))
                        .build(),
                )
                .build(),
        )
        .build();

    let output = Output::builder()
        .container_settings(
            ContainerSettings::builder()
                .container(container(spec.profile.container))
                .build(),
        )
        .video_description(video_description(&spec.profile.video))
        .audio_descriptions(audio_description(
            spec.audio_selector_name.as_str(),
            &spec.profile.audio,
        ))
        .build();

    let group = OutputGroup::builder()
        .name(spec.output_group_name.as_str())
        .output_group_settings(
            OutputGroupSettings::builder()
                .r#type(OutputGroupType::FileGroupSettings)
                .file_group_settings(file_group)
                .build(),
        )
        .outputs(output)
        .build();

    JobSettings::builder()
        .inputs(input)
        .output_groups(group)
        .build()
}

fn container(container: ContainerFormat) -> ContainerType {
    match container {
        ContainerFormat::Mp4 => ContainerType::Mp4,
    }
}

fn storage_class(class: OutputStorageClass) -> S3StorageClass {
    match class {
        OutputStorageClass::Standard => S3StorageClass::Standard,
    }
}

fn video_description(video: &VideoEncode) -> VideoDescription {
    let h264 = H264Settings::builder()
        .rate_control_mode(match video.rate_control {
            RateControlMode::Qvbr => H264RateControlMode::Qvbr,
        })
        .qvbr_settings(
            H264QvbrSettings::builder()
                .qvbr_quality_level(video.qvbr_quality_level)
                .build(),
        )
        .max_bitrate(video.max_bitrate)
        .build();

    VideoDescription::builder()
        .codec_settings(
            VideoCodecSettings::builder()
                .codec(match video.codec {
                    VideoCodec::H264 => aws_sdk_mediaconvert::types::VideoCodec::H264,
                })
                .h264_settings(h264)
                .build(),
        )
        .build()
}

fn audio_description(source_name: &str, audio: &AudioEncode) -> AudioDescription {
    let aac = AacSettings::builder()
        .bitrate(audio.bitrate)
        .coding_mode(match audio.coding_mode {
            AudioCodingMode::Stereo => AacCodingMode::CodingMode20,
        })
        .sample_rate(audio.sample_rate)
        .specification(match audio.specification {
            AacVariant::Mpeg4 => AacSpecification::Mpeg4,
        })
        .build();

    AudioDescription::builder()
        .audio_source_name(source_name)
        .codec_settings(
            AudioCodecSettings::builder()
                .codec(match audio.codec {
                    AudioCodec::Aac => aws_sdk_mediaconvert::types::AudioCodec::Aac,
                })
                .aac_settings(aac)
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_spec(key: &str) -> JobSpec {
        build_spec(
            key,
            "source-bucket",
            "output-bucket",
            EncodeProfile::standard_mp4(),
        )
    }

    #[test]
    fn locations_are_derived_from_key_and_buckets() {
        let spec = standard_spec("clip.mov");
        assert_eq!(spec.input_location, "s3://source-bucket/clip.mov");
        assert_eq!(spec.output_destination, "s3://output-bucket/");
    }

    #[test]
    fn standard_profile_targets_mp4_h264_aac() {
        let profile = EncodeProfile::standard_mp4();
        assert_eq!(profile.container, ContainerFormat::Mp4);
        assert_eq!(profile.video.codec, VideoCodec::H264);
        assert_eq!(profile.video.rate_control, RateControlMode::Qvbr);
        assert_eq!(profile.video.qvbr_quality_level, 7);
        assert_eq!(profile.video.max_bitrate, 5_000_000);
        assert_eq!(profile.audio.codec, AudioCodec::Aac);
        assert_eq!(profile.audio.bitrate, 96_000);
        assert_eq!(profile.audio.coding_mode, AudioCodingMode::Stereo);
        assert_eq!(profile.audio.sample_rate, 48_000);
        assert_eq!(profile.audio.specification, AacVariant::Mpeg4);
    }

    #[test]
    fn audio_selector_joins_input_and_output() {
        let spec = standard_spec("interview.mp4");
        assert_eq!(spec.audio_selector_name, AUDIO_SELECTOR_NAME);

        let settings = to_job_settings(&spec);
        let input = &settings.inputs()[0];
        let selectors = input.audio_selectors().expect("input audio selectors");
        assert!(selectors.contains_key(AUDIO_SELECTOR_NAME));

        let group = &settings.output_groups()[0];
        let audio = &group.outputs()[0].audio_descriptions()[0];
        assert_eq!(audio.audio_source_name(), Some(AUDIO_SELECTOR_NAME));
    }

    #[test]
    fn rendered_settings_match_the_standard_scenario() {
        let settings = to_job_settings(&standard_spec("interview.mp4"));

        let input = &settings.inputs()[0];
        assert_eq!(
            input.file_input(),
            Some("s3://source-bucket/interview.mp4")
        );

        let group = &settings.output_groups()[0];
        let group_settings = group.output_group_settings().expect("group settings");
        assert_eq!(
            group_settings.r#type(),
            Some(&OutputGroupType::FileGroupSettings)
        );
        let file_group = group_settings.file_group_settings().expect("file group");
        assert_eq!(file_group.destination(), Some("s3://output-bucket/"));
        assert_eq!(
            file_group
                .destination_settings()
                .and_then(|d| d.s3_settings())
                .and_then(|s| s.storage_class()),
            Some(&S3StorageClass::Standard)
        );

        let output = &group.outputs()[0];
        assert_eq!(
            output.container_settings().and_then(|c| c.container()),
            Some(&ContainerType::Mp4)
        );

        let h264 = output
            .video_description()
            .and_then(|v| v.codec_settings())
            .and_then(|c| c.h264_settings())
            .expect("h264 settings");
        assert_eq!(
            h264.rate_control_mode(),
            Some(&H264RateControlMode::Qvbr)
        );
        assert_eq!(
            h264.qvbr_settings().and_then(|q| q.qvbr_quality_level()),
            Some(7)
        );
        assert_eq!(h264.max_bitrate(), Some(5_000_000));

        let aac = output.audio_descriptions()[0]
            .codec_settings()
            .and_then(|c| c.aac_settings())
            .expect("aac settings");
        assert_eq!(aac.bitrate(), Some(96_000));
        assert_eq!(aac.coding_mode(), Some(&AacCodingMode::CodingMode20));
        assert_eq!(aac.sample_rate(), Some(48_000));
        assert_eq!(aac.specification(), Some(&AacSpecification::Mpeg4));
    }

    #[test]
    #[should_panic(expected = "must differ")]
    fn same_bucket_for_input_and_output_is_a_bug() {
        build_spec("clip.mov", "bucket", "bucket", EncodeProfile::standard_mp4());
    }
}
