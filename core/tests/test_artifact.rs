#[cfg(test)]
mod tests {
    use jspack_core::{
        artifact::{assemble, inspect_artifact, verify_artifact, ArtifactError},
        bootstrap::BootstrapTemplate,
        compression::{CompressionParameters, DecompressionType, PayloadBytes},
        config::PackOptions,
        pipeline::pack_bytes,
    };

    const SCRIPT: &[u8] = b"console.log(1)";

    fn options(compress: bool, decompression_script: bool) -> PackOptions {
        PackOptions {
            params: CompressionParameters::new(5, true).unwrap(),
            decompression_type: DecompressionType::DeflateRaw.to_string(),
            compress,
            decompression_script,
        }
    }

    // --- Assembler ---

    #[test]
    fn assemble_is_plain_concatenation() {
        let bootstrap = BootstrapTemplate::PassThrough.render(DecompressionType::DeflateRaw).unwrap();
        let payload = PayloadBytes::raw(vec![0, 1, 2, 255]);
        let artifact = assemble(&bootstrap, &payload);

        assert_eq!(artifact.offset(), bootstrap.offset());
        assert_eq!(artifact.len(), bootstrap.len() + 4);
        assert_eq!(artifact.bootstrap(), bootstrap.as_bytes());
        assert_eq!(artifact.payload(), &[0, 1, 2, 255]);

        let mut expected = bootstrap.as_bytes().to_vec();
        expected.extend_from_slice(&[0, 1, 2, 255]);
        assert_eq!(artifact.into_bytes(), expected);
    }

    // --- console.log(1) scenario ---

    #[test]
    fn pass_through_uncompressed_scenario() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let artifact = &out.artifact;

        // 101 literal bytes + 3 digits.
        assert_eq!(artifact.offset(), 104);
        assert_eq!(artifact.bootstrap().len(), 104);
        assert_eq!(artifact.payload(), SCRIPT);
        assert_eq!(artifact.len(), 104 + SCRIPT.len());
        assert!(!out.payload.is_compressed());
    }

    #[test]
    fn bootstrap_section_holds_no_payload_bytes() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let bootstrap = std::str::from_utf8(out.artifact.bootstrap()).unwrap();
        assert!(!bootstrap.contains("console.log"));
        assert!(bootstrap.ends_with("\">"));
    }

    // --- Inspector ---

    #[test]
    fn inspect_pass_through_artifact() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let view = inspect_artifact(out.artifact.as_bytes()).unwrap();

        assert_eq!(view.template, BootstrapTemplate::PassThrough);
        assert_eq!(view.offset, 104);
        assert_eq!(view.decompression_type, None);
        assert_eq!(view.payload, SCRIPT);
        assert_eq!(view.decode().unwrap(), SCRIPT);
    }

    #[test]
    fn inspect_decompressing_artifact() {
        let out = pack_bytes(SCRIPT, &options(true, true)).unwrap();
        let view = inspect_artifact(out.artifact.as_bytes()).unwrap();

        assert_eq!(view.template, BootstrapTemplate::Decompressing);
        assert_eq!(view.offset, 156);
        assert_eq!(view.decompression_type, Some("deflate-raw"));
        assert_eq!(view.payload, out.payload.as_bytes());
        assert_eq!(view.decode().unwrap(), SCRIPT);
    }

    #[test]
    fn inspect_payload_starting_with_digits() {
        let out = pack_bytes(b"1234;alert(5)", &options(false, false)).unwrap();
        let view = inspect_artifact(out.artifact.as_bytes()).unwrap();
        assert_eq!(view.offset, 104);
        assert_eq!(view.payload, b"1234;alert(5)");
    }

    #[test]
    fn inspect_rejects_foreign_document() {
        let err = inspect_artifact(b"<html><body>hello</body></html>").unwrap_err();
        assert!(matches!(err, ArtifactError::UnrecognizedBootstrap));
    }

    #[test]
    fn inspect_rejects_missing_numeral() {
        let head = BootstrapTemplate::PassThrough.segments().unwrap().head;
        let bytes = format!("{})...", head);
        let err = inspect_artifact(bytes.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::MissingOffset));
    }

    #[test]
    fn inspect_rejects_offset_past_end() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let tampered = String::from_utf8(out.artifact.into_bytes())
            .unwrap()
            .replacen("slice(104)", "slice(999)", 1);
        let err = inspect_artifact(tampered.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::OffsetOutOfRange { offset: 999, .. }));
    }

    #[test]
    fn inspect_rejects_shifted_offset() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let tampered = String::from_utf8(out.artifact.into_bytes())
            .unwrap()
            .replacen("slice(104)", "slice(105)", 1);
        assert!(inspect_artifact(tampered.as_bytes()).is_err());
    }

    #[test]
    fn inspect_rejects_zero_padded_offset() {
        // Same slice point, but the numeral no longer matches the rendering.
        let bootstrap = BootstrapTemplate::PassThrough.render(DecompressionType::DeflateRaw).unwrap();
        let padded = bootstrap.as_str().replacen("slice(104)", "slice(0105)", 1);
        let mut bytes = padded.into_bytes();
        bytes.extend_from_slice(SCRIPT);
        let err = inspect_artifact(&bytes).unwrap_err();
        assert!(matches!(err, ArtifactError::BootstrapMismatch { .. }));
    }

    // --- Verifier ---

    #[test]
    fn verify_accepts_fresh_artifacts() {
        for (compress, script) in [(true, true), (true, false), (false, true), (false, false)] {
            let out = pack_bytes(SCRIPT, &options(compress, script)).unwrap();
            verify_artifact(out.artifact.as_bytes(), &out.payload, SCRIPT).unwrap();
        }
    }

    #[test]
    fn verify_rejects_payload_swap() {
        let out = pack_bytes(SCRIPT, &options(false, false)).unwrap();
        let other = PayloadBytes::raw(b"console.log(2)".to_vec());
        let err = verify_artifact(out.artifact.as_bytes(), &other, SCRIPT).unwrap_err();
        assert!(matches!(err, ArtifactError::PayloadMismatch(_)));
    }

    #[test]
    fn verify_rejects_wrong_original() {
        let out = pack_bytes(SCRIPT, &options(true, true)).unwrap();
        let err = verify_artifact(out.artifact.as_bytes(), &out.payload, b"console.log(2)").unwrap_err();
        assert!(matches!(err, ArtifactError::PayloadMismatch(_)));
    }

    #[test]
    fn verify_rejects_identifier_container_mismatch() {
        let out = pack_bytes(SCRIPT, &options(true, true)).unwrap();
        // Same bytes, but claimed to be gzip.
        let relabelled = PayloadBytes::compressed(out.payload.as_bytes().to_vec(), DecompressionType::Gzip);
        let err = verify_artifact(out.artifact.as_bytes(), &relabelled, SCRIPT).unwrap_err();
        assert!(matches!(err, ArtifactError::PayloadMismatch(_)));
    }
}
