#[cfg(test)]
mod tests {
    use jspack_core::{
        bootstrap::{BootstrapTemplate, TemplateSegments},
        compression::DecompressionType,
        constants::placeholders,
    };

    // ## Registry

    #[test]
    fn select_pass_through_only_when_decompression_is_skipped() {
        assert_eq!(BootstrapTemplate::select(true), BootstrapTemplate::PassThrough);
        assert_eq!(BootstrapTemplate::select(false), BootstrapTemplate::Decompressing);
    }

    #[test]
    fn placeholder_counts_per_template() {
        let d = BootstrapTemplate::Decompressing.text();
        assert_eq!(d.matches(placeholders::OFFSET).count(), 1);
        assert_eq!(d.matches(placeholders::DECOMPRESSION_TYPE).count(), 1);

        let p = BootstrapTemplate::PassThrough.text();
        assert_eq!(p.matches(placeholders::OFFSET).count(), 1);
        assert_eq!(p.matches(placeholders::DECOMPRESSION_TYPE).count(), 0);
    }

    #[test]
    fn only_decompressing_takes_identifier() {
        assert!(BootstrapTemplate::Decompressing.takes_decompression_type());
        assert!(!BootstrapTemplate::PassThrough.takes_decompression_type());
    }

    #[test]
    fn templates_are_ascii() {
        for t in BootstrapTemplate::ALL {
            assert!(t.text().is_ascii(), "{} template", t.name());
        }
    }

    // ## Rendering

    #[test]
    fn decompressing_default_offset_is_156() {
        let r = BootstrapTemplate::Decompressing.render(DecompressionType::DeflateRaw).unwrap();
        assert_eq!(r.offset(), 156);
        assert_eq!(r.len(), 156);
        assert!(r.as_str().contains("b.slice(156)"));
        assert!(r.as_str().contains("DecompressionStream('deflate-raw')"));
    }

    #[test]
    fn decompressing_offset_tracks_identifier_length() {
        let gzip = BootstrapTemplate::Decompressing.render(DecompressionType::Gzip).unwrap();
        assert_eq!(gzip.offset(), 149);
        assert!(gzip.as_str().contains("DecompressionStream('gzip')"));

        let zlib = BootstrapTemplate::Decompressing.render(DecompressionType::Deflate).unwrap();
        assert_eq!(zlib.offset(), 152);
        assert!(zlib.as_str().contains("DecompressionStream('deflate')"));
    }

    #[test]
    fn arbitrary_identifier_is_embedded_verbatim() {
        let r = BootstrapTemplate::Decompressing.render("brotli").unwrap();
        assert_eq!(r.offset(), 151);
        assert_eq!(r.len(), 151);
        assert!(r.as_str().contains("b.slice(151)"));
        assert!(r.as_str().contains("DecompressionStream('brotli')"));

        let long = "x".repeat(900);
        let r = BootstrapTemplate::Decompressing.render(&long).unwrap();
        assert_eq!(r.offset(), r.len());
        assert_eq!(r.offset(), 142 + 900 + 4);
    }

    #[test]
    fn pass_through_offset_is_104_and_ignores_identifier() {
        for kind in DecompressionType::ALL {
            let r = BootstrapTemplate::PassThrough.render(kind).unwrap();
            assert_eq!(r.offset(), 104);
            assert!(r.as_str().contains("b.slice(104)"));
            assert!(!r.as_str().contains("DecompressionStream"));
            assert!(!r.as_str().contains(kind.as_str()));
        }
    }

    #[test]
    fn rendered_bootstrap_has_no_placeholders_left() {
        for t in BootstrapTemplate::ALL {
            let r = t.render(DecompressionType::DeflateRaw).unwrap();
            assert!(!r.as_str().contains('{'), "{}: {}", t.name(), r.as_str());
            assert!(r.as_str().starts_with("<svg onload=\""));
            assert!(r.as_str().ends_with("\">"));
        }
    }

    // ## Segments

    #[test]
    fn segments_of_decompressing_template() {
        let s = BootstrapTemplate::Decompressing.segments().unwrap();
        assert!(s.head.ends_with("b.slice("));
        assert_eq!(s.middle, Some(").stream().pipeThrough(new DecompressionStream('"));
        assert_eq!(s.tail, "'))).text()).then(eval)\">");
    }

    #[test]
    fn segments_of_pass_through_template() {
        let s = BootstrapTemplate::PassThrough.segments().unwrap();
        assert!(s.head.ends_with("b.slice("));
        assert_eq!(s.middle, None);
        assert_eq!(s.tail, ").stream()).text()).then(eval)\">");
    }

    #[test]
    fn segments_reject_type_before_offset() {
        assert!(TemplateSegments::split("{type}{offset}").is_err());
        assert!(TemplateSegments::split("nothing").is_err());
    }
}
