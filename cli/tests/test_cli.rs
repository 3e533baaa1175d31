#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    use tempfile::TempDir;

    const SCRIPT: &str = "console.log(1)";

    fn jspack(args: &[&str], cwd: &Path) -> Output {
        Command::new(env!("CARGO_BIN_EXE_jspack"))
            .args(args)
            .current_dir(cwd)
            .env("RUST_LOG", "off")
            .output()
            .unwrap()
    }

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("in.js"), SCRIPT).unwrap();
        dir
    }

    #[test]
    fn packs_and_prints_statistics() {
        let dir = setup();
        let out = jspack(&["--zopfli-iterations", "2", "in.js", "out.html"], dir.path());
        assert!(out.status.success());

        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.starts_with("* Html output stats:\n"));
        assert!(stdout.contains("Input payload size: 14 bytes\n"));
        assert!(stdout.contains("Decompression type is 'deflate-raw'\n"));

        let html = fs::read(dir.path().join("out.html")).unwrap();
        assert!(html.starts_with(b"<svg onload=\"fetch`#`.then(r=>r.blob()).then(b=>new Response(b.slice(156)"));
    }

    #[test]
    fn flags_after_positionals_and_raw_dump() {
        let dir = setup();
        let out = jspack(
            &["in.js", "out.html", "--no-compression", "--no-decompression-script", "--dump-compressed-raw", "--no-statistics"],
            dir.path(),
        );
        assert!(out.status.success());
        assert!(out.stdout.is_empty());

        let html = fs::read(dir.path().join("out.html")).unwrap();
        let raw = fs::read(dir.path().join("out.html.raw")).unwrap();
        assert_eq!(html.len(), 104 + SCRIPT.len());
        assert_eq!(&html[104..], SCRIPT.as_bytes());
        assert_eq!(raw, SCRIPT.as_bytes());
    }

    #[test]
    fn write_no_html_reports_raw_only() {
        let dir = setup();
        let out = jspack(
            &["--write-no-html", "--dump-compressed-raw", "--zopfli-iterations", "1", "in.js", "out.html"],
            dir.path(),
        );
        assert!(out.status.success());
        assert!(!dir.path().join("out.html").exists());

        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.starts_with("* Raw output stats:\n"));
        assert!(!stdout.contains("Html"));
    }

    #[test]
    fn missing_positional_is_usage_error() {
        let dir = setup();
        let out = jspack(&["in.js"], dir.path());
        assert_eq!(out.status.code(), Some(2));
        assert!(!out.stderr.is_empty());
    }

    #[test]
    fn non_numeric_iterations_is_usage_error() {
        let dir = setup();
        let out = jspack(&["--zopfli-iterations", "many", "in.js", "out.html"], dir.path());
        assert_eq!(out.status.code(), Some(2));
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn unknown_decompression_type_fails_run() {
        let dir = setup();
        let out = jspack(&["--decompression-type", "brotli", "in.js", "out.html"], dir.path());
        assert_eq!(out.status.code(), Some(1));
        let stderr = String::from_utf8(out.stderr).unwrap();
        assert!(stderr.contains("brotli"));
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn missing_input_fails_run() {
        let dir = setup();
        let out = jspack(&["absent.js", "out.html"], dir.path());
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8(out.stderr).unwrap().contains("absent.js"));
    }

    #[test]
    fn verify_flag_accepted() {
        let dir = setup();
        let out = jspack(
            &["--verify", "--decompression-type", "gzip", "--zopfli-iterations", "1", "in.js", "out.html"],
            dir.path(),
        );
        assert!(out.status.success());
        assert!(String::from_utf8(out.stdout).unwrap().contains("Decompression type is 'gzip'\n"));
    }

    #[test]
    fn precompressed_payload_keeps_custom_identifier() {
        let dir = setup();
        let out = jspack(
            &["--no-compression", "--decompression-type=brotli", "in.js", "out.html"],
            dir.path(),
        );
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

        let html = fs::read(dir.path().join("out.html")).unwrap();
        let head = String::from_utf8_lossy(&html[..151]).into_owned();
        assert!(head.contains("b.slice(151)"));
        assert!(head.ends_with("DecompressionStream('brotli'))).text()).then(eval)\">"));
        assert_eq!(&html[151..], SCRIPT.as_bytes());
        assert!(String::from_utf8(out.stdout).unwrap().contains("Decompression type is 'brotli'\n"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unwritable_stdout_does_not_fail_the_run() {
        use std::fs::OpenOptions;
        use std::process::Stdio;

        let dir = setup();
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let out = Command::new(env!("CARGO_BIN_EXE_jspack"))
            .args(["--zopfli-iterations=1", "in.js", "out.html"])
            .current_dir(dir.path())
            .env("RUST_LOG", "off")
            .stdout(Stdio::from(full))
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(0));
        assert!(dir.path().join("out.html").exists());
    }
}
