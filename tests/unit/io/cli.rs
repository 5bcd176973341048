//! Tests for command-line parsing and batch output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use geopattern::io::cli::{BatchProcessor, Cli, OutputFormat, slug};
    use geopattern::io::configuration::DEFAULT_BASE_COLOR;
    use geopattern::{GenerateOptions, PatternError, generate};
    use std::path::PathBuf;

    fn inputs(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["geopattern"]);

        assert!(cli.inputs.is_empty());
        assert_eq!(cli.base_color, DEFAULT_BASE_COLOR);
        assert_eq!(cli.format, OutputFormat::Svg);
        assert_eq!(cli.generator, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.list);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the data-uri value
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "geopattern",
            "GitHub",
            "Rust",
            "-g",
            "xes",
            "-c",
            "#ff7f00",
            "-b",
            "#123456",
            "--hash",
            "5442e2b64fa09764b9f593867e59a97292c84059",
            "-f",
            "data-uri",
            "-o",
            "out",
            "--no-skip",
            "--quiet",
            "-vv",
        ]);

        assert_eq!(cli.inputs, ["GitHub", "Rust"]);
        assert_eq!(cli.generator.as_deref(), Some("xes"));
        assert_eq!(cli.color.as_deref(), Some("#ff7f00"));
        assert_eq!(cli.base_color, "#123456");
        assert_eq!(cli.format, OutputFormat::DataUri);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert!(cli.no_skip);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    // Tests options mirror the flags
    // Verified by dropping the hash when building options
    #[test]
    fn test_options_from_flags() {
        let cli = Cli::parse_from(["geopattern", "-g", "plaid", "--hash", "abc"]);
        let options = cli.options();

        assert_eq!(
            options,
            GenerateOptions::new().generator("plaid").hash("abc")
        );
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        assert!(Cli::parse_from(["geopattern"]).skip_existing());
        assert!(!Cli::parse_from(["geopattern", "-n"]).skip_existing());
    }

    // Tests progress is only shown for directory output without --quiet
    // Verified by showing progress for stdout output
    #[test]
    fn test_progress_display_logic() {
        assert!(!Cli::parse_from(["geopattern"]).should_show_progress());
        assert!(Cli::parse_from(["geopattern", "-o", "out"]).should_show_progress());
        assert!(!Cli::parse_from(["geopattern", "-o", "out", "-q"]).should_show_progress());
    }

    // Tests the current time stands in for missing inputs
    // Verified by returning an empty input list
    #[test]
    fn test_resolved_inputs() {
        let resolved = Cli::parse_from(["geopattern"]).resolved_inputs();
        assert_eq!(resolved.len(), 1);
        assert!(
            resolved
                .iter()
                .all(|input| input.chars().all(|c| c.is_ascii_digit()))
        );

        let given = Cli::parse_from(["geopattern", "a", "b"]).resolved_inputs();
        assert_eq!(given, ["a", "b"]);
    }

    // Tests each format encodes the same pattern
    // Verified by wrapping the data URL without quotes
    #[test]
    fn test_output_format_encode() {
        let pattern = generate("GitHub", &GenerateOptions::default()).expect("pattern");

        assert_eq!(OutputFormat::Svg.encode(&pattern), pattern.to_svg());
        assert_eq!(OutputFormat::Base64.encode(&pattern), pattern.to_base64());
        assert_eq!(OutputFormat::DataUri.encode(&pattern), pattern.to_data_uri());
        assert_eq!(OutputFormat::DataUrl.encode(&pattern), pattern.to_data_url());
        assert_eq!(OutputFormat::Svg.extension(), "svg");
        assert_eq!(OutputFormat::DataUrl.extension(), "txt");
    }

    // Tests slugs keep safe characters and fall back when empty
    // Verified by keeping path separators
    #[test]
    fn test_slug() {
        assert_eq!(slug("GitHub"), "GitHub");
        assert_eq!(slug("hello world/../x"), "hello-world----x");
        assert_eq!(slug("  ok_1-2  "), "ok_1-2");
        assert_eq!(slug("€€"), "pattern");
        assert_eq!(slug(""), "pattern");
    }

    // Tests stdout output writes one encoded pattern per line
    // Verified by omitting the newline between patterns
    #[test]
    fn test_write_stream() {
        let processor = BatchProcessor::new(Cli::parse_from(["geopattern", "-f", "base64"]));
        let mut out = Vec::new();
        processor
            .write_stream(&mut out, &inputs(&["a", "b"]), &GenerateOptions::default())
            .expect("write to buffer");

        let text = String::from_utf8(out).expect("utf-8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first = generate("a", &GenerateOptions::default()).expect("pattern");
        assert_eq!(lines.first().copied(), Some(first.to_base64().as_str()));
    }

    // Tests a rejected option writes nothing
    // Verified by writing each pattern as soon as it is generated
    #[test]
    fn test_write_stream_rejects_before_writing() {
        let processor = BatchProcessor::new(Cli::parse_from(["geopattern"]));
        let mut out = Vec::new();
        let options = GenerateOptions::new().generator("foo");

        let result = processor.write_stream(&mut out, &inputs(&["a", "b"]), &options);
        assert!(matches!(result, Err(PatternError::InvalidGenerator { .. })));
        assert!(out.is_empty());
    }

    // Tests directory output writes one file per input and skips existing files
    // Verified by ignoring the skip check
    #[test]
    fn test_write_directory_and_skip() {
        let directory = tempfile::tempdir().expect("temp dir");
        let target = directory.path().join("patterns");
        let mut processor = BatchProcessor::new(Cli::parse_from(["geopattern", "-q"]));

        processor
            .write_directory(&target, &inputs(&["GitHub", "Rust"]), &GenerateOptions::default())
            .expect("first batch");

        let github = target.join("GitHub.svg");
        let expected = generate("GitHub", &GenerateOptions::default()).expect("pattern");
        assert_eq!(
            std::fs::read_to_string(&github).expect("written file"),
            expected.to_svg()
        );
        assert!(target.join("Rust.svg").exists());

        std::fs::write(&github, "stale").expect("overwrite");
        processor
            .write_directory(&target, &inputs(&["GitHub"]), &GenerateOptions::default())
            .expect("second batch");
        assert_eq!(
            std::fs::read_to_string(&github).expect("kept file"),
            "stale"
        );
    }

    // Tests inputs sharing a slug get numbered paths in input order
    // Verified by returning the plain slug path for every input
    #[test]
    fn test_output_paths_disambiguate_slugs() {
        let processor = BatchProcessor::new(Cli::parse_from(["geopattern", "-q"]));
        let directory = PathBuf::from("out");

        let paths = processor.output_paths(
            &directory,
            &inputs(&["a b", "a?b", "ü", "a-b", "€", "a b-2"]),
        );

        assert_eq!(
            paths,
            [
                directory.join("a-b.svg"),
                directory.join("a-b-2.svg"),
                directory.join("pattern.svg"),
                directory.join("a-b-3.svg"),
                directory.join("pattern-2.svg"),
                directory.join("a-b-2-2.svg"),
            ]
        );
    }

    // Tests colliding inputs in one batch each keep their own file
    // Verified by writing every colliding input to the same path
    #[test]
    fn test_write_directory_colliding_slugs() {
        let directory = tempfile::tempdir().expect("temp dir");
        let mut processor = BatchProcessor::new(Cli::parse_from(["geopattern", "-q"]));

        processor
            .write_directory(
                directory.path(),
                &inputs(&["a b", "a?b", "ü"]),
                &GenerateOptions::default(),
            )
            .expect("batch");

        for (input, name) in [("a b", "a-b.svg"), ("a?b", "a-b-2.svg"), ("ü", "pattern.svg")] {
            let expected = generate(input, &GenerateOptions::default()).expect("pattern");
            assert_eq!(
                std::fs::read_to_string(directory.path().join(name)).expect("written file"),
                expected.to_svg(),
                "{input}"
            );
        }
        assert_eq!(
            std::fs::read_dir(directory.path()).expect("listing").count(),
            3
        );
    }

    // Tests --no-skip regenerates existing files and text formats use .txt
    // Verified by always writing .svg files
    #[test]
    fn test_write_directory_no_skip() {
        let directory = tempfile::tempdir().expect("temp dir");
        let mut processor =
            BatchProcessor::new(Cli::parse_from(["geopattern", "-n", "-f", "data-url"]));

        let path = processor.output_path(directory.path(), "GitHub");
        assert_eq!(path, directory.path().join("GitHub.txt"));

        std::fs::write(&path, "stale").expect("seed file");
        processor
            .write_directory(directory.path(), &inputs(&["GitHub"]), &GenerateOptions::default())
            .expect("batch");

        let written = std::fs::read_to_string(&path).expect("written file");
        assert!(written.starts_with("url(\"data:image/svg+xml;base64,"));
    }

    // Tests an output path that is a file is reported with its path
    // Verified by discarding the path from the error
    #[test]
    fn test_write_directory_error() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let mut processor = BatchProcessor::new(Cli::parse_from(["geopattern", "-q"]));

        let result =
            processor.write_directory(file.path(), &inputs(&["x"]), &GenerateOptions::default());
        assert!(matches!(
            result,
            Err(PatternError::FileSystem {
                operation: "create directory",
                ..
            })
        ));
    }
}
