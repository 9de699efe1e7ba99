//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::OutputFormat;
use super::cli::{Cli, Command, FormatArg};

mod parsing {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["macfact"]);

        assert!(cli.command.is_none());
        assert!(cli.kernel.is_none());
        assert!(cli.sysfs_root.is_none());
        assert!(!cli.no_sysfs);
        assert!(cli.ifconfig.is_none());
        assert!(cli.include_interfaces.is_empty());
        assert!(cli.exclude_interfaces.is_empty());
        assert!(cli.format.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_platform_options() {
        let cli = Cli::parse_from_iter([
            "macfact",
            "--kernel",
            "FreeBSD",
            "--sysfs-root",
            "/tmp/net",
            "--ifconfig",
            "/usr/local/sbin/ifconfig",
        ]);

        assert_eq!(cli.kernel.as_deref(), Some("FreeBSD"));
        assert_eq!(cli.sysfs_root, Some(PathBuf::from("/tmp/net")));
        assert_eq!(cli.ifconfig, Some(PathBuf::from("/usr/local/sbin/ifconfig")));
    }

    #[test]
    fn parse_no_sysfs_flag() {
        let cli = Cli::parse_from_iter(["macfact", "--no-sysfs"]);
        assert!(cli.no_sysfs);
    }

    #[test]
    fn parse_repeated_filters() {
        let cli = Cli::parse_from_iter([
            "macfact",
            "--include-interface",
            "^eth",
            "--include-interface",
            "^en",
            "--exclude-interface",
            "^docker",
        ]);

        assert_eq!(cli.include_interfaces, vec!["^eth", "^en"]);
        assert_eq!(cli.exclude_interfaces, vec!["^docker"]);
    }

    #[test]
    fn parse_formats() {
        let plain = Cli::parse_from_iter(["macfact", "--format", "plain"]);
        assert_eq!(plain.format, Some(FormatArg::Plain));

        let json = Cli::parse_from_iter(["macfact", "--format", "json"]);
        assert_eq!(json.format, Some(FormatArg::Json));
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["macfact", "-c", "custom.toml", "-v"]);

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_empty_paths() {
        for flag in ["--ifconfig", "--sysfs-root"] {
            let result = Cli::try_parse_from(["macfact", flag, ""]);
            assert!(result.is_err(), "{flag} accepted an empty path");
        }
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["macfact", "--format", "yaml"]);
        assert!(result.is_err());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["macfact", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("macfact.toml"));
            }
            None => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["macfact", "init", "--output", "/etc/macfact.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/etc/macfact.toml"));
            }
            None => panic!("Expected Init command"),
        }
    }

    #[test]
    fn plain_invocation_is_not_init() {
        let cli = Cli::parse_from_iter(["macfact", "--kernel", "Linux"]);
        assert!(!cli.is_init());
    }
}

mod conversion {
    use super::*;

    #[test]
    fn format_arg_maps_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Plain), OutputFormat::Plain);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }
}
