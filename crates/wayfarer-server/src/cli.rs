use clap::Parser;

/// Command-line arguments for the `wayfarer` binary.
#[derive(Debug, Parser)]
#[command(name = "wayfarer", version, about = "Wayfarer - travel planning API server")]
pub struct Args {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn clap_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_leave_config_alone() {
        let args = Args::try_parse_from(["wayfarer"]).expect("args should parse");
        assert_eq!(args.host, None);
        assert_eq!(args.port, None);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn overrides_parse() {
        let args = Args::try_parse_from(["wayfarer", "--host", "127.0.0.1", "-p", "8080", "-v"])
            .expect("args should parse");
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8080));
        assert!(args.verbose);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["wayfarer", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn port_rejects_non_numeric() {
        assert!(Args::try_parse_from(["wayfarer", "--port", "http"]).is_err());
    }
}
