use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE: &str = "USAGE: ago <commands> [argument ...]";

/// Returns the version string, with the git hash appended for builds from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("AGO_GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "ago",
    bin_name = "ago",
    version = get_version(),
    disable_help_subcommand = true,
    override_usage = "ago <commands> [argument ...]"
)]
#[command(about = "Keep private copies of your text documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered documents
    #[command(name = "ls-docs")]
    LsDocs,

    /// Copy one or more files into the store
    #[command(name = "add-docs")]
    AddDocs {
        /// Files to add
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        paths: Vec<PathBuf>,
    },

    /// Remove one or more documents by id
    #[command(name = "rm-docs")]
    RmDocs {
        /// Document ids (see ls-docs)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        ids: Vec<String>,
    },

    /// Start a test (not implemented yet)
    Test {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show help
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ago").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_ls_docs() {
        assert!(matches!(parse(&["ls-docs"]).command, Some(Commands::LsDocs)));
    }

    #[test]
    fn parses_add_docs_paths() {
        match parse(&["add-docs", "a.txt", "dir/b.txt"]).command {
            Some(Commands::AddDocs { paths }) => {
                assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("dir/b.txt")])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rm_docs_keeps_raw_ids() {
        match parse(&["rm-docs", "0", "abc"]).command {
            Some(Commands::RmDocs { ids }) => assert_eq!(ids, vec!["0", "abc"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rm_docs_passes_negative_ids_through() {
        match parse(&["rm-docs", "0", "-1"]).command {
            Some(Commands::RmDocs { ids }) => assert_eq!(ids, vec!["0", "-1"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn add_docs_accepts_dash_prefixed_names() {
        match parse(&["add-docs", "-notes.txt"]).command {
            Some(Commands::AddDocs { paths }) => {
                assert_eq!(paths, vec![PathBuf::from("-notes.txt")])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn verbose_still_parses_after_ids() {
        let cli = parse(&["rm-docs", "3", "--verbose"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::RmDocs { ids }) => assert_eq!(ids, vec!["3"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_takes_free_form_args() {
        match parse(&["test", "-n", "5"]).command {
            Some(Commands::Test { args }) => assert_eq!(args, vec!["-n", "5"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn help_is_a_command() {
        assert!(matches!(parse(&["help"]).command, Some(Commands::Help)));
    }

    #[test]
    fn no_command_parses_to_none() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_docs_requires_a_path() {
        assert!(Cli::try_parse_from(["ago", "add-docs"]).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["ago", "frobnicate"]).is_err());
    }
}
