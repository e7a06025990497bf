use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use solid_core::{Demo, VERSION};

use crate::ui::Format;

/// Solid - worked examples of the single responsibility and open/closed principles
#[derive(Parser)]
#[command(name = "solid")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (default: pretty on a terminal, plain otherwise)
    #[arg(long, global = true, value_enum)]
    pub format: Option<Format>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (no banners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Demos selected by the command, in run order.
    ///
    /// Returns `None` for commands that do not run demos.
    pub fn demos(&self) -> Option<Vec<Demo>> {
        match self.command {
            None | Some(Commands::All) => Some(Demo::ALL.to_vec()),
            Some(Commands::Srp) => Some(vec![Demo::SingleResponsibility]),
            Some(Commands::Ocp) => Some(vec![Demo::OpenClosed]),
            Some(Commands::Completions(_)) => None,
        }
    }

    pub fn setup_logging(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        // RUST_LOG wins unless -v was given explicitly
        let mut filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        if self.verbose > 0 {
            filter = filter.add_directive(level.into());
        }

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both demos (default)
    All,

    /// Single responsibility: a journal that only stores entries
    Srp,

    /// Open/closed: filtering products with composable specifications
    Ocp,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
