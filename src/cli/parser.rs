use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for track
/// CLI application to track the time spent on a project in a CSV file
#[derive(Parser, Debug)]
#[command(
    name = "track",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track the time you spend on a project by storing start and end times in a CSV file",
    long_about = "Track the time you spend on a project by storing start and end times in a CSV file.\n\nWithout a command, `track status` is run on the configured times file (TIMES.csv)."
)]
pub struct Cli {
    /// Fail if there are any invalid time entries
    #[arg(global = true, long = "fail")]
    pub fail: bool,

    /// Do not print informative messages
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Optional times file shared by every log command.
#[derive(Args, Debug, Clone, Default)]
pub struct TimesFile {
    /// Times file (default: `times_file` from the configuration, TIMES.csv)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Begin a new time entry
    Begin(TimesFile),

    /// Complete the begun time entry (invalid earlier entries only warn unless --fail)
    End(TimesFile),

    /// Begin a new time entry and fork to complete it upon termination
    Fork(TimesFile),

    /// List all the times
    List(TimesFile),

    /// Begin or end the entry depending on the contents
    Next(TimesFile),

    /// Begin a new time entry and complete it upon termination
    Run(TimesFile),

    /// Show the current status of the times
    Status(TimesFile),

    /// Print the sum of all the times
    Total(TimesFile),

    /// Verify the validity of the times
    Verify(TimesFile),

    /// Upon termination, complete the begun time entry
    Wait(TimesFile),

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,
    },
}
