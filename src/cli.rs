use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linefmt")]
#[command(
    about = "Convert rows of text into array literals or a markdown link list",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert TEXT (or stdin when omitted) and print the result
    Convert {
        /// Input rows, newline or comma separated
        text: Option<String>,

        /// Output format: simple, quoted, template or markdown
        #[arg(short, long, default_value = "quoted")]
        format: String,

        /// Copy the result to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },
    /// List the available output formats
    Formats,
}
