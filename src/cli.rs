use clap::Parser as ClapParser;

#[derive(ClapParser, Debug)]
#[command(
    author,
    version,
    about = "Print the next odd integer strictly greater than each value's integer part",
    long_about = None,
    after_help = "Values that start with '-' but are not digits (such as -inf) must follow `--`."
)]
pub struct Args {
    /// Values to evaluate (the demo inputs are used when none are given)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Output format
    #[arg(short = 'o', long = "format", default_value = "text", value_parser = ["text", "color", "json"])]
    pub format: String,

    /// Report invalid inputs and continue instead of stopping at the first one
    #[arg(short = 'k', long = "keep-going")]
    pub keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
