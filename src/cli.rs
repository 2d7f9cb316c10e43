use clap::Parser;
use lapwatch::console::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "LAPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Milliseconds between display refreshes while running.
    #[arg(
        short,
        long,
        env = "LAPWATCH_TICK",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick: u64,

    #[arg(short, long, env = "LAPWATCH_FORMAT", value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
