use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert 31 playing cards to or from a hexadecimal number",
    after_help = super::usage::USAGE
)]
pub struct Args {
    /// 31 cards or one hexadecimal number; fragments are joined and whitespace is ignored.
    /// Prompts interactively when omitted.
    pub input: Vec<String>,
    /// Log dispatch decisions to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    /// Joined fragments, or `None` when the user gave none.
    pub fn joined(&self) -> Option<String> {
        match self.input.is_empty() {
            true => None,
            false => Some(self.input.concat()),
        }
    }
}
