use super::args::Args;
use super::usage::USAGE;
use crate::codec::Conversion;
use anyhow::Context;
use clap::Parser;
use dialoguer::Input;

/// Command-line front end: one input in, its converted form out.
pub struct CLI(Args);

impl CLI {
    pub fn new() -> Self {
        Self(Args::parse())
    }

    pub fn level(&self) -> log::LevelFilter {
        self.0.level()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let ref input = match self.0.joined() {
            Some(input) => input,
            None => Self::prompt()?,
        };
        let conversion = Conversion::try_from(input.as_str())?;
        match conversion {
            Conversion::Cards(_) => log::info!("converting cards to hexadecimal"),
            Conversion::Value(_) => log::info!("converting hexadecimal to cards"),
        }
        println!("{}", conversion);
        Ok(())
    }

    fn prompt() -> anyhow::Result<String> {
        println!();
        println!("{}", USAGE);
        println!();
        Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .report(false)
            .interact_text()
            .context("read input")
    }
}

impl Default for CLI {
    fn default() -> Self {
        Self::new()
    }
}
