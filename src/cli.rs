use std::path::PathBuf;

use btrobust::ZeroDivision;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "btrobust",
    version,
    about = "Back-transcription robustness scoring for NLU classifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Score(ScoreArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(long)]
    pub dataset_path: PathBuf,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value = "warn", value_parser = parse_zero_division)]
    pub zero_division: ZeroDivision,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_zero_division(raw: &str) -> Result<ZeroDivision, String> {
    raw.parse::<ZeroDivision>().map_err(|err| err.to_string())
}
