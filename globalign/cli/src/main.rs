use clap::Parser;
use eyre::Result;
use log::info;

use globalign_alignment_rs::{align, score, Band, ScoreModel};

#[derive(Parser, Debug)]
#[command(name = "globalign")]
#[command(version)]
#[command(about = "Fully global pairwise alignment with affine gaps", long_about = None)]
struct Cli {
    /// First sequence (rows of the alignment grid)
    seq1: String,
    /// Second sequence (columns of the alignment grid)
    seq2: String,

    #[arg(long = "match", default_value_t = 3, allow_negative_numbers = true)]
    match_score: i32,
    #[arg(long = "mismatch", default_value_t = -6, allow_negative_numbers = true)]
    mismatch_score: i32,
    #[arg(long, default_value_t = -5, allow_negative_numbers = true)]
    gap_open: i32,
    #[arg(long, default_value_t = -2, allow_negative_numbers = true)]
    gap_extend: i32,

    /// Restrict the alignment to a diagonal band of the given half-width
    /// (1000 if the flag is given without a value)
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1000")]
    band: Option<usize>,

    /// Print only the alignment score (no traceback, memory linear in the band width)
    #[arg(long, default_value_t = false)]
    score_only: bool,

    /// Print a human-readable view of the alignment instead of the serialized record
    #[arg(long, default_value_t = false, conflicts_with = "score_only")]
    pretty: bool,
}

impl Cli {
    fn model(&self) -> ScoreModel<i32> {
        ScoreModel::new(
            self.match_score,
            self.mismatch_score,
            self.gap_open,
            self.gap_extend,
        )
    }

    fn band(&self) -> Result<Band> {
        match self.band {
            None => Ok(Band::Full),
            Some(half_width) => Band::diagonal(half_width),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (seq1, seq2) = (cli.seq1.as_bytes(), cli.seq2.as_bytes());
    let (model, band) = (cli.model(), cli.band()?);
    info!("Aligning {} and {} symbols", seq1.len(), seq2.len());

    if cli.score_only {
        println!("{}", score(seq1, seq2, model, band)?);
        return Ok(());
    }

    let alignment = align(seq1, seq2, model, band)?;
    if cli.pretty {
        println!("score: {}\n{}", alignment.score(), alignment.pretty());
    } else {
        println!("{alignment}");
    }
    Ok(())
}
