use crate::grid::{Position, Size};
use crate::stage::{Stage, STAGES};
use std::str::FromStr;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn find_stage(s: &str) -> Result<Stage, String> {
    crate::stage::find(s).copied().ok_or_else(|| {
        let names: Vec<&str> = STAGES.iter().map(|stage| stage.name).collect();
        format!("unknown stage: {} (available: {})", s, names.join(", "))
    })
}

/// A board position given on the command line as "column,row"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub x: usize,
    pub y: usize,
}

impl Move {
    pub fn position(&self) -> Position {
        (self.x, self.y)
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid move format: {} (expected x,y)", s))?;

        let x = x
            .trim()
            .parse()
            .map_err(|_| format!("invalid move column: {}", s))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| format!("invalid move row: {}", s))?;

        Ok(Move { x, y })
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub stage_name: Option<String>,
    pub size: Size,
    pub scramble_presses: Option<usize>,
    pub seed: Option<u64>,
    pub moves: Vec<Move>,
    pub autoplay: bool,
    pub show_steps: bool,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Cyclic",
    about = "Scramble and clear rotation puzzles from the command line"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str = find_stage),
        short,
        long,
        conflicts_with = "size",
        help = "Play a named stage from the built-in catalog"
    )]
    stage: Option<Stage>,

    #[structopt(
        parse(try_from_str),
        short = "S",
        long,
        help = "Board size as WxH"
    )]
    size: Option<Size>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Number of scramble presses (defaults to width * height)"
    )]
    presses: Option<usize>,

    #[structopt(parse(try_from_str), long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Press these board positions in order, each as x,y"
    )]
    moves: Vec<Move>,

    #[structopt(short, long, help = "Replay the solution presses until the board clears")]
    autoplay: bool,

    #[structopt(long, help = "Print the board after every press")]
    show_steps: bool,

    #[structopt(long, help = "List the built-in stages and exit")]
    pub list_stages: bool,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        let (stage_name, size) = match (self.stage, self.size) {
            (Some(stage), _) => (Some(stage.name.to_string()), stage.size),
            (None, Some(size)) => (None, size),
            (None, None) => {
                let stage = STAGES.first().ok_or("no stages defined")?;
                (Some(stage.name.to_string()), stage.size)
            }
        };

        Ok(AppConfig {
            stage_name,
            size,
            scramble_presses: self.presses,
            seed: self.seed,
            moves: self.moves,
            autoplay: self.autoplay,
            show_steps: self.show_steps,
        })
    }
}
