use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use raid_rs::layout::{DEFAULT_BLOCK_SIZE, LayoutKind};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Time bulk write/read loops against each layout and report throughput.
    Bench(BenchArgs),

    /// Print effective capacity and overhead for every layout.
    Capacity(CapacityArgs),
}

#[derive(Args)]
pub struct BenchArgs {
    /// Directory that receives the disk image files.
    #[arg(long, default_value = ".")]
    pub disk_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = RaidMode::All)]
    pub raid: RaidMode,

    #[arg(long, default_value_t = 5)]
    pub disks: usize,

    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Volume of data pushed through each layout, in MiB.
    #[arg(long, default_value_t = 100)]
    pub data_mb: usize,

    #[arg(long, default_value_t = 10_000)]
    pub per_disk_blocks: u64,

    /// Write results to this file as CSV for later analysis.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Args)]
pub struct CapacityArgs {
    #[arg(long, default_value_t = 5)]
    pub disks: usize,

    #[arg(long, default_value_t = 10_000)]
    pub per_disk_blocks: u64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RaidMode {
    All,
    Striped,
    Mirrored,
    DedicatedParity,
    RotatingParity,
}

impl RaidMode {
    /// `kinds` resolves the selection to the concrete layouts to drive.
    pub fn kinds(self) -> Vec<LayoutKind> {
        match self {
            Self::All => LayoutKind::ALL.to_vec(),
            Self::Striped => vec![LayoutKind::Striped],
            Self::Mirrored => vec![LayoutKind::Mirrored],
            Self::DedicatedParity => vec![LayoutKind::DedicatedParity],
            Self::RotatingParity => vec![LayoutKind::RotatingParity],
        }
    }
}
