//! Timed bulk write/read loops over the array contract.

use std::time::{Duration, Instant};

use anyhow::Context;
use rand::RngCore;
use tracing::info;

use raid_rs::capacity;
use raid_rs::layout::{ArrayConfig, LayoutKind};

use crate::cli::BenchArgs;
use crate::report;

/// One layout's benchmark figures, as consumed by the report renderers.
pub struct BenchResult {
    pub name: &'static str,
    pub write_time: Duration,
    pub read_time: Duration,
    pub bytes_moved: u64,
    pub effective_capacity: u64,
    pub overhead_pct: f64,
}

impl BenchResult {
    #[must_use]
    pub fn write_speed_mbps(&self) -> f64 {
        speed_mbps(self.bytes_moved, self.write_time)
    }

    #[must_use]
    pub fn read_speed_mbps(&self) -> f64 {
        speed_mbps(self.bytes_moved, self.read_time)
    }
}

fn speed_mbps(bytes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() == 0.0 {
        return 0.0;
    }
    bytes as f64 / (1024.0 * 1024.0) / elapsed.as_secs_f64()
}

pub fn run(args: &BenchArgs) -> anyhow::Result<()> {
    let mut results = Vec::new();
    for kind in args.raid.kinds() {
        info!(layout = kind.name(), "running benchmark");
        results.push(bench_layout(kind, args)?);
    }

    report::print_table(&results);
    report::print_bar_chart(
        "Write speed (MB/s)",
        &results
            .iter()
            .map(|r| (r.name, r.write_speed_mbps()))
            .collect::<Vec<_>>(),
    );
    report::print_bar_chart(
        "Read speed (MB/s)",
        &results
            .iter()
            .map(|r| (r.name, r.read_speed_mbps()))
            .collect::<Vec<_>>(),
    );

    if let Some(path) = &args.csv {
        report::write_csv(path, &results)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
        info!(path = %path.display(), "results exported");
    }

    Ok(())
}

fn bench_layout(kind: LayoutKind, args: &BenchArgs) -> anyhow::Result<BenchResult> {
    let config = ArrayConfig {
        disk_dir: args.disk_dir.clone(),
        disks: args.disks,
        block_size: args.block_size,
        per_disk_blocks: args.per_disk_blocks,
    };

    let data_bytes = args.data_mb * 1024 * 1024;
    let block_count = data_bytes.div_ceil(args.block_size) as u64;

    let mut payload = vec![0u8; args.block_size];
    rand::rng().fill_bytes(&mut payload);

    let mut array = kind.build(config);
    array
        .initialize()
        .with_context(|| format!("initializing {}", kind.name()))?;

    let write_start = Instant::now();
    for block_num in 0..block_count {
        array.write(block_num, &payload)?;
    }
    let write_time = write_start.elapsed();

    let read_start = Instant::now();
    for block_num in 0..block_count {
        array.read(block_num)?;
    }
    let read_time = read_start.elapsed();

    array.clean_up().context("cleaning up disk images")?;

    Ok(BenchResult {
        name: kind.name(),
        write_time,
        read_time,
        bytes_moved: block_count * args.block_size as u64,
        effective_capacity: capacity::effective_capacity(kind, args.disks, args.per_disk_blocks),
        overhead_pct: capacity::overhead_percent(kind, args.disks, args.per_disk_blocks),
    })
}
