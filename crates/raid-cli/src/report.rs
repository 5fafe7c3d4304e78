//! Table, bar-chart, and CSV rendering of benchmark results.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use raid_rs::capacity;
use raid_rs::layout::LayoutKind;

use crate::bench::BenchResult;

pub fn print_table(results: &[BenchResult]) {
    println!(
        "{:<18} {:<14} {:<14} {:<14} {:<14} {:<14} {:<10}",
        "layout", "write time", "write MB/s", "read time", "read MB/s", "capacity", "overhead"
    );
    for r in results {
        println!(
            "{:<18} {:<14} {:<14.2} {:<14} {:<14.2} {:<14} {:<10.2}",
            r.name,
            format_seconds(r.write_time.as_secs_f64()),
            r.write_speed_mbps(),
            format_seconds(r.read_time.as_secs_f64()),
            r.read_speed_mbps(),
            r.effective_capacity,
            r.overhead_pct,
        );
    }
}

/// `print_bar_chart` renders a horizontal ASCII bar per row, scaled to the
/// largest value.
pub fn print_bar_chart(title: &str, rows: &[(&str, f64)]) {
    const MAX_WIDTH: usize = 40;

    println!("\n{title}:");
    let max = rows.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    for (name, value) in rows {
        let width = if max > 0.0 {
            (value / max * MAX_WIDTH as f64) as usize
        } else {
            0
        };
        println!("{name:<18} [{}] {value:.2}", "█".repeat(width));
    }
}

/// `write_csv` saves results for later analysis, one row per layout.
pub fn write_csv(path: &Path, results: &[BenchResult]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "RaidType,WriteTime,WriteSpeed,ReadTime,ReadSpeed,EffectiveCap,OverheadPct"
    )?;
    for r in results {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{},{:.2}",
            r.name,
            r.write_time.as_secs_f64(),
            r.write_speed_mbps(),
            r.read_time.as_secs_f64(),
            r.read_speed_mbps(),
            r.effective_capacity,
            r.overhead_pct,
        )?;
    }
    Ok(())
}

pub fn print_capacity(disks: usize, per_disk_blocks: u64) {
    println!(
        "{:<18} {:<16} {:<10}",
        "layout", "capacity (blocks)", "overhead %"
    );
    for kind in LayoutKind::ALL {
        println!(
            "{:<18} {:<16} {:<10.2}",
            kind.name(),
            capacity::effective_capacity(kind, disks, per_disk_blocks),
            capacity::overhead_percent(kind, disks, per_disk_blocks),
        );
    }
}

fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2}s")
}
