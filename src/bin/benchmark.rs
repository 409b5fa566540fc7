//! Step timing: serial vs rayon evolution on random boards

use std::time::Instant;
use life_board::Grid;

fn benchmark(size: (usize, usize), iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = Grid::random(size.0, size.1, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [(40, 60), (100, 100), (250, 400), (500, 500), (1000, 1000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Board", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let serial_ms = benchmark((rows, cols), iterations, Grid::step);
        let parallel_ms = benchmark((rows, cols), iterations, Grid::step_parallel);
        let speedup = if parallel_ms > 0.0 { serial_ms / parallel_ms } else { 0.0 };

        println!(
            "{:>12} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{rows}x{cols}"),
            serial_ms,
            parallel_ms,
            speedup
        );
    }
}
