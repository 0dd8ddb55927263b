//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;
use timed_life::Engine;

fn benchmark_serial(size: u32, iterations: u32) -> f64 {
    let mut engine = Engine::with_seed(size, size, 0xC0FFEE);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
        engine.commit();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: u32, iterations: u32) -> f64 {
    let mut engine = Engine::with_seed(size, size, 0xC0FFEE);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step_parallel();
        engine.commit();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Timed Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000u64 * 2000;
    let parallel_ms = benchmark_parallel(2000, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
