//! Neighbor-counting benchmark: compares every strategy across grid and kernel sizes

use std::time::Instant;

use lifelike::{Algorithm, Kernel, RuleSet, Simulation};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark(algorithm: Algorithm, size: usize, kernel: Kernel, iterations: usize) -> f64 {
    let mut sim = Simulation::new(RuleSet::conway(), kernel).with_algorithm(algorithm);
    if let Err(e) = sim.seed(size, size, 0.3, &mut StdRng::seed_from_u64(size as u64)) {
        eprintln!("seeding failed: {}", e);
        return f64::NAN;
    }

    let start = Instant::now();
    if let Err(e) = sim.advance(iterations) {
        eprintln!("step failed: {}", e);
        return f64::NAN;
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life-like Neighbor Counting Benchmark ===\n");

    let sizes = [100, 200, 500, 1000, 2000];
    let kernel_sizes = [3, 5, 9];
    let iterations = 10;

    print!("{:>10} {:>4}", "Size", "k");
    for algorithm in Algorithm::all() {
        print!(" {:>12}", algorithm.name());
    }
    println!();
    println!("{:-<60}", "");

    for size in sizes {
        for k in kernel_sizes {
            let Ok(kernel) = Kernel::new(k) else { continue };
            print!("{:>10} {:>4}", format!("{}x{}", size, size), k);
            for algorithm in Algorithm::all() {
                // direct summation grows with k²; skip the slow corner
                if algorithm == Algorithm::Direct && size * size * k * k > 50_000_000 {
                    print!(" {:>12}", "-");
                    continue;
                }
                print!(" {:>10.2}ms", benchmark(algorithm, size, kernel, iterations));
            }
            println!();
        }
    }

    println!();
    for algorithm in Algorithm::all() {
        println!("{:>12}: {}", algorithm.name(), algorithm.description());
    }
}
