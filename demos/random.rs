//! Pathfinding across seeded random obstacle fields.
//!
//! Run: cargo run --bin walkgrid-random -- [seed] [density]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use walkgrid_core::{Grid, GridConfig, Point};
use walkgrid_demos::render;
use walkgrid_paths::{PathSearch, SearchConfig};

const WIDTH: i32 = 48;
const HEIGHT: i32 = 20;
const ROUNDS: usize = 3;
const DEFAULT_DENSITY: f64 = 0.3;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);
    let density = density_arg(args.next().as_deref());
    let mut rng = StdRng::seed_from_u64(seed);

    let config = GridConfig::new(WIDTH, HEIGHT);
    let grid = match Grid::from_config(&config, |_center, _radius| rng.random_bool(density)) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "seed {seed:#x}, density {density}: {} of {} cells walkable",
        grid.walkable_count(),
        grid.len()
    );

    let mut search = PathSearch::for_grid(&grid, SearchConfig::default());
    for round in 0..ROUNDS {
        let start = random_cell(&mut rng);
        let target = random_cell(&mut rng);
        println!("== round {round}: {start} -> {target} ==");
        match search.find_path(&grid, start, target) {
            Ok(path) => {
                print!("{}", render(&grid, search.last_search(), start, target));
                println!(
                    "{} steps to {:?}{}, cost {:.2}\n",
                    path.len(),
                    path.destination(),
                    if path.is_degraded() { " (degraded)" } else { "" },
                    path.cost()
                );
            }
            Err(e) => println!("{e}\n"),
        }
    }
}

/// Obstacle density from the command line, 0.3 when missing or not a
/// finite number.
fn density_arg(arg: Option<&str>) -> f64 {
    arg.and_then(|s| s.parse::<f64>().ok())
        .filter(|d| d.is_finite())
        .unwrap_or(DEFAULT_DENSITY)
        .clamp(0.0, 1.0)
}

fn random_cell(rng: &mut StdRng) -> Point {
    Point::new(rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_clamped_and_finite() {
        assert_eq!(density_arg(Some("0.45")), 0.45);
        assert_eq!(density_arg(Some("7")), 1.0);
        assert_eq!(density_arg(Some("-1")), 0.0);
        assert_eq!(density_arg(Some("nan")), DEFAULT_DENSITY);
        assert_eq!(density_arg(Some("inf")), DEFAULT_DENSITY);
        assert_eq!(density_arg(Some("dense")), DEFAULT_DENSITY);
        assert_eq!(density_arg(None), DEFAULT_DENSITY);
    }
}
