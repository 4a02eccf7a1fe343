//! Pathfinding on hand-drawn maps, including an unreachable target.
//!
//! Run: RUST_LOG=debug cargo run --bin walkgrid-demo

use walkgrid_core::Vec3;
use walkgrid_demos::{AsciiMap, Navigator, render};
use walkgrid_paths::{PathSearch, SearchConfig};

const SCENARIOS: &[(&str, &str)] = &[
    (
        "detour",
        "
S.........
..........
######.###
..........
.........T
",
    ),
    (
        "walled off",
        "
S....#....
.....#....
.....#..T.
.....#....
.....#....
",
    ),
    (
        "enclosed target",
        "
S.........
..........
....###...
....#T#...
....###...
",
    ),
];

fn main() {
    env_logger::init();

    for (name, text) in SCENARIOS {
        if let Err(e) = run(name, text) {
            eprintln!("{name}: {e}");
            std::process::exit(1);
        }
    }
}

fn run(name: &str, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let map = AsciiMap::parse(text)?;
    let grid = map.build_grid(1.0, Vec3::ZERO)?;
    let (Some(start), Some(target)) = (map.start(), map.target()) else {
        return Err("map needs an S and a T".into());
    };

    let mut search = PathSearch::for_grid(&grid, SearchConfig::default());
    let start_world = grid.node(start).map(|n| n.world_position()).unwrap_or(Vec3::ZERO);
    let target_world = grid.node(target).map(|n| n.world_position()).unwrap_or(Vec3::ZERO);

    let mut nav = Navigator::new(start_world, 3.0);
    let path = nav.travel_to(&mut search, &grid, target_world)?;

    println!("== {name} ==");
    print!("{}", render(&grid, search.last_search(), start, target));
    match search.last_search().fallback.as_ref() {
        Some(fb) => println!(
            "target {} unreachable; {} candidates, heading to {}",
            fb.requested,
            fb.candidates.len(),
            fb.substitute
        ),
        None => println!("reached {target}"),
    }
    println!(
        "{} steps, cost {:.2}, {} expansions",
        path.len(),
        path.cost(),
        search.last_search().expansions
    );

    let mut seconds = 0.0;
    while !nav.update(0.1) {
        seconds += 0.1;
    }
    println!("walked to {} in {:.1}s\n", nav.position(), seconds);
    Ok(())
}
