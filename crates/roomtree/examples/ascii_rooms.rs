//! Generate one layout and print it as ASCII room outlines.
//!
//! Purpose
//! - Give a quick visual sanity check of what the default limits produce on
//!   a terminal-sized map, plus a couple of summary numbers.
//!
//! Run with `cargo run --example ascii_rooms [seed]`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use roomtree::{PartitionTree, Rect};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("seed must be a u64"))
        .unwrap_or(7);

    let bounds = Rect::new(0, 0, 78, 22);
    let mut tree = PartitionTree::with_defaults(bounds);
    let mut rooms = Vec::new();
    tree.generate(&mut StdRng::seed_from_u64(seed), |r| rooms.push(r));

    let width = bounds.width() as usize;
    let height = bounds.height() as usize;
    let mut grid = vec![b'.'; width * height];
    for room in &rooms {
        for x in room.left..room.right {
            grid[room.top as usize * width + x as usize] = b'#';
            grid[(room.bottom - 1) as usize * width + x as usize] = b'#';
        }
        for y in room.top..room.bottom {
            grid[y as usize * width + room.left as usize] = b'#';
            grid[y as usize * width + (room.right - 1) as usize] = b'#';
        }
    }
    for row in grid.chunks(width) {
        println!("{}", std::str::from_utf8(row).expect("ascii grid"));
    }

    let min_edge = rooms.iter().map(Rect::longest_edge).min().unwrap_or(0);
    let max_edge = rooms.iter().map(Rect::longest_edge).max().unwrap_or(0);
    println!(
        "seed={seed} nodes={} rooms={} min_longest_edge={min_edge} max_longest_edge={max_edge}",
        tree.len(),
        rooms.len()
    );
}
