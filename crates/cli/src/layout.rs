//! Layout documents and the ASCII renderer for generated trees.

use roomtree::{PartitionTree, Rect};
use serde::Serialize;
use serde_json::{json, Value};

/// One leaf rectangle as it appears in the JSON document.
#[derive(Serialize)]
pub struct RoomRecord {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl From<Rect> for RoomRecord {
    fn from(r: Rect) -> Self {
        Self {
            left: r.left,
            top: r.top,
            right: r.right,
            bottom: r.bottom,
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Full layout document: bounds, the limits used, and every room.
pub fn document(tree: &PartitionTree, seed: u64) -> Value {
    let params = tree.params();
    let bounds = tree.bounds();
    let rooms: Vec<RoomRecord> = tree.leaves().map(RoomRecord::from).collect();
    json!({
        "seed": seed,
        "bounds": RoomRecord::from(bounds),
        "params": {
            "aspect": format!("{}:{}", params.aspect.num(), params.aspect.den()),
            "min_width": params.min_width,
            "min_height": params.min_height,
            "max_edge": params.max_edge,
            "min_split_chance": params.min_split_chance,
        },
        "nodes": tree.len(),
        "rooms": rooms,
    })
}

/// Render room outlines as `#` on a `.` background, one string per map.
pub fn ascii(tree: &PartitionTree) -> String {
    let bounds = tree.bounds();
    let width = bounds.width() as usize;
    let height = bounds.height() as usize;
    let mut grid = vec![b'.'; width * height];
    let index = |x: i32, y: i32| (y - bounds.top) as usize * width + (x - bounds.left) as usize;
    for room in tree.leaves() {
        for x in room.left..room.right {
            grid[index(x, room.top)] = b'#';
            grid[index(x, room.bottom - 1)] = b'#';
        }
        for y in room.top..room.bottom {
            grid[index(room.left, y)] = b'#';
            grid[index(room.right - 1, y)] = b'#';
        }
    }
    let mut out = String::with_capacity((width + 1) * height);
    for row in grid.chunks(width) {
        out.push_str(std::str::from_utf8(row).expect("ascii grid"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use roomtree::Rect;
    use std::fs;
    use tempfile::tempdir;

    fn sample_tree(seed: u64) -> PartitionTree {
        let mut tree = PartitionTree::with_defaults(Rect::new(0, 0, 60, 40));
        tree.generate(&mut StdRng::seed_from_u64(seed), |_| {});
        tree
    }

    #[test]
    fn document_lists_every_room() {
        let tree = sample_tree(3);
        let doc = document(&tree, 3);
        assert_eq!(doc["seed"], 3);
        assert_eq!(
            doc["rooms"].as_array().unwrap().len(),
            tree.leaves().count()
        );
        assert_eq!(doc["params"]["aspect"], "16:9");
    }

    #[test]
    fn document_round_trips_through_a_file() {
        let tree = sample_tree(11);
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, serde_json::to_vec_pretty(&document(&tree, 11)).unwrap()).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["nodes"], tree.len() as u64);
        let first = &parsed["rooms"][0];
        assert_eq!(
            first["width"].as_i64().unwrap(),
            first["right"].as_i64().unwrap() - first["left"].as_i64().unwrap()
        );
    }

    #[test]
    fn ascii_has_one_line_per_row() {
        let tree = sample_tree(5);
        let art = ascii(&tree);
        assert_eq!(art.lines().count(), 40);
        assert!(art.lines().all(|line| line.len() == 60));
        assert!(art.contains('#'));
    }
}
