use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roomtree::{AspectLimit, Params, PartitionTree, Rect};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod layout;

#[derive(Parser)]
#[command(name = "roomtree")]
#[command(about = "Level layout generation tools")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, clap::Args)]
struct MapArgs {
    /// Map width in tiles
    #[arg(long, default_value_t = 100)]
    width: i32,
    /// Map height in tiles
    #[arg(long, default_value_t = 80)]
    height: i32,
    /// Seed for the deterministic random stream
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Minimum room width
    #[arg(long, default_value_t = 5)]
    min_width: i32,
    /// Minimum room height
    #[arg(long, default_value_t = 5)]
    min_height: i32,
    /// Edge length beyond which a split is mandatory
    #[arg(long, default_value_t = 25)]
    max_edge: i32,
    /// Split-attempt probability floor for the smallest rooms
    #[arg(long, default_value_t = 0.1)]
    min_split_chance: f64,
    /// Aspect limit as NUM:DEN, e.g. 16:9
    #[arg(long, default_value = "16:9", value_parser = parse_aspect)]
    aspect: AspectLimit,
}

#[derive(Subcommand)]
enum Action {
    /// Generate one layout and write it as a JSON document
    Generate {
        #[command(flatten)]
        map: MapArgs,
        #[arg(long)]
        out: String,
    },
    /// Print one layout as ASCII room outlines
    Render {
        #[command(flatten)]
        map: MapArgs,
    },
    /// Summarize room counts and edge lengths over a range of seeds
    Stats {
        #[command(flatten)]
        map: MapArgs,
        /// How many consecutive seeds to run, starting at --seed
        #[arg(long, default_value_t = 100)]
        runs: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { map, out } => generate(map, out),
        Action::Render { map } => render(map),
        Action::Stats { map, runs } => stats(map, runs),
    }
}

fn parse_aspect(raw: &str) -> Result<AspectLimit, String> {
    let (num, den) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NUM:DEN, got {raw:?}"))?;
    let num: i32 = num.trim().parse().map_err(|e| format!("bad numerator: {e}"))?;
    let den: i32 = den.trim().parse().map_err(|e| format!("bad denominator: {e}"))?;
    if den < 1 || num < den {
        return Err(format!("aspect must satisfy num >= den >= 1, got {num}:{den}"));
    }
    Ok(AspectLimit::new(num, den))
}

fn build_tree(map: MapArgs) -> PartitionTree {
    let params = Params {
        aspect: map.aspect,
        min_width: map.min_width,
        min_height: map.min_height,
        max_edge: map.max_edge,
        min_split_chance: map.min_split_chance,
    };
    let mut tree = PartitionTree::new(Rect::new(0, 0, map.width, map.height), params);
    let mut rng = StdRng::seed_from_u64(map.seed);
    tree.generate(&mut rng, |_| {});
    tree
}

fn generate(map: MapArgs, out: String) -> Result<()> {
    let tree = build_tree(map);
    tracing::info!(
        width = map.width,
        height = map.height,
        seed = map.seed,
        nodes = tree.len(),
        rooms = tree.leaves().count(),
        "generate"
    );
    let doc = layout::document(&tree, map.seed);
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)?;
    Ok(())
}

fn render(map: MapArgs) -> Result<()> {
    let tree = build_tree(map);
    print!("{}", layout::ascii(&tree));
    tracing::info!(seed = map.seed, rooms = tree.leaves().count(), "render");
    Ok(())
}

fn stats(map: MapArgs, runs: u64) -> Result<()> {
    let mut room_counts = Vec::with_capacity(runs as usize);
    let mut min_edge = i32::MAX;
    let mut max_edge = 0;
    for offset in 0..runs {
        let tree = build_tree(MapArgs {
            seed: map.seed.wrapping_add(offset),
            ..map
        });
        let mut rooms = 0u64;
        for leaf in tree.leaves() {
            rooms += 1;
            min_edge = min_edge.min(leaf.width()).min(leaf.height());
            max_edge = max_edge.max(leaf.width()).max(leaf.height());
        }
        room_counts.push(rooms);
    }
    let total: u64 = room_counts.iter().sum();
    let report = serde_json::json!({
        "runs": runs,
        "first_seed": map.seed,
        "rooms_min": room_counts.iter().min(),
        "rooms_max": room_counts.iter().max(),
        "rooms_mean": total as f64 / runs.max(1) as f64,
        "leaf_edge_min": min_edge,
        "leaf_edge_max": max_edge,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
