use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{Corridor, Dungeon, DungeonConfig, Point, generate_dungeon};

/// Generates one dungeon layout and prints it for inspection.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; -1 picks a fresh one per run
    #[arg(long, default_value_t = 39_129)]
    seed: i64,
    #[arg(long, default_value_t = 3)]
    room_size_min: i32,
    #[arg(long, default_value_t = 6)]
    room_size_max: i32,
    #[arg(long, default_value_t = 50)]
    grid_width: i32,
    #[arg(long, default_value_t = 50)]
    grid_height: i32,
    #[arg(long, default_value_t = 50)]
    room_pool_size: usize,
    #[arg(long, default_value_t = 7)]
    minimal_directional_room_distance: i32,
    #[arg(long, default_value_t = 3)]
    minimal_room_distance: i32,
    /// Extra connectivity edges reinjected on top of the spanning tree
    #[arg(long, default_value_t = 3)]
    additional_edges: usize,
    #[arg(long, default_value_t = 1)]
    min_door_dist_to_corner: i32,
    /// Dump the full layout record as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> DungeonConfig {
        DungeonConfig {
            seed: self.seed,
            room_size_min: self.room_size_min,
            room_size_max: self.room_size_max,
            grid_size: Point::new(self.grid_width, self.grid_height),
            room_pool_size: self.room_pool_size,
            minimal_directional_room_distance: self.minimal_directional_room_distance,
            minimal_room_distance: self.minimal_room_distance,
            additional_edges: self.additional_edges,
            min_door_dist_to_corner: self.min_door_dist_to_corner,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let json = args.json;
    let config = args.into_config();

    let dungeon = generate_dungeon(&config).context("configuration rejected")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dungeon).context("serializing layout")?);
        return Ok(());
    }

    print!("{}", render_ascii(&dungeon));
    println!(
        "seed={} rooms={} corridors={} edges={} fingerprint={:016x}",
        dungeon.seed,
        dungeon.rooms.len(),
        dungeon.corridors.len(),
        dungeon.edges.len(),
        dungeon.fingerprint()
    );
    Ok(())
}

fn render_ascii(dungeon: &Dungeon) -> String {
    let size = dungeon.config.grid_size;
    let mut cells = vec![b'.'; (size.x * size.y) as usize];
    let index = |x: i32, y: i32| (y * size.x + x) as usize;

    for corridor in &dungeon.corridors {
        for (x, y) in corridor_span(corridor) {
            if x >= 0 && y >= 0 && x < size.x && y < size.y {
                cells[index(x, y)] = b'+';
            }
        }
    }
    for room in &dungeon.rooms {
        for x in 0..room.size.x {
            for y in 0..room.size.y {
                cells[index(room.pos.x + x, room.pos.y + y)] = b'#';
            }
        }
    }

    let mut out = String::with_capacity((size.x as usize + 1) * size.y as usize);
    for y in 0..size.y {
        for x in 0..size.x {
            out.push(cells[index(x, y)] as char);
        }
        out.push('\n');
    }
    out
}

fn corridor_span(corridor: &Corridor) -> Vec<(i32, i32)> {
    let min_x = corridor.start.x.min(corridor.end.x);
    let max_x = corridor.start.x.max(corridor.end.x);
    let min_y = corridor.start.y.min(corridor.end.y);
    let max_y = corridor.start.y.max(corridor.end.y);

    let mut span = Vec::new();
    for x in min_x..max_x {
        for y in min_y..max_y {
            span.push((x, y));
        }
    }
    span
}
