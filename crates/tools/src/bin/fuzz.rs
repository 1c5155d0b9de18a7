use anyhow::Result;
use clap::Parser;
use dungeon_core::{Dungeon, DungeonConfig, Point, generate_dungeon};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Fuzzes the generator across random valid configurations and asserts the
/// layout invariants on every result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, min: i64, max: i64) -> i64 {
    min + (rng.next_u64() % (max - min + 1) as u64) as i64
}

fn random_config(rng: &mut ChaCha8Rng) -> DungeonConfig {
    let room_size_min = pick(rng, 2, 6) as i32;
    let room_size_max = pick(rng, i64::from(room_size_min), 8) as i32;
    let grid_side = pick(rng, i64::from(room_size_max) * 4, 60) as i32;
    DungeonConfig {
        seed: pick(rng, 0, 9_999_999),
        room_size_min,
        room_size_max,
        grid_size: Point::new(grid_side, grid_side),
        room_pool_size: pick(rng, 1, 60) as usize,
        minimal_directional_room_distance: pick(rng, 1, 10) as i32,
        minimal_room_distance: pick(rng, 0, 6) as i32,
        additional_edges: pick(rng, 0, 8) as usize,
        min_door_dist_to_corner: pick(rng, 0, i64::from(room_size_min) - 2) as i32,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Fuzzing {} configurations from seed {}...", args.runs, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let config = random_config(&mut rng);
        let dungeon = generate_dungeon(&config)
            .map_err(|error| anyhow::anyhow!("run {run}: config rejected: {error}"))?;

        assert_invariants(run, &config, &dungeon);

        let replay = generate_dungeon(&config)
            .map_err(|error| anyhow::anyhow!("run {run}: replay rejected: {error}"))?;
        assert_eq!(
            dungeon.fingerprint(),
            replay.fingerprint(),
            "run {run}: regeneration diverged for {config:?}"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn assert_invariants(run: u32, config: &DungeonConfig, dungeon: &Dungeon) {
    assert!(!dungeon.rooms.is_empty(), "run {run}: no rooms placed for {config:?}");
    assert!(dungeon.rooms.len() <= config.room_pool_size);

    for room in &dungeon.rooms {
        assert!(
            room.size.x >= config.room_size_min
                && room.size.x <= config.room_size_max
                && room.size.y >= config.room_size_min
                && room.size.y <= config.room_size_max,
            "run {run}: room size {:?} out of bounds for {config:?}",
            room.size
        );
        assert!(
            room.pos.x >= 0
                && room.pos.y >= 0
                && room.pos.x + room.size.x < config.grid_size.x
                && room.pos.y + room.size.y < config.grid_size.y,
            "run {run}: room {room:?} leaks off the grid"
        );
    }

    for (i, a) in dungeon.rooms.iter().enumerate() {
        for b in dungeon.rooms.iter().skip(i + 1) {
            let disjoint = a.pos.x + a.size.x <= b.pos.x
                || b.pos.x + b.size.x <= a.pos.x
                || a.pos.y + a.size.y <= b.pos.y
                || b.pos.y + b.size.y <= a.pos.y;
            assert!(disjoint, "run {run}: rooms overlap: {a:?} vs {b:?}");
        }
    }
}
