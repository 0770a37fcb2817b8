use anyhow::{Context, Result, bail};
use wearblock_engine::random::SeededRandom;
use wearblock_engine::world::World;
use wearblock_engine::world::block::BlockState;
use wearblock_engine::world::chunk::{Chunk, SECTION_SIZE};
use wearblock_engine::world::position::{BlockPos, ChunkPos, LocalBlockPos};
use wearblock_server::block;
use wearblock_server::blocks::anvil::{self, Anvil, DamageOutcome};
use wearblock_server::config::DemoConfig;
use wearblock_server::level::Level;
use wearblock_server::placement::BlockTransaction;
use wearblock_server::player::PlayerSession;

/// Top solid layer of the generated world.
const SURFACE_Y: i64 = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Place an anvil as a player, open it, then keep using it until it breaks
/// or the use budget runs out.
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = DemoConfig::from_args(&args)?;
    tracing::debug!("Config: {:?}", config);

    let world = World::new();
    generate_flat_world(&world, config.world_radius);
    tracing::info!("World ready: {} chunks loaded", world.chunk_count());

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            SeededRandom::new(seed)
        }
        None => SeededRandom::from_entropy(),
    };

    let mut level = Level::new(&world);
    let mut player = PlayerSession::new("demo", config.placer_yaw);
    let pos = BlockPos::new(8, SURFACE_Y + 1, 8);

    let mut item = Anvil::from_item_meta(config.item_meta).context("anvil item data")?;
    let mut tx = BlockTransaction::new();
    item.place(&mut tx, pos, Some(&player));
    if !tx.apply(&mut level) {
        bail!("could not place an anvil at ({}, {}, {})", pos.x, pos.y, pos.z);
    }
    tracing::info!(
        "Placed anvil at ({}, {}, {}) facing {:?} ({:?}), collision {:?}",
        pos.x,
        pos.y,
        pos.z,
        item.facing(),
        item.damage(),
        item.collision_box()
    );

    item.on_interact(pos, Some(&mut player));
    tracing::info!("{} has {:?} open", player.name, player.current_window());

    let mut uses = 0;
    let mut worn = 0;
    while uses < config.uses {
        uses += 1;
        match anvil::use_anvil_at(&mut level, pos, &mut rng)? {
            DamageOutcome::Spared => {}
            DamageOutcome::Damaged(wear) => {
                worn += 1;
                tracing::info!("Use {}: anvil worn to {:?}", uses, wear);
            }
            DamageOutcome::Destroyed => {
                tracing::info!("Use {}: anvil broke", uses);
                player.close_window();
                break;
            }
            DamageOutcome::Stale => {
                tracing::warn!("Use {}: no anvil left at the position", uses);
                break;
            }
        }
    }

    let events = level.take_events();
    tracing::info!(
        "{} uses, {} wear steps, {} world events; block now {}",
        uses,
        worn,
        events.len(),
        block::name(world.get_block(pos).id())
    );

    if config.emit_json {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
    }
    Ok(())
}

/// Bedrock at y=0, stone y=1..=3, dirt at y=4.
fn generate_flat_world(world: &World, chunk_radius: i32) {
    let bedrock = BlockState::from(block::BEDROCK);
    let stone = BlockState::from(block::STONE);
    let dirt = BlockState::from(block::DIRT);

    for cx in -chunk_radius..chunk_radius {
        for cz in -chunk_radius..chunk_radius {
            let mut chunk = Chunk::new();
            for x in 0..SECTION_SIZE as u8 {
                for z in 0..SECTION_SIZE as u8 {
                    chunk.set_block(LocalBlockPos { x, y: 0, z }, bedrock);
                    for y in 1..SURFACE_Y {
                        chunk.set_block(LocalBlockPos { x, y, z }, stone);
                    }
                    chunk.set_block(LocalBlockPos { x, y: SURFACE_Y, z }, dirt);
                }
            }
            world.insert_chunk(ChunkPos::new(cx, cz), chunk);
        }
    }
}
