//! # Skypet Command Line
//!
//! Drives a player's session from the terminal. Player state is kept in a
//! JSON save file between invocations.

use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use skypet::{
    config, DrawRequest, EquipSlot, GameSettings, ItemId, PlayerState, Session, SkypetError,
    SkypetResult, WeatherTag, WeightedItemSelector,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Command line arguments for Skypet.
#[derive(Parser, Debug)]
#[command(name = "skypet")]
#[command(about = "A weather-driven virtual pet")]
#[command(version)]
struct Args {
    /// Player save file
    #[arg(long, default_value = "skypet-save.json")]
    state: PathBuf,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every catalog item
    Catalog,
    /// Show draw odds under a weather tag
    Odds {
        #[arg(short, long)]
        weather: Option<String>,
    },
    /// Run many draws without touching the save and report frequencies
    Simulate {
        #[arg(short, long)]
        weather: Option<String>,
        #[arg(short, long, default_value_t = 10_000)]
        trials: u32,
    },
    /// Record steps walked
    Walk {
        #[arg(long)]
        steps: u64,
    },
    /// Spend walks on random items
    Draw {
        #[arg(short, long)]
        weather: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// List recipes and whether they can be crafted now
    Recipes,
    /// Craft a recipe
    Craft { recipe: String },
    /// Put an item on the pet
    Equip { item: u32 },
    /// Take an item off the pet
    Unequip { slot: String },
    /// Show the pet's mood
    Mood {
        #[arg(short, long)]
        weather: Option<String>,
        #[arg(long)]
        hour: u8,
    },
    /// Show walks, inventory and outfit
    Status,
}

fn main() -> SkypetResult<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }

    initialize_logging(&settings.log_level);
    info!("Starting Skypet v{}", skypet::VERSION);

    if let Err(e) = run(&args, settings) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes `env_logger`; `RUST_LOG` takes precedence over the given level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn run(args: &Args, settings: GameSettings) -> SkypetResult<()> {
    let player = PlayerState::load_or_new(&args.state, settings.starting_walks)?;
    let mut session = Session::from_settings(settings, Some(player))?;

    let modified = match &args.command {
        Command::Catalog => {
            print_catalog(&session);
            false
        }
        Command::Odds { weather } => {
            print_odds(&session, weather.as_deref());
            false
        }
        Command::Simulate { weather, trials } => {
            simulate(&session, weather.as_deref(), *trials)?;
            false
        }
        Command::Walk { steps } => {
            let earned = session.record_steps(*steps)?;
            println!(
                "Earned {} walks ({} walks total)",
                earned,
                session.player().inventory.walks()
            );
            true
        }
        Command::Draw { weather, count } => {
            draw(&mut session, weather.as_deref(), *count)?;
            true
        }
        Command::Recipes => {
            print_recipes(&session);
            false
        }
        Command::Craft { recipe } => {
            let quantity = session.craft(recipe)?;
            println!("Crafted {} (you now have {})", recipe, quantity);
            true
        }
        Command::Equip { item } => {
            let replaced = session.equip(ItemId(*item))?;
            let name = item_name(&session, ItemId(*item));
            match replaced {
                Some(old) => println!("Swapped {} for {}", item_name(&session, old), name),
                None => println!("Equipped {}", name),
            }
            true
        }
        Command::Unequip { slot } => {
            let slot = EquipSlot::from_name(slot)
                .ok_or_else(|| SkypetError::InvalidInput(format!("unknown slot '{slot}'")))?;
            match session.unequip(slot) {
                Some(id) => println!("Removed {}", item_name(&session, id)),
                None => println!("Nothing worn in {}", slot),
            }
            true
        }
        Command::Mood { weather, hour } => {
            let mood = session.mood(weather.as_deref(), *hour)?;
            println!("{} feels {}", session.player().pet.name, mood);
            false
        }
        Command::Status => {
            print_status(&session);
            false
        }
    };

    if modified {
        session.into_player().save(&args.state)?;
        info!("Saved player state to {}", args.state.display());
    }
    Ok(())
}

fn item_name(session: &Session, id: ItemId) -> String {
    session
        .catalog()
        .get(id)
        .map_or_else(|| id.to_string(), |item| item.name.clone())
}

fn print_catalog(session: &Session) {
    for item in session.catalog() {
        println!(
            "{:>4}  {:<22} {:<10} {:<13} {}",
            item.id.0,
            item.name,
            item.rarity,
            item.affinity.map_or("-", |w| w.as_str()),
            item.category.map_or("material", |c| c.as_str())
        );
    }
}

fn print_odds(session: &Session, weather: Option<&str>) {
    let mut odds = session.odds(weather);
    odds.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    for entry in odds {
        println!(
            "{:<22} {:<10} weight {:>7.2}  {:>6.2}%",
            entry.item.name,
            entry.item.rarity,
            entry.weight,
            entry.probability * 100.0
        );
    }
}

fn simulate(session: &Session, weather: Option<&str>, trials: u32) -> SkypetResult<()> {
    let tag = weather.and_then(WeatherTag::parse);
    let selector = WeightedItemSelector::new(session.catalog());
    let mut rng = match session.settings().seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut counts: BTreeMap<ItemId, u32> = BTreeMap::new();
    for _ in 0..trials {
        let item = selector.draw(tag.as_ref(), &mut rng)?;
        *counts.entry(item.id).or_insert(0) += 1;
    }

    for item in session.catalog() {
        let count = counts.get(&item.id).copied().unwrap_or(0);
        println!(
            "{:<22} {:<10} {:>8}  {:>6.2}%",
            item.name,
            item.rarity,
            count,
            f64::from(count) * 100.0 / f64::from(trials.max(1))
        );
    }
    Ok(())
}

fn draw(session: &mut Session, weather: Option<&str>, count: u32) -> SkypetResult<()> {
    if count == 0 || count > config::MAX_DRAWS_PER_REQUEST {
        return Err(SkypetError::InvalidInput(format!(
            "count must be between 1 and {}",
            config::MAX_DRAWS_PER_REQUEST
        )));
    }

    let request = DrawRequest::new(weather);
    for _ in 0..count {
        let response = session.draw_item(&request)?;
        println!(
            "You got {} [{}] (x{}) - {} walks left",
            response.item.name, response.item.rarity, response.quantity, response.walks_remaining
        );
    }
    Ok(())
}

fn print_recipes(session: &Session) {
    let inventory = &session.player().inventory;
    for recipe in session.recipes().recipes() {
        let inputs = recipe
            .inputs
            .iter()
            .map(|i| format!("{} x{}", item_name(session, i.item), i.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        let marker = if recipe.can_craft(inventory) { "*" } else { " " };
        println!("{} {:<16} {} <- {}", marker, recipe.id, recipe.name, inputs);
    }
}

fn print_status(session: &Session) {
    let player = session.player();
    println!("{} ({})", player.pet.name, player.pet.id);
    println!("Walks: {}", player.inventory.walks());

    println!("Wearing:");
    for slot in EquipSlot::ALL {
        let worn = player
            .pet
            .equipped_in(slot)
            .map_or_else(|| "-".to_string(), |id| item_name(session, id));
        println!("  {:<10} {}", slot, worn);
    }

    println!("Inventory:");
    for (id, quantity) in player.inventory.items() {
        println!("  {:<22} x{}", item_name(session, id), quantity);
    }

    let stats = &player.statistics;
    println!(
        "Draws: {} ({} legendary), crafted: {}, steps: {}",
        stats.draws, stats.legendary_draws, stats.items_crafted, stats.steps_recorded
    );
}
