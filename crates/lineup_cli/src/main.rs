//! Lineup Studio CLI
//!
//! Thin front end over `lineup_core`: create and edit lineups from the
//! terminal against the same JSON store the editor views use.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};

use lineup_core::{
    sport, JsonFileStore, PlayerPatch, RandomGenerator, SaveStatus, SportId, StaticSuggester,
    SuggestedPlayer, TeamSession, TeamStore, SPORTS,
};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Edit sports team lineups from the terminal", long_about = None)]
struct Cli {
    /// Path of the team collection JSON file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored teams, most recently edited first
    List,

    /// Show the sports catalog and their formations
    Catalog,

    /// Create a new team
    Create {
        /// Sport key: soccer, basketball, hockey, football, baseball
        #[arg(long)]
        sport: String,

        /// Team name (defaults to "Untitled <sport> Team")
        #[arg(long)]
        name: Option<String>,
    },

    /// Show one team's lineup and bench
    Show {
        #[arg(long)]
        team: String,
    },

    /// Rename a team
    Rename {
        #[arg(long)]
        team: String,

        #[arg(long)]
        name: String,
    },

    /// Switch a team to another formation of its sport
    Switch {
        #[arg(long)]
        team: String,

        /// Formation index within the sport
        #[arg(long)]
        formation: usize,
    },

    /// Bench a starter, or promote a bench player
    Bench {
        #[arg(long)]
        team: String,

        #[arg(long)]
        player: String,
    },

    /// Fill a slot from the bench or with a generated player
    Fill {
        #[arg(long)]
        team: String,

        /// Slot index in the current formation
        #[arg(long)]
        slot: usize,

        /// Bench player to seat; omit to generate a new player
        #[arg(long)]
        from_bench: Option<String>,
    },

    /// Add a new player straight to the bench
    AddSub {
        #[arg(long)]
        team: String,
    },

    /// Remove a player from the roster
    Remove {
        #[arg(long)]
        team: String,

        #[arg(long)]
        player: String,
    },

    /// Edit a player's free-text fields
    Edit {
        #[arg(long)]
        team: String,

        #[arg(long)]
        player: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        number: Option<String>,

        #[arg(long)]
        secondary: Option<String>,

        #[arg(long)]
        tertiary: Option<String>,
    },

    /// Add suggested players to the bench
    Suggest {
        #[arg(long)]
        team: String,

        /// How many players to request
        #[arg(long, default_value = "3")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let store = JsonFileStore::new(cli.store.clone().unwrap_or_else(JsonFileStore::default_path));

    match cli.command {
        Commands::List => list(&store),
        Commands::Catalog => catalog(),
        Commands::Create { sport, name } => create(store, &sport, name.as_deref()),
        Commands::Show { team } => show(store, &team),
        Commands::Rename { team, name } => {
            with_session(store, &team, |session| session.rename(&name))
        }
        Commands::Switch { team, formation } => switch(store, &team, formation),
        Commands::Bench { team, player } => {
            with_session(store, &team, |session| session.toggle_bench(&player))
        }
        Commands::Fill { team, slot, from_bench } => {
            with_session(store, &team, |session| match from_bench {
                Some(player) => session.fill_slot_from_bench(slot, &player),
                None => session.fill_slot_with_new(slot),
            })
        }
        Commands::AddSub { team } => with_session(store, &team, |session| session.add_bench_player()),
        Commands::Remove { team, player } => {
            with_session(store, &team, |session| session.remove_player(&player))
        }
        Commands::Edit { team, player, name, number, secondary, tertiary } => {
            let patch = PlayerPatch {
                name,
                number,
                secondary_position: secondary,
                tertiary_position: tertiary,
            };
            with_session(store, &team, |session| session.update_player(&player, &patch))
        }
        Commands::Suggest { team, count } => suggest(store, &team, count),
    }
}

fn open_session(store: JsonFileStore, team_id: &str) -> Result<TeamSession> {
    TeamSession::open(Box::new(store), Box::new(RandomGenerator::new()), team_id)
        .map_err(|err| anyhow!("{}", err))
}

fn with_session(
    store: JsonFileStore,
    team_id: &str,
    edit: impl FnOnce(&mut TeamSession),
) -> Result<()> {
    let mut session = open_session(store, team_id)?;
    edit(&mut session);
    print_team(&session);
    Ok(())
}

fn list(store: &dyn TeamStore) -> Result<()> {
    let teams = TeamSession::list_teams(store);
    if teams.is_empty() {
        println!("No teams yet. Try `lineup create --sport soccer`.");
        return Ok(());
    }
    for team in teams {
        let starters = team.starters().count();
        let bench = team.bench().count();
        println!(
            "{}  {:<24} {:<12} {} starters, {} on bench",
            team.id,
            team.name,
            sport(team.sport_id).name,
            starters,
            bench
        );
    }
    Ok(())
}

fn catalog() -> Result<()> {
    for sport in SPORTS {
        println!("{} ({})", sport.name, sport.id.key());
        for (idx, formation) in sport.formations.iter().enumerate() {
            let labels: Vec<_> = formation.slots.iter().map(|s| s.label).collect();
            println!("  [{}] {:<20} {}", idx, formation.name, labels.join(" "));
        }
    }
    Ok(())
}

fn create(store: JsonFileStore, sport_key: &str, name: Option<&str>) -> Result<()> {
    let Some(sport_id) = SportId::parse(sport_key) else {
        bail!(
            "unknown sport \"{}\" (expected one of: {})",
            sport_key,
            SportId::all().map(|id| id.key()).join(", ")
        );
    };

    let session = TeamSession::create(
        Box::new(store),
        Box::new(RandomGenerator::new()),
        sport_id,
        name,
    );
    println!("Created {} ({})", session.team().name, session.team().id);
    print_team(&session);
    Ok(())
}

fn show(store: JsonFileStore, team_id: &str) -> Result<()> {
    let session = open_session(store, team_id)?;
    print_team(&session);
    Ok(())
}

fn switch(store: JsonFileStore, team_id: &str, formation: usize) -> Result<()> {
    let mut session = open_session(store, team_id)?;
    session.switch_formation(formation).map_err(|err| anyhow!("{}", err))?;
    print_team(&session);
    Ok(())
}

fn suggest(store: JsonFileStore, team_id: &str, count: usize) -> Result<()> {
    let mut session = open_session(store, team_id)?;

    #[cfg(feature = "http")]
    let added = match lineup_core::HttpSuggester::from_env() {
        Some(suggester) => session.populate_from_suggestions(&suggester, count),
        None => fallback_suggestions(&mut session, count),
    };
    #[cfg(not(feature = "http"))]
    let added = fallback_suggestions(&mut session, count);

    if added == 0 {
        println!("No suggestions available.");
    } else {
        println!("Added {} suggested players to the bench.", added);
    }
    print_team(&session);
    Ok(())
}

// Offline fallback so the command still works without a configured
// endpoint.
fn fallback_suggestions(session: &mut TeamSession, count: usize) -> usize {
    let canned: Vec<SuggestedPlayer> = (0..count)
        .map(|i| SuggestedPlayer {
            name: format!("Prospect {}", i + 1),
            position: "SUB".to_string(),
            number: (i % 99 + 1).to_string(),
        })
        .collect();
    session.populate_from_suggestions(&StaticSuggester::new(canned), count)
}

fn print_team(session: &TeamSession) {
    let team = session.team();
    let formation = session.formation();
    let by_slot = session.starters_by_slot();

    let status = match session.save_status() {
        SaveStatus::Saved => "saved",
        SaveStatus::Saving => "saving...",
    };
    println!();
    println!("{} | {} / {} [{}]", team.name, sport(team.sport_id).name, formation.name, status);

    for (idx, slot) in formation.slots.iter().enumerate() {
        match by_slot.get(&idx) {
            Some(player) => println!(
                "  {:>2} {:<4} #{:<3} {} ({})",
                idx, slot.label, player.number, player.name, player.id
            ),
            None => println!("  {:>2} {:<4} (vacant)", idx, slot.label),
        }
    }

    let bench: Vec<_> = team.bench().collect();
    if !bench.is_empty() {
        println!("  bench:");
        for player in bench {
            println!("     #{:<3} {} ({})", player.number, player.name, player.id);
        }
    }
}
