//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hoops_stats::{
    cli::{Commands, HoopsStats},
    commands::{
        audit::handle_audit,
        compare::handle_compare,
        highs::handle_highs,
        import::{handle_import, ImportParams},
        leaders::{handle_leaders, LeadersParams},
        player::handle_player,
        resolve::handle_resolve,
        schedule::handle_schedule,
        standings::handle_standings,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = HoopsStats::parse();

    match app.command {
        Commands::Import {
            teams,
            players,
            games,
            game_rows,
            averages,
            league_id,
            replace,
        } => handle_import(ImportParams {
            teams,
            players,
            games,
            game_rows,
            averages,
            league_id,
            replace,
        })?,

        Commands::Standings { common } => handle_standings(common)?,

        Commands::Leaders {
            common,
            category,
            top,
            min_games,
            min_attempts,
        } => handle_leaders(LeadersParams {
            common,
            category,
            top,
            min_games,
            min_attempts,
        })?,

        Commands::Highs {
            common,
            category,
            top,
        } => handle_highs(common, category, top)?,

        Commands::Audit { common } => handle_audit(common)?,

        Commands::Schedule { common, upcoming } => handle_schedule(common, upcoming)?,

        Commands::Player {
            common,
            name,
            games,
        } => handle_player(common, &name, games)?,

        Commands::Compare {
            common,
            left,
            right,
            categories,
        } => handle_compare(common, &left, &right, categories)?,

        Commands::Resolve {
            common,
            name,
            fuzzy,
        } => handle_resolve(common, &name, fuzzy)?,
    }

    Ok(())
}
