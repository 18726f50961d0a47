//! Import command implementation

use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    storage::{ImportSummary, LeagueData, StatsDatabase},
    LeagueId, Result,
};

use super::resolve_league_id;

/// Parameters for the import command
#[derive(Debug, Clone, Default)]
pub struct ImportParams {
    pub teams: Option<PathBuf>,
    pub players: Option<PathBuf>,
    pub games: Option<PathBuf>,
    pub game_rows: Option<PathBuf>,
    pub averages: Option<PathBuf>,
    pub league_id: Option<LeagueId>,
    pub replace: bool,
}

/// Handle the import command against the default database
pub fn handle_import(params: ImportParams) -> Result<()> {
    let mut db = StatsDatabase::new()?;
    let summary = import_into(&mut db, &params)?;

    println!(
        "✓ Imported {} teams, {} players, {} games, {} game rows, {} averages",
        summary.teams, summary.players, summary.games, summary.game_rows, summary.averages
    );
    Ok(())
}

/// Read the files named in `params` and write their rows to `db`
pub fn import_into(db: &mut StatsDatabase, params: &ImportParams) -> Result<ImportSummary> {
    // Replacing needs a league; a plain import only filters when one is given.
    let league = if params.replace {
        Some(resolve_league_id(params.league_id)?)
    } else {
        params.league_id
    };

    let mut data = LeagueData {
        teams: read_rows(params.teams.as_deref())?,
        players: read_rows(params.players.as_deref())?,
        games: read_rows(params.games.as_deref())?,
        game_rows: read_rows(params.game_rows.as_deref())?,
        averages: read_rows(params.averages.as_deref())?,
    };

    if let Some(league) = league {
        data.retain_league(league);
        if params.replace {
            let deleted = db.clear_league(league)?;
            info!(%league, deleted, "replacing stored league rows");
        }
    }

    if data.is_empty() {
        warn!("nothing to import");
    }
    Ok(db.import(&data)?)
}

/// A JSON array of rows, or nothing when no file was given
fn read_rows<T: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<T>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let reader = BufReader::new(File::open(path)?);
    let rows: Vec<T> = serde_json::from_reader(reader)?;
    info!(path = %path.display(), rows = rows.len(), "read rows");
    Ok(rows)
}
