//! Basic database query operations

use super::{
    models::{average_row_key, game_row_key, ImportSummary, LeagueData},
    schema::StatsDatabase,
};
use crate::cli::types::{GameId, LeagueId, PlayerId, TeamId};
use crate::model::{AverageRow, Game, GameRow, Measure, Player, Team};
use anyhow::Result;
use rusqlite::{params, types::Type, Connection, Row};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

impl StatsDatabase {
    /// Insert or update a team
    pub fn upsert_team(&mut self, team: &Team) -> Result<()> {
        write_team(&self.conn, team)
    }

    /// Insert or update a player
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        write_player(&self.conn, player)
    }

    /// Insert or update a game
    pub fn upsert_game(&mut self, game: &Game) -> Result<()> {
        write_game(&self.conn, game)
    }

    /// Insert or update one box score line
    pub fn upsert_game_row(&mut self, row: &GameRow) -> Result<()> {
        write_game_row(&self.conn, row)
    }

    /// Insert or update a season averages row
    pub fn upsert_average(&mut self, row: &AverageRow) -> Result<()> {
        write_average(&self.conn, row)
    }

    /// Write every row of `data` in one transaction.
    ///
    /// Rows already stored under the same key are updated in place and keep
    /// their original position in load order.
    pub fn import(&mut self, data: &LeagueData) -> Result<ImportSummary> {
        let tx = self.conn.transaction()?;
        for team in &data.teams {
            write_team(&tx, team)?;
        }
        for player in &data.players {
            write_player(&tx, player)?;
        }
        for game in &data.games {
            write_game(&tx, game)?;
        }
        for row in &data.game_rows {
            write_game_row(&tx, row)?;
        }
        for row in &data.averages {
            write_average(&tx, row)?;
        }
        tx.commit()?;

        let summary = ImportSummary {
            teams: data.teams.len(),
            players: data.players.len(),
            games: data.games.len(),
            game_rows: data.game_rows.len(),
            averages: data.averages.len(),
        };
        info!(rows = summary.total(), "import complete");
        Ok(summary)
    }

    /// Delete every row stored for `league`
    pub fn clear_league(&mut self, league: LeagueId) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut deleted = 0;
        for table in ["teams", "players", "games", "game_rows", "averages"] {
            deleted += tx.execute(
                &format!("DELETE FROM {table} WHERE league_id = ?"),
                params![league.as_u32()],
            )?;
        }
        tx.commit()?;
        debug!(%league, deleted, "cleared league");
        Ok(deleted)
    }

    /// Distinct league ids that have any teams or games stored
    pub fn league_ids(&self) -> Result<Vec<LeagueId>> {
        let mut stmt = self.conn.prepare(
            "SELECT league_id FROM teams
             UNION
             SELECT league_id FROM games
             ORDER BY league_id",
        )?;
        let ids = stmt
            .query_map([], |row| Ok(LeagueId::new(row.get(0)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    pub fn load_teams(&self, league: LeagueId) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, team_name, short_name, name_variations, bg_color, text_color
             FROM teams WHERE league_id = ? ORDER BY rowid",
        )?;
        let teams = stmt
            .query_map(params![league.as_u32()], |row| {
                Ok(Team {
                    team_id: TeamId::new(row.get(0)?),
                    league_id: league,
                    team_name: row.get(1)?,
                    short_name: row.get(2)?,
                    name_variations: row.get(3)?,
                    bg_color: row.get(4)?,
                    text_color: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    pub fn load_players(&self, league: LeagueId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, current_team_id, date_of_birth, height, jersey_number
             FROM players WHERE league_id = ? ORDER BY rowid",
        )?;
        let players = stmt
            .query_map(params![league.as_u32()], |row| {
                Ok(Player {
                    player_id: PlayerId::new(row.get(0)?),
                    league_id: league,
                    name: row.get(1)?,
                    current_team_id: row.get::<_, Option<u32>>(2)?.map(TeamId::new),
                    date_of_birth: row.get(3)?,
                    height: optional_json_column::<Measure>(row, 4)?,
                    jersey_number: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    pub fn load_games(&self, league: LeagueId) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, home_team, away_team, home_team_id, away_team_id,
                    home_score, away_score, date, round
             FROM games WHERE league_id = ? ORDER BY rowid",
        )?;
        let games = stmt
            .query_map(params![league.as_u32()], |row| {
                Ok(Game {
                    game_id: GameId::new(row.get::<_, String>(0)?),
                    league_id: league,
                    home_team: row.get(1)?,
                    away_team: row.get(2)?,
                    home_team_id: row.get::<_, Option<u32>>(3)?.map(TeamId::new),
                    away_team_id: row.get::<_, Option<u32>>(4)?.map(TeamId::new),
                    home_score: row.get(5)?,
                    away_score: row.get(6)?,
                    date: row.get(7)?,
                    round: row.get(8)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(games)
    }

    pub fn load_game_rows(&self, league: LeagueId) -> Result<Vec<GameRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, player_id, player_name, team_id, team_name, game_date, stats
             FROM game_rows WHERE league_id = ? ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![league.as_u32()], |row| {
                Ok(GameRow {
                    game_id: GameId::new(row.get::<_, String>(0)?),
                    league_id: league,
                    player_id: row.get::<_, Option<u64>>(1)?.map(PlayerId::new),
                    player_name: row.get(2)?,
                    team_id: row.get::<_, Option<u32>>(3)?.map(TeamId::new),
                    team_name: row.get(4)?,
                    game_date: row.get(5)?,
                    stats: json_column(row, 6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn load_averages(&self, league: LeagueId) -> Result<Vec<AverageRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, player_name, team_name, games_played, stats, ranks
             FROM averages WHERE league_id = ? ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![league.as_u32()], |row| {
                Ok(AverageRow {
                    league_id: league,
                    player_id: row.get::<_, Option<u64>>(0)?.map(PlayerId::new),
                    player_name: row.get(1)?,
                    team_name: row.get(2)?,
                    games_played: row.get(3)?,
                    stats: json_column(row, 4)?,
                    ranks: json_column(row, 5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// All five tables for one league
    pub fn load_league(&self, league: LeagueId) -> Result<LeagueData> {
        let data = LeagueData {
            teams: self.load_teams(league)?,
            players: self.load_players(league)?,
            games: self.load_games(league)?,
            game_rows: self.load_game_rows(league)?,
            averages: self.load_averages(league)?,
        };
        debug!(
            %league,
            teams = data.teams.len(),
            games = data.games.len(),
            game_rows = data.game_rows.len(),
            averages = data.averages.len(),
            "loaded league"
        );
        Ok(data)
    }
}

fn write_team(conn: &Connection, team: &Team) -> Result<()> {
    conn.execute(
        "INSERT INTO teams
         (league_id, team_id, team_name, short_name, name_variations, bg_color, text_color)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(league_id, team_id) DO UPDATE SET
             team_name = excluded.team_name,
             short_name = excluded.short_name,
             name_variations = excluded.name_variations,
             bg_color = excluded.bg_color,
             text_color = excluded.text_color",
        params![
            team.league_id.as_u32(),
            team.team_id.as_u32(),
            team.team_name,
            team.short_name,
            team.name_variations,
            team.bg_color,
            team.text_color
        ],
    )?;
    Ok(())
}

fn write_player(conn: &Connection, player: &Player) -> Result<()> {
    let height = player.height.as_ref().map(serde_json::to_string).transpose()?;
    conn.execute(
        "INSERT INTO players
         (league_id, player_id, name, current_team_id, date_of_birth, height, jersey_number)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(league_id, player_id) DO UPDATE SET
             name = excluded.name,
             current_team_id = excluded.current_team_id,
             date_of_birth = excluded.date_of_birth,
             height = excluded.height,
             jersey_number = excluded.jersey_number",
        params![
            player.league_id.as_u32(),
            player.player_id.as_u64(),
            player.name,
            player.current_team_id.map(|id| id.as_u32()),
            player.date_of_birth,
            height,
            player.jersey_number
        ],
    )?;
    Ok(())
}

fn write_game(conn: &Connection, game: &Game) -> Result<()> {
    conn.execute(
        "INSERT INTO games
         (league_id, game_id, home_team, away_team, home_team_id, away_team_id,
          home_score, away_score, date, round)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(league_id, game_id) DO UPDATE SET
             home_team = excluded.home_team,
             away_team = excluded.away_team,
             home_team_id = excluded.home_team_id,
             away_team_id = excluded.away_team_id,
             home_score = excluded.home_score,
             away_score = excluded.away_score,
             date = excluded.date,
             round = excluded.round",
        params![
            game.league_id.as_u32(),
            game.game_id.as_str(),
            game.home_team,
            game.away_team,
            game.home_team_id.map(|id| id.as_u32()),
            game.away_team_id.map(|id| id.as_u32()),
            game.home_score,
            game.away_score,
            game.date,
            game.round
        ],
    )?;
    Ok(())
}

fn write_game_row(conn: &Connection, row: &GameRow) -> Result<()> {
    conn.execute(
        "INSERT INTO game_rows
         (league_id, game_id, row_key, player_id, player_name, team_id, team_name,
          game_date, stats)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(league_id, game_id, row_key) DO UPDATE SET
             player_id = excluded.player_id,
             player_name = excluded.player_name,
             team_id = excluded.team_id,
             team_name = excluded.team_name,
             game_date = excluded.game_date,
             stats = excluded.stats",
        params![
            row.league_id.as_u32(),
            row.game_id.as_str(),
            game_row_key(row),
            row.player_id.map(|id| id.as_u64()),
            row.player_name,
            row.team_id.map(|id| id.as_u32()),
            row.team_name,
            row.game_date,
            serde_json::to_string(&row.stats)?
        ],
    )?;
    Ok(())
}

fn write_average(conn: &Connection, row: &AverageRow) -> Result<()> {
    conn.execute(
        "INSERT INTO averages
         (league_id, row_key, player_id, player_name, team_name, games_played, stats, ranks)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(league_id, row_key) DO UPDATE SET
             player_id = excluded.player_id,
             player_name = excluded.player_name,
             team_name = excluded.team_name,
             games_played = excluded.games_played,
             stats = excluded.stats,
             ranks = excluded.ranks",
        params![
            row.league_id.as_u32(),
            average_row_key(row),
            row.player_id.map(|id| id.as_u64()),
            row.player_name,
            row.team_name,
            row.games_played,
            serde_json::to_string(&row.stats)?,
            serde_json::to_string(&row.ranks)?
        ],
    )?;
    Ok(())
}

fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn optional_json_column<T: DeserializeOwned>(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<Option<T>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| {
        serde_json::from_str(&t)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}
