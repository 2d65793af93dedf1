//! Interactive terminal host for the picker engine.
//! Run with: cargo run --bin cli -- [roster.csv]
//! An optional CSV path is imported before the prompt starts (first column
//! is the player name; blank names are skipped).
//! Override log verbosity with env: RUST_LOG (e.g. debug to see which
//! operations were ignored as no-ops).

use std::io::{self, BufRead, Write};

use team_picker::{split_teams, Picker, Player, PlayerId};

/// One completed pick round, kept for the session `history` command.
struct RoundLog {
    round: u32,
    at: chrono::DateTime<chrono::Local>,
    mode: &'static str,
    names: Vec<String>,
}

/// Parse a caller-supplied cohort size: free text, leniently. Empty,
/// non-numeric, or negative input means "pick zero", never an error.
fn parse_count(text: &str) -> usize {
    text.trim().parse::<usize>().unwrap_or(0)
}

/// Parse an id argument. None when missing or not a number.
fn parse_id(text: &str) -> Option<PlayerId> {
    text.trim().parse::<PlayerId>().ok()
}

/// Whether the roster currently has a player with this id (for feedback
/// only; the engine itself ignores absent ids).
fn exists(picker: &Picker, id: PlayerId) -> bool {
    picker.snapshot().player(id).is_some()
}

/// Comma-separated names, in the order given.
fn names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the roster as a table in canonical fairness order.
fn print_roster(players: &[Player]) {
    if players.is_empty() {
        println!("(roster is empty)");
        return;
    }
    let name_width = players
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("name".len());
    println!(
        "{:>4}  {:<width$}  {:>6}  {:>6}",
        "id",
        "name",
        "games",
        "paused",
        width = name_width
    );
    for p in players {
        println!(
            "{:>4}  {:<width$}  {:>6}  {:>6}",
            p.id,
            p.name,
            p.games,
            if p.paused { "yes" } else { "-" },
            width = name_width
        );
    }
}

/// Bulk-add names from a CSV file (first column). Blank names and
/// unreadable rows are skipped; returns (added, skipped).
fn import_csv(picker: &mut Picker, path: &str) -> Result<(usize, usize), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut added = 0;
    let mut skipped = 0;
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match record.get(0) {
            Some(name) if picker.add_player(name).is_ok() => added += 1,
            _ => skipped += 1,
        }
    }
    Ok((added, skipped))
}

fn print_help() {
    println!("Commands:");
    println!("  add <name>        add a player");
    println!("  remove <id>       remove a player");
    println!("  rename <id> <name>  relabel a player");
    println!("  pause <id>        toggle a player's paused flag");
    println!("  games <id> <n>    set a player's games counter");
    println!("  list              show the roster (fewest games first)");
    println!("  pick <n>          pick the n least-played players (counts as a round)");
    println!("  random <n>        pick n at random among eligible (counts as a round)");
    println!("  teams <size>      split eligible players into random teams");
    println!("  last              show the last pick");
    println!("  history           show this session's rounds");
    println!("  reset             zero all games counters");
    println!("  clear             remove all players");
    println!("  import <path>     bulk-add names from a CSV file");
    println!("  json              dump the roster snapshot as JSON");
    println!("  quit              end the session");
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut picker = Picker::new();
    let mut history: Vec<RoundLog> = Vec::new();
    let mut round: u32 = 0;

    if let Some(path) = std::env::args().nth(1) {
        match import_csv(&mut picker, &path) {
            Ok((added, skipped)) => {
                log::info!("Imported {} player(s) from {} ({} skipped)", added, path, skipped)
            }
            Err(e) => log::warn!("Could not import {}: {}", path, e),
        }
    }

    println!("team picker - type 'help' for commands");
    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "add" => match picker.add_player(rest) {
                Ok(id) => println!("Added '{}' with id {}", rest, id),
                Err(e) => println!("Ignored: {}", e),
            },
            "remove" => match parse_id(rest) {
                Some(id) if exists(&picker, id) => {
                    picker.remove_player(id);
                    println!("Removed player {}", id);
                }
                Some(id) => println!("No player with id {}; nothing to do", id),
                None => println!("Usage: remove <id>"),
            },
            "rename" => {
                let (id_text, name) = match rest.split_once(char::is_whitespace) {
                    Some((i, n)) => (i, n.trim()),
                    None => (rest, ""),
                };
                match parse_id(id_text) {
                    Some(id) if exists(&picker, id) => {
                        picker.set_player_name(id, name);
                        println!("Renamed {} to '{}'", id, name);
                    }
                    Some(id) => println!("No player with id {}; nothing to do", id),
                    None => println!("Usage: rename <id> <name>"),
                }
            }
            "pause" => match parse_id(rest) {
                Some(id) if exists(&picker, id) => {
                    picker.toggle_paused(id);
                    let paused = picker
                        .snapshot()
                        .player(id)
                        .map(|p| p.paused)
                        .unwrap_or(false);
                    println!(
                        "Player {} is now {}",
                        id,
                        if paused { "paused" } else { "active" }
                    );
                }
                Some(id) => println!("No player with id {}; nothing to do", id),
                None => println!("Usage: pause <id>"),
            },
            "games" => {
                let (id_text, games_text) = match rest.split_once(char::is_whitespace) {
                    Some((i, g)) => (i, g.trim()),
                    None => (rest, ""),
                };
                match (parse_id(id_text), games_text.parse::<i32>()) {
                    (Some(id), Ok(games)) if exists(&picker, id) => {
                        picker.set_player_games(id, games);
                        println!("Set games for player {} to {}", id, games);
                    }
                    (Some(id), Ok(_)) => println!("No player with id {}; nothing to do", id),
                    _ => println!("Usage: games <id> <n>"),
                }
            }
            "list" => print_roster(&picker.current_roster()),
            "pick" | "random" => {
                let n = parse_count(rest);
                let use_random = command == "random";
                let picked = picker.pick_next(n, use_random);
                if picked.is_empty() {
                    println!("No players picked");
                } else {
                    round += 1;
                    history.push(RoundLog {
                        round,
                        at: chrono::Local::now(),
                        mode: if use_random { "random" } else { "fair" },
                        names: picked.iter().map(|p| p.name.clone()).collect(),
                    });
                    println!("Round {}: {}", round, names(&picked));
                }
            }
            "teams" => {
                let size = parse_count(rest);
                let teams = split_teams(&picker.current_roster(), size, &mut rand::thread_rng());
                if teams.is_empty() {
                    println!("No teams formed");
                } else {
                    for (i, team) in teams.iter().enumerate() {
                        println!("Team {}: {}", i + 1, names(team));
                    }
                }
            }
            "last" => {
                if picker.last_picks().is_empty() {
                    println!("No picks yet");
                } else {
                    println!("{}", names(picker.last_picks()));
                }
            }
            "history" => {
                if history.is_empty() {
                    println!("No rounds yet");
                } else {
                    for entry in &history {
                        println!(
                            "[{}] round {} ({}): {}",
                            entry.at.format("%H:%M:%S"),
                            entry.round,
                            entry.mode,
                            entry.names.join(", ")
                        );
                    }
                }
            }
            "reset" => {
                picker.reset_all_games();
                println!("All games counters reset to 0");
            }
            "clear" => {
                picker.clear();
                println!("Roster cleared");
            }
            "import" => {
                if rest.is_empty() {
                    println!("Usage: import <path>");
                } else {
                    match import_csv(&mut picker, rest) {
                        Ok((added, skipped)) => {
                            println!("Imported {} player(s) ({} skipped)", added, skipped)
                        }
                        Err(e) => println!("Could not import {}: {}", rest, e),
                    }
                }
            }
            "json" => {
                let snapshot = picker.snapshot();
                let dump = serde_json::json!({
                    "exported_at": chrono::Utc::now(),
                    "current_id": snapshot.current_id(),
                    "players": snapshot.players(),
                });
                match serde_json::to_string_pretty(&dump) {
                    Ok(text) => println!("{}", text),
                    Err(e) => println!("Could not serialize roster: {}", e),
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}'; type 'help'", command),
        }
    }
    log::info!("Session ended after {} round(s)", round);
}
