use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use monopoly_engine::decider::GreedyDecider;
use monopoly_engine::engine::Game;
use monopoly_engine::error::GameError;
use monopoly_engine::rng::Rng;
use monopoly_engine::settings::Settings;
use monopoly_engine::types::GameSummary;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const AI_CASH_RESERVE: i64 = 2_000;
const DICE_SEED_SALT: u32 = 0x9e37_79b9;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(long, default_value_t = 4)]
    players: usize,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long)]
    seed: Option<u32>,
    #[arg(long, default_value_t = 500)]
    max_rounds: u32,
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long)]
    always_auction: bool,
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize)]
struct Scenario {
    name: String,
    players: usize,
    seed: u32,
    #[serde(rename = "maxRounds")]
    max_rounds: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum FinishReason {
    Bankruptcy,
    RoundLimit,
}

#[derive(Clone, Debug, Serialize)]
struct SquareVisits {
    index: usize,
    place: String,
    visits: u64,
}

#[derive(Clone, Debug, Serialize)]
struct GameResultLine {
    scenario: String,
    seed: u32,
    players: usize,
    rounds: u32,
    reason: FinishReason,
    winner: Option<String>,
    events: usize,
    summary: GameSummary,
    visits: Vec<SquareVisits>,
}

#[derive(Clone, Debug, Serialize)]
struct RunSummary {
    #[serde(rename = "runId")]
    run_id: String,
    #[serde(rename = "generatedAtIso")]
    generated_at_iso: String,
    #[serde(rename = "gameCount")]
    game_count: usize,
    #[serde(rename = "averageRounds")]
    average_rounds: f64,
    #[serde(rename = "reasonCounts")]
    reason_counts: BTreeMap<String, usize>,
    wins: BTreeMap<String, usize>,
    visits: Vec<SquareVisits>,
    games: Vec<GameResultLine>,
}

#[derive(Clone, Debug, Serialize)]
struct StructuredLogLine {
    #[serde(rename = "timestampMs")]
    timestamp_ms: u64,
    level: String,
    event: String,
    #[serde(rename = "runId")]
    run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<String>,
    details: Value,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = match cli.settings.as_ref() {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if cli.always_auction {
        settings.always_auction = true;
    }

    let base_seed = cli.seed.unwrap_or_else(rand::random::<u32>);
    let scenarios = resolve_scenarios(&cli, base_seed);
    let run_id = default_run_id(base_seed, now_ms());

    let mut results = Vec::new();
    for scenario in &scenarios {
        emit_log(
            "info",
            "game_started",
            &run_id,
            Some(&scenario.name),
            json!({
                "players": scenario.players,
                "seed": scenario.seed,
                "maxRounds": scenario.max_rounds,
            }),
        );
        let result = run_game(scenario, &settings)
            .with_context(|| format!("game {} aborted", scenario.name))?;
        emit_log(
            "info",
            "game_finished",
            &run_id,
            Some(&scenario.name),
            json!({
                "reason": result.reason,
                "rounds": result.rounds,
                "winner": result.winner,
            }),
        );
        println!("{}", serde_json::to_string(&result)?);
        results.push(result);
    }

    let summary = build_run_summary(run_id.clone(), results);
    if let Some(path) = cli.summary_out.as_ref() {
        write_summary(path, &summary)
            .with_context(|| format!("writing summary to {}", path.display()))?;
    }

    emit_log(
        "info",
        "run_finished",
        &run_id,
        None,
        json!({
            "gameCount": summary.game_count,
            "averageRounds": summary.average_rounds,
            "reasonCounts": summary.reason_counts,
            "summaryOut": cli.summary_out.as_ref().map(|path| path.to_string_lossy().to_string()),
        }),
    );
    Ok(())
}

fn resolve_scenarios(cli: &Cli, base_seed: u32) -> Vec<Scenario> {
    (0..cli.games.max(1))
        .map(|index| Scenario {
            name: format!("game-{:03}", index + 1),
            players: cli.players,
            seed: base_seed.wrapping_add(index as u32),
            max_rounds: cli.max_rounds,
        })
        .collect()
}

fn run_game(scenario: &Scenario, settings: &Settings) -> Result<GameResultLine, GameError> {
    let names: Vec<String> = (0..scenario.players)
        .map(|index| format!("AI-{:02}", index + 1))
        .collect();
    let mut game = Game::new(&names, settings.clone(), scenario.seed)?;
    let mut dice = Rng::new(scenario.seed ^ DICE_SEED_SALT);
    let mut decider = GreedyDecider::new(scenario.seed, AI_CASH_RESERVE);
    let mut visits = vec![0u64; game.board.len()];
    let mut events = 0usize;
    let mut rounds = 0u32;

    while rounds < scenario.max_rounds && !game.is_over() {
        rounds += 1;
        for id in 0..game.players.len() {
            if game.players[id].bankrupt {
                continue;
            }
            let outcome = game.play_roll(id, dice.roll_dice(), &mut decider)?;
            visits[outcome.landed] += 1;
            if outcome.end != outcome.landed {
                visits[outcome.end] += 1;
            }
            if !outcome.bankrupt {
                improve_properties(&mut game, id)?;
            }
            events += game.drain_events().len();
            if game.is_over() {
                break;
            }
        }
    }

    let reason = if game.is_over() {
        FinishReason::Bankruptcy
    } else {
        FinishReason::RoundLimit
    };
    let visits = game
        .board
        .squares()
        .iter()
        .zip(visits)
        .enumerate()
        .map(|(index, (square, visits))| SquareVisits {
            index,
            place: square.name().to_string(),
            visits,
        })
        .collect();

    Ok(GameResultLine {
        scenario: scenario.name.clone(),
        seed: scenario.seed,
        players: scenario.players,
        rounds,
        reason,
        winner: game.winner().map(|player| player.name.clone()),
        events,
        summary: game.build_summary(),
        visits,
    })
}

fn improve_properties(game: &mut Game, id: usize) -> Result<(), GameError> {
    for site in game.improvable_sites(id) {
        if game.players[id].balance < AI_CASH_RESERVE * 2 {
            break;
        }
        match game.build_house(id, &site) {
            Ok(()) => {}
            Err(GameError::HouseLimit(_)) => game.build_hotel(id, &site)?,
            Err(error) => return Err(error),
        }
    }
    Ok(())
}

fn build_run_summary(run_id: String, games: Vec<GameResultLine>) -> RunSummary {
    let game_count = games.len();
    let average_rounds = if game_count == 0 {
        0.0
    } else {
        games.iter().map(|game| f64::from(game.rounds)).sum::<f64>() / game_count as f64
    };

    let mut reason_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut wins: BTreeMap<String, usize> = BTreeMap::new();
    let mut visits: Vec<SquareVisits> = Vec::new();
    for game in &games {
        let key = match game.reason {
            FinishReason::Bankruptcy => "bankruptcy",
            FinishReason::RoundLimit => "round_limit",
        };
        *reason_counts.entry(key.to_string()).or_insert(0) += 1;
        if let Some(winner) = &game.winner {
            *wins.entry(winner.clone()).or_insert(0) += 1;
        }
        for square in &game.visits {
            match visits.get_mut(square.index) {
                Some(total) => total.visits += square.visits,
                None => visits.push(square.clone()),
            }
        }
    }

    RunSummary {
        run_id,
        generated_at_iso: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        game_count,
        average_rounds,
        reason_counts,
        wins,
        visits,
        games,
    }
}

fn default_run_id(seed: u32, started_at_ms: u64) -> String {
    format!("sim-{seed}-{started_at_ms}")
}

fn emit_log(level: &str, event: &str, run_id: &str, scenario: Option<&str>, details: Value) {
    let log_line = StructuredLogLine {
        timestamp_ms: now_ms(),
        level: level.to_string(),
        event: event.to_string(),
        run_id: run_id.to_string(),
        scenario: scenario.map(|value| value.to_string()),
        details,
    };
    match serde_json::to_string(&log_line) {
        Ok(line) => eprintln!("{line}"),
        Err(error) => eprintln!("[simulate] failed to encode log line: {error}"),
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn write_summary(path: &Path, summary: &RunSummary) -> io::Result<()> {
    let summary_text = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, summary_text)
}
