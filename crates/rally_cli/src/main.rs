//! rally CLI
//!
//! Thin host around rally_core: reads a roster JSON file, draws the session
//! groups and schedule, and prints them. All algorithmic work lives in the
//! library; this binary only parses arguments and formats output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use rally_core::{
    build_schedule, draw_groups, suggest_replacement, DrawResponse, Group, Participant,
    ParticipantId, Pool, SessionConfig, SCHEMA_VERSION,
};

#[derive(Parser)]
#[command(name = "rally")]
#[command(about = "Draw balanced session groups and fair matchups from a roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw groups and a matchup schedule from a roster file
    Draw {
        /// Roster JSON file (array of participants)
        #[arg(long)]
        roster: PathBuf,

        /// Tie-breaking seed; the same roster and seed reproduce the draw
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Members per full group
        #[arg(long)]
        team_size: Option<usize>,

        /// Games each group should get
        #[arg(long)]
        games: Option<u32>,

        /// Emit the raw JSON response instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Suggest a replacement for a drawn participant
    Suggest {
        /// Roster JSON file (array of participants)
        #[arg(long)]
        roster: PathBuf,

        /// Drawn groups JSON file (array of groups)
        #[arg(long)]
        groups: PathBuf,

        /// Id of the outgoing participant
        #[arg(long)]
        outgoing: ParticipantId,

        /// Group names engaged in the live matchup (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Draw {
            roster,
            seed,
            team_size,
            games,
            json,
        } => run_draw(&roster, seed, team_size, games, json),
        Commands::Suggest {
            roster,
            groups,
            outgoing,
            exclude,
        } => run_suggest(&roster, &groups, outgoing, &exclude),
    }
}

fn load_roster(path: &PathBuf) -> Result<Vec<Participant>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    let roster: Vec<Participant> =
        serde_json::from_str(&raw).context("roster file is not a participant array")?;
    Ok(roster)
}

fn run_draw(
    roster_path: &PathBuf,
    seed: u64,
    team_size: Option<usize>,
    games: Option<u32>,
    json: bool,
) -> Result<()> {
    let roster = load_roster(roster_path)?;

    let mut config = SessionConfig::default();
    if let Some(team_size) = team_size {
        config.team_size = team_size;
    }
    if let Some(games) = games {
        config.target_games_per_group = games;
    }

    let pool = Pool::from_roster(&roster);
    let outcome = draw_groups(pool.members(), &config, seed)?;
    let groups = outcome.into_groups();
    let schedule = build_schedule(&groups, &config);

    if json {
        let response = DrawResponse {
            schema_version: SCHEMA_VERSION,
            target_games: schedule.target,
            target_met: schedule.met_target(),
            matchups: schedule.matchups,
            groups,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Session {}", Local::now().format("%Y-%m-%d"));
    println!();
    for group in &groups {
        println!("{} [{}]", group.name, group.kind.label());
        let mut members = group.members.clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        for member in &members {
            println!("  {:<20} {:?}  skill {}", member.name, member.category, member.skill);
        }
        println!();
    }

    if schedule.is_empty() {
        println!("No matchups: fewer than two play-eligible groups.");
        return Ok(());
    }
    println!("Matchups:");
    for (i, matchup) in schedule.matchups.iter().enumerate() {
        println!("{:>3}. {} x {}", i + 1, matchup.home, matchup.away);
    }
    if !schedule.met_target() {
        println!(
            "Note: only {} of {} target matchups could be scheduled; redraw to try again.",
            schedule.matchups.len(),
            schedule.target
        );
    }
    Ok(())
}

fn run_suggest(
    roster_path: &PathBuf,
    groups_path: &PathBuf,
    outgoing_id: ParticipantId,
    exclude: &[String],
) -> Result<()> {
    let roster = load_roster(roster_path)?;
    let raw = fs::read_to_string(groups_path)
        .with_context(|| format!("reading groups file {}", groups_path.display()))?;
    let groups: Vec<Group> =
        serde_json::from_str(&raw).context("groups file is not a group array")?;

    let outgoing = groups
        .iter()
        .flat_map(|g| g.members.iter())
        .find(|m| m.id == outgoing_id)
        .cloned()
        .with_context(|| format!("participant {outgoing_id} is not in any drawn group"))?;

    match suggest_replacement(&outgoing, &roster, &groups, exclude) {
        Some(candidate) => println!(
            "Replace {} with {} ({:?}, skill {})",
            outgoing.name, candidate.name, candidate.category, candidate.skill
        ),
        None => println!("No suitable replacement found."),
    }
    Ok(())
}
