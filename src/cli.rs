use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::{
    db::{Goal, JournalEntry, MoodLog},
    goals::commands as goals,
    journal::commands as journal,
    mood::{commands as mood, MoodChart},
    mood_series::{format_value_label, RangeMode},
    settings::ChartSettings,
    AppState,
};

fn parse_range(value: &str) -> Result<RangeMode, String> {
    value.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn join_words(words: Vec<String>) -> String {
    words.join(" ")
}

#[derive(Parser, Debug)]
#[command(author, version, about = "WellMind mood, journal and goal tracker")]
pub struct Cli {
    /// Directory holding the database and settings
    #[arg(long, env = "WELLMIND_DATA_DIR", default_value = "wellmind-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log or show today's mood
    #[command(subcommand)]
    Mood(MoodCommand),
    /// Print the mood chart series for a range
    Chart {
        /// week, month or all; defaults to the saved preference
        #[arg(value_parser = parse_range)]
        range: Option<RangeMode>,
    },
    /// Manage journal entries
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Manage daily goals
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Show or change preferences
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug)]
enum MoodCommand {
    /// Log today's mood (🙂 😐 😔, or happy / neutral / sad)
    Log { mood: String },
    /// Show today's mood
    Today,
}

#[derive(Subcommand, Debug)]
enum JournalCommand {
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },
    List,
    Show { id: String },
    Edit {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    Add {
        #[arg(required = true)]
        title: Vec<String>,
    },
    List {
        /// Include goals from earlier days
        #[arg(long)]
        all: bool,
    },
    /// Toggle a goal between done and open
    Done { id: String },
    /// Show this goal on the home screen
    Main { id: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    /// Set the background color (#RGB or #RRGGBB)
    Background { color: String },
    /// Set the default chart range
    Range {
        #[arg(value_parser = parse_range)]
        range: RangeMode,
    },
    /// Render chart dates in a fixed UTC offset; omit to use each timestamp's own
    Offset {
        #[arg(allow_negative_numbers = true)]
        minutes: Option<i32>,
    },
}

pub async fn execute(cli: Cli) -> Result<()> {
    let state = AppState::open(&cli.data_dir)?;

    match cli.command {
        Command::Mood(command) => run_mood(&state, command).await,
        Command::Chart { range } => {
            let chart = mood::get_mood_chart(&state, range).await.map_err(|e| anyhow!(e))?;
            print_chart(&chart);
            Ok(())
        }
        Command::Journal(command) => run_journal(&state, command).await,
        Command::Goal(command) => run_goal(&state, command).await,
        Command::Settings(command) => run_settings(&state, command),
    }
}

async fn run_mood(state: &AppState, command: MoodCommand) -> Result<()> {
    match command {
        MoodCommand::Log { mood: label } => {
            let log = mood::log_mood(state, label).await.map_err(|e| anyhow!(e))?;
            print_mood(&log);
        }
        MoodCommand::Today => match mood::get_today_mood(state).await.map_err(|e| anyhow!(e))? {
            Some(log) => print_mood(&log),
            None => println!("No mood logged today"),
        },
    }
    Ok(())
}

async fn run_journal(state: &AppState, command: JournalCommand) -> Result<()> {
    match command {
        JournalCommand::Add { text } => {
            let entry = journal::create_journal_entry(state, join_words(text))
                .await
                .map_err(|e| anyhow!(e))?;
            print_entry(&entry);
        }
        JournalCommand::List => {
            let entries = journal::list_journal_entries(state)
                .await
                .map_err(|e| anyhow!(e))?;
            if entries.is_empty() {
                println!("No journal entries yet");
            }
            for entry in &entries {
                print_entry(entry);
            }
        }
        JournalCommand::Show { id } => {
            let entry = journal::get_journal_entry(state, id)
                .await
                .map_err(|e| anyhow!(e))?;
            print_entry(&entry);
        }
        JournalCommand::Edit { id, text } => {
            let entry = journal::update_journal_entry(state, id, join_words(text))
                .await
                .map_err(|e| anyhow!(e))?;
            print_entry(&entry);
        }
        JournalCommand::Delete { id } => {
            journal::delete_journal_entry(state, id)
                .await
                .map_err(|e| anyhow!(e))?;
            println!("Journal entry deleted");
        }
    }
    Ok(())
}

async fn run_goal(state: &AppState, command: GoalCommand) -> Result<()> {
    match command {
        GoalCommand::Add { title } => {
            let goal = goals::create_goal(state, join_words(title))
                .await
                .map_err(|e| anyhow!(e))?;
            print_goal(&goal);
        }
        GoalCommand::List { all } => {
            let list = goals::list_goals(state, all).await.map_err(|e| anyhow!(e))?;
            if list.is_empty() {
                println!("No goals");
            }
            for goal in &list {
                print_goal(goal);
            }
        }
        GoalCommand::Done { id } => {
            let goal = goals::toggle_goal(state, id).await.map_err(|e| anyhow!(e))?;
            print_goal(&goal);
        }
        GoalCommand::Main { id } => {
            let goal = goals::set_main_goal(state, id).await.map_err(|e| anyhow!(e))?;
            print_goal(&goal);
        }
        GoalCommand::Delete { id } => {
            goals::delete_goal(state, id).await.map_err(|e| anyhow!(e))?;
            println!("Goal deleted");
        }
    }
    Ok(())
}

fn run_settings(state: &AppState, command: SettingsCommand) -> Result<()> {
    let settings = &state.settings;
    match command {
        SettingsCommand::Show => {}
        SettingsCommand::Background { color } => {
            settings.update_background_color(&color)?;
        }
        SettingsCommand::Range { range } => {
            settings.update_chart(ChartSettings {
                default_range: range,
                ..settings.chart()
            })?;
        }
        SettingsCommand::Offset { minutes } => {
            settings.update_chart(ChartSettings {
                label_utc_offset_minutes: minutes,
                ..settings.chart()
            })?;
        }
    }

    let appearance = settings.appearance();
    let chart = settings.chart();
    println!("background color: {}", appearance.background_color);
    println!("default range:    {}", chart.default_range);
    match chart.label_utc_offset_minutes {
        Some(minutes) => println!("label offset:     {minutes} min"),
        None => println!("label offset:     timestamp's own"),
    }
    Ok(())
}

fn print_mood(log: &MoodLog) {
    let description = log
        .recognized_mood()
        .map(|mood| mood.description())
        .unwrap_or("Unrecognized mood");
    println!("{} {} ({})", log.mood, description, log.logged_at.date_naive());
}

fn print_entry(entry: &JournalEntry) {
    println!(
        "[{}] {}\n  {}",
        entry.id,
        entry.created_at.format("%Y-%m-%d %H:%M"),
        entry.content
    );
}

fn print_goal(goal: &Goal) {
    let done = if goal.is_done { "x" } else { " " };
    let main = if goal.show_on_home { " (main)" } else { "" };
    println!("[{done}] {}{main}  {}", goal.title, goal.id);
}

fn print_chart(chart: &MoodChart) {
    if chart.empty {
        println!("No data for selected range");
        return;
    }

    println!("Mood chart ({}), {} entries", chart.range, chart.values.len());
    for (label, value) in chart.labels.iter().zip(&chart.values) {
        println!("{label:>6}  {:<8} {value}", format_value_label(*value));
    }
}
