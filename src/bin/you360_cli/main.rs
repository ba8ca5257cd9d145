// ABOUTME: You360 CLI - runs dashboard features from the terminal against one local session
// ABOUTME: Covers the wellness score, every AI advice card, the chat assistant, and meditation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Wellness score for a set of readings
//! you360-cli score --sleep 8 --steps 10000 --glucose 90
//!
//! # Convert a walk into steps with a motivational message
//! you360-cli steps 3 --unit km
//!
//! # Scan a meal photo
//! you360-cli scan lunch.jpg
//!
//! # Chat with the assistant (one message per line, `exit` to quit)
//! you360-cli chat
//!
//! # Five-minute meditation countdown
//! you360-cli meditate 5
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use you360::adapters::{ExerciseMode, SkinType};
use you360::config::AppConfig;
use you360::llm::http_client::initialize_shared_client;
use you360::llm::AiGateway;
use you360::logging::LoggingConfig;
use you360::session::DashboardSession;
use you360::storage::FileRecipeStore;
use you360_intelligence::DistanceUnit;

#[derive(Parser)]
#[command(
    name = "you360-cli",
    about = "You360 wellness dashboard CLI",
    long_about = "Run the You360 dashboard cards from the terminal. AI features need GEMINI_API_KEY."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the wellness score for a set of readings
    Score {
        /// Hours slept
        #[arg(long, default_value_t = 7.0)]
        sleep: f64,
        /// Steps taken today
        #[arg(long, default_value_t = 5000)]
        steps: u64,
        /// Blood glucose in mg/dL
        #[arg(long, default_value_t = 110.0)]
        glucose: f64,
    },

    /// Get a supportive tip for a mood
    Mood {
        /// Mood label, e.g. Happy or Stressed
        mood: String,
    },

    /// Break down and analyse a night's sleep
    Sleep {
        /// Hours slept
        hours: f64,
    },

    /// Convert a walked distance into steps
    Steps {
        /// Distance walked
        distance: f64,
        /// Distance unit (km or m)
        #[arg(long, default_value = "km")]
        unit: DistanceUnit,
    },

    /// Hair care advice for an issue
    Hair {
        /// Hair issue, e.g. "dandruff"
        issue: String,
    },

    /// Skin care routine for a skin type
    Skin {
        /// Skin type (dry, oily, combination)
        #[arg(default_value = "dry")]
        skin_type: SkinType,
    },

    /// Estimate the blood sugar impact of a food
    Diet {
        /// Food eaten
        food: String,
    },

    /// Exercise plan for home or gym
    Exercise {
        /// Workout location (home or gym)
        #[arg(default_value = "home")]
        mode: ExerciseMode,
    },

    /// Analyse a meal photo
    Scan {
        /// Path to a JPEG, PNG, WebP, or HEIC image
        image: PathBuf,
    },

    /// Generate a recipe from ingredients and save it as the last recipe
    Recipe {
        /// Ingredients, e.g. "chicken, spinach, rice"
        ingredients: String,
    },

    /// Show the last saved recipe
    LastRecipe,

    /// Chat with the wellness assistant
    Chat,

    /// Run a meditation countdown
    Meditate {
        /// Session length in minutes
        minutes: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AppConfig::from_env();
    initialize_shared_client(config.http);
    let gateway = AiGateway::from_config(&config.llm);
    let store = Arc::new(FileRecipeStore::new(&config.storage.data_dir));
    let session = DashboardSession::new(&gateway, store);

    match cli.command {
        Command::Score {
            sleep,
            steps,
            glucose,
        } => commands::wellness::score(sleep, steps, glucose),
        Command::Mood { mood } => commands::advice::mood(&session, &mood).await,
        Command::Sleep { hours } => commands::advice::sleep(&session, hours).await,
        Command::Steps { distance, unit } => {
            commands::advice::steps(&session, distance, unit).await
        }
        Command::Hair { issue } => commands::advice::hair(&session, &issue).await,
        Command::Skin { skin_type } => commands::advice::skin(&session, skin_type).await,
        Command::Diet { food } => commands::advice::diet(&session, &food).await,
        Command::Exercise { mode } => commands::advice::exercise(&session, mode).await,
        Command::Scan { image } => commands::nutrition::scan(&session, &image).await?,
        Command::Recipe { ingredients } => {
            commands::nutrition::recipe(&session, &ingredients).await;
        }
        Command::LastRecipe => commands::nutrition::last_recipe(&session).await?,
        Command::Chat => commands::chat::run(&session).await?,
        Command::Meditate { minutes } => commands::wellness::meditate(minutes).await,
    }

    Ok(())
}
