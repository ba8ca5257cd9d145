// ABOUTME: Session-scoped dashboard state: wellness sample, mood, conversation, routines, auth
// ABOUTME: Owns one gated adapter per feature so concurrent sessions never share mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Session
//!
//! A [`DashboardSession`] is everything one open dashboard needs. State that
//! changes between requests lives behind an async mutex that is never held
//! across a gateway call; each feature adapter carries its own in-flight gate.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use you360_core::constants::messages;
use you360_core::constants::wellness::DEFAULT_MOOD;
use you360_core::errors::{AdapterError, AppError, AppResult};
use you360_core::models::{
    AuthSession, Conversation, ConversationMessage, FoodScan, SavedRecipe, WellnessSample,
    WellnessScore,
};
use you360_intelligence::{
    steps_from_distance, Distance, StepCounter, WellnessScoreBreakdown, WellnessScorer,
};

use crate::adapters::{
    AdviceFeature, CareAdvice, ChatFeature, ChatTurn, ExerciseMode, ExercisePlanFeature,
    FeatureAdapter, FoodScanFeature, HairCareFeature, MoodTip, MoodTipFeature, RecipeFeature,
    SkinCareFeature, SkinType, SleepAnalysisFeature, SleepReport, StepMotivationFeature,
    StepReport, SugarEstimate, SugarEstimateFeature,
};
use crate::llm::{AiGateway, ImagePayload};
use crate::routines::RoutineTracker;
use crate::storage::RecipeStore;

/// Mutable per-session values
#[derive(Debug)]
struct SessionState {
    sample: WellnessSample,
    steps: StepCounter,
    mood: String,
    conversation: Conversation,
    routines: RoutineTracker,
    auth: Option<AuthSession>,
}

impl Default for SessionState {
    fn default() -> Self {
        let sample = WellnessSample::default();
        Self {
            sample,
            steps: StepCounter::new(sample.steps_today),
            mood: DEFAULT_MOOD.to_owned(),
            conversation: Conversation::new(),
            routines: RoutineTracker::with_defaults(),
            auth: None,
        }
    }
}

/// Overview shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Session id
    pub id: Uuid,
    /// Current wellness inputs
    pub sample: WellnessSample,
    /// Score for `sample`
    pub score: WellnessScore,
    /// Score components
    pub breakdown: WellnessScoreBreakdown,
    /// Currently selected mood
    pub mood: String,
    /// Floored completion percentage across all routines
    pub overall_progress: u8,
    /// Signed-in user's display name
    pub user: Option<String>,
}

/// Result of one chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatExchange {
    /// Assistant turn appended to the conversation
    pub reply: ConversationMessage,
    /// Whether the reply is the error sentinel
    pub failed: bool,
}

/// One dashboard's state and feature adapters
pub struct DashboardSession {
    id: Uuid,
    state: Mutex<SessionState>,
    recipe_store: Arc<dyn RecipeStore>,
    mood: FeatureAdapter<MoodTipFeature>,
    sleep: FeatureAdapter<SleepAnalysisFeature>,
    steps: FeatureAdapter<StepMotivationFeature>,
    hair: FeatureAdapter<HairCareFeature>,
    skin: FeatureAdapter<SkinCareFeature>,
    diet: FeatureAdapter<SugarEstimateFeature>,
    exercise: FeatureAdapter<ExercisePlanFeature>,
    food_scan: FeatureAdapter<FoodScanFeature>,
    recipe: FeatureAdapter<RecipeFeature>,
    chat: FeatureAdapter<ChatFeature>,
}

impl DashboardSession {
    /// Create a session with default readings and the default routines
    #[must_use]
    pub fn new(gateway: &AiGateway, recipe_store: Arc<dyn RecipeStore>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Mutex::new(SessionState::default()),
            recipe_store,
            mood: FeatureAdapter::new(gateway.clone()),
            sleep: FeatureAdapter::new(gateway.clone()),
            steps: FeatureAdapter::new(gateway.clone()),
            hair: FeatureAdapter::new(gateway.clone()),
            skin: FeatureAdapter::new(gateway.clone()),
            diet: FeatureAdapter::new(gateway.clone()),
            exercise: FeatureAdapter::new(gateway.clone()),
            food_scan: FeatureAdapter::new(gateway.clone()),
            recipe: FeatureAdapter::new(gateway.clone()),
            chat: FeatureAdapter::new(gateway.clone()),
        }
    }

    /// Session id
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    // ========================================================================
    // Wellness readings
    // ========================================================================

    /// Current wellness inputs
    pub async fn sample(&self) -> WellnessSample {
        self.state.lock().await.sample
    }

    /// Score for the current inputs; recomputed on every call
    pub async fn wellness_score(&self) -> WellnessScore {
        WellnessScorer::compute(&self.sample().await)
    }

    /// Header overview
    pub async fn summary(&self) -> SessionSummary {
        let state = self.state.lock().await;
        let breakdown = WellnessScorer::breakdown(&state.sample);
        SessionSummary {
            id: self.id,
            sample: state.sample,
            score: breakdown.score,
            breakdown,
            mood: state.mood.clone(),
            overall_progress: state.routines.overall_progress(),
            user: state
                .auth
                .as_ref()
                .and_then(AuthSession::display_name)
                .map(str::to_owned),
        }
    }

    /// Record last night's sleep
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite hours
    pub async fn set_sleep_hours(&self, hours: f64) -> AppResult<WellnessSample> {
        let hours = require_reading(hours, messages::INVALID_SLEEP_HOURS)?;
        let mut state = self.state.lock().await;
        state.sample.sleep_hours = hours;
        Ok(state.sample)
    }

    /// Record a glucose reading in mg/dL
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite readings
    pub async fn set_glucose_reading(&self, reading: f64) -> AppResult<WellnessSample> {
        let reading = require_reading(reading, messages::INVALID_GLUCOSE)?;
        let mut state = self.state.lock().await;
        state.sample.glucose_reading = reading;
        Ok(state.sample)
    }

    // ========================================================================
    // Feature adapters
    // ========================================================================

    /// Select a mood and fetch a supportive tip
    ///
    /// The mood is recorded even when the tip cannot be fetched.
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the mood card's display area
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn select_mood(&self, mood: &str) -> Result<MoodTip, AdapterError> {
        let mood = mood.trim().to_owned();
        if !mood.is_empty() {
            self.state.lock().await.mood.clone_from(&mood);
        }
        self.mood.run(&mood).await
    }

    /// Record sleep hours and fetch an analysis
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the sleep card's display area
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn analyze_sleep(&self, hours: f64) -> Result<SleepReport, AdapterError> {
        if hours.is_finite() && hours >= 0.0 {
            self.state.lock().await.sample.sleep_hours = hours;
        }
        self.sleep.run(&hours).await
    }

    /// Convert a walked distance to steps, ratchet the daily total, and fetch a motivational line
    ///
    /// The step total is updated before the gateway call, so it advances even
    /// when the message cannot be fetched.
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the steps card's display area
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn convert_steps(&self, distance: Distance) -> Result<StepReport, AdapterError> {
        StepMotivationFeature::validate(&distance)?;
        let steps = steps_from_distance(&distance);
        let steps_today = {
            let mut state = self.state.lock().await;
            let total = state.steps.record(steps);
            state.sample.steps_today = total;
            total
        };

        let message = self.steps.run(&distance).await?;
        Ok(StepReport {
            distance,
            meters: distance.meters(),
            steps,
            steps_today,
            message,
        })
    }

    /// Hair care routine for a described issue
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the hair card's display area
    pub async fn hair_advice(&self, issue: &str) -> Result<CareAdvice, AdapterError> {
        self.hair.run(&issue.to_owned()).await
    }

    /// Skin care routine for a skin type
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the skin card's display area
    pub async fn skin_advice(&self, skin_type: SkinType) -> Result<CareAdvice, AdapterError> {
        self.skin.run(&skin_type).await
    }

    /// Three-day workout plan
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the exercise card's display area
    pub async fn exercise_plan(&self, mode: ExerciseMode) -> Result<CareAdvice, AdapterError> {
        self.exercise.run(&mode).await
    }

    /// Estimate a meal's blood sugar impact and record the simulated reading
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the diet card's display area
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn estimate_sugar(&self, food: &str) -> Result<SugarEstimate, AdapterError> {
        let estimate = self.diet.run(&food.to_owned()).await?;
        self.state.lock().await.sample.glucose_reading = estimate.estimated_reading;
        Ok(estimate)
    }

    /// Identify a meal photo and estimate its nutrition
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the scanner's display area
    #[instrument(skip(self, image), fields(session = %self.id, mime = %image.mime_type))]
    pub async fn scan_food(&self, image: &ImagePayload) -> Result<FoodScan, AdapterError> {
        self.food_scan.run(image).await
    }

    /// Generate a recipe from ingredients and persist it as the last recipe
    ///
    /// A failure to persist is logged; the generated recipe is still returned.
    ///
    /// # Errors
    ///
    /// Returns the adapter failure for the recipe card's display area
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn generate_recipe(&self, ingredients: &str) -> Result<SavedRecipe, AdapterError> {
        let recipe = self.recipe.run(&ingredients.to_owned()).await?;
        let saved = SavedRecipe::stamped_now(recipe);
        if let Err(e) = self.recipe_store.save_last(&saved).await {
            warn!(error = %e, "Generated recipe could not be persisted");
        }
        Ok(saved)
    }

    /// Most recently generated recipe, from any session
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store cannot be read
    pub async fn last_recipe(&self) -> AppResult<Option<SavedRecipe>> {
        self.recipe_store.load_last().await
    }

    /// Send a chat message with the prior conversation as context
    ///
    /// On success the user turn and the reply are appended together; on a
    /// gateway failure the user turn and the error sentinel are appended.
    /// Blank messages and messages sent while a reply is pending leave the
    /// conversation untouched. The chat gate is held from the history
    /// snapshot until both turns are appended, so every message sees every
    /// earlier exchange.
    ///
    /// # Errors
    ///
    /// Returns `Validation` or `Busy`
    #[instrument(skip(self, message), fields(session = %self.id))]
    pub async fn send_chat(&self, message: &str) -> Result<ChatExchange, AdapterError> {
        let mut turn = ChatTurn {
            history: Vec::new(),
            message: message.trim().to_owned(),
        };
        ChatFeature::build_request(&turn)?;

        let permit = self.chat.begin()?;
        turn.history = self.state.lock().await.conversation.messages().to_vec();

        let (reply, failed) = match self.chat.run_with(&permit, &turn).await {
            Ok(text) => (ConversationMessage::assistant(text), false),
            Err(e @ (AdapterError::Validation(_) | AdapterError::Busy { .. })) => return Err(e),
            Err(AdapterError::Gateway(e)) => {
                warn!(error = %e, "Chat reply failed");
                (
                    ConversationMessage::assistant(messages::CHAT_ERROR_SENTINEL),
                    true,
                )
            }
        };

        {
            let mut state = self.state.lock().await;
            state.conversation.push(ConversationMessage::user(turn.message));
            state.conversation.push(reply.clone());
        }
        drop(permit);
        Ok(ChatExchange { reply, failed })
    }

    /// Conversation so far
    pub async fn conversation(&self) -> Conversation {
        self.state.lock().await.conversation.clone()
    }

    // ========================================================================
    // Routines and auth
    // ========================================================================

    /// Run `f` against the routine tracker
    pub async fn with_routines<R>(&self, f: impl FnOnce(&mut RoutineTracker) -> R) -> R {
        let mut state = self.state.lock().await;
        f(&mut state.routines)
    }

    /// Retain an issued auth session
    pub async fn sign_in(&self, auth: AuthSession) {
        info!(session = %self.id, user = ?auth.display_name(), "Signed in");
        self.state.lock().await.auth = Some(auth);
    }

    /// Retained auth session, if signed in
    pub async fn auth(&self) -> Option<AuthSession> {
        self.state.lock().await.auth.clone()
    }
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

fn require_reading(value: f64, message: &str) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(message))
    }
}
