// ABOUTME: Feature adapters translating dashboard intents into AI requests and display models
// ABOUTME: One generic adapter runs build-request, gateway call, and reply mapping behind a gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Adapters
//!
//! Each dashboard card is an [`AdviceFeature`]: a pair of pure functions
//! mapping user input to an [`AiRequest`] and an [`AiResponse`] to a display
//! model. [`FeatureAdapter`] runs that pipeline against the gateway and owns
//! the per-instance [`RequestGate`], so a second call while one is outstanding
//! is rejected with [`AdapterError::Busy`] instead of racing the first.

mod care;
mod chat;
mod diet;
mod food_scan;
mod gate;
mod mood;
mod recipe;
mod sleep;
mod steps;

pub use care::{CareAdvice, ExerciseMode, ExercisePlanFeature, HairCareFeature, SkinCareFeature, SkinType};
pub use chat::{ChatFeature, ChatTurn};
pub use diet::{SugarEstimate, SugarEstimateFeature};
pub use food_scan::FoodScanFeature;
pub use gate::{GatePermit, RequestGate};
pub use mood::{MoodTip, MoodTipFeature};
pub use recipe::RecipeFeature;
pub use sleep::{SleepAnalysisFeature, SleepReport};
pub use steps::{StepMotivationFeature, StepReport};

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use serde::Serialize;
use you360_core::errors::AdapterError;

use crate::llm::{AiGateway, AiRequest, AiResponse};
use crate::logging::AppLogger;

/// Contract of one dashboard feature
pub trait AdviceFeature: Send + Sync + 'static {
    /// Feature name used in logs and busy errors
    const NAME: &'static str;

    /// User input
    type Input: Send + Sync;

    /// Display model produced on success
    type Output: Send;

    /// Validate input and build the gateway request
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Validation` when the input cannot be sent
    fn build_request(input: &Self::Input) -> Result<AiRequest, AdapterError>;

    /// Map a successful reply to the display model
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Gateway` when the reply does not fit the display model
    fn map_response(input: &Self::Input, response: AiResponse)
        -> Result<Self::Output, AdapterError>;
}

/// Runs an [`AdviceFeature`] against the gateway, one request at a time
pub struct FeatureAdapter<F> {
    gateway: AiGateway,
    gate: RequestGate,
    feature: PhantomData<fn() -> F>,
}

impl<F: AdviceFeature> FeatureAdapter<F> {
    /// Create an idle adapter
    #[must_use]
    pub fn new(gateway: AiGateway) -> Self {
        Self {
            gateway,
            gate: RequestGate::new(),
            feature: PhantomData,
        }
    }

    /// Whether a request is outstanding
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        self.gate.is_requesting()
    }

    /// Validate, call the gateway, and map the reply
    ///
    /// Validation failures never reach the gateway. The gate returns to idle
    /// when this future completes or is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Validation`, `Busy`, or the wrapped gateway failure
    pub async fn run(&self, input: &F::Input) -> Result<F::Output, AdapterError> {
        let request = Self::prepare(input)?;
        let _permit = self.begin()?;
        self.execute(input, &request).await
    }

    /// Move the gate to Requesting without sending anything yet
    ///
    /// Callers that must read shared state after winning the gate take the
    /// permit here, build their input, then call [`Self::run_with`]. The gate
    /// stays Requesting until the permit is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Busy` when a request is already outstanding
    pub fn begin(&self) -> Result<GatePermit<'_>, AdapterError> {
        self.gate.try_acquire(F::NAME)
    }

    /// Validate and run under a permit obtained from [`Self::begin`]
    ///
    /// # Errors
    ///
    /// Returns `Validation`, `Busy` for a permit taken from another adapter,
    /// or the wrapped gateway failure
    pub async fn run_with(
        &self,
        permit: &GatePermit<'_>,
        input: &F::Input,
    ) -> Result<F::Output, AdapterError> {
        if !permit.guards(&self.gate) {
            return Err(AdapterError::Busy { feature: F::NAME });
        }
        let request = Self::prepare(input)?;
        self.execute(input, &request).await
    }

    fn prepare(input: &F::Input) -> Result<AiRequest, AdapterError> {
        F::build_request(input).inspect_err(|e| {
            AppLogger::log_adapter_outcome(F::NAME, false, Some(&e.to_string()));
        })
    }

    async fn execute(
        &self,
        input: &F::Input,
        request: &AiRequest,
    ) -> Result<F::Output, AdapterError> {
        let result = match self.gateway.ask(request).await {
            Ok(response) => F::map_response(input, response),
            Err(e) => Err(AdapterError::Gateway(e)),
        };

        match &result {
            Ok(_) => AppLogger::log_adapter_outcome(F::NAME, true, None),
            Err(e) => AppLogger::log_adapter_outcome(F::NAME, false, Some(&e.to_string())),
        }
        result
    }
}

impl<F> Debug for FeatureAdapter<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FeatureAdapter")
            .field("feature", &std::any::type_name::<F>())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

/// What a feature's display area shows after a request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Presentation<T> {
    /// Successful result
    Ready {
        /// Display model
        data: T,
    },
    /// User-visible failure message
    Failed {
        /// Message for the display area
        message: String,
    },
}

impl<T> Presentation<T> {
    /// Convert an adapter result; errors become their user message
    #[must_use]
    pub fn from_result(result: Result<T, AdapterError>) -> Self {
        match result {
            Ok(data) => Self::Ready { data },
            Err(error) => Self::Failed {
                message: error.user_message(),
            },
        }
    }

    /// Whether the request succeeded
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Reject blank text input with `message`, returning the trimmed text otherwise
pub(crate) fn require_text<'a>(text: &'a str, message: &str) -> Result<&'a str, AdapterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(AdapterError::validation(message))
    } else {
        Ok(trimmed)
    }
}
