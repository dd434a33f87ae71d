//! Forecast orchestration.
//!
//! Runs the full pipeline for one request: buffered fetch, trailing window
//! selection, per-request scaling, sequence shaping, model inference and
//! change/statistics computation. When the requested window is short the
//! controller retries once over the entire available series before giving
//! up, and reports which of the three terminal outcomes was reached.

use crate::application::ml::sequence_model::SequenceModel;
use crate::domain::calendar::TradingCalendar;
use crate::domain::change::ChangeSummary;
use crate::domain::errors::ForecastError;
use crate::domain::ports::PriceProvider;
use crate::domain::prediction::Prediction;
use crate::domain::scaling::MinMaxScaler;
use crate::domain::shaping::ModelInput;
use crate::domain::stats::WindowStats;
use crate::domain::window::{FALLBACK_MIN_CLOSES, HistoryWindow, fetch_buffer_days};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

/// One forecast request. `today` comes from the caller's clock so the
/// pipeline itself stays deterministic.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub symbol: String,
    pub window_len: usize,
    pub today: NaiveDate,
    /// Optional target date candidate; defaults to the day after `today`.
    /// Either way it is adjusted to the next business day.
    pub target_candidate: Option<NaiveDate>,
}

/// Successful pipeline output for one window.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub symbol: String,
    pub window: HistoryWindow,
    pub prediction: Prediction,
    pub change: ChangeSummary,
    pub stats: WindowStats,
    pub used_window_len: usize,
    pub model_name: String,
    pub model_sequence_len: usize,
}

/// Terminal outcome of one forecast request.
#[derive(Debug, Clone)]
pub enum ForecastOutcome {
    /// The requested window length was available in full.
    Primary(ForecastReport),
    /// The requested length was short; the entire available series was used.
    Fallback(ForecastReport),
    /// Too little history to forecast at all.
    Failed { available: usize, required: usize },
}

pub struct Forecaster {
    provider: Arc<dyn PriceProvider>,
    model: Arc<dyn SequenceModel>,
    calendar: Arc<dyn TradingCalendar>,
}

impl Forecaster {
    pub fn new(
        provider: Arc<dyn PriceProvider>,
        model: Arc<dyn SequenceModel>,
        calendar: Arc<dyn TradingCalendar>,
    ) -> Self {
        Self {
            provider,
            model,
            calendar,
        }
    }

    pub async fn run(&self, request: &ForecastRequest) -> Result<ForecastOutcome, ForecastError> {
        let candidate = request
            .target_candidate
            .unwrap_or(request.today + Duration::days(1));
        let target_date = self.calendar.next_business_day(candidate);

        // Over-fetch so weekends, holidays and data gaps still leave
        // enough valid closes behind. End is exclusive, one day past today.
        let end = request.today + Duration::days(1);
        let start = end - Duration::days(fetch_buffer_days(request.window_len));

        info!(
            "Forecasting {} close for {}: fetching {} to {} (window {})",
            request.symbol, target_date, start, end, request.window_len
        );

        let series = self
            .provider
            .daily_closes(&request.symbol, start, end)
            .await
            .map_err(|e| ForecastError::DataFetch {
                symbol: request.symbol.clone(),
                reason: format!("{:#}", e),
            })?;

        if series.is_empty() {
            return Err(ForecastError::DataFetch {
                symbol: request.symbol.clone(),
                reason: format!("provider returned no rows between {} and {}", start, end),
            });
        }

        match HistoryWindow::select_trailing(&series, request.window_len) {
            Ok(window) => {
                let report = self.forecast_window(&request.symbol, window, target_date)?;
                Ok(ForecastOutcome::Primary(report))
            }
            Err(ForecastError::InsufficientHistory {
                available,
                required,
            }) if available >= FALLBACK_MIN_CLOSES => {
                warn!(
                    "Only {} of {} requested closes available for {}, using the entire series",
                    available, required, request.symbol
                );
                let window = HistoryWindow::select_all(&series)?;
                let report = self.forecast_window(&request.symbol, window, target_date)?;
                Ok(ForecastOutcome::Fallback(report))
            }
            Err(ForecastError::InsufficientHistory {
                available,
                required,
            }) => {
                warn!(
                    "Only {} valid closes available for {}, {} required; not forecasting",
                    available, request.symbol, required
                );
                Ok(ForecastOutcome::Failed {
                    available,
                    required,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Scale, shape, predict and summarize one selected window.
    fn forecast_window(
        &self,
        symbol: &str,
        window: HistoryWindow,
        target_date: NaiveDate,
    ) -> Result<ForecastReport, ForecastError> {
        let closes = window.closes();

        let scaler = MinMaxScaler::fit(&closes);
        if scaler.is_degenerate() {
            warn!(
                "Constant window for {} ({} closes at {}), scaling to zeros",
                symbol,
                closes.len(),
                window.last_close()
            );
        }

        let scaled = scaler.transform(&closes);
        let input = ModelInput::from_scaled(&scaled, self.model.sequence_len());

        let scaled_output = self.model.predict_scaled(&input)?;
        let prediction = Prediction::from_scaled_output(scaled_output, &scaler, target_date);
        if !prediction.price.is_finite() {
            return Err(ForecastError::ModelInference {
                reason: format!("Non-finite predicted price: {}", prediction.price),
            });
        }

        let change = ChangeSummary::compute(
            window.previous_close(),
            window.last_close(),
            prediction.price,
        );
        let stats = WindowStats::describe(&closes);

        info!(
            "Predicted {} close for {}: {:.2} ({} closes used)",
            symbol,
            target_date,
            prediction.price,
            window.len()
        );

        Ok(ForecastReport {
            symbol: symbol.to_string(),
            used_window_len: window.len(),
            window,
            prediction,
            change,
            stats,
            model_name: self.model.name().to_string(),
            model_sequence_len: self.model.sequence_len(),
        })
    }
}
