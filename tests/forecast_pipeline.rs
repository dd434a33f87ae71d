use chrono::NaiveDate;
use goldcast::application::forecast::{ForecastOutcome, ForecastRequest, Forecaster};
use goldcast::application::ml::sequence_model::SequenceModel;
use goldcast::domain::calendar::WeekdayCalendar;
use goldcast::domain::change::Direction;
use goldcast::domain::errors::ForecastError;
use goldcast::domain::shaping::{MODEL_SEQUENCE_LEN, ModelInput};
use goldcast::infrastructure::mock::MockPriceProvider;
use std::sync::{Arc, Mutex};

// --- Mocks ---

/// Returns a fixed scaled output and records the shaped input it was given.
struct RecordingModel {
    output: f64,
    seen: Mutex<Option<Vec<f64>>>,
}

impl RecordingModel {
    fn new(output: f64) -> Self {
        Self {
            output,
            seen: Mutex::new(None),
        }
    }

    fn seen(&self) -> Option<Vec<f64>> {
        self.seen.lock().unwrap().clone()
    }
}

impl SequenceModel for RecordingModel {
    fn predict_scaled(&self, input: &ModelInput) -> Result<f64, ForecastError> {
        *self.seen.lock().unwrap() = Some(input.values().to_vec());
        Ok(self.output)
    }

    fn name(&self) -> &str {
        "Recording"
    }

    fn sequence_len(&self) -> usize {
        MODEL_SEQUENCE_LEN
    }
}

// 2024-03-15 is a Friday; the next business day is Monday the 18th.
fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn pipeline(closes: Vec<f64>, output: f64) -> (Forecaster, Arc<RecordingModel>) {
    let model = Arc::new(RecordingModel::new(output));
    let forecaster = Forecaster::new(
        Arc::new(MockPriceProvider::new(closes, friday())),
        model.clone(),
        Arc::new(WeekdayCalendar),
    );
    (forecaster, model)
}

fn request(window_len: usize) -> ForecastRequest {
    ForecastRequest {
        symbol: "GC=F".to_string(),
        window_len,
        today: friday(),
        target_candidate: None,
    }
}

#[tokio::test]
async fn test_seven_close_window_end_to_end() {
    let closes = vec![1900.0, 1905.0, 1903.0, 1910.0, 1908.0, 1912.0, 1915.0];
    let (forecaster, model) = pipeline(closes, 0.5);

    let outcome = forecaster.run(&request(7)).await.unwrap();
    let report = match outcome {
        ForecastOutcome::Primary(report) => report,
        other => panic!("expected primary outcome, got {:?}", other),
    };

    // The window spans [1900, 1915], so a scaled output of 0.5 maps back
    // to the middle of that range.
    assert_eq!(report.used_window_len, 7);
    assert!((report.prediction.price - 1907.5).abs() < 1e-9);
    assert_eq!(
        report.prediction.target_date,
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        "Friday + 1 lands on a weekend, target must roll to Monday"
    );

    // Change against the last close (1915) and the one before it (1912)
    assert!((report.change.prev_delta - 3.0).abs() < 1e-9);
    assert_eq!(report.change.prev_direction, Direction::Up);
    assert!((report.change.pred_delta - (-7.5)).abs() < 1e-9);
    assert_eq!(report.change.pred_direction, Direction::Down);

    assert!((report.stats.mean - 13353.0 / 7.0).abs() < 1e-9);
    assert_eq!(report.stats.min, 1900.0);
    assert_eq!(report.stats.max, 1915.0);

    // Seven scaled closes are left-padded with the earliest value: 23 pad
    // copies plus the earliest close itself, all at the scaled minimum.
    let seen = model.seen().expect("model was never called");
    assert_eq!(seen.len(), MODEL_SEQUENCE_LEN);
    for value in &seen[..24] {
        assert!(value.abs() < 1e-9);
    }
    assert!((seen[24] - 5.0 / 15.0).abs() < 1e-9);
    assert!((seen[29] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_constant_window_predicts_the_constant() {
    let (forecaster, model) = pipeline(vec![2013.5; 9], 0.9);

    let outcome = forecaster.run(&request(7)).await.unwrap();
    let report = match outcome {
        ForecastOutcome::Primary(report) => report,
        other => panic!("expected primary outcome, got {:?}", other),
    };

    // A constant window scales to all zeros and inverts back to the
    // constant, whatever the model emits.
    let seen = model.seen().expect("model was never called");
    assert!(seen.iter().all(|v| v.abs() < 1e-9));
    assert_eq!(report.prediction.price, 2013.5);
    assert_eq!(report.change.prev_direction, Direction::Flat);
    assert_eq!(report.change.pred_direction, Direction::Flat);
    assert_eq!(report.stats.std_dev, 0.0);
}

#[tokio::test]
async fn test_thirty_close_window_uses_most_recent_closes() {
    let closes: Vec<f64> = (0..45).map(|i| 1900.0 + i as f64).collect();
    let (forecaster, model) = pipeline(closes, 0.5);

    let outcome = forecaster.run(&request(30)).await.unwrap();
    let report = match outcome {
        ForecastOutcome::Primary(report) => report,
        other => panic!("expected primary outcome, got {:?}", other),
    };

    // Only the trailing 30 of the 45 fetched closes participate
    assert_eq!(report.used_window_len, 30);
    assert_eq!(report.window.entries()[0].close, 1915.0);
    assert_eq!(report.window.last_close(), 1944.0);

    // Exactly the model length, so no padding: the sequence runs the full
    // scaled range
    let seen = model.seen().expect("model was never called");
    assert_eq!(seen.len(), MODEL_SEQUENCE_LEN);
    assert!(seen[0].abs() < 1e-9);
    assert!((seen[29] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_fallback_pads_the_shorter_series() {
    let closes: Vec<f64> = (0..10).map(|i| 1900.0 + i as f64).collect();
    let (forecaster, model) = pipeline(closes, 0.5);

    let outcome = forecaster.run(&request(30)).await.unwrap();
    let report = match outcome {
        ForecastOutcome::Fallback(report) => report,
        other => panic!("expected fallback outcome, got {:?}", other),
    };

    assert_eq!(report.used_window_len, 10);
    assert!(report.prediction.price.is_finite());

    // Ten closes still reach the model as a full-length sequence
    let seen = model.seen().expect("model was never called");
    assert_eq!(seen.len(), MODEL_SEQUENCE_LEN);
    assert!(seen.iter().take(21).all(|v| v.abs() < 1e-9));
    assert!((seen[29] - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_below_floor_never_calls_the_model() {
    let closes = vec![1900.0, 1901.0, 1902.0, 1903.0, 1904.0];
    let (forecaster, model) = pipeline(closes, 0.5);

    let outcome = forecaster.run(&request(30)).await.unwrap();
    match outcome {
        ForecastOutcome::Failed {
            available,
            required,
        } => {
            assert_eq!(available, 5);
            assert_eq!(required, 30);
        }
        other => panic!("expected failed outcome, got {:?}", other),
    }

    assert!(model.seen().is_none(), "no inference below the history floor");
}

#[tokio::test]
async fn test_saturday_candidate_is_adjusted_forward() {
    let closes: Vec<f64> = (0..40).map(|i| 1900.0 + i as f64).collect();
    let (forecaster, _model) = pipeline(closes, 0.5);

    let mut request = request(30);
    request.target_candidate = NaiveDate::from_ymd_opt(2024, 3, 23); // Saturday

    let outcome = forecaster.run(&request).await.unwrap();
    match outcome {
        ForecastOutcome::Primary(report) => {
            assert_eq!(
                report.prediction.target_date,
                NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
            );
        }
        other => panic!("expected primary outcome, got {:?}", other),
    }
}
