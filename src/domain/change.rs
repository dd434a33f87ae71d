use std::fmt;

/// Sign of a price move. Strict comparison, no epsilon band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Flat => write!(f, "Flat"),
        }
    }
}

/// Day-over-day and prediction-vs-last change figures for one window.
#[derive(Debug, Clone, Copy)]
pub struct ChangeSummary {
    pub prev_delta: f64,
    pub prev_percent: f64,
    pub prev_direction: Direction,
    pub pred_delta: f64,
    pub pred_percent: f64,
    pub pred_direction: Direction,
}

impl ChangeSummary {
    /// `previous` is the close before `last`, absent for single-entry
    /// windows; `predicted` is the model's price for the target date.
    /// Zero denominators report a 0.0 percentage instead of dividing.
    pub fn compute(previous: Option<f64>, last: f64, predicted: f64) -> Self {
        let (prev_delta, prev_percent) = match previous {
            Some(prev) => {
                let delta = last - prev;
                let percent = if prev == 0.0 { 0.0 } else { delta / prev * 100.0 };
                (delta, percent)
            }
            None => (0.0, 0.0),
        };

        let pred_delta = predicted - last;
        let pred_percent = if last == 0.0 {
            0.0
        } else {
            pred_delta / last * 100.0
        };

        Self {
            prev_delta,
            prev_percent,
            prev_direction: Direction::of(prev_delta),
            pred_delta,
            pred_percent,
            pred_direction: Direction::of(pred_delta),
        }
    }
}
