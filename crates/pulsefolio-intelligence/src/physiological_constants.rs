// ABOUTME: Named constants for training stress, load, race prediction, recovery and zones
// ABOUTME: Defaults behind every tunable in IntelligenceConfig plus the fixed EMA windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Physiological constants and engine defaults
//!
//! Several of these values (zone multipliers, risk weights, the LTHR
//! heuristic) are calibrated from observed dashboard behavior rather than a
//! published formula. Each one is a default for a field of
//! [`crate::config::IntelligenceConfig`] and can be tuned there. The EMA
//! windows in [`fitness_load`] are fixed.

/// Training stress estimation
///
/// References:
/// - Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
/// - Coggan, A. & Allen, H. (2010). Training and Racing with a Power Meter
pub mod training_stress {
    /// Points for one hour at a zone multiplier of 1
    ///
    /// One hour in zone 5 scores 100, the conventional "hour at threshold".
    pub const ZONE_HOUR_POINTS: f64 = 20.0;

    /// Zone multiplier assumed for a session at the athlete's usual pace
    pub const BASELINE_ZONE_MULTIPLIER: f64 = 2.0;

    /// Lowest zone multiplier
    pub const MIN_ZONE_MULTIPLIER: f64 = 1.0;

    /// Highest zone multiplier
    pub const MAX_ZONE_MULTIPLIER: f64 = 5.0;

    /// Exponent applied to the speed ratio in the pace fallback
    pub const PACE_INTENSITY_EXPONENT: f64 = 2.0;

    /// Number of previous same-sport activities in the rolling pace average
    pub const ROLLING_PACE_WINDOW: usize = 10;
}

/// Chronic and acute training load
///
/// References:
/// - Banister, E.W. (1991). Modeling elite athletic performance
/// - Gabbett, T.J. (2016). The training-injury prevention paradox
///   <https://bjsm.bmj.com/content/50/5/273>
pub mod fitness_load {
    /// Chronic training load time constant (fitness)
    pub const CTL_TIME_CONSTANT_DAYS: f64 = 42.0;

    /// Acute training load time constant (fatigue)
    pub const ATL_TIME_CONSTANT_DAYS: f64 = 7.0;

    /// TSB strictly above this value means optimal form
    pub const OPTIMAL_FORM_TSB_THRESHOLD: f64 = 10.0;

    /// TSB strictly below this value means high fatigue
    pub const HIGH_FATIGUE_TSB_THRESHOLD: f64 = -10.0;

    /// ACWR above this value is commonly associated with elevated injury risk
    pub const ACWR_HIGH_RISK_THRESHOLD: f64 = 1.5;
}

/// Race time prediction
///
/// References:
/// - Riegel, P.S. (1981). Athletic records and human endurance. American Scientist, 69(3), 285-290
pub mod race_prediction {
    /// Riegel fatigue exponent for running
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Maximum `max/min` ratio between effort and target distance to qualify
    pub const QUALIFYING_DISTANCE_RATIO: f64 = 1.5;

    /// Efforts older than this many days before the latest run are ignored
    pub const RECENT_EFFORT_WINDOW_DAYS: i64 = 90;

    /// Longest accepted effort window (about a century)
    pub const MAX_RECENT_EFFORT_WINDOW_DAYS: i64 = 36_500;

    /// Weight of the distance-match term in the confidence score
    pub const CONFIDENCE_DISTANCE_WEIGHT: f64 = 0.7;

    /// Weight of the sample-size term in the confidence score
    pub const CONFIDENCE_SAMPLE_WEIGHT: f64 = 0.3;

    /// Effort count at which the sample-size term reaches one half
    pub const CONFIDENCE_SAMPLE_HALF_SATURATION: f64 = 2.0;

    /// Gap at or below this percent of the target counts as close
    pub const CLOSE_GOAL_GAP_PERCENT: f64 = 5.0;

    /// Gap at or below this percent of the target counts as reachable
    pub const REACHABLE_GOAL_GAP_PERCENT: f64 = 10.0;
}

/// Injury and overtraining risk
///
/// References:
/// - Gabbett, T.J. (2016). The training-injury prevention paradox
/// - Nielsen, R.O. et al. (2014). Excessive progression in weekly running distance and risk of
///   running-related injuries. JOSPT, 44(10), 739-747
pub mod recovery_risk {
    /// Week-over-week increase tolerated before the 10% rule fires
    pub const WEEKLY_INCREASE_THRESHOLD_PERCENT: f64 = 10.0;
    /// Points per percent of excess weekly increase
    pub const WEEKLY_INCREASE_WEIGHT: f64 = 1.0;
    /// Cap on the weekly-increase contribution
    pub const WEEKLY_INCREASE_CAP: f64 = 45.0;

    /// Excess over the rolling weekly average tolerated
    pub const VOLUME_THRESHOLD_PERCENT: f64 = 15.0;
    /// Points per percent of excess volume
    pub const VOLUME_WEIGHT: f64 = 0.75;
    /// Cap on the volume contribution
    pub const VOLUME_CAP: f64 = 35.0;

    /// Longest effort tolerated as percent of the rolling average longest effort
    pub const LONG_EFFORT_THRESHOLD_PERCENT: f64 = 120.0;
    /// Points per percent of long-effort excess
    pub const LONG_EFFORT_WEIGHT: f64 = 1.0;
    /// Cap on the long-effort contribution
    pub const LONG_EFFORT_CAP: f64 = 20.0;

    /// Scores at or above this value are at least Caution
    pub const CAUTION_SCORE_THRESHOLD: f64 = 40.0;
    /// Scores strictly above this value mean Rest
    pub const REST_SCORE_THRESHOLD: f64 = 70.0;

    /// Recommended recovery at the caution threshold
    pub const MIN_RECOVERY_HOURS: f64 = 12.0;
    /// Recommended recovery at the maximum score
    pub const MAX_RECOVERY_HOURS: f64 = 72.0;

    /// Weeks averaged for the rolling baseline
    pub const ROLLING_WEEKS: i64 = 4;

    /// Highest possible risk score
    pub const MAX_RISK_SCORE: f64 = 100.0;
}

/// Heart rate zones relative to lactate threshold heart rate
///
/// References:
/// - Friel, J. (2009). "The Cyclist's Training Bible" (4th ed.). `VeloPress`.
/// - Seiler, S. (2010). What is best practice for training intensity distribution?
///   <https://www.ncbi.nlm.nih.gov/pmc/articles/PMC2914523/>
pub mod heart_rate {
    /// Lower bounds of zones 1 to 5 as percent of LTHR
    pub const ZONE_LOWER_BOUNDS_PERCENT: [f64; 5] = [50.0, 60.0, 70.0, 80.0, 90.0];

    /// Shortest run considered a threshold-like effort
    pub const THRESHOLD_EFFORT_MIN_MINUTES: f64 = 20.0;
    /// Longest run considered a threshold-like effort
    pub const THRESHOLD_EFFORT_MAX_MINUTES: f64 = 90.0;

    /// LTHR as a fraction of maximum heart rate, used to back out max HR
    pub const LTHR_FRACTION_OF_MAX_HR: f64 = 0.90;

    /// Lowest accepted percentage for the max-HR estimator
    pub const MIN_LTHR_FRACTION: f64 = 0.80;
    /// Highest accepted percentage for the max-HR estimator
    pub const MAX_LTHR_FRACTION: f64 = 0.95;

    /// Lowest physiologically plausible heart rate
    pub const MIN_PHYSIOLOGICAL_HR: f64 = 40.0;
    /// Highest physiologically plausible heart rate
    pub const MAX_PHYSIOLOGICAL_HR: f64 = 220.0;

    /// Zone 2 share below which aerobic base work is recommended
    pub const AEROBIC_BASE_MIN_PERCENT: f64 = 60.0;
    /// Zones 4+5 share above which intensity should come down
    pub const HIGH_INTENSITY_MAX_PERCENT: f64 = 30.0;
}

/// Performance factor correlation
pub mod performance_factors {
    /// Improvement at or above this percent makes a factor notable
    pub const NOTABLE_IMPROVEMENT_PERCENT: f64 = 5.0;

    /// Maximum number of factors named in the headline
    pub const MAX_HEADLINE_FACTORS: usize = 2;

    /// First hour of the morning bucket
    pub const MORNING_START_HOUR: u32 = 5;
    /// First hour of the afternoon bucket
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// First hour of the evening bucket
    pub const EVENING_START_HOUR: u32 = 17;
    /// First hour of the night bucket
    pub const NIGHT_START_HOUR: u32 = 21;

    /// Rest-day counts at or above this value share the last bucket
    pub const MAX_REST_BUCKET_DAYS: i64 = 3;
}
