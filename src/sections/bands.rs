//! Score-to-colour bands. Lower bounds are inclusive and apply to the
//! rounded percentage shown next to the colour.

use crate::model::{FreshnessStatus, Metric, TrafficTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Green,
    Blue,
    Orange,
    Red,
    Gray,
}

impl Band {
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Green => "band-green",
            Self::Blue => "band-blue",
            Self::Orange => "band-orange",
            Self::Red => "band-red",
            Self::Gray => "band-gray",
        }
    }
}

fn by_thresholds(score: Metric, green: f64, blue: f64, orange: f64) -> Band {
    let score = f64::from(score.percent());
    if score >= green {
        Band::Green
    } else if score >= blue {
        Band::Blue
    } else if score >= orange {
        Band::Orange
    } else {
        Band::Red
    }
}

pub fn seo_grade(grade: &str) -> Band {
    match grade.trim().chars().next() {
        Some('A') => Band::Green,
        Some('B') => Band::Blue,
        Some('C') => Band::Orange,
        _ => Band::Red,
    }
}

pub fn seo_overall(score: Metric) -> Band {
    by_thresholds(score, 85.0, 70.0, 50.0)
}

pub fn freshness_status(status: &FreshnessStatus) -> Band {
    match status {
        FreshnessStatus::VeryFresh | FreshnessStatus::Fresh => Band::Green,
        FreshnessStatus::Recent => Band::Blue,
        FreshnessStatus::Moderate => Band::Orange,
        FreshnessStatus::Aging | FreshnessStatus::Outdated => Band::Red,
        FreshnessStatus::Other(_) => Band::Gray,
    }
}

pub fn freshness_score(score: Metric) -> Band {
    by_thresholds(score, 90.0, 75.0, 60.0)
}

pub fn traffic_tier(tier: &TrafficTier) -> Band {
    match tier {
        TrafficTier::High => Band::Green,
        TrafficTier::Medium => Band::Orange,
        TrafficTier::Low(_) => Band::Blue,
    }
}
