// ABOUTME: Weekly intake aggregation and nutrient deficiency detection
// ABOUTME: Body-weight scaled targets feeding the meal suggestion request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deficiency analysis
//!
//! Macro targets scale with body weight (protein 1.6 g/kg, carbohydrate
//! 3 g/kg, fat 0.8 g/kg); fiber, sugar and the tracked micronutrients use
//! fixed general-adult baselines. A week of logged intake is averaged per day
//! and every nutrient below target becomes a [`Deficiency`].

use ate_core::constants::limits::DEFAULT_BODY_WEIGHT_KG;
use ate_core::constants::scoring::{DAYS_PER_WEEK, MAX_DEFICIENCIES};
use ate_core::models::{Deficiency, Nutrient, NutrientSet};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Protein target per kg of body weight (g)
const PROTEIN_G_PER_KG: f64 = 1.6;
/// Carbohydrate target per kg of body weight (g)
const CARBS_G_PER_KG: f64 = 3.0;
/// Fat target per kg of body weight (g)
const FAT_G_PER_KG: f64 = 0.8;

/// Fixed daily baselines in the order they are reported
const FIXED_TARGETS: [(Nutrient, f64); 12] = [
    (Nutrient::Fiber, 25.0),
    (Nutrient::Sugar, 50.0),
    (Nutrient::Calcium, 1000.0),
    (Nutrient::Iron, 18.0),
    (Nutrient::Magnesium, 420.0),
    (Nutrient::Potassium, 3500.0),
    (Nutrient::VitaminC, 90.0),
    (Nutrient::VitaminD, 20.0),
    (Nutrient::VitaminB12, 2.4),
    (Nutrient::Folate, 400.0),
    (Nutrient::VitaminA, 900.0),
    (Nutrient::VitaminK, 120.0),
];

/// Daily nutrient targets for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTargets {
    targets: Vec<(Nutrient, f64)>,
}

impl NutrientTargets {
    /// Targets for a body weight in kg; missing or non-positive weights use the default
    #[must_use]
    pub fn for_body_weight(weight_kg: Option<f64>) -> Self {
        let weight = weight_kg
            .filter(|kg| kg.is_finite() && *kg > 0.0)
            .unwrap_or(DEFAULT_BODY_WEIGHT_KG);
        let mut targets = vec![
            (Nutrient::Protein, weight * PROTEIN_G_PER_KG),
            (Nutrient::Carbs, weight * CARBS_G_PER_KG),
            (Nutrient::Fat, weight * FAT_G_PER_KG),
        ];
        targets.extend(FIXED_TARGETS);
        Self { targets }
    }

    /// Target for `nutrient`, if tracked
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.targets
            .iter()
            .find(|(tracked, _)| *tracked == nutrient)
            .map(|(_, target)| *target)
    }

    /// Tracked `(nutrient, target)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.targets.iter().copied()
    }
}

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeEntry {
    /// When the meal was eaten
    pub date: DateTime<Utc>,
    /// Nutrients of the whole meal
    pub total_nutrients: NutrientSet,
}

/// Intake summed over a 7-day window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyIntake {
    /// Window start, inclusive
    pub start: DateTime<Utc>,
    /// Window end, exclusive
    pub end: DateTime<Utc>,
    /// Number of entries in the window
    pub meal_count: usize,
    /// Summed nutrients
    pub nutrients: NutrientSet,
}

/// Sum entries falling in the week ending `weeks_back` weeks before `now`
///
/// Returns `None` when no entry falls in the window.
#[must_use]
pub fn weekly_intake(
    entries: &[IntakeEntry],
    now: DateTime<Utc>,
    weeks_back: u32,
) -> Option<WeeklyIntake> {
    let end = now - Duration::weeks(i64::from(weeks_back));
    let start = end - Duration::weeks(1);

    let in_window: Vec<&IntakeEntry> = entries
        .iter()
        .filter(|entry| entry.date >= start && entry.date < end)
        .collect();
    if in_window.is_empty() {
        return None;
    }

    Some(WeeklyIntake {
        start,
        end,
        meal_count: in_window.len(),
        nutrients: in_window.iter().map(|entry| &entry.total_nutrients).sum(),
    })
}

/// Nutrients whose daily average falls below target, largest deficit first
#[must_use]
pub fn find_deficiencies(weekly: &NutrientSet, targets: &NutrientTargets) -> Vec<Deficiency> {
    let mut deficiencies: Vec<Deficiency> = targets
        .iter()
        .filter_map(|(nutrient, target)| {
            let daily = weekly.get(nutrient) / DAYS_PER_WEEK;
            (daily < target).then(|| Deficiency::new(nutrient, daily, target))
        })
        .collect();
    deficiencies.sort_by(|a, b| b.deficit.total_cmp(&a.deficit));
    deficiencies.truncate(MAX_DEFICIENCIES);
    deficiencies
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::unwrap_used)]

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_targets_scale_with_weight() {
        let targets = NutrientTargets::for_body_weight(Some(80.0));
        assert_eq!(targets.get(Nutrient::Protein), Some(128.0));
        assert_eq!(targets.get(Nutrient::Carbs), Some(240.0));
        assert_eq!(targets.get(Nutrient::Fiber), Some(25.0));
        assert_eq!(targets.get(Nutrient::Sodium), None);
    }

    #[test]
    fn test_missing_weight_uses_default() {
        let defaulted = NutrientTargets::for_body_weight(None);
        assert_eq!(defaulted, NutrientTargets::for_body_weight(Some(-3.0)));
        assert_eq!(defaulted.get(Nutrient::Fat), Some(56.0));
    }

    #[test]
    fn test_weekly_window_bounds() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        let entry = |days_ago: i64, protein: f64| IntakeEntry {
            date: now - Duration::days(days_ago),
            total_nutrients: NutrientSet {
                protein,
                ..NutrientSet::default()
            },
        };
        let entries = vec![entry(1, 10.0), entry(6, 20.0), entry(7, 40.0), entry(9, 80.0)];

        let this_week = weekly_intake(&entries, now, 0).unwrap();
        assert_eq!(this_week.meal_count, 3);
        assert_eq!(this_week.nutrients.protein, 70.0);

        let last_week = weekly_intake(&entries, now, 1).unwrap();
        assert_eq!(last_week.meal_count, 1);
        assert!(weekly_intake(&entries, now, 3).is_none());
    }

    #[test]
    fn test_deficiencies_sorted_and_capped() {
        let weekly = NutrientSet {
            protein: 7.0 * 200.0,
            ..NutrientSet::default()
        };
        let targets = NutrientTargets::for_body_weight(Some(70.0));
        let deficiencies = find_deficiencies(&weekly, &targets);

        assert_eq!(deficiencies.len(), MAX_DEFICIENCIES);
        assert_eq!(deficiencies[0].nutrient, "potassium");
        assert!(deficiencies.iter().all(|d| d.nutrient != "protein"));
        assert!(deficiencies
            .windows(2)
            .all(|pair| pair[0].deficit >= pair[1].deficit));
    }
}
