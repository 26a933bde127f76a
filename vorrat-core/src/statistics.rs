//! Household savings statistics.
//!
//! Tracks what adding items to the inventory saves over time: item count,
//! estimated money and CO₂, a daily activity streak, and the extended
//! per-product breakdowns (nutrition, eco-score, NOVA group, categories,
//! monthly trend). Serde layouts match the statistics documents the app
//! already stores, so these types load and persist them directly.

use crate::types::ProductInfo;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Estimated money saved per item kept from spoiling.
pub const SAVED_MONEY_PER_ITEM: f64 = 2.5;

/// Estimated kg CO₂ saved per item.
pub const CO2_SAVED_PER_ITEM: f64 = 0.5;

/// German month abbreviations used by the monthly trend.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// How [`BasicStats::advance_streak`] changed the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First recorded activity.
    Started,
    /// Already active today.
    Unchanged,
    /// Active yesterday as well, streak grew by one.
    Extended,
    /// Gap since the last activity, streak restarted at one.
    Reset,
}

/// The always-available statistics counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicStats {
    pub saved_items: u32,
    pub saved_money: f64,
    pub co2_saved: f64,
    pub streak_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<NaiveDate>,
}

impl BasicStats {
    /// Count one added item.
    pub fn record_item(&mut self) {
        self.saved_items += 1;
        self.saved_money += SAVED_MONEY_PER_ITEM;
        self.co2_saved += CO2_SAVED_PER_ITEM;
    }

    /// Advance the daily activity streak for activity on `today`.
    ///
    /// A second activity on the same day is a no-op, consecutive days grow
    /// the streak, anything else restarts it at one.
    pub fn advance_streak(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_activity {
            None => {
                self.streak_days = 1;
                StreakChange::Started
            }
            Some(last) if last == today => StreakChange::Unchanged,
            Some(last) if (today - last).num_days() == 1 => {
                self.streak_days += 1;
                StreakChange::Extended
            }
            Some(_) => {
                self.streak_days = 1;
                StreakChange::Reset
            }
        };
        self.last_activity = Some(today);
        change
    }
}

/// Summed per-100g nutrition values across added products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sugar: f64,
    pub salt: f64,
}

/// Eco grade counts across added products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EcoScoreCounts {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub unknown: u32,
}

/// NOVA processing group counts across added products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NovaGroupCounts {
    pub group1: u32,
    pub group2: u32,
    pub group3: u32,
    pub group4: u32,
    pub unknown: u32,
}

/// One month of the savings trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    pub month: String,
    pub saved_items: u32,
    pub saved_money: f64,
}

/// The extended per-product breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedStats {
    pub nutrition_stats: NutritionTotals,
    pub eco_score: EcoScoreCounts,
    pub nova_groups: NovaGroupCounts,
    pub categories: HashMap<String, u32>,
    pub monthly_trend: Vec<MonthEntry>,
}

impl Default for ExtendedStats {
    fn default() -> Self {
        ExtendedStats {
            nutrition_stats: NutritionTotals::default(),
            eco_score: EcoScoreCounts::default(),
            nova_groups: NovaGroupCounts::default(),
            categories: HashMap::new(),
            monthly_trend: MONTH_NAMES
                .iter()
                .map(|&month| MonthEntry {
                    month: month.to_string(),
                    saved_items: 0,
                    saved_money: 0.0,
                })
                .collect(),
        }
    }
}

impl ExtendedStats {
    /// Fold one added item into the breakdowns.
    ///
    /// Products without an eco grade or NOVA group count as unknown; an
    /// empty category label is not counted.
    pub fn record_item(
        &mut self,
        category: &str,
        product_info: Option<&ProductInfo>,
        today: NaiveDate,
    ) {
        if let Some(facts) = product_info.map(|p| &p.nutrition_facts) {
            if let Some(v) = facts.energy_100g {
                self.nutrition_stats.calories += v;
            }
            if let Some(v) = facts.proteins_100g {
                self.nutrition_stats.protein += v;
            }
            if let Some(v) = facts.carbohydrates_100g {
                self.nutrition_stats.carbs += v;
            }
            if let Some(v) = facts.fat_100g {
                self.nutrition_stats.fat += v;
            }
            if let Some(v) = facts.sugars_100g {
                self.nutrition_stats.sugar += v;
            }
            if let Some(v) = facts.salt_100g {
                self.nutrition_stats.salt += v;
            }
        }

        match product_info
            .and_then(|p| p.eco_score.as_deref())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("a") => self.eco_score.a += 1,
            Some("b") => self.eco_score.b += 1,
            Some("c") => self.eco_score.c += 1,
            Some("d") => self.eco_score.d += 1,
            Some("e") => self.eco_score.e += 1,
            _ => self.eco_score.unknown += 1,
        }

        match product_info.and_then(|p| p.nova_group) {
            Some(1) => self.nova_groups.group1 += 1,
            Some(2) => self.nova_groups.group2 += 1,
            Some(3) => self.nova_groups.group3 += 1,
            Some(4) => self.nova_groups.group4 += 1,
            _ => self.nova_groups.unknown += 1,
        }

        if !category.is_empty() {
            *self.categories.entry(category.to_string()).or_insert(0) += 1;
        }

        let month = MONTH_NAMES[today.month0() as usize];
        if let Some(entry) = self
            .monthly_trend
            .iter_mut()
            .find(|entry| entry.month == month)
        {
            entry.saved_items += 1;
            entry.saved_money += SAVED_MONEY_PER_ITEM;
        }
    }
}
