//! JSON reports summarizing the figures for a farm plan.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::calc::{self, CalcError};
use crate::farm::{EnvironmentalReading, PlantingGroup};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingFigures {
    pub crop: String,
    pub count: u32,
    pub expected_yield: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmReport {
    pub plan: String,
    pub generated_at: String,
    #[serde(default)]
    pub environment: Option<EnvironmentalReading>,
    pub plantings: Vec<PlantingFigures>,
    pub total_yield: f64,
    pub total_profit: f64,
}

impl FarmReport {
    pub fn build(
        plan_name: &str,
        group: &PlantingGroup,
        reading: Option<&EnvironmentalReading>,
    ) -> Result<Self, CalcError> {
        let mut plantings = Vec::with_capacity(group.len());
        for planting in group.iter() {
            plantings.push(PlantingFigures {
                crop: planting.crop.name.clone(),
                count: planting.count,
                expected_yield: calc::yield_for_planting(planting, reading)?,
                cost: calc::cost_for_planting(planting),
                revenue: calc::revenue_for_planting(planting, reading)?,
                profit: calc::profit_for_planting(planting, reading)?,
            });
        }
        Ok(Self {
            plan: plan_name.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            environment: reading.cloned(),
            plantings,
            total_yield: calc::total_yield(group, reading)?,
            total_profit: calc::total_profit(group, reading)?,
        })
    }

    /// Writes the report as `<plan>.json` under `dir`, creating it if needed.
    pub fn write_json(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report dir {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.plan));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(path)
    }
}
