use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::calc;
use crate::farm::{Crop, EnvironmentalReading, Planting, PlantingGroup};

#[derive(Debug, Clone, Deserialize)]
pub struct FarmPlan {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub crops: Vec<Crop>,
    #[serde(default)]
    pub plantings: Vec<PlanPlanting>,
    #[serde(default)]
    pub environment: Option<EnvironmentalReading>,
}

/// A planting line in a plan file references its crop by name so several
/// plantings can share one crop definition.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanPlanting {
    pub crop: String,
    pub count: u32,
}

pub struct PlanLoader {
    base_dir: PathBuf,
}

impl PlanLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<FarmPlan> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        let plan = FarmPlan::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(plan)
    }
}

impl FarmPlan {
    pub fn from_str(text: &str) -> Result<Self> {
        let plan: FarmPlan = serde_yaml::from_str(text)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        let mut known_crops: Vec<&str> = Vec::new();
        for crop in &self.crops {
            if known_crops.contains(&crop.name.as_str()) {
                bail!("crop '{}' defined more than once", crop.name);
            }
            known_crops.push(&crop.name);
            calc::validate_crop(crop)?;
        }
        for planting in &self.plantings {
            if !known_crops.contains(&planting.crop.as_str()) {
                bail!("planting references unknown crop '{}'", planting.crop);
            }
        }
        Ok(())
    }

    pub fn build_group(&self) -> PlantingGroup {
        let mut group = PlantingGroup::default();
        for planting in &self.plantings {
            // validate() guarantees the crop exists.
            if let Some(crop) = self.crops.iter().find(|c| c.name == planting.crop) {
                group.push(Planting {
                    crop: crop.clone(),
                    count: planting.count,
                });
            }
        }
        group
    }

    pub fn environment(&self) -> Option<&EnvironmentalReading> {
        self.environment.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"
name: test_field
crops:
  - name: corn
    base_yield: 3
    cost: 3
    sale_price: 2
    sensitivities:
      sun: { low: -50, medium: 0, high: 50 }
plantings:
  - crop: corn
    count: 5
environment:
  sun: low
"#;

    #[test]
    fn plan_parses_from_yaml() {
        let plan = FarmPlan::from_str(PLAN).expect("plan parses");
        assert_eq!(plan.name, "test_field");
        assert_eq!(plan.crops.len(), 1);
        assert_eq!(plan.plantings.len(), 1);
        let env = plan.environment().expect("environment present");
        assert_eq!(env.get("sun").map(String::as_str), Some("low"));
    }

    #[test]
    fn build_group_clones_crop_per_planting() {
        let plan = FarmPlan::from_str(PLAN).unwrap();
        let group = plan.build_group();
        assert_eq!(group.len(), 1);
        assert_eq!(group.plantings[0].crop.name, "corn");
        assert_eq!(group.plantings[0].count, 5);
    }

    #[test]
    fn duplicate_crop_names_are_rejected() {
        let text = r#"
name: bad
crops:
  - name: corn
    base_yield: 3
  - name: corn
    base_yield: 4
"#;
        let err = FarmPlan::from_str(text).unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn unknown_crop_reference_is_rejected() {
        let text = r#"
name: bad
crops:
  - name: corn
    base_yield: 3
plantings:
  - crop: pumpkin
    count: 2
"#;
        let err = FarmPlan::from_str(text).unwrap_err();
        assert!(err.to_string().contains("unknown crop"));
    }

    #[test]
    fn negative_economics_are_rejected_at_load() {
        let text = r#"
name: bad
crops:
  - name: corn
    base_yield: -3
"#;
        assert!(FarmPlan::from_str(text).is_err());
    }

    #[test]
    fn environment_and_economics_are_optional() {
        let text = r#"
name: sparse
crops:
  - name: corn
    base_yield: 3
plantings:
  - crop: corn
    count: 0
"#;
        let plan = FarmPlan::from_str(text).unwrap();
        assert!(plan.environment().is_none());
        assert!(plan.crops[0].cost.is_none());
        assert!(plan.crops[0].sale_price.is_none());
    }
}
