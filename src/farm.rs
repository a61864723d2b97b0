use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Factor name -> level name -> percentage yield adjustment.
/// Level sets are open string sets; -50 halves yield, +50 adds half.
pub type SensitivityTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Factor name -> observed level name, e.g. {"sun": "low", "wind": "medium"}.
pub type EnvironmentalReading = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub base_yield: f64,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sensitivities: SensitivityTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planting {
    pub crop: Crop,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantingGroup {
    pub plantings: Vec<Planting>,
}

impl PlantingGroup {
    pub fn new(plantings: Vec<Planting>) -> Self {
        Self { plantings }
    }

    pub fn push(&mut self, planting: Planting) {
        self.plantings.push(planting);
    }

    pub fn len(&self) -> usize {
        self.plantings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plantings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Planting> {
        self.plantings.iter()
    }
}
