use thiserror::Error;

use crate::farm::{Crop, EnvironmentalReading, Planting, PlantingGroup};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("crop '{crop}' has no sensitivity entry for {factor} level '{level}'")]
    InvalidLevel {
        crop: String,
        factor: String,
        level: String,
    },
    #[error("crop '{crop}': {field} must be a non-negative number, got {value}")]
    InvalidQuantity {
        crop: String,
        field: &'static str,
        value: f64,
    },
}

/// Combines a crop's sensitivities with an environmental reading into a
/// single yield multiplier. Factors the crop is insensitive to contribute
/// nothing; a matched factor whose observed level the crop does not define
/// is an error rather than a silent NaN.
pub fn adjustment_factor(crop: &Crop, reading: &EnvironmentalReading) -> Result<f64, CalcError> {
    let mut factor = 1.0;
    for (name, level) in reading {
        let Some(levels) = crop.sensitivities.get(name) else {
            continue;
        };
        let adjustment = levels.get(level).ok_or_else(|| CalcError::InvalidLevel {
            crop: crop.name.clone(),
            factor: name.clone(),
            level: level.clone(),
        })?;
        factor *= (100.0 + adjustment) / 100.0;
    }
    Ok(factor)
}

/// Yield of a single plant. Without a reading the base yield stands as is.
pub fn yield_per_plant(
    crop: &Crop,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    match reading {
        None => Ok(crop.base_yield),
        Some(reading) => Ok(crop.base_yield * adjustment_factor(crop, reading)?),
    }
}

pub fn yield_for_planting(
    planting: &Planting,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    Ok(yield_per_plant(&planting.crop, reading)? * planting.count as f64)
}

pub fn total_yield(
    group: &PlantingGroup,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    let mut total = 0.0;
    for planting in group.iter() {
        total += yield_for_planting(planting, reading)?;
    }
    Ok(total)
}

/// Cost is fixed per plant; the environment never changes it. A crop without
/// a cost counts as free.
pub fn cost_for_planting(planting: &Planting) -> f64 {
    planting.crop.cost.unwrap_or(0.0) * planting.count as f64
}

pub fn revenue_for_planting(
    planting: &Planting,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    let sale_price = planting.crop.sale_price.unwrap_or(0.0);
    Ok(yield_for_planting(planting, reading)? * sale_price)
}

pub fn profit_for_planting(
    planting: &Planting,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    Ok(revenue_for_planting(planting, reading)? - cost_for_planting(planting))
}

pub fn total_profit(
    group: &PlantingGroup,
    reading: Option<&EnvironmentalReading>,
) -> Result<f64, CalcError> {
    let mut total = 0.0;
    for planting in group.iter() {
        total += profit_for_planting(planting, reading)?;
    }
    Ok(total)
}

/// Boundary check: the economics of a crop are non-negative by definition.
pub fn validate_crop(crop: &Crop) -> Result<(), CalcError> {
    check_non_negative(crop, "base_yield", crop.base_yield)?;
    if let Some(cost) = crop.cost {
        check_non_negative(crop, "cost", cost)?;
    }
    if let Some(sale_price) = crop.sale_price {
        check_non_negative(crop, "sale_price", sale_price)?;
    }
    Ok(())
}

pub fn validate_group(group: &PlantingGroup) -> Result<(), CalcError> {
    for planting in group.iter() {
        validate_crop(&planting.crop)?;
    }
    Ok(())
}

fn check_non_negative(crop: &Crop, field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidQuantity {
            crop: crop.name.clone(),
            field,
            value,
        })
    }
}
