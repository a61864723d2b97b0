pub mod calc;
pub mod farm;
pub mod plan;
pub mod report;

pub use calc::CalcError;
pub use farm::{Crop, EnvironmentalReading, Planting, PlantingGroup, SensitivityTable};
pub use plan::{FarmPlan, PlanLoader};
pub use report::FarmReport;
