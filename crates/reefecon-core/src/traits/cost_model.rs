use std::collections::BTreeMap;

use crate::errors::CostError;
use crate::models::{CostEstimate, CostStage};

/// Parameter name to value, as written into the spreadsheet input cells.
pub type ParameterSet = BTreeMap<String, f64>;

/// Pure evaluator wrapping a spreadsheet cost model.
///
/// Sheet/cell coordinates live in `CostConfig`; implementations map
/// parameter names onto cells and read back the setup and operational
/// cost outputs.
pub trait ICostModel: Send + Sync {
    fn evaluate(&self, stage: CostStage, parameters: &ParameterSet)
        -> Result<CostEstimate, CostError>;
}
