use serde::{Deserialize, Serialize};
use std::fmt;

use super::InterventionId;

/// The two spreadsheet cost models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostStage {
    Production,
    Deployment,
}

impl CostStage {
    pub const ALL: [CostStage; 2] = [Self::Production, Self::Deployment];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Deployment => "deployment",
        }
    }
}

impl fmt::Display for CostStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw figures returned by one cost-model evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostEstimate {
    /// CAPEX-relevant setup cost.
    pub setup: f64,
    /// OPEX-relevant operational cost.
    pub operational: f64,
}

impl std::ops::Add for CostEstimate {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            setup: self.setup + rhs.setup,
            operational: self.operational + rhs.operational,
        }
    }
}

/// The 11 cost codes reported to the economics model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    Capex = 1,
    ContingencyCapex = 2,
    Opex = 3,
    SustainingCapitalOpex = 4,
    ContingencyOpex = 5,
    VesselFuel = 6,
    CapexMonitoring = 7,
    ContingencyCapexMonitoring = 8,
    OpexMonitoring = 9,
    SustainingCapitalOpexMonitoring = 10,
    ContingencyOpexMonitoring = 11,
}

impl CostComponent {
    pub const ALL: [CostComponent; 11] = [
        Self::Capex,
        Self::ContingencyCapex,
        Self::Opex,
        Self::SustainingCapitalOpex,
        Self::ContingencyOpex,
        Self::VesselFuel,
        Self::CapexMonitoring,
        Self::ContingencyCapexMonitoring,
        Self::OpexMonitoring,
        Self::SustainingCapitalOpexMonitoring,
        Self::ContingencyOpexMonitoring,
    ];

    /// Components currently zero by policy.
    pub const ZERO_BY_POLICY: [CostComponent; 5] = [
        Self::SustainingCapitalOpex,
        Self::VesselFuel,
        Self::CapexMonitoring,
        Self::OpexMonitoring,
        Self::SustainingCapitalOpexMonitoring,
    ];

    /// Numeric cost code, 1 to 11.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_zero_by_policy(self) -> bool {
        Self::ZERO_BY_POLICY.contains(&self)
    }
}

/// One (component, year) row with a value per draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummaryRow {
    pub component: CostComponent,
    pub year: i32,
    /// Reefs intervened on that year.
    pub reefs: Vec<String>,
    /// `draw_1 ..= draw_n`, replicate-major.
    pub draws: Vec<f64>,
}

/// Year-by-year, component-by-component cost trajectory of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub intervention: InterventionId,
    pub n_draws: usize,
    pub n_replicates: usize,
    /// Ordered by (year, component) ascending.
    pub rows: Vec<CostSummaryRow>,
}

impl CostSummary {
    pub fn table_name(&self) -> String {
        Self::table_name_for(self.intervention)
    }

    pub fn table_name_for(id: InterventionId) -> String {
        format!("intervention{id}_mc_cost_data")
    }

    pub fn row(&self, year: i32, component: CostComponent) -> Option<&CostSummaryRow> {
        self.rows
            .iter()
            .find(|r| r.year == year && r.component == component)
    }
}
