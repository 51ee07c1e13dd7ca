use reefecon_core::models::{ConditionCategory, IndicatorVector, ReefInfo};

use crate::plan::DrawPlan;

/// Category and the indicators it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedCell {
    pub category: ConditionCategory,
    pub indicators: IndicatorVector,
}

/// Classified draws over draw × reef × timestep.
///
/// Storage is draw-major, then reef, then timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionCube {
    reefs: Vec<ReefInfo>,
    years: Vec<i32>,
    plans: Vec<DrawPlan>,
    cells: Vec<ClassifiedCell>,
}

impl ConditionCube {
    pub(crate) fn new(
        reefs: Vec<ReefInfo>,
        years: Vec<i32>,
        plans: Vec<DrawPlan>,
        cells: Vec<ClassifiedCell>,
    ) -> Self {
        debug_assert_eq!(cells.len(), plans.len() * reefs.len() * years.len());
        Self {
            reefs,
            years,
            plans,
            cells,
        }
    }

    pub fn nsims(&self) -> usize {
        self.plans.len()
    }

    pub fn reefs(&self) -> &[ReefInfo] {
        &self.reefs
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn plans(&self) -> &[DrawPlan] {
        &self.plans
    }

    pub fn total_area(&self) -> f64 {
        self.reefs.iter().map(|r| r.area_km2).sum()
    }

    pub fn cell(&self, draw: usize, reef: usize, timestep: usize) -> Option<&ClassifiedCell> {
        if draw >= self.plans.len() || reef >= self.reefs.len() || timestep >= self.years.len() {
            return None;
        }
        self.cells
            .get((draw * self.reefs.len() + reef) * self.years.len() + timestep)
    }

    pub fn category(&self, draw: usize, reef: usize, timestep: usize) -> Option<ConditionCategory> {
        self.cell(draw, reef, timestep).map(|c| c.category)
    }

    /// Categories of one (reef, timestep) across all draws.
    pub fn draws_at(&self, reef: usize, timestep: usize) -> Vec<ConditionCategory> {
        (0..self.nsims())
            .filter_map(|d| self.category(d, reef, timestep))
            .collect()
    }
}
