//! A single planted crop and its day-by-day growth.

use crate::data::{DroughtPolicy, GrowthStage, HarvestPolicy, Species, SpeciesDef};
use crate::shared::*;

/// A plant growing on one tile. Its position is the key it is stored
/// under in the farm, not a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    species: Species,
    stage: usize,
    days_in_stage: u8,
    watered_today: bool,
    /// Produce units ready to pick.
    held: u32,
}

impl Plant {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            stage: 0,
            days_in_stage: 0,
            watered_today: false,
            held: 0,
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn def(&self) -> &'static SpeciesDef {
        self.species.def()
    }

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn stage_info(&self) -> &'static GrowthStage {
        &self.def().stages[self.stage]
    }

    /// Display name of the current stage, e.g. "Sprout".
    pub fn stage_name(&self) -> &'static str {
        self.stage_info().name
    }

    pub fn is_watered(&self) -> bool {
        self.watered_today
    }

    pub fn held(&self) -> u32 {
        self.held
    }

    pub fn is_harvestable(&self) -> bool {
        self.stage_info().harvestable && self.held > 0
    }

    /// Idempotent within a day.
    pub fn water(&mut self) {
        self.watered_today = true;
    }

    /// End-of-day growth. Returns true if the plant moved to a new stage.
    pub fn advance_day(&mut self) -> bool {
        let def = self.def();
        let watered = std::mem::take(&mut self.watered_today);

        if !watered {
            if def.drought == DroughtPolicy::ResetProgress {
                self.days_in_stage = 0;
            }
            return false;
        }

        if self.stage >= def.max_stage() {
            return false;
        }

        self.days_in_stage = self.days_in_stage.saturating_add(1);
        if self.days_in_stage < def.stages[self.stage].days {
            return false;
        }

        self.enter_stage(self.stage + 1);
        true
    }

    /// Pick the crop. `None` (and no change) unless the plant is on a
    /// harvestable stage with produce held.
    pub fn harvest(&mut self) -> Option<Harvest> {
        if !self.is_harvestable() {
            return None;
        }
        let def = self.def();
        let quantity = std::mem::take(&mut self.held);

        let remove = match def.harvest {
            HarvestPolicy::Single => true,
            HarvestPolicy::Regrow { stage } => {
                self.enter_stage(stage);
                false
            }
        };

        Some(Harvest {
            item: def.produce.to_string(),
            quantity,
            remove,
        })
    }

    fn enter_stage(&mut self, stage: usize) {
        let def = self.def();
        self.stage = stage.min(def.max_stage());
        self.days_in_stage = 0;
        if def.stages[self.stage].harvestable {
            self.held = def.yield_per_harvest;
        }
    }
}
