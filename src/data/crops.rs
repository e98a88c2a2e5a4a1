/// One row of a species' growth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthStage {
    pub name: &'static str,
    /// Watered days needed in this stage before moving to the next one.
    /// Ignored on the final stage.
    pub days: u8,
    pub harvestable: bool,
}

/// What happens to a plant after it has been harvested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestPolicy {
    /// Used up by the harvest.
    Single,
    /// Drops back to `stage` and grows another crop.
    Regrow { stage: usize },
}

/// What a day without water does to a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroughtPolicy {
    /// Nothing; growth resumes once watered again.
    Stall,
    /// Watered days already counted toward the current stage are lost.
    ResetProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesDef {
    pub name: &'static str,
    pub seed: &'static str,
    pub produce: &'static str,
    pub yield_per_harvest: u32,
    pub stages: &'static [GrowthStage],
    pub harvest: HarvestPolicy,
    pub drought: DroughtPolicy,
}

impl SpeciesDef {
    pub fn max_stage(&self) -> usize {
        self.stages.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Potato,
    Kale,
    Berry,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Potato, Species::Kale, Species::Berry];

    pub fn def(self) -> &'static SpeciesDef {
        match self {
            Species::Potato => &POTATO,
            Species::Kale => &KALE,
            Species::Berry => &BERRY,
        }
    }

    /// The species grown from the given seed item, if it is one.
    pub fn from_seed(item: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.def().seed == item)
    }

    pub fn from_produce(item: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.def().produce == item)
    }
}

// Growth tables. A plant starts at stage 0 and is ready to pick on the
// final, harvestable stage.

static POTATO: SpeciesDef = SpeciesDef {
    name: "Potato",
    seed: "Potato Seed",
    produce: "Potato",
    yield_per_harvest: 1,
    stages: &[
        GrowthStage { name: "Seed", days: 1, harvestable: false },
        GrowthStage { name: "Sprout", days: 1, harvestable: false },
        GrowthStage { name: "Young Potato", days: 2, harvestable: false },
        GrowthStage { name: "Potato", days: 0, harvestable: true },
    ],
    harvest: HarvestPolicy::Single,
    drought: DroughtPolicy::Stall,
};

static KALE: SpeciesDef = SpeciesDef {
    name: "Kale",
    seed: "Kale Seed",
    produce: "Kale",
    yield_per_harvest: 1,
    stages: &[
        GrowthStage { name: "Seed", days: 1, harvestable: false },
        GrowthStage { name: "Sprout", days: 2, harvestable: false },
        GrowthStage { name: "Leafy", days: 2, harvestable: false },
        GrowthStage { name: "Kale", days: 0, harvestable: true },
    ],
    harvest: HarvestPolicy::Single,
    // Kale bolts if it dries out mid-stage.
    drought: DroughtPolicy::ResetProgress,
};

static BERRY: SpeciesDef = SpeciesDef {
    name: "Berry",
    seed: "Berry Seed",
    produce: "Berry",
    yield_per_harvest: 1,
    stages: &[
        GrowthStage { name: "Seed", days: 1, harvestable: false },
        GrowthStage { name: "Sprout", days: 1, harvestable: false },
        GrowthStage { name: "Bush", days: 2, harvestable: false },
        GrowthStage { name: "Flowering", days: 1, harvestable: false },
        GrowthStage { name: "Berries", days: 0, harvestable: true },
    ],
    harvest: HarvestPolicy::Regrow { stage: 3 },
    drought: DroughtPolicy::Stall,
};
