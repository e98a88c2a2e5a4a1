use super::crops::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Seed(Species),
    Produce(Species),
}

/// Every item the game knows about, in shop display order: seeds first,
/// then produce.
pub fn all_items() -> Vec<&'static str> {
    let seeds = Species::ALL.iter().map(|s| s.def().seed);
    let produce = Species::ALL.iter().map(|s| s.def().produce);
    seeds.chain(produce).collect()
}

pub fn lookup(item: &str) -> Option<ItemKind> {
    Species::from_seed(item)
        .map(ItemKind::Seed)
        .or_else(|| Species::from_produce(item).map(ItemKind::Produce))
}

pub fn is_known(item: &str) -> bool {
    lookup(item).is_some()
}
