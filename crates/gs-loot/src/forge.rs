//! Item pulls from the tier pools, including the Titan Forge.
//!
//! A pull picks one item uniformly from its tier. Uncommon pulls then get a
//! second, independent roll: on a hit the Titan Forge discards the uncommon
//! item and hands out a uniform pick from the rare pool instead.

use gs_core::{Item, ItemCatalog, ItemTier};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{info, trace, warn};

use crate::error::{LootError, LootResult};

/// Chance that an uncommon pull is upgraded to a rare one.
pub const TITAN_FORGE_CHANCE: f64 = 0.1;

/// The outcome of a single item pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPull {
    /// Tier of the returned item.
    pub tier: ItemTier,
    /// The item the player receives.
    pub item: Item,
    /// The item first drawn from the requested tier. Equal to `item` unless
    /// the Titan Forge replaced it.
    pub rolled: Item,
    /// Whether the Titan Forge upgraded this pull.
    pub upgraded: bool,
}

/// Pull an item from `tier`, reporting what was rolled and whether the
/// Titan Forge stepped in.
///
/// Fails with [`LootError::UnknownTier`] when the catalog has no pool for
/// `tier`. An uncommon upgrade is skipped, with a warning, when the catalog
/// has no rare items.
pub fn roll_item(catalog: &ItemCatalog, tier: ItemTier, rng: &mut StdRng) -> LootResult<ItemPull> {
    let rolled = choose_from(catalog, tier, rng)?.clone();
    trace!(%tier, item = %rolled.name, "rolled item");

    if tier == ItemTier::Uncommon && rng.random_bool(TITAN_FORGE_CHANCE) {
        match choose_from(catalog, ItemTier::Rare, rng) {
            Ok(rare) => {
                info!(
                    discarded = %rolled.name,
                    item = %rare.name,
                    "titan forge upgraded an uncommon item"
                );
                return Ok(ItemPull {
                    tier: ItemTier::Rare,
                    item: rare.clone(),
                    rolled,
                    upgraded: true,
                });
            }
            Err(err) => warn!(%err, "titan forge hit but there is no rare pool"),
        }
    }

    Ok(ItemPull {
        tier,
        item: rolled.clone(),
        rolled,
        upgraded: false,
    })
}

/// Pull an item from `tier` and return only the item received.
pub fn pull_item(catalog: &ItemCatalog, tier: ItemTier, rng: &mut StdRng) -> LootResult<Item> {
    roll_item(catalog, tier, rng).map(|pull| pull.item)
}

/// Like [`pull_item`], with the tier given by name.
///
/// Names match case-insensitively. An unknown tier is reported with the
/// name exactly as given.
pub fn pull_item_named(catalog: &ItemCatalog, tier: &str, rng: &mut StdRng) -> LootResult<Item> {
    let parsed = tier
        .parse::<ItemTier>()
        .map_err(|_| LootError::UnknownTier(tier.to_string()))?;
    pull_item(catalog, parsed, rng).map_err(|err| match err {
        LootError::UnknownTier(_) => LootError::UnknownTier(tier.to_string()),
        other => other,
    })
}

fn choose_from<'a>(
    catalog: &'a ItemCatalog,
    tier: ItemTier,
    rng: &mut StdRng,
) -> LootResult<&'a Item> {
    catalog
        .pool(tier)?
        .choose(rng)
        .ok_or_else(|| LootError::EmptyTier(tier.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn catalog() -> ItemCatalog {
        ItemCatalog::new()
            .with_items(
                ItemTier::Common,
                [Item::new("Stick", "A stick."), Item::new("Stone", "A stone.")],
            )
            .with_items(
                ItemTier::Uncommon,
                [Item::new("Recipe", "Basic."), Item::new("Cards", "A deck.")],
            )
            .with_items(ItemTier::Rare, [Item::new("Sandglass", "Cracked.")])
    }

    #[test]
    fn pulls_come_from_the_requested_pool() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(42);
        let pool = catalog.pool(ItemTier::Common).unwrap();
        for _ in 0..50 {
            let item = pull_item(&catalog, ItemTier::Common, &mut rng).unwrap();
            assert!(pool.contains(&item));
        }
    }

    #[test]
    fn unknown_tier_names_the_tier() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = pull_item(&catalog(), ItemTier::Legendary, &mut rng).unwrap_err();
        assert!(matches!(err, LootError::UnknownTier(ref t) if t == "legendary"));
        assert_eq!(err.to_string(), "unknown tier: legendary");
    }

    #[test]
    fn unknown_tier_name_string() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = pull_item_named(&catalog(), "mythic", &mut rng).unwrap_err();
        assert!(matches!(err, LootError::UnknownTier(ref t) if t == "mythic"));
        assert!(pull_item_named(&catalog(), "rare", &mut rng).is_ok());
    }

    #[test]
    fn unknown_tier_keeps_the_callers_spelling() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = pull_item_named(&catalog(), "Legendary", &mut rng).unwrap_err();
        assert!(matches!(err, LootError::UnknownTier(ref t) if t == "Legendary"));
        let item = pull_item_named(&catalog(), "RARE", &mut rng).unwrap();
        assert_eq!(item.name, "Sandglass");
    }

    #[test]
    fn only_uncommon_upgrades() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let pull = roll_item(&catalog, ItemTier::Common, &mut rng).unwrap();
            assert!(!pull.upgraded);
            assert_eq!(pull.item, pull.rolled);
            let pull = roll_item(&catalog, ItemTier::Rare, &mut rng).unwrap();
            assert!(!pull.upgraded);
        }
    }

    #[test]
    fn upgrades_are_rare_and_keep_the_rolled_item() {
        let catalog = catalog();
        let uncommon = catalog.pool(ItemTier::Uncommon).unwrap();
        let rare = catalog.pool(ItemTier::Rare).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut upgrades = 0;
        for _ in 0..2000 {
            let pull = roll_item(&catalog, ItemTier::Uncommon, &mut rng).unwrap();
            assert!(uncommon.contains(&pull.rolled));
            if pull.upgraded {
                upgrades += 1;
                assert_eq!(pull.tier, ItemTier::Rare);
                assert!(rare.contains(&pull.item));
            } else {
                assert_eq!(pull.tier, ItemTier::Uncommon);
                assert_eq!(pull.item, pull.rolled);
            }
        }
        assert!(upgrades > 0, "titan forge never fired");
    }

    #[test]
    fn missing_rare_pool_skips_the_upgrade() {
        let catalog =
            ItemCatalog::new().with_items(ItemTier::Uncommon, [Item::new("Recipe", "Basic.")]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let pull = roll_item(&catalog, ItemTier::Uncommon, &mut rng).unwrap();
            assert!(!pull.upgraded);
            assert_eq!(pull.item.name, "Recipe");
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let catalog = ItemCatalog::new().with_items(ItemTier::Epic, Vec::<Item>::new());
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            pull_item(&catalog, ItemTier::Epic, &mut rng),
            Err(LootError::EmptyTier(ref t)) if t == "epic"
        ));
    }
}
