#![deny(warnings)]

//! Transform library: the deterministic per-week dataset adjustments.
//!
//! Every transform is a pure function `(Dataset) -> TransformOutcome` that
//! applies category/item-scoped multiplicative knobs to the latest month's
//! rows only and reports a before/after impact summary. Transforms are looked
//! up by name through an explicit registry; the engine verifies at startup
//! that every name the event catalog declares resolves here.

use rust_decimal::Decimal;
use sim_core::{round2, round_quantity, Dataset, ImpactSummary, Record, UnitBasis};
use std::collections::BTreeMap;
use thiserror::Error;

mod weekly;

/// Multiplicative/additive knobs applied to the rows a scope selects.
///
/// Unspecified knobs default to identity, so transforms spell out only the
/// levers they pull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    /// Quantity multiplier; result rounds to the nearest whole unit.
    pub qty_mult: Decimal,
    /// Unit selling price multiplier.
    pub price_mult: Decimal,
    /// Unit cost multiplier.
    pub cost_mult: Decimal,
    /// Additive inventory percentage; result rounds to the nearest whole
    /// unit, floored at zero.
    pub inv_delta_pct: Decimal,
    /// Marketing spend multiplier.
    pub mkt_mult: Decimal,
}

impl Adjustment {
    pub const IDENTITY: Adjustment = Adjustment {
        qty_mult: Decimal::ONE,
        price_mult: Decimal::ONE,
        cost_mult: Decimal::ONE,
        inv_delta_pct: Decimal::ZERO,
        mkt_mult: Decimal::ONE,
    };
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Boolean row predicate selecting which latest-month rows an adjustment
/// touches. Complement variants let a transform treat affected and
/// non-affected rows with different parameter sets without overlap.
#[derive(Clone, Debug)]
pub enum Scope {
    /// Every row in the latest month.
    All,
    /// Rows whose category is in the list.
    Categories(&'static [&'static str]),
    /// Rows whose category is not in the list.
    NotCategories(&'static [&'static str]),
    /// Rows whose item is in the set (e.g. top-N by quantity).
    Items(Vec<String>),
    /// Rows whose item is not in the set.
    NotItems(Vec<String>),
}

impl Scope {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Scope::All => true,
            Scope::Categories(cats) => cats.contains(&record.category.as_str()),
            Scope::NotCategories(cats) => !cats.contains(&record.category.as_str()),
            Scope::Items(items) => items.iter().any(|i| i == &record.item),
            Scope::NotItems(items) => !items.iter().any(|i| i == &record.item),
        }
    }
}

/// Apply one scoped adjustment to the latest month of a dataset.
///
/// Unit price/cost are derived per row with a dataset-wide median fallback
/// computed once per invocation. Mutation order is fixed for reproducibility:
/// quantity → price/cost → marketing → inventory → revenue/COGS → profit,
/// with currency rounded to 2 decimal places and quantities to whole units.
/// Rows outside the latest month, and unselected latest-month rows, come back
/// byte-for-byte unchanged. Empty datasets and empty selections are no-ops.
pub fn apply_on_latest(dataset: &Dataset, scope: &Scope, adj: &Adjustment) -> Dataset {
    let Some(latest) = dataset.latest_month().map(str::to_string) else {
        return dataset.clone();
    };
    let basis = UnitBasis::of(dataset);
    let records = dataset
        .records
        .iter()
        .map(|r| {
            if r.month != latest || !scope.matches(r) {
                return r.clone();
            }
            let price = basis.unit_price(r) * adj.price_mult;
            let cost = basis.unit_cost(r) * adj.cost_mult;
            let mut out = r.clone();
            out.sales_quantity = round_quantity(Decimal::from(r.sales_quantity) * adj.qty_mult);
            out.marketing_dollars = round2(r.marketing_dollars * adj.mkt_mult);
            out.inventory_quantity = round_quantity(
                Decimal::from(r.inventory_quantity) * (Decimal::ONE + adj.inv_delta_pct),
            );
            let qty = Decimal::from(out.sales_quantity);
            out.sales_revenue = round2(qty * price);
            out.cogs = round2(qty * cost);
            out.profit = round2(out.sales_revenue - out.cogs - out.marketing_dollars);
            out
        })
        .collect();
    Dataset { records }
}

/// The top `n` items by latest-month sales quantity, ties broken by item
/// name for determinism.
pub fn top_items_by_quantity(dataset: &Dataset, n: usize) -> Vec<String> {
    let Some(latest) = dataset.latest_month() else {
        return Vec::new();
    };
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for r in dataset.rows_matching(|r| r.month == latest) {
        *totals.entry(r.item.as_str()).or_default() += r.sales_quantity;
    }
    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(n)
        .map(|(item, _)| item.to_string())
        .collect()
}

/// Result of one transform: the advanced dataset, the latest-month impact,
/// and a fixed narrative describing the trade-off.
#[derive(Clone, Debug)]
pub struct TransformOutcome {
    pub dataset: Dataset,
    pub impact: ImpactSummary,
    pub narrative: &'static str,
}

/// A transform is a deterministic pure function over the dataset.
pub type TransformFn = fn(&Dataset) -> TransformOutcome;

/// Errors for transform lookups.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// Name not in the registry. For a name sourced from the event catalog
    /// this indicates a catalog/library mismatch, caught at startup.
    #[error("unknown transform: {0}")]
    Unknown(String),
}

/// Explicit mapping from transform name to implementation, populated once at
/// load time. No naming-convention scanning.
#[derive(Clone, Debug)]
pub struct TransformRegistry {
    transforms: BTreeMap<&'static str, TransformFn>,
}

impl TransformRegistry {
    /// The 18 built-in weekly transforms.
    pub fn builtin() -> Self {
        TransformRegistry {
            transforms: weekly::register(),
        }
    }

    /// Resolve a transform by name.
    pub fn get(&self, name: &str) -> Result<TransformFn, TransformError> {
        self.transforms
            .get(name)
            .copied()
            .ok_or_else(|| TransformError::Unknown(name.to_string()))
    }

    /// Check that every given name resolves; used to fail fast at startup
    /// instead of at confirmation time.
    pub fn verify<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), TransformError> {
        for name in names {
            self.get(name)?;
        }
        Ok(())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.transforms.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sim_core::{validate_dataset, MonthTotals};

    fn record(
        month: &str,
        item: &str,
        category: &str,
        qty: u64,
        price_cents: i64,
        inventory: u64,
        marketing_cents: i64,
    ) -> Record {
        let revenue = round2(Decimal::from(qty) * Decimal::new(price_cents, 2));
        let cogs = round2(revenue * Decimal::new(5, 1));
        let marketing = Decimal::new(marketing_cents, 2);
        Record {
            month: month.to_string(),
            item: item.to_string(),
            category: category.to_string(),
            sales_quantity: qty,
            sales_revenue: revenue,
            cogs,
            profit: round2(revenue - cogs - marketing),
            inventory_quantity: inventory,
            marketing_dollars: marketing,
        }
    }

    /// Two months, latest "2025-06" with Tops totaling exactly 1000 units.
    fn scenario_dataset() -> Dataset {
        Dataset {
            records: vec![
                record("2025-05", "T-Shirts", "Tops", 500, 1_800, 200, 10_000),
                record("2025-05", "Jeans", "Bottoms", 300, 5_500, 150, 12_000),
                record("2025-06", "T-Shirts", "Tops", 600, 1_800, 200, 10_000),
                record("2025-06", "Hoodies", "Tops", 400, 4_800, 100, 8_000),
                record("2025-06", "Jeans", "Bottoms", 250, 5_500, 150, 12_000),
            ],
        }
    }

    #[test]
    fn expedite_scenario_matches_expected_deltas() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        let transform = registry.get("w2_A_expedite_40").unwrap();
        let out = transform(&d);

        let tops_qty: u64 = out
            .dataset
            .rows_matching(|r| r.month == "2025-06" && r.category == "Tops")
            .map(|r| r.sales_quantity)
            .sum();
        assert_eq!(tops_qty, 1_080); // round(1000 × 1.08)
        assert_eq!(out.impact.sales_quantity, 80);

        // All earlier months byte-for-byte unchanged.
        let before: Vec<_> = d
            .rows_matching(|r| r.month != "2025-06")
            .cloned()
            .collect();
        let after: Vec<_> = out
            .dataset
            .rows_matching(|r| r.month != "2025-06")
            .cloned()
            .collect();
        assert_eq!(before, after);

        // Unscoped latest-month rows untouched as well.
        let jeans = out
            .dataset
            .rows_matching(|r| r.month == "2025-06" && r.item == "Jeans")
            .next()
            .unwrap();
        assert_eq!(jeans, &d.records[4]);
    }

    #[test]
    fn transforms_keep_profit_derivation_consistent() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        for name in registry.names().collect::<Vec<_>>() {
            let out = (registry.get(name).unwrap())(&d);
            assert!(
                validate_dataset(&out.dataset).is_ok(),
                "transform {name} broke an invariant"
            );
        }
    }

    #[test]
    fn transforms_never_touch_older_months() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        let history: Vec<_> = d.rows_matching(|r| r.month != "2025-06").cloned().collect();
        for name in registry.names().collect::<Vec<_>>() {
            let out = (registry.get(name).unwrap())(&d);
            let after: Vec<_> = out
                .dataset
                .rows_matching(|r| r.month != "2025-06")
                .cloned()
                .collect();
            assert_eq!(history, after, "transform {name} mutated history");
        }
    }

    #[test]
    fn transforms_are_deterministic() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        for name in registry.names().collect::<Vec<_>>() {
            let transform = registry.get(name).unwrap();
            let a = transform(&d);
            let b = transform(&d);
            assert_eq!(a.dataset, b.dataset, "transform {name} is not deterministic");
            assert_eq!(a.impact, b.impact);
        }
    }

    #[test]
    fn transforms_on_empty_dataset_are_noops() {
        let registry = TransformRegistry::builtin();
        for name in registry.names().collect::<Vec<_>>() {
            let out = (registry.get(name).unwrap())(&Dataset::default());
            assert!(out.dataset.is_empty());
            assert_eq!(out.impact, ImpactSummary::default());
        }
    }

    #[test]
    fn profit_percent_is_zero_on_zero_baseline() {
        // Latest-month profit total is exactly 0: revenue 100, cogs 50,
        // marketing 50 per row.
        let mut d = Dataset {
            records: vec![record("2025-06", "T-Shirts", "Tops", 100, 100, 50, 5_000)],
        };
        d.records[0].profit = Decimal::ZERO;
        assert_eq!(d.latest_totals().profit, Decimal::ZERO);
        let registry = TransformRegistry::builtin();
        let out = (registry.get("w2_A_expedite_40").unwrap())(&d);
        assert_eq!(out.impact.profit_percent, Decimal::ZERO);
    }

    #[test]
    fn markdown_shift_applies_two_disjoint_scopes() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        let out = (registry.get("w2_B_shift_demand_markdown").unwrap())(&d);

        // Tops shrink by 10%, each row adjusted exactly once.
        let tshirts = out
            .dataset
            .rows_matching(|r| r.month == "2025-06" && r.item == "T-Shirts")
            .next()
            .unwrap();
        assert_eq!(tshirts.sales_quantity, 540); // round(600 × 0.90)

        // Non-Tops grow 6% with a 5% markdown on unit price.
        let jeans = out
            .dataset
            .rows_matching(|r| r.month == "2025-06" && r.item == "Jeans")
            .next()
            .unwrap();
        assert_eq!(jeans.sales_quantity, 265); // round(250 × 1.06)
        let unit_price = jeans.sales_revenue / Decimal::from(jeans.sales_quantity);
        assert_eq!(round2(unit_price), Decimal::new(5_225, 2)); // 55.00 × 0.95
    }

    #[test]
    fn prioritize_top_splits_items_without_overlap() {
        let d = scenario_dataset();
        let top = top_items_by_quantity(&d, 3);
        assert_eq!(top, vec!["T-Shirts", "Hoodies", "Jeans"]);

        let registry = TransformRegistry::builtin();
        let out = (registry.get("w6_B_prioritize_top").unwrap())(&d);
        // Only 3 items exist, so every latest row lands in the "top" scope.
        let tshirts = out
            .dataset
            .rows_matching(|r| r.month == "2025-06" && r.item == "T-Shirts")
            .next()
            .unwrap();
        assert_eq!(tshirts.sales_quantity, 630); // round(600 × 1.05)
    }

    #[test]
    fn top_items_ranking_breaks_ties_by_name() {
        let d = Dataset {
            records: vec![
                record("2025-06", "Shoes", "Footwear", 100, 7_500, 50, 1_000),
                record("2025-06", "Dresses", "Dresses", 100, 7_000, 50, 1_000),
                record("2025-06", "Jeans", "Bottoms", 50, 5_500, 50, 1_000),
            ],
        };
        assert_eq!(top_items_by_quantity(&d, 2), vec!["Dresses", "Shoes"]);
    }

    #[test]
    fn inventory_is_floored_at_zero() {
        let d = Dataset {
            records: vec![record("2025-06", "T-Shirts", "Tops", 10, 1_800, 0, 1_000)],
        };
        let adj = Adjustment {
            inv_delta_pct: Decimal::new(-12, 2),
            ..Adjustment::IDENTITY
        };
        let out = apply_on_latest(&d, &Scope::All, &adj);
        assert_eq!(out.records[0].inventory_quantity, 0);
    }

    #[test]
    fn unknown_transform_is_rejected() {
        let registry = TransformRegistry::builtin();
        assert_eq!(
            registry.get("w9_time_travel").unwrap_err(),
            TransformError::Unknown("w9_time_travel".to_string())
        );
    }

    #[test]
    fn registry_resolves_every_catalog_transform() {
        let registry = TransformRegistry::builtin();
        let catalog = sim_events::EventCatalog::builtin();
        registry.verify(catalog.transform_names()).unwrap();
        // And nothing dangles the other way: all 18 names are declared.
        let declared: std::collections::BTreeSet<_> = catalog.transform_names().collect();
        for name in registry.names().collect::<Vec<_>>() {
            assert!(declared.contains(name), "{name} not declared by any choice");
        }
    }

    #[test]
    fn empty_selection_is_a_noop() {
        let d = scenario_dataset();
        let adj = Adjustment {
            qty_mult: Decimal::new(2, 0),
            ..Adjustment::IDENTITY
        };
        let out = apply_on_latest(&d, &Scope::Categories(&["Swimwear"]), &adj);
        assert_eq!(out, d);
    }

    proptest! {
        #[test]
        fn scoped_adjustments_preserve_invariants(qty in 0u64..5_000, inv in 0u64..2_000) {
            let d = Dataset {
                records: vec![
                    record("2025-05", "T-Shirts", "Tops", qty, 1_800, inv, 5_000),
                    record("2025-06", "T-Shirts", "Tops", qty, 1_800, inv, 5_000),
                ],
            };
            let adj = Adjustment {
                qty_mult: Decimal::new(108, 2),
                cost_mult: Decimal::new(103, 2),
                inv_delta_pct: Decimal::new(5, 2),
                ..Adjustment::IDENTITY
            };
            let out = apply_on_latest(&d, &Scope::Categories(&["Tops"]), &adj);
            prop_assert!(validate_dataset(&out).is_ok());
            // The earlier month never moves, whatever the inputs.
            prop_assert_eq!(&out.records[0], &d.records[0]);
        }
    }

    #[test]
    fn impact_totals_match_column_sums() {
        let d = scenario_dataset();
        let registry = TransformRegistry::builtin();
        let out = (registry.get("w4_B_clearance").unwrap())(&d);
        let before: MonthTotals = d.latest_totals();
        let after: MonthTotals = out.dataset.latest_totals();
        assert_eq!(
            out.impact.sales_revenue,
            round2(after.sales_revenue - before.sales_revenue)
        );
        assert_eq!(out.impact.profit, round2(after.profit - before.profit));
    }
}
