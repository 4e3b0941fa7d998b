//! The 18 built-in weekly transforms (3 choices × weeks 2..7).
//!
//! Parameter sets mirror the scenario design: each function selects a scope,
//! pulls a few knobs, and returns a fixed narrative describing the trade-off.
//! Narratives are canned copy, not computed from the numbers.

use crate::{apply_on_latest, top_items_by_quantity, Adjustment, Scope, TransformFn, TransformOutcome};
use rust_decimal::Decimal;
use sim_core::{Dataset, ImpactSummary};
use std::collections::BTreeMap;

const TOPS: &[&str] = &["Tops"];
const BOTTOMS: &[&str] = &["Bottoms"];
const COTTON: &[&str] = &["Tops", "Bottoms"];
const PROMO_OVERLAP: &[&str] = &["Tops", "Bottoms", "Accessories"];
const PREMIUM: &[&str] = &["Outerwear", "Footwear", "Dresses"];
const TAIL: &[&str] = &["Accessories"];

fn dec(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

/// One scoped adjustment with an impact computed against the pre-transform
/// latest month.
fn scoped(
    dataset: &Dataset,
    scope: Scope,
    adj: Adjustment,
    narrative: &'static str,
) -> TransformOutcome {
    let before = dataset.latest_totals();
    let out = apply_on_latest(dataset, &scope, &adj);
    let impact = ImpactSummary::between(&before, &out.latest_totals());
    TransformOutcome {
        dataset: out,
        impact,
        narrative,
    }
}

/// Two disjoint scoped adjustments applied in sequence over the same latest
/// month; the impact still compares against the original baseline.
fn two_phase(
    dataset: &Dataset,
    first: (Scope, Adjustment),
    second: (Scope, Adjustment),
    narrative: &'static str,
) -> TransformOutcome {
    let before = dataset.latest_totals();
    let mid = apply_on_latest(dataset, &first.0, &first.1);
    let out = apply_on_latest(&mid, &second.0, &second.1);
    let impact = ImpactSummary::between(&before, &out.latest_totals());
    TransformOutcome {
        dataset: out,
        impact,
        narrative,
    }
}

// Week 2: supplier delay on Tops.

fn w2_a_expedite_40(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(TOPS),
        Adjustment {
            qty_mult: dec(108, 2),
            cost_mult: dec(103, 2),
            inv_delta_pct: dec(5, 2),
            ..Adjustment::IDENTITY
        },
        "You protected Tops availability via expedited freight, but incurred higher unit costs.",
    )
}

fn w2_b_shift_demand_markdown(d: &Dataset) -> TransformOutcome {
    two_phase(
        d,
        (
            Scope::Categories(TOPS),
            Adjustment {
                qty_mult: dec(90, 2),
                ..Adjustment::IDENTITY
            },
        ),
        (
            Scope::NotCategories(TOPS),
            Adjustment {
                qty_mult: dec(106, 2),
                price_mult: dec(95, 2),
                inv_delta_pct: dec(-4, 2),
                ..Adjustment::IDENTITY
            },
        ),
        "You shifted demand using markdowns; margin compression offset some volume gains.",
    )
}

fn w2_c_partial_substitute(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(TOPS),
        Adjustment {
            qty_mult: dec(103, 2),
            cost_mult: dec(108, 2),
            inv_delta_pct: dec(-2, 2),
            ..Adjustment::IDENTITY
        },
        "Alternate supplier improved availability slightly at a higher cost; watch quality/returns.",
    )
}

// Week 3: heat wave on Bottoms.

fn w3_a_boost_demand_ads(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(BOTTOMS),
        Adjustment {
            qty_mult: dec(110, 2),
            mkt_mult: dec(120, 2),
            inv_delta_pct: dec(-3, 2),
            ..Adjustment::IDENTITY
        },
        "Advertising captured the heat-wave demand for Shorts; higher marketing spend trimmed profit.",
    )
}

fn w3_b_limit_per_customer(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(BOTTOMS),
        Adjustment {
            qty_mult: dec(95, 2),
            inv_delta_pct: dec(4, 2),
            ..Adjustment::IDENTITY
        },
        "Purchase limits protected availability but reduced overall units sold slightly.",
    )
}

fn w3_c_crossdock(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(BOTTOMS),
        Adjustment {
            qty_mult: dec(106, 2),
            cost_mult: dec(101, 2),
            inv_delta_pct: dec(-5, 2),
            ..Adjustment::IDENTITY
        },
        "Cross-docking matched supply to demand; minor cost, improved sell-through.",
    )
}

// Week 4: quality returns on a Tops batch.

fn w4_a_rework_quality(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(TOPS),
        Adjustment {
            cost_mult: dec(102, 2),
            inv_delta_pct: dec(-2, 2),
            ..Adjustment::IDENTITY
        },
        "Quality rework contained the issue and protected brand equity with minor cost impact.",
    )
}

fn w4_b_clearance(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(TOPS),
        Adjustment {
            price_mult: dec(80, 2),
            qty_mult: dec(112, 2),
            inv_delta_pct: dec(-12, 2),
            ..Adjustment::IDENTITY
        },
        "Clearance moved affected inventory quickly but at a steep margin cost.",
    )
}

fn w4_c_credit_pause(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(TOPS),
        Adjustment {
            cost_mult: dec(95, 2),
            qty_mult: dec(94, 2),
            inv_delta_pct: dec(-6, 2),
            ..Adjustment::IDENTITY
        },
        "You recovered some costs via supplier credit but reduced available assortment temporarily.",
    )
}

// Week 5: cotton cost spike on Tops and Bottoms.

fn w5_a_hedge(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(COTTON),
        Adjustment {
            cost_mult: dec(106, 2),
            mkt_mult: dec(105, 2),
            ..Adjustment::IDENTITY
        },
        "Hedging reduced cost volatility with a modest fee; profit impact is buffered.",
    )
}

fn w5_b_price_up(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(COTTON),
        Adjustment {
            price_mult: dec(1028, 3),
            qty_mult: dec(97, 2),
            inv_delta_pct: dec(2, 2),
            ..Adjustment::IDENTITY
        },
        "Pricing action protected GM$ with a small demand contraction.",
    )
}

fn w5_c_blend_substitute(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(COTTON),
        Adjustment {
            cost_mult: dec(103, 2),
            qty_mult: dec(99, 2),
            inv_delta_pct: dec(-1, 2),
            ..Adjustment::IDENTITY
        },
        "Material substitution contained costs with minimal demand impact.",
    )
}

// Week 6: DC labor shortage, whole latest month.

fn w6_a_temp_staff(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::All,
        Adjustment {
            qty_mult: dec(102, 2),
            mkt_mult: dec(104, 2),
            inv_delta_pct: dec(-2, 2),
            ..Adjustment::IDENTITY
        },
        "Temporary staffing improved service levels at a modest cost.",
    )
}

fn w6_b_prioritize_top(d: &Dataset) -> TransformOutcome {
    let top = top_items_by_quantity(d, 3);
    two_phase(
        d,
        (
            Scope::Items(top.clone()),
            Adjustment {
                qty_mult: dec(105, 2),
                inv_delta_pct: dec(-3, 2),
                ..Adjustment::IDENTITY
            },
        ),
        (
            Scope::NotItems(top),
            Adjustment {
                qty_mult: dec(97, 2),
                inv_delta_pct: dec(2, 2),
                ..Adjustment::IDENTITY
            },
        ),
        "You focused capacity on top items; tail performance softened slightly.",
    )
}

fn w6_c_dropship(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::All,
        Adjustment {
            qty_mult: dec(102, 2),
            cost_mult: dec(1015, 3),
            ..Adjustment::IDENTITY
        },
        "Drop-ship reduced DC load and improved speed for a subset, with slightly higher cost.",
    )
}

// Week 7: competitor promotion.

fn w7_a_counter_promo(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::Categories(PROMO_OVERLAP),
        Adjustment {
            price_mult: dec(95, 2),
            qty_mult: dec(108, 2),
            inv_delta_pct: dec(-5, 2),
            mkt_mult: dec(105, 2),
            ..Adjustment::IDENTITY
        },
        "Counter-promo defended share with a trade-off in margin percentage.",
    )
}

fn w7_b_differentiate(d: &Dataset) -> TransformOutcome {
    two_phase(
        d,
        (
            Scope::Categories(PREMIUM),
            Adjustment {
                price_mult: dec(106, 2),
                qty_mult: dec(98, 2),
                ..Adjustment::IDENTITY
            },
        ),
        (
            Scope::Categories(TAIL),
            Adjustment {
                inv_delta_pct: dec(-10, 2),
                qty_mult: dec(98, 2),
                ..Adjustment::IDENTITY
            },
        ),
        "Assortment focused on premium; GM$ stabilized despite softer units.",
    )
}

fn w7_c_experience_led(d: &Dataset) -> TransformOutcome {
    scoped(
        d,
        Scope::All,
        Adjustment {
            qty_mult: dec(104, 2),
            mkt_mult: dec(108, 2),
            inv_delta_pct: dec(-3, 2),
            ..Adjustment::IDENTITY
        },
        "Experience strategy grew traffic with limited discounting; benefits may compound over time.",
    )
}

pub(crate) fn register() -> BTreeMap<&'static str, TransformFn> {
    let mut map: BTreeMap<&'static str, TransformFn> = BTreeMap::new();
    map.insert("w2_A_expedite_40", w2_a_expedite_40 as TransformFn);
    map.insert("w2_B_shift_demand_markdown", w2_b_shift_demand_markdown);
    map.insert("w2_C_partial_substitute", w2_c_partial_substitute);
    map.insert("w3_A_boost_demand_ads", w3_a_boost_demand_ads);
    map.insert("w3_B_limit_per_customer", w3_b_limit_per_customer);
    map.insert("w3_C_crossdock", w3_c_crossdock);
    map.insert("w4_A_rework_quality", w4_a_rework_quality);
    map.insert("w4_B_clearance", w4_b_clearance);
    map.insert("w4_C_credit_pause", w4_c_credit_pause);
    map.insert("w5_A_hedge", w5_a_hedge);
    map.insert("w5_B_price_up", w5_b_price_up);
    map.insert("w5_C_blend_substitute", w5_c_blend_substitute);
    map.insert("w6_A_temp_staff", w6_a_temp_staff);
    map.insert("w6_B_prioritize_top", w6_b_prioritize_top);
    map.insert("w6_C_dropship", w6_c_dropship);
    map.insert("w7_A_counter_promo", w7_a_counter_promo);
    map.insert("w7_B_differentiate", w7_b_differentiate);
    map.insert("w7_C_experience_led", w7_c_experience_led);
    map
}
