#![deny(warnings)]

//! Headless CLI: generates the store dataset and plays one full season of
//! weekly events, printing each decision's impact and the closing KPIs.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sim_core::round2;
use sim_engine::{Engine, UnlockBoard};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Args {
    seed: u64,
    choice: String,
    snapshot: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 42,
        choice: "A".to_string(),
        snapshot: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = it.next().and_then(|s| s.parse().ok()) {
                    args.seed = v;
                }
            }
            "--choice" => {
                if let Some(v) = it.next() {
                    args.choice = v;
                }
            }
            "--snapshot" => args.snapshot = it.next(),
            _ => {}
        }
    }
    args
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args();
    info!(seed = args.seed, choice = %args.choice, "starting season run");

    let dataset = sim_datagen::generate_ending_now(args.seed)?;
    let engine = Engine::new()?;
    let board = UnlockBoard::new();
    board.unlock_all();
    let mut state = engine.start(dataset)?;

    let latest = state
        .dataset
        .latest_month()
        .context("generated dataset has no months")?
        .to_string();
    println!(
        "Data OK | months: 12 | items: {} | latest: {}",
        sim_datagen::ITEMS.len(),
        latest
    );

    for week in 2..=7u8 {
        let unlocked = board.snapshot();
        let event = engine.open_event(&state, &unlocked, week)?;
        // Fall back to the first choice when the requested id is absent.
        let choice_id = event
            .choice(&args.choice)
            .map(|c| c.id.clone())
            .unwrap_or_else(|_| event.choices[0].id.clone());
        let title = event.title.clone();
        let decision = engine.confirm_choice(&mut state, &unlocked, week, &choice_id)?;
        println!("{title}");
        println!(
            "  choice {} | qty {:+} | revenue {:+} ({:+}%) | profit {:+} ({:+}%)",
            choice_id,
            decision.impact.sales_quantity,
            decision.impact.sales_revenue,
            decision.impact.revenue_percent,
            decision.impact.profit,
            decision.impact.profit_percent
        );
        println!("  {}", decision.narrative);
    }

    let totals = state.dataset.latest_totals();
    let gross_margin_pct = if totals.sales_revenue == Decimal::ZERO {
        Decimal::ZERO
    } else {
        round2(
            (totals.sales_revenue - totals.cogs) / totals.sales_revenue * Decimal::ONE_HUNDRED,
        )
    };
    println!(
        "KPI ({latest}) | revenue: ${} | profit: ${} | GM: {}% | inventory: {} | marketing: ${}",
        totals.sales_revenue,
        totals.profit,
        gross_margin_pct,
        totals.inventory_quantity,
        totals.marketing_dollars
    );

    if let Some(path) = args.snapshot {
        std::fs::write(&path, state.to_json()?)
            .with_context(|| format!("writing snapshot to {path}"))?;
        info!(path = %path, "session snapshot written");
    }

    Ok(())
}
