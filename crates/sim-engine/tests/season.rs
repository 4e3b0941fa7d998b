//! Full-season integration: generated data driven through all six weekly
//! events, with the unlock board gating progression the way the UI would.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sim_core::{round2, validate_dataset};
use sim_engine::{Engine, EngineError, SimulationState, UnlockBoard};

fn end_of_window() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

#[test]
fn full_season_playthrough() {
    let dataset = sim_datagen::generate(42, end_of_window()).unwrap();
    let engine = Engine::new().unwrap();
    let board = UnlockBoard::new();
    let mut state = engine.start(dataset).unwrap();
    assert_eq!(state.current_week, 1);

    // Nothing is openable until the instructor unlocks.
    assert!(engine
        .unlocked_openable_weeks(&state, &board.snapshot())
        .is_empty());

    board.unlock_all();
    for week in 2..=7u8 {
        let unlocked = board.snapshot();
        let event = engine.open_event(&state, &unlocked, week).unwrap();
        assert_eq!(event.week, week);
        let choice_id = event.choices[0].id.clone();
        let decision = engine
            .confirm_choice(&mut state, &unlocked, week, &choice_id)
            .unwrap();
        assert!(!decision.narrative.is_empty());
        // Derived financials stay consistent after every fold.
        validate_dataset(&state.dataset).unwrap();
        assert_eq!(state.history.len(), state.completed_weeks.len());
    }

    assert_eq!(state.current_week, 7);
    assert_eq!(state.completed_weeks.len(), 6);
    assert_eq!(state.history.len(), 6);

    // The latest month still derives profit from revenue − COGS − marketing.
    for r in &state.dataset.records {
        assert_eq!(
            r.profit,
            round2(r.sales_revenue - r.cogs - r.marketing_dollars)
        );
    }
}

#[test]
fn locked_weeks_reject_confirmation_until_unlocked() {
    let dataset = sim_datagen::generate(7, end_of_window()).unwrap();
    let engine = Engine::new().unwrap();
    let board = UnlockBoard::new();
    let mut state = engine.start(dataset).unwrap();

    let err = engine
        .confirm_choice(&mut state, &board.snapshot(), 3, "A")
        .unwrap_err();
    assert_eq!(err, EngineError::WeekLocked(3));
    assert!(state.completed_weeks.is_empty());

    board.set_week(3, true);
    engine
        .confirm_choice(&mut state, &board.snapshot(), 3, "A")
        .unwrap();
    assert!(state.completed_weeks.contains(&3));
}

#[test]
fn snapshot_survives_mid_season_reload() {
    let dataset = sim_datagen::generate(11, end_of_window()).unwrap();
    let engine = Engine::new().unwrap();
    let board = UnlockBoard::new();
    board.unlock_all();
    let mut state = engine.start(dataset).unwrap();

    let unlocked = board.snapshot();
    engine.confirm_choice(&mut state, &unlocked, 2, "B").unwrap();
    engine.annotate_last_entry(&mut state, "Good call");

    // The UI persists and reloads the snapshot verbatim between requests.
    let reloaded = SimulationState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, state);
    assert_eq!(reloaded.history[0].instructor_notes, "Good call");

    let mut resumed = reloaded;
    engine.confirm_choice(&mut resumed, &unlocked, 4, "C").unwrap();
    assert_eq!(resumed.history.len(), 2);
    assert_eq!(resumed.current_week, 4);
}

#[test]
fn impact_deltas_reconcile_with_dataset_totals() {
    let dataset = sim_datagen::generate(99, end_of_window()).unwrap();
    let engine = Engine::new().unwrap();
    let board = UnlockBoard::new();
    board.unlock_all();
    let mut state = engine.start(dataset).unwrap();

    let before = state.dataset.latest_totals();
    let decision = engine
        .confirm_choice(&mut state, &board.snapshot(), 2, "A")
        .unwrap();
    let after = state.dataset.latest_totals();

    assert_eq!(
        decision.impact.sales_quantity,
        after.sales_quantity as i64 - before.sales_quantity as i64
    );
    assert_eq!(
        decision.impact.profit,
        round2(after.profit - before.profit)
    );
    if before.sales_revenue != Decimal::ZERO {
        assert_eq!(
            decision.impact.revenue_percent,
            round2(
                (after.sales_revenue - before.sales_revenue) / before.sales_revenue
                    * Decimal::ONE_HUNDRED
            )
        );
    }
}
