#![allow(clippy::float_cmp)]

use super::*;
use crate::store::MemoryStore;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Construction ---

#[test]
fn new_state_has_zero_totals() {
    let state = CampaignState::new(3);
    assert_eq!(state.total_raised(), 0);
    assert_eq!(state.donors_count(), 0);
}

#[test]
fn new_state_preselects_default_pledge() {
    let state = CampaignState::new(3);
    assert_eq!(state.selected_amount(), DEFAULT_PLEDGE);
}

#[test]
fn new_state_starts_at_first_testimonial() {
    let state = CampaignState::new(3);
    assert_eq!(state.testimonial_index(), 0);
    assert_eq!(state.testimonial_count(), 3);
}

// --- load ---

#[test]
fn load_from_empty_store_yields_zeros() {
    let store = MemoryStore::new();
    let state = CampaignState::load(&store, 3);
    assert_eq!(state.total_raised(), 0);
    assert_eq!(state.donors_count(), 0);
}

#[test]
fn load_restores_persisted_totals() {
    let store = MemoryStore::new();
    store.seed("totalRaised", "12000");
    store.seed("donorsCount", "3");
    let state = CampaignState::load(&store, 3);
    assert_eq!(state.total_raised(), 12_000);
    assert_eq!(state.donors_count(), 3);
}

#[test]
fn load_treats_corrupt_values_as_unset() {
    let store = MemoryStore::new();
    store.seed("totalRaised", "not a number");
    store.seed("donorsCount", "-5");
    let state = CampaignState::load(&store, 3);
    assert_eq!(state.total_raised(), 0);
    assert_eq!(state.donors_count(), 0);
}

#[test]
fn load_round_trips_through_record_donation() {
    let store = MemoryStore::new();
    let mut state = CampaignState::load(&store, 3);
    state
        .record_donation(12_000, &store)
        .expect("positive amount");
    state.record_donation(500, &store).expect("positive amount");
    state.record_donation(500, &store).expect("positive amount");

    let reloaded = CampaignState::load(&store, 3);
    assert_eq!(reloaded.total_raised(), 13_000);
    assert_eq!(reloaded.donors_count(), 3);
}

// --- select_amount ---

#[test]
fn select_amount_updates_pledge() {
    let mut state = CampaignState::new(3);
    state.select_amount(2_500);
    assert_eq!(state.selected_amount(), 2_500);
}

#[test]
fn select_amount_zero_is_the_no_selection_sentinel() {
    let mut state = CampaignState::new(3);
    state.select_amount(0);
    assert_eq!(state.selected_amount(), 0);
}

// --- record_donation ---

#[test]
fn donation_adds_exact_amount_and_one_donor() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    let result = state.record_donation(750, &store).expect("positive amount");
    assert_eq!(result.amount, 750);
    assert_eq!(state.total_raised(), 750);
    assert_eq!(state.donors_count(), 1);
}

#[test]
fn zero_donation_is_rejected_without_side_effects() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    let result = state.record_donation(0, &store);
    assert_eq!(result, Err(DonationError::InvalidAmount));
    assert_eq!(state.total_raised(), 0);
    assert_eq!(state.donors_count(), 0);
    assert_eq!(store.read("totalRaised"), None);
}

#[test]
fn donation_persists_both_fields() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(1_000, &store).expect("positive amount");
    assert_eq!(store.read("totalRaised").as_deref(), Some("1000"));
    assert_eq!(store.read("donorsCount").as_deref(), Some("1"));
}

#[test]
fn donation_survives_a_failing_store() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);
    let mut state = CampaignState::new(3);
    let result = state
        .record_donation(1_000, &store)
        .expect("persistence failure is non-fatal");
    assert_eq!(result.total_raised, 1_000);
    assert_eq!(state.total_raised(), 1_000);
    assert_eq!(state.donors_count(), 1);
    assert_eq!(store.read("totalRaised"), None);
}

#[test]
fn goal_reached_fires_on_the_crossing_donation() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(49_000, &store).expect("positive amount");

    let crossing = state.record_donation(2_000, &store).expect("positive amount");
    assert!(crossing.goal_reached);
    assert_eq!(crossing.total_raised, 51_000);
}

#[test]
fn goal_reached_does_not_fire_past_the_goal() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(49_000, &store).expect("positive amount");
    state.record_donation(2_000, &store).expect("positive amount");

    let after = state.record_donation(100, &store).expect("positive amount");
    assert!(!after.goal_reached);
}

#[test]
fn goal_reached_fires_on_exact_hit() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    let result = state
        .record_donation(TARGET_AMOUNT, &store)
        .expect("positive amount");
    assert!(result.goal_reached);
    assert_eq!(result.remaining_amount, 0);
}

// --- progress ---

#[test]
fn progress_is_zero_before_any_donation() {
    let state = CampaignState::new(3);
    let p = state.progress();
    assert!(approx_eq(p.percentage_complete, 0.0));
    assert_eq!(p.remaining_amount, TARGET_AMOUNT);
    assert_eq!(p.donors_count, 0);
}

#[test]
fn progress_halfway() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(25_000, &store).expect("positive amount");
    let p = state.progress();
    assert!(approx_eq(p.percentage_complete, 50.0));
    assert_eq!(p.remaining_amount, 25_000);
}

#[test]
fn percentage_clamps_at_one_hundred() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(75_000, &store).expect("positive amount");
    let p = state.progress();
    assert!(approx_eq(p.percentage_complete, 100.0));
}

#[test]
fn remaining_amount_never_goes_negative() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(75_000, &store).expect("positive amount");
    assert_eq!(state.progress().remaining_amount, 0);
}

#[test]
fn progress_is_idempotent() {
    let store = MemoryStore::new();
    let mut state = CampaignState::new(3);
    state.record_donation(7_300, &store).expect("positive amount");
    let first = state.progress();
    let second = state.progress();
    let third = state.progress();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

// --- Testimonial cursor ---

#[test]
fn next_wraps_from_last_to_first() {
    let mut state = CampaignState::new(3);
    state.set_testimonial(2);
    assert_eq!(state.advance_testimonial(Direction::Next), 0);
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut state = CampaignState::new(3);
    assert_eq!(state.advance_testimonial(Direction::Previous), 2);
}

#[test]
fn next_then_previous_returns_to_start() {
    let mut state = CampaignState::new(5);
    state.advance_testimonial(Direction::Next);
    state.advance_testimonial(Direction::Previous);
    assert_eq!(state.testimonial_index(), 0);
}

#[test]
fn full_cycle_returns_to_start() {
    let mut state = CampaignState::new(3);
    for _ in 0..3 {
        state.advance_testimonial(Direction::Next);
    }
    assert_eq!(state.testimonial_index(), 0);
}

#[test]
fn empty_carousel_navigation_is_a_no_op() {
    let mut state = CampaignState::new(0);
    assert_eq!(state.advance_testimonial(Direction::Next), 0);
    assert_eq!(state.advance_testimonial(Direction::Previous), 0);
    assert_eq!(state.set_testimonial(7), 0);
}

#[test]
fn set_testimonial_wraps_out_of_range_index() {
    let mut state = CampaignState::new(3);
    assert_eq!(state.set_testimonial(1), 1);
    assert_eq!(state.set_testimonial(4), 1);
}
