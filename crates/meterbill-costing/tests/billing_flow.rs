//! End-to-end billing flow over the in-memory stores

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use meterbill_common::{BillingError, MeterReadings, Reading};
use meterbill_costing::{
    seed, CostCalculator, InMemoryPlanDirectory, InMemoryReadingStore, ReadingStore,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn seeded_calculator() -> CostCalculator<InMemoryReadingStore, InMemoryPlanDirectory> {
    let (store, directory) = seed::seeded_stores(0, Utc::now());
    CostCalculator::new(Arc::new(store), Arc::new(directory))
}

#[test]
fn test_ingest_then_bill_last_week() {
    let calc = seeded_calculator();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    calc.reading_store()
        .store(MeterReadings::new(
            "smart-meter-3",
            vec![
                Reading::new(now - Duration::days(2), dec!(10.00)),
                Reading::new(now - Duration::days(1), dec!(20.00)),
            ],
        ))
        .unwrap();

    // smart-meter-3 is on the standard plan at 1 per kWh: 15 kW × 24 h
    let cost = calc.calculate_last_week_cost_at("smart-meter-3", now).unwrap();
    assert_eq!(cost, dec!(360.00));
}

#[test]
fn test_recommendation_for_seeded_meter() {
    let (store, directory) = seed::seeded_stores(100, Utc::now());
    let calc = CostCalculator::new(Arc::new(store), Arc::new(directory));

    let ranked = calc
        .recommend_price_plans("smart-meter-0", None)
        .unwrap()
        .unwrap();
    let names: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            seed::STANDARD_PRICE_PLAN_ID,
            seed::RENEWABLES_PRICE_PLAN_ID,
            seed::MOST_EVIL_PRICE_PLAN_ID
        ]
    );
    assert!(ranked.windows(2).all(|pair| pair[0].1 <= pair[1].1));
}

#[test]
fn test_seeded_meter_without_readings() {
    let calc = seeded_calculator();
    assert!(calc.calculate_cost_for_all_plans("smart-meter-0").unwrap().is_none());
    assert_eq!(calc.calculate_last_week_cost("smart-meter-0").unwrap(), Decimal::ZERO);
}

#[test]
fn test_unassigned_meter_fails_once_it_has_data() {
    let calc = seeded_calculator();
    let now = Utc::now();
    calc.reading_store().store_readings(
        "smart-meter-unassigned",
        vec![
            Reading::new(now - Duration::hours(2), dec!(1)),
            Reading::new(now - Duration::hours(1), dec!(1)),
        ],
    );

    let err = calc
        .calculate_last_week_cost("smart-meter-unassigned")
        .unwrap_err();
    assert!(matches!(err, BillingError::NoPlanAssigned { .. }));
}

#[test]
fn test_reassigned_meter_to_missing_plan_fails() {
    let calc = seeded_calculator();
    let now = Utc::now();
    calc.reading_store()
        .store(MeterReadings::new(
            "smart-meter-1",
            vec![
                Reading::new(now - Duration::hours(2), dec!(1)),
                Reading::new(now - Duration::hours(1), dec!(1)),
            ],
        ))
        .unwrap();
    calc.plan_directory().assign("smart-meter-1", "price-plan-retired");

    let err = calc.calculate_last_week_cost("smart-meter-1").unwrap_err();
    assert!(matches!(err, BillingError::UnknownPlan { plan_id } if plan_id == "price-plan-retired"));
}
