//! Behavior-driven tests for the daily accumulator and its strategies
//!
//! These tests verify WHAT records a caller gets for a given price series,
//! through the public engine API only.

use daybook_core::{
    summarize, DailyAccumulator, DayBoundaryRule, Direction, DispersionStrategy, EmptyInput,
    EngineConfig, FinalUpdate, Sample, SampleTime, Schema, TrendStrategy,
};

fn sample(ts: &str, price: f64) -> Sample {
    Sample::new(SampleTime::parse(ts).expect("valid timestamp"), price)
}

fn hourly_days(days: u32, hours_per_day: u32) -> Vec<Sample> {
    let start = SampleTime::parse("2024-03-04T00:00:00").expect("valid timestamp");
    (0..days)
        .flat_map(|day| (0..hours_per_day).map(move |hour| (day, hour)))
        .map(|(day, hour)| {
            let ts = start.saturating_add_hours(i64::from(day * 24 + hour));
            Sample::new(ts, f64::from(100 + day * 10 + hour))
        })
        .collect()
}

// =============================================================================
// Record counts
// =============================================================================

#[test]
fn multi_day_series_yields_one_record_per_day_plus_trailing() {
    // Given: five days of hourly prices
    let samples = hourly_days(5, 24);

    // When: both summaries run over the same series
    let trend = summarize(Schema::Trend, samples.clone(), EngineConfig::default())
        .expect("trend serializes");
    let dispersion = summarize(Schema::Dispersion, samples, EngineConfig::default())
        .expect("dispersion serializes");

    // Then: each emits D + 1 records
    assert_eq!(trend.len(), 6);
    assert_eq!(dispersion.len(), 6);
}

#[test]
fn sparse_series_counts_days_not_samples() {
    // Given: irregular spacing, three distinct days
    let samples = vec![
        sample("2024-01-01T03:00:00", 1.0),
        sample("2024-01-01T21:00:00", 2.0),
        sample("2024-01-03T05:00:00", 3.0),
        sample("2024-01-04T00:00:00", 4.0),
        sample("2024-01-04T01:00:00", 5.0),
    ];

    // When / Then: D + 1 records
    let records: Vec<_> = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
        .process(samples)
        .collect();
    assert_eq!(records.len(), 4);
}

#[test]
fn single_day_series_yields_opening_and_trailing_records() {
    // Given: one day of prices
    let samples = vec![
        sample("2024-01-01T09:00:00", 100.0),
        sample("2024-01-01T10:00:00", 105.0),
    ];

    // When: the trend summary runs
    let records: Vec<_> = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
        .process(samples)
        .collect();

    // Then: the opening record has no change and unseeded high/low marks
    assert_eq!(records.len(), 2);
    let opening = &records[0];
    assert_eq!(opening.change, None);
    assert_eq!(opening.direction, None);
    assert_eq!(opening.high_since_start, None);
    assert_eq!(opening.low_since_start, None);

    // And: the trailing record compares the last price with the day open
    let trailing = &records[1];
    assert_eq!(trailing.price.as_deref(), Some("105.00"));
    assert_eq!(trailing.change.as_deref(), Some("5.00"));
    assert_eq!(trailing.direction, Some(Direction::Up));
    assert_eq!(trailing.high_since_start, Some(true));
    assert_eq!(trailing.low_since_start, Some(false));
}

// =============================================================================
// Trend semantics
// =============================================================================

#[test]
fn day_boundary_record_reports_change_from_previous_open() {
    // Given: day one opens at 100 and day two opens at 90
    let samples = vec![
        sample("2024-01-01T09:00:00", 100.0),
        sample("2024-01-01T10:00:00", 110.0),
        sample("2024-01-02T09:00:00", 90.0),
    ];

    // When: the trend summary runs
    let records = summarize(Schema::Trend, samples, EngineConfig::default()).expect("serializes");

    // Then: the boundary record reports the drop against day one's open
    assert_eq!(records.len(), 3);
    assert_eq!(records[1]["date"], "2024-01-02T09:00:00");
    assert_eq!(records[1]["price"], "90.00");
    assert_eq!(records[1]["change"], "-10.00");
    assert_eq!(records[1]["direction"], "down");
    assert_eq!(records[1]["dayOfWeek"], "Tuesday");
    assert_eq!(records[1]["highSinceStart"], false);
    assert_eq!(records[1]["lowSinceStart"], true);

    // And: the trailing record is measured against day two's open
    assert!(records[2]["change"].is_null());
    assert_eq!(records[2]["direction"], "same");
}

#[test]
fn unchanged_day_reports_same_direction_without_change() {
    // Given: a day that closes at its opening price
    let samples = vec![
        sample("2024-01-01T09:00:00", 100.0),
        sample("2024-01-01T10:00:00", 110.0),
        sample("2024-01-02T09:00:00", 90.0),
    ];

    // When
    let records: Vec<_> = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
        .process(samples)
        .collect();

    // Then: the trailing record keeps the key but carries no change value
    let trailing = records.last().expect("trailing record");
    assert_eq!(trailing.price.as_deref(), Some("90.00"));
    assert_eq!(trailing.change, None);
    assert_eq!(trailing.direction, Some(Direction::Same));

    let wire = serde_json::to_value(trailing).expect("serializes");
    assert!(wire.get("change").is_some_and(|value| value.is_null()));
}

#[test]
fn high_and_low_marks_persist_across_days() {
    // Given: a new all-time high on day three after a dip on day two
    let samples = vec![
        sample("2024-01-01T09:00:00", 50.0),
        sample("2024-01-02T09:00:00", 40.0),
        sample("2024-01-03T09:00:00", 60.0),
    ];

    // When
    let records: Vec<_> = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
        .process(samples)
        .collect();

    // Then
    let highs: Vec<_> = records.iter().map(|r| r.high_since_start).collect();
    let lows: Vec<_> = records.iter().map(|r| r.low_since_start).collect();
    assert_eq!(highs, vec![None, Some(false), Some(true), Some(false)]);
    assert_eq!(lows, vec![None, Some(true), Some(false), Some(false)]);
}

// =============================================================================
// Dispersion semantics
// =============================================================================

#[test]
fn boundary_record_summarizes_the_day_that_just_closed() {
    // Given: day one trades at 1 and 3, day two opens at 10
    let samples = vec![
        sample("2024-01-01T09:00:00", 1.0),
        sample("2024-01-01T10:00:00", 3.0),
        sample("2024-01-02T09:00:00", 10.0),
    ];

    // When
    let records: Vec<_> =
        DailyAccumulator::new(DispersionStrategy::new(), EngineConfig::default())
            .process(samples)
            .collect();

    // Then: the boundary record carries day two's price but day one's stats
    let boundary = &records[1];
    assert_eq!(boundary.price.as_deref(), Some("10.00"));
    assert_eq!(boundary.daily_average, Some(2.0));
    assert_eq!(boundary.daily_variance, 2.0);
}

#[test]
fn opening_record_averages_to_the_current_price() {
    let records: Vec<_> =
        DailyAccumulator::new(DispersionStrategy::new(), EngineConfig::default())
            .process(vec![sample("2024-01-01T09:00:00", 12.5)])
            .collect();

    assert_eq!(records[0].daily_average, Some(12.5));
    assert_eq!(records[0].daily_variance, 0.0);
    assert!(!records[0].volatility_alert);
}

#[test]
fn repeated_final_update_counts_last_sample_twice() {
    // Given: a final day trading at 10 then 20
    let samples = vec![
        sample("2024-01-01T09:00:00", 10.0),
        sample("2024-01-01T10:00:00", 20.0),
    ];

    // When: the trailing record is rendered with and without the repeat
    let repeat: Vec<_> = DailyAccumulator::new(DispersionStrategy::new(), EngineConfig::default())
        .process(samples.clone())
        .collect();
    let skip: Vec<_> = DailyAccumulator::new(
        DispersionStrategy::new(),
        EngineConfig::default().with_final_update(FinalUpdate::Skip),
    )
    .process(samples)
    .collect();

    // Then: the default weights the last price twice
    let repeated_average = repeat[1].daily_average.expect("average");
    assert!((repeated_average - 50.0 / 3.0).abs() < 1e-9);
    assert_eq!(skip[1].daily_average, Some(15.0));
}

#[test]
fn calm_day_raises_volatility_alert() {
    // Given: a day where the latest price sits near the running mean
    let samples = vec![
        sample("2024-01-01T01:00:00", 100.0),
        sample("2024-01-01T02:00:00", 102.0),
        sample("2024-01-01T03:00:00", 101.0),
    ];

    // When
    let records = summarize(Schema::Dispersion, samples, EngineConfig::default())
        .expect("serializes");

    // Then
    assert_eq!(records.last().map(|r| r["volatilityAlert"].clone()), Some(true.into()));
}

// =============================================================================
// Edge cases and configuration
// =============================================================================

#[test]
fn empty_series_emits_one_degenerate_record() {
    let trend = summarize(Schema::Trend, Vec::new(), EngineConfig::default()).expect("serializes");
    let dispersion =
        summarize(Schema::Dispersion, Vec::new(), EngineConfig::default()).expect("serializes");

    assert_eq!(trend.len(), 1);
    assert!(trend[0].as_object().expect("object").values().all(|v| v.is_null()));

    assert_eq!(dispersion.len(), 1);
    assert!(dispersion[0]["price"].is_null());
    assert!(dispersion[0]["dailyAverage"].is_null());
    assert_eq!(dispersion[0]["dailyVariance"], 0.0);
    assert_eq!(dispersion[0]["volatilityAlert"], false);
}

#[test]
fn empty_series_can_be_suppressed() {
    let config = EngineConfig::default().with_empty_input(EmptyInput::Suppress);
    let records = summarize(Schema::Dispersion, Vec::new(), config).expect("serializes");
    assert!(records.is_empty());
}

#[test]
fn month_apart_samples_share_a_day_under_default_rule() {
    // Given: the 15th of two consecutive months
    let samples = vec![
        sample("2024-01-15T09:00:00", 1.0),
        sample("2024-02-15T09:00:00", 2.0),
    ];

    // When
    let compatible =
        summarize(Schema::Trend, samples.clone(), EngineConfig::default()).expect("serializes");
    let calendar = summarize(
        Schema::Trend,
        samples,
        EngineConfig::default().with_day_boundary(DayBoundaryRule::CalendarDate),
    )
    .expect("serializes");

    // Then: only the calendar rule sees a second day
    assert_eq!(compatible.len(), 2);
    assert_eq!(calendar.len(), 3);
}

#[test]
fn records_can_be_abandoned_early() {
    let mut records = DailyAccumulator::new(TrendStrategy::new(), EngineConfig::default())
        .process(hourly_days(10, 24));

    let first = records.next().expect("opening record");
    assert_eq!(first.price.as_deref(), Some("100.00"));
    assert_eq!(records.state().previous.map(|s| s.price), Some(100.0));
    drop(records);
}

#[test]
fn rendered_date_parses_back_to_the_sample_time() {
    let ts = SampleTime::parse("2024-07-19T16:00:00").expect("valid timestamp");
    let records = summarize(
        Schema::Trend,
        vec![Sample::new(ts, 3.0)],
        EngineConfig::default(),
    )
    .expect("serializes");

    let rendered = records[0]["date"].as_str().expect("date string");
    assert_eq!(SampleTime::parse(rendered), Ok(ts));
}
