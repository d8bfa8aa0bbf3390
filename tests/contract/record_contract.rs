use std::collections::BTreeSet;

use daybook_core::{
    summarize, EngineConfig, Envelope, EnvelopeError, EnvelopeMeta, HandlerResponse, Sample,
    SampleTime, Schema, SourceId, SCHEMA_VERSION,
};
use serde_json::{json, Value};

struct SchemaCase {
    schema: Schema,
    keys: &'static [&'static str],
}

fn schema_cases() -> Vec<SchemaCase> {
    vec![
        SchemaCase {
            schema: Schema::Trend,
            keys: &[
                "date",
                "price",
                "direction",
                "change",
                "dayOfWeek",
                "highSinceStart",
                "lowSinceStart",
            ],
        },
        SchemaCase {
            schema: Schema::Dispersion,
            keys: &[
                "date",
                "price",
                "dailyAverage",
                "dailyVariance",
                "volatilityAlert",
            ],
        },
    ]
}

fn series() -> Vec<Sample> {
    [
        ("2024-02-28T22:00:00", 61_250.0),
        ("2024-02-28T23:00:00", 61_410.5),
        ("2024-02-29T00:00:00", 60_980.25),
        ("2024-02-29T01:00:00", 61_005.0),
        ("2024-03-01T00:00:00", 62_000.0),
    ]
    .into_iter()
    .map(|(ts, price)| Sample::new(SampleTime::parse(ts).expect("valid timestamp"), price))
    .collect()
}

fn key_set(record: &Value) -> BTreeSet<String> {
    record
        .as_object()
        .expect("record is an object")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn records_expose_exact_keys_for_every_schema() {
    for case in schema_cases() {
        let expected: BTreeSet<String> = case.keys.iter().map(|key| (*key).to_owned()).collect();

        let records = summarize(case.schema, series(), EngineConfig::default())
            .unwrap_or_else(|error| panic!("schema '{}' failed: {error}", case.schema));
        assert_eq!(records.len(), 4, "schema '{}': record count", case.schema);

        for (index, record) in records.iter().enumerate() {
            assert_eq!(
                key_set(record),
                expected,
                "schema '{}': keys of record {index}",
                case.schema
            );
        }

        let empty = summarize(case.schema, Vec::new(), EngineConfig::default())
            .unwrap_or_else(|error| panic!("schema '{}' failed: {error}", case.schema));
        assert_eq!(key_set(&empty[0]), expected, "schema '{}': empty input keys", case.schema);
    }
}

#[test]
fn record_values_use_wire_types() {
    for case in schema_cases() {
        let records = summarize(case.schema, series(), EngineConfig::default())
            .unwrap_or_else(|error| panic!("schema '{}' failed: {error}", case.schema));

        for record in &records {
            assert!(record["date"].is_string(), "schema '{}': date", case.schema);
            let price = record["price"].as_str().expect("price is a string");
            assert_eq!(
                price.split_once('.').map(|(_, fraction)| fraction.len()),
                Some(2),
                "schema '{}': price '{price}' has two decimals",
                case.schema
            );
        }
    }
}

#[test]
fn trend_record_encodes_direction_and_weekday() {
    let records =
        summarize(Schema::Trend, series(), EngineConfig::default()).expect("serializes");

    assert_eq!(
        records[1],
        json!({
            "date": "2024-02-29T00:00:00",
            "price": "60980.25",
            "direction": "down",
            "change": "-269.75",
            "dayOfWeek": "Thursday",
            "highSinceStart": false,
            "lowSinceStart": true,
        })
    );
    assert!(records
        .iter()
        .filter_map(|record| record["direction"].as_str())
        .all(|direction| ["up", "down", "same"].contains(&direction)));
}

#[test]
fn dispersion_record_uses_numeric_statistics() {
    let records =
        summarize(Schema::Dispersion, series(), EngineConfig::default()).expect("serializes");

    for record in &records {
        assert!(record["dailyAverage"].is_number());
        assert!(record["dailyVariance"].is_number());
        assert!(record["volatilityAlert"].is_boolean());
    }
}

#[test]
fn handler_response_wraps_encoded_records() {
    let records =
        summarize(Schema::Dispersion, series(), EngineConfig::default()).expect("serializes");

    let response = HandlerResponse::ok(&records).expect("encodes");
    let wire = serde_json::to_value(&response).expect("serializes");

    let keys: BTreeSet<&str> = wire
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, BTreeSet::from(["body", "statusCode"]));
    assert_eq!(wire["statusCode"], 200);

    let body: Value =
        serde_json::from_str(wire["body"].as_str().expect("body is a string")).expect("json body");
    assert_eq!(body, Value::Array(records));
}

#[test]
fn envelope_carries_meta_and_errors() {
    let meta = EnvelopeMeta::new("contract-request", SCHEMA_VERSION)
        .expect("valid meta")
        .with_schema(Schema::Trend)
        .with_source(SourceId::Synthetic)
        .with_counts(5, 4);
    let error = EnvelopeError::new("source.unavailable", "upstream down")
        .expect("valid error")
        .with_retryable(true)
        .with_source(SourceId::Coinranking);

    let envelope = Envelope::with_errors(meta, json!([]), vec![error]).expect("valid envelope");
    let wire = serde_json::to_value(&envelope).expect("serializes");

    assert_eq!(wire["meta"]["schema"], "trend");
    assert_eq!(wire["meta"]["source"], "synthetic");
    assert_eq!(wire["meta"]["sample_count"], 5);
    assert_eq!(wire["meta"]["record_count"], 4);
    assert_eq!(wire["errors"][0]["code"], "source.unavailable");
    assert_eq!(wire["errors"][0]["retryable"], true);
    assert_eq!(wire["errors"][0]["source"], "coinranking");
}
