use aqi::{evaluate, AqiReport, Conditions, OzoneBasis, Pollutant, PollutantReading, SubIndices};

#[test]
fn test_reading_from_feed_columns() {
    let row = r#"{
        "pm2_5": 48.3,
        "pm10": 95.2,
        "carbon_monoxide": 412.0,
        "nitrogen_dioxide": 18.5,
        "ozone": 96.0,
        "sulphur_dioxide": 12.4
    }"#;
    let reading: PollutantReading = serde_json::from_str(row).unwrap();
    assert_eq!(
        reading,
        PollutantReading {
            pm2_5: Some(48.3),
            pm10: Some(95.2),
            co: Some(412.0),
            no2: Some(18.5),
            o3: Some(96.0),
            so2: Some(12.4),
        }
    );
    assert_eq!(evaluate(&reading, &Conditions::default()).aqi, Some(133));
}

#[test]
fn test_missing_columns_are_absent() {
    let row = r#"{"pm10": 30.0, "ozone": null, "time": "2024-07-01T12:00"}"#;
    let reading: PollutantReading = serde_json::from_str(row).unwrap();
    assert_eq!(reading, PollutantReading::default().with(Pollutant::Pm10, 30.0));

    let empty: PollutantReading = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, PollutantReading::default());
}

#[test]
fn test_reading_serializes_feed_columns() {
    let reading = PollutantReading::default()
        .with(Pollutant::Co, 250.0)
        .with(Pollutant::So2, 4.0);
    let value = serde_json::to_value(reading).unwrap();
    assert_eq!(value["carbon_monoxide"], 250.0);
    assert_eq!(value["sulphur_dioxide"], 4.0);
    assert!(value["nitrogen_dioxide"].is_null());
    assert!(value["ozone"].is_null());
    assert!(value.get("co").is_none());
}

#[test]
fn test_report_round_trip() {
    let report = AqiReport {
        sub_indices: SubIndices {
            pm2_5: Some(132.5),
            o3: Some(406.0),
            ..SubIndices::default()
        },
        ozone: OzoneBasis::OneHourOverride { value: 406.0 },
        aqi: Some(406),
        ..AqiReport::default()
    };
    let json = serde_json::to_string(&report).unwrap();
    let back: AqiReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);

    let evaluated = evaluate(
        &PollutantReading::default().with(Pollutant::Pm2_5, 12.0),
        &Conditions::default(),
    );
    let back: AqiReport = serde_json::from_str(&serde_json::to_string(&evaluated).unwrap()).unwrap();
    assert_eq!(back, evaluated);
    assert_eq!(back.ozone, OzoneBasis::EightHour);
}
