use super::*;

#[test]
fn role_rejects_empty_and_csv_breaking_names() {
    assert!(Role::new("").is_err());
    assert!(Role::new("a,b").is_err());
    assert!(Role::new("line\n1").is_err());
    assert!(Role::new("quote\"d").is_err());
    assert_eq!(Role::new("line1-head").unwrap().as_str(), "line1-head");
}

#[test]
fn role_deserialization_goes_through_validation() {
    let ok: Role = serde_json::from_str("\"end\"").unwrap();
    assert_eq!(ok.to_string(), "end");
    assert!(serde_json::from_str::<Role>("\"\"").is_err());
    assert_eq!(serde_json::to_string(&ok).unwrap(), "\"end\"");
}

#[test]
fn time_unit_converts_to_seconds() {
    assert_eq!(TimeUnit::Seconds.to_secs(1.8), 1.8);
    assert_eq!(TimeUnit::Millis.to_secs(1800.0), 1.8);
    let unit: TimeUnit = serde_json::from_str("\"millis\"").unwrap();
    assert_eq!(unit, TimeUnit::Millis);
}
