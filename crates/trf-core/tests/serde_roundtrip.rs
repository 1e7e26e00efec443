use trf_core::errors::{ErrorInfo, TrfError};
use trf_core::provenance::{RunProvenance, SchemaVersion};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance::new(99, 1).with_tool("trf-core", "0.1.0");

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert_eq!(decoded.schema_version, SchemaVersion::new(1, 0, 0));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = TrfError::Config(ErrorInfo::new("zero-clique-size", "k must be positive"));
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["family"], "Config");
    assert_eq!(value["detail"]["code"], "zero-clique-size");
    assert!(value["detail"].get("hint").is_none());

    let decoded: TrfError = serde_json::from_value(value).expect("deserialize");
    assert_eq!(decoded, err);
}
