// tests/serde_tests.rs
use dcmseg_rs::*;
use serde_json::{json, Value};

fn segment_json() -> Value {
    json!({
        "uid": "t1",
        "number": 1,
        "label": "Tumor",
        "propertyCategory": {
            "value": "49755003",
            "schemeDesignator": "SCT",
            "meaning": "Morphologically Altered Structure"
        },
        "propertyType": {
            "value": "108369006",
            "schemeDesignator": "SCT",
            "meaning": "Neoplasm"
        },
        "algorithmName": "seg-net",
        "algorithmType": "AUTOMATIC",
        "studyInstanceUID": "1.2.840.S",
        "seriesInstanceUID": "1.2.840.Se",
        "sopInstanceUIDs": ["1.2.840.I1", "1.2.840.I2"]
    })
}

#[test]
fn test_segment_from_json() {
    let segment = Segment::from_json(&segment_json().to_string()).unwrap();

    assert_eq!(segment.uid(), "t1");
    assert_eq!(segment.number(), 1);
    assert_eq!(segment.property_category().scheme_designator, "SCT");
    assert_eq!(segment.property_type().meaning, "Neoplasm");
    assert_eq!(segment.algorithm_type(), &AlgorithmType::Automatic);
    assert_eq!(segment.sop_instance_uids(), ["1.2.840.I1", "1.2.840.I2"]);
    assert_eq!(segment.palette_color_lookup_table_uid(), None);
}

#[test]
fn test_missing_key_reports_field() {
    let mut value = segment_json();
    value.as_object_mut().unwrap().remove("seriesInstanceUID");

    let err = Segment::from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.missing_field(), Some(SegmentField::SeriesInstanceUid));
    assert_eq!(err.to_string(), "Series Instance UID is required.");
}

#[test]
fn test_null_counts_as_missing() {
    let mut value = segment_json();
    value["label"] = Value::Null;

    let err = Segment::from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.missing_field(), Some(SegmentField::Label));
}

#[test]
fn test_deserialize_impl_uses_presence_check() {
    let mut value = segment_json();
    value.as_object_mut().unwrap().remove("sopInstanceUIDs");

    let err = serde_json::from_value::<Segment>(value).unwrap_err();
    assert_eq!(err.to_string(), "SOP Instance UIDs are required.");
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = Segment::from_json("{\"uid\": ").unwrap_err();
    assert!(matches!(err, SegmentError::Json(_)));
    assert_eq!(err.missing_field(), None);
}

#[test]
fn test_out_of_range_number_fails_before_presence_check() {
    let err = Segment::from_json(r#"{"number": 70000}"#).unwrap_err();

    assert!(matches!(err, SegmentError::Json(_)));
    assert_eq!(err.missing_field(), None);
    assert!(err.to_string().contains("expected u16"));

    let err = Segment::from_json(r#"{"number": 7}"#).unwrap_err();
    assert_eq!(err.missing_field(), Some(SegmentField::Uid));
}

#[test]
fn test_spelled_out_defined_term_survives_round_trip() {
    let mut fields = Segment::from_json(&segment_json().to_string()).unwrap().into_fields();
    fields.algorithm_type = AlgorithmType::Other("MANUAL".to_string());
    let segment = Segment::from(fields);

    let parsed = Segment::from_json(&segment.to_json().unwrap()).unwrap();
    assert_eq!(parsed.algorithm_type(), &AlgorithmType::Manual);
    assert_eq!(parsed, segment);
}

#[test]
fn test_unknown_algorithm_type_is_kept() {
    let mut value = segment_json();
    value["algorithmType"] = json!("HYBRID");

    let segment = Segment::from_json(&value.to_string()).unwrap();
    assert_eq!(segment.algorithm_type(), &AlgorithmType::Other("HYBRID".to_string()));
}

#[test]
fn test_serialize_omits_absent_palette() {
    let segment = Segment::from_json(&segment_json().to_string()).unwrap();
    let value: Value = serde_json::from_str(&segment.to_json().unwrap()).unwrap();

    assert_eq!(value, segment_json());
    assert!(value.get("paletteColorLookupTableUID").is_none());
}

#[test]
fn test_serialize_includes_palette_and_scheme_version() {
    let mut value = segment_json();
    value["paletteColorLookupTableUID"] = json!("1.2.840.P");
    value["propertyType"]["schemeVersion"] = json!("2021");

    let segment = Segment::from_json(&value.to_string()).unwrap();
    assert_eq!(segment.property_type().scheme_version.as_deref(), Some("2021"));

    let written: Value = serde_json::to_value(&segment).unwrap();
    assert_eq!(written, value);
}

#[test]
fn test_options_from_json_do_not_check_presence() {
    let options = SegmentOptions::from_json(r#"{"uid": "t1", "number": 4}"#).unwrap();

    assert_eq!(options.uid.as_deref(), Some("t1"));
    assert_eq!(options.number, Some(4));
    assert_eq!(options.missing_fields().len(), 8);
}
