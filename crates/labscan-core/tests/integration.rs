//! Integration tests for the extraction pipeline end to end.
//!
//! Inputs mimic OCR output: inconsistent casing, padded columns, stray
//! header and footer fragments.

use labscan_core::analysis::{analyze, AnalysisMethod, ResponseFileAnalyzer};
use labscan_core::extraction::{extract, extract_generic, extract_known, ExtractOptions};
use labscan_core::registry::builtin::standard;
use labscan_core::registry::load_registry;
use labscan_core::{extract_lab_results, historical_trend, ReferenceRange, Status};
use rust_decimal_macros::dec;
use std::io::Write;

// ---------------------------------------------------------------------------
// Test 1: Two known parameters, one normal and one high
// ---------------------------------------------------------------------------
#[test]
fn known_parameters_classified() {
    let results = extract_lab_results("Hemoglobin: 13.5 g/dL\nGlucose: 110 mg/dL\n");

    assert_eq!(results.len(), 2);

    assert_eq!(results[0].parameter, "Hemoglobin");
    assert_eq!(results[0].value.to_string(), "13.5");
    assert_eq!(results[0].unit, "g/dL");
    assert_eq!(results[0].range, ReferenceRange::new(dec!(12), dec!(16)));
    assert_eq!(results[0].status, Status::Normal);

    assert_eq!(results[1].parameter, "Glucose");
    assert_eq!(results[1].value.to_string(), "110");
    assert_eq!(results[1].unit, "mg/dL");
    assert_eq!(results[1].range, ReferenceRange::new(dec!(70), dec!(100)));
    assert_eq!(results[1].status, Status::High);
}

// ---------------------------------------------------------------------------
// Test 2: Separator is optional
// ---------------------------------------------------------------------------
#[test]
fn missing_colon_matches_identically() {
    assert_eq!(
        extract_lab_results("Hemoglobin 13.5 g/dL"),
        extract_lab_results("Hemoglobin: 13.5 g/dL")
    );
}

// ---------------------------------------------------------------------------
// Test 3: Empty input is not an error
// ---------------------------------------------------------------------------
#[test]
fn empty_input_yields_nothing() {
    assert!(extract_known("", standard()).is_empty());
    assert!(extract_generic("", &[], &ExtractOptions::default()).is_empty());
    assert!(extract_lab_results("").is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Every registry parameter, low / normal / high and both bounds
// ---------------------------------------------------------------------------
#[test]
fn every_registry_parameter_classifies_against_its_range() {
    let samples = [
        ("Hemoglobin", "Hemoglobin: {} g/dL"),
        ("White Blood Cell Count", "WBC: {} cells/uL"),
        ("Red Blood Cell Count", "RBC: {} x10^6/uL"),
        ("Platelet Count", "Platelets: {} /uL"),
        ("Glucose", "Glucose: {} mg/dL"),
        ("Cholesterol", "Total Cholesterol: {} mg/dL"),
        ("HDL Cholesterol", "HDL: {} mg/dL"),
        ("LDL Cholesterol", "LDL: {} mg/dL"),
        ("Triglycerides", "Triglycerides: {} mg/dL"),
        ("Creatinine", "Creatinine: {} mg/dL"),
        ("Blood Urea Nitrogen", "BUN: {} mg/dL"),
        ("ALT", "ALT: {} U/L"),
        ("AST", "AST: {} U/L"),
    ];

    for (name, template) in samples {
        let rule = standard().get(name).unwrap();
        let range = rule.default_range;
        let cases = [
            (range.low, Status::Normal),
            (range.high, Status::Normal),
            (range.high + dec!(1), Status::High),
        ];

        for (value, expected) in cases {
            let text = template.replace("{}", &value.to_string());
            let results = extract_known(&text, standard());
            let matching: Vec<_> = results.iter().filter(|r| r.parameter == name).collect();
            assert_eq!(matching.len(), 1, "{text:?} should match {name} once");
            assert_eq!(matching[0].value, value.normalize(), "{text:?}");
            assert_eq!(matching[0].status, expected, "{text:?}");
        }

        if range.low > dec!(0) {
            let below = range.low - dec!(0.1);
            let text = template.replace("{}", &below.to_string());
            let results = extract_known(&text, standard());
            let r = results.iter().find(|r| r.parameter == name).unwrap();
            assert_eq!(r.status, Status::Low, "{text:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Test 5: Duplicate mentions keep the first
// ---------------------------------------------------------------------------
#[test]
fn first_mention_wins() {
    let results = extract_lab_results("Creatinine: 0.9 mg/dL\nCreatinine: 2.4 mg/dL");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, dec!(0.9));
    assert_eq!(results[0].status, Status::Normal);
}

// ---------------------------------------------------------------------------
// Test 6: Realistic report with unregistered analytes and noise
// ---------------------------------------------------------------------------
#[test]
fn realistic_report() {
    let text = "\
CITY GENERAL HOSPITAL LABORATORY
Patient ID 4471-22   Page: 1 of 2
COMPLETE BLOOD COUNT
  HGB              11.4 g/dL
  WBC:             8.2 x10^3/uL
  PLT              310 x10^3/uL
CHEMISTRY
  Glucose, Fasting
  Blood Glucose: 92 mg/dL
  Sodium: 139 mmol/L
  Potassium: 4.2 mmol/L
  ALT (SGPT): 62 U/L
  Hemoglobin: 15.0 g/dL
";

    let results = extract_lab_results(text);
    let names: Vec<&str> = results.iter().map(|r| r.parameter.as_str()).collect();

    // Known parameters first, in registry order.
    assert_eq!(
        &names[..4],
        &["Hemoglobin", "White Blood Cell Count", "Platelet Count", "Glucose"]
    );

    let hgb = &results[0];
    assert_eq!(hgb.value, dec!(11.4));
    assert_eq!(hgb.status, Status::Low);

    // Generic pass picks up analytes the registry does not know.
    assert!(names.contains(&"Sodium"));
    assert!(names.contains(&"Potassium"));
    let sodium = results.iter().find(|r| r.parameter == "Sodium").unwrap();
    assert_eq!(sodium.range, ReferenceRange::placeholder());
    assert_eq!(sodium.status, Status::Normal);

    // Labels overlapping known names are never duplicated.
    assert!(!names.iter().any(|n| n.contains("Glucose") && *n != "Glucose"));
    assert_eq!(names.iter().filter(|n| **n == "Hemoglobin").count(), 1);

    // Incidental header fragments are accepted.
    assert!(names.contains(&"Page"));
}

// ---------------------------------------------------------------------------
// Test 7: Result limit
// ---------------------------------------------------------------------------
#[test]
fn combined_results_never_exceed_limit() {
    let mut text = String::from("Hemoglobin: 14 g/dL\nGlucose: 90 mg/dL\n");
    for i in 0..50 {
        let a = (b'a' + (i / 26) as u8) as char;
        let b = (b'a' + (i % 26) as u8) as char;
        text.push_str(&format!("Marker {a}{b}: {} ng/mL\n", i + 1));
    }

    let results = extract_lab_results(&text);
    assert_eq!(results.len(), 20);
    assert_eq!(results[0].parameter, "Hemoglobin");
    assert_eq!(results[1].parameter, "Glucose");
    assert_eq!(results[19].parameter, "Marker ar");
}

// ---------------------------------------------------------------------------
// Test 8: Short labels are never accepted
// ---------------------------------------------------------------------------
#[test]
fn short_generic_labels_rejected() {
    let results = extract_lab_results("pH: 7 units\nNa: 140 mmol/L\nCa 9 mg/dL");
    assert!(results.is_empty(), "{results:?}");
}

// ---------------------------------------------------------------------------
// Test 9: Custom registry loaded from disk
// ---------------------------------------------------------------------------
#[test]
fn custom_registry_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "Electrolytes",
            "version": "2025.1",
            "parameters": [
                {{ "name": "Sodium",
                   "pattern": "\\b(?:sodium|na)\\s*:?\\s*(?P<value>[0-9.]+)\\s*(?P<unit>mmol/l|meq/l)",
                   "unit": "mmol/L",
                   "range": {{ "low": 135, "high": 145 }},
                   "baseline": 140 }}
            ]
        }}"#
    )
    .unwrap();

    let registry = load_registry(file.path()).unwrap();
    let results = extract(
        "Na: 128 mEq/L\nPotassium: 4.0 mmol/L",
        &registry,
        &ExtractOptions::default(),
    );

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].parameter, "Sodium");
    assert_eq!(results[0].unit, "mEq/L");
    assert_eq!(results[0].status, Status::Low);
    assert_eq!(results[1].parameter, "Potassium");
}

// ---------------------------------------------------------------------------
// Test 10: Calls are independent across threads
// ---------------------------------------------------------------------------
#[test]
fn concurrent_extraction() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("Glucose: {} mg/dL\nSodium: 140 mmol/L", 60 + i * 10);
                extract_lab_results(&text)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].value.to_string(), (60 + i * 10).to_string());
    }
}

// ---------------------------------------------------------------------------
// Test 11: Enhanced analysis falls back to basic extraction
// ---------------------------------------------------------------------------
#[test]
fn enhanced_response_and_fallback() {
    let mut good = tempfile::NamedTempFile::new().unwrap();
    write!(
        good,
        r#"[{{"parameter":"Hemoglobin","value":"9.1","unit":"g/dL","range":{{"low":12,"high":16}},"status":"Needs Attention"}}]"#
    )
    .unwrap();

    let analyzer = ResponseFileAnalyzer::new(good.path());
    let analysis = analyze(
        "Hemoglobin: 9.1 g/dL",
        standard(),
        Some(&analyzer),
        &ExtractOptions::default(),
    );
    assert_eq!(analysis.method, AnalysisMethod::Enhanced);
    assert_eq!(analysis.results[0].status, Status::NeedsAttention);

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, "the model refused to answer").unwrap();

    let analyzer = ResponseFileAnalyzer::new(bad.path());
    let analysis = analyze(
        "Hemoglobin: 9.1 g/dL",
        standard(),
        Some(&analyzer),
        &ExtractOptions::default(),
    );
    assert_eq!(analysis.method, AnalysisMethod::BasicFallback);
    assert_eq!(analysis.results[0].status, Status::Low);
}

// ---------------------------------------------------------------------------
// Test 12: Serialized shape
// ---------------------------------------------------------------------------
#[test]
fn json_shape() {
    let results = extract_lab_results("Glucose: 110.0 mg/dL");
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["parameter"], "Glucose");
    assert_eq!(json[0]["value"], "110");
    assert_eq!(json[0]["range"]["low"], 70.0);
    assert_eq!(json[0]["range"]["high"], 100.0);
    assert_eq!(json[0]["status"], "High");
}

// ---------------------------------------------------------------------------
// Test 13: Trend synthesis never fails
// ---------------------------------------------------------------------------
#[test]
fn trend_for_unknown_parameter() {
    let points = historical_trend("Not A Real Analyte");
    assert_eq!(points.len(), 6);
    for p in &points {
        assert!((40.0..=60.0).contains(&p.value));
    }
    assert!(points.windows(2).all(|w| w[0].date < w[1].date));
}
