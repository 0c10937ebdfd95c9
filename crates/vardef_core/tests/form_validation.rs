use vardef_core::{validate, FieldRule, FormField, FormFields, VarAttributes};

fn form(var_type: &str, unit: &str, threshold: &str, ttl: &str) -> FormFields {
    FormFields {
        var_type: var_type.to_string(),
        unit: unit.to_string(),
        threshold: threshold.to_string(),
        ttl: ttl.to_string(),
    }
}

#[test]
fn valid_form_yields_typed_values() {
    let validated = validate(&form("float", "C", "0", "3600")).unwrap();

    assert_eq!(
        validated.into_attributes(),
        VarAttributes {
            var_type: "float".to_string(),
            unit: "C".to_string(),
            threshold: 0,
            ttl: 3600,
        }
    );
}

#[test]
fn empty_text_fields_are_required() {
    let errors = validate(&form("", "  ", "1", "1")).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(FormField::VarType), Some(FieldRule::Required));
    assert_eq!(
        errors.message(FormField::Unit),
        Some("This field is required.")
    );
}

#[test]
fn counts_reject_negative_and_non_numeric_values() {
    for (value, rule) in [
        ("-1", FieldRule::Positive),
        ("-3", FieldRule::Positive),
        ("abc", FieldRule::Number),
        ("", FieldRule::Required),
    ] {
        let errors = validate(&form("float", "C", value, value)).unwrap_err();
        assert_eq!(errors.get(FormField::Threshold), Some(rule), "threshold {value:?}");
        assert_eq!(errors.get(FormField::Ttl), Some(rule), "ttl {value:?}");
    }
}

#[test]
fn negative_threshold_reports_positive_integer_message() {
    let errors = validate(&form("float", "C", "-3", "60")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(FormField::Threshold),
        Some("Value must be a positive integer.")
    );
    assert_eq!(errors.message(FormField::Ttl), None);
}

#[test]
fn non_numeric_ttl_reports_number_message() {
    let errors = validate(&form("float", "C", "5", "abc")).unwrap_err();
    assert_eq!(errors.message(FormField::Ttl), Some("Value must be a number."));
}

#[test]
fn errors_are_listed_in_field_order() {
    let errors = validate(&form("", "", "x", "-1")).unwrap_err();
    let fields: Vec<FormField> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, FormField::ALL.to_vec());
}
