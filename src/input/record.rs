use crate::core::features::{FeatureSchema, FeatureVector};
use crate::input::InputError;
use serde_json::{Map, Value};

/// Parses a single JSON object into a row, keeping the field order of the
/// document. The scaler rejects it later if that order differs from the
/// schema.
pub fn parse_record(text: &str) -> Result<FeatureVector, InputError> {
    let value: Value = serde_json::from_str(text)?;
    record_from_value(&value)
}

pub fn record_from_value(value: &Value) -> Result<FeatureVector, InputError> {
    let obj = value.as_object().ok_or(InputError::NotAnObject)?;
    let pairs = obj
        .iter()
        .map(|(name, v)| Ok::<_, InputError>((name.clone(), field_as_number(name, v)?)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureVector::from_pairs(pairs))
}

/// Builds a row by looking each schema field up by name, so field order in
/// the document does not matter. Extra fields are ignored.
pub fn record_for_schema(value: &Value, schema: &FeatureSchema) -> Result<FeatureVector, InputError> {
    let obj = value.as_object().ok_or(InputError::NotAnObject)?;
    let values = schema
        .names()
        .iter()
        .map(|name| lookup(obj, name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureVector::with_schema(schema, values))
}

fn lookup(obj: &Map<String, Value>, name: &str) -> Result<f64, InputError> {
    let v = obj
        .get(name)
        .ok_or_else(|| InputError::MissingColumn(name.to_string()))?;
    field_as_number(name, v)
}

fn field_as_number(name: &str, v: &Value) -> Result<f64, InputError> {
    match v {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NonNumericField(name.to_string())),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(InputError::NonNumericField(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_document_order() {
        let row = parse_record(r#"{"z": 1, "a": 2.5, "scholarship": true}"#).unwrap();
        assert_eq!(
            row.names(),
            ["z".to_string(), "a".to_string(), "scholarship".to_string()]
        );
        assert_eq!(row.values(), &[1.0, 2.5, 1.0]);
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert!(matches!(
            parse_record(r#"{"course": "Nursing"}"#),
            Err(InputError::NonNumericField(f)) if f == "course"
        ));
        assert!(matches!(parse_record("[1, 2]"), Err(InputError::NotAnObject)));
        assert!(matches!(parse_record("{"), Err(InputError::Json(_))));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let schema: FeatureSchema = ["grade"].into_iter().collect();
        for bad in [json!({"grade": f64::NAN}), json!({"grade": f64::INFINITY})] {
            assert!(matches!(
                record_for_schema(&bad, &schema),
                Err(InputError::NonNumericField(f)) if f == "grade"
            ));
        }
        assert!(matches!(
            parse_record(r#"{"grade": 1e400}"#),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn schema_lookup_reorders_and_ignores_extras() {
        let schema: FeatureSchema = ["grade", "age"].into_iter().collect();
        let value = json!({"age": 19, "note": "ignored", "grade": 14.0});
        let row = record_for_schema(&value, &schema).unwrap();
        assert_eq!(row.names(), schema.names());
        assert_eq!(row.values(), &[14.0, 19.0]);
    }

    #[test]
    fn schema_lookup_reports_missing_field() {
        let schema: FeatureSchema = ["grade", "age"].into_iter().collect();
        match record_for_schema(&json!({"grade": 1}), &schema) {
            Err(InputError::MissingColumn(c)) => assert_eq!(c, "age"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
