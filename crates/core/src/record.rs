//! The live patient record owned by a form session.
//!
//! The record is a flat carrier of the thirteen clinical measurements. Its
//! serde derive produces exactly the wire body the classifier expects: a flat
//! JSON object keyed by field name, twelve integers and one decimal.
//!
//! Mutation goes through [`PatientRecord::set_field`], which coerces raw text
//! to the field's declared numeric kind. Out-of-range clinical values (a
//! negative age, a cholesterol of 9000) are passed through uncorrected; range
//! validation is deliberately not this layer's job.

use crate::error::{CoreError, CoreResult};
use heartguard_types::FieldValue;
use serde::{Deserialize, Serialize};

/// The thirteen clinical measurements for one patient.
///
/// Every field always holds a value; there is no partial record. A fresh
/// record starts from the built-in default profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: i64,
    pub sex: i64,
    pub cp: i64,
    pub trestbps: i64,
    pub chol: i64,
    pub fbs: i64,
    pub restecg: i64,
    pub thalach: i64,
    pub exang: i64,
    pub oldpeak: f64,
    pub slope: i64,
    pub ca: i64,
    pub thal: i64,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 57,
            sex: 1,
            cp: 0,
            trestbps: 140,
            chol: 192,
            fbs: 0,
            restecg: 1,
            thalach: 148,
            exang: 0,
            oldpeak: 0.4,
            slope: 1,
            ca: 0,
            thal: 1,
        }
    }
}

impl PatientRecord {
    /// Overwrites one field with a value coerced from raw text.
    ///
    /// `oldpeak` takes a decimal parse; every other field, including the
    /// enumerated choices, takes an integer parse.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownField` when `name` is not in the schema
    /// (a caller bug, never triggered by schema-driven callers) and
    /// `CoreError::Coercion` when the text does not parse. On error the
    /// record is left unchanged.
    pub fn set_field(&mut self, name: &str, raw: &str) -> CoreResult<()> {
        // oldpeak is the schema's single decimal field.
        let slot = match name {
            "oldpeak" => {
                self.oldpeak = FieldValue::parse_decimal(raw)?;
                return Ok(());
            }
            "age" => &mut self.age,
            "sex" => &mut self.sex,
            "cp" => &mut self.cp,
            "trestbps" => &mut self.trestbps,
            "chol" => &mut self.chol,
            "fbs" => &mut self.fbs,
            "restecg" => &mut self.restecg,
            "thalach" => &mut self.thalach,
            "exang" => &mut self.exang,
            "slope" => &mut self.slope,
            "ca" => &mut self.ca,
            "thal" => &mut self.thal,
            other => return Err(CoreError::UnknownField(other.to_owned())),
        };
        *slot = FieldValue::parse_integer(raw)?;
        Ok(())
    }

    /// Current value of a field, or `None` for a name outside the schema.
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "age" => FieldValue::Integer(self.age),
            "sex" => FieldValue::Integer(self.sex),
            "cp" => FieldValue::Integer(self.cp),
            "trestbps" => FieldValue::Integer(self.trestbps),
            "chol" => FieldValue::Integer(self.chol),
            "fbs" => FieldValue::Integer(self.fbs),
            "restecg" => FieldValue::Integer(self.restecg),
            "thalach" => FieldValue::Integer(self.thalach),
            "exang" => FieldValue::Integer(self.exang),
            "oldpeak" => FieldValue::Decimal(self.oldpeak),
            "slope" => FieldValue::Integer(self.slope),
            "ca" => FieldValue::Integer(self.ca),
            "thal" => FieldValue::Integer(self.thal),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FIELDS;
    use heartguard_types::CoercionError;

    #[test]
    fn set_field_changes_exactly_one_field() {
        let mut record = PatientRecord::default();
        let before = record.clone();

        record.set_field("chol", "250").expect("valid edit");

        assert_eq!(record.chol, 250);
        for field in FIELDS.iter().filter(|f| f.name != "chol") {
            assert_eq!(record.get(field.name), before.get(field.name));
        }
    }

    #[test]
    fn decimal_field_takes_decimal_parse() {
        let mut record = PatientRecord::default();
        record.set_field("oldpeak", "1.5").expect("valid edit");
        assert_eq!(record.oldpeak, 1.5);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut record = PatientRecord::default();
        let err = record
            .set_field("heart_rate", "70")
            .expect_err("expected unknown field error");
        assert!(matches!(err, CoreError::UnknownField(ref name) if name == "heart_rate"));
    }

    #[test]
    fn coercion_failure_leaves_record_unchanged() {
        let mut record = PatientRecord::default();
        let before = record.clone();

        let err = record
            .set_field("age", "forty")
            .expect_err("expected coercion failure");

        assert!(matches!(
            err,
            CoreError::Coercion(CoercionError::NotInteger(_))
        ));
        assert_eq!(record, before);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        // Range validation is a non-goal; the classifier sees what was typed.
        let mut record = PatientRecord::default();
        record.set_field("age", "-3").expect("no range validation");
        assert_eq!(record.age, -3);
    }

    #[test]
    fn wire_body_is_flat_with_thirteen_keys() {
        let body = serde_json::to_value(PatientRecord::default()).expect("serialise record");
        let object = body.as_object().expect("flat object");
        assert_eq!(object.len(), 13);
        for field in FIELDS.iter() {
            assert!(object[field.name].is_number(), "{} missing", field.name);
        }
        assert_eq!(object["oldpeak"], serde_json::json!(0.4));
        assert_eq!(object["age"], serde_json::json!(57));
    }
}
