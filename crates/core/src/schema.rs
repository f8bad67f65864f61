//! Static description of the thirteen clinical form fields.
//!
//! The schema is fixed at compile time: field names are unique, the list is
//! exactly thirteen entries long, and the order is display order only.
//! Submission bodies are keyed by name, so reordering here never changes the
//! wire contract.

/// One option of an enumerated-choice field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Display label for the option (e.g. "Male").
    pub label: &'static str,
    /// Integer value submitted for the option.
    pub value: i64,
}

/// Value kind a field accepts.
///
/// Enumerated choices are submitted as their integer value, so they coerce
/// like integer fields; the closed option set exists for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Choice(&'static [Choice]),
}

/// Descriptor for one clinical input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Unique wire name, also the JSON key in the request body.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Entry hint shown next to the input.
    pub hint: &'static str,
    /// Value kind for coercion and rendering.
    pub kind: FieldKind,
}

const SEX_CHOICES: &[Choice] = &[
    Choice {
        label: "Male",
        value: 1,
    },
    Choice {
        label: "Female",
        value: 0,
    },
];

const FBS_CHOICES: &[Choice] = &[
    Choice {
        label: "True",
        value: 1,
    },
    Choice {
        label: "False",
        value: 0,
    },
];

const EXANG_CHOICES: &[Choice] = &[
    Choice {
        label: "Yes",
        value: 1,
    },
    Choice {
        label: "No",
        value: 0,
    },
];

/// The thirteen clinical input fields, in display order.
pub const FIELDS: [FieldDescriptor; 13] = [
    FieldDescriptor {
        name: "age",
        label: "Age",
        hint: "e.g. 45",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "sex",
        label: "Sex",
        hint: "",
        kind: FieldKind::Choice(SEX_CHOICES),
    },
    FieldDescriptor {
        name: "cp",
        label: "Chest Pain Type (0-3)",
        hint: "0-3",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "trestbps",
        label: "Resting Blood Pressure",
        hint: "mm Hg",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "chol",
        label: "Serum Cholestoral",
        hint: "mg/dl",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        hint: "",
        kind: FieldKind::Choice(FBS_CHOICES),
    },
    FieldDescriptor {
        name: "restecg",
        label: "Resting Electrocardiographic Results",
        hint: "0-2",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "thalach",
        label: "Max Heart Rate Achieved",
        hint: "e.g. 150",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "exang",
        label: "Exercise Induced Angina",
        hint: "",
        kind: FieldKind::Choice(EXANG_CHOICES),
    },
    FieldDescriptor {
        name: "oldpeak",
        label: "ST Depression",
        hint: "e.g. 1.5",
        kind: FieldKind::Decimal,
    },
    FieldDescriptor {
        name: "slope",
        label: "Slope of Peak Exercise ST",
        hint: "0-2",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "ca",
        label: "Number of Major Vessels",
        hint: "0-4",
        kind: FieldKind::Integer,
    },
    FieldDescriptor {
        name: "thal",
        label: "Thalassemia",
        hint: "1-3",
        kind: FieldKind::Integer,
    },
];

/// Look up a field descriptor by wire name.
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_thirteen_unique_names() {
        let mut names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn oldpeak_is_the_only_decimal_field() {
        let decimals: Vec<&str> = FIELDS
            .iter()
            .filter(|f| f.kind == FieldKind::Decimal)
            .map(|f| f.name)
            .collect();
        assert_eq!(decimals, vec!["oldpeak"]);
    }

    #[test]
    fn descriptor_lookup_matches_table_order() {
        let field = descriptor("thalach").expect("known field");
        assert_eq!(field.label, "Max Heart Rate Achieved");
        assert!(descriptor("heart_rate").is_none());
    }
}
