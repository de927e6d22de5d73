//! Property-based tests for the schema validators

use framecheck::prelude::*;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name(), 0..max)
}

fn data_type() -> impl Strategy<Value = DataType> {
    prop::sample::select(vec![
        DataType::Boolean,
        DataType::Integer,
        DataType::Long,
        DataType::Double,
        DataType::String,
        DataType::Date,
    ])
}

fn field() -> impl Strategy<Value = Field> {
    (name(), data_type(), any::<bool>()).prop_map(|(n, t, nullable)| Field::new(n, t, nullable))
}

fn schema_of(columns: &[String]) -> Schema {
    columns
        .iter()
        .map(|c| Field::nullable(c.as_str(), DataType::String))
        .collect()
}

proptest! {
    #[test]
    fn prop_presence_passes_iff_all_present(
        columns in names(8),
        required in names(6),
    ) {
        let schema = schema_of(&columns);
        let all_present = required.iter().all(|r| columns.contains(r));
        prop_assert_eq!(
            validate_presence_of_columns(&schema, &required).is_ok(),
            all_present
        );
    }

    #[test]
    fn prop_missing_list_is_ordered_filter(
        columns in names(8),
        required in names(6),
    ) {
        let schema = schema_of(&columns);
        let expected: Vec<String> = required
            .iter()
            .filter(|r| !columns.contains(r))
            .cloned()
            .collect();

        match validate_presence_of_columns(&schema, &required) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(SchemaError::MissingColumn { missing, actual }) => {
                prop_assert_eq!(missing, expected);
                prop_assert_eq!(actual, columns);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn prop_absence_passes_iff_none_present(
        columns in names(8),
        prohibited in names(6),
    ) {
        let schema = schema_of(&columns);
        let none_present = !prohibited.iter().any(|p| columns.contains(p));
        prop_assert_eq!(
            validate_absence_of_columns(&schema, &prohibited).is_ok(),
            none_present
        );
    }

    #[test]
    fn prop_prohibited_list_is_ordered_filter(
        columns in names(8),
        prohibited in names(6),
    ) {
        let schema = schema_of(&columns);
        let expected: Vec<String> = prohibited
            .iter()
            .filter(|p| columns.contains(p))
            .cloned()
            .collect();

        match validate_absence_of_columns(&schema, &prohibited) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => prop_assert_eq!(err.offending_names(), expected),
        }
    }

    #[test]
    fn prop_fields_pass_iff_structurally_present(
        actual in prop::collection::vec(field(), 0..6),
        required in prop::collection::vec(field(), 0..4),
    ) {
        let schema = Schema::new(actual.clone());
        let all_present = required.iter().all(|r| actual.contains(r));
        prop_assert_eq!(
            validate_presence_of_fields(&schema, &required).is_ok(),
            all_present
        );
    }

    #[test]
    fn prop_changing_nullability_fails(
        actual in prop::collection::vec(field(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let schema = Schema::new(actual.clone());
        let mut flipped = pick.get(&actual).clone();
        flipped.nullable = !flipped.nullable;
        prop_assume!(!actual.contains(&flipped));

        let result = validate_presence_of_fields(&schema, [flipped.clone()]);
        prop_assert!(result.is_err());
        prop_assert!(validate_presence_of_fields_with(
            &schema,
            [flipped],
            FieldMatch::IgnoreNullable
        ).is_ok());
    }

    #[test]
    fn prop_changing_type_fails(
        actual in prop::collection::vec(field(), 1..6),
        pick in any::<prop::sample::Index>(),
        replacement in data_type(),
    ) {
        let schema = Schema::new(actual.clone());
        let mut changed = pick.get(&actual).clone();
        prop_assume!(changed.data_type != replacement);
        changed.data_type = replacement;
        prop_assume!(!actual.contains(&changed));

        prop_assert!(validate_presence_of_fields(&schema, [changed]).is_err());
    }

    #[test]
    fn prop_empty_requirements_always_pass(columns in names(8)) {
        let schema = schema_of(&columns);
        let none: Vec<String> = Vec::new();
        prop_assert!(validate_presence_of_columns(&schema, &none).is_ok());
        prop_assert!(validate_absence_of_columns(&schema, &none).is_ok());
        prop_assert!(validate_presence_of_fields(&schema, Vec::<Field>::new()).is_ok());
        prop_assert!(SchemaContract::new().validate(&schema).is_ok());
    }

    #[test]
    fn prop_column_checks_are_idempotent(
        columns in names(8),
        required in names(6),
        prohibited in names(6),
    ) {
        let schema = schema_of(&columns);

        let first = validate_presence_of_columns(&schema, &required);
        let second = validate_presence_of_columns(&schema, &required);
        prop_assert_eq!(first.clone(), second.clone());
        prop_assert_eq!(
            first.err().map(|e| e.to_string()),
            second.err().map(|e| e.to_string())
        );

        let first = validate_absence_of_columns(&schema, &prohibited);
        let second = validate_absence_of_columns(&schema, &prohibited);
        prop_assert_eq!(first.clone(), second.clone());
        prop_assert_eq!(
            first.err().map(|e| e.to_string()),
            second.err().map(|e| e.to_string())
        );
    }

    #[test]
    fn prop_field_check_is_idempotent(
        actual in prop::collection::vec(field(), 0..6),
        required in prop::collection::vec(field(), 0..4),
    ) {
        let schema = Schema::new(actual);
        let first = validate_presence_of_fields(&schema, &required);
        let second = validate_presence_of_fields(&schema, &required);
        prop_assert_eq!(first.clone(), second.clone());
        prop_assert_eq!(
            first.err().map(|e| e.to_string()),
            second.err().map(|e| e.to_string())
        );
    }

    #[test]
    fn prop_contract_validation_is_idempotent(
        actual in prop::collection::vec(field(), 0..6),
        required_columns in names(4),
        required_fields in prop::collection::vec(field(), 0..4),
        prohibited in names(4),
    ) {
        let schema = Schema::new(actual);
        let contract = SchemaContract::new()
            .require_columns(required_columns)
            .require_fields(required_fields)
            .prohibit_columns(prohibited);

        let first = contract.validate(&schema);
        let second = contract.validate(&schema);
        prop_assert_eq!(first.clone(), second.clone());
        prop_assert_eq!(
            first.err().map(|e| e.to_string()),
            second.err().map(|e| e.to_string())
        );
    }

    #[test]
    fn prop_contract_agrees_with_individual_checks(
        columns in names(8),
        required in names(4),
        prohibited in names(4),
    ) {
        let schema = schema_of(&columns);
        let contract = SchemaContract::new()
            .require_columns(required.clone())
            .prohibit_columns(prohibited.clone());

        let expected = usize::from(validate_presence_of_columns(&schema, &required).is_err())
            + usize::from(validate_absence_of_columns(&schema, &prohibited).is_err());

        match contract.validate(&schema) {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(violation) => prop_assert_eq!(violation.len(), expected),
        }
    }
}
