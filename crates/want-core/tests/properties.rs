use proptest::prelude::*;
use std::collections::BTreeMap;
use want_core::prelude::*;

fn policy_strategy() -> impl Strategy<Value = Policy> {
    let missing = prop_oneof![
        Just(MissingPolicy::Raise),
        Just(MissingPolicy::Return),
        Just(MissingPolicy::Ignore),
    ];
    let not_found = prop_oneof![
        Just(NotFoundPolicy::Raise),
        Just(NotFoundPolicy::Ignore),
        Just(NotFoundPolicy::RenderNotFound),
        Just(NotFoundPolicy::Pass),
    ];
    (missing, not_found).prop_map(|(m, n)| Policy::new(m, n))
}

fn source_strategy() -> impl Strategy<Value = BTreeMap<String, Option<i64>>> {
    prop::collection::btree_map("[a-z]{1,6}", prop::option::of(any::<i64>()), 0..8)
}

fn double(v: &i64) -> Result<i64, CoercionError> {
    v.checked_mul(2)
        .ok_or_else(|| CoercionError::constraint("overflow"))
}

fn never(_: &i64) -> Option<i64> {
    None
}

proptest! {
    #[test]
    fn prop_absent_key_yields_default(
        source in source_strategy(),
        default in any::<i64>(),
    ) {
        prop_assume!(!source.contains_key("ABSENT"));
        let out = want::<i64>("ABSENT")
            .missing(MissingPolicy::Return)
            .default(default)
            .coerce(&double)
            .lookup(&never)
            .map(|v| v + 1)
            .resolve(&source)
            .unwrap();
        prop_assert_eq!(out, Outcome::Resolved(Param::Present(default)));

        let ignored = want::<i64>("ABSENT")
            .default(default)
            .resolve(&source)
            .unwrap();
        prop_assert_eq!(ignored, Outcome::Resolved(Param::Present(default)));
    }

    #[test]
    fn prop_empty_value_yields_no_value(
        mut source in source_strategy(),
        key in "[a-z]{1,6}",
        policy in policy_strategy(),
    ) {
        source.insert(key.clone(), None);
        let out = Want::with_policy(key.as_str(), policy).resolve(&source).unwrap();
        prop_assert_eq!(out, Outcome::Resolved(Param::NoValue));
    }

    #[test]
    fn prop_strict_absent_key_is_missing_with_id(
        source in source_strategy(),
        key in "[A-Z]{1,6}",
    ) {
        let err = want_strict::<i64>(key.as_str()).resolve(&source).unwrap_err();
        prop_assert!(err.is_missing());
        prop_assert_eq!(err.id(), Some(key.as_str()));
    }

    #[test]
    fn prop_not_found_carries_coerced_value(
        key in "[a-z]{1,6}",
        raw in -1_000_000i64..1_000_000,
    ) {
        let mut source = BTreeMap::new();
        source.insert(key.clone(), Some(raw));
        let err = want_strict::<i64>(key.as_str())
            .coerce(&double)
            .lookup(&never)
            .resolve(&source)
            .unwrap_err();
        match err {
            ParamError::NotFound { id, value } => {
                prop_assert_eq!(id, Some(key));
                prop_assert_eq!(value, Param::Present(raw * 2));
            }
            other => prop_assert!(false, "expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn prop_identity_transform_keeps_coerced_value(
        key in "[a-z]{1,6}",
        raw in -1_000_000i64..1_000_000,
    ) {
        let mut source = BTreeMap::new();
        source.insert(key.clone(), Some(raw));
        let plain = want::<i64>(key.as_str()).coerce(&double).resolve(&source).unwrap();
        let identity = want::<i64>(key.as_str())
            .coerce(&double)
            .transform(|p| p)
            .resolve(&source)
            .unwrap();
        prop_assert_eq!(plain.clone(), identity);
        prop_assert_eq!(plain, Outcome::Resolved(Param::Present(raw * 2)));
    }

    #[test]
    fn prop_resolution_is_idempotent(
        source in source_strategy(),
        key in "[a-z]{1,6}",
        policy in policy_strategy(),
        default in prop::option::of(any::<i64>()),
    ) {
        let run = || {
            Want::<i64>::with_policy(key.as_str(), policy)
                .default_param(default.into())
                .resolve(&source)
                .map_err(|e| e.to_string())
        };
        prop_assert_eq!(run(), run());
    }
}
