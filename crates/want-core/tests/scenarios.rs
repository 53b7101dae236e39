use serde_json::{json, Value};
use want_core::prelude::*;
use want_core::FailureKind;
use want_test_utils::{
    as_power_action, find_vm, init_tracing, params_from, power_action, sample_params,
    PowerAction,
};

#[test]
fn absent_flag_probe_returns_default() {
    init_tracing();
    let params = params_from(&[("vm", Some("web1"))]);

    let out = want_probe::<Value>("locked")
        .default(false)
        .resolve(&params)
        .unwrap();

    assert_eq!(out, Outcome::Resolved(Param::Present(json!(false))));
}

#[test]
fn empty_flag_uses_no_value_override() {
    init_tracing();
    let params = sample_params();

    let out = want::<Value>("locked")
        .no_value(true)
        .resolve(&params)
        .unwrap();

    assert_eq!(out.into_value(), Some(json!(true)));
}

#[test]
fn unknown_vm_fails_not_found_with_value() {
    init_tracing();
    let params = sample_params();

    let err = want::<Value>("vm")
        .lookup(&find_vm)
        .not_found(NotFoundPolicy::Raise)
        .id("vm")
        .resolve(&params)
        .unwrap_err();

    match err {
        ParamError::NotFound { id, value } => {
            assert_eq!(id.as_deref(), Some("vm"));
            assert_eq!(value, Param::Present(json!("web1")));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn known_vm_is_looked_up() {
    let params = params_from(&[("vm", Some("db2"))]);

    let vm = want_strict::<Value>("vm")
        .lookup(&find_vm)
        .resolve(&params)
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(vm["id"], json!(2));
}

#[test]
fn absent_type_default_is_coerced() {
    init_tracing();
    let params = params_from(&[]);

    let out = want::<Value>("type")
        .missing(MissingPolicy::Ignore)
        .default("savestate")
        .coerce(&power_action)
        .resolve(&params)
        .unwrap();

    assert_eq!(as_power_action(out.into_value().unwrap()), PowerAction::SaveState);
}

#[test]
fn bogus_type_is_syntax_error_under_every_policy() {
    init_tracing();
    let params = params_from(&[("type", Some("bogus"))]);

    for missing in [MissingPolicy::Raise, MissingPolicy::Return, MissingPolicy::Ignore] {
        for not_found in [
            NotFoundPolicy::Raise,
            NotFoundPolicy::Ignore,
            NotFoundPolicy::RenderNotFound,
            NotFoundPolicy::Pass,
        ] {
            let err = want::<Value>("type")
                .policy(Policy::new(missing, not_found))
                .coerce(&power_action)
                .resolve(&params)
                .unwrap_err();

            assert_eq!(err.kind(), FailureKind::Syntax);
            assert_eq!(err.id(), Some("type"));
            match err {
                ParamError::Syntax { value, .. } => assert_eq!(value, Param::Present(json!("bogus"))),
                other => panic!("expected Syntax, got {other:?}"),
            }
        }
    }
}

#[test]
fn strict_absent_key_fails_missing() {
    let params = sample_params();

    let err = want_strict::<Value>("flavor").resolve(&params).unwrap_err();

    assert!(err.is_missing());
    assert_eq!(err.id(), Some("flavor"));
    assert_eq!(err.to_string(), "missing parameter 'flavor'");
}

#[test]
fn tolerant_never_fails_on_absence_or_lookup() {
    let params = sample_params();

    let missing = want::<Value>("flavor").resolve(&params).unwrap();
    let not_found = want::<Value>("vm").lookup(&find_vm).resolve(&params).unwrap();

    assert_eq!(missing, Outcome::Resolved(Param::Missing));
    assert_eq!(not_found, Outcome::Resolved(Param::Missing));
}

#[test]
fn not_found_can_pass_to_next_handler() {
    let params = sample_params();

    let out = want_strict::<Value>("vm")
        .lookup(&find_vm)
        .not_found(NotFoundPolicy::Pass)
        .resolve(&params)
        .unwrap();

    assert_eq!(out.terminal(), Some(Terminal::Pass));
}

#[test]
fn literal_no_value_behaves_like_keyed_no_value() {
    let params = sample_params();

    let keyed = want::<Value>("locked").no_value("on").resolve(&params).unwrap();
    let literal = want::<Value>(Param::NoValue)
        .no_value("on")
        .resolve(&params)
        .unwrap();

    assert_eq!(keyed, literal);
}

#[test]
fn literal_value_runs_full_pipeline() {
    let params = sample_params();

    let vm = want_strict::<Value>(ParamRef::literal(json!("db1")))
        .id("vm")
        .lookup(&find_vm)
        .map(|v| v["name"].clone())
        .resolve(&params)
        .unwrap();

    assert_eq!(vm.into_value(), Some(json!("db1")));
}

#[test]
fn undefined_sentinel_replaces_no_value() {
    struct Toggle;

    impl Coerce<Value> for Toggle {
        fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
            match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(s) if s == "undefined" => Ok(json!(true)),
                other => Err(CoercionError::coercion(format!("not a toggle: {other}"))),
            }
        }

        fn undefined(&self) -> Option<Value> {
            Some(json!("undefined"))
        }
    }

    let params = sample_params();

    let without_override = want::<Value>("locked").coerce(&Toggle).resolve(&params).unwrap();
    let with_override = want::<Value>("locked")
        .no_value(false)
        .coerce(&Toggle)
        .resolve(&params)
        .unwrap();

    assert_eq!(without_override.into_value(), Some(json!(true)));
    assert_eq!(with_override.into_value(), Some(json!(false)));
}

#[test]
fn unrecognised_coercer_failure_is_propagated() {
    let failing = |_: &Value| -> Result<Value, CoercionError> {
        Err(CoercionError::other(std::io::Error::new(
            std::io::ErrorKind::Other,
            "backend down",
        )))
    };
    let params = sample_params();

    let err = want::<Value>("count").coerce(&failing).resolve(&params).unwrap_err();

    assert_eq!(err.kind(), FailureKind::Coercer);
    assert!(err.to_string().contains("backend down"));
}

#[test]
fn bare_vm_flag_fails_lookup() {
    init_tracing();
    let params = params_from(&[("vm", None)]);
    let nothing = |_: &Value| -> Option<Value> { None };

    let err = want_strict::<Value>("vm")
        .lookup(&nothing)
        .resolve(&params)
        .unwrap_err();
    match err {
        ParamError::NotFound { id, value } => {
            assert_eq!(id.as_deref(), Some("vm"));
            assert_eq!(value, Param::NoValue);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    let rendered = want_strict::<Value>("vm")
        .lookup(&find_vm)
        .not_found(NotFoundPolicy::RenderNotFound)
        .resolve(&params)
        .unwrap();
    assert_eq!(rendered.terminal(), Some(Terminal::NotFound));
}

#[test]
fn bare_vm_flag_with_no_value_override_is_looked_up() {
    let params = params_from(&[("vm", None)]);

    let vm = want_strict::<Value>("vm")
        .no_value("db1")
        .lookup(&find_vm)
        .resolve(&params)
        .unwrap();

    assert_eq!(vm.into_value(), Some(json!({"id": 1, "name": "db1"})));
}
