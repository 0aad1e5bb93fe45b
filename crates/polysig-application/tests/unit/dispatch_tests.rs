//! Tests for the dispatch registry
//!
//! Covers overload selection by positional and keyword types, duplicate
//! rejection, receiver passing, and concurrent read-only dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use polysig_application::dispatch::{AmbiguityPolicy, DispatchOptions, DispatchRegistry};
use polysig_domain::{CallArgs, Error, Invocation, Result, Signature, Value};

fn label(value: &Value) -> String {
    value
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default()
}

fn labelled(text: &'static str) -> impl Fn(&Invocation<'_>) -> Result<Value> + Send + Sync + 'static {
    move |_| Ok(Value::from(text))
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_string_and_int_overloads() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<String>("a"), labelled("string"))
        .unwrap();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("int"))
        .unwrap();

    let out = registry.invoke("f", &CallArgs::new().arg("hi")).unwrap();
    assert_eq!(label(&out), "string");

    let out = registry.invoke("f", &CallArgs::new().arg(5_i64)).unwrap();
    assert_eq!(label(&out), "int");

    match registry.invoke("f", &CallArgs::new().arg(5.0_f64)) {
        Err(Error::NoMatchingSignature {
            operation,
            arguments,
        }) => {
            assert_eq!(operation, "f");
            assert_eq!(arguments, "(f64)");
        }
        other => panic!("Expected NoMatchingSignature, got {other:?}"),
    }
}

#[test]
fn test_every_signature_selects_its_own_implementation() {
    let mut registry = DispatchRegistry::new();
    let signatures = [
        Signature::new(),
        Signature::new().param::<i64>("a"),
        Signature::new().param::<bool>("a"),
        Signature::new().param::<i64>("a").param::<String>("b"),
        Signature::new().param::<String>("a").param::<i64>("b"),
        Signature::new()
            .param::<f64>("x")
            .param::<f64>("y")
            .param::<f64>("z"),
    ];
    for (index, signature) in signatures.iter().enumerate() {
        registry
            .register("op", signature.clone(), move |_| Ok(Value::from(index)))
            .unwrap();
    }

    let calls = [
        CallArgs::new(),
        CallArgs::new().arg(1_i64),
        CallArgs::new().arg(true),
        CallArgs::new().arg(1_i64).arg("s"),
        CallArgs::new().arg("s").arg(1_i64),
        CallArgs::new().arg(1.0_f64).arg(2.0_f64).arg(3.0_f64),
    ];
    for (expected, args) in calls.iter().enumerate() {
        let out = registry.invoke("op", args).unwrap();
        assert_eq!(out.downcast_ref::<usize>(), Some(&expected), "call {args}");
    }
}

#[test]
fn test_no_coercion_between_integer_widths() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("i64"))
        .unwrap();

    assert!(registry.invoke("f", &CallArgs::new().arg(1_i32)).is_err());
    assert!(registry.invoke("f", &CallArgs::new().arg(1_u64)).is_err());
}

#[test]
fn test_wrong_arity_never_falls_back() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("one"))
        .unwrap();

    let two = CallArgs::new().arg(1_i64).arg(2_i64);
    assert!(matches!(
        registry.invoke("f", &two),
        Err(Error::NoMatchingSignature { .. })
    ));
    assert!(matches!(
        registry.invoke("f", &CallArgs::new()),
        Err(Error::NoMatchingSignature { .. })
    ));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_mixed_positional_and_keyword() {
    let mut registry = DispatchRegistry::new();
    registry
        .register(
            "f",
            Signature::new().param::<String>("a").param::<i64>("b"),
            |call| {
                let a = call.get::<String>("a")?;
                let b = call.get::<i64>("b")?;
                Ok(Value::from(format!("{a}:{b}")))
            },
        )
        .unwrap();

    let out = registry
        .invoke("f", &CallArgs::new().arg("x").kwarg("b", 5_i64))
        .unwrap();
    assert_eq!(label(&out), "x:5");

    let out = registry
        .invoke("f", &CallArgs::new().kwarg("b", 6_i64).kwarg("a", "y"))
        .unwrap();
    assert_eq!(label(&out), "y:6");
}

#[test]
fn test_keyword_type_must_match() {
    let mut registry = DispatchRegistry::new();
    registry
        .register(
            "f",
            Signature::new().param::<String>("a").param::<i64>("b"),
            labelled("ok"),
        )
        .unwrap();

    let args = CallArgs::new().arg("x").kwarg("b", "not an int");
    assert!(matches!(
        registry.invoke("f", &args),
        Err(Error::NoMatchingSignature { .. })
    ));
}

#[test]
fn test_keyword_selects_between_same_positional_prefix() {
    let mut registry = DispatchRegistry::new();
    registry
        .register(
            "f",
            Signature::new().param::<String>("a").param::<i64>("count"),
            labelled("count"),
        )
        .unwrap();
    registry
        .register(
            "f",
            Signature::new().param::<String>("a").param::<bool>("flag"),
            labelled("flag"),
        )
        .unwrap();

    let out = registry
        .invoke("f", &CallArgs::new().arg("x").kwarg("flag", true))
        .unwrap();
    assert_eq!(label(&out), "flag");

    let out = registry
        .invoke("f", &CallArgs::new().arg("x").kwarg("count", 2_i64))
        .unwrap();
    assert_eq!(label(&out), "count");
}

#[test]
fn test_reject_policy_reports_ambiguity() {
    let mut registry =
        DispatchRegistry::with_options(DispatchOptions::with_ambiguity(AmbiguityPolicy::Reject));
    registry
        .register(
            "f",
            Signature::new().param::<i64>("a").param::<String>("b"),
            labelled("first"),
        )
        .unwrap();
    registry
        .register(
            "f",
            Signature::new().param::<String>("b").param::<i64>("a"),
            labelled("second"),
        )
        .unwrap();

    let args = CallArgs::new().kwarg("a", 1_i64).kwarg("b", "x");
    assert!(matches!(
        registry.invoke("f", &args),
        Err(Error::AmbiguousCall { .. })
    ));

    // Positional calls stay unambiguous
    let out = registry
        .invoke("f", &CallArgs::new().arg("x").arg(1_i64))
        .unwrap();
    assert_eq!(label(&out), "second");
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_duplicate_signature_rejected_first_still_usable() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("first"))
        .unwrap();

    let err = registry
        .register("f", Signature::new().param::<i64>("other"), labelled("second"))
        .unwrap_err();
    assert!(err.is_registration_error());
    match err {
        Error::DuplicateSignature {
            operation,
            signature,
        } => {
            assert_eq!(operation, "f");
            assert_eq!(signature, "(other: i64)");
        }
        other => panic!("Expected DuplicateSignature, got {other:?}"),
    }

    let out = registry.invoke("f", &CallArgs::new().arg(1_i64)).unwrap();
    assert_eq!(label(&out), "first");
    assert_eq!(registry.signatures("f").len(), 1);
}

#[test]
fn test_same_types_under_different_operations() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("f"))
        .unwrap();
    registry
        .register("g", Signature::new().param::<i64>("a"), labelled("g"))
        .unwrap();

    assert_eq!(registry.operations(), vec!["f", "g"]);
    assert_eq!(registry.len(), 2);
    let out = registry.invoke("g", &CallArgs::new().arg(1_i64)).unwrap();
    assert_eq!(label(&out), "g");
}

#[test]
fn test_signatures_in_registration_order() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<bool>("a"), labelled("b"))
        .unwrap();
    registry
        .register("f", Signature::new().param::<i64>("a"), labelled("i"))
        .unwrap();

    let rendered: Vec<String> = registry
        .signatures("f")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["(a: bool)", "(a: i64)"]);
    assert!(registry.signatures("missing").is_empty());
}

// ============================================================================
// Invocation
// ============================================================================

#[test]
fn test_receiver_passed_first_and_not_counted() {
    struct Greeter {
        greeting: &'static str,
    }

    let mut registry = DispatchRegistry::new();
    registry
        .register("greet", Signature::new().param::<String>("name"), |call| {
            let greeter = call
                .receiver_as::<Greeter>()
                .ok_or_else(|| Error::handler(call.operation(), "missing receiver"))?;
            let bound = call.bound_positional();
            assert_eq!(bound.len(), 2);
            assert!(bound[0].is::<Greeter>());
            let name = call.get::<String>("name")?;
            Ok(Value::from(format!("{} {name}", greeter.greeting)))
        })
        .unwrap();

    let args = CallArgs::new()
        .arg("ada")
        .with_receiver(Value::new(Greeter { greeting: "hello" }));
    let out = registry.invoke("greet", &args).unwrap();
    assert_eq!(label(&out), "hello ada");

    // Without a receiver the implementation reports its own error unchanged
    let err = registry
        .invoke("greet", &CallArgs::new().arg("ada"))
        .unwrap_err();
    assert!(matches!(err, Error::Handler { .. }));
}

#[test]
fn test_resolve_does_not_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut registry = DispatchRegistry::new();
    registry
        .register("f", Signature::new().param::<i64>("a"), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::unit())
        })
        .unwrap();

    let args = CallArgs::new().arg(1_i64);
    let overload = registry.resolve("f", &args).unwrap();
    assert_eq!(overload.signature().to_string(), "(a: i64)");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    registry.dispatcher("f").unwrap().call(&args).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_dispatch_from_threads() {
    let mut registry = DispatchRegistry::new();
    registry
        .register("double", Signature::new().param::<i64>("n"), |call| {
            Ok(Value::from(call.get::<i64>("n")? * 2))
        })
        .unwrap();
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8_i64)
        .map(|n| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        registry
                            .invoke("double", &CallArgs::new().arg(n))
                            .ok()
                            .and_then(|v| v.downcast_ref::<i64>().copied())
                    })
                    .all(|out| out == Some(n * 2))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
