//! Bootstrap Tests

use std::sync::Arc;
use std::time::Duration;

use polysig_application::dispatch::AmbiguityPolicy;
use polysig_domain::{CallArgs, Error, Signature, Value};
use polysig_infrastructure::bootstrap::{CoreInitializer, init_core};
use polysig_infrastructure::config::{
    AppConfig, ConfigBuilder, DispatchConfig, LoggingConfig, SingletonConfig,
};

fn strict_config() -> AppConfig {
    ConfigBuilder::new()
        .with_dispatch(DispatchConfig {
            ambiguity: AmbiguityPolicy::Reject,
        })
        .with_singleton(SingletonConfig {
            slow_init_warn_ms: 10,
        })
        .build()
}

#[test]
fn test_registry_carries_configured_policy() {
    let core = init_core(strict_config()).unwrap();
    let mut registry = core.dispatch_registry();
    assert_eq!(registry.options().ambiguity, AmbiguityPolicy::Reject);

    registry
        .register(
            "f",
            Signature::new().param::<i64>("a").param::<bool>("b"),
            |_| Ok(Value::unit()),
        )
        .unwrap();
    registry
        .register(
            "f",
            Signature::new().param::<bool>("b").param::<i64>("a"),
            |_| Ok(Value::unit()),
        )
        .unwrap();

    let args = CallArgs::new().kwarg("a", 1_i64).kwarg("b", true);
    assert!(matches!(
        registry.invoke("f", &args),
        Err(Error::AmbiguousCall { .. })
    ));
}

#[test]
fn test_registries_are_independent() {
    let core = init_core(AppConfig::default()).unwrap();
    let mut first = core.dispatch_registry();
    first
        .register("f", Signature::new(), |_| Ok(Value::unit()))
        .unwrap();
    assert!(core.dispatch_registry().is_empty());
}

#[tokio::test]
async fn test_singletons_use_configured_options_and_are_shared() {
    let core = init_core(strict_config()).unwrap();
    assert_eq!(
        core.singletons().options().slow_init_threshold,
        Some(Duration::from_millis(10))
    );

    let a = core
        .singletons()
        .get_or_create(|| Ok(String::from("shared")))
        .await
        .unwrap();
    let b = core.clone().singletons().get::<String>().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_initializer_propagates_logging_errors() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "nope".to_string(),
            ..LoggingConfig::default()
        })
        .build();
    let result = CoreInitializer::new(config).initialize();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}
