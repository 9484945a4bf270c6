use std::sync::Arc;

use sasl_registry::{
    all_names, properties_of, Binding, Capability, ClientParams, CredentialCodec, Error,
    FactoryRef, Mechanism, Registry, Result, SaslClient, SaslClientFactory, SaslServer,
    SaslServerFactory, ScramCredential, ServerParams,
};

use proptest::prelude::*;

struct Stub(String);

impl SaslClientFactory for Stub {
    fn implementation(&self) -> &str {
        &self.0
    }

    fn create_client(&self, _: Mechanism, _: &ClientParams) -> Result<Box<dyn SaslClient>> {
        Err(Error::Internal("stub".into()))
    }
}

impl SaslServerFactory for Stub {
    fn implementation(&self) -> &str {
        &self.0
    }

    fn create_server(&self, _: Mechanism, _: &ServerParams) -> Result<Box<dyn SaslServer>> {
        Err(Error::Internal("stub".into()))
    }
}

impl CredentialCodec for Stub {
    fn implementation(&self) -> &str {
        &self.0
    }

    fn encode(&self, _: Mechanism, _: &ScramCredential) -> Result<Vec<u8>> {
        Err(Error::Internal("stub".into()))
    }

    fn decode(&self, _: Mechanism, _: &[u8]) -> Result<ScramCredential> {
        Err(Error::Internal("stub".into()))
    }
}

fn factory_for(capability: Capability, name: String) -> FactoryRef {
    let stub = Arc::new(Stub(name));
    match capability {
        Capability::ClientFactory => FactoryRef::Client(stub),
        Capability::ServerFactory => FactoryRef::Server(stub),
        Capability::CredentialCodec => FactoryRef::Codec(stub),
    }
}

// Strategy for generating capabilities
fn capabilities() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::ClientFactory),
        Just(Capability::ServerFactory),
        Just(Capability::CredentialCodec),
    ]
}

// Strategy for generating catalog mechanisms
fn mechanisms() -> impl Strategy<Value = Mechanism> {
    prop::sample::select(Mechanism::ALL.to_vec())
}

// Strategy for generating pairs a registry accepts
fn applicable_pairs() -> impl Strategy<Value = (Capability, Mechanism)> {
    (capabilities(), mechanisms())
        .prop_filter("not applicable", |(c, m)| m.properties().supports(*c))
}

// Strategy for generating sets of distinct (capability, mechanism) pairs
fn pair_sets() -> impl Strategy<Value = Vec<(Capability, Mechanism)>> {
    prop::collection::btree_set(applicable_pairs(), 0..20)
        .prop_map(|set| set.into_iter().collect())
}

// Strategy for names outside the catalog
fn foreign_names() -> impl Strategy<Value = String> {
    "[A-Za-z0-9-]{0,24}".prop_filter("catalog name", |name| {
        !all_names().any(|known| known == name.as_str())
    })
}

fn build(pairs: &[(Capability, Mechanism)]) -> (Registry, Vec<FactoryRef>) {
    let factories: Vec<FactoryRef> = pairs
        .iter()
        .map(|(c, m)| factory_for(*c, format!("{c}/{m}")))
        .collect();
    let bindings = pairs
        .iter()
        .zip(&factories)
        .map(|((c, m), f)| Binding::new(*c, m.as_str(), f.clone()));
    let registry = Registry::build(bindings).expect("distinct pairs must build");
    (registry, factories)
}

proptest! {
    #[test]
    fn test_lookup_returns_supplied_factory(pairs in pair_sets()) {
        let (registry, factories) = build(&pairs);
        prop_assert_eq!(registry.len(), pairs.len());
        for ((capability, mechanism), factory) in pairs.iter().zip(&factories) {
            let found = registry.lookup(*capability, *mechanism).unwrap();
            prop_assert!(found.same_factory(factory));
        }
    }

    #[test]
    fn test_supported_partitions_catalog(pairs in pair_sets(), capability in capabilities()) {
        let (registry, _) = build(&pairs);
        let supported = registry.supported_mechanisms(capability);
        for mechanism in Mechanism::ALL {
            let result = registry.lookup(capability, mechanism);
            if supported.contains(&mechanism) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(
                    matches!(result, Err(Error::NoSuchMechanism { .. })),
                    "{} should not be registered",
                    mechanism
                );
            }
        }
    }

    #[test]
    fn test_queries_are_idempotent(
        pairs in pair_sets(),
        capability in capabilities(),
        mechanism in mechanisms(),
    ) {
        let (registry, _) = build(&pairs);
        let first = (
            registry.is_registered(capability, mechanism),
            registry.supported_mechanisms(capability),
            registry.lookup(capability, mechanism).map(|f| f.implementation().to_string()),
        );
        for _ in 0..3 {
            let again = (
                registry.is_registered(capability, mechanism),
                registry.supported_mechanisms(capability),
                registry.lookup(capability, mechanism).map(|f| f.implementation().to_string()),
            );
            prop_assert_eq!(&first, &again);
        }
    }

    #[test]
    fn test_foreign_names_never_resolve(name in foreign_names(), capability in capabilities()) {
        prop_assert_eq!(properties_of(&name), Err(Error::UnknownMechanism(name.clone())));

        let binding = Binding::new(capability, name.clone(), factory_for(capability, "x".into()));
        let result = Registry::build(vec![binding]);
        prop_assert!(matches!(result, Err(Error::UnknownMechanism(ref n)) if *n == name));
    }

    #[test]
    fn test_duplicate_pair_never_builds(
        pairs in pair_sets(),
        (capability, mechanism) in applicable_pairs(),
    ) {
        let mut bindings: Vec<Binding> = pairs
            .iter()
            .filter(|pair| **pair != (capability, mechanism))
            .map(|(c, m)| Binding::new(*c, m.as_str(), factory_for(*c, "other".into())))
            .collect();
        bindings.push(Binding::new(capability, mechanism.as_str(), factory_for(capability, "first".into())));
        bindings.push(Binding::new(capability, mechanism.as_str(), factory_for(capability, "second".into())));

        match Registry::build(bindings) {
            Err(Error::DuplicateBinding { first, second, .. }) => {
                prop_assert_eq!(first, "first");
                prop_assert_eq!(second, "second");
            }
            other => prop_assert!(false, "Expected DuplicateBinding, got {:?}", other),
        }
    }

    #[test]
    fn test_codec_outside_scram_never_builds(pairs in pair_sets(), mechanism in mechanisms()) {
        prop_assume!(!mechanism.properties().supports(Capability::CredentialCodec));
        let mut bindings: Vec<Binding> = pairs
            .iter()
            .map(|(c, m)| Binding::new(*c, m.as_str(), factory_for(*c, "other".into())))
            .collect();
        bindings.push(Binding::new(
            Capability::CredentialCodec,
            mechanism.as_str(),
            factory_for(Capability::CredentialCodec, "codec".into()),
        ));

        prop_assert_eq!(
            Registry::build(bindings).unwrap_err(),
            Error::NotApplicable { capability: Capability::CredentialCodec, mechanism }
        );
    }

    #[test]
    fn test_plus_requires_channel_binding(mechanism in mechanisms()) {
        let props = mechanism.properties();
        prop_assert_eq!(props.requires_channel_binding, mechanism.as_str().ends_with("-PLUS"));
        prop_assert_eq!(props, properties_of(mechanism.as_str()).unwrap());
    }
}
