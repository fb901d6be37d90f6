use std::collections::HashMap;

use retype_core::known::KnownType;
use retype_core::lang::operators;
use retype_core::lang::types::{collections, numerics};
use retype_core::types::SemanticType;

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::SwiftOperator> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(info.id.as_str(), info.spelling, "operator as_str mismatch for {:?}", info.id);
        assert_eq!(info.id.category(), info.category);

        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn collection_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, collections::CollectionTypeId> = HashMap::new();

    for info in collections::COLLECTION_TYPES {
        assert_eq!(collections::from_str(info.canonical), Some(info.id));
        assert_eq!(collections::as_str(info.id), info.canonical);
        assert_eq!(info.is_legacy, info.arity == 0, "legacy collections are exactly the untyped ones");
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate collection spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn numeric_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, numerics::NumericTypeId> = HashMap::new();

    for info in numerics::NUMERIC_TYPES {
        assert_eq!(numerics::from_str(info.canonical), Some(info.id));
        assert_eq!(numerics::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate numeric spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn known_type_json_shape() {
    let json = r#"{
        "typeName": "Person",
        "supertypeName": "NSObject",
        "constructors": [{ "parameters": [{ "label": "name", "name": "name", "type": "string" }] }],
        "properties": [
            { "name": "name", "type": "string" },
            { "name": "shared", "type": { "named": "Person" }, "isStatic": true }
        ],
        "methods": [
            { "name": "greet", "parameters": [{ "name": "other", "type": { "optional": { "named": "Person" } } }] }
        ]
    }"#;

    let ty: KnownType = serde_json::from_str(json).expect("valid known type json");

    assert_eq!(ty.supertype_name.as_deref(), Some("NSObject"));
    assert!(ty.constructor(&["name"]).is_some());
    assert_eq!(ty.property("shared", true).map(|p| &p.ty), Some(&SemanticType::named("Person")));

    let greet = ty.method("greet", &["_"], false).expect("unlabeled parameter defaults to wildcard");
    assert_eq!(greet.signature.return_type, SemanticType::Void);
    assert!(!greet.signature.is_static);
    assert_eq!(
        greet.signature.closure_type(),
        SemanticType::function(
            vec![SemanticType::optional(SemanticType::named("Person"))],
            SemanticType::Void
        )
    );
    assert_eq!(greet.signature.selector(), "greet(_:)");
}
