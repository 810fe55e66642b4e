//! End-to-end behaviour of the load, validate and query pipeline when the
//! inputs are partly broken.

use pretty_assertions::assert_eq;
use ymanifest_core::{
    Dispatcher, Error, ExtensionSet, Manifest, Query, QueryOutput, load_manifest,
    validate_personas,
};
use ymanifest_test_utils::{TestProject, local_extensions_xml};

const MIXED_PERSONA_MANIFEST: &str = r#"{
  "commerceSuiteVersion": "2211.15",
  "extensions": ["core", "payment"],
  "useConfig": { "extensions": { "location": "localextensions.xml" } },
  "storefrontAddons": [
    { "addon": "a1", "storefront": "s1" },
    { "addon": "a2", "storefronts": ["s2", "s3"] }
  ],
  "properties": [
    { "key": "db.pool.size", "value": "20", "persona": "qa" },
    { "key": "cache.enabled", "value": "true", "persona": "staging" }
  ]
}"#;

#[test]
fn invalid_persona_does_not_block_queries() {
    let project = TestProject::new();
    project.write_manifest(MIXED_PERSONA_MANIFEST);
    project.write_local_extensions("localextensions.xml", &local_extensions_xml(&["payment", "search"]));

    let (manifest, error) = load_manifest(&project.manifest_path()).into_parts();
    assert!(error.is_none());

    let violations = validate_personas(&manifest);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].to_string().contains("[db.pool.size]"));

    let dispatcher = Dispatcher::new(&manifest).with_base_dir(project.root());

    let (extensions, error) = dispatcher.run(Query::Extensions).into_parts();
    assert!(error.is_none());
    let expected: ExtensionSet = ["core", "payment", "search"].into_iter().collect();
    assert_eq!(extensions, QueryOutput::Extensions(expected));

    let (addons, error) = dispatcher.run(Query::Addons).into_parts();
    assert!(error.is_none());
    assert_eq!(addons, QueryOutput::Addons(manifest.storefront_addons().to_vec()));
}

#[test]
fn unreadable_local_descriptor_falls_back_to_manifest_extensions() {
    let project = TestProject::new();
    project.write_manifest(MIXED_PERSONA_MANIFEST);
    project.write_local_extensions("localextensions.xml", "<hybrisconfig><extensions>");

    let manifest = load_manifest(&project.manifest_path()).recover(|e| panic!("{e}"));
    let outcome = Dispatcher::new(&manifest).with_base_dir(project.root()).run(Query::Extensions);

    assert!(matches!(outcome.error(), Some(Error::Decode { .. })));
    let expected: ExtensionSet = ["core", "payment"].into_iter().collect();
    assert_eq!(outcome.value(), &QueryOutput::Extensions(expected));
}

#[test]
fn missing_manifest_still_answers_with_defaults() {
    let project = TestProject::new();

    let outcome = load_manifest(&project.manifest_path());
    assert!(matches!(outcome.error(), Some(Error::FileRead { .. })));

    let manifest = outcome.recover(|_| {});
    assert_eq!(manifest, Manifest::default());
    assert!(validate_personas(&manifest).is_empty());

    let dispatcher = Dispatcher::new(&manifest).with_base_dir(project.root()).with_latest(true);
    let (version, error) = dispatcher.run(Query::Version).into_parts();
    assert!(error.is_none());
    assert_eq!(version, QueryOutput::Version(":latest".into()));

    let (extensions, error) = dispatcher.run(Query::Extensions).into_parts();
    assert!(error.is_none());
    assert_eq!(extensions.to_string(), "");
}

#[test]
fn mistyped_manifest_value_keeps_the_rest_queryable() {
    let project = TestProject::new();
    project.write_manifest(
        r#"{
  "commerceSuiteVersion": "2211",
  "extensions": ["core"],
  "troubleshootingModeEnabled": "yes",
  "tests": [{ "annotations": ["UnitTests"] }],
  "useConfig": { "extensions": { "location": "test-resources/localextensions.xml" } }
}"#,
    );
    project.write_local_extensions(
        "test-resources/localextensions.xml",
        &local_extensions_xml(&["payment"]),
    );

    let outcome = load_manifest(&project.manifest_path());
    assert!(matches!(outcome.error(), Some(Error::Decode { .. })));
    let manifest = outcome.recover(|_| {});

    let dispatcher = Dispatcher::new(&manifest)
        .with_base_dir(project.root())
        .with_latest(true);
    let (version, error) = dispatcher.run(Query::Version).into_parts();
    assert!(error.is_none());
    assert_eq!(version, QueryOutput::Version("2211:latest".into()));

    let (extensions, error) = dispatcher.run(Query::Extensions).into_parts();
    assert!(error.is_none());
    let expected: ExtensionSet = ["core", "payment"].into_iter().collect();
    assert_eq!(extensions, QueryOutput::Extensions(expected));
}
