//! Sample descriptor documents.

/// A complete manifest touching every model field. All personas are valid.
///
/// Declares `modeltacceleratorservices`, `electronicsstore` and `backoffice`,
/// and points at `localextensions.xml` in the working directory.
pub const SAMPLE_MANIFEST_JSON: &str = r#"{
  "commerceSuiteVersion": "2211",
  "useCloudExtensionPack": true,
  "enableImageProcessingService": false,
  "extensions": [
    "modeltacceleratorservices",
    "electronicsstore",
    "backoffice"
  ],
  "extensionPacks": [
    {
      "name": "hybris-commerce-integrations",
      "version": "2211.15",
      "artifact": "de.hybris.platform:hybris-commerce-integrations:2211.15"
    }
  ],
  "troubleshootingModeEnabled": false,
  "disableImageReuse": true,
  "useConfig": {
    "extensions": {
      "location": "localextensions.xml",
      "exclude": ["solrfacetsearch"]
    },
    "properties": [
      { "location": "config/common.properties" },
      { "location": "config/backoffice.properties", "aspect": "backoffice", "persona": "development" }
    ],
    "solr": { "location": "solr" },
    "languages": { "location": "_LANGUAGES_" }
  },
  "storefrontAddons": [
    {
      "addon": "smarteditaddon",
      "storefront": "yacceleratorstorefront",
      "template": "yacceleratorstorefront"
    },
    {
      "addons": ["assistedservicestorefront", "customerticketingaddon"],
      "storefronts": ["electronicsstorefront", "apparelstorefront"]
    }
  ],
  "properties": [
    { "key": "mail.smtp.server", "value": "smtp.example.com", "persona": "production" },
    { "key": "mail.smtp.password", "value": "changeme", "persona": "production", "secret": true },
    { "key": "build.parallel", "value": "true" }
  ],
  "aspects": [
    {
      "name": "backoffice",
      "properties": [
        { "key": "backoffice.sso.enabled", "value": "false", "persona": "staging" }
      ],
      "webapps": [
        { "name": "hybris-backoffice", "contextPath": "/backoffice" },
        { "name": "mediaweb", "contextPath": "/medias" }
      ]
    }
  ],
  "tests": {
    "extensions": ["modeltacceleratorservices"],
    "annotations": ["UnitTests", "IntegrationTests"],
    "packages": ["com.example.*"],
    "excludedPackages": ["de.hybris.*"]
  },
  "webTests": {
    "extensions": ["electronicsstore"],
    "annotations": ["UnitTests"],
    "packages": ["de.hybris.platform.*"]
  }
}"#;

/// A realistic `localextensions.xml` with path entries, comments and a
/// repeated extension.
///
/// Names in document order: `backoffice`, `smartedit`, `electronicsstore`,
/// `yacceleratorstorefront`, `backoffice`.
pub const SAMPLE_LOCAL_EXTENSIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<hybrisconfig xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="resources/schemas/extensions.xsd">
  <extensions>
    <path dir="${HYBRIS_BIN_DIR}" autoload="false"/>
    <!-- platform -->
    <extension name="backoffice"/>
    <extension name="smartedit"/>
    <path dir="${HYBRIS_BIN_DIR}/custom" autoload="true"/>
    <extension name="electronicsstore"/>
    <extension dir="${HYBRIS_BIN_DIR}/custom/yacceleratorstorefront" name="yacceleratorstorefront"/>
    <extension name="backoffice"/>
  </extensions>
</hybrisconfig>
"#;

/// Render a minimal `localextensions.xml` declaring `names` in order.
pub fn local_extensions_xml(names: &[&str]) -> String {
    let mut xml = String::from("<hybrisconfig>\n  <extensions>\n");
    for name in names {
        xml.push_str(&format!("    <extension name=\"{name}\"/>\n"));
    }
    xml.push_str("  </extensions>\n</hybrisconfig>\n");
    xml
}
