use pkg_hub_catalog::{Language, LoadError, load_catalog, parse_catalog_json, parse_catalog_yaml};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const CATALOG_JSON: &str = r#"
{
  "packages": [
    {
      "name": "@aws-cdk/aws-iot",
      "description": "The CDK Construct Library for AWS::IoT",
      "version": "1.120.0",
      "languages": {
        "python": { "module": "aws_cdk.aws_iot", "distName": "aws-cdk.aws-iot" },
        "dotnet": { "namespace": "Amazon.CDK.AWS.IoT" },
        "java": { "package": "software.amazon.awscdk.services.iot" }
      },
      "author": { "name": "Amazon Web Services", "url": "https://aws.amazon.com" },
      "keywords": ["aws", "cdk", "iot"]
    },
    {
      "name": "cdk-watchful",
      "version": "0.5.0",
      "languages": { "python": {} },
      "tags": ["monitoring"]
    }
  ]
}
"#;

#[test]
fn load_catalog_from_json() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "catalog.json", CATALOG_JSON);

    let catalog = load_catalog(&tmp.path().join("catalog.json")).unwrap();
    assert_eq!(catalog.len(), 2);

    let iot = &catalog.packages[0];
    assert_eq!(iot.name, "@aws-cdk/aws-iot");
    assert_eq!(iot.version, "1.120.0");
    assert!(iot.supports(Language::DotNet));
    assert!(!iot.supports(Language::Go));
    assert_eq!(
        iot.languages["python"].module.as_deref(),
        Some("aws_cdk.aws_iot")
    );
    assert!(iot.languages["python"].extra.contains_key("distName"));
    assert_eq!(iot.author.as_ref().map(|a| a.name.as_str()), Some("Amazon Web Services"));
    assert_eq!(iot.keywords.len(), 3);

    let watchful = &catalog.packages[1];
    assert_eq!(watchful.description, "");
    assert!(watchful.tags.contains("monitoring"));
}

#[test]
fn load_catalog_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "catalog.yml",
        r#"
packages:
  - name: cdk-nag
    version: 2.0.0
    description: Check CDK applications for best practices
    languages:
      typescript: {}
      go:
        module: github.com/cdklabs/cdk-nag-go
"#,
    );

    let catalog = load_catalog(&tmp.path().join("catalog.yml")).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.packages[0].supported_languages(),
        vec![Language::TypeScript, Language::Go]
    );
}

#[test]
fn duplicate_names_keep_first_entry() {
    let catalog = parse_catalog_json(
        r#"{"packages": [
            {"name": "a", "version": "1.0.0"},
            {"name": "b", "version": "1.0.0"},
            {"name": "a", "version": "2.0.0"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find("a").map(|e| e.version.as_str()), Some("1.0.0"));
}

#[test]
fn catalog_order_is_preserved() {
    let catalog = parse_catalog_yaml(
        r#"
packages:
  - { name: zeta, version: "1" }
  - { name: alpha, version: "1" }
  - { name: mid, version: "1" }
"#,
    )
    .unwrap();
    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn missing_packages_key_is_empty_catalog() {
    let catalog = parse_catalog_json("{}").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn unsupported_extension_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "catalog.txt", CATALOG_JSON);

    let err = load_catalog(&tmp.path().join("catalog.txt")).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalog(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn malformed_json_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "catalog.json", r#"{"packages": [{"name": 3}]}"#);

    let err = load_catalog(&tmp.path().join("catalog.json")).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("catalog.json"));
}
