//! dbt artifact ingestion: `manifest.json` models merged with
//! `catalog.json` columns into dataset description files.

use crate::error::{ReadinessError, Result};
use crate::types::dataset::DatasetFile;
use crate::types::metadata::{ColumnMetadata, MetadataRecord};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSignals {
    pub count: u32,
    pub has_freshness: bool,
    pub has_volume: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbtModel {
    pub unique_id: String,
    pub name: String,
    pub full_name: String,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub meta: Map<String, Value>,
    /// Column definitions declared in the manifest.
    pub columns: Vec<ColumnMetadata>,
    pub tests: TestSignals,
}

/// Catalog columns keyed by node unique id.
pub type CatalogColumns = BTreeMap<String, Vec<ColumnMetadata>>;

fn nodes<'a>(data: &'a Value, artifact: &str) -> Result<&'a Map<String, Value>> {
    let object = data
        .as_object()
        .ok_or_else(|| ReadinessError::DbtParse(format!("{artifact} must be a JSON object")))?;
    let nodes = object
        .get("nodes")
        .ok_or_else(|| ReadinessError::DbtParse(format!("{artifact} missing 'nodes' key")))?;
    nodes
        .as_object()
        .ok_or_else(|| ReadinessError::DbtParse(format!("{artifact} 'nodes' must be an object")))
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn object_field(value: &Value, key: &str) -> Map<String, Value> {
    value
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Model nodes from a parsed `manifest.json`, ordered by unique id.
pub fn parse_manifest(manifest: &Value) -> Result<Vec<DbtModel>> {
    let mut models = Vec::new();
    for (unique_id, node) in nodes(manifest, "manifest")? {
        if node.get("resource_type").and_then(Value::as_str) != Some("model") {
            continue;
        }

        let name = str_field(node, "name").unwrap_or_default();
        let schema = str_field(node, "schema").unwrap_or_default();
        let full_name = match str_field(node, "database").filter(|db| !db.is_empty()) {
            Some(database) => format!("{database}.{schema}.{name}"),
            None => format!("{schema}.{name}"),
        };

        let columns = object_field(node, "columns")
            .iter()
            .map(|(column_name, info)| ColumnMetadata {
                name: column_name.clone(),
                description: str_field(info, "description"),
                nullable: None,
                data_type: None,
            })
            .collect();

        models.push(DbtModel {
            unique_id: unique_id.clone(),
            name,
            full_name,
            alias: str_field(node, "alias"),
            description: str_field(node, "description"),
            meta: object_field(node, "meta"),
            columns,
            tests: extract_tests(node),
        });
    }
    models.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
    debug!(models = models.len(), "manifest parsed");
    Ok(models)
}

/// Test signals declared on a model. A `config.tests` list takes precedence
/// over the `meta` hints.
fn extract_tests(node: &Value) -> TestSignals {
    let mut signals = TestSignals::default();

    if let Some(meta) = node.get("meta") {
        if let Some(tests) = meta.get("tests").and_then(Value::as_array) {
            signals.count = len_u32(tests);
        }
        if let Some(freshness) = meta.get("freshness_check").and_then(Value::as_bool) {
            signals.has_freshness = freshness;
        }
        if let Some(volume) = meta.get("volume_check").and_then(Value::as_bool) {
            signals.has_volume = volume;
        }
    }

    if let Some(tests) = node
        .get("config")
        .and_then(|config| config.get("tests"))
        .and_then(Value::as_array)
    {
        let names = tests
            .iter()
            .map(|test| match test {
                Value::String(name) => name.to_lowercase(),
                other => other.to_string().to_lowercase(),
            })
            .collect::<Vec<_>>();
        signals.count = len_u32(tests);
        signals.has_freshness = names.iter().any(|name| name.contains("freshness"));
        signals.has_volume = names
            .iter()
            .any(|name| name.contains("volume") || name.contains("row_count"));
    }

    signals
}

fn len_u32(items: &[Value]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

/// Table columns from a parsed `catalog.json`. Nodes without columns are
/// left out.
pub fn parse_catalog(catalog: &Value) -> Result<CatalogColumns> {
    let mut tables = CatalogColumns::new();
    for (unique_id, node) in nodes(catalog, "catalog")? {
        let is_table = node
            .get("metadata")
            .and_then(|metadata| metadata.get("type"))
            .and_then(Value::as_str)
            == Some("table");
        if !is_table {
            continue;
        }

        let columns = object_field(node, "columns")
            .iter()
            .map(|(column_name, info)| {
                let data_type = str_field(info, "type").unwrap_or_default();
                ColumnMetadata {
                    name: column_name.clone(),
                    description: str_field(info, "comment")
                        .filter(|comment| !comment.is_empty())
                        .or_else(|| str_field(info, "description")),
                    nullable: parse_nullable(&data_type),
                    data_type: Some(data_type).filter(|value| !value.is_empty()),
                }
            })
            .collect::<Vec<_>>();

        if !columns.is_empty() {
            tables.insert(unique_id.clone(), columns);
        }
    }
    debug!(tables = tables.len(), "catalog parsed");
    Ok(tables)
}

/// Nullability from a column type string such as `INTEGER NOT NULL`.
pub fn parse_nullable(data_type: &str) -> Option<bool> {
    let upper = data_type.to_uppercase();
    if upper.contains("NOT NULL") {
        Some(false)
    } else if upper.contains("NULL") {
        Some(true)
    } else {
        None
    }
}

/// Dataset files for every model. Catalog columns win over the manifest's.
pub fn merge(models: &[DbtModel], catalog: &CatalogColumns) -> Vec<DatasetFile> {
    models
        .iter()
        .map(|model| {
            let columns = catalog
                .get(&model.unique_id)
                .cloned()
                .unwrap_or_else(|| model.columns.clone());
            let meta = &model.meta;
            let meta_str = |key: &str| meta.get(key).and_then(Value::as_str).map(str::to_string);
            let meta_bool = |key: &str| meta.get(key).and_then(Value::as_bool);
            let meta_count = |key: &str| {
                meta.get(key)
                    .and_then(Value::as_u64)
                    .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
            };

            DatasetFile {
                full_name: model.full_name.clone(),
                display_name: Some(
                    model
                        .alias
                        .clone()
                        .filter(|alias| !alias.is_empty())
                        .unwrap_or_else(|| model.name.clone()),
                ),
                location_type: Some("dbt".to_string()),
                producing_job: Some(model.unique_id.clone()),
                sla_hours: None,
                metadata: MetadataRecord {
                    owner_name: meta_str("owner"),
                    owner_contact: meta_str("owner_contact"),
                    description: model.description.clone(),
                    columns,
                    intended_use: meta_str("intended_use"),
                    limitations: meta_str("limitations"),
                    has_freshness_checks: model.tests.has_freshness,
                    has_volume_checks: model.tests.has_volume,
                    dbt_test_count: model.tests.count,
                    has_sla: meta_bool("has_sla").unwrap_or(false),
                    unresolved_failures_30d: meta_count("unresolved_failures_30d"),
                    breaking_changes_30d: meta_count("breaking_changes_30d"),
                    has_release_notes: meta_bool("has_release_notes").unwrap_or(false),
                    has_versioning: meta_bool("has_versioning").unwrap_or(false),
                    backward_compatible: meta_bool("backward_compatible"),
                },
            }
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|err| ReadinessError::DbtParse(format!("{}: {}", path.display(), err)))
}

/// Reads the artifacts from disk and merges them into dataset files.
pub fn load(manifest_path: &Path, catalog_path: Option<&Path>) -> Result<Vec<DatasetFile>> {
    let models = parse_manifest(&read_json(manifest_path)?)?;
    let catalog = match catalog_path {
        Some(path) => parse_catalog(&read_json(path)?)?,
        None => CatalogColumns::new(),
    };
    Ok(merge(&models, &catalog))
}
