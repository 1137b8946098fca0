use anyhow::{Context, Result, anyhow};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Granularity from `multipleOf`, for numbers entered on a grid.
    pub step: Option<f64>,
    pub allowed: Option<Vec<String>>,
}

pub fn schema_of<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// One spec per property of a struct schema, in declaration order.
///
/// Title and description set on the field win over those of a referenced
/// definition.
pub fn specs_for_form(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("form schema has no properties")?;

    let required: Vec<&str> = root_obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(props.len());
    for (name, field_schema) in props {
        let local = field_schema
            .as_object()
            .with_context(|| format!("field schema for '{name}' is not an object"))?;
        let target = resolve_ref_obj(root_obj, local)
            .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

        let lookup = |key: &str| local.get(key).or_else(|| target.get(key));

        let Some(kind) = detect_field_kind(target.get("type")) else {
            continue;
        };

        let title = lookup("title")
            .and_then(|v| v.as_str())
            .unwrap_or(name)
            .to_string();
        let description = lookup("description")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let min = lookup("minimum")
            .or_else(|| lookup("exclusiveMinimum"))
            .and_then(|v| v.as_f64());
        let max = lookup("maximum")
            .or_else(|| lookup("exclusiveMaximum"))
            .and_then(|v| v.as_f64());
        let step = lookup("multipleOf").and_then(|v| v.as_f64());

        out.push(FieldSpec {
            name: name.clone(),
            title,
            description,
            required: required.contains(&name.as_str()),
            kind,
            min,
            max,
            step,
            allowed: enum_values(target),
        });
    }
    Ok(out)
}

/// String enums come out either as `enum: [..]` or, when variants carry
/// docs, as `oneOf` of `const`s.
fn enum_values(obj: &Map<String, Value>) -> Option<Vec<String>> {
    if let Some(arr) = obj.get("enum").and_then(|v| v.as_array()) {
        return Some(
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        );
    }
    let alts = obj
        .get("oneOf")
        .or_else(|| obj.get("anyOf"))
        .and_then(|v| v.as_array())?;
    let consts: Vec<String> = alts
        .iter()
        .filter_map(|alt| alt.get("const").and_then(|v| v.as_str()).map(str::to_string))
        .collect();
    (!consts.is_empty()).then_some(consts)
}

/// Resolve a local $ref like "#/$defs/ChestPainType" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let primitive = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => primitive(s),
        // unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(primitive),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClinicalInputs, FEATURE_NAMES};
    use serde_json::json;

    #[test]
    fn detect_field_kind_handles_all_primitives() {
        assert_eq!(detect_field_kind(Some(&json!("string"))), Some(FieldKind::String));
        assert_eq!(detect_field_kind(Some(&json!("integer"))), Some(FieldKind::Integer));
        assert_eq!(detect_field_kind(Some(&json!("number"))), Some(FieldKind::Number));
        assert_eq!(detect_field_kind(Some(&json!("boolean"))), Some(FieldKind::Boolean));
        assert!(detect_field_kind(Some(&json!("object"))).is_none());
        assert!(detect_field_kind(None).is_none());
    }

    #[test]
    fn detect_field_kind_handles_nullable_union() {
        assert_eq!(
            detect_field_kind(Some(&json!(["null", "integer"]))),
            Some(FieldKind::Integer)
        );
        assert_eq!(
            detect_field_kind(Some(&json!(["number", "null"]))),
            Some(FieldKind::Number)
        );
    }

    #[test]
    fn resolve_ref_obj_direct_returns_self() {
        let root = json!({"$defs": {}}).as_object().unwrap().clone();
        let me = json!({"type":"integer"}).as_object().unwrap().clone();
        let out = resolve_ref_obj(&root, &me).unwrap();
        assert_eq!(out.get("type").and_then(Value::as_str), Some("integer"));
    }

    #[test]
    fn resolve_ref_obj_follow_refs_and_unescape() {
        let root = json!({
            "$defs": {
                "a~b": { "inner/seg": { "type": "number" } }
            }
        })
        .as_object()
        .unwrap()
        .clone();

        // ref to "#/$defs/a~0b/inner~1seg" (escaped "~" and "/")
        let obj = json!({ "$ref": "#/$defs/a~0b/inner~1seg" })
            .as_object()
            .unwrap()
            .clone();

        let out = resolve_ref_obj(&root, &obj).expect("ref resolved");
        assert_eq!(out.get("type").and_then(Value::as_str), Some("number"));
    }

    #[test]
    fn enum_values_reads_both_encodings() {
        let plain = json!({"type": "string", "enum": ["a", "b"]});
        let consts = json!({"oneOf": [
            {"type": "string", "const": "a", "description": "first"},
            {"type": "string", "const": "b"}
        ]});
        assert_eq!(
            enum_values(plain.as_object().unwrap()),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            enum_values(consts.as_object().unwrap()),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(enum_values(json!({"type": "integer"}).as_object().unwrap()), None);
    }

    #[test]
    fn unresolvable_ref_is_an_error() {
        let root = Schema::from(
            json!({"properties": {"x": {"$ref": "#/$defs/Missing"}}})
                .as_object()
                .unwrap()
                .clone(),
        );
        let err = specs_for_form(&root).unwrap_err();
        assert!(err.to_string().contains("'x'"), "{err}");
    }

    #[test]
    fn clinical_form_specs_follow_feature_order() {
        let specs = specs_for_form(&schema_of::<ClinicalInputs>()).unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
        assert!(specs.iter().all(|s| s.required));
    }

    #[test]
    fn clinical_form_specs_carry_kinds_ranges_and_levels() {
        let specs = specs_for_form(&schema_of::<ClinicalInputs>()).unwrap();
        let by_name = |n: &str| specs.iter().find(|s| s.name == n).unwrap();

        let age = by_name("age");
        assert_eq!(age.kind, FieldKind::Integer);
        assert_eq!(age.title, "Age");
        assert_eq!((age.min, age.max), (Some(1.0), Some(120.0)));

        let cp = by_name("cp");
        assert_eq!(cp.kind, FieldKind::String);
        assert_eq!(cp.title, "Chest Pain Type");
        assert_eq!(cp.allowed.as_ref().map(Vec::len), Some(4));

        assert_eq!(by_name("fbs").kind, FieldKind::Boolean);

        let oldpeak = by_name("oldpeak");
        assert_eq!(oldpeak.kind, FieldKind::Number);
        assert_eq!(oldpeak.step, Some(0.1));
        assert_eq!((oldpeak.min, oldpeak.max), (Some(0.0), Some(10.0)));

        assert_eq!(by_name("ca").max, Some(4.0));
    }
}
