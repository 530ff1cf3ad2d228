//! Workflow run configuration for record creation.
//!
//! The orchestration engine hands each run a flat JSON object. Two of its
//! entries (`acl` and `legal-tags`) are themselves JSON documents encoded as
//! strings; the remaining entries are taken as-is.

use serde_json::{Map, Value as JsonValue};

use crate::acl::Acl;
use crate::error::{CoreError, CoreResult};
use crate::headers::RequestHeaders;
use crate::legal::{Legal, LegalCompliance};

/// Run configuration keys.
pub mod keys {
    pub const ACL: &str = "acl";
    pub const LEGAL_TAGS: &str = "legal-tags";
    pub const DATA: &str = "data";
    pub const PARTITION_ID: &str = "partition-id";
    pub const AUTHORIZATION: &str = "authorization";
    pub const APP_KEY: &str = "app-key";

    pub const VIEWERS: &str = "viewers";
    pub const OWNERS: &str = "owners";
    pub const LEGALTAGS: &str = "legaltags";
    pub const OTHER_RELEVANT_DATA_COUNTRIES: &str = "otherRelevantDataCountries";
}

/// Parsed run configuration of a record-creation run.
#[derive(Clone, PartialEq)]
pub struct RunConf {
    acl: String,
    legal_tags: String,
    data: JsonValue,
    partition_id: String,
    authorization: String,
    app_key: String,
}

impl RunConf {
    /// Extracts the six required entries from a run configuration object.
    ///
    /// # Errors
    ///
    /// - `CoreError::NotAnObject` if `value` is not a JSON object
    /// - `CoreError::MissingKey` if a required key is absent
    /// - `CoreError::InvalidType` if a string entry carries another JSON type
    pub fn from_value(value: JsonValue) -> CoreResult<Self> {
        let JsonValue::Object(mut conf) = value else {
            return Err(CoreError::NotAnObject);
        };

        Ok(Self {
            acl: take_string(&mut conf, keys::ACL)?,
            legal_tags: take_string(&mut conf, keys::LEGAL_TAGS)?,
            data: conf
                .remove(keys::DATA)
                .ok_or_else(|| CoreError::missing_key(keys::DATA))?,
            partition_id: take_string(&mut conf, keys::PARTITION_ID)?,
            authorization: take_string(&mut conf, keys::AUTHORIZATION)?,
            app_key: take_string(&mut conf, keys::APP_KEY)?,
        })
    }

    /// Parses a run configuration document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidJson` for a malformed document, otherwise the
    /// errors of [`RunConf::from_value`].
    pub fn from_json_str(conf: &str) -> CoreResult<Self> {
        let value = serde_json::from_str(conf).map_err(|e| CoreError::invalid_json("conf", e))?;
        Self::from_value(value)
    }

    /// Builds the access-control entry from the JSON-encoded `acl` entry.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidJson` if `acl` is not valid JSON
    /// - `CoreError::MissingKey` if `viewers` or `owners` is absent
    /// - `CoreError::InvalidType` if either is not an array of strings
    pub fn acl(&self) -> CoreResult<Acl> {
        let doc = parse_embedded(keys::ACL, &self.acl)?;
        Ok(Acl::new(
            string_list(&doc, keys::ACL, keys::VIEWERS)?,
            string_list(&doc, keys::ACL, keys::OWNERS)?,
        ))
    }

    /// Builds legal metadata from the JSON-encoded `legal-tags` entry.
    ///
    /// The compliance status is always `compliant`; no legal review happens here.
    ///
    /// # Errors
    ///
    /// Same classes as [`RunConf::acl`], for `legaltags` and
    /// `otherRelevantDataCountries`.
    pub fn legal(&self) -> CoreResult<Legal> {
        let doc = parse_embedded(keys::LEGAL_TAGS, &self.legal_tags)?;
        Ok(Legal::new(
            string_list(&doc, keys::LEGAL_TAGS, keys::LEGALTAGS)?,
            string_list(&doc, keys::LEGAL_TAGS, keys::OTHER_RELEVANT_DATA_COUNTRIES)?,
            LegalCompliance::Compliant,
        ))
    }

    /// Opaque record payload.
    #[must_use]
    pub fn data(&self) -> &JsonValue {
        &self.data
    }

    /// Data partition id.
    #[must_use]
    pub fn partition_id(&self) -> &str {
        &self.partition_id
    }

    /// Builds the request headers from the caller's credentials, verbatim.
    #[must_use]
    pub fn headers(&self) -> RequestHeaders {
        RequestHeaders::new(&self.partition_id, &self.authorization, &self.app_key)
    }
}

impl std::fmt::Debug for RunConf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConf")
            .field("acl", &self.acl)
            .field("legal_tags", &self.legal_tags)
            .field("data", &self.data)
            .field("partition_id", &self.partition_id)
            .field("authorization", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}

fn take_string(conf: &mut Map<String, JsonValue>, key: &str) -> CoreResult<String> {
    match conf.remove(key) {
        Some(JsonValue::String(value)) => Ok(value),
        Some(_) => Err(CoreError::invalid_type(key, "a string")),
        None => Err(CoreError::missing_key(key)),
    }
}

fn parse_embedded(key: &str, raw: &str) -> CoreResult<JsonValue> {
    serde_json::from_str(raw).map_err(|e| CoreError::invalid_json(key, e))
}

fn string_list(doc: &JsonValue, parent: &str, field: &str) -> CoreResult<Vec<String>> {
    let path = format!("{parent}.{field}");
    let value = match doc {
        JsonValue::Object(map) => map.get(field),
        _ => return Err(CoreError::invalid_type(parent, "a JSON object")),
    }
    .ok_or_else(|| CoreError::missing_key(path.as_str()))?;

    serde_json::from_value(value.clone())
        .map_err(|_| CoreError::invalid_type(path, "an array of strings"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_conf() -> JsonValue {
        json!({
            "acl": r#"{"viewers": ["v1@opendes", "v2@opendes"], "owners": ["o1@opendes"]}"#,
            "legal-tags": r#"{"legaltags": ["opendes-tag"], "otherRelevantDataCountries": ["US", "NO"]}"#,
            "data": {"WellName": "Well 1", "Depth": 1200.5},
            "partition-id": "opendes",
            "authorization": "Bearer token",
            "app-key": "app-key-1"
        })
    }

    #[test]
    fn test_parses_valid_conf() {
        let conf = RunConf::from_value(valid_conf()).unwrap();

        let acl = conf.acl().unwrap();
        assert_eq!(acl.viewers, vec!["v1@opendes", "v2@opendes"]);
        assert_eq!(acl.owners, vec!["o1@opendes"]);

        let legal = conf.legal().unwrap();
        assert_eq!(legal.legaltags, vec!["opendes-tag"]);
        assert_eq!(legal.other_relevant_data_countries, vec!["US", "NO"]);
        assert_eq!(legal.status, LegalCompliance::Compliant);

        assert_eq!(conf.data(), &json!({"WellName": "Well 1", "Depth": 1200.5}));
        assert_eq!(conf.partition_id(), "opendes");
    }

    #[test]
    fn test_missing_top_level_keys() {
        for key in ["acl", "legal-tags", "data", "partition-id", "authorization", "app-key"] {
            let mut value = valid_conf();
            value.as_object_mut().unwrap().remove(key);

            match RunConf::from_value(value) {
                Err(CoreError::MissingKey { key: missing }) => assert_eq!(missing, key),
                other => panic!("expected MissingKey for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_object_conf() {
        assert!(matches!(
            RunConf::from_value(json!(["acl"])),
            Err(CoreError::NotAnObject)
        ));
    }

    #[test]
    fn test_acl_must_be_string() {
        let mut value = valid_conf();
        value["acl"] = json!({"viewers": [], "owners": []});

        assert!(matches!(
            RunConf::from_value(value),
            Err(CoreError::InvalidType { key, .. }) if key == "acl"
        ));
    }

    #[test]
    fn test_data_may_be_any_json() {
        let mut value = valid_conf();
        value["data"] = json!(null);

        let conf = RunConf::from_value(value).unwrap();
        assert_eq!(conf.data(), &JsonValue::Null);
    }

    #[test]
    fn test_malformed_acl_json() {
        let mut value = valid_conf();
        value["acl"] = json!("{viewers: nope");
        let conf = RunConf::from_value(value).unwrap();

        assert!(matches!(
            conf.acl(),
            Err(CoreError::InvalidJson { key, .. }) if key == "acl"
        ));
    }

    #[test]
    fn test_malformed_legal_json() {
        let mut value = valid_conf();
        value["legal-tags"] = json!("not json");
        let conf = RunConf::from_value(value).unwrap();

        assert!(matches!(
            conf.legal(),
            Err(CoreError::InvalidJson { key, .. }) if key == "legal-tags"
        ));
    }

    #[test]
    fn test_missing_nested_keys() {
        let mut value = valid_conf();
        value["acl"] = json!(r#"{"viewers": ["v1"]}"#);
        value["legal-tags"] = json!(r#"{"legaltags": ["t"]}"#);
        let conf = RunConf::from_value(value).unwrap();

        assert!(matches!(
            conf.acl(),
            Err(CoreError::MissingKey { key }) if key == "acl.owners"
        ));
        assert!(matches!(
            conf.legal(),
            Err(CoreError::MissingKey { key }) if key == "legal-tags.otherRelevantDataCountries"
        ));
    }

    #[test]
    fn test_nested_list_type_checked() {
        let mut value = valid_conf();
        value["acl"] = json!(r#"{"viewers": "v1", "owners": []}"#);
        let conf = RunConf::from_value(value).unwrap();

        assert!(matches!(
            conf.acl(),
            Err(CoreError::InvalidType { key, .. }) if key == "acl.viewers"
        ));
    }

    #[test]
    fn test_compliance_ignores_input_status() {
        let mut value = valid_conf();
        value["legal-tags"] = json!(
            r#"{"legaltags": [], "otherRelevantDataCountries": [], "status": "incompliant"}"#
        );
        let conf = RunConf::from_value(value).unwrap();

        assert_eq!(conf.legal().unwrap().status, LegalCompliance::Compliant);
    }

    #[test]
    fn test_headers_and_debug() {
        let conf = RunConf::from_value(valid_conf()).unwrap();
        let headers = conf.headers();

        assert_eq!(headers.partition_id(), "opendes");
        assert_eq!(headers.authorization(), "Bearer token");
        assert_eq!(headers.app_key(), "app-key-1");
        assert!(!format!("{conf:?}").contains("Bearer token"));
    }

    #[test]
    fn test_from_json_str() {
        let raw = serde_json::to_string(&valid_conf()).unwrap();
        assert!(RunConf::from_json_str(&raw).is_ok());
        assert!(matches!(
            RunConf::from_json_str("{"),
            Err(CoreError::InvalidJson { .. })
        ));
    }
}
