//! Published service API records, as returned by the CAPIF publish API.
//!
//! JSON shape (one published service API):
//! {
//!   "apiName": "example",
//!   "apiId": "api_id_example",
//!   "description": "...",
//!   "aefProfiles": [
//!     {
//!       "aefId": "aef1",
//!       "aefLocation": "loc1",
//!       "domainName": "dom1",
//!       "protocol": "HTTP_1_1",
//!       "securityMethods": ["OAUTH"],
//!       "interfaceDescriptions": [{ "ipv4Addr": "...", "port": 8080, "securityMethods": [...] }],
//!       "versions": [{ "apiVersion": "v1", "custOperations": [...], "resources": [...] }]
//!     }
//!   ]
//! }
//!
//! Every field below `apiName` is optional and tolerant of bad shapes.

use crate::profile::entries::{Entries, Text};
use serde::Deserialize;

/// One API exposing function endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AefProfile {
    pub aef_id: Text,
    pub aef_location: Text,
    pub domain_name: Text,
    pub protocol: Text,
    pub security_methods: Entries<Text>,
    pub interface_descriptions: Entries<InterfaceDescription>,
    pub versions: Entries<Version>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterfaceDescription {
    pub ipv4_addr: Text,
    pub ipv6_addr: Text,
    pub port: Text,
    pub security_methods: Entries<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    pub api_version: Text,
    pub cust_operations: Entries<CustomOperation>,
    pub resources: Entries<Resource>,
}

/// Operation without resource association.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomOperation {
    pub comm_type: Text,
    pub cust_op_name: Text,
    pub description: Text,
    pub operations: Entries<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub comm_type: Text,
    pub cust_op_name: Text,
    pub resource_name: Text,
    pub uri: Text,
    pub description: Text,
    pub operations: Entries<Text>,
}

/// A service API as published by an API publishing function.
///
/// `apiName` is the one mandatory field; it is what tells a list of service
/// descriptions apart from a bare list of profiles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceApiDescription {
    pub api_name: String,
    #[serde(default)]
    pub api_id: Text,
    #[serde(default)]
    pub description: Text,
    #[serde(default)]
    pub aef_profiles: Entries<AefProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn profile_reads_camel_case_fields() {
        let aef: AefProfile = serde_json::from_value(json!({
            "aefId": "aef1",
            "aefLocation": "loc1",
            "domainName": "dom1",
            "protocol": "HTTP_1_1",
            "securityMethods": {"0": "OAUTH"},
            "interfaceDescriptions": [{"ipv4Addr": "10.0.0.1", "port": 8080}],
            "versions": [{"apiVersion": "v1"}]
        }))
        .unwrap();

        assert_eq!(aef.aef_id.as_str(), "aef1");
        assert_eq!(aef.protocol.as_str(), "HTTP_1_1");
        assert_eq!(aef.security_methods, Entries::new(vec![Text::from("OAUTH")]));
        assert_eq!(aef.interface_descriptions.as_slice()[0].port.as_str(), "8080");
        assert!(aef.interface_descriptions.as_slice()[0].security_methods.is_empty());
        assert_eq!(aef.versions.as_slice()[0].api_version.as_str(), "v1");
    }

    #[test]
    fn profile_tolerates_bad_nested_shapes() {
        let aef: AefProfile = serde_json::from_value(json!({
            "aefId": "aef1",
            "securityMethods": null,
            "interfaceDescriptions": "none",
            "versions": [{"apiVersion": "v1", "custOperations": 7, "resources": null}]
        }))
        .unwrap();

        assert!(aef.security_methods.is_empty());
        assert!(aef.interface_descriptions.is_empty());
        let version = &aef.versions.as_slice()[0];
        assert!(version.cust_operations.is_empty());
        assert!(version.resources.is_empty());
        assert!(aef.domain_name.is_empty());
    }

    #[test]
    fn nested_keyed_collections_keep_input_order() {
        let aef: AefProfile = serde_json::from_str(
            r#"{
                "aefId": "aef1",
                "versions": [{
                    "apiVersion": "v1",
                    "resources": {
                        "z": {"resourceName": "first"},
                        "a": {"resourceName": "second"}
                    },
                    "custOperations": {
                        "op": {
                            "custOpName": "op1",
                            "operations": {
                                "0": "A", "1": "B", "2": "C", "3": "D", "4": "E", "5": "F",
                                "6": "G", "7": "H", "8": "I", "9": "J", "10": "K"
                            }
                        }
                    }
                }]
            }"#,
        )
        .unwrap();

        let version = &aef.versions.as_slice()[0];
        let names: Vec<&str> = version.resources.iter().map(|r| r.resource_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);

        let ops: Vec<&str> = version.cust_operations.as_slice()[0]
            .operations
            .iter()
            .map(Text::as_str)
            .collect();
        assert_eq!(ops, vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);
    }

    #[test]
    fn array_shaped_resource_is_an_empty_entry() {
        let resources: Entries<Resource> = serde_json::from_value(json!([["REST", "op", "res", "/u"]])).unwrap();
        assert_eq!(resources, Entries::new(vec![Resource::default()]));
    }

    #[test]
    fn service_description_requires_api_name() {
        let err = serde_json::from_value::<ServiceApiDescription>(json!({"aefProfiles": []}));
        assert!(err.is_err());

        let svc: ServiceApiDescription =
            serde_json::from_value(json!({"apiName": "dmaap", "aefProfiles": [{"aefId": "a"}]})).unwrap();
        assert_eq!(svc.api_name, "dmaap");
        assert_eq!(svc.aef_profiles.len(), 1);
    }
}
