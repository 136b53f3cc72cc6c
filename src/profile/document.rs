use crate::profile::entries::Text;
use crate::profile::model::{AefProfile, ServiceApiDescription};
use serde::Deserialize;

/// Top-level input accepted by the viewer.
///
/// The publish API returns a list of service descriptions; a single
/// description or a bare profile list (e.g. cut out of a registration
/// request) are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProfileDocument {
    Services(Vec<ServiceApiDescription>),
    Service(ServiceApiDescription),
    Profiles(Vec<AefProfile>),
}

/// One table worth of profiles, with the service it was published under.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub api_name: Option<&'a str>,
    pub api_id: Option<&'a Text>,
    pub description: Option<&'a Text>,
    pub profiles: &'a [AefProfile],
}

impl<'a> Section<'a> {
    fn for_service(svc: &'a ServiceApiDescription) -> Self {
        Self {
            api_name: Some(svc.api_name.as_str()),
            api_id: Some(&svc.api_id),
            description: Some(&svc.description),
            profiles: svc.aef_profiles.as_slice(),
        }
    }
}

impl ProfileDocument {
    pub fn sections(&self) -> Vec<Section<'_>> {
        match self {
            ProfileDocument::Services(services) => services.iter().map(Section::for_service).collect(),
            ProfileDocument::Service(svc) => vec![Section::for_service(svc)],
            ProfileDocument::Profiles(profiles) => vec![Section {
                api_name: None,
                api_id: None,
                description: None,
                profiles,
            }],
        }
    }

    pub fn profile_count(&self) -> usize {
        self.sections().iter().map(|s| s.profiles.len()).sum()
    }

    /// Short name of the input shape, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileDocument::Services(_) => "service list",
            ProfileDocument::Service(_) => "service",
            ProfileDocument::Profiles(_) => "profile list",
        }
    }
}
