//! HTML fragments for AEF profiles.
//!
//! Each renderer returns markup for one level of the profile tree and embeds
//! the output of the renderers below it verbatim. Record text is escaped;
//! nested markup is not.
//!
//! The top-level rows pair a summary `<tr>` with a collapsed detail `<tr>`
//! through a positional id (`r0`, `r1`, ...), wired for the bootstrap
//! collapse plugin on the hosting page.

use crate::profile::{AefProfile, CustomOperation, Entries, InterfaceDescription, Resource, Text, Version};
use std::borrow::Cow;

/// Comma-joined operation verbs of a resource or custom operation.
pub fn render_operation_list(operations: &Entries<Text>) -> String {
    join_text(operations)
}

/// Comma-joined security methods of a profile or interface.
pub fn render_security_methods(methods: &Entries<Text>) -> String {
    join_text(methods)
}

pub fn render_resources(resources: &Entries<Resource>) -> String {
    render_list("Resources:", resources, |r| {
        [
            labelled("CommType", &escape_html(r.comm_type.as_str())),
            labelled("CustOpName", &escape_html(r.cust_op_name.as_str())),
            labelled("ResourceName", &escape_html(r.resource_name.as_str())),
            labelled("Uri", &escape_html(r.uri.as_str())),
            labelled("Description", &escape_html(r.description.as_str())),
            labelled("Operations", &render_operation_list(&r.operations)),
        ]
        .join(" ")
    })
}

pub fn render_custom_operations(operations: &Entries<CustomOperation>) -> String {
    render_list("Custom Operations:", operations, |o| {
        [
            labelled("CommType", &escape_html(o.comm_type.as_str())),
            labelled("CustOpName", &escape_html(o.cust_op_name.as_str())),
            labelled("Description", &escape_html(o.description.as_str())),
            labelled("Operations", &render_operation_list(&o.operations)),
        ]
        .join(" ")
    })
}

pub fn render_interface_descriptions(descriptions: &Entries<InterfaceDescription>) -> String {
    render_list("Interface Description:", descriptions, |d| {
        [
            labelled("Ipv4Addr", &escape_html(d.ipv4_addr.as_str())),
            labelled("Ipv6Addr", &escape_html(d.ipv6_addr.as_str())),
            labelled("Port", &escape_html(d.port.as_str())),
            labelled("SecurityMethods", &render_security_methods(&d.security_methods)),
        ]
        .join(" ")
    })
}

/// Versions with their custom operations and resources nested inline.
pub fn render_versions(versions: &Entries<Version>) -> String {
    render_list("Versions:", versions, |v| {
        format!(
            "{} {}{}",
            labelled("ApiVersion", &escape_html(v.api_version.as_str())),
            render_custom_operations(&v.cust_operations),
            render_resources(&v.resources),
        )
    })
}

/// Summary and detail table rows for each profile, ids numbered from 0.
pub fn render_aef_profiles(profiles: &[AefProfile]) -> String {
    render_aef_profiles_from(profiles, 0)
}

/// Same as [`render_aef_profiles`] with ids numbered from `first_index`, for
/// pages that hold more than one profile table.
pub fn render_aef_profiles_from(profiles: &[AefProfile], first_index: usize) -> String {
    profiles
        .iter()
        .enumerate()
        .map(|(offset, aef)| render_aef_profile(aef, first_index + offset))
        .collect()
}

fn render_aef_profile(aef: &AefProfile, index: usize) -> String {
    format!(
        concat!(
            r##"<tr data-bs-toggle="collapse" data-bs-target="#r{index}">"##,
            "<td>{id}</td><td>{location}</td><td>{domain}</td><td>{protocol}</td><td>{security}</td>",
            "</tr>\n",
            r#"<tr class="collapse accordion-collapse" id="r{index}" data-bs-parent=".table">"#,
            r#"<td colspan="5"><div>{interfaces}{versions}</div></td>"#,
            "</tr>\n",
        ),
        index = index,
        id = escape_html(aef.aef_id.as_str()),
        location = escape_html(aef.aef_location.as_str()),
        domain = escape_html(aef.domain_name.as_str()),
        protocol = escape_html(aef.protocol.as_str()),
        security = render_security_methods(&aef.security_methods),
        interfaces = render_interface_descriptions(&aef.interface_descriptions),
        versions = render_versions(&aef.versions),
    )
}

fn render_list<T>(heading: &str, entries: &Entries<T>, item: impl Fn(&T) -> String) -> String {
    let items: String = entries.iter().map(|e| format!("<li>{}</li>", item(e))).collect();
    format!(r#"<p class="lead">{heading}</p><ul>{items}</ul>"#)
}

fn labelled(label: &str, value: &str) -> String {
    format!("<strong>{label}:</strong> {value}")
}

fn join_text(values: &Entries<Text>) -> String {
    values
        .iter()
        .map(|v| escape_html(v.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
