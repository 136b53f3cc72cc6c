pub mod html;
pub mod page;

pub use html::{
    escape_html, render_aef_profiles, render_aef_profiles_from, render_custom_operations,
    render_interface_descriptions, render_operation_list, render_resources, render_security_methods,
    render_versions,
};
pub use page::{PageOptions, render_page, render_rows};
