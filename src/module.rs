//! TypeScript module generation
//!
//! The generated module holds a single exported constant:
//!
//! ```text
//! export const REPORT_ASSETS = { logo: 'data:image/png;base64,...' };
//! ```

use crate::data_uri::DataUri;

/// Name of the exported constant
pub const EXPORT_NAME: &str = "REPORT_ASSETS";

/// Object field carrying the logo data URI
pub const LOGO_FIELD: &str = "logo";

/// Render the full module text, trailing newline included
pub fn render_module(logo: &DataUri) -> String {
    format!("export const {EXPORT_NAME} = {{ {LOGO_FIELD}: '{logo}' }};\n")
}
