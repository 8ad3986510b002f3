pub mod hierarchy;
pub mod parser;
pub mod record;
pub mod report;
pub mod source;

use wasm_bindgen::prelude::*;

pub use hierarchy::Hierarchy;
pub use record::FlatRecord;
pub use source::{import_file, import_lines, LoadError};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Render a schema listing to report text
#[wasm_bindgen(js_name = "schemaReport")]
pub fn schema_report(source: &str) -> String {
    report::render_string(&import_lines(source.lines()))
}

/// Render a schema listing to an array of report lines
#[wasm_bindgen(js_name = "schemaReportLines")]
pub fn schema_report_lines(source: &str) -> js_sys::Array {
    report::render(&import_lines(source.lines()))
        .into_iter()
        .map(JsValue::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_report() {
        let source = "DATABASE;DB1;;;;;\nTABLE;T1;dbo;DB1;DATABASE;;\nCOLUMN;C1;;T1;TABLE;int;1\n";
        assert_eq!(
            schema_report(source),
            "Database 'DB1' (1 tables):\n\tTable 'dbo.T1' (1 columns)\n\t\tColumn 'C1' with int data type accepts nulls\n"
        );
    }

    #[test]
    fn test_schema_report_empty() {
        assert_eq!(schema_report(""), "");
        assert_eq!(schema_report("not;a;record\n"), "");
    }
}
