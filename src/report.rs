//! Indented Database -> Table -> Column report over a linked hierarchy.

use crate::hierarchy::Hierarchy;
use crate::record::FlatRecord;
use std::convert::Infallible;
use std::io::{self, Write};

/// Receives rendered report lines, one call per line, in report order.
pub trait ReportSink {
    type Error;

    fn emit(&mut self, line: String) -> Result<(), Self::Error>;
}

impl ReportSink for Vec<String> {
    type Error = Infallible;

    fn emit(&mut self, line: String) -> Result<(), Self::Error> {
        self.push(line);
        Ok(())
    }
}

/// Sink writing each line, newline-terminated, to an `io::Write`.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    type Error = io::Error;

    fn emit(&mut self, line: String) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", line)
    }
}

/// Walk the hierarchy and hand every report line to `sink`.
///
/// Only root-kind records start an entry. Below them the walk is exactly
/// two levels deep: children are reported as tables, grandchildren as
/// columns, whatever their own kind. Returns the number of lines emitted.
pub fn write_report<S: ReportSink>(hierarchy: &Hierarchy, sink: &mut S) -> Result<usize, S::Error> {
    let mut emitted = 0;

    for (db_index, database) in hierarchy.roots() {
        sink.emit(database_line(database, hierarchy.child_indices(db_index).len()))?;
        emitted += 1;

        for (table_index, table) in hierarchy.children(db_index) {
            sink.emit(table_line(table, hierarchy.child_indices(table_index).len()))?;
            emitted += 1;

            for (_, column) in hierarchy.children(table_index) {
                sink.emit(column_line(column))?;
                emitted += 1;
            }
        }
    }

    Ok(emitted)
}

/// Render the report as a list of lines.
pub fn render(hierarchy: &Hierarchy) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    match write_report(hierarchy, &mut lines) {
        Ok(_) => lines,
        Err(never) => match never {},
    }
}

/// Render the report as text, each line terminated by `\n`.
pub fn render_string(hierarchy: &Hierarchy) -> String {
    let mut output = String::new();
    for line in render(hierarchy) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn database_line(database: &FlatRecord, tables: usize) -> String {
    format!("Database '{}' ({} tables):", database.name, tables)
}

fn table_line(table: &FlatRecord, columns: usize) -> String {
    format!("\tTable '{}.{}' ({} columns)", table.schema, table.name, columns)
}

fn column_line(column: &FlatRecord) -> String {
    let nulls = if column.accepts_nulls() {
        "accepts nulls"
    } else {
        "with no nulls"
    };
    format!(
        "\t\tColumn '{}' with {} data type {}",
        column.name, column.data_type, nulls
    )
}
