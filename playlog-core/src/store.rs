use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{Row, SortSpec, default_header};
use crate::error::{PlaylogError, Result};
use crate::render::write_table;

/// Results table backed by a comma-separated file.
///
/// Every row holds exactly one cell per header column; ragged records are
/// rejected both when loading and when appending.
#[derive(Clone, Debug)]
pub struct TableStore {
    path: PathBuf,
    header: Row,
    rows: Vec<Row>,
}

impl TableStore {
    /// Load the table at `path`, creating the file with the default header
    /// when it does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            write_records(path, &default_header(), &[])?;
            info!(path = %path.display(), "created results file");
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let mut records = reader.records();
        let header: Row = match records.next() {
            Some(rec) => rec.map_err(|e| csv_error(path, e))?.iter().map(String::from).collect(),
            None => default_header(),
        };

        let mut rows = Vec::new();
        for rec in records {
            let rec = rec.map_err(|e| csv_error(path, e))?;
            if rec.len() != header.len() {
                return Err(PlaylogError::MalformedRecord {
                    line: rec.position().map(|p| p.line()).unwrap_or_default(),
                    expected: header.len(),
                    found: rec.len(),
                });
            }
            rows.push(rec.iter().map(String::from).collect());
        }

        debug!(path = %path.display(), columns = header.len(), rows = rows.len(), "loaded table");
        Ok(Self {
            path: path.to_path_buf(),
            header,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PlaylogError::UnknownColumn(name.to_string()))
    }

    /// Append a row; its length must match the header.
    pub fn append(&mut self, row: Row) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(PlaylogError::MalformedRecord {
                line: self.rows.len() as u64 + 2,
                expected: self.header.len(),
                found: row.len(),
            });
        }
        info!(row = %row.join(","), "appended row");
        self.rows.push(row);
        Ok(())
    }

    /// Rows in display order. The stored order is left untouched.
    pub fn sorted_rows(&self, sort: &SortSpec) -> Result<Vec<&Row>> {
        let Some(primary) = sort.primary.as_deref() else {
            return Ok(self.rows.iter().collect());
        };
        let p = self.column_index(primary)?;
        let s = sort
            .secondary
            .as_deref()
            .map(|c| self.column_index(c))
            .transpose()?;

        let mut keyed: Vec<(String, &Row)> = self
            .rows
            .iter()
            .map(|row| {
                let key = match s {
                    Some(s) => format!("{}\0{}", row[p], row[s]),
                    None => row[p].clone(),
                };
                (key, row)
            })
            .collect();

        // `sort_by` is stable, so equal keys keep their input order both ways.
        if sort.descending {
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
        }
        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }

    pub fn render_to<W: Write>(&self, out: &mut W, sort: &SortSpec) -> Result<()> {
        let rows = self.sorted_rows(sort)?;
        write_table(out, &self.header, &self.rows, &rows)?;
        Ok(())
    }

    /// Print the table to stdout.
    pub fn render(&self, sort: &SortSpec) -> Result<()> {
        let mut out = std::io::stdout().lock();
        self.render_to(&mut out, sort)?;
        out.flush()?;
        Ok(())
    }

    /// Overwrite `path` (or the file the table was loaded from) with the
    /// header and every row.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or(&self.path);
        write_records(path, &self.header, &self.rows)?;
        debug!(path = %path.display(), rows = self.rows.len(), "saved table");
        Ok(())
    }
}

fn write_records(path: &Path, header: &[String], rows: &[Row]) -> Result<()> {
    let file = File::create(path).map_err(|e| PlaylogError::file_access(path, e))?;
    let mut w = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(BufWriter::new(file));
    w.write_record(header).map_err(|e| csv_error(path, e))?;
    for row in rows {
        w.write_record(row).map_err(|e| csv_error(path, e))?;
    }
    w.flush().map_err(|e| PlaylogError::file_access(path, e))?;
    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> PlaylogError {
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => PlaylogError::file_access(path, e),
        _ => PlaylogError::Csv(msg),
    }
}
