use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::config::schema::CsvSchema;
use crate::domain::record::{SentimentRecord, SentimentTable};
use crate::domain::session::Session;
use crate::pipeline::PipelineError;

/// Decode CSV bytes into a table using the configured column mapping.
///
/// Header resolution fails fast: a schema/file mismatch is reported before
/// any row is parsed. Row order is preserved as-is; the loader makes no
/// claim about timestamp ordering.
pub fn parse_table(bytes: &[u8], schema: &CsvSchema) -> Result<SentimentTable, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Parse(format!("unreadable header row: {}", e)))?
        .clone();
    let columns = ColumnIndices::resolve(&headers, schema)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // +2: headers occupy line 1 and `i` is zero-based
        let line = i + 2;
        let row = row.map_err(|e| PipelineError::Parse(format!("line {}: {}", line, e)))?;
        records.push(columns.record_from_row(&row, schema, line)?);
    }

    log::info!("Parsed {} sentiment records", records.len());
    Ok(SentimentTable::new(records))
}

/// Header positions resolved once against the schema.
struct ColumnIndices {
    date: Option<usize>,
    time: Option<usize>,
    datetime: Option<usize>,
    bullish: usize,
    bearish: usize,
    session: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, schema: &CsvSchema) -> Result<Self, PipelineError> {
        let find = |name: &'static str| -> Result<usize, PipelineError> {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| PipelineError::Parse(format!("missing column '{}'", name)))
        };
        let find_opt = |name: Option<&'static str>| -> Result<Option<usize>, PipelineError> {
            name.map(find).transpose()
        };

        let columns = Self {
            date: find_opt(schema.date)?,
            time: find_opt(schema.time)?,
            datetime: find_opt(schema.datetime)?,
            bullish: find(schema.bullish)?,
            bearish: find(schema.bearish)?,
            session: find(schema.session)?,
        };

        let split_pair = columns.date.is_some() && columns.time.is_some();
        if columns.datetime.is_none() && !split_pair {
            return Err(PipelineError::Parse(
                "schema must configure either a datetime column or a date/time pair".to_string(),
            ));
        }
        Ok(columns)
    }

    fn record_from_row(
        &self,
        row: &StringRecord,
        schema: &CsvSchema,
        line: usize,
    ) -> Result<SentimentRecord, PipelineError> {
        let field = |index: usize| row.get(index).unwrap_or("");

        let raw_datetime = match self.datetime {
            Some(index) => field(index).to_string(),
            None => {
                // Checked at resolve time, both must be present here
                let date = self.date.map(field).unwrap_or("");
                let time = self.time.map(field).unwrap_or("");
                format!("{} {}", date, time)
            }
        };
        let timestamp = NaiveDateTime::parse_from_str(&raw_datetime, schema.datetime_format)
            .map_err(|_| {
                PipelineError::Parse(format!(
                    "line {}: '{}' does not match format '{}'",
                    line, raw_datetime, schema.datetime_format
                ))
            })?;

        let bullish = parse_rate(field(self.bullish), schema.bullish, line)?;
        let bearish = parse_rate(field(self.bearish), schema.bearish, line)?;
        if bullish < 0.0 {
            return Err(PipelineError::Parse(format!(
                "line {}: '{}' must be >= 0, got {}",
                line, schema.bullish, bullish
            )));
        }
        if bearish > 0.0 {
            return Err(PipelineError::Parse(format!(
                "line {}: '{}' must be <= 0, got {}",
                line, schema.bearish, bearish
            )));
        }

        Ok(SentimentRecord {
            timestamp,
            bullish,
            bearish,
            session: Session::from_label(field(self.session)),
        })
    }
}

fn parse_rate(raw: &str, column: &str, line: usize) -> Result<f64, PipelineError> {
    raw.parse::<f64>().map_err(|_| {
        PipelineError::Parse(format!(
            "line {}: '{}' is not a number in column '{}'",
            line, raw, column
        ))
    })
}
