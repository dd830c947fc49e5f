// ============================================================
// MOVIELIST READER
// ============================================================
// Parse the semicolon-delimited awards dataset into Movie entities

use crate::domain::error::{AppError, Result};
use crate::domain::movie::Movie;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// Read and parse a movie list file.
pub fn read_movielist(path: &Path) -> Result<Vec<Movie>> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_movielist(&decode_text(&bytes))
}

/// Parse movie list content. The file is semicolon-delimited with a
/// `year;title;studios;producers;winner` header; columns are resolved by
/// name so their order does not matter.
pub fn parse_movielist(content: &str) -> Result<Vec<Movie>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true) // Allow rows with trailing columns missing
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
        .clone();

    let columns = ColumnMap::resolve(&headers)?;

    let mut movies = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
        })?;
        movies.push(columns.movie_from(&record, index)?);
    }

    Ok(movies)
}

/// Decode as UTF-8 when valid, otherwise as Windows-1252. Older editions
/// of the dataset ship with Latin accents in a single-byte encoding.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

struct ColumnMap {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::ParseError(format!("Missing CSV column: {}", name)))
        };

        Ok(Self {
            year: find("year")?,
            title: find("title")?,
            studios: find("studios")?,
            producers: find("producers")?,
            winner: find("winner")?,
        })
    }

    fn movie_from(&self, record: &StringRecord, index: usize) -> Result<Movie> {
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let raw_year = field(self.year);
        let year = raw_year.parse::<i64>().map_err(|_| {
            AppError::ParseError(format!("Row {}: invalid year {:?}", index + 1, raw_year))
        })?;

        let winner = match field(self.winner) {
            flag if flag.is_empty() => None,
            flag => Some(flag),
        };

        Ok(Movie::new(
            year,
            field(self.title),
            field(self.studios),
            field(self.producers),
            winner,
        ))
    }
}
