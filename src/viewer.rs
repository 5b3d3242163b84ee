use crate::cache::RecordSource;
use crate::error::ViewerError;
use crate::render::render;
use log::{debug, info};
use serde_json::Value;
use std::io::Write;

/// What a single lookup found.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Value),
    NotCached,
}

/// Fetches `key` once and writes either its rendering or `NOT CACHED: <key>`
/// to `out`. Store, decode and parse failures are returned before anything
/// is written.
pub fn view<S, W>(source: &mut S, key: &str, width: usize, out: &mut W) -> Result<LookupOutcome, ViewerError>
where
    S: RecordSource + ?Sized,
    W: Write + ?Sized,
{
    let Some(raw) = source.fetch(key)? else {
        info!("Order {} is not cached", key);
        writeln!(out, "NOT CACHED: {}", key)?;
        return Ok(LookupOutcome::NotCached);
    };

    let text = std::str::from_utf8(&raw)?;
    let record: Value = serde_json::from_str(text)?;
    debug!("Decoded cached record for {} ({} bytes)", key, raw.len());

    writeln!(out, "{}", render(&record, width))?;
    Ok(LookupOutcome::Found(record))
}
