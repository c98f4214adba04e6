//! Sequence commands: build a lazy sequence, print a bounded slice of it.

use std::fmt::Display;

use anyhow::{Context, Result};
use lazyseq::{IntoCount, Materializer, Seq};
use lazyseq_config::LazyseqConfig;
use tracing::debug;

/// Offset and count requested on the command line. Unset values fall back to
/// the `[display]` section of the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Window {
    pub offset: Option<i64>,
    pub count: Option<i64>,
}

/// The classic pattern: two cyclic word patterns zipped together, with
/// positions that match neither replaced by their number.
pub fn fizzbuzz() -> Result<Seq<String>> {
    let fizz = Seq::cycle_of(vec!["", "", "fizz"])?;
    let buzz = Seq::cycle_of(vec!["", "", "", "", "buzz"])?;
    let words = fizz.zip_with(&buzz, |a, b| format!("{a}{b}"));

    Ok(words.zip_with(&Seq::range_from(1), |word, n| {
        if word.is_empty() { n.to_string() } else { word }
    }))
}

/// Odd numbers paired with their running sums, which are the squares.
pub fn odds() -> Result<Seq<String>> {
    let odds = Seq::from_step(1u64, |x| x + 2);
    let sums = odds.scan(0u64, |acc, x| acc + x).drop(1)?;

    Ok(odds.zip_with(&sums, |odd, sum| format!("{odd} (sum {sum})")))
}

/// `[start, end)` or, without `end`, every integer from `start`.
pub fn range(start: i64, end: Option<i64>) -> Seq<i64> {
    match end {
        Some(end) => Seq::from_range(start, end),
        None => Seq::range_from(start),
    }
}

/// Prints the requested slice of `seq` on one line.
pub fn print_slice<T: Display + 'static>(
    seq: &Seq<T>,
    window: Window,
    config: &LazyseqConfig,
) -> Result<()> {
    let offset = match window.offset {
        Some(offset) => offset.into_count("offset")?,
        None => config.display.offset.into_count("offset")?,
    };
    let count = match window.count {
        Some(count) => count.into_count("count")?,
        None => config.display.count.into_count("count")?,
    };
    let limit = config
        .limits
        .max_materialize
        .into_count("max_materialize")?;

    debug!(offset, count, limit, extent = %seq.extent(), "printing slice");

    let items = Materializer::with_limit(limit)
        .slice(seq, offset, count)
        .context("Failed to materialize slice")?;

    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(&config.display.separator));
    Ok(())
}
