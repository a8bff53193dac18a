//! `session` subcommand: replays office selections from a line stream.
//!
//! Each distinct office prints one JSON snapshot line on the output and one
//! "Nearest store at ..." notice on the log. Repeated offices print nothing.

use std::io::Write;

use commute_core::Coordinate;
use commute_points::{
    announce_nearest, CommuteSession, GeocodeError, Notifier, RandomSource, ReverseGeocoder,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::input::parse_office_line;

/// Stands in for a geocoding service: the "address" is the rounded coordinate.
pub(crate) struct OfflineGeocoder;

impl ReverseGeocoder for OfflineGeocoder {
    async fn reverse_geocode(&self, at: Coordinate) -> Result<String, GeocodeError> {
        Ok(format!("{:.5}, {:.5}", at.lat, at.lng))
    }
}

/// Sends notices to the log.
pub(crate) struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Returns the number of snapshots written.
pub(crate) async fn run_session<I, W, R>(
    input: I,
    out: &mut W,
    candidate_count: usize,
    rng: &mut R,
) -> anyhow::Result<usize>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: RandomSource,
{
    let mut session = CommuteSession::new(candidate_count);
    let mut lines = input.lines();
    let mut written = 0usize;
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let office = match parse_office_line(&line) {
            Ok(Some(office)) => office,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping unreadable office");
                continue;
            }
        };

        let nearest = match session.on_reference_changed(office, rng) {
            Ok(Some(snapshot)) => {
                serde_json::to_writer(&mut *out, snapshot)?;
                writeln!(out)?;
                written += 1;
                snapshot.nearest
            }
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping invalid office");
                continue;
            }
        };

        if let Some(house) = nearest {
            if let Err(e) = announce_nearest(house, &OfflineGeocoder, &LogNotifier).await {
                tracing::warn!(error = %e, "nearest-house notice failed");
            }
        }
    }

    out.flush()?;
    Ok(written)
}
