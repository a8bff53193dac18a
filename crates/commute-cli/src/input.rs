//! Parsing of user-supplied coordinates: candidate files and stdin lines.

use std::path::Path;

use anyhow::Context;
use commute_core::Coordinate;

/// Load candidate houses from a JSON array, or a YAML sequence for
/// `.yaml`/`.yml` files.
pub(crate) fn load_candidates(path: &Path) -> anyhow::Result<Vec<Coordinate>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read candidates file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let candidates: Vec<Coordinate> = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML candidates in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON candidates in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

/// Parse one `lat,lng` (or whitespace-separated) office selection.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub(crate) fn parse_office_line(line: &str) -> anyhow::Result<Option<Coordinate>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("expected `lat,lng`, got {line:?}");
    };

    let lat = lat
        .parse::<f64>()
        .with_context(|| format!("invalid latitude {lat:?}"))?;
    let lng = lng
        .parse::<f64>()
        .with_context(|| format!("invalid longitude {lng:?}"))?;

    Ok(Some(Coordinate::new(lat, lng)))
}
