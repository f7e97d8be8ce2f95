use crate::types::AxisSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static AXIS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^AXIS\s+(\S+)").expect("valid AXIS pattern"));

// The field ends at the first `]`; brackets inside field names are not supported.
static GROUP_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^GROUP\s*\[([^\]]*)\]").expect("valid GROUP pattern"));

/// Why a non-blank line contributed nothing to the [`AxisSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Neither an `AXIS` nor a `GROUP` line
    Unrecognized,

    /// `GROUP` line before any `AXIS` line
    GroupOutsideAxis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-indexed line number in the clause
    pub line_no: usize,

    /// Trimmed line text
    pub text: String,

    pub reason: SkipReason,
}

/// Parse result with the lines the parser chose to ignore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub spec: AxisSpec,
    pub skipped: Vec<SkippedLine>,
}

enum Line<'a> {
    Axis(&'a str),
    Group(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = AXIS_LINE.captures(line) {
        if let Some(name) = caps.get(1) {
            return Line::Axis(name.as_str());
        }
    }
    if let Some(caps) = GROUP_LINE.captures(line) {
        if let Some(field) = caps.get(1) {
            return Line::Group(field.as_str());
        }
    }
    Line::Other
}

/// Parse an axis clause into an [`AxisSpec`]. Never fails.
pub fn parse(text: &str) -> AxisSpec {
    parse_with_report(text).spec
}

/// Parse an axis clause, also returning every non-blank line that was ignored
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut spec = AxisSpec::new();
    let mut skipped = Vec::new();
    let mut current_axis: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let reason = match classify(line) {
            Line::Axis(name) => {
                let name = name.to_uppercase();
                log::trace!("clause line {}: axis {name}", idx + 1);
                spec.ensure_axis(&name);
                current_axis = Some(name);
                continue;
            }
            Line::Group(field) => match current_axis.as_deref() {
                Some(axis) => {
                    log::trace!("clause line {}: group [{field}] on {axis}", idx + 1);
                    spec.push_field(axis, field.to_string());
                    continue;
                }
                None => SkipReason::GroupOutsideAxis,
            },
            Line::Other => SkipReason::Unrecognized,
        };

        log::debug!("Skipping clause line {} ({reason:?}): {line}", idx + 1);
        skipped.push(SkippedLine {
            line_no: idx + 1,
            text: line.to_string(),
            reason,
        });
    }

    ParseReport { spec, skipped }
}
