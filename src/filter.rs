//! Device filtering shared by the server API and the browser UI.
//!
//! Filter state lives in two URL query parameters:
//! - `query`: free text, matched case-insensitively against the product name
//! - `lines`: comma-joined product line ids; absent or empty means no filter

use std::collections::HashSet;
use std::fmt;

use device_types::Device;

/// Separator between line ids in the `lines` parameter.
const LINE_SEPARATOR: &str = ",";

/// Keep the first device seen for each distinct line id, in encounter order.
pub fn unique_lines(devices: &[Device]) -> Vec<Device> {
    let mut seen = HashSet::new();
    devices
        .iter()
        .filter(|device| seen.insert(device.line.id.as_str()))
        .cloned()
        .collect()
}

/// The selected product lines, decoded from the `lines` URL parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSelection {
    ids: Vec<String>,
}

impl LineSelection {
    /// Decode a comma-joined list of line ids.
    ///
    /// Empty segments are dropped, so `""` decodes to an empty selection
    /// rather than a selection holding one empty id.
    pub fn parse(encoded: &str) -> Self {
        let ids = encoded
            .split(LINE_SEPARATOR)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Encode for the `lines` parameter. An empty selection encodes to `""`.
    pub fn serialize(&self) -> String {
        self.ids.join(LINE_SEPARATOR)
    }

    pub fn contains(&self, line_id: &str) -> bool {
        self.ids.iter().any(|id| id == line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Remove `line_id` if selected, append it otherwise.
    pub fn toggle(&mut self, line_id: &str) {
        if let Some(pos) = self.ids.iter().position(|id| id == line_id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(line_id.to_string());
        }
    }

    /// Consuming variant of [`toggle`](Self::toggle).
    pub fn toggled(mut self, line_id: &str) -> Self {
        self.toggle(line_id);
        self
    }
}

impl fmt::Display for LineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Text query plus line selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    /// Case-folded query
    query: String,
    lines: LineSelection,
}

impl DeviceFilter {
    pub fn new(query: &str, lines: LineSelection) -> Self {
        Self {
            query: query.to_lowercase(),
            lines,
        }
    }

    /// Build from raw URL parameter values; `None` means the parameter is absent.
    pub fn from_params(query: Option<&str>, lines: Option<&str>) -> Self {
        Self::new(
            query.unwrap_or_default(),
            LineSelection::parse(lines.unwrap_or_default()),
        )
    }

    /// True when neither predicate restricts anything.
    pub fn is_noop(&self) -> bool {
        self.query.is_empty() && self.lines.is_empty()
    }

    pub fn matches(&self, device: &Device) -> bool {
        let name_matches = self.query.is_empty()
            || device.product.name.to_lowercase().contains(&self.query);
        let line_matches = self.lines.is_empty() || self.lines.contains(&device.line.id);
        name_matches && line_matches
    }

    /// Order-preserving subset of `devices` that match.
    pub fn apply(&self, devices: &[Device]) -> Vec<Device> {
        if self.is_noop() {
            return devices.to_vec();
        }
        devices
            .iter()
            .filter(|device| self.matches(device))
            .cloned()
            .collect()
    }
}
