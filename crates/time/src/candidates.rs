use serde::{Serialize, Serializer, ser::SerializeMap};
use smallvec::SmallVec;

/// Source of a timestamp candidate, in population order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeLabel {
    Atime,
    Ctime,
    Mtime,
    NameTime,
    ProcessTime,
}

impl TimeLabel {
    pub const ALL: [TimeLabel; 5] = [
        TimeLabel::Atime,
        TimeLabel::Ctime,
        TimeLabel::Mtime,
        TimeLabel::NameTime,
        TimeLabel::ProcessTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeLabel::Atime => "atime",
            TimeLabel::Ctime => "ctime",
            TimeLabel::Mtime => "mtime",
            TimeLabel::NameTime => "nameTime",
            TimeLabel::ProcessTime => "processTime",
        }
    }
}

/// Labelled epoch timestamps kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimestampCandidates {
    entries: SmallVec<[(TimeLabel, f64); 5]>,
}

impl TimestampCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite `label`. An overwritten label keeps its position.
    pub fn insert(&mut self, label: TimeLabel, value: f64) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: TimeLabel) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, label: TimeLabel) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeLabel, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = TimeLabel> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }
}

impl FromIterator<(TimeLabel, f64)> for TimestampCandidates {
    fn from_iter<I: IntoIterator<Item = (TimeLabel, f64)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (label, value) in iter {
            out.insert(label, value);
        }
        out
    }
}

/// Serialized as a JSON object in insertion order.
impl Serialize for TimestampCandidates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order_and_overwrites_in_place() {
        let mut c = TimestampCandidates::new();
        c.insert(TimeLabel::Mtime, 3.0);
        c.insert(TimeLabel::Atime, 1.0);
        c.insert(TimeLabel::Mtime, 2.0);

        let got: Vec<_> = c.iter().collect();
        assert_eq!(got, vec![(TimeLabel::Mtime, 2.0), (TimeLabel::Atime, 1.0)]);
        assert_eq!(c.len(), 2);
        assert!(c.contains(TimeLabel::Atime));
        assert!(!c.contains(TimeLabel::NameTime));
    }

    #[test]
    fn serializes_as_ordered_object_with_camel_case_keys() {
        let c: TimestampCandidates = [
            (TimeLabel::Ctime, 5.5),
            (TimeLabel::NameTime, 1.0),
            (TimeLabel::ProcessTime, 9.0),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&c).expect("serialize");
        assert_eq!(json, r#"{"ctime":5.5,"nameTime":1.0,"processTime":9.0}"#);
    }

    #[test]
    fn label_names_match_serde_names() {
        for label in TimeLabel::ALL {
            let json = serde_json::to_string(&label).expect("serialize");
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }
}
