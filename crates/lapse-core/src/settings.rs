use std::fmt;

use crate::error::{LapseError, Result};

/// An ordered, case-sensitive sectioned `key=value` document in the
/// RawTherapee processing profile (pp3) format.
///
/// Section order, key order and unrecognized keys are preserved across a
/// parse/serialize round trip, so rewritten profiles diff cleanly against
/// their authored sources and fields this tool does not understand are
/// carried through untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsDoc {
    sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl SettingsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a profile from text. Blank lines and `#`/`;` comment lines are
    /// skipped; a key outside any section or a line without `=` is an error.
    pub fn parse(text: &str) -> Result<SettingsDoc> {
        let mut doc = SettingsDoc::new();

        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                doc.sections.push(Section {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                LapseError::MalformedSettings(format!("line {}: expected key=value", lineno + 1))
            })?;

            let section = doc.sections.last_mut().ok_or_else(|| {
                LapseError::MalformedSettings(format!(
                    "line {}: key {:?} outside any section",
                    lineno + 1,
                    key.trim_end()
                ))
            })?;
            section
                .entries
                .push((key.trim_end().to_string(), value.trim_start().to_string()));
        }

        Ok(doc)
    }

    /// Raw string value of `key` in `section`, if present.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_f64(&self, section: &str, key: &str) -> Result<Option<f64>> {
        self.parsed(section, key, |v| v.parse::<f64>().ok())
    }

    pub fn get_u32(&self, section: &str, key: &str) -> Result<Option<u32>> {
        self.parsed(section, key, |v| v.parse::<u32>().ok())
    }

    /// Booleans are `true`/`false` in any ASCII case.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        self.parsed(section, key, |v| {
            if v.eq_ignore_ascii_case("true") {
                Some(true)
            } else if v.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
    }

    fn parsed<T>(&self, section: &str, key: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
        match self.get(section, key) {
            None => Ok(None),
            Some(raw) => parse(raw).map(Some).ok_or_else(|| LapseError::MalformedField {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// Set `key` in `section` to `value`, creating the section and/or key if
    /// missing. Existing section and key order is preserved; new sections
    /// and keys append.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();

        let section = match self.sections.iter_mut().find(|s| s.name == section) {
            Some(s) => s,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    entries: Vec::new(),
                });
                self.sections.last_mut().unwrap()
            }
        };

        match section.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => section.entries.push((key.to_string(), value)),
        }
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.iter().any(|s| s.name == section)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }
}

impl fmt::Display for SettingsDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{}={}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[Version]
AppVersion=5.8
Version=346

[White Balance]
Setting=Custom
Temperature=5500
Green=1.012

[Exposure]
Compensation=0.5
";

    #[test]
    fn parse_preserves_unknown_keys_and_order() {
        let doc = SettingsDoc::parse(SAMPLE).unwrap();
        assert_eq!(doc.get("Version", "AppVersion"), Some("5.8"));
        assert_eq!(doc.get("White Balance", "Setting"), Some("Custom"));

        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, ["Version", "White Balance", "Exposure"]);

        // Round trip is verbatim (serialization adds a trailing blank line).
        assert_eq!(doc.to_string(), format!("{SAMPLE}\n"));
        let again = SettingsDoc::parse(&doc.to_string()).unwrap();
        assert_eq!(again, doc);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let doc = SettingsDoc::parse(SAMPLE).unwrap();
        assert_eq!(doc.get("White Balance", "temperature"), None);
        assert_eq!(doc.get("white balance", "Temperature"), None);
    }

    #[test]
    fn typed_getters() {
        let doc = SettingsDoc::parse(SAMPLE).unwrap();
        assert_eq!(doc.get_f64("White Balance", "Temperature").unwrap(), Some(5500.0));
        assert_eq!(doc.get_f64("Exposure", "Compensation").unwrap(), Some(0.5));
        assert_eq!(doc.get_f64("Exposure", "Missing").unwrap(), None);

        // Present but unparsable is an error, not a silent None.
        assert!(doc.get_f64("White Balance", "Setting").is_err());
    }

    #[test]
    fn set_updates_in_place_and_appends() {
        let mut doc = SettingsDoc::parse(SAMPLE).unwrap();
        doc.set("White Balance", "Temperature", "6000");
        doc.set("Crop", "Enabled", "true");

        assert_eq!(doc.get("White Balance", "Temperature"), Some("6000"));
        assert_eq!(doc.get("Crop", "Enabled"), Some("true"));

        // Updated key keeps its position, new section appends at the end.
        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, ["Version", "White Balance", "Exposure", "Crop"]);
    }

    #[test]
    fn key_outside_section_rejected() {
        assert!(SettingsDoc::parse("Temperature=5500\n").is_err());
        assert!(SettingsDoc::parse("[Crop]\njunk line\n").is_err());
    }
}
