//! `@name` placeholder templates.
//!
//! A template is split once into literal text and placeholders. A placeholder
//! is `@` followed by the longest run of Unicode letters, digits and `_`
//! (`@name`, `@名称`), so `@idx` is its own token and never a prefix match of `@id`. Substitution is
//! a single pass: values are inserted verbatim and never re-scanned, and a
//! placeholder without a value stays in the output as written.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Record;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"@([\p{L}\p{N}_]+)").expect("valid placeholder regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        for caps in placeholder_regex().captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(text[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(name.as_str().to_string()));
            last = whole.end();
        }
        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }
        Self { segments }
    }

    pub fn render(&self, fields: &Substitutions<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match fields.lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('@');
                        out.push_str(name);
                    }
                },
            }
        }
        out
    }
}

/// Values for one substitution: computed fields layered over a record.
///
/// Later computed fields shadow earlier ones, and all of them shadow the
/// record's own fields.
#[derive(Debug, Default)]
pub struct Substitutions<'a> {
    record: Option<&'a Record>,
    computed: Vec<(&'a str, Cow<'a, str>)>,
}

impl<'a> Substitutions<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self {
            record: Some(record),
            computed: Vec::new(),
        }
    }

    /// Only computed fields, no record.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.computed.push((name, value.into()));
        self
    }

    pub fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some((_, value)) = self.computed.iter().rev().find(|(key, _)| *key == name) {
            return Some(Cow::Borrowed(value.as_ref()));
        }
        self.record
            .and_then(|record| record.text(name))
            .map(Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Record {
        Record::try_from(json!({"id": 7, "idx": "x", "name": "@id", "flag": true})).unwrap()
    }

    #[test]
    fn test_exact_token_match() {
        let record = record();
        let out = Template::parse("@id/@idx/@ids").render(&Substitutions::new(&record));
        assert_eq!(out, "7/x/@ids");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let record = record();
        let out = Template::parse("[@name]").render(&Substitutions::new(&record));
        assert_eq!(out, "[@id]");
    }

    #[test]
    fn test_computed_fields_shadow_record_fields() {
        let record = record();
        let fields = Substitutions::new(&record).with("id", "a").with("id", "b");
        assert_eq!(Template::parse("@id @flag").render(&fields), "b 1");
    }

    #[test]
    fn test_non_ascii_field_names() {
        let record = Record::try_from(json!({"名称": "手机", "é": 1})).unwrap();
        let out = Template::parse("<@名称|@é|@名>").render(&Substitutions::new(&record));
        assert_eq!(out, "<手机|1|@名>");
    }

    #[test]
    fn test_unmatched_and_bare_at_are_verbatim() {
        let out = Template::parse("mail me @ home: a@b.c @").render(&Substitutions::empty());
        assert_eq!(out, "mail me @ home: a@b.c @");
    }
}
