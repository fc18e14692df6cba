//! JSON rendering of the output document.
//!
//! Hand-rolled writer producing the 2-space-indented layout of
//! `JSON.stringify(value, null, 2)`, with keys in insertion order:
//!
//! ```json
//! {
//!   "Acme.Http.Response": {
//!     "file": "src/http/response.ts",
//!     "members": [
//!       "/** * Contains the HTTP response details. */"
//!     ]
//!   }
//! }
//! ```

use crate::model::OutputDocument;

pub fn render(doc: &OutputDocument) -> String {
    if doc.is_empty() {
        return "{}".to_string();
    }

    let mut out = String::new();
    out.push_str("{\n");

    let last = doc.len() - 1;
    for (i, (namespace, entry)) in doc.iter().enumerate() {
        out.push_str(&format!("  \"{}\": {{\n", json_escape(namespace)));
        out.push_str(&format!("    \"file\": \"{}\",\n", json_escape(&entry.file)));

        if entry.members.is_empty() {
            out.push_str("    \"members\": []\n");
        } else {
            out.push_str("    \"members\": [\n");
            for (j, member) in entry.members.iter().enumerate() {
                let comma = if j < entry.members.len() - 1 { "," } else { "" };
                out.push_str(&format!("      \"{}\"{}\n", json_escape(member), comma));
            }
            out.push_str("    ]\n");
        }

        let comma = if i < last { "," } else { "" };
        out.push_str(&format!("  }}{}\n", comma));
    }

    out.push('}');
    out
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            // Remaining control characters have no shorthand escape.
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputEntry;

    #[test]
    fn empty_document_renders_empty_object() {
        assert_eq!(render(&OutputDocument::new()), "{}");
    }

    #[test]
    fn single_entry_layout() {
        let mut doc = OutputDocument::new();
        doc.insert(
            "Acme.Http.Response".to_string(),
            OutputEntry {
                file: "src/http/response.ts".to_string(),
                members: vec![
                    "/** * First. */".to_string(),
                    "/** * Second. */".to_string(),
                ],
            },
        );

        assert_eq!(
            render(&doc),
            "{\n  \"Acme.Http.Response\": {\n    \"file\": \"src/http/response.ts\",\n    \"members\": [\n      \"/** * First. */\",\n      \"/** * Second. */\"\n    ]\n  }\n}"
        );
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        let mut doc = OutputDocument::new();
        doc.insert(
            "A.B".to_string(),
            OutputEntry {
                file: "a.ts".to_string(),
                members: vec!["line1\nline2 \"quoted\"".to_string()],
            },
        );

        let json = render(&doc);
        assert!(json.contains("\"line1\\nline2 \\\"quoted\\\"\""));
    }

    #[test]
    fn escapes_control_characters_as_valid_json() {
        let mut doc = OutputDocument::new();
        doc.insert(
            "A.B".to_string(),
            OutputEntry {
                file: "a.ts".to_string(),
                members: vec!["vertical\u{000b}tab and form\u{000c}feed".to_string()],
            },
        );

        let json = render(&doc);
        assert!(json.contains("\\u000b"));
        assert!(json.contains("\\f"));

        // The output must stay parseable and the member must survive intact.
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let member = value["A.B"]["members"][0].as_str().unwrap();
        assert_eq!(member, "vertical\u{000b}tab and form\u{000c}feed");
    }

    #[test]
    fn entries_render_in_insertion_order() {
        let mut doc = OutputDocument::new();
        doc.insert(
            "Z.Last.Alphabetically.First.Inserted".to_string(),
            OutputEntry {
                file: "z.ts".to_string(),
                members: vec!["m".to_string()],
            },
        );
        doc.insert(
            "A.First.Alphabetically".to_string(),
            OutputEntry {
                file: "a.ts".to_string(),
                members: vec!["m".to_string()],
            },
        );

        let json = render(&doc);
        let z = json.find("Z.Last.Alphabetically.First.Inserted").unwrap();
        let a = json.find("A.First.Alphabetically").unwrap();
        assert!(z < a);
    }

    #[test]
    fn round_trip_yields_equal_mapping() {
        let mut doc = OutputDocument::new();
        doc.insert(
            "Acme.Dictionaries.LogLevels".to_string(),
            OutputEntry {
                file: "log_levels.ts".to_string(),
                members: vec![
                    "/** * The log levels. */\nexport enum LogLevel".to_string(),
                    "/** * A dictionary. */\nexport const LogLevels".to_string(),
                ],
            },
        );
        doc.insert(
            "Acme.Http.Response".to_string(),
            OutputEntry {
                file: "response.ts".to_string(),
                members: vec!["/** * Doc. */constructor() {".to_string()],
            },
        );

        let value: serde_json::Value = serde_json::from_str(&render(&doc)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), doc.len());

        for (namespace, entry) in doc.iter() {
            let parsed = object.get(namespace).unwrap();
            assert_eq!(
                parsed.get("file").unwrap().as_str().unwrap(),
                entry.file
            );
            let members: Vec<&str> = parsed
                .get("members")
                .unwrap()
                .as_array()
                .unwrap()
                .iter()
                .map(|m| m.as_str().unwrap())
                .collect();
            let expected: Vec<&str> = entry.members.iter().map(String::as_str).collect();
            assert_eq!(members, expected);
        }
    }
}
