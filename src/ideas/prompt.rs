use serde_json::Value;

pub const IDEA_COUNT: usize = 3;

/// Caller supplied subject, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Strings are taken as is and numbers in decimal form. Any other JSON
    /// value counts as no topic.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => Self::parse(&n.to_string()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn build_prompt(topic: &Topic) -> String {
    format!(
        "Give me 3 engaging YouTube content ideas about: \"{}\". \n\
         Return each on a new line, no numbering, short but catchy.",
        topic.as_str()
    )
}

/// Turns the model's free text into exactly [`IDEA_COUNT`] entries: one per
/// non-blank line, in order, padded with `Idea N` placeholders.
pub fn extract_ideas(raw: &str) -> Vec<String> {
    let mut ideas: Vec<String> = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(IDEA_COUNT)
        .map(str::to_string)
        .collect();

    while ideas.len() < IDEA_COUNT {
        ideas.push(format!("Idea {}", ideas.len() + 1));
    }

    ideas
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", &["Idea 1", "Idea 2", "Idea 3"])]
    #[case("\n  \n\t\n", &["Idea 1", "Idea 2", "Idea 3"])]
    #[case("A\nB", &["A", "B", "Idea 3"])]
    #[case("  only one  ", &["only one", "Idea 2", "Idea 3"])]
    #[case("one\r\ntwo\r\nthree\r\n", &["one", "two", "three"])]
    #[case("1\n\n2\n3\n4\n5", &["1", "2", "3"])]
    fn extracts_exactly_three(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_ideas(raw), expected);
    }

    #[test]
    fn extracted_ideas_are_trimmed_and_non_empty() {
        let ideas = extract_ideas("  first \n\n   \n second\t\n");
        assert_eq!(ideas.len(), IDEA_COUNT);
        for idea in &ideas {
            assert!(!idea.is_empty());
            assert_eq!(idea.trim(), idea);
        }
    }

    #[test]
    fn topic_is_trimmed() {
        assert_eq!(Topic::parse("  rust tips \n").unwrap().as_str(), "rust tips");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_topic_is_rejected(#[case] raw: &str) {
        assert!(Topic::parse(raw).is_none());
    }

    #[test]
    fn topic_from_json_values() {
        assert_eq!(Topic::from_json(&json!(" cats ")).unwrap().as_str(), "cats");
        assert_eq!(Topic::from_json(&json!(2024)).unwrap().as_str(), "2024");
        assert!(Topic::from_json(&json!(null)).is_none());
        assert!(Topic::from_json(&json!(true)).is_none());
        assert!(Topic::from_json(&json!({ "nested": "x" })).is_none());
        assert!(Topic::from_json(&json!(["a"])).is_none());
    }

    #[test]
    fn prompt_embeds_topic() {
        let prompt = build_prompt(&Topic::parse("home espresso").unwrap());
        assert_eq!(
            prompt,
            "Give me 3 engaging YouTube content ideas about: \"home espresso\". \n\
             Return each on a new line, no numbering, short but catchy."
        );
    }
}
