use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Formal,
    Casual,
    Concise,
}

impl Style {
    /// Response order.
    pub const ALL: [Style; 3] = [Style::Formal, Style::Casual, Style::Concise];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Formal => "formal",
            Style::Casual => "casual",
            Style::Concise => "concise",
        }
    }

    /// Completion label the prompt ends on, e.g. `Formal:`.
    pub fn label(self) -> &'static str {
        match self {
            Style::Formal => "Formal:",
            Style::Casual => "Casual:",
            Style::Concise => "Concise:",
        }
    }

    /// Few-shot prompt asking the model to rewrite `text` in this style.
    pub fn prompt(self, text: &str) -> String {
        match self {
            Style::Formal => format!(
                r#"Rewrite this headline in a formal, professional tone. Use sophisticated vocabulary and complete sentences.

Original: "AI is transforming businesses worldwide"
Formal: "Artificial Intelligence is revolutionizing global industries"

Original: "New study shows coffee is healthy"
Formal: "Recent research indicates the beneficial properties of coffee consumption"

Now rewrite this headline in formal style:
Original: "{text}"
Formal:"#
            ),
            Style::Casual => format!(
                r#"Rewrite this headline in a casual, conversational tone. Use friendly language and feel free to use exclamation marks.

Original: "AI is transforming businesses worldwide"
Casual: "AI is changing the way businesses work everywhere!"

Original: "New study shows coffee is healthy"
Casual: "Turns out coffee is actually good for you!"

Now rewrite this headline in casual style:
Original: "{text}"
Casual:"#
            ),
            Style::Concise => format!(
                r#"Rewrite this headline in the most concise form possible. Use 3-5 words maximum. Remove all unnecessary words while keeping the core meaning.

Original: "AI is transforming businesses worldwide"
Concise: "AI transforms industries"

Original: "New study shows coffee is healthy"
Concise: "Coffee benefits confirmed"

Now rewrite this headline in concise style (3-5 words only):
Original: "{text}"
Concise:"#
            ),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
