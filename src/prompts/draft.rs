use super::numbered;
use crate::schema::Schema;

const INTRO: &str = "You are a viral ghostwriter for X (Twitter). Rewrite the following draft tweet to maximize engagement, keeping the core message but improving the hook and format.";
const STYLES: &[&str] = &[
    "Hook-driven (Clickbait/Curiosity)",
    "Value-driven (Educational/Clear)",
    "Casual/Punchy (Relatable)",
];

pub fn build_prompt(draft: &str) -> String {
    format!(
        "{INTRO}\n\nDraft: \"{draft}\"\n\nProvide {count} distinct variations:\n{styles}\n",
        count = STYLES.len(),
        styles = numbered(STYLES),
    )
}

pub fn schema() -> Schema {
    Schema::array(Schema::object([
        ("style", Schema::string()),
        ("text", Schema::string()),
        ("reasoning", Schema::string()),
    ]))
}
