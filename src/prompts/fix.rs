use super::numbered;
use crate::schema::Schema;
use crate::types::RiskFlag;

const REQUESTS: &[&str] = &[
    "A title for the fix.",
    "3 specific steps to take.",
    "If a tweet is needed (e.g. to restore engagement or apologize), provide a template. If no tweet is needed, leave template empty.",
];

pub fn build_prompt(flag: &RiskFlag) -> String {
    format!(
        "The user has a risk flag on their X account:\n\
         Title: {title}\n\
         Description: {description}\n\
         Severity: {severity}\n\n\
         Provide a specific remediation plan.\n{requests}\n",
        title = flag.title,
        description = flag.description,
        severity = flag.severity.as_str(),
        requests = numbered(REQUESTS),
    )
}

pub fn schema() -> Schema {
    Schema::object([
        ("title", Schema::string()),
        ("steps", Schema::array(Schema::string())),
        ("template", Schema::string()),
    ])
    .optional("template")
}
