use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobEntry {
    pub guid: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    // every newline removed, not only the text after the first one
    pub first_line_description: String,
}

impl JobEntry {
    pub fn summary_line(&self) -> String {
        format!(
            "{}.{} - {}.{}",
            self.guid, self.title, self.company, self.first_line_description
        )
    }
}
