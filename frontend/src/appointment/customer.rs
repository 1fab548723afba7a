/// Everything the appointment form collects for one submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub child_name: String,
    /// `YYYY-MM-DD`, straight from the date picker.
    pub child_dob: String,
    pub message: String,
}

impl Customer {
    /// Copy with the name-like fields run through [`to_pascal_case`].
    pub fn normalized(&self) -> Customer {
        Customer {
            name: to_pascal_case(&self.name),
            address: to_pascal_case(&self.address),
            child_name: to_pascal_case(&self.child_name),
            ..self.clone()
        }
    }
}

/// Capitalizes every word and joins them without a separator,
/// so "john smith" becomes "JohnSmith".
pub fn to_pascal_case(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
