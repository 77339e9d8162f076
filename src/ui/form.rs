//! New-record input form state

/// One input field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Word,
    Description,
    Genre,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Word, Field::Description, Field::Genre];

    pub fn label(self) -> &'static str {
        match self {
            Field::Word => "Word",
            Field::Description => "Description",
            Field::Genre => "Genre",
        }
    }

    fn slot(self) -> usize {
        match self {
            Field::Word => 0,
            Field::Description => 1,
            Field::Genre => 2,
        }
    }
}

/// A complete, trimmed submission ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub description: String,
    pub genre: String,
}

/// Text typed into the three form fields. Editing always happens at the end
/// of a field.
#[derive(Debug, Default, Clone)]
pub struct EntryForm {
    values: [String; 3],
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    pub fn push(&mut self, field: Field, c: char) {
        self.values[field.slot()].push(c);
    }

    pub fn push_str(&mut self, field: Field, text: &str) {
        // Pasted newlines would end up inside a single CSV field
        let text = text.replace(['\r', '\n'], " ");
        self.values[field.slot()].push_str(&text);
    }

    /// Delete the last character of `field`
    pub fn pop(&mut self, field: Field) {
        self.values[field.slot()].pop();
    }

    /// Delete the last whitespace-separated word of `field`
    pub fn pop_word(&mut self, field: Field) {
        let value = &mut self.values[field.slot()];
        let kept = value.trim_end().len();
        value.truncate(kept);
        let cut = value.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        value.truncate(cut);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.values[field.slot()].clear();
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Trimmed field values, or `None` if any field is blank
    pub fn submission(&self) -> Option<Submission> {
        let [word, description, genre] = self.values.each_ref().map(|v| v.trim());
        if word.is_empty() || description.is_empty() || genre.is_empty() {
            return None;
        }
        Some(Submission {
            word: word.to_string(),
            description: description.to_string(),
            genre: genre.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}
