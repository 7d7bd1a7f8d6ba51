use crate::repeater::Repeater;

/// A word from the input text and the repeaters it has been tagged with.
///
/// Tags are only ever appended: scanning the same token twice leaves two
/// copies of each tag.
#[derive(Debug)]
pub struct Token {
    pub word: String,
    pub tags: Vec<Box<dyn Repeater>>,
}

impl Token {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(&mut self, repeater: Box<dyn Repeater>) {
        self.tags.push(repeater);
    }

    pub fn tags(&self) -> &[Box<dyn Repeater>] {
        &self.tags
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}
