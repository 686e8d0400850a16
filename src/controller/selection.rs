use thiserror::Error;

use crate::words::WordListDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select at least one word list")]
    NothingSelected,
    #[error("No words could be loaded. Please try again or select different lists.")]
    NoWords,
}

/// State of the word list picker
#[derive(Debug, Clone)]
pub struct ListSelection {
    lists: Vec<WordListDescriptor>,
    /// Selected ids, in the order they were picked
    selected: Vec<String>,
    cursor: usize,
    cancellable: bool,
    error: Option<SelectionError>,
}

impl ListSelection {
    /// Ids in `selected` that are not in `lists` are dropped.
    /// `cancellable` should be true when a word list is already loaded.
    pub fn new(lists: Vec<WordListDescriptor>, selected: Vec<String>, cancellable: bool) -> Self {
        let selected = selected
            .into_iter()
            .filter(|id| lists.iter().any(|list| &list.id == id))
            .collect();
        Self {
            lists,
            selected,
            cursor: 0,
            cancellable,
            error: None,
        }
    }

    pub fn lists(&self) -> &[WordListDescriptor] {
        &self.lists
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    pub fn error(&self) -> Option<SelectionError> {
        self.error
    }

    pub fn can_cancel(&self) -> bool {
        self.cancellable
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.lists.len() {
            self.cursor += 1;
        }
    }

    /// Flip the list under the cursor in or out of the selection
    pub fn toggle(&mut self) {
        let Some(list) = self.lists.get(self.cursor) else {
            return;
        };
        if let Some(i) = self.selected.iter().position(|id| id == &list.id) {
            self.selected.remove(i);
        } else {
            self.selected.push(list.id.clone());
        }
        self.error = None;
    }

    pub fn confirm(&mut self) -> Result<Vec<String>, SelectionError> {
        if self.selected.is_empty() {
            self.error = Some(SelectionError::NothingSelected);
            return Err(SelectionError::NothingSelected);
        }
        Ok(self.selected.clone())
    }

    /// Keep the picker open and tell the player nothing could be loaded
    pub fn report_no_words(&mut self) {
        self.error = Some(SelectionError::NoWords);
    }

    /// Human-readable line naming the selected lists
    pub fn summary(&self) -> String {
        describe_selection(&self.lists, &self.selected)
    }
}

/// "Selected lists: A, B", falling back to the id for unknown lists
pub fn describe_selection(lists: &[WordListDescriptor], ids: &[String]) -> String {
    if ids.is_empty() {
        return "No word lists selected".to_string();
    }
    let names: Vec<&str> = ids
        .iter()
        .map(|id| {
            lists
                .iter()
                .find(|list| &list.id == id)
                .map_or(id.as_str(), |list| list.name.as_str())
        })
        .collect();
    format!("Selected lists: {}", names.join(", "))
}
