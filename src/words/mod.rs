//! Word list sources and merging

pub mod source;

pub use source::{
    DEFAULT_INDEX_FILE, DEFAULT_LISTS_DIR, DirWordSource, StaticWordSource, WordListDescriptor,
    WordListError, WordSource, load_selected,
};
