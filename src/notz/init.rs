use crate::api::NotzApi;
use crate::model::NewNote;
use crate::store::fs::FileBackend;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Starter notes applied on the first-ever run against a storage
/// location, so a new install is not a blank screen. Never re-applied
/// after the user empties the notebook.
pub static DEFAULT_SEED: Lazy<Vec<NewNote>> = Lazy::new(|| {
    vec![
        NewNote::new(
            "Welcome to notz",
            "Notes you create here are stored locally and survive restarts. \
             Use the search box to filter by any text in a title or body.",
        ),
        NewNote::new(
            "Pages hold six notes",
            "Once you have more than six notes the list paginates. Deleting \
             the last note on a page steps you back to the previous one.",
        ),
        NewNote::new(
            "Notes are immutable",
            "There is no edit: a note can only be created and, after a \
             confirmation prompt, deleted. Keep them short and disposable.",
        ),
    ]
});

/// Resolve the data directory: an explicit override wins, otherwise the
/// platform-conventional location.
pub fn data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    ProjectDirs::from("com", "notz", "notz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".notz"))
}

/// Build the production API over a file backend, seeding on first run.
pub fn initialize(override_dir: Option<PathBuf>) -> NotzApi<FileBackend> {
    let backend = FileBackend::new(data_dir(override_dir));
    NotzApi::open(backend, &DEFAULT_SEED)
}
