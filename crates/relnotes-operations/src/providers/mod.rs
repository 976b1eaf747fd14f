mod changelog;
mod changeset_io;
mod fragment_store;
mod project;

pub use changelog::FileSystemChangelogWriter;
pub use changeset_io::FileSystemChangesetReader;
pub use fragment_store::FileSystemFragmentStore;
pub use project::FileSystemProjectProvider;
