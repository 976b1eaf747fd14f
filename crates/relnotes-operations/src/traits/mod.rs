mod changelog_writer;
mod changeset_io;
mod fragment_store;
mod project_provider;

pub use changelog_writer::ChangelogWriter;
pub use changeset_io::ChangesetReader;
pub use fragment_store::FragmentStore;
pub use project_provider::ProjectProvider;
