pub mod compose;
pub mod filename_triplet;
pub mod input_source;

// --- public re-exports ---
// pub use compose::ComposedScreenshot;
// pub use filename_triplet::FilenameTriplet;
// pub use input_source::directory_path::DirectoryPath;
