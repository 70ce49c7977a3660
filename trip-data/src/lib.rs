mod loader;

pub use loader::{ProfileLoader, ProfileLoaderError, RateProfileRecord};
