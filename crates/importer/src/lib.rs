pub mod error;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use traits::{ActivityImporter, ImportContext};

pub use sources::strava::{
    ActivitySummary, StravaAthlete, StravaClient, StravaConfig, StravaImporter,
};
