pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod form;
pub mod lookup;
pub mod notice;
pub mod paths;
pub mod remote;
pub mod selection;
pub mod store;
pub mod types;
pub mod validate;

pub use config::Config;
pub use directory::{Directory, SubmitOutcome};
pub use error::{Result, WardbookError};
pub use form::{ProfileDraft, SubmitKind, SubmitPlan};
pub use lookup::{AnnotatedCandidate, FetchOutcome, LookupPager};
pub use notice::{Notice, NoticeLevel};
pub use remote::{HttpUserGateway, UserGateway};
pub use selection::SelectionController;
pub use store::RecordStore;
pub use types::{CandidatePage, Gender, RemoteCandidate, Role, UserRecord};
