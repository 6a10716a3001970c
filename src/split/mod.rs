pub mod codec;
pub mod consensus;
pub mod types;

pub use codec::{build_split, canonical_key, TEAM_SIZE};
pub use consensus::resolve;
pub use types::{ConsensusResult, Split, Submission};
