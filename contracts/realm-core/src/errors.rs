use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

/// Every failure a realm call can report.
///
/// `Fatal` marks a broken internal invariant (a logic defect), never bad
/// input; it renders with a `Fatal:` prefix so monitoring can tell the two
/// apart.
#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum GameError {
    Unauthorized(String, String),
    AlreadyMinted(String),
    AlreadyBeaten(u64),
    NotDiscovered(u64),
    AlreadyEquipped(u64),
    NotEquipped(u64),
    NotOwned(String, String),
    NotFound(String),
    InvalidStep,
    InvalidRandomWordsLength(u32, u32),
    InsufficientExplorerSlot(u64),
    InvalidInput(String),
    InvalidState(String),
    TransferBlocked(String),
    Reentrancy(String),
    InsufficientDeposit(String),
    Fatal(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(capability, caller) => {
                write!(f, "Unauthorized: {} required, called by {}", capability, caller)
            }
            Self::AlreadyMinted(what) => write!(f, "Already minted: {}", what),
            Self::AlreadyBeaten(id) => write!(f, "Already beaten: {}", id),
            Self::NotDiscovered(id) => write!(f, "Not discovered: {}", id),
            Self::AlreadyEquipped(id) => write!(f, "Already equipped: {}", id),
            Self::NotEquipped(id) => write!(f, "Not equipped: {}", id),
            Self::NotOwned(token, account) => write!(f, "Not owned: {} by {}", token, account),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidStep => write!(f, "Invalid step: must be greater than zero"),
            Self::InvalidRandomWordsLength(expected, actual) => write!(
                f,
                "Invalid random words length: expected {}, got {}",
                expected, actual
            ),
            Self::InsufficientExplorerSlot(town_id) => {
                write!(f, "Insufficient explorer slot in town {}", town_id)
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::TransferBlocked(msg) => write!(f, "Transfer blocked: {}", msg),
            Self::Reentrancy(msg) => write!(f, "Reentrancy: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Fatal(msg) => write!(f, "Fatal: {}", msg),
        }
    }
}

impl GameError {
    pub fn only_owner(caller: &AccountId) -> Self {
        Self::Unauthorized("owner".into(), caller.to_string())
    }

    pub fn owner_or_peer(peer: crate::ModuleKind, caller: &AccountId) -> Self {
        Self::Unauthorized(format!("owner or {} peer", peer.as_str()), caller.to_string())
    }

    pub fn not_owned(token: impl std::fmt::Display, account: &AccountId) -> Self {
        Self::NotOwned(token.to_string(), account.to_string())
    }

    pub fn not_initialized(module: crate::ModuleKind) -> Self {
        Self::InvalidState(format!("{} constants not initialized", module.as_str()))
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

impl From<realm_types::RollError> for GameError {
    fn from(err: realm_types::RollError) -> Self {
        match err {
            realm_types::RollError::InvalidRandomWordsLength { expected, actual } => {
                Self::InvalidRandomWordsLength(expected as u32, actual as u32)
            }
        }
    }
}
