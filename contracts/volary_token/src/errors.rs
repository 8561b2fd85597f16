use soroban_sdk::contracterror;

/// Failure kinds of the token, with stable `u32` codes.
///
/// `ZeroAddress` and `InsufficientBalance` are shared by several entry
/// points. The per-operation revert strings they stand for:
///
/// | Variant | Entry point | Reason |
/// |---|---|---|
/// | `ZeroAddress` | `transfer`, `transfer_from` | ERC20: transfer to the zero address |
/// | `ZeroAddress` | `approve`, `increase_allowance`, `decrease_allowance` | ERC20: approve to the zero address |
/// | `ZeroAddress` | `mint` | ERC20: mint to the zero address |
/// | `ZeroAddress` | `transfer_ownership` | Ownable: new owner is the zero address |
/// | `InsufficientBalance` | `transfer`, `transfer_from` | ERC20: transfer amount exceeds balance |
/// | `InsufficientBalance` | `burn`, `burn_from` | ERC20: burn amount exceeds balance |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    ZeroAddress = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    AllowanceUnderflow = 6,
    NotOwner = 7,
    Paused = 8,
    InvalidAmount = 9,
    Overflow = 10,
}

impl TokenError {
    /// Human-readable revert reason, stable across releases.
    pub const fn reason(&self) -> &'static str {
        match self {
            TokenError::AlreadyInitialized => "token: already initialized",
            TokenError::NotInitialized => "token: not initialized",
            TokenError::ZeroAddress => "ERC20: zero address",
            TokenError::InsufficientBalance => "ERC20: amount exceeds balance",
            TokenError::InsufficientAllowance => "ERC20: insufficient allowance",
            TokenError::AllowanceUnderflow => "ERC20: decreased allowance below zero",
            TokenError::NotOwner => "Ownable: caller is not the owner",
            TokenError::Paused => "Pausable: paused",
            TokenError::InvalidAmount => "token: negative amount",
            TokenError::Overflow => "token: arithmetic overflow",
        }
    }
}
