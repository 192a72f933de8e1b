use soroban_sdk::contracterror;

/// Error codes for the token ledger contract.
///
/// Each error carries a stable numeric code so clients can match on it after a
/// failed invocation. Codes are grouped by category:
///
/// **Ledger Operation Errors (100-199):**
/// - Balance checks and arithmetic failures during a transfer
///
/// **Lifecycle Errors (200-299):**
/// - Calls made before or after the one-time initialization
///
/// **Validation Errors (300-399):**
/// - Rejected metadata, supply or batch parameters
///
/// # Example Usage
///
/// ```rust
/// # use token_ledger::errors::Error;
/// fn report(result: Result<bool, Error>) {
///     match result {
///         Ok(_) => {}
///         Err(Error::InsufficientBalance) => {
///             // Surface to the user; the transfer had no effect.
///         }
///         Err(e) => {
///             let _ = (e as u32, e.code(), e.description());
///         }
///     }
/// }
/// ```
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== LEDGER OPERATION ERRORS =====
    /// Sender balance is lower than the requested amount
    InsufficientBalance = 100,
    /// Amount is negative
    InvalidAmount = 101,
    /// Balance arithmetic would overflow
    Overflow = 102,

    // ===== LIFECYCLE ERRORS =====
    /// Contract has not been initialized
    NotInitialized = 200,
    /// Contract has already been initialized
    AlreadyInitialized = 201,

    // ===== VALIDATION ERRORS =====
    /// Total supply is negative
    InvalidSupply = 300,
    /// Token name is empty or too long
    InvalidName = 301,
    /// Token symbol is empty or too long
    InvalidSymbol = 302,
    /// Decimals exceed the supported maximum
    InvalidDecimals = 303,
    /// Batch contains no transfers
    EmptyBatch = 304,
    /// Batch contains more transfers than allowed
    BatchTooLarge = 305,
}

impl Error {
    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Error::InsufficientBalance => "Insufficient balance for transfer",
            Error::InvalidAmount => "Amount must not be negative",
            Error::Overflow => "Balance arithmetic overflow",
            Error::NotInitialized => "Ledger is not initialized",
            Error::AlreadyInitialized => "Ledger is already initialized",
            Error::InvalidSupply => "Total supply must not be negative",
            Error::InvalidName => "Invalid token name",
            Error::InvalidSymbol => "Invalid token symbol",
            Error::InvalidDecimals => "Invalid token decimals",
            Error::EmptyBatch => "Batch contains no transfers",
            Error::BatchTooLarge => "Batch exceeds the maximum size",
        }
    }

    /// Get the error code as an UPPER_SNAKE_CASE identifier.
    ///
    /// Useful for structured logging and for clients that prefer string codes
    /// over the numeric discriminant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Error::InvalidAmount => "INVALID_AMOUNT",
            Error::Overflow => "OVERFLOW",
            Error::NotInitialized => "NOT_INITIALIZED",
            Error::AlreadyInitialized => "ALREADY_INITIALIZED",
            Error::InvalidSupply => "INVALID_SUPPLY",
            Error::InvalidName => "INVALID_NAME",
            Error::InvalidSymbol => "INVALID_SYMBOL",
            Error::InvalidDecimals => "INVALID_DECIMALS",
            Error::EmptyBatch => "EMPTY_BATCH",
            Error::BatchTooLarge => "BATCH_TOO_LARGE",
        }
    }
}
