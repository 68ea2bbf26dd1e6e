use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the required role, or the selector is not permitted
    /// for the caller's actor class.
    Unauthorized = 3,
    /// Operation attempted outside the state it is legal in.
    InvalidState = 4,
    AlreadyApproved = 5,
    NotApproved = 6,
    TransactionAlreadyExists = 7,
    TransactionNotFound = 8,
    FunctionAlreadyGranted = 9,
    FunctionNotGranted = 10,
    /// The signer registry reports zero signers, so no approval ratio exists.
    NoSigners = 11,
    DownstreamCallFailed = 12,
    InvalidWindow = 13,
}
