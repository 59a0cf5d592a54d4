//! Constants Module - Single Source of Truth
//!
//! Environment variable names, defaults and the fixed report messages used
//! across the crate.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "TokenDoctor";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for HTTP requests
pub const USER_AGENT: &str = "TokenDoctor/0.1.0";

// ============================================
// RPC CONSTANTS
// ============================================

/// Default timeout for the whole simulation round trip (seconds)
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

/// Block tag used for every read
pub const BLOCK_TAG_LATEST: &str = "latest";

/// `eth_getCode` answer for an address without code
pub const EMPTY_CODE: &str = "0x";

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

pub const ENV_RPC_URL: &str = "RPC_URL";
pub const ENV_DOCTOR_ADDRESS: &str = "DOCTOR_ADDRESS";
pub const ENV_WETH_ADDRESS: &str = "WETH_ADDRESS";
pub const ENV_V3_ROUTER: &str = "UNISWAP_V3_ROUTER";
pub const ENV_V2_ROUTER: &str = "UNISWAP_V2_ROUTER";
pub const ENV_SENDER: &str = "SENDER";
pub const ENV_SIMULATE_AMOUNT: &str = "SIMULATE_AMOUNT_ETH";
pub const ENV_RPC_TIMEOUT: &str = "RPC_TIMEOUT_SECS";
pub const ENV_ARTIFACT_PATH: &str = "DOCTOR_ARTIFACT_PATH";

/// Helper bytecode as an inline hex string (used when no artifact is present)
pub const ENV_DOCTOR_BYTECODE: &str = "DOCTOR_BYTECODE";

// ============================================
// SIMULATION DEFAULTS
// ============================================

/// Notional spent on the simulated buy, in ether
pub const DEFAULT_SIMULATE_AMOUNT_ETH: &str = "0.1";

/// Fee tier used when a V3 request does not name one (0.3%)
pub const DEFAULT_V3_FEE_TIER: u32 = 3000;

/// Largest value representable as `uint24`
pub const MAX_FEE_TIER: u32 = 0x00FF_FFFF;

/// Compiled helper contract location relative to the backend working dir
pub const DEFAULT_ARTIFACT_PATH: &str =
    "../contracts/artifacts/contracts/TokenDoctor.sol/TokenDoctor.json";

// ============================================
// RISK RULES
// ============================================

/// Sell tax above this (scaled x100, so 3000 = 30.00%) is HIGH risk
pub const HIGH_SELL_TAX_THRESHOLD: u64 = 3000;

/// Tax values are scaled by this factor on-chain
pub const TAX_SCALE: u64 = 100;

// ============================================
// REPORT MESSAGES
// ============================================

pub const MSG_NO_REVERT: &str = "Contract did not revert with result";
pub const MSG_DECODE_FAILED: &str = "Unknown Revert Format / Decode Failed";
pub const MSG_INVALID_TOKEN: &str = "Invalid token address";
pub const MSG_TOKEN_REQUIRED: &str = "Token address is required";

// ============================================
// API SERVER
// ============================================

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8080;
