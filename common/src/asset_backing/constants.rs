//! Asset Backing Constants
//!
//! Storage layout, domain-separation tags and economic limits.

// ===== Slot Derivation =====

/// Domain-separation tag hashed with the token address to locate its backing pool
pub const BACKING_POOL_DOMAIN_TAG: &[u8] = b"SmartDeFi-BackingPool";

/// Domain-separation tag hashed with the token address to locate its fee structure
pub const FEE_STRUCTURE_DOMAIN_TAG: &[u8] = b"SmartDeFi-Fees";

/// Slot bases are reduced modulo this bound (1e10)
pub const SLOT_BASE_MODULUS: u64 = 10_000_000_000;

// ===== Backing Pool Layout (offsets from the pool slot base) =====

pub const SLOT_TOTAL_BACKING: u64 = 0;
pub const SLOT_TOTAL_SUPPLY: u64 = 1;
pub const SLOT_BURNED_SUPPLY: u64 = 2;
pub const SLOT_BACKING_ASSET: u64 = 3;

/// Number of slots a pool record occupies
pub const BACKING_POOL_SLOT_COUNT: u64 = 4;

// ===== Fee Structure Layout (offsets from the fee slot base) =====

/// Fee components occupy offsets 0..FEE_COMPONENTS
pub const FEE_COMPONENTS: usize = 12;

/// Components per side: [0..6) buy side, [6..12) sell side
pub const FEE_COMPONENTS_PER_SIDE: usize = 6;

pub const SLOT_FEE_ONLY_SB: u64 = 12;
pub const SLOT_FEE_OWNER: u64 = 13;
pub const SLOT_FEE_ENABLE_LGE: u64 = 14;

// ===== Economic Limits =====

/// Basis points denominator (100% = 10000 bp)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Maximum summed fee per side, in basis points (500 bp = 5%)
pub const MAX_FEE_PER_SIDE_BPS: u64 = 500;
