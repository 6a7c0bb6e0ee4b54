// Emitted once per successful scheduled burn.
pub const EVENT_BURN_TYPE: &str = "reserve_burn";
pub const EVENT_BURN_KEY_AMOUNT: &str = "amount";
pub const EVENT_BURN_KEY_TIMESTAMP: &str = "timestamp";
pub const EVENT_BURN_KEY_ROUND: &str = "round";
pub const EVENT_BURN_KEY_TOTAL_SUPPLY: &str = "total_supply";

// Emitted when the manager rotates the burn authority.
pub const EVENT_AUTHORITY_TYPE: &str = "burn_authority_updated";
pub const EVENT_AUTHORITY_KEY_PREVIOUS: &str = "previous";
pub const EVENT_AUTHORITY_KEY_NEXT: &str = "next";
