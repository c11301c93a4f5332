// Every message starts with its numeric code so indexers and clients can map
// a failed transaction back to the registry error table.

pub const ERR_NOT_AUTHORIZED: &str = "100: not authorized";
pub const ERR_INVALID_PETITION_ID: &str = "101: invalid petition id";
pub const ERR_INVALID_SUPPORTER: &str = "102: invalid supporter";
pub const ERR_ALREADY_SUPPORTED: &str = "103: already supported";
pub const ERR_PETITION_NOT_FOUND: &str = "104: petition not found";
pub const ERR_INVALID_TIMESTAMP: &str = "105: invalid timestamp";
pub const ERR_AUTHORITY_NOT_VERIFIED: &str = "106: authority not verified";
pub const ERR_INVALID_COUNT: &str = "107: invalid count";
pub const ERR_INVALID_THRESHOLD: &str = "108: invalid threshold";
pub const ERR_MAX_PETITIONS_EXCEEDED: &str = "109: max petitions exceeded";
pub const ERR_INVALID_STATUS: &str = "110: invalid status";
pub const ERR_INVALID_UPDATE_PARAM: &str = "111: invalid update param";
pub const ERR_UPDATE_NOT_ALLOWED: &str = "112: update not allowed";
pub const ERR_INVALID_LOCATION: &str = "113: invalid location";
pub const ERR_INVALID_CURRENCY: &str = "114: invalid currency";
pub const ERR_INVALID_GRACE_PERIOD: &str = "115: invalid grace period";
pub const ERR_INVALID_INTEREST_RATE: &str = "116: invalid interest rate";
pub const ERR_INVALID_GROUP_TYPE: &str = "117: invalid group type";
pub const ERR_SUPPORT_ALREADY_EXISTS: &str = "118: support already exists";
pub const ERR_INVALID_MIN_SUPPORT: &str = "119: invalid min support";
pub const ERR_INVALID_MAX_SUPPORT: &str = "120: invalid max support";

/// Attached EGLD differs from the current tracking fee.
pub const ERR_FEE_MISMATCH: &str = "fee payment does not match tracking fee";
